//! Pagination types for `/page` endpoints.

use serde::{Deserialize, Serialize};

/// Default page size used by the backend when none is sent.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Page selection sent as query parameters (`pageNum`, `pageSize`).
///
/// Entity-specific query structs carry the same two fields next to their
/// filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    /// Page number (1-based).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_num: Option<u64>,
    /// Number of records per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
}

impl PageQuery {
    /// Create a page query; `page` is clamped to at least 1.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page_num: Some(page.max(1)),
            page_size: Some(page_size.max(1)),
        }
    }
}

/// A page of records as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    /// The records on this page.
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
    /// Total number of records across all pages.
    #[serde(default)]
    pub total: u64,
    /// Page size.
    #[serde(default)]
    pub size: u64,
    /// Current page number (1-based).
    #[serde(default)]
    pub current: u64,
    /// Total number of pages.
    #[serde(default)]
    pub pages: u64,
}

impl<T> PageResult<T> {
    /// Whether a page after this one exists.
    pub fn has_next(&self) -> bool {
        self.current < self.pages
    }

    /// Whether a page before this one exists.
    pub fn has_previous(&self) -> bool {
        self.current > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_omits_unset_fields() {
        let q = PageQuery::default();
        assert_eq!(serde_json::to_string(&q).unwrap(), "{}");
        let q = PageQuery::new(0, 20);
        assert_eq!(
            serde_json::to_string(&q).unwrap(),
            r#"{"pageNum":1,"pageSize":20}"#
        );
    }

    #[test]
    fn test_page_navigation_flags() {
        let page: PageResult<u32> = serde_json::from_str(
            r#"{"records":[1,2],"total":12,"size":2,"current":1,"pages":6}"#,
        )
        .unwrap();
        assert!(page.has_next());
        assert!(!page.has_previous());
    }
}
