//! Route records and resolved routes.

use sms_entity::UserType;

/// Authorization and display metadata of a route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Page title.
    pub title: Option<String>,
    /// `Some(false)` opens the route to anonymous users; absent means
    /// authentication is required.
    pub requires_auth: Option<bool>,
    /// User type the route is restricted to; absent means any signed-in user.
    pub role: Option<UserType>,
}

/// A node of the static route tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    /// Absolute path for top-level records, a relative segment for children.
    /// `*` matches any path.
    pub path: String,
    /// Route name.
    pub name: Option<String>,
    pub meta: RouteMeta,
    /// Path to send the user to when this record is the navigation target.
    pub redirect: Option<String>,
    pub children: Vec<RouteRecord>,
}

impl RouteRecord {
    /// Wildcard path segment.
    pub const CATCH_ALL: &'static str = "*";

    /// A record at `path` with no metadata.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            meta: RouteMeta::default(),
            redirect: None,
            children: Vec::new(),
        }
    }

    /// A record matching every path, redirecting to `target`.
    pub fn catch_all(target: impl Into<String>) -> Self {
        Self::new(Self::CATCH_ALL).redirect(target)
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.meta.title = Some(title.into());
        self
    }

    pub fn requires_auth(mut self, requires_auth: bool) -> Self {
        self.meta.requires_auth = Some(requires_auth);
        self
    }

    pub fn role(mut self, role: UserType) -> Self {
        self.meta.role = Some(role);
        self
    }

    pub fn redirect(mut self, target: impl Into<String>) -> Self {
        self.redirect = Some(target.into());
        self
    }

    pub fn children(mut self, children: Vec<RouteRecord>) -> Self {
        self.children = children;
        self
    }

    /// Whether this is the wildcard record.
    pub fn is_catch_all(&self) -> bool {
        self.path == Self::CATCH_ALL
    }
}

/// One record of a matched chain, with its path made absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRecord {
    pub path: String,
    pub name: Option<String>,
    pub meta: RouteMeta,
    pub redirect: Option<String>,
}

impl MatchedRecord {
    pub(crate) fn from_record(record: &RouteRecord, path: String) -> Self {
        Self {
            path,
            name: record.name.clone(),
            meta: record.meta.clone(),
            redirect: record.redirect.clone(),
        }
    }
}

/// A path resolved against the route table.
///
/// `matched` runs from the outermost record to the navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// The normalized requested path.
    pub path: String,
    pub matched: Vec<MatchedRecord>,
}

impl ResolvedRoute {
    /// The navigation target record.
    pub fn leaf(&self) -> Option<&MatchedRecord> {
        self.matched.last()
    }

    /// Name of the target record.
    pub fn name(&self) -> Option<&str> {
        self.leaf().and_then(|r| r.name.as_deref())
    }

    /// Redirect declared by the target record.
    pub fn redirect(&self) -> Option<&str> {
        self.leaf().and_then(|r| r.redirect.as_deref())
    }

    /// Metadata merged along the chain; inner records override outer ones.
    pub fn meta(&self) -> RouteMeta {
        self.matched
            .iter()
            .fold(RouteMeta::default(), |mut merged, record| {
                if record.meta.title.is_some() {
                    merged.title = record.meta.title.clone();
                }
                if record.meta.requires_auth.is_some() {
                    merged.requires_auth = record.meta.requires_auth;
                }
                if record.meta.role.is_some() {
                    merged.role = record.meta.role;
                }
                merged
            })
    }

    /// The role restriction of the first record in the chain declaring one.
    pub fn required_role(&self) -> Option<UserType> {
        self.matched.iter().find_map(|r| r.meta.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, meta: RouteMeta) -> MatchedRecord {
        MatchedRecord {
            path: path.to_string(),
            name: None,
            meta,
            redirect: None,
        }
    }

    #[test]
    fn test_meta_merges_child_over_parent() {
        let route = ResolvedRoute {
            path: "/admin/log".into(),
            matched: vec![
                record(
                    "/admin",
                    RouteMeta {
                        title: None,
                        requires_auth: Some(true),
                        role: Some(UserType::Admin),
                    },
                ),
                record(
                    "/admin/log",
                    RouteMeta {
                        title: Some("操作日志".into()),
                        ..RouteMeta::default()
                    },
                ),
            ],
        };

        let meta = route.meta();
        assert_eq!(meta.title.as_deref(), Some("操作日志"));
        assert_eq!(meta.requires_auth, Some(true));
        assert_eq!(route.required_role(), Some(UserType::Admin));
    }

    #[test]
    fn test_builder() {
        let r = RouteRecord::new("/login")
            .name("Login")
            .title("登录")
            .requires_auth(false);
        assert_eq!(r.meta.requires_auth, Some(false));
        assert!(!r.is_catch_all());
        assert!(RouteRecord::catch_all("/login").is_catch_all());
    }
}
