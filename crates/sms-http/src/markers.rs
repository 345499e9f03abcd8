//! Message markers that identify a server-reported expired session.

use sms_core::config::HttpConfig;

/// The configured list of expiry marker phrases.
///
/// Some backend paths report an invalid or missing token through a normal
/// failure envelope (`code` 500 with "登录已过期，请重新登录") instead of a
/// 401. A message containing any marker, compared case-sensitively, is
/// treated as an authentication failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiryMarkers {
    markers: Vec<String>,
}

impl ExpiryMarkers {
    /// Build from an explicit list. Empty entries are dropped; an empty
    /// marker would match every message.
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers
                .into_iter()
                .map(Into::into)
                .filter(|m: &String| !m.is_empty())
                .collect(),
        }
    }

    /// Build from the pipeline configuration.
    pub fn from_config(config: &HttpConfig) -> Self {
        Self::new(config.expiry_markers.iter().cloned())
    }

    /// Whether `message` contains any marker.
    pub fn matches(&self, message: &str) -> bool {
        self.markers.iter().any(|m| message.contains(m.as_str()))
    }

    /// The marker that matched `message`, if any.
    pub fn find(&self, message: &str) -> Option<&str> {
        self.markers
            .iter()
            .find(|m| message.contains(m.as_str()))
            .map(String::as_str)
    }

    /// The markers, in configured order.
    pub fn as_slice(&self) -> &[String] {
        &self.markers
    }
}

impl Default for ExpiryMarkers {
    fn default() -> Self {
        Self::from_config(&HttpConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_markers_match_backend_messages() {
        let markers = ExpiryMarkers::default();
        assert!(markers.matches("登录已过期，请重新登录"));
        assert!(markers.matches("未登录，请先登录"));
        assert!(markers.matches("Token invalid"));
        assert!(markers.matches("身份验证失败"));
        assert!(!markers.matches("服务器内部错误"));
        assert!(!markers.matches("用户不存在"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let markers = ExpiryMarkers::new(["Token"]);
        assert!(markers.matches("Token expired"));
        assert!(!markers.matches("TOKEN EXPIRED"));
    }

    #[test]
    fn test_empty_markers_are_dropped() {
        let markers = ExpiryMarkers::new(["", "未登录"]);
        assert_eq!(markers.as_slice().len(), 1);
        assert!(!markers.matches("anything"));
        assert_eq!(markers.find("未登录"), Some("未登录"));
    }
}
