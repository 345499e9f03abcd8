//! Per-navigation authorization.

use std::sync::Arc;

use tracing::debug;

use sms_core::config::RoutingConfig;
use sms_core::traits::Navigator;
use sms_session::SessionStore;

use crate::route::ResolvedRoute;

/// Outcome of the guard for one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Proceed to the target.
    Allow,
    /// Go to this path instead.
    Redirect(String),
}

/// Checks every navigation against the session.
///
/// 1. The page title becomes the target's title, or the default title.
/// 2. Targets with `requires_auth == Some(false)` are allowed.
/// 3. Without a token, the user goes to the login route.
/// 4. The first record in the chain that declares a role decides; without
///    one the target is allowed.
/// 5. On a role mismatch the user goes to the dashboard of their own type,
///    or to login when the type is unknown.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
    login_path: String,
    default_title: String,
}

impl RouteGuard {
    pub fn new(
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
        config: &RoutingConfig,
    ) -> Self {
        Self {
            session,
            navigator,
            login_path: config.login_path.clone(),
            default_title: config.default_title.clone(),
        }
    }

    /// Decide whether navigation to `to` may proceed.
    pub fn before_each(&self, to: &ResolvedRoute) -> GuardDecision {
        let meta = to.meta();
        let title = meta
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.default_title);
        self.navigator.set_title(title);

        if meta.requires_auth == Some(false) {
            return GuardDecision::Allow;
        }

        let session = self.session.snapshot();
        if session.token.is_none() {
            debug!(path = %to.path, "No session, redirecting to login");
            return GuardDecision::Redirect(self.login_path.clone());
        }

        let Some(required) = to.required_role() else {
            return GuardDecision::Allow;
        };

        match session.user_type {
            Some(user_type) if user_type == required => GuardDecision::Allow,
            Some(user_type) => {
                debug!(
                    path = %to.path,
                    required = %required,
                    actual = %user_type,
                    "Role mismatch, redirecting to own dashboard"
                );
                GuardDecision::Redirect(user_type.dashboard_path().to_string())
            }
            None => GuardDecision::Redirect(self.login_path.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use sms_core::traits::KeyValueStore;
    use sms_session::MemoryStore;
    use sms_session::keys;

    use crate::table::RouteTable;

    #[derive(Debug, Default)]
    struct TitleRecorder {
        titles: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Navigator for TitleRecorder {
        fn set_title(&self, title: &str) {
            self.titles.lock().unwrap().push(title.to_string());
        }
        async fn prompt(&self, _message: &str) {}
        async fn replace(&self, _path: &str) {}
    }

    fn guard_with(entries: &[(&str, &str)]) -> (Arc<TitleRecorder>, RouteGuard) {
        let storage = Arc::new(MemoryStore::new());
        for (key, value) in entries {
            storage.set(key, value).unwrap();
        }
        let session = Arc::new(SessionStore::rehydrate(storage).unwrap());
        let navigator = Arc::new(TitleRecorder::default());
        let guard = RouteGuard::new(session, navigator.clone(), &RoutingConfig::default());
        (navigator, guard)
    }

    fn resolve(path: &str) -> ResolvedRoute {
        RouteTable::standard("/login").resolve(path).unwrap()
    }

    #[test]
    fn test_public_route_allowed_without_session() {
        let (navigator, guard) = guard_with(&[]);
        assert_eq!(guard.before_each(&resolve("/login")), GuardDecision::Allow);
        assert_eq!(*navigator.titles.lock().unwrap(), vec!["登录"]);
    }

    #[test]
    fn test_protected_route_without_token_goes_to_login() {
        let (_, guard) = guard_with(&[(keys::USER_TYPE, "admin")]);
        assert_eq!(
            guard.before_each(&resolve("/admin/dashboard")),
            GuardDecision::Redirect("/login".into())
        );
    }

    #[test]
    fn test_student_on_admin_route_goes_to_student_dashboard() {
        let (_, guard) = guard_with(&[(keys::TOKEN, "t"), (keys::USER_TYPE, "student")]);
        assert_eq!(
            guard.before_each(&resolve("/admin/log")),
            GuardDecision::Redirect("/student/dashboard".into())
        );
    }

    #[test]
    fn test_matching_role_allowed() {
        let (navigator, guard) = guard_with(&[(keys::TOKEN, "t"), (keys::USER_TYPE, "advisor")]);
        assert_eq!(
            guard.before_each(&resolve("/advisor/award-review")),
            GuardDecision::Allow
        );
        assert_eq!(*navigator.titles.lock().unwrap(), vec!["奖励审批"]);
    }

    #[test]
    fn test_token_without_user_type_goes_to_login_on_role_route() {
        let (_, guard) = guard_with(&[(keys::TOKEN, "t")]);
        assert_eq!(
            guard.before_each(&resolve("/student/award")),
            GuardDecision::Redirect("/login".into())
        );
    }

    #[test]
    fn test_untitled_route_gets_default_title() {
        let (navigator, guard) = guard_with(&[(keys::TOKEN, "t")]);
        assert_eq!(guard.before_each(&resolve("/")), GuardDecision::Allow);
        assert_eq!(*navigator.titles.lock().unwrap(), vec!["学生学籍管理系统"]);
    }
}
