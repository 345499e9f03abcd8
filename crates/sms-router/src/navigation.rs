//! Redirect-following navigation driver.

use std::sync::Arc;

use tracing::{debug, warn};

use sms_core::config::RoutingConfig;
use sms_core::error::AppError;
use sms_core::result::AppResult;
use sms_core::traits::{Navigator, RouteResolver};
use sms_session::SessionStore;

use crate::guard::{GuardDecision, RouteGuard};
use crate::route::ResolvedRoute;
use crate::table::RouteTable;

/// Resolves a requested path to the view the user ends up on.
///
/// Record redirects are applied before the guard runs, as they are for the
/// `/`, role-root, and catch-all records. Each redirect, from a record or
/// from the guard, counts as one hop.
#[derive(Debug, Clone)]
pub struct Navigation {
    table: Arc<RouteTable>,
    guard: RouteGuard,
    max_redirects: usize,
}

impl Navigation {
    pub fn new(table: Arc<RouteTable>, guard: RouteGuard, max_redirects: usize) -> Self {
        Self {
            table,
            guard,
            max_redirects,
        }
    }

    /// The standard table guarded against `session`.
    pub fn standard(
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
        config: &RoutingConfig,
    ) -> Self {
        Self::new(
            Arc::new(RouteTable::standard(&config.login_path)),
            RouteGuard::new(session, navigator, config),
            config.max_redirects,
        )
    }

    /// The route table.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Navigate to `path`, returning the route finally shown.
    pub fn navigate(&self, path: &str) -> AppResult<ResolvedRoute> {
        let mut target = path.to_string();
        let mut hops = 0;

        loop {
            let route = self
                .table
                .resolve(&target)
                .ok_or_else(|| AppError::navigation(format!("No route matches '{target}'")))?;

            let next = match route.redirect() {
                Some(redirect) => redirect.to_string(),
                None => match self.guard.before_each(&route) {
                    GuardDecision::Allow => {
                        debug!(from = %path, to = %route.path, hops, "Navigation resolved");
                        return Ok(route);
                    }
                    GuardDecision::Redirect(next) => next,
                },
            };

            hops += 1;
            if hops > self.max_redirects {
                warn!(from = %path, last = %next, hops, "Redirect limit exceeded");
                return Err(AppError::navigation(format!(
                    "Too many redirects navigating to '{path}'"
                )));
            }
            debug!(from = %route.path, to = %next, "Redirecting");
            target = next;
        }
    }
}

impl RouteResolver for Navigation {
    fn resolve(&self, path: &str) -> AppResult<String> {
        self.navigate(path).map(|route| route.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use sms_core::traits::KeyValueStore;
    use sms_session::MemoryStore;
    use sms_session::keys;

    use crate::route::RouteRecord;

    #[derive(Debug)]
    struct NullNavigator;

    #[async_trait]
    impl Navigator for NullNavigator {
        fn set_title(&self, _title: &str) {}
        async fn prompt(&self, _message: &str) {}
        async fn replace(&self, _path: &str) {}
    }

    fn session(entries: &[(&str, &str)]) -> Arc<SessionStore> {
        let storage = Arc::new(MemoryStore::new());
        for (key, value) in entries {
            storage.set(key, value).unwrap();
        }
        Arc::new(SessionStore::rehydrate(storage).unwrap())
    }

    fn navigation(entries: &[(&str, &str)]) -> Navigation {
        Navigation::standard(
            session(entries),
            Arc::new(NullNavigator),
            &RoutingConfig::default(),
        )
    }

    #[test]
    fn test_anonymous_user_lands_on_login() {
        let nav = navigation(&[]);
        assert_eq!(nav.navigate("/").unwrap().path, "/login");
        assert_eq!(nav.navigate("/admin/log").unwrap().path, "/login");
        assert_eq!(nav.navigate("/nowhere").unwrap().path, "/login");
    }

    #[test]
    fn test_role_root_redirects_then_guard_redirects() {
        let nav = navigation(&[(keys::TOKEN, "t"), (keys::USER_TYPE, "advisor")]);
        assert_eq!(nav.navigate("/advisor").unwrap().path, "/advisor/dashboard");
        assert_eq!(nav.navigate("/admin").unwrap().path, "/advisor/dashboard");
    }

    #[test]
    fn test_redirect_loop_is_a_navigation_error() {
        let table = RouteTable::new(vec![
            RouteRecord::new("/a").redirect("/b"),
            RouteRecord::new("/b").redirect("/a"),
        ]);
        let guard = RouteGuard::new(
            session(&[]),
            Arc::new(NullNavigator),
            &RoutingConfig::default(),
        );
        let nav = Navigation::new(Arc::new(table), guard, 4);

        let err = nav.navigate("/a").unwrap_err();
        assert_eq!(err.kind, sms_core::ErrorKind::Navigation);
    }

    #[test]
    fn test_unmatched_path_without_catch_all_fails() {
        let guard = RouteGuard::new(
            session(&[]),
            Arc::new(NullNavigator),
            &RoutingConfig::default(),
        );
        let nav = Navigation::new(Arc::new(RouteTable::new(Vec::new())), guard, 4);
        assert!(nav.navigate("/login").is_err());
    }

    #[test]
    fn test_resolver_returns_guarded_path() {
        let nav = navigation(&[(keys::TOKEN, "t"), (keys::USER_TYPE, "student")]);
        let resolver: &dyn RouteResolver = &nav;
        assert_eq!(resolver.resolve("/login").unwrap(), "/login");
        assert_eq!(resolver.resolve("/admin/log").unwrap(), "/student/dashboard");
    }
}
