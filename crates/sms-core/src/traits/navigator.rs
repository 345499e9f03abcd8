//! Navigation and notification ports.

use async_trait::async_trait;

use crate::result::AppResult;

/// The host's navigation surface.
#[async_trait]
pub trait Navigator: Send + Sync + std::fmt::Debug + 'static {
    /// Set the document/page title.
    fn set_title(&self, title: &str);

    /// Show a blocking prompt and resolve once the user acknowledged it.
    async fn prompt(&self, message: &str);

    /// Navigate to `path`, replacing the current history entry.
    async fn replace(&self, path: &str);
}

/// Transient user-visible notifications (toasts).
pub trait Notifier: Send + Sync + std::fmt::Debug + 'static {
    /// Show an error notification.
    fn error(&self, message: &str);
}

/// Resolves a navigation request through the route guard.
pub trait RouteResolver: Send + Sync + std::fmt::Debug + 'static {
    /// The path the user ends up on when navigating to `path`.
    fn resolve(&self, path: &str) -> AppResult<String>;
}
