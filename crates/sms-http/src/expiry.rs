//! Single-flight session expiry handling.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use sms_core::traits::{Navigator, RouteResolver};
use sms_session::SessionStore;

/// Tears the session down and sends the user to the login route when the
/// server rejects the credential.
///
/// When many in-flight requests fail with an authentication error at once,
/// only the first one clears the session and prompts; the rest observe the
/// latch and return immediately. The latch is released after the user
/// acknowledged the prompt, just before the redirect, so a later expiry can
/// be handled again.
///
/// With a [`RouteResolver`] attached, the redirect to login goes through
/// the route guard like any other navigation and the user lands on the
/// path it resolves to.
#[derive(Debug)]
pub struct SessionExpiryHandler {
    redirecting: Arc<AtomicBool>,
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
    login_path: String,
    router: Option<Arc<dyn RouteResolver>>,
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl SessionExpiryHandler {
    /// Create a handler redirecting to `login_path`.
    pub fn new(
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
        login_path: impl Into<String>,
    ) -> Self {
        Self {
            redirecting: Arc::new(AtomicBool::new(false)),
            session,
            navigator,
            login_path: login_path.into(),
            router: None,
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Resolve the post-expiry redirect through `router`.
    pub fn with_router(mut self, router: Arc<dyn RouteResolver>) -> Self {
        self.router = Some(router);
        self
    }

    /// Handle an expired session.
    ///
    /// The session is cleared before this returns. The prompt and redirect
    /// run on a spawned task so the failing request can reject right away;
    /// [`settle`](Self::settle) waits for it. Returns `false` when another
    /// expiry is already being handled.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn trigger(&self, message: &str) -> bool {
        if self
            .redirecting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Session expiry already in progress, skipping");
            return false;
        }

        info!(reason = %message, "Session expired, clearing credentials");
        if let Err(e) = self.session.clear() {
            warn!(error = %e, "Failed to clear persisted session");
        }

        let redirecting = Arc::clone(&self.redirecting);
        let navigator = Arc::clone(&self.navigator);
        let router = self.router.clone();
        let login_path = self.login_path.clone();
        let message = message.to_string();

        let task = tokio::spawn(async move {
            navigator.prompt(&message).await;
            redirecting.store(false, Ordering::Release);
            let target = match router {
                Some(router) => router.resolve(&login_path).unwrap_or_else(|e| {
                    warn!(error = %e, "Guarded redirect failed, using login path");
                    login_path.clone()
                }),
                None => login_path,
            };
            navigator.replace(&target).await;
            debug!(path = %target, "Redirected after expiry");
        });

        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        pending.retain(|task| !task.is_finished());
        pending.push(task);
        true
    }

    /// Wait until the prompt was acknowledged and the redirect issued.
    /// Returns at once when no expiry is pending.
    pub async fn settle(&self) {
        let tasks = std::mem::take(
            &mut *self.pending.lock().unwrap_or_else(PoisonError::into_inner),
        );
        for task in tasks {
            if let Err(e) = task.await {
                warn!(error = %e, "Expiry redirect task failed");
            }
        }
    }

    /// Whether an expiry is currently being handled.
    pub fn is_redirecting(&self) -> bool {
        self.redirecting.load(Ordering::Acquire)
    }

    /// The route the user is sent to.
    pub fn login_path(&self) -> &str {
        &self.login_path
    }
}
