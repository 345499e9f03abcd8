//! Wiring of the client crates for one CLI invocation.

use std::io::IsTerminal;
use std::sync::Arc;

use tracing::debug;

use sms_api::SmsApi;
use sms_core::config::ClientConfig;
use sms_core::result::AppResult;
use sms_http::{RequestPipeline, SessionExpiryHandler};
use sms_router::Navigation;
use sms_session::{SessionStore, open_storage};

use crate::terminal::{TerminalNavigator, TerminalNotifier};

/// Everything a command needs.
#[derive(Debug)]
pub struct ClientContext {
    pub config: ClientConfig,
    pub navigator: Arc<TerminalNavigator>,
    pub api: SmsApi,
    pub navigation: Navigation,
}

impl ClientContext {
    /// Open storage, rehydrate the session, and build pipeline and router.
    pub fn build(config: ClientConfig) -> AppResult<Self> {
        let storage = open_storage(&config.session)?;
        let session = Arc::new(SessionStore::rehydrate(storage)?);
        let navigator = Arc::new(TerminalNavigator::new(std::io::stdin().is_terminal()));

        let navigation =
            Navigation::standard(Arc::clone(&session), navigator.clone(), &config.routing);
        let expiry = SessionExpiryHandler::new(
            Arc::clone(&session),
            navigator.clone(),
            config.routing.login_path.as_str(),
        )
        .with_router(Arc::new(navigation.clone()));
        let pipeline = Arc::new(RequestPipeline::with_expiry_handler(
            &config.http,
            session,
            Arc::new(expiry),
            Arc::new(TerminalNotifier),
        )?);

        debug!(
            base_url = %config.http.base_url,
            authenticated = pipeline.session().is_authenticated(),
            "Client context ready"
        );

        Ok(Self {
            api: SmsApi::new(pipeline),
            navigator,
            navigation,
            config,
        })
    }

    /// Navigate and print where the user landed.
    pub fn open(&self, path: &str) -> AppResult<String> {
        let route = self.navigation.navigate(path)?;
        println!("{} ({})", route.path, self.navigator.title());
        Ok(route.path)
    }

    /// Let a pending session-expiry prompt and redirect finish.
    pub async fn settle(&self) {
        self.api.pipeline().expiry().settle().await;
    }
}
