//! Terminal implementations of the navigation and notification ports.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use dialoguer::Input;
use tracing::{debug, warn};

use sms_core::traits::{Navigator, Notifier};

use crate::output;

/// Prints navigation to the terminal and remembers where the user is.
#[derive(Debug)]
pub struct TerminalNavigator {
    interactive: bool,
    title: Mutex<String>,
    location: Mutex<Option<String>>,
}

impl TerminalNavigator {
    /// `interactive` controls whether prompts wait for Enter.
    pub fn new(interactive: bool) -> Self {
        Self {
            interactive,
            title: Mutex::new(String::new()),
            location: Mutex::new(None),
        }
    }

    /// Last title set by the guard.
    pub fn title(&self) -> String {
        self.title
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Last path navigated to with `replace`.
    pub fn location(&self) -> Option<String> {
        self.location
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Navigator for TerminalNavigator {
    fn set_title(&self, title: &str) {
        debug!(title, "Page title");
        *self.title.lock().unwrap_or_else(PoisonError::into_inner) = title.to_string();
    }

    async fn prompt(&self, message: &str) {
        output::print_warning(message);
        if !self.interactive {
            return;
        }

        let prompt = "按回车键确定".to_string();
        let acknowledged = tokio::task::spawn_blocking(move || {
            Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
        })
        .await;

        match acknowledged {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => warn!(error = %e, "Prompt could not read from terminal"),
            Err(e) => warn!(error = %e, "Prompt task failed"),
        }
    }

    async fn replace(&self, path: &str) {
        println!("→ {path}");
        *self.location.lock().unwrap_or_else(PoisonError::into_inner) = Some(path.to_string());
    }
}

/// Prints error notifications to stderr.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn error(&self, message: &str) {
        output::print_error(message);
    }
}
