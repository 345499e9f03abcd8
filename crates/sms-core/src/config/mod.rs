//! Client configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Every field has a default, so an empty or missing file
//! yields a working configuration pointed at a local backend.

pub mod http;
pub mod logging;
pub mod routing;
pub mod session;

use serde::{Deserialize, Serialize};

pub use self::http::HttpConfig;
pub use self::logging::LoggingConfig;
pub use self::routing::RoutingConfig;
pub use self::session::{SessionConfig, StorageBackend};

use crate::error::AppError;

/// Root client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Request pipeline settings.
    #[serde(default)]
    pub http: HttpConfig,
    /// Session persistence settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Route table and guard settings.
    #[serde(default)]
    pub routing: RoutingConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the file at `path` with an environment overlay
    /// (`config/{env}.toml`) and environment variables prefixed with `SMS`
    /// (for example `SMS__HTTP__BASE_URL`).
    pub fn load(path: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("SMS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
