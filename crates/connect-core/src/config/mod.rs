//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files plus `CONNECT__`-prefixed environment variables. Each
//! sub-module represents a logical configuration section.

pub mod auth;
pub mod logging;
pub mod policy;

use serde::{Deserialize, Serialize};

pub use self::auth::{AuthConfig, DEFAULT_JWT_SECRET};
pub use self::logging::LoggingConfig;
pub use self::policy::{DEFAULT_POLICY_VERSION, PolicyConfig};

use crate::error::AppError;

/// Root application configuration.
///
/// Every section has defaults so an empty environment still yields a
/// usable configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Token verification settings.
    pub auth: AuthConfig,
    /// Policy version source settings.
    pub policy: PolicyConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files and the environment.
    ///
    /// Merges `config/default` with an environment-specific overlay
    /// (`config/{env}`) and environment variables prefixed with `CONNECT__`,
    /// e.g. `CONNECT__AUTH__JWT_SECRET`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(environment())
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

/// `__` separates the prefix as well as nested keys.
fn environment() -> config::Environment {
    config::Environment::with_prefix("CONNECT")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("policy.fallback_env_vars")
        .try_parsing(true)
}
