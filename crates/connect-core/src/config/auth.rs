//! Token verification configuration.

use serde::{Deserialize, Serialize};

/// Placeholder secret used when none is configured.
pub const DEFAULT_JWT_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Settings used to verify signed access tokens.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Pre-shared HMAC secret used to verify token signatures.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Clock-skew allowance, in seconds, applied to the `exp` check.
    #[serde(default)]
    pub leeway_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            leeway_seconds: 0,
        }
    }
}

impl AuthConfig {
    /// Returns true while the secret is still the built-in placeholder.
    pub fn is_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("leeway_seconds", &self.leeway_seconds)
            .finish()
    }
}

fn default_jwt_secret() -> String {
    DEFAULT_JWT_SECRET.to_string()
}
