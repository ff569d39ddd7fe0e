//! Shared test helpers for integration tests.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::{Map, Value, json};

use connect_auth::catalog::Catalog;
use connect_auth::{PolicyVersionRegistry, TokenValidator};
use connect_core::config::AuthConfig;

/// Secret shared by the issuer and the validator under test.
pub const SECRET: &str = "integration-secret";

/// Test environment: catalog, registry, and validator wired together.
pub struct TestAuth {
    pub catalog: Catalog,
    pub registry: Arc<PolicyVersionRegistry>,
    pub validator: TokenValidator,
}

impl TestAuth {
    /// Create an environment with the given active policy version
    pub fn new(policy_version: u32) -> Self {
        let registry =
            Arc::new(PolicyVersionRegistry::new(policy_version).expect("valid policy version"));
        let config = AuthConfig {
            jwt_secret: SECRET.to_string(),
            leeway_seconds: 0,
        };
        Self {
            catalog: Catalog::builtin().expect("built-in catalog"),
            validator: TokenValidator::new(&config, Arc::clone(&registry)),
            registry,
        }
    }
}

/// Builder for signed test tokens.
#[derive(Debug, Clone)]
pub struct TokenBuilder {
    claims: Map<String, Value>,
    algorithm: Algorithm,
    secret: String,
}

impl TokenBuilder {
    /// Start a token for `steam_id` with the current time as `iat`
    pub fn new(steam_id: &str) -> Self {
        let mut claims = Map::new();
        claims.insert("steamid".to_string(), json!(steam_id));
        claims.insert("iat".to_string(), json!(now()));
        Self {
            claims,
            algorithm: Algorithm::HS256,
            secret: SECRET.to_string(),
        }
    }

    /// Start a token with no identity claim
    pub fn anonymous() -> Self {
        let mut builder = Self::new("");
        builder.claims.remove("steamid");
        builder
    }

    pub fn claim(mut self, name: &str, value: Value) -> Self {
        self.claims.insert(name.to_string(), value);
        self
    }

    pub fn role(self, role: &str) -> Self {
        self.claim("role", json!(role))
    }

    pub fn policy_version(self, version: u32) -> Self {
        self.claim("policy_version", json!(version))
    }

    pub fn masks(self, allow: u64, deny: u64) -> Self {
        self.claim("allow_permissions", json!(allow))
            .claim("deny_permissions", json!(deny))
    }

    pub fn expires_in(self, seconds: i64) -> Self {
        self.claim("exp", json!(now() + seconds))
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn secret(mut self, secret: &str) -> Self {
        self.secret = secret.to_string();
        self
    }

    /// Sign the token
    pub fn sign(&self) -> String {
        encode(
            &Header::new(self.algorithm),
            &self.claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .expect("Failed to sign test token")
    }
}

/// Current unix time in seconds
pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}
