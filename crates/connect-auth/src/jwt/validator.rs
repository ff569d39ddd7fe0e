//! HMAC token validation bound to the active policy version.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use connect_core::config::AuthConfig;

use crate::policy::PolicyVersionRegistry;

use super::claims::{Claims, Payload, PolicyClaim};
use super::error::{InvalidTokenReason, TokenError};

/// Signing algorithms accepted in the token header.
pub const ACCEPTED_ALGORITHMS: [Algorithm; 3] =
    [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Validates a token against `secret` and `expected_policy_version`.
///
/// Stateless form of [`TokenValidator::validate`] with no expiry leeway.
pub fn validate_token(
    token: &str,
    secret: &str,
    expected_policy_version: u32,
) -> Result<Claims, TokenError> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    run(token, &key, &hmac_validation(0), expected_policy_version)
}

/// Validates tokens with a fixed secret against a shared policy registry.
#[derive(Clone)]
pub struct TokenValidator {
    /// HMAC secret used for verification.
    decoding_key: DecodingKey,
    /// Algorithm and expiry rules.
    validation: Validation,
    /// Source of the active policy version.
    registry: Arc<PolicyVersionRegistry>,
}

impl std::fmt::Debug for TokenValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenValidator")
            .field("validation", &self.validation)
            .field("policy_version", &self.registry.current())
            .finish()
    }
}

impl TokenValidator {
    /// Creates a validator from auth configuration.
    pub fn new(config: &AuthConfig, registry: Arc<PolicyVersionRegistry>) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation: hmac_validation(config.leeway_seconds),
            registry,
        }
    }

    /// Validates `token` against the registry's current version.
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        self.validate_with_version(token, self.registry.current())
    }

    /// Validates `token` against an explicit version.
    pub fn validate_with_version(
        &self,
        token: &str,
        expected_policy_version: u32,
    ) -> Result<Claims, TokenError> {
        run(token, &self.decoding_key, &self.validation, expected_policy_version)
    }

    /// Returns the registry this validator reads.
    pub fn registry(&self) -> &Arc<PolicyVersionRegistry> {
        &self.registry
    }
}

/// Keeps at most the first 8 characters, and never more than half, of a token for logging.
pub fn redact_token(token: &str) -> String {
    let keep = (token.chars().count() / 2).min(8);
    let end = token
        .char_indices()
        .nth(keep)
        .map_or(token.len(), |(index, _)| index);
    format!("{}...", &token[..end])
}

fn hmac_validation(leeway_seconds: u64) -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();
    // exp is enforced when present but not required
    validation.required_spec_claims.clear();
    validation.validate_exp = true;
    validation.validate_aud = false;
    validation.leeway = leeway_seconds;
    validation
}

fn run(
    token: &str,
    key: &DecodingKey,
    validation: &Validation,
    expected_policy_version: u32,
) -> Result<Claims, TokenError> {
    let result = check(token, key, validation, expected_policy_version);
    if let Err(err) = &result {
        log_rejection(token, err);
    }
    result
}

fn check(
    token: &str,
    key: &DecodingKey,
    validation: &Validation,
    expected_policy_version: u32,
) -> Result<Claims, TokenError> {
    if token.is_empty() {
        return Err(TokenError::MissingToken);
    }

    let payload = decode::<Payload>(token, key, validation)
        .map_err(|e| TokenError::InvalidToken(classify(&e)))?
        .claims;

    if !matches!(payload.get("steamid"), Some(serde_json::Value::String(id)) if !id.is_empty()) {
        return Err(TokenError::MissingIdentity);
    }

    match PolicyClaim::from_payload(&payload) {
        PolicyClaim::Absent => {
            tracing::warn!(
                expected = expected_policy_version,
                token = %redact_token(token),
                "Token has no policy version, accepting for backward compatibility"
            );
        }
        PolicyClaim::Version(version) if version == i64::from(expected_policy_version) => {}
        PolicyClaim::Version(version) => {
            return Err(TokenError::PolicyVersionMismatch {
                expected: expected_policy_version,
                actual: Some(version),
            });
        }
        PolicyClaim::NotInteger => {
            return Err(TokenError::PolicyVersionMismatch {
                expected: expected_policy_version,
                actual: None,
            });
        }
    }

    Claims::from_payload(&payload, expected_policy_version)
}

fn classify(err: &jsonwebtoken::errors::Error) -> InvalidTokenReason {
    use jsonwebtoken::errors::ErrorKind;

    match err.kind() {
        ErrorKind::ExpiredSignature => InvalidTokenReason::Expired,
        ErrorKind::InvalidSignature => InvalidTokenReason::Signature,
        ErrorKind::InvalidAlgorithm => InvalidTokenReason::Algorithm,
        _ => InvalidTokenReason::Malformed,
    }
}

fn log_rejection(token: &str, err: &TokenError) {
    match err {
        TokenError::MissingToken => {
            tracing::warn!(error_code = err.code(), "Token rejected: no token supplied");
        }
        TokenError::PolicyVersionMismatch { expected, actual } => {
            tracing::error!(
                error_code = err.code(),
                expected,
                token_version = ?actual,
                token = %redact_token(token),
                "Token rejected: policy version mismatch"
            );
        }
        _ => {
            tracing::error!(
                error_code = err.code(),
                error = %err,
                token = %redact_token(token),
                "Token rejected"
            );
        }
    }
}
