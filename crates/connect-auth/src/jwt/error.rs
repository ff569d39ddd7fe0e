//! Token validation outcomes.

use std::fmt;

use thiserror::Error;

use connect_core::error::{AppError, ErrorKind};

/// Why a token failed structural or cryptographic validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidTokenReason {
    /// Not a three-part signed structure, or undecodable header/payload.
    Malformed,
    /// The signature does not verify with the configured secret.
    Signature,
    /// The header declares an algorithm outside the HMAC family.
    Algorithm,
    /// The `exp` claim is in the past.
    Expired,
}

impl fmt::Display for InvalidTokenReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "malformed token"),
            Self::Signature => write!(f, "invalid signature"),
            Self::Algorithm => write!(f, "unexpected signing algorithm"),
            Self::Expired => write!(f, "token has expired"),
        }
    }
}

/// Terminal rejection of a token.
///
/// Validation is a pure function: retrying with the same inputs always yields
/// the same outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// No token was supplied.
    #[error("Missing token")]
    MissingToken,

    /// Malformed, wrongly signed, wrongly algorithmed, or expired.
    #[error("Invalid token: {0}")]
    InvalidToken(InvalidTokenReason),

    /// The token verifies but carries no usable `steamid`.
    #[error("Token has no steamid claim")]
    MissingIdentity,

    /// The token was issued under a superseded policy.
    #[error(
        "Policy version mismatch: expected {expected}, token carries {}",
        .actual.map_or_else(|| "a non-integer value".to_string(), |v| v.to_string())
    )]
    PolicyVersionMismatch {
        /// Active version.
        expected: u32,
        /// Version in the token; `None` when it is not an integer.
        actual: Option<i64>,
    },
}

impl TokenError {
    /// Stable snake-case code for responses and logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingToken => "missing_token",
            Self::InvalidToken(_) => "invalid_token",
            Self::MissingIdentity => "missing_steamid",
            Self::PolicyVersionMismatch { .. } => "policy_mismatch",
        }
    }

    /// Returns `true` when the caller must obtain a fresh token.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(
            self,
            Self::InvalidToken(_) | Self::PolicyVersionMismatch { .. }
        )
    }
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::with_source(ErrorKind::Authentication, err.to_string(), err)
    }
}
