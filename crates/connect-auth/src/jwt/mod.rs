//! Signed token validation and claims extraction.

pub mod claims;
pub mod error;
pub mod validator;

pub use claims::{Claims, Payload, PolicyClaim};
pub use error::{InvalidTokenReason, TokenError};
pub use validator::{ACCEPTED_ALGORITHMS, TokenValidator, redact_token, validate_token};
