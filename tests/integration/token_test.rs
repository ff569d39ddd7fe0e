//! Integration tests for token validation and policy invalidation.

use jsonwebtoken::Algorithm;
use serde_json::json;

use connect_auth::TokenError;
use connect_auth::jwt::InvalidTokenReason;

use crate::helpers::{TestAuth, TokenBuilder};

#[test]
fn test_current_version_token_accepted() {
    let auth = TestAuth::new(1);
    let token = TokenBuilder::new("76561198000000001")
        .role("web_staff")
        .policy_version(1)
        .masks(0b1011, 0b0010)
        .expires_in(900)
        .sign();

    let claims = auth.validator.validate(&token).unwrap();
    assert_eq!(claims.steam_id, "76561198000000001");
    assert_eq!(claims.role, "web_staff");
    assert_eq!(claims.policy_version, 1);
    assert_eq!(claims.allow_permissions, 0b1011);
    assert_eq!(claims.deny_permissions, 0b0010);
    assert!(claims.expires_at > claims.issued_at);
}

#[test]
fn test_policy_mismatch_rejected() {
    let auth = TestAuth::new(1);
    let token = TokenBuilder::new("76561198000000001").policy_version(2).sign();

    let err = auth.validator.validate(&token).unwrap_err();
    assert_eq!(err, TokenError::PolicyVersionMismatch { expected: 1, actual: Some(2) });
    assert_eq!(err.code(), "policy_mismatch");
    assert!(err.requires_reauthentication());
}

#[test]
fn test_rotation_invalidates_every_issued_token() {
    let auth = TestAuth::new(3);
    let tokens: Vec<String> = (0..5)
        .map(|i| TokenBuilder::new(&format!("7656119800000000{i}")).policy_version(3).sign())
        .collect();

    for token in &tokens {
        assert!(auth.validator.validate(token).is_ok());
    }

    assert_eq!(auth.registry.rotate(4).unwrap(), 3);

    for token in &tokens {
        assert!(matches!(
            auth.validator.validate(token),
            Err(TokenError::PolicyVersionMismatch { expected: 4, actual: Some(3) })
        ));
    }
}

#[test]
fn test_legacy_token_accepted_under_any_version() {
    let token = TokenBuilder::new("76561198000000001").role("web_owner").sign();
    for version in [1, 2, 50] {
        let auth = TestAuth::new(version);
        let claims = auth.validator.validate(&token).unwrap();
        assert_eq!(claims.policy_version, version);
    }
}

#[test]
fn test_missing_identity_rejected() {
    let auth = TestAuth::new(1);
    let token = TokenBuilder::anonymous().policy_version(1).sign();
    let err = auth.validator.validate(&token).unwrap_err();
    assert_eq!(err, TokenError::MissingIdentity);
    assert_eq!(err.code(), "missing_steamid");
    assert!(!err.requires_reauthentication());
}

#[test]
fn test_missing_token_rejected() {
    let auth = TestAuth::new(1);
    assert_eq!(auth.validator.validate("").unwrap_err(), TokenError::MissingToken);
}

#[test]
fn test_foreign_secret_rejected() {
    let auth = TestAuth::new(1);
    let token = TokenBuilder::new("76561198000000001").secret("someone-else").sign();
    assert_eq!(
        auth.validator.validate(&token).unwrap_err(),
        TokenError::InvalidToken(InvalidTokenReason::Signature)
    );
}

#[test]
fn test_expired_token_rejected() {
    let auth = TestAuth::new(1);
    let token = TokenBuilder::new("76561198000000001").expires_in(-60).sign();
    assert_eq!(
        auth.validator.validate(&token).unwrap_err(),
        TokenError::InvalidToken(InvalidTokenReason::Expired)
    );
}

#[test]
fn test_hs512_token_accepted() {
    let auth = TestAuth::new(1);
    let token = TokenBuilder::new("76561198000000001")
        .algorithm(Algorithm::HS512)
        .sign();
    assert!(auth.validator.validate(&token).is_ok());
}

#[test]
fn test_float_encoded_claims_accepted() {
    let auth = TestAuth::new(2);
    let token = TokenBuilder::new("76561198000000001")
        .claim("policy_version", json!(2.0))
        .claim("allow_permissions", json!(1024.0))
        .sign();
    let claims = auth.validator.validate(&token).unwrap();
    assert_eq!(claims.allow_permissions, 1024);
}

#[test]
fn test_stateless_entry_point_matches_validator() {
    let token = TokenBuilder::new("76561198000000001").policy_version(5).sign();
    let claims = connect_auth::validate_token(&token, crate::helpers::SECRET, 5).unwrap();
    assert_eq!(claims.policy_version, 5);
    assert!(matches!(
        connect_auth::validate_token(&token, crate::helpers::SECRET, 6),
        Err(TokenError::PolicyVersionMismatch { .. })
    ));
}

#[test]
fn test_non_integer_policy_version_rejected() {
    let auth = TestAuth::new(1);
    for version in [json!("1"), json!(1.5), json!(true)] {
        let token = TokenBuilder::new("76561198000000001")
            .claim("policy_version", version.clone())
            .sign();
        assert_eq!(
            auth.validator.validate(&token).unwrap_err(),
            TokenError::PolicyVersionMismatch { expected: 1, actual: None },
            "{version}"
        );
    }
}
