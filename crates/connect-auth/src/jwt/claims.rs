//! Validated token claims and the total decode from a raw payload.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::rbac::{self, roles};

use super::error::TokenError;

/// Raw, signature-verified token payload.
pub type Payload = Map<String, Value>;

/// 2^64, the first `f64` above every `u64`.
const U64_CEILING: f64 = 18_446_744_073_709_551_616.0;

/// Identity and authorization facts from a validated token.
///
/// Built once per validated token and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Claims {
    /// Player identity.
    #[serde(rename = "steamid")]
    pub steam_id: String,
    /// Role key, `web_user` when the token carries none.
    pub role: String,
    /// Policy version the token was accepted under (the active one).
    pub policy_version: u32,
    /// Granted permission bits.
    pub allow_permissions: u64,
    /// Revoked permission bits; always win over `allow_permissions`.
    pub deny_permissions: u64,
    /// Issued-at (unix seconds), 0 when absent.
    #[serde(rename = "iat")]
    pub issued_at: i64,
    /// Expiry (unix seconds), 0 when absent.
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

impl Claims {
    /// Extracts claims from a verified payload.
    ///
    /// Only `steamid` is mandatory; every other field falls back to its
    /// default. The policy version is checked by the caller beforehand and
    /// stored as given.
    pub fn from_payload(payload: &Payload, policy_version: u32) -> Result<Self, TokenError> {
        let steam_id = match payload.get("steamid") {
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            _ => return Err(TokenError::MissingIdentity),
        };

        let role = match payload.get("role") {
            Some(Value::String(role)) => role.clone(),
            _ => roles::ROLE_USER.to_string(),
        };

        Ok(Self {
            steam_id,
            role,
            policy_version,
            allow_permissions: mask_claim(payload, "allow_permissions"),
            deny_permissions: mask_claim(payload, "deny_permissions"),
            issued_at: timestamp_claim(payload, "iat"),
            expires_at: timestamp_claim(payload, "exp"),
        })
    }

    /// Returns `true` if `permission` is allowed and not denied.
    pub fn has_permission(&self, permission: u64) -> bool {
        rbac::can_perform(self.allow_permissions, self.deny_permissions, permission)
    }

    /// Returns the allow mask with every denied bit cleared.
    pub fn effective_permissions(&self) -> u64 {
        rbac::effective(self.allow_permissions, self.deny_permissions)
    }

    pub fn is_owner(&self) -> bool {
        roles::is_owner(&self.role)
    }

    pub fn is_admin(&self) -> bool {
        roles::is_admin(&self.role)
    }

    pub fn is_moderator(&self) -> bool {
        roles::is_moderator(&self.role)
    }

    pub fn is_staff(&self) -> bool {
        roles::is_staff(&self.role)
    }

    /// Returns the issued-at time, or `None` when the token carried none.
    pub fn issued_at_datetime(&self) -> Option<DateTime<Utc>> {
        to_datetime(self.issued_at)
    }

    /// Returns the expiry time, or `None` when the token carried none.
    pub fn expires_at_datetime(&self) -> Option<DateTime<Utc>> {
        to_datetime(self.expires_at)
    }
}

/// The `policy_version` claim as found in a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyClaim {
    /// Missing or `null`.
    Absent,
    /// An integer value.
    Version(i64),
    /// Present but not an integer.
    NotInteger,
}

impl PolicyClaim {
    /// Reads the claim from `payload`.
    ///
    /// A string such as `"1"` is not treated as absent, and a fraction such as `1.5`
    /// is not truncated. Both are `NotInteger` and fail the version check, so a
    /// malformed claim cannot slip past invalidation as a legacy token.
    pub fn from_payload(payload: &Payload) -> Self {
        match payload.get("policy_version") {
            None | Some(Value::Null) => Self::Absent,
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().and_then(integral_i64))
                .map_or(Self::NotInteger, Self::Version),
            Some(_) => Self::NotInteger,
        }
    }
}

fn mask_claim(payload: &Payload, name: &str) -> u64 {
    match payload.get(name) {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().and_then(integral_u64))
            .unwrap_or(0),
        _ => 0,
    }
}

fn timestamp_claim(payload: &Payload, name: &str) -> i64 {
    match payload.get(name) {
        // float to int `as` casts truncate and saturate
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|v| v as i64)).unwrap_or(0),
        _ => 0,
    }
}

fn integral_u64(value: f64) -> Option<u64> {
    (value.fract() == 0.0 && (0.0..U64_CEILING).contains(&value)).then_some(value as u64)
}

fn integral_i64(value: f64) -> Option<i64> {
    let in_range = value >= i64::MIN as f64 && value < -(i64::MIN as f64);
    (value.fract() == 0.0 && in_range).then_some(value as i64)
}

fn to_datetime(timestamp: i64) -> Option<DateTime<Utc>> {
    if timestamp == 0 {
        return None;
    }
    DateTime::from_timestamp(timestamp, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        match value {
            Value::Object(map) => map,
            _ => panic!("payload must be an object"),
        }
    }

    #[test]
    fn test_defaults() {
        let claims = Claims::from_payload(&payload(json!({ "steamid": "7656" })), 4).unwrap();
        assert_eq!(claims.steam_id, "7656");
        assert_eq!(claims.role, "web_user");
        assert_eq!(claims.policy_version, 4);
        assert_eq!(claims.allow_permissions, 0);
        assert_eq!(claims.deny_permissions, 0);
        assert_eq!(claims.issued_at, 0);
        assert_eq!(claims.expires_at, 0);
        assert!(claims.issued_at_datetime().is_none());
    }

    #[test]
    fn test_missing_identity() {
        for body in [
            json!({}),
            json!({ "steamid": "" }),
            json!({ "steamid": 7656 }),
            json!({ "steamid": null }),
        ] {
            assert_eq!(
                Claims::from_payload(&payload(body), 1).unwrap_err(),
                TokenError::MissingIdentity
            );
        }
    }

    #[test]
    fn test_numeric_claims() {
        let claims = Claims::from_payload(
            &payload(json!({
                "steamid": "1",
                "allow_permissions": 1099511627775u64,
                "deny_permissions": 4.0,
                "iat": 1700000000,
                "exp": 1700003600.0,
            })),
            1,
        )
        .unwrap();
        assert_eq!(claims.allow_permissions, (1 << 40) - 1);
        assert_eq!(claims.deny_permissions, 4);
        assert_eq!(claims.issued_at, 1_700_000_000);
        assert_eq!(claims.expires_at, 1_700_003_600);
        assert_eq!(claims.issued_at_datetime().map(|d| d.timestamp()), Some(1_700_000_000));
    }

    #[test]
    fn test_full_width_mask() {
        let claims = Claims::from_payload(
            &payload(json!({ "steamid": "1", "allow_permissions": u64::MAX })),
            1,
        )
        .unwrap();
        assert_eq!(claims.allow_permissions, u64::MAX);
    }

    #[test]
    fn test_unusable_masks_default_to_zero() {
        let claims = Claims::from_payload(
            &payload(json!({
                "steamid": "1",
                "allow_permissions": -3,
                "deny_permissions": 2.5,
                "iat": "yesterday",
                "role": 42,
            })),
            1,
        )
        .unwrap();
        assert_eq!(claims.allow_permissions, 0);
        assert_eq!(claims.deny_permissions, 0);
        assert_eq!(claims.issued_at, 0);
        assert_eq!(claims.role, "web_user");
    }

    #[test]
    fn test_has_permission_respects_deny() {
        let claims = Claims {
            steam_id: "1".to_string(),
            role: "web_staff".to_string(),
            policy_version: 1,
            allow_permissions: 0b1011,
            deny_permissions: 0b0010,
            issued_at: 0,
            expires_at: 0,
        };
        assert!(claims.has_permission(0b0001));
        assert!(!claims.has_permission(0b0010));
        assert!(!claims.has_permission(0b0100));
        assert_eq!(claims.effective_permissions(), 0b1001);
        assert!(claims.is_staff() && !claims.is_moderator());
    }

    #[test]
    fn test_policy_claim() {
        let read = |v: Value| PolicyClaim::from_payload(&payload(v));
        assert_eq!(read(json!({})), PolicyClaim::Absent);
        assert_eq!(read(json!({ "policy_version": null })), PolicyClaim::Absent);
        assert_eq!(read(json!({ "policy_version": 2 })), PolicyClaim::Version(2));
        assert_eq!(read(json!({ "policy_version": 2.0 })), PolicyClaim::Version(2));
        assert_eq!(read(json!({ "policy_version": -1 })), PolicyClaim::Version(-1));
        assert_eq!(read(json!({ "policy_version": 1.5 })), PolicyClaim::NotInteger);
        assert_eq!(read(json!({ "policy_version": "1" })), PolicyClaim::NotInteger);
    }

    #[test]
    fn test_serializes_wire_names() {
        let claims = Claims::from_payload(&payload(json!({ "steamid": "9" })), 1).unwrap();
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["steamid"], "9");
        assert_eq!(json["iat"], 0);
    }
}
