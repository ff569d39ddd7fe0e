//! Authorization scope enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// An authorization namespace with its own independent permission-bit catalog.
///
/// Each scope owns up to 64 permission bits; the same bit index means
/// unrelated things in different scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScopeType {
    /// Platform-wide permissions (the scope carried inside access tokens).
    Web,
    /// Permissions inside a single community.
    Community,
    /// Permissions inside a single team.
    Team,
    /// Permissions inside a single lobby.
    Lobby,
}

impl ScopeType {
    /// Every scope, in catalog order.
    pub const ALL: [ScopeType; 4] = [Self::Web, Self::Community, Self::Team, Self::Lobby];

    /// Return the wire name of the scope (`"WEB"`, `"COMMUNITY"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "WEB",
            Self::Community => "COMMUNITY",
            Self::Team => "TEAM",
            Self::Lobby => "LOBBY",
        }
    }

    /// Return the lowercase prefix used by role keys in this scope (`"web"` in `web_owner`).
    pub fn role_prefix(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Community => "community",
            Self::Team => "team",
            Self::Lobby => "lobby",
        }
    }
}

impl fmt::Display for ScopeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScopeType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "WEB" => Ok(Self::Web),
            "COMMUNITY" => Ok(Self::Community),
            "TEAM" => Ok(Self::Team),
            "LOBBY" => Ok(Self::Lobby),
            _ => Err(AppError::validation(format!(
                "Invalid scope type: '{s}'. Expected one of: WEB, COMMUNITY, TEAM, LOBBY"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("WEB".parse::<ScopeType>().unwrap(), ScopeType::Web);
        assert_eq!("community".parse::<ScopeType>().unwrap(), ScopeType::Community);
        assert_eq!(" Team ".parse::<ScopeType>().unwrap(), ScopeType::Team);
        assert!("UNKNOWN".parse::<ScopeType>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for scope in ScopeType::ALL {
            assert_eq!(scope.to_string().parse::<ScopeType>().unwrap(), scope);
        }
    }

    #[test]
    fn test_serde_uses_wire_name() {
        let json = serde_json::to_string(&ScopeType::Lobby).unwrap();
        assert_eq!(json, "\"LOBBY\"");
        let parsed: ScopeType = serde_json::from_str("\"COMMUNITY\"").unwrap();
        assert_eq!(parsed, ScopeType::Community);
    }
}
