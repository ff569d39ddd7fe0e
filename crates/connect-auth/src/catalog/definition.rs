//! Permission bits, permission groups, and role presets.

use serde::{Deserialize, Serialize};

use connect_core::ScopeType;

/// Number of permission bits available in one scope (one `u64` mask).
pub const MAX_PERMISSION_BITS: u8 = 64;

/// Name returned when a bit value has no catalog definition.
pub const UNKNOWN_PERMISSION: &str = "UNKNOWN_PERMISSION";

/// Display name returned for role keys the catalog does not know.
pub const UNKNOWN_ROLE_NAME: &str = "Unknown";

/// A single capability: one bit position inside a scope's 64-bit mask.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionBit {
    /// Scope the bit belongs to.
    pub scope: ScopeType,
    /// Bit position, `0..64`.
    pub index: u8,
    /// Stable key, e.g. `COMMUNITY__SERVER_ADD`.
    pub key: String,
    /// Human-readable description.
    pub description: String,
}

impl PermissionBit {
    /// Returns the mask with only this bit set.
    pub fn mask(&self) -> u64 {
        1u64 << self.index
    }
}

/// A named, non-exclusive collection of bits used to compose roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionGroup {
    /// Scope the group belongs to.
    pub scope: ScopeType,
    /// Group key, e.g. `community_staff`.
    pub name: String,
    /// Member bits, sorted by index without duplicates.
    pub members: Vec<PermissionBit>,
}

impl PermissionGroup {
    /// Returns the union of every member bit.
    pub fn mask(&self) -> u64 {
        self.members.iter().fold(0, |mask, bit| mask | bit.mask())
    }

    /// Returns `true` if the group contains the bit at `index`.
    pub fn contains(&self, index: u8) -> bool {
        self.members.iter().any(|bit| bit.index == index)
    }
}

/// A role label bound to a precomputed permission mask.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePreset {
    /// Scope the role belongs to.
    pub scope: ScopeType,
    /// Role key, e.g. `team_owner`.
    pub role_key: String,
    /// Display name, e.g. `Team Owner`.
    pub display_name: String,
    /// Groups the mask was composed from, in definition order.
    pub groups: Vec<String>,
    /// Union of every bit in every group.
    pub mask: u64,
}

/// The three canonical role tiers every built-in scope defines.
///
/// Tiers are ordered: each tier's mask must contain every lower tier's mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RoleTier {
    /// Baseline member.
    User,
    /// Staff member.
    Staff,
    /// Owner of the scope entity.
    Owner,
}

impl RoleTier {
    /// Every tier, lowest first.
    pub const ASCENDING: [RoleTier; 3] = [Self::User, Self::Staff, Self::Owner];

    /// Return the tier suffix used in role keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Staff => "staff",
            Self::Owner => "owner",
        }
    }

    /// Return the role key of this tier in `scope`, e.g. `lobby_staff`.
    pub fn role_key(&self, scope: ScopeType) -> String {
        format!("{}_{}", scope.role_prefix(), self.as_str())
    }
}

/// Folds groups into a role mask.
///
/// Bitwise OR is commutative and idempotent, so group order and overlapping
/// members do not affect the result.
pub fn resolve_mask<'a, I>(groups: I) -> u64
where
    I: IntoIterator<Item = &'a PermissionGroup>,
{
    groups.into_iter().fold(0, |mask, group| mask | group.mask())
}
