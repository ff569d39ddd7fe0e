//! Immutable permission catalog shared by every request.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use connect_core::ScopeType;

use super::definition::{
    PermissionBit, PermissionGroup, RolePreset, UNKNOWN_PERMISSION, UNKNOWN_ROLE_NAME,
};

/// One scope's permission bits, groups, and role presets.
#[derive(Debug, Clone)]
pub struct ScopeCatalog {
    /// Scope these tables describe.
    pub(super) scope: ScopeType,
    /// Bits keyed by index; iteration is ascending by index.
    pub(super) bits: BTreeMap<u8, PermissionBit>,
    /// Permission key → bit index.
    pub(super) keys: HashMap<String, u8>,
    /// Groups in definition order.
    pub(super) groups: Vec<PermissionGroup>,
    /// Role presets in definition order.
    pub(super) roles: Vec<RolePreset>,
    /// Role key → position in `roles`.
    pub(super) role_index: HashMap<String, usize>,
}

impl ScopeCatalog {
    pub(super) fn empty(scope: ScopeType) -> Self {
        Self {
            scope,
            bits: BTreeMap::new(),
            keys: HashMap::new(),
            groups: Vec::new(),
            roles: Vec::new(),
            role_index: HashMap::new(),
        }
    }

    /// Returns the scope these tables describe.
    pub fn scope(&self) -> ScopeType {
        self.scope
    }

    /// Iterates every permission in ascending bit order.
    pub fn permissions(&self) -> impl Iterator<Item = &PermissionBit> {
        self.bits.values()
    }

    /// Returns the permission at `index`, if defined.
    pub fn permission(&self, index: u8) -> Option<&PermissionBit> {
        self.bits.get(&index)
    }

    /// Returns the permission with the given key, if defined.
    pub fn permission_by_key(&self, key: &str) -> Option<&PermissionBit> {
        self.keys.get(key).and_then(|index| self.bits.get(index))
    }

    /// Returns the key of a single-bit value, or `"UNKNOWN_PERMISSION"`.
    ///
    /// Values with zero or several bits set never match.
    pub fn lookup_bit_name(&self, bit: u64) -> &str {
        if bit.count_ones() != 1 {
            return UNKNOWN_PERMISSION;
        }
        // count_ones == 1, so trailing_zeros < 64
        let index = bit.trailing_zeros() as u8;
        self.bits
            .get(&index)
            .map(|b| b.key.as_str())
            .unwrap_or(UNKNOWN_PERMISSION)
    }

    /// Returns the key of every defined bit set in `mask`, ascending by index.
    pub fn list_set_permission_names(&self, mask: u64) -> Vec<&str> {
        self.bits
            .values()
            .filter(|bit| mask & bit.mask() != 0)
            .map(|bit| bit.key.as_str())
            .collect()
    }

    /// Returns the union of every defined bit.
    pub fn defined_mask(&self) -> u64 {
        self.bits.values().fold(0, |mask, bit| mask | bit.mask())
    }

    /// Returns the group with the given name, if defined.
    pub fn group(&self, name: &str) -> Option<&PermissionGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Returns every group in definition order.
    pub fn groups(&self) -> &[PermissionGroup] {
        &self.groups
    }

    /// Returns the role preset with the given key, if defined.
    pub fn role(&self, role_key: &str) -> Option<&RolePreset> {
        self.role_index.get(role_key).map(|i| &self.roles[*i])
    }

    /// Returns every role preset in definition order.
    pub fn roles(&self) -> &[RolePreset] {
        &self.roles
    }

    /// Returns the role's mask, or 0 for unknown roles.
    pub fn role_permissions(&self, role_key: &str) -> u64 {
        self.role(role_key).map(|r| r.mask).unwrap_or(0)
    }

    /// Returns the role's display name, or `"Unknown"`.
    pub fn role_name(&self, role_key: &str) -> &str {
        self.role(role_key)
            .map(|r| r.display_name.as_str())
            .unwrap_or(UNKNOWN_ROLE_NAME)
    }

    /// Returns `true` if the role key is defined in this scope.
    pub fn is_role_valid(&self, role_key: &str) -> bool {
        self.role_index.contains_key(role_key)
    }
}

/// The complete, immutable permission catalog.
///
/// Built once at startup through [`super::CatalogBuilder`] (or
/// [`Catalog::builtin`]) and shared by reference afterwards. Lookups against
/// a scope the catalog does not define behave like lookups of undefined
/// entries.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Scope tables keyed by scope.
    scopes: BTreeMap<ScopeType, ScopeCatalog>,
}

impl Catalog {
    pub(super) fn from_scopes(scopes: BTreeMap<ScopeType, ScopeCatalog>) -> Self {
        Self { scopes }
    }

    /// Returns the tables for `scope`, if defined.
    pub fn scope(&self, scope: ScopeType) -> Option<&ScopeCatalog> {
        self.scopes.get(&scope)
    }

    /// Iterates every defined scope in catalog order.
    pub fn scopes(&self) -> impl Iterator<Item = &ScopeCatalog> {
        self.scopes.values()
    }

    /// Returns the key of a single-bit value in `scope`, or `"UNKNOWN_PERMISSION"`.
    pub fn lookup_bit_name(&self, scope: ScopeType, bit: u64) -> &str {
        self.scope(scope)
            .map(|s| s.lookup_bit_name(bit))
            .unwrap_or(UNKNOWN_PERMISSION)
    }

    /// Returns the key of every defined bit set in `mask`, ascending by index.
    pub fn list_set_permission_names(&self, scope: ScopeType, mask: u64) -> Vec<&str> {
        self.scope(scope)
            .map(|s| s.list_set_permission_names(mask))
            .unwrap_or_default()
    }

    /// Returns the permission with the given key in `scope`.
    pub fn permission_by_key(&self, scope: ScopeType, key: &str) -> Option<&PermissionBit> {
        self.scope(scope).and_then(|s| s.permission_by_key(key))
    }

    /// Returns the role preset with the given key in `scope`.
    pub fn role(&self, scope: ScopeType, role_key: &str) -> Option<&RolePreset> {
        self.scope(scope).and_then(|s| s.role(role_key))
    }

    /// Returns every role preset of `scope`; empty for unknown scopes.
    pub fn roles(&self, scope: ScopeType) -> &[RolePreset] {
        self.scope(scope).map(|s| s.roles()).unwrap_or(&[])
    }

    /// Searches every scope for a role key.
    pub fn find_role(&self, role_key: &str) -> Option<&RolePreset> {
        self.scopes.values().find_map(|s| s.role(role_key))
    }

    /// Returns the role's mask in `scope`, or 0 for unknown roles.
    pub fn role_permissions(&self, scope: ScopeType, role_key: &str) -> u64 {
        self.scope(scope)
            .map(|s| s.role_permissions(role_key))
            .unwrap_or(0)
    }

    /// Returns the role's display name in `scope`, or `"Unknown"`.
    pub fn role_name(&self, scope: ScopeType, role_key: &str) -> &str {
        self.scope(scope)
            .map(|s| s.role_name(role_key))
            .unwrap_or(UNKNOWN_ROLE_NAME)
    }

    /// Returns `true` if the role key is defined in `scope`.
    pub fn is_role_valid(&self, scope: ScopeType, role_key: &str) -> bool {
        self.scope(scope).is_some_and(|s| s.is_role_valid(role_key))
    }

    /// Produces a serializable description of every scope.
    pub fn describe(&self) -> CatalogDescription {
        let scopes = self
            .scopes
            .values()
            .map(|table| {
                let description = ScopeDescription {
                    scope: table.scope,
                    permissions: table
                        .permissions()
                        .map(|bit| PermissionDescription {
                            bit: bit.index,
                            key: bit.key.clone(),
                            description: bit.description.clone(),
                        })
                        .collect(),
                    groups: table
                        .groups
                        .iter()
                        .map(|group| GroupDescription {
                            key: group.name.clone(),
                            permissions: group.members.iter().map(|b| b.key.clone()).collect(),
                        })
                        .collect(),
                    roles: table
                        .roles
                        .iter()
                        .map(|role| RoleDescription {
                            key: role.role_key.clone(),
                            name: role.display_name.clone(),
                            mask: role.mask,
                        })
                        .collect(),
                };
                (table.scope, description)
            })
            .collect();

        CatalogDescription { scopes }
    }
}

/// Serializable view of the whole catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogDescription {
    /// Scope descriptions keyed by scope.
    pub scopes: BTreeMap<ScopeType, ScopeDescription>,
}

/// Serializable view of one scope.
#[derive(Debug, Clone, Serialize)]
pub struct ScopeDescription {
    /// Scope described.
    pub scope: ScopeType,
    /// Permissions in ascending bit order.
    pub permissions: Vec<PermissionDescription>,
    /// Groups in definition order.
    pub groups: Vec<GroupDescription>,
    /// Role presets in definition order.
    pub roles: Vec<RoleDescription>,
}

/// Serializable view of one permission bit.
#[derive(Debug, Clone, Serialize)]
pub struct PermissionDescription {
    /// Bit index.
    pub bit: u8,
    /// Permission key.
    pub key: String,
    /// Human-readable description.
    pub description: String,
}

/// Serializable view of one group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupDescription {
    /// Group key.
    pub key: String,
    /// Member permission keys, ascending by bit.
    pub permissions: Vec<String>,
}

/// Serializable view of one role preset.
#[derive(Debug, Clone, Serialize)]
pub struct RoleDescription {
    /// Role key.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Resolved permission mask.
    pub mask: u64,
}
