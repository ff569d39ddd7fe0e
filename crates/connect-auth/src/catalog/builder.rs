//! Catalog construction: permission bits, groups, and role resolution.

use std::collections::BTreeMap;

use connect_core::ScopeType;

use super::definition::{
    MAX_PERMISSION_BITS, PermissionBit, PermissionGroup, RolePreset, RoleTier, resolve_mask,
};
use super::error::CatalogError;
use super::registry::{Catalog, ScopeCatalog};

/// Accumulates permission definitions and produces an immutable [`Catalog`].
///
/// All validation happens while defining; [`CatalogBuilder::build`] only adds
/// the cross-role tier check.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    /// Scope tables under construction.
    scopes: BTreeMap<ScopeType, ScopeCatalog>,
}

impl CatalogBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    fn scope_mut(&mut self, scope: ScopeType) -> &mut ScopeCatalog {
        self.scopes
            .entry(scope)
            .or_insert_with(|| ScopeCatalog::empty(scope))
    }

    /// Defines a permission bit in `scope`.
    ///
    /// Fails with [`CatalogError::BitIndexOutOfRange`] when `index >= 64` and
    /// with [`CatalogError::DuplicateBitIndex`] when the index is taken.
    pub fn define_permission(
        &mut self,
        scope: ScopeType,
        index: u8,
        key: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<PermissionBit, CatalogError> {
        if index >= MAX_PERMISSION_BITS {
            return Err(CatalogError::BitIndexOutOfRange { scope, index });
        }

        let key = key.into();
        let table = self.scope_mut(scope);

        if table.bits.contains_key(&index) {
            return Err(CatalogError::DuplicateBitIndex { scope, index });
        }
        if table.keys.contains_key(&key) {
            return Err(CatalogError::DuplicatePermissionKey { scope, key });
        }

        let bit = PermissionBit {
            scope,
            index,
            key: key.clone(),
            description: description.into(),
        };
        table.keys.insert(key, index);
        table.bits.insert(index, bit.clone());
        Ok(bit)
    }

    /// Defines a named group from already-defined bits.
    ///
    /// Members are stored sorted by index; repeated bits collapse.
    pub fn define_group<'a, I>(
        &mut self,
        scope: ScopeType,
        name: impl Into<String>,
        bits: I,
    ) -> Result<PermissionGroup, CatalogError>
    where
        I: IntoIterator<Item = &'a PermissionBit>,
    {
        let name = name.into();
        let table = self.scope_mut(scope);

        if table.groups.iter().any(|g| g.name == name) {
            return Err(CatalogError::DuplicateGroup { scope, name });
        }

        let mut members: BTreeMap<u8, PermissionBit> = BTreeMap::new();
        for bit in bits {
            if bit.scope != scope {
                return Err(CatalogError::ScopeMismatch {
                    expected: scope,
                    actual: bit.scope,
                });
            }
            match table.bits.get(&bit.index) {
                Some(defined) if defined.key == bit.key => {
                    members.insert(bit.index, defined.clone());
                }
                _ => {
                    return Err(CatalogError::UnknownPermission {
                        scope,
                        key: bit.key.clone(),
                    });
                }
            }
        }

        let group = PermissionGroup {
            scope,
            name,
            members: members.into_values().collect(),
        };
        table.groups.push(group.clone());
        Ok(group)
    }

    /// Defines a named group from permission keys.
    pub fn define_group_by_keys(
        &mut self,
        scope: ScopeType,
        name: impl Into<String>,
        keys: &[&str],
    ) -> Result<PermissionGroup, CatalogError> {
        let table = self.scope_mut(scope);
        let bits = keys
            .iter()
            .map(|key| {
                table
                    .permission_by_key(key)
                    .cloned()
                    .ok_or_else(|| CatalogError::UnknownPermission {
                        scope,
                        key: key.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.define_group(scope, name, &bits)
    }

    /// Resolves a role as the union of the named groups and registers it.
    pub fn resolve_role(
        &mut self,
        scope: ScopeType,
        role_key: impl Into<String>,
        display_name: impl Into<String>,
        groups: &[&str],
    ) -> Result<RolePreset, CatalogError> {
        let role_key = role_key.into();
        let table = self.scope_mut(scope);

        if table.role_index.contains_key(&role_key) {
            return Err(CatalogError::DuplicateRole {
                scope,
                role: role_key,
            });
        }

        let resolved = groups
            .iter()
            .map(|name| {
                table
                    .group(name)
                    .ok_or_else(|| CatalogError::UnknownGroup {
                        scope,
                        name: name.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let preset = RolePreset {
            scope,
            role_key: role_key.clone(),
            display_name: display_name.into(),
            groups: groups.iter().map(|g| g.to_string()).collect(),
            mask: resolve_mask(resolved),
        };

        table.role_index.insert(role_key, table.roles.len());
        table.roles.push(preset.clone());
        Ok(preset)
    }

    /// Verifies tier monotonicity and freezes the catalog.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        for table in self.scopes.values() {
            verify_tiers(table)?;
            tracing::debug!(
                scope = %table.scope(),
                permissions = table.bits.len(),
                groups = table.groups.len(),
                roles = table.roles.len(),
                "Permission scope loaded"
            );
        }
        Ok(Catalog::from_scopes(self.scopes))
    }
}

/// Every defined canonical tier must contain every lower defined tier.
fn verify_tiers(table: &ScopeCatalog) -> Result<(), CatalogError> {
    let scope = table.scope();
    let tiers: Vec<&RolePreset> = RoleTier::ASCENDING
        .iter()
        .filter_map(|tier| table.role(&tier.role_key(scope)))
        .collect();

    for (i, lower) in tiers.iter().enumerate() {
        for higher in &tiers[i + 1..] {
            if lower.mask & higher.mask != lower.mask {
                return Err(CatalogError::TierNotMonotonic {
                    scope,
                    lower: lower.role_key.clone(),
                    higher: higher.role_key.clone(),
                });
            }
        }
    }
    Ok(())
}
