//! Built-in scope tables.
//!
//! Each scope module carries bit constants for compile-time checks plus a
//! [`ScopeTable`] that [`register`] feeds into a [`CatalogBuilder`].

pub mod community;
pub mod lobby;
pub mod team;
pub mod web;

use connect_core::ScopeType;

use super::builder::CatalogBuilder;
use super::error::CatalogError;

/// Static definition of one scope: bits, groups, and role presets.
#[derive(Debug, Clone, Copy)]
pub struct ScopeTable {
    /// Scope the table defines.
    pub scope: ScopeType,
    /// `(bit index, key, description)`.
    pub permissions: &'static [(u8, &'static str, &'static str)],
    /// `(group name, member keys)`.
    pub groups: &'static [(&'static str, &'static [&'static str])],
    /// `(role key, display name, groups)`.
    pub roles: &'static [(&'static str, &'static str, &'static [&'static str])],
}

/// Every built-in scope table.
pub const BUILTIN_TABLES: [&ScopeTable; 4] =
    [&web::TABLE, &community::TABLE, &team::TABLE, &lobby::TABLE];

/// Defines every bit, group, and role of `table` on `builder`.
pub fn register(builder: &mut CatalogBuilder, table: &ScopeTable) -> Result<(), CatalogError> {
    for (index, key, description) in table.permissions {
        builder.define_permission(table.scope, *index, *key, *description)?;
    }
    for (name, keys) in table.groups {
        builder.define_group_by_keys(table.scope, *name, keys)?;
    }
    for (role_key, display_name, groups) in table.roles {
        builder.resolve_role(table.scope, *role_key, *display_name, groups)?;
    }
    Ok(())
}
