//! Permission catalog and role preset resolution.
//!
//! A [`Catalog`] holds, for every scope, the permission bits (at most 64),
//! the named groups composed from them, and the role presets resolved as
//! unions of groups. It is built once and then only read.

pub mod builder;
pub mod definition;
pub mod error;
pub mod registry;
pub mod scopes;

pub use builder::CatalogBuilder;
pub use definition::{
    MAX_PERMISSION_BITS, PermissionBit, PermissionGroup, RolePreset, RoleTier, UNKNOWN_PERMISSION,
    UNKNOWN_ROLE_NAME, resolve_mask,
};
pub use error::CatalogError;
pub use registry::{
    Catalog, CatalogDescription, GroupDescription, PermissionDescription, RoleDescription,
    ScopeCatalog, ScopeDescription,
};

impl Catalog {
    /// Builds the four built-in scopes (web, community, team, lobby).
    pub fn builtin() -> Result<Self, CatalogError> {
        let mut builder = CatalogBuilder::new();
        for table in scopes::BUILTIN_TABLES {
            scopes::register(&mut builder, table)?;
        }
        builder.build()
    }
}
