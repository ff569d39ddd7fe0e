//! Catalog construction errors.

use thiserror::Error;

use connect_core::ScopeType;
use connect_core::error::{AppError, ErrorKind};

/// Errors raised while defining permissions, groups, or roles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The bit index does not fit in a 64-bit mask.
    #[error("bit index {index} is out of range for scope {scope} (maximum is 63)")]
    BitIndexOutOfRange {
        /// Scope being defined.
        scope: ScopeType,
        /// Offending index.
        index: u8,
    },

    /// Another permission in the scope already uses this index.
    #[error("bit index {index} is already defined in scope {scope}")]
    DuplicateBitIndex {
        /// Scope being defined.
        scope: ScopeType,
        /// Offending index.
        index: u8,
    },

    /// Another permission in the scope already uses this key.
    #[error("permission key '{key}' is already defined in scope {scope}")]
    DuplicatePermissionKey {
        /// Scope being defined.
        scope: ScopeType,
        /// Offending key.
        key: String,
    },

    /// A group or lookup referenced a key the scope does not define.
    #[error("permission '{key}' is not defined in scope {scope}")]
    UnknownPermission {
        /// Scope being searched.
        scope: ScopeType,
        /// Missing key.
        key: String,
    },

    /// A bit from one scope was placed into a group of another scope.
    #[error("permission from scope {actual} cannot be used in scope {expected}")]
    ScopeMismatch {
        /// Scope of the group.
        expected: ScopeType,
        /// Scope of the bit.
        actual: ScopeType,
    },

    /// A group with this name already exists in the scope.
    #[error("group '{name}' is already defined in scope {scope}")]
    DuplicateGroup {
        /// Scope being defined.
        scope: ScopeType,
        /// Offending group name.
        name: String,
    },

    /// A role referenced a group the scope does not define.
    #[error("group '{name}' is not defined in scope {scope}")]
    UnknownGroup {
        /// Scope being searched.
        scope: ScopeType,
        /// Missing group name.
        name: String,
    },

    /// A role with this key already exists in the scope.
    #[error("role '{role}' is already defined in scope {scope}")]
    DuplicateRole {
        /// Scope being defined.
        scope: ScopeType,
        /// Offending role key.
        role: String,
    },

    /// A higher tier is missing bits granted to a lower tier.
    #[error("role '{higher}' does not include every permission of '{lower}' in scope {scope}")]
    TierNotMonotonic {
        /// Scope being verified.
        scope: ScopeType,
        /// Lower tier role key.
        lower: String,
        /// Higher tier role key.
        higher: String,
    },
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::with_source(
            ErrorKind::Configuration,
            format!("Permission catalog error: {err}"),
            err,
        )
    }
}
