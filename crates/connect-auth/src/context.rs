//! Per-request authorization facade over validated claims.

use connect_core::ScopeType;
use connect_core::error::AppError;

use crate::catalog::Catalog;
use crate::jwt::Claims;
use crate::rbac::RoleClasses;

/// Read-only view of one request's validated claims.
///
/// Owned by the request that created it and never shared.
#[derive(Debug, Clone)]
pub struct AuthorizationContext {
    claims: Claims,
}

impl AuthorizationContext {
    /// Wraps validated claims.
    pub fn new(claims: Claims) -> Self {
        Self { claims }
    }

    /// Returns the underlying claims.
    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    pub fn steam_id(&self) -> &str {
        &self.claims.steam_id
    }

    pub fn role(&self) -> &str {
        &self.claims.role
    }

    /// Returns `true` if `permission` is allowed and not denied.
    pub fn permission(&self, permission: u64) -> bool {
        self.claims.has_permission(permission)
    }

    /// Returns `true` if the role equals `role_key` exactly.
    pub fn role_equals(&self, role_key: &str) -> bool {
        self.claims.role == role_key
    }

    pub fn is_owner(&self) -> bool {
        self.claims.is_owner()
    }

    pub fn is_admin(&self) -> bool {
        self.claims.is_admin()
    }

    pub fn is_moderator(&self) -> bool {
        self.claims.is_moderator()
    }

    pub fn is_staff(&self) -> bool {
        self.claims.is_staff()
    }

    /// Evaluates every role-class predicate at once.
    pub fn role_classes(&self) -> RoleClasses {
        RoleClasses::of(&self.claims.role)
    }

    /// Fails with an authorization error unless `permission` is held.
    pub fn require_permission(&self, permission: u64) -> Result<(), AppError> {
        if self.permission(permission) {
            Ok(())
        } else {
            tracing::debug!(
                steam_id = %self.claims.steam_id,
                permission = %format!("{permission:#x}"),
                "Permission denied"
            );
            Err(AppError::authorization(format!(
                "User '{}' does not have permission {permission:#x}",
                self.claims.steam_id
            )))
        }
    }

    /// Fails with an authorization error unless the role is one of `roles`.
    pub fn require_role(&self, roles: &[&str]) -> Result<(), AppError> {
        if roles.iter().any(|r| self.role_equals(r)) {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "Role '{}' is not one of: {}",
                self.claims.role,
                roles.join(", ")
            )))
        }
    }

    /// Lists the web-scope names of the effective mask, ascending by bit.
    pub fn effective_permission_names<'a>(&self, catalog: &'a Catalog) -> Vec<&'a str> {
        catalog.list_set_permission_names(ScopeType::Web, self.claims.effective_permissions())
    }
}

impl From<Claims> for AuthorizationContext {
    fn from(claims: Claims) -> Self {
        Self::new(claims)
    }
}
