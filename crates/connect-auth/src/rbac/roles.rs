//! Platform role classes carried in the token `role` claim.
//!
//! The classes form an inclusion chain: owner ⊂ admin ⊂ moderator ⊂ staff.
//! They only inspect the role string and never consult permission masks.

use serde::Serialize;

/// Platform owner.
pub const ROLE_OWNER: &str = "web_owner";
/// Platform administrator.
pub const ROLE_ADMIN: &str = "web_admin";
/// Platform moderator.
pub const ROLE_MODERATOR: &str = "web_moderator";
/// Platform staff.
pub const ROLE_STAFF: &str = "web_staff";
/// Baseline role assigned when a token carries none.
pub const ROLE_USER: &str = "web_user";

/// Returns `true` only for the owner role.
pub fn is_owner(role: &str) -> bool {
    role == ROLE_OWNER
}

/// Returns `true` for the admin or owner role.
pub fn is_admin(role: &str) -> bool {
    role == ROLE_ADMIN || is_owner(role)
}

/// Returns `true` for the moderator role or any admin.
pub fn is_moderator(role: &str) -> bool {
    role == ROLE_MODERATOR || is_admin(role)
}

/// Returns `true` for the staff role or any moderator.
pub fn is_staff(role: &str) -> bool {
    role == ROLE_STAFF || is_moderator(role)
}

/// Snapshot of every role-class predicate for one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RoleClasses {
    pub owner: bool,
    pub admin: bool,
    pub moderator: bool,
    pub staff: bool,
}

impl RoleClasses {
    /// Evaluates every predicate for `role`.
    pub fn of(role: &str) -> Self {
        Self {
            owner: is_owner(role),
            admin: is_admin(role),
            moderator: is_moderator(role),
            staff: is_staff(role),
        }
    }
}
