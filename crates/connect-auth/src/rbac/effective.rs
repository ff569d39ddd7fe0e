//! Allow/deny reconciliation over raw permission masks.
//!
//! Nothing here consults the catalog: masks are plain `u64` values and every
//! function is total.

/// Returns the effective mask: every allowed bit that is not denied.
///
/// Deny is absolute. A bit set in `deny` is never present in the result.
#[inline]
pub fn effective(allow: u64, deny: u64) -> u64 {
    allow & !deny
}

/// Returns `true` if every bit of `permission` is set in `mask`.
///
/// A zero `permission` is vacuously held.
#[inline]
pub fn has(mask: u64, permission: u64) -> bool {
    mask & permission == permission
}

/// Returns `true` if [`has`] holds for at least one permission.
pub fn has_any(mask: u64, permissions: &[u64]) -> bool {
    permissions.iter().any(|p| has(mask, *p))
}

/// Returns `true` if [`has`] holds for every permission (vacuously for none).
pub fn has_all(mask: u64, permissions: &[u64]) -> bool {
    permissions.iter().all(|p| has(mask, *p))
}

/// Checks `required` against the effective mask of `allow` and `deny`.
pub fn can_perform(allow: u64, deny: u64, required: u64) -> bool {
    has(effective(allow, deny), required)
}

/// Deny-aware [`has_any`].
pub fn can_perform_any(allow: u64, deny: u64, permissions: &[u64]) -> bool {
    has_any(effective(allow, deny), permissions)
}

/// Deny-aware [`has_all`].
pub fn can_perform_all(allow: u64, deny: u64, permissions: &[u64]) -> bool {
    has_all(effective(allow, deny), permissions)
}
