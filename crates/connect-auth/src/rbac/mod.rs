//! Permission evaluation: allow/deny reconciliation and role classes.

pub mod effective;
pub mod roles;

pub use effective::{
    can_perform, can_perform_all, can_perform_any, effective, has, has_all, has_any,
};
pub use roles::RoleClasses;
