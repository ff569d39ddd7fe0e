//! # connect-auth
//!
//! Multi-scope bitmask authorization for the Connect platform.
//!
//! ## Modules
//!
//! - `catalog` — Per-scope permission bits, groups, and role presets
//! - `rbac` — Allow/deny reconciliation and platform role classes
//! - `policy` — Active policy version used for mass token invalidation
//! - `jwt` — HMAC token validation and claims extraction
//! - `context` — Per-request authorization facade

pub mod catalog;
pub mod context;
pub mod jwt;
pub mod policy;
pub mod rbac;

pub use catalog::{Catalog, CatalogBuilder, CatalogError};
pub use context::AuthorizationContext;
pub use jwt::{Claims, TokenError, TokenValidator, validate_token};
pub use policy::{PolicyError, PolicyVersionRegistry};
pub use rbac::RoleClasses;
