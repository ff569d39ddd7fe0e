//! # connect-core
//!
//! Core crate for the Connect authorization libraries. Contains the
//! configuration schemas, the authorization scope enumeration, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other Connect crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
pub use types::ScopeType;
