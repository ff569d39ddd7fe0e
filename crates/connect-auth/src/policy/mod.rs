//! Active policy version used for mass token invalidation.

pub mod error;
pub mod registry;

pub use error::PolicyError;
pub use registry::PolicyVersionRegistry;
