//! Core type definitions shared across the Connect workspace.

pub mod scope;

pub use scope::ScopeType;
