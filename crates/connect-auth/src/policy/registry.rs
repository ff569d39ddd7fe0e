//! Process-wide active policy version.

use std::sync::atomic::{AtomicU32, Ordering};

use connect_core::config::PolicyConfig;

use super::error::PolicyError;

/// Holds the currently active policy version.
///
/// Reads are a single atomic load. [`rotate`](Self::rotate) publishes a new
/// version with release ordering so validations running concurrently observe
/// either the old or the new integer, never a torn value.
#[derive(Debug)]
pub struct PolicyVersionRegistry {
    /// Active version, always >= 1.
    current: AtomicU32,
}

impl PolicyVersionRegistry {
    /// Creates a registry holding `version`.
    pub fn new(version: u32) -> Result<Self, PolicyError> {
        check_version(version)?;
        Ok(Self {
            current: AtomicU32::new(version),
        })
    }

    /// Creates a registry from the configured variables of the process environment.
    pub fn from_config(config: &PolicyConfig) -> Self {
        Self::from_lookup(config, |name| std::env::var(name).ok())
    }

    /// Creates a registry resolving variables through `lookup`.
    pub fn from_lookup<F>(config: &PolicyConfig, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // resolve_version_with never yields a version below 1
        let version = config.resolve_version_with(lookup);
        tracing::info!(version, "Policy version loaded");
        Self {
            current: AtomicU32::new(version),
        }
    }

    /// Returns the active version.
    pub fn current(&self) -> u32 {
        self.current.load(Ordering::Acquire)
    }

    /// Publishes `version` and returns the version it replaced.
    ///
    /// Every token carrying an older `policy_version` is rejected from now on.
    pub fn rotate(&self, version: u32) -> Result<u32, PolicyError> {
        check_version(version)?;
        let previous = self.current.swap(version, Ordering::AcqRel);
        tracing::info!(previous, current = version, "Policy version rotated");
        Ok(previous)
    }
}

fn check_version(version: u32) -> Result<(), PolicyError> {
    if version == 0 {
        return Err(PolicyError::InvalidVersion(i64::from(version)));
    }
    Ok(())
}
