//! Policy version configuration.
//!
//! The active policy version is an environment-style integer. Bumping it
//! invalidates every previously issued token that carries a version claim.

use serde::{Deserialize, Serialize};

/// Version used when no valid setting is found.
pub const DEFAULT_POLICY_VERSION: u32 = 1;

/// Where the active policy version is read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Primary variable holding the policy version.
    #[serde(default = "default_env_var")]
    pub env_var: String,
    /// Legacy variables consulted in order when the primary is absent or invalid.
    #[serde(default = "default_fallback_env_vars")]
    pub fallback_env_vars: Vec<String>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            env_var: default_env_var(),
            fallback_env_vars: default_fallback_env_vars(),
        }
    }
}

impl PolicyConfig {
    /// Resolves the policy version from the process environment.
    pub fn resolve_version(&self) -> u32 {
        self.resolve_version_with(|name| std::env::var(name).ok())
    }

    /// Resolves the policy version using `lookup` to read variables.
    ///
    /// The primary variable wins when it holds an integer >= 1. Otherwise the
    /// fallbacks are tried in order and the first valid one wins. When nothing
    /// is valid, [`DEFAULT_POLICY_VERSION`] is returned.
    pub fn resolve_version_with<F>(&self, lookup: F) -> u32
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(version) = read_version(&lookup, &self.env_var) {
            return version;
        }

        for name in &self.fallback_env_vars {
            if let Some(version) = read_version(&lookup, name) {
                tracing::info!(
                    variable = %name,
                    version,
                    "Policy version loaded from legacy variable"
                );
                return version;
            }
        }

        tracing::debug!(
            variable = %self.env_var,
            version = DEFAULT_POLICY_VERSION,
            "No policy version configured, using default"
        );
        DEFAULT_POLICY_VERSION
    }
}

/// Parses a policy version value; only integers >= 1 are valid.
pub fn parse_version(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|v| *v >= 1)
}

fn read_version<F>(lookup: &F, name: &str) -> Option<u32>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(name)?;
    let parsed = parse_version(&raw);
    if parsed.is_none() && !raw.trim().is_empty() {
        tracing::warn!(variable = %name, value = %raw, "Ignoring invalid policy version");
    }
    parsed
}

fn default_env_var() -> String {
    "POLICY_VERSION".to_string()
}

fn default_fallback_env_vars() -> Vec<String> {
    vec![
        "AUTHZ_POLICY_VERSION".to_string(),
        "AUTH_POLICY_VERSION".to_string(),
    ]
}
