//! Authorization decision reports printed by the inspector.

use serde::Serialize;
use tabled::Tabled;

use connect_auth::catalog::Catalog;
use connect_auth::{AuthorizationContext, RoleClasses, TokenError};
use connect_core::ScopeType;

use crate::output::{self, OutputFormat};

/// Outcome of a single `--check` permission key.
#[derive(Debug, Serialize)]
pub struct PermissionCheck {
    pub key: String,
    /// `None` when the key is not defined in the scope.
    pub allowed: Option<bool>,
}

/// Check display row for table output
#[derive(Debug, Tabled)]
struct CheckRow {
    /// Permission key
    permission: String,
    /// Verdict
    verdict: &'static str,
}

impl From<&PermissionCheck> for CheckRow {
    fn from(check: &PermissionCheck) -> Self {
        let verdict = match check.allowed {
            Some(true) => "allowed",
            Some(false) => "denied",
            None => "unknown permission",
        };
        Self {
            permission: check.key.clone(),
            verdict,
        }
    }
}

/// Effective permission display row
#[derive(Debug, Tabled)]
struct EffectiveRow {
    /// Permission key
    permission: String,
}

/// Report for an accepted token.
#[derive(Debug, Serialize)]
pub struct DecisionReport {
    pub valid: bool,
    pub steamid: String,
    pub role: String,
    pub role_name: String,
    pub role_classes: RoleClasses,
    pub policy_version: u32,
    pub scope: ScopeType,
    pub allow_permissions: u64,
    pub deny_permissions: u64,
    pub effective_permissions: u64,
    pub effective_permission_names: Vec<String>,
    pub issued_at: Option<String>,
    pub expires_at: Option<String>,
    pub checks: Vec<PermissionCheck>,
}

impl DecisionReport {
    /// Builds the report for `context` in `scope`, evaluating each key in `checks`.
    pub fn new(
        context: &AuthorizationContext,
        catalog: &Catalog,
        scope: ScopeType,
        checks: &[String],
    ) -> Self {
        let claims = context.claims();
        let effective = claims.effective_permissions();

        let checks = checks
            .iter()
            .map(|key| PermissionCheck {
                key: key.clone(),
                allowed: catalog
                    .permission_by_key(scope, key)
                    .map(|bit| context.permission(bit.mask())),
            })
            .collect();

        Self {
            valid: true,
            steamid: claims.steam_id.clone(),
            role: claims.role.clone(),
            role_name: catalog.role_name(ScopeType::Web, &claims.role).to_string(),
            role_classes: context.role_classes(),
            policy_version: claims.policy_version,
            scope,
            allow_permissions: claims.allow_permissions,
            deny_permissions: claims.deny_permissions,
            effective_permissions: effective,
            effective_permission_names: catalog
                .list_set_permission_names(scope, effective)
                .into_iter()
                .map(str::to_string)
                .collect(),
            issued_at: claims.issued_at_datetime().map(|d| d.to_rfc3339()),
            expires_at: claims.expires_at_datetime().map(|d| d.to_rfc3339()),
            checks,
        }
    }

    /// Prints the report in `format`.
    pub fn print(&self, format: OutputFormat) {
        match format {
            OutputFormat::Json => output::print_json(self),
            OutputFormat::Text => {
                output::print_success("Token accepted");
                output::print_kv("SteamID", &self.steamid);
                output::print_kv("Role", &format!("{} ({})", self.role, self.role_name));
                output::print_kv(
                    "Role classes",
                    &format!(
                        "owner={} admin={} moderator={} staff={}",
                        self.role_classes.owner,
                        self.role_classes.admin,
                        self.role_classes.moderator,
                        self.role_classes.staff
                    ),
                );
                output::print_kv("Policy version", &self.policy_version.to_string());
                output::print_kv("Allow", &output::hex(self.allow_permissions));
                output::print_kv("Deny", &output::hex(self.deny_permissions));
                output::print_kv("Effective", &output::hex(self.effective_permissions));
                output::print_kv("Issued at", self.issued_at.as_deref().unwrap_or("-"));
                output::print_kv("Expires at", self.expires_at.as_deref().unwrap_or("-"));

                println!();
                output::print_heading(&format!("Effective {} permissions", self.scope));
                let effective: Vec<EffectiveRow> = self
                    .effective_permission_names
                    .iter()
                    .map(|name| EffectiveRow {
                        permission: name.clone(),
                    })
                    .collect();
                output::print_table(&effective);

                if !self.checks.is_empty() {
                    println!();
                    output::print_heading("Checks");
                    let checks: Vec<CheckRow> = self.checks.iter().map(CheckRow::from).collect();
                    output::print_table(&checks);
                }
            }
        }
    }
}

/// Report for a rejected token.
#[derive(Debug, Serialize)]
pub struct RejectionReport {
    pub valid: bool,
    pub error_code: &'static str,
    pub message: String,
    pub reauthenticate: bool,
}

impl From<&TokenError> for RejectionReport {
    fn from(err: &TokenError) -> Self {
        Self {
            valid: false,
            error_code: err.code(),
            message: err.to_string(),
            reauthenticate: err.requires_reauthentication(),
        }
    }
}

impl RejectionReport {
    /// Prints the report in `format`.
    pub fn print(&self, format: OutputFormat) {
        match format {
            OutputFormat::Json => output::print_json(self),
            OutputFormat::Text => {
                output::print_error(&format!("Token rejected ({})", self.error_code));
                output::print_kv("Reason", &self.message);
                output::print_kv("Re-authenticate", &self.reauthenticate.to_string());
            }
        }
    }
}
