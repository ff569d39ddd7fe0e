//! Command definitions and dispatch.

use std::io::Read;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tabled::Tabled;

use connect_auth::catalog::{Catalog, ScopeDescription};
use connect_auth::{AuthorizationContext, PolicyVersionRegistry, TokenValidator};
use connect_core::config::AppConfig;
use connect_core::error::AppError;
use connect_core::{AppResult, ScopeType};

use crate::output::{self, OutputFormat};
use crate::report::{DecisionReport, RejectionReport};

/// Exit status for a rejected token.
pub const EXIT_REJECTED: u8 = 2;

/// Connect authorization inspector
#[derive(Debug, Parser)]
#[command(name = "authz-inspect", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment overlay (config/{env})
    #[arg(short, long, env = "CONNECT_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a token and print the authorization decision
    Validate(ValidateArgs),
    /// Print the built-in permission catalog
    Catalog(CatalogArgs),
}

/// Arguments for `validate`
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Token to validate; read from stdin when omitted
    #[arg(short, long)]
    pub token: Option<String>,

    /// Scope used to name effective permissions and resolve --check keys
    #[arg(short, long, default_value = "WEB")]
    pub scope: ScopeType,

    /// Permission key to test against the effective mask (repeatable)
    #[arg(short, long = "check")]
    pub checks: Vec<String>,
}

/// Arguments for `catalog`
#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Only print this scope
    #[arg(short, long)]
    pub scope: Option<ScopeType>,
}

impl Cli {
    /// Execute the command
    pub fn execute(&self, config: &AppConfig) -> AppResult<ExitCode> {
        let catalog = Catalog::builtin()?;
        match &self.command {
            Commands::Validate(args) => validate(args, config, &catalog, self.format),
            Commands::Catalog(args) => {
                print_catalog(args, &catalog, self.format);
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

fn validate(
    args: &ValidateArgs,
    config: &AppConfig,
    catalog: &Catalog,
    format: OutputFormat,
) -> AppResult<ExitCode> {
    let token = match &args.token {
        Some(token) => token.trim().to_string(),
        None => read_stdin()?,
    };

    if config.auth.is_default_secret() {
        tracing::warn!(
            "No JWT secret configured, verifying against the placeholder; set CONNECT__AUTH__JWT_SECRET"
        );
    }

    let registry = Arc::new(PolicyVersionRegistry::from_config(&config.policy));
    let validator = TokenValidator::new(&config.auth, registry);

    match validator.validate(&token) {
        Ok(claims) => {
            let context = AuthorizationContext::new(claims);
            DecisionReport::new(&context, catalog, args.scope, &args.checks).print(format);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            RejectionReport::from(&err).print(format);
            Ok(ExitCode::from(EXIT_REJECTED))
        }
    }
}

fn read_stdin() -> Result<String, AppError> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer.trim().to_string())
}

/// Permission display row for table output
#[derive(Debug, Tabled)]
struct PermissionRow {
    /// Bit index
    bit: u8,
    /// Permission key
    key: String,
    /// Description
    description: String,
}

/// Role display row for table output
#[derive(Debug, Tabled)]
struct RoleRow {
    /// Role key
    role: String,
    /// Display name
    name: String,
    /// Resolved mask
    mask: String,
}

fn permission_rows(scope: &ScopeDescription) -> Vec<PermissionRow> {
    scope
        .permissions
        .iter()
        .map(|p| PermissionRow {
            bit: p.bit,
            key: p.key.clone(),
            description: p.description.clone(),
        })
        .collect()
}

fn role_rows(scope: &ScopeDescription) -> Vec<RoleRow> {
    scope
        .roles
        .iter()
        .map(|r| RoleRow {
            role: r.key.clone(),
            name: r.name.clone(),
            mask: output::hex(r.mask),
        })
        .collect()
}

fn print_catalog(args: &CatalogArgs, catalog: &Catalog, format: OutputFormat) {
    let mut description = catalog.describe();
    if let Some(scope) = args.scope {
        description.scopes.retain(|s, _| *s == scope);
    }

    match format {
        OutputFormat::Json => output::print_json(&description),
        OutputFormat::Text => {
            for scope in description.scopes.values() {
                output::print_heading(&format!(
                    "{} ({} permissions)",
                    scope.scope,
                    scope.permissions.len()
                ));
                output::print_table(&permission_rows(scope));
                output::print_table(&role_rows(scope));
                println!();
            }
        }
    }
}
