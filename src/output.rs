//! Table and JSON output formatting.

use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables and key/value listing
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Print a serializable item as pretty JSON
pub fn print_json<T: Serialize>(item: &T) {
    let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
    println!("{}", json);
}

/// Print rows as a table
pub fn print_table<T: Tabled>(rows: &[T]) {
    if rows.is_empty() {
        println!("No results found.");
    } else {
        let table = Table::new(rows).to_string();
        println!("{}", table);
    }
}

/// Print a section heading
pub fn print_heading(title: &str) {
    println!("{}", title);
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}

/// Render a mask as zero-padded hex
pub fn hex(mask: u64) -> String {
    format!("{:#018x}", mask)
}
