//! Command-line front end: load plays and invoice JSON, print the statement.
//!
//! The statement goes to stdout; logs go to stderr so output stays pipeable.

use std::path::Path;

use anyhow::Context;

use stagebill_catalog::Catalog;
use stagebill_invoice::Invoice;

/// Load a play catalog from a JSON object keyed by play id.
pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading plays file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing plays file {}", path.display()))
}

/// Load an invoice from JSON.
pub fn load_invoice(path: &Path) -> anyhow::Result<Invoice> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading invoice file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing invoice file {}", path.display()))
}

/// Load both inputs and render the statement.
pub fn run(plays_path: &Path, invoice_path: &Path) -> anyhow::Result<String> {
    let catalog = load_catalog(plays_path)?;
    let invoice = load_invoice(invoice_path)?;
    tracing::debug!(
        plays = catalog.len(),
        performances = invoice.performances().len(),
        customer = invoice.customer(),
        "inputs loaded"
    );
    let text = stagebill_statement::statement(&invoice, &catalog)?;
    Ok(text)
}
