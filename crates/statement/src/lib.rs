//! Statement rendering module.
//!
//! Iterates an invoice's performances, resolves each play in the catalog,
//! prices it, and assembles the human-readable billing statement.

pub mod printer;

pub use printer::{statement, StatementPrinter};
