//! `stagebill-core` — billing domain building blocks.
//!
//! This crate contains **pure domain** primitives (no I/O, no formatting
//! locale machinery beyond the single USD rendering rule).

pub mod error;
pub mod money;

pub use error::{BillingError, BillingResult};
pub use money::Cents;
