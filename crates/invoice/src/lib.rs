//! Invoice domain module.
//!
//! A customer name plus an ordered sequence of performances. Pure data, no
//! IO; amounts are computed elsewhere.

pub mod invoice;

pub use invoice::{Invoice, Performance};
