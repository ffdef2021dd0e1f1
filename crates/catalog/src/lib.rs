//! Plays catalog domain module.
//!
//! This crate contains the play metadata model and the catalog lookup,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod play;

pub use play::{Catalog, Genre, Play, PlayId};
