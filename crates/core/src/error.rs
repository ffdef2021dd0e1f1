//! Billing error model.

use thiserror::Error;

/// Result type used across the billing domain.
pub type BillingResult<T> = Result<T, BillingError>;

/// Billing failure.
///
/// Statement generation is all-or-nothing: any variant aborts the whole
/// statement and no partial text is produced. Keep the two lookup-shaped
/// failures distinct: a missing catalog entry is not a genre problem.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BillingError {
    /// A performance references a play identifier with no catalog entry.
    #[error("no play in catalog for id: {0}")]
    MissingPlay(String),

    /// A resolved play's genre is outside the supported pricing set.
    #[error("unknown play type: {0}")]
    UnknownPlayType(String),
}

impl BillingError {
    pub fn missing_play(id: impl Into<String>) -> Self {
        Self::MissingPlay(id.into())
    }

    pub fn unknown_play_type(genre: impl Into<String>) -> Self {
        Self::UnknownPlayType(genre.into())
    }
}
