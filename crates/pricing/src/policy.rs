use serde::{Deserialize, Serialize};

use stagebill_catalog::{Genre, Play};
use stagebill_core::{BillingError, BillingResult, Cents};

/// Frozen pricing configuration.
///
/// One value of this struct is the entire rule table; the policy functions
/// close over it. Tuning a rate or threshold means changing a field here,
/// never the branching below. Amounts are in cents, thresholds in attendees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Attendees above this earn one base volume credit each, any genre.
    pub base_volume_credit_threshold: u32,
    /// Comedy earns one extra credit per this many attendees.
    pub comedy_extra_volume_factor: u32,
    pub tragedy_base_amount: u64,
    pub tragedy_audience_threshold: u32,
    pub tragedy_over_capacity_per_person: u64,
    pub comedy_base_amount: u64,
    pub comedy_audience_threshold: u32,
    /// Flat bonus charged once the comedy threshold is exceeded.
    pub comedy_over_capacity_amount: u64,
    pub comedy_over_capacity_per_person: u64,
    /// Charged per attendee regardless of any threshold.
    pub comedy_amount_per_audience: u64,
    pub cents_per_dollar: u64,
}

impl PricingConfig {
    pub const DEFAULT: PricingConfig = PricingConfig {
        base_volume_credit_threshold: 30,
        comedy_extra_volume_factor: 5,
        tragedy_base_amount: 40_000,
        tragedy_audience_threshold: 30,
        tragedy_over_capacity_per_person: 1_000,
        comedy_base_amount: 30_000,
        comedy_audience_threshold: 20,
        comedy_over_capacity_amount: 10_000,
        comedy_over_capacity_per_person: 500,
        comedy_amount_per_audience: 300,
        cents_per_dollar: 100,
    };

    /// Amount owed for one performance, in cents.
    ///
    /// Deterministic in `(genre, audience)`. Fails with `UnknownPlayType` for
    /// any genre outside {tragedy, comedy}; adding a genre means adding a
    /// match arm here, nothing else.
    pub fn amount(&self, play: &Play, audience: u32) -> BillingResult<Cents> {
        let audience = u64::from(audience);
        let amount = match &play.genre {
            Genre::Tragedy => {
                let mut result = self.tragedy_base_amount;
                let over = audience.saturating_sub(u64::from(self.tragedy_audience_threshold));
                if over > 0 {
                    result += self.tragedy_over_capacity_per_person * over;
                }
                result
            }
            Genre::Comedy => {
                let mut result = self.comedy_base_amount;
                let over = audience.saturating_sub(u64::from(self.comedy_audience_threshold));
                if over > 0 {
                    result += self.comedy_over_capacity_amount
                        + self.comedy_over_capacity_per_person * over;
                }
                result += self.comedy_amount_per_audience * audience;
                result
            }
            Genre::Other(genre) => {
                return Err(BillingError::unknown_play_type(genre.clone()));
            }
        };
        Ok(Cents(amount))
    }

    /// Volume credits earned for one performance.
    ///
    /// Base credits apply uniformly; genre only ever adds a bonus, so this
    /// never fails even for unsupported genres.
    pub fn volume_credits(&self, play: &Play, audience: u32) -> u64 {
        let audience = u64::from(audience);
        let mut credits =
            audience.saturating_sub(u64::from(self.base_volume_credit_threshold));
        if play.genre == Genre::Comedy {
            credits += audience / u64::from(self.comedy_extra_volume_factor);
        }
        credits
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
