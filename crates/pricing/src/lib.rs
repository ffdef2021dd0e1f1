//! Pricing policy domain module.
//!
//! Pure functions computing the amount owed and the volume credits earned for
//! one performance, given the play's genre and the audience size. The whole
//! rule table lives in one frozen [`PricingConfig`] value.

pub mod policy;

pub use policy::PricingConfig;
