//! Outbound adapters (driven side).

pub mod odds_api;
pub mod reference;
