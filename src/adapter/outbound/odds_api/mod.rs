//! The Odds API market-odds provider.

pub mod client;
pub mod dto;
pub mod settings;

pub use client::OddsApiClient;
pub use settings::{OddsApiConfig, OddsApiHttpConfig, API_KEY_ENV};
