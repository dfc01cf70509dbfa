//! Propedge - player-prop +EV scanning against a no-vig reference line.
//!
//! A reference ("sharp") book's two-sided lines are de-vigged into fair
//! probabilities; competing books' over prices are then priced against them
//! and anything whose expected value clears a threshold is reported.
//!
//! # Architecture
//!
//! - [`domain`] - Odds conversion, vig removal, EV, quote accumulation.
//!   Pure and synchronous.
//! - [`port`] - Provider traits the application depends on
//! - [`application`] - The EV engine and the scan use case
//! - [`adapter`] - The Odds API client, the reference snapshot reader and
//!   the CLI
//! - [`infrastructure`] - TOML configuration and logging setup
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use propedge::application::EvEngine;
//! use propedge::port::{MarketRow, ReferenceRow};
//! use rust_decimal::Decimal;
//!
//! let engine = EvEngine::new(Decimal::from(5));
//! let report = engine.evaluate(
//!     &[ReferenceRow::new("Aaron Judge", "Total Bases", Some("-110".into()), Some("-110".into()))],
//!     &[MarketRow::new("Aaron Judge", "Total Bases", "draftkings", Some(120.into()), None)],
//! );
//! assert_eq!(report.results.len(), 1);
//! assert_eq!(report.results[0].fair_american_odds.to_string(), "+100");
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
