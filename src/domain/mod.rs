//! Provider-agnostic odds domain.
//!
//! Pure types and math: no I/O, no logging.
//!
//! - [`odds`] - American/decimal conversion and implied probability
//! - [`vig`] - Proportional vig removal
//! - [`ev`] - Expected value of an offered price
//! - [`quote`] - Raw prices, partial over/under pairs, keyed accumulation
//! - [`vocabulary`] - Provider market names resolved to [`Market`]

pub mod ev;
pub mod id;
pub mod market;
pub mod odds;
pub mod opportunity;
pub mod quote;
pub mod vig;
pub mod vocabulary;

pub use ev::calculate_ev;
pub use id::BookId;
pub use market::{Market, Side, UnknownMarket};
pub use odds::{american_to_decimal, decimal_to_american, implied_prob, parse_american, AmericanOdds};
pub use opportunity::EvResult;
pub use quote::{BookLineKey, LineKey, PriceQuote, QuoteBook, QuotePair, RawPrice};
pub use vig::remove_vig;
pub use vocabulary::MarketVocabulary;
