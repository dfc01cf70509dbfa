//! Scan settings: the EV threshold and which books compete.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::BookId;

/// Books quoted against the reference line unless configured otherwise.
pub const DEFAULT_SUPPORTED_BOOKS: [&str; 8] = [
    "fanduel",
    "draftkings",
    "betmgm",
    "caesars",
    "pointsbetus",
    "betrivers",
    "wynnbet",
    "barstool",
];

/// Largest EV threshold accepted, in percent.
pub const MAX_THRESHOLD: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// `[scan]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Minimum EV% a bet must strictly exceed to be reported.
    #[serde(default = "default_threshold")]
    pub threshold: Decimal,

    /// Competing books, by odds feed key.
    #[serde(default = "default_supported_books")]
    pub supported_books: Vec<BookId>,
}

fn default_threshold() -> Decimal {
    Decimal::from(5)
}

fn default_supported_books() -> Vec<BookId> {
    DEFAULT_SUPPORTED_BOOKS.iter().map(BookId::new).collect()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            supported_books: default_supported_books(),
        }
    }
}
