//! A priced +EV opportunity.

use rust_decimal::Decimal;
use serde::Serialize;

use super::id::BookId;
use super::market::Market;
use super::odds::AmericanOdds;

/// An over bet at a competing book that beats the reference book's fair
/// price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvResult {
    pub player: String,
    pub market: Market,
    pub sportsbook: BookId,
    /// The reference line's vig-free over price.
    pub fair_american_odds: AmericanOdds,
    /// The competing book's over price, truncated to an integer.
    pub offered_odds: i64,
    /// Expected return in percent of stake, two decimal places.
    pub ev_percent: Decimal,
}

impl EvResult {
    /// Offered price with an explicit sign.
    #[must_use]
    pub fn offered(&self) -> AmericanOdds {
        AmericanOdds::new(self.offered_odds)
    }
}
