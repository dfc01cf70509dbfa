//! American/decimal odds conversion and implied probability.
//!
//! All conversions are total: inputs that cannot be priced (zero, degenerate
//! or malformed) yield `None` and the caller skips the quote.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// Decimal odds are carried at four decimal places.
pub const DECIMAL_ODDS_DP: u32 = 4;

/// An integer American price.
///
/// Displays (and serializes) with an explicit sign: `+150`, `-120`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AmericanOdds(i64);

impl AmericanOdds {
    /// Wrap a raw American price.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The signed integer value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Convert to decimal odds.
    #[must_use]
    pub fn to_decimal(self) -> Option<Decimal> {
        american_to_decimal(Decimal::from(self.0))
    }
}

impl fmt::Display for AmericanOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

impl Serialize for AmericanOdds {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse an American price from text such as `"+150"`, `"-120"` or `"110.0"`.
///
/// Surrounding whitespace and a single leading `+` are accepted.
#[must_use]
pub fn parse_american(text: &str) -> Option<Decimal> {
    let text = text.trim();
    let unsigned = text.strip_prefix('+').unwrap_or(text);
    if unsigned.is_empty() || (unsigned.len() != text.len() && unsigned.starts_with('-')) {
        return None;
    }
    Decimal::from_str(unsigned).ok()
}

/// Convert American odds to decimal odds, rounded to [`DECIMAL_ODDS_DP`].
///
/// Positive prices map to `odds/100 + 1`, negative prices to
/// `100/|odds| + 1`. Zero is not a price.
#[must_use]
pub fn american_to_decimal(odds: Decimal) -> Option<Decimal> {
    let payout = if odds > Decimal::ZERO {
        odds.checked_div(Decimal::ONE_HUNDRED)?
    } else if odds < Decimal::ZERO {
        Decimal::ONE_HUNDRED.checked_div(odds.abs())?
    } else {
        return None;
    };
    let decimal = payout.checked_add(Decimal::ONE)?;
    Some(decimal.round_dp(DECIMAL_ODDS_DP))
}

/// Convert decimal odds to an American price.
///
/// Prices of 2.0 and above become underdog prices (`+round((d-1)*100)`),
/// prices strictly between 1.0 and 2.0 become favorite prices
/// (`-round(100/(d-1))`). Anything at or below 1.0 pays nothing and has no
/// American equivalent. Rounding is half-to-even.
#[must_use]
pub fn decimal_to_american(decimal: Decimal) -> Option<AmericanOdds> {
    if decimal <= Decimal::ONE {
        return None;
    }
    let profit = decimal - Decimal::ONE;
    let american = if decimal >= Decimal::TWO {
        profit.checked_mul(Decimal::ONE_HUNDRED)?.round_dp(0)
    } else {
        -Decimal::ONE_HUNDRED.checked_div(profit)?.round_dp(0)
    };
    american.to_i64().map(AmericanOdds)
}

/// Implied probability of decimal odds (`1 / decimal`).
#[must_use]
pub fn implied_prob(decimal_odds: Decimal) -> Option<Decimal> {
    if decimal_odds <= Decimal::ZERO {
        return None;
    }
    Decimal::ONE.checked_div(decimal_odds)
}
