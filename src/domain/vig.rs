//! Proportional vig removal for a two-way line.
//!
//! Both probabilities must come from the same book's over/under prices on
//! the same line. Their sum exceeds one by the book's margin; dividing each
//! side by the sum recovers a fair pair that sums to one.

use rust_decimal::Decimal;

/// Remove the vig from an over/under pair of implied probabilities.
///
/// Returns `(fair_over, fair_under)`, or `None` when either side is missing
/// or not strictly positive (which also covers a zero total).
#[must_use]
pub fn remove_vig(
    over_prob: Option<Decimal>,
    under_prob: Option<Decimal>,
) -> Option<(Decimal, Decimal)> {
    let (over, under, total) = line_total(over_prob, under_prob)?;
    Some((over.checked_div(total)?, under.checked_div(total)?))
}

/// Fair decimal odds for the over side: `total / over`.
///
/// Mathematically equal to `1 / fair_over`, but avoids re-dividing an
/// already rounded probability, so a symmetric line prices at exactly 2.0.
#[must_use]
pub fn fair_decimal_odds(over_prob: Option<Decimal>, under_prob: Option<Decimal>) -> Option<Decimal> {
    let (over, _, total) = line_total(over_prob, under_prob)?;
    total.checked_div(over)
}

/// The book's margin on the line (`over + under - 1`).
#[must_use]
pub fn overround(over_prob: Option<Decimal>, under_prob: Option<Decimal>) -> Option<Decimal> {
    let (_, _, total) = line_total(over_prob, under_prob)?;
    Some(total - Decimal::ONE)
}

fn line_total(
    over_prob: Option<Decimal>,
    under_prob: Option<Decimal>,
) -> Option<(Decimal, Decimal, Decimal)> {
    let over = over_prob.filter(|p| *p > Decimal::ZERO)?;
    let under = under_prob.filter(|p| *p > Decimal::ZERO)?;
    let total = over.checked_add(under)?;
    Some((over, under, total))
}
