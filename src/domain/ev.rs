//! Expected value of an offered price against a fair probability.

use rust_decimal::Decimal;

use super::odds::american_to_decimal;

/// EV percentages are reported to two decimal places.
pub const EV_PERCENT_DP: u32 = 2;

/// Expected return, in percent of stake, of betting `offered_american` when
/// the outcome's true probability is `fair_prob`.
///
/// `round((decimal * fair_prob - 1) * 100, 2)`. Returns `None` when the
/// probability is missing or not positive, or the price does not convert.
#[must_use]
pub fn calculate_ev(fair_prob: Option<Decimal>, offered_american: Decimal) -> Option<Decimal> {
    let fair_prob = fair_prob.filter(|p| *p > Decimal::ZERO)?;
    let decimal = american_to_decimal(offered_american)?;
    ev_percent(fair_prob, decimal)
}

/// EV percent from decimal odds directly.
#[must_use]
pub fn ev_percent(fair_prob: Decimal, decimal_odds: Decimal) -> Option<Decimal> {
    let expected = decimal_odds.checked_mul(fair_prob)? - Decimal::ONE;
    Some(expected.checked_mul(Decimal::ONE_HUNDRED)?.round_dp(EV_PERCENT_DP))
}
