//! The EV engine: join, de-vig, price and rank.
//!
//! Runs synchronously over rows that providers have already fetched. A bad
//! record never fails the run; it becomes a [`SkippedRecord`] in the report.

use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::report::{EvReport, SkipReason, SkippedRecord};
use crate::domain::ev::ev_percent;
use crate::domain::vig::{fair_decimal_odds, overround};
use crate::domain::{
    decimal_to_american, implied_prob, remove_vig, AmericanOdds, BookLineKey, EvResult, LineKey,
    Market, QuoteBook, QuotePair, RawPrice, Side,
};
use crate::port::{MarketRow, ReferenceRow};

/// A reference line paired with one competing book's quote on the same line.
#[derive(Debug, Clone, Copy)]
pub struct JoinedRecord<'a> {
    pub key: &'a BookLineKey,
    pub reference: &'a QuotePair,
    pub offered: &'a QuotePair,
}

/// Prices derived for one joined record.
#[derive(Debug, Clone, PartialEq)]
pub struct Pricing {
    pub fair_over_prob: Decimal,
    pub fair_american_odds: AmericanOdds,
    pub offered_odds: i64,
    pub ev_percent: Decimal,
}

fn reference_decimal(pair: &QuotePair, side: Side) -> Result<Decimal, SkipReason> {
    let raw = pair
        .side(side)
        .ok_or(SkipReason::MissingReferenceSide { side })?;
    raw.to_decimal_odds()
        .ok_or_else(|| SkipReason::InvalidReferencePrice {
            side,
            raw: raw.to_string(),
        })
}

fn offered_price(pair: &QuotePair) -> Result<(&RawPrice, Decimal), SkipReason> {
    let raw = pair.over().ok_or(SkipReason::MissingOfferedOver)?;
    let decimal = raw
        .to_decimal_odds()
        .ok_or_else(|| SkipReason::InvalidOfferedPrice {
            raw: raw.to_string(),
        })?;
    Ok((raw, decimal))
}

/// Price the over side of one joined record against the reference line.
///
/// # Errors
///
/// Returns the first [`SkipReason`] that prevents pricing.
pub fn price_record(record: &JoinedRecord<'_>) -> Result<Pricing, SkipReason> {
    let over_decimal = reference_decimal(record.reference, Side::Over)?;
    let under_decimal = reference_decimal(record.reference, Side::Under)?;

    let over_prob = implied_prob(over_decimal);
    let under_prob = implied_prob(under_decimal);
    let (fair_over_prob, _) =
        remove_vig(over_prob, under_prob).ok_or(SkipReason::DegenerateReferenceLine)?;

    let (offered_raw, offered_decimal) = offered_price(record.offered)?;
    let ev = ev_percent(fair_over_prob, offered_decimal)
        .ok_or_else(|| SkipReason::InvalidOfferedPrice {
            raw: offered_raw.to_string(),
        })?;
    let offered_odds = offered_raw
        .to_american_integer()
        .ok_or_else(|| SkipReason::InvalidOfferedPrice {
            raw: offered_raw.to_string(),
        })?;

    let fair_american_odds = fair_decimal_odds(over_prob, under_prob)
        .and_then(decimal_to_american)
        .ok_or(SkipReason::UnpriceableFairOdds)?;

    debug!(
        line = %record.key,
        margin = ?overround(over_prob, under_prob),
        fair_over_prob = %fair_over_prob,
        ev_percent = %ev,
        "Priced record"
    );

    Ok(Pricing {
        fair_over_prob,
        fair_american_odds,
        offered_odds,
        ev_percent: ev,
    })
}

/// Joins reference and competing lines and ranks +EV over bets.
#[derive(Debug, Clone)]
pub struct EvEngine {
    threshold: Decimal,
}

impl EvEngine {
    /// Create an engine keeping results whose EV% is strictly above `threshold`.
    #[must_use]
    pub const fn new(threshold: Decimal) -> Self {
        Self { threshold }
    }

    /// Evaluate every competing quote that has a matching reference line.
    ///
    /// Results are sorted by EV% descending; the sort is stable, so results
    /// with equal EV% keep the market provider's row order.
    #[must_use]
    pub fn evaluate(&self, reference_rows: &[ReferenceRow], market_rows: &[MarketRow]) -> EvReport {
        let mut report = EvReport::empty(self.threshold, reference_rows.len(), market_rows.len());
        if !report.has_input() {
            info!(
                reference_rows = reference_rows.len(),
                market_rows = market_rows.len(),
                "No odds to compare"
            );
            return report;
        }

        let (reference, unrecognized_reference) = index_reference(reference_rows);
        let (offers, unrecognized_market) = index_market(market_rows);
        report.unrecognized_rows = unrecognized_reference + unrecognized_market;

        let mut matched: HashSet<&LineKey> = HashSet::new();
        for (key, offered) in offers.iter() {
            let Some(reference_pair) = reference.get(&key.line) else {
                report.unmatched_market += 1;
                debug!(line = %key, "No reference line");
                continue;
            };
            matched.insert(&key.line);
            self.evaluate_record(
                &JoinedRecord {
                    key,
                    reference: reference_pair,
                    offered,
                },
                &mut report,
            );
        }

        report.unmatched_reference = reference
            .iter()
            .filter(|(key, _)| !matched.contains(key))
            .count();
        report
            .results
            .sort_by(|a, b| b.ev_percent.cmp(&a.ev_percent));

        info!(
            reference_lines = reference.len(),
            market_lines = offers.len(),
            evaluated = report.evaluated,
            found = report.results.len(),
            below_threshold = report.below_threshold,
            skipped = report.skipped.len(),
            unmatched_reference = report.unmatched_reference,
            unmatched_market = report.unmatched_market,
            unrecognized = report.unrecognized_rows,
            threshold = %self.threshold,
            "Evaluation complete"
        );
        report
    }

    fn evaluate_record(&self, record: &JoinedRecord<'_>, report: &mut EvReport) {
        match price_record(record) {
            Ok(pricing) => {
                report.evaluated += 1;
                if pricing.ev_percent > self.threshold {
                    report.results.push(EvResult {
                        player: record.key.line.player.clone(),
                        market: record.key.line.market,
                        sportsbook: record.key.book.clone(),
                        fair_american_odds: pricing.fair_american_odds,
                        offered_odds: pricing.offered_odds,
                        ev_percent: pricing.ev_percent,
                    });
                } else {
                    report.below_threshold += 1;
                }
            }
            Err(reason) => {
                warn!(line = %record.key, reason = %reason, "Skipping record");
                report.skipped.push(SkippedRecord {
                    key: record.key.clone(),
                    reason,
                });
            }
        }
    }
}

fn resolve_market(label: &str) -> Option<Market> {
    let market = Market::from_label(label);
    if market.is_none() {
        debug!(market = label, "Unrecognized market label");
    }
    market
}

fn index_reference(rows: &[ReferenceRow]) -> (QuoteBook<LineKey>, usize) {
    let mut book = QuoteBook::new();
    let mut unrecognized = 0;
    for row in rows {
        match resolve_market(&row.market) {
            Some(market) => {
                book.upsert_pair(LineKey::new(&row.player, market), row.pair());
            }
            None => unrecognized += 1,
        }
    }
    (book, unrecognized)
}

fn index_market(rows: &[MarketRow]) -> (QuoteBook<BookLineKey>, usize) {
    let mut book = QuoteBook::new();
    let mut unrecognized = 0;
    for row in rows {
        match resolve_market(&row.market) {
            Some(market) => {
                let key = BookLineKey::new(LineKey::new(&row.player, market), row.book.clone());
                book.upsert_pair(key, row.pair());
            }
            None => unrecognized += 1,
        }
    }
    (book, unrecognized)
}
