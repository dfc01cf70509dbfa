//! The engine's per-run output.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{BookLineKey, EvResult, Side};

/// Why a joined record produced no price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    #[error("reference {side} price missing")]
    MissingReferenceSide { side: Side },

    #[error("reference {side} price '{raw}' is not a valid American price")]
    InvalidReferencePrice { side: Side, raw: String },

    #[error("reference line cannot be de-vigged")]
    DegenerateReferenceLine,

    #[error("offered over price missing")]
    MissingOfferedOver,

    #[error("offered over price '{raw}' is not a valid American price")]
    InvalidOfferedPrice { raw: String },

    #[error("fair price has no American equivalent")]
    UnpriceableFairOdds,
}

/// A joined record that was skipped, with its key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRecord {
    pub key: BookLineKey,
    pub reason: SkipReason,
}

/// Which informational state a report is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "count", rename_all = "snake_case")]
pub enum ReportOutcome {
    /// At least one provider had nothing to offer.
    NoData,
    /// Data was compared but nothing cleared the threshold.
    NothingAboveThreshold,
    /// This many results cleared the threshold.
    Found(usize),
}

/// Results and bookkeeping for one engine run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvReport {
    /// Minimum EV% a result had to exceed.
    pub threshold: Decimal,
    /// Rows delivered by the reference provider.
    pub reference_rows: usize,
    /// Rows delivered by the market provider.
    pub market_rows: usize,
    /// Ranked results, best EV first.
    pub results: Vec<EvResult>,
    pub skipped: Vec<SkippedRecord>,
    /// Joined records that were priced (above or below threshold).
    pub evaluated: usize,
    pub below_threshold: usize,
    /// Reference lines no competing book quoted.
    pub unmatched_reference: usize,
    /// Competing-book lines with no reference line.
    pub unmatched_market: usize,
    /// Rows dropped because their market label is not recognized.
    pub unrecognized_rows: usize,
}

impl EvReport {
    #[must_use]
    pub fn empty(threshold: Decimal, reference_rows: usize, market_rows: usize) -> Self {
        Self {
            threshold,
            reference_rows,
            market_rows,
            results: Vec::new(),
            skipped: Vec::new(),
            evaluated: 0,
            below_threshold: 0,
            unmatched_reference: 0,
            unmatched_market: 0,
            unrecognized_rows: 0,
        }
    }

    #[must_use]
    pub fn has_input(&self) -> bool {
        self.reference_rows > 0 && self.market_rows > 0
    }

    #[must_use]
    pub fn outcome(&self) -> ReportOutcome {
        if !self.has_input() {
            ReportOutcome::NoData
        } else if self.results.is_empty() {
            ReportOutcome::NothingAboveThreshold
        } else {
            ReportOutcome::Found(self.results.len())
        }
    }
}
