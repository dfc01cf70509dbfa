//! One scan: fetch both providers, then run the engine.

use tracing::{info, warn};

use super::engine::EvEngine;
use super::report::EvReport;
use crate::error::{ProviderError, Result};
use crate::port::{MarketOddsProvider, ReferenceOddsProvider};

/// Outcome of a scan, including which providers failed.
#[derive(Debug)]
pub struct ScanOutcome {
    pub report: EvReport,
    /// Error message from the reference provider, if it failed.
    pub reference_error: Option<String>,
    /// Error message from the market provider, if it failed.
    pub market_error: Option<String>,
}

/// Wires the two providers to the engine.
pub struct ScanService {
    reference: Box<dyn ReferenceOddsProvider>,
    market: Box<dyn MarketOddsProvider>,
    engine: EvEngine,
}

impl ScanService {
    #[must_use]
    pub fn new(
        reference: Box<dyn ReferenceOddsProvider>,
        market: Box<dyn MarketOddsProvider>,
        engine: EvEngine,
    ) -> Self {
        Self {
            reference,
            market,
            engine,
        }
    }

    /// Fetch both providers concurrently and evaluate.
    ///
    /// A failing provider counts as an empty collection. The scan only fails
    /// when both providers fail.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::AllProvidersFailed`] when neither provider
    /// produced rows.
    pub async fn run(&self) -> Result<ScanOutcome> {
        let (reference, market) =
            tokio::join!(self.reference.reference_rows(), self.market.market_rows());

        let (reference_rows, reference_error) = settle(self.reference.provider_name(), reference);
        let (market_rows, market_error) = settle(self.market.provider_name(), market);

        if reference_error.is_some() && market_error.is_some() {
            return Err(ProviderError::AllProvidersFailed.into());
        }

        let report = self.engine.evaluate(&reference_rows, &market_rows);
        Ok(ScanOutcome {
            report,
            reference_error,
            market_error,
        })
    }
}

fn settle<T>(provider: &'static str, result: Result<Vec<T>>) -> (Vec<T>, Option<String>) {
    match result {
        Ok(rows) => {
            info!(provider, rows = rows.len(), "Provider fetch complete");
            (rows, None)
        }
        Err(err) => {
            warn!(provider, error = %err, "Provider failed, treating as empty");
            (Vec::new(), Some(err.to_string()))
        }
    }
}
