//! Handler for the `scan` command.

use std::path::Path;

use serde_json::json;
use tabled::{Table, Tabled};

use super::command::ScanArgs;
use super::{output, paths};
use crate::adapter::outbound::odds_api::OddsApiClient;
use crate::adapter::outbound::reference::SnapshotReferenceProvider;
use crate::application::{EvEngine, EvReport, ReportOutcome, ScanOutcome, ScanService};
use crate::domain::BookId;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

#[derive(Debug, Tabled)]
pub struct ResultRow {
    #[tabled(rename = "Player")]
    pub player: String,
    #[tabled(rename = "Market")]
    pub market: String,
    #[tabled(rename = "Fair Odds")]
    pub fair_odds: String,
    #[tabled(rename = "Best Odds")]
    pub best_odds: String,
    #[tabled(rename = "Sportsbook")]
    pub sportsbook: String,
    #[tabled(rename = "EV%")]
    pub ev_percent: String,
}

#[derive(Debug, Tabled)]
pub struct SkippedRow {
    #[tabled(rename = "Player")]
    pub player: String,
    #[tabled(rename = "Market")]
    pub market: String,
    #[tabled(rename = "Sportsbook")]
    pub sportsbook: String,
    #[tabled(rename = "Reason")]
    pub reason: String,
}

/// Execute the scan command.
pub async fn execute(args: &ScanArgs) -> Result<()> {
    let (mut config, source) = paths::load_config(args.config.as_deref())?;
    apply_overrides(&mut config, args, output::verbosity())?;
    config.init_logging();

    if !output::is_json() {
        print_settings(&config, source.as_deref());
    }

    let service = build_service(&config);
    let pb = output::spinner("Fetching reference and market odds...");
    let outcome = match service.run().await {
        Ok(outcome) => {
            output::spinner_success(&pb, "Fetched odds");
            outcome
        }
        Err(err) => {
            output::spinner_fail(&pb, "Both odds providers failed");
            return Err(err);
        }
    };

    if output::is_json() {
        render_json(&outcome, args.show_skipped)
    } else {
        report_provider_errors(&outcome);
        render(&outcome.report, args.show_skipped);
        Ok(())
    }
}

fn print_settings(config: &Config, source: Option<&Path>) {
    output::header(env!("CARGO_PKG_VERSION"));
    if let Some(source) = source {
        output::field("Config", source.display());
    }
    output::field("Threshold", format!("{}%", config.scan.threshold));
    output::field("Books", config.scan.supported_books.len());
    match &config.reference.snapshot {
        Some(snapshot) => output::field("Reference", snapshot.display()),
        None => output::warning("No reference snapshot configured"),
    }
}

/// Fold command-line overrides into the loaded config and re-validate.
///
/// `-v` raises the log level to `info`, `-vv` to `debug`; `--log-level`
/// wins over both.
#[allow(clippy::result_large_err)]
pub fn apply_overrides(config: &mut Config, args: &ScanArgs, verbosity: u8) -> Result<()> {
    if let Some(threshold) = args.threshold {
        config.scan.threshold = threshold;
    }
    if let Some(reference) = &args.reference {
        config.reference.snapshot = Some(reference.clone());
    }
    if let Some(books) = &args.books {
        config.scan.supported_books = books
            .iter()
            .filter(|book| !book.trim().is_empty())
            .map(BookId::new)
            .collect();
    }
    match (&args.log_level, verbosity) {
        (Some(level), _) => config.logging.level.clone_from(level),
        (None, 0) => {}
        (None, 1) => config.logging.level = "info".into(),
        (None, _) => config.logging.level = "debug".into(),
    }
    config.validate()
}

fn build_service(config: &Config) -> ScanService {
    let reference =
        SnapshotReferenceProvider::new(config.reference.snapshot.clone(), config.markets.clone());
    let market = OddsApiClient::from_env(
        &config.odds_api,
        config.scan.supported_books.clone(),
        config.markets.clone(),
    );
    ScanService::new(
        Box::new(reference),
        Box::new(market),
        EvEngine::new(config.scan.threshold),
    )
}

fn report_provider_errors(outcome: &ScanOutcome) {
    if let Some(err) = &outcome.reference_error {
        output::warning(&format!("Reference provider failed: {err}"));
    }
    if let Some(err) = &outcome.market_error {
        output::warning(&format!("Market provider failed: {err}"));
    }
}

/// Table rows for the ranked results.
#[must_use]
pub fn result_rows(report: &EvReport) -> Vec<ResultRow> {
    report
        .results
        .iter()
        .map(|result| ResultRow {
            player: result.player.clone(),
            market: result.market.to_string(),
            fair_odds: result.fair_american_odds.to_string(),
            best_odds: result.offered().to_string(),
            sportsbook: result.sportsbook.to_string(),
            ev_percent: format!("{}%", result.ev_percent),
        })
        .collect()
}

/// Table rows for records that could not be priced.
#[must_use]
pub fn skipped_rows(report: &EvReport) -> Vec<SkippedRow> {
    report
        .skipped
        .iter()
        .map(|skipped| SkippedRow {
            player: skipped.key.line.player.clone(),
            market: skipped.key.line.market.to_string(),
            sportsbook: skipped.key.book.to_string(),
            reason: skipped.reason.to_string(),
        })
        .collect()
}

/// JSON mode: one record per result (and skipped record), then a summary
/// that carries provider failures.
fn render_json(outcome: &ScanOutcome, show_skipped: bool) -> Result<()> {
    let report = &outcome.report;
    for result in &report.results {
        output::record("result", serde_json::to_value(result)?);
    }
    if show_skipped {
        for skipped in &report.skipped {
            output::record("skipped", serde_json::to_value(skipped)?);
        }
    }
    output::record("summary", summary(outcome));
    Ok(())
}

/// Counters and provider failures for one scan.
#[must_use]
pub fn summary(outcome: &ScanOutcome) -> serde_json::Value {
    let report = &outcome.report;
    json!({
        "outcome": report.outcome(),
        "threshold": report.threshold,
        "reference_rows": report.reference_rows,
        "market_rows": report.market_rows,
        "evaluated": report.evaluated,
        "below_threshold": report.below_threshold,
        "skipped": report.skipped.len(),
        "unmatched_reference": report.unmatched_reference,
        "unmatched_market": report.unmatched_market,
        "unrecognized_rows": report.unrecognized_rows,
        "reference_error": outcome.reference_error,
        "market_error": outcome.market_error,
    })
}

fn render(report: &EvReport, show_skipped: bool) {
    match report.outcome() {
        ReportOutcome::NoData => {
            output::warning(&format!(
                "No data: reference provider returned {} rows, market provider returned {}",
                report.reference_rows, report.market_rows
            ));
        }
        ReportOutcome::NothingAboveThreshold => {
            output::note(&format!("No +EV bets above {}%", report.threshold));
        }
        ReportOutcome::Found(count) => {
            output::section(&format!("{count} +EV bets above {}%", report.threshold));
            output::lines(&Table::new(result_rows(report)).to_string());
        }
    }

    if show_skipped && !report.skipped.is_empty() {
        output::section("Skipped");
        output::lines(&Table::new(skipped_rows(report)).to_string());
    } else if !report.skipped.is_empty() {
        output::hint(&format!(
            "{} records could not be priced; rerun with --show-skipped",
            report.skipped.len()
        ));
    }

    if output::verbosity() > 0 {
        output::section("Summary");
        output::field("Evaluated", report.evaluated);
        output::field("Below", report.below_threshold);
        output::field("Skipped", report.skipped.len());
        output::field("Unmatched ref", report.unmatched_reference);
        output::field("Unmatched book", report.unmatched_market);
        output::field("Unrecognized", report.unrecognized_rows);
    }
}
