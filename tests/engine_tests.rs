//! Integration tests for the EV engine.

mod support;

use propedge::application::{EvEngine, ReportOutcome, SkipReason};
use propedge::domain::{BookId, Market, Side};
use propedge::port::ReferenceRow;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use support::assertions::assert_decimal_near;
use support::rows::{offer, offer_both, reference};

fn engine() -> EvEngine {
    EvEngine::new(dec!(5))
}

#[test]
fn skewed_line_prices_below_threshold() {
    let refs = [reference("Aaron Judge", "Home Runs", "+150", "-180")];
    let offers = [offer("Aaron Judge", "Home Runs", "fanduel", 160)];

    let report = engine().evaluate(&refs, &offers);
    assert!(report.results.is_empty());
    assert_eq!(report.evaluated, 1);
    assert_eq!(report.below_threshold, 1);
    assert_eq!(report.outcome(), ReportOutcome::NothingAboveThreshold);

    // With a negative threshold the same record shows its (negative) EV.
    let report = EvEngine::new(dec!(-1)).evaluate(&refs, &offers);
    let result = &report.results[0];
    assert_decimal_near(result.ev_percent, dec!(-0.26), dec!(0.02));
    assert_eq!(result.fair_american_odds.to_string(), "+161");
    assert_eq!(result.offered_odds, 160);
}

#[test]
fn symmetric_line_reports_ten_percent() {
    let refs = [reference("Aaron Judge", "Total Bases", "-110", "-110")];
    let offers = [offer("Aaron Judge", "Total Bases", "draftkings", 120)];

    let report = engine().evaluate(&refs, &offers);
    assert_eq!(report.outcome(), ReportOutcome::Found(1));
    let result = &report.results[0];
    assert_eq!(result.player, "Aaron Judge");
    assert_eq!(result.market, Market::TotalBases);
    assert_eq!(result.sportsbook, BookId::new("draftkings"));
    assert_eq!(result.ev_percent, dec!(10.00));
    assert_eq!(result.fair_american_odds.to_string(), "+100");
    assert_eq!(result.offered_odds, 120);
}

#[test]
fn empty_inputs_report_no_data() {
    let report = engine().evaluate(&[], &[]);
    assert!(report.results.is_empty());
    assert_eq!(report.outcome(), ReportOutcome::NoData);

    let refs = [reference("Aaron Judge", "Total Bases", "-110", "-110")];
    let report = engine().evaluate(&refs, &[]);
    assert_eq!(report.outcome(), ReportOutcome::NoData);
}

#[test]
fn unmatched_lines_are_counted_not_reported() {
    let refs = [reference("Aaron Judge", "Total Bases", "-110", "-110")];
    let offers = [offer("Juan Soto", "Total Bases", "fanduel", 150)];

    let report = engine().evaluate(&refs, &offers);
    assert!(report.results.is_empty());
    assert!(report.skipped.is_empty());
    assert_eq!(report.unmatched_reference, 1);
    assert_eq!(report.unmatched_market, 1);
    assert_eq!(report.outcome(), ReportOutcome::NothingAboveThreshold);
}

#[test]
fn join_is_exact_on_player_and_market() {
    let refs = [reference("Aaron Judge", "Total Bases", "-110", "-110")];
    let offers = [
        offer("Aaron Judge", "Home Runs", "fanduel", 150),
        offer("aaron judge", "Total Bases", "fanduel", 150),
        offer(" Aaron Judge ", "Total Bases", "betmgm", 150),
    ];

    let report = engine().evaluate(&refs, &offers);
    // Surrounding whitespace is trimmed; case is not folded.
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].sportsbook, BookId::new("betmgm"));
    assert_eq!(report.unmatched_market, 2);
}

#[test]
fn malformed_rows_are_skipped_and_valid_rows_survive() {
    let refs = [
        reference("Aaron Judge", "Total Bases", "-110", "N/A"),
        ReferenceRow::new("Juan Soto", "Total Bases", Some("-110".into()), None),
        reference("Gerrit Cole", "Strikeouts", "-110", "-110"),
        reference("Shohei Ohtani", "Stolen Bases", "-110", "-110"),
    ];
    let offers = [
        offer("Aaron Judge", "Total Bases", "fanduel", 150),
        offer("Juan Soto", "Total Bases", "fanduel", 150),
        offer("Gerrit Cole", "Strikeouts", "fanduel", 130),
        offer("Shohei Ohtani", "Stolen Bases", "fanduel", 200),
    ];

    let report = engine().evaluate(&refs, &offers);
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].player, "Gerrit Cole");
    assert_eq!(report.results[0].ev_percent, dec!(15.00));
    assert_eq!(report.unrecognized_rows, 2);

    let reasons: Vec<_> = report.skipped.iter().map(|s| s.reason.clone()).collect();
    assert_eq!(
        reasons,
        vec![
            SkipReason::InvalidReferencePrice {
                side: Side::Under,
                raw: "N/A".into(),
            },
            SkipReason::MissingReferenceSide { side: Side::Under },
        ]
    );
}

#[test]
fn offers_without_over_are_skipped() {
    let refs = [reference("Aaron Judge", "Total Bases", "-110", "-110")];
    let offers = [propedge::port::MarketRow::new(
        "Aaron Judge",
        "Total Bases",
        "fanduel",
        None,
        Some(propedge::domain::RawPrice::from(-150)),
    )];

    let report = engine().evaluate(&refs, &offers);
    assert!(report.results.is_empty());
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].reason, SkipReason::MissingOfferedOver);
}

#[test]
fn results_sort_by_ev_descending_with_stable_ties() {
    let refs = [reference("Aaron Judge", "Total Bases", "-110", "-110")];
    let offers = [
        offer("Aaron Judge", "Total Bases", "draftkings", 120),
        offer_both("Aaron Judge", "Total Bases", "fanduel", 130, -160),
        offer("Aaron Judge", "Total Bases", "betmgm", 120),
        offer("Aaron Judge", "Total Bases", "caesars", 110),
    ];

    let report = engine().evaluate(&refs, &offers);
    let books: Vec<&str> = report
        .results
        .iter()
        .map(|r| r.sportsbook.as_str())
        .collect();
    assert_eq!(books, vec!["fanduel", "draftkings", "betmgm"]);
    // +110 prices at exactly 5.00, which does not clear a 5% threshold.
    assert_eq!(report.below_threshold, 1);
}

#[test]
fn threshold_is_strict() {
    let refs = [reference("Aaron Judge", "Total Bases", "-110", "-110")];
    let offers = [offer("Aaron Judge", "Total Bases", "draftkings", 120)];

    assert!(EvEngine::new(dec!(10)).evaluate(&refs, &offers).results.is_empty());
    assert_eq!(
        EvEngine::new(dec!(9.99))
            .evaluate(&refs, &offers)
            .results
            .len(),
        1
    );
}

#[test]
fn report_serializes_for_json_output() {
    let refs = [reference("Aaron Judge", "Total Bases", "-110", "-110")];
    let offers = [offer("Aaron Judge", "Total Bases", "draftkings", 120)];

    let report = engine().evaluate(&refs, &offers);
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["results"][0]["player"], "Aaron Judge");
    assert_eq!(value["results"][0]["fair_american_odds"], "+100");
    assert_eq!(value["threshold"], serde_json::to_value(Decimal::from(5)).unwrap());
}
