//! Property tests for odds conversion, vig removal and the engine.

use proptest::prelude::*;
use propedge::application::EvEngine;
use propedge::domain::{american_to_decimal, calculate_ev, decimal_to_american, remove_vig, RawPrice};
use propedge::port::{MarketRow, ReferenceRow};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn round_trip(odds: i64) -> i64 {
    let decimal = american_to_decimal(Decimal::from(odds)).expect("valid price");
    decimal_to_american(decimal).expect("convertible").value()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn underdog_prices_round_trip(odds in 101i64..5000) {
        prop_assert!((round_trip(odds) - odds).abs() <= 1);
    }

    #[test]
    fn favorite_prices_round_trip(odds in -1700i64..=-101) {
        prop_assert!((round_trip(odds) - odds).abs() <= 1);
    }

    #[test]
    fn vig_free_probabilities_sum_to_one(p1 in 0.01f64..2.0, p2 in 0.01f64..2.0) {
        let p1 = Decimal::try_from(p1).unwrap();
        let p2 = Decimal::try_from(p2).unwrap();
        let (fair1, fair2) = remove_vig(Some(p1), Some(p2)).unwrap();
        prop_assert!((fair1 + fair2 - Decimal::ONE).abs() < dec!(0.000000001));
        prop_assert!(fair1 > Decimal::ZERO && fair2 > Decimal::ZERO);
    }

    #[test]
    fn remove_vig_needs_both_sides(p in 0.01f64..2.0) {
        let p = Decimal::try_from(p).unwrap();
        prop_assert_eq!(remove_vig(Some(p), None), None);
        prop_assert_eq!(remove_vig(None, Some(p)), None);
    }

    #[test]
    fn ev_is_none_without_probability(odds in -1000i64..1000) {
        prop_assert_eq!(calculate_ev(None, Decimal::from(odds)), None);
    }

    #[test]
    fn engine_results_are_ranked_and_above_threshold(
        lines in prop::collection::vec(
            ("[A-C]", "-?[0-9]{2,3}|N/A|", "-?[0-9]{2,3}|N/A|", -400i32..400),
            0..12,
        ),
        threshold in 0i64..20,
    ) {
        let threshold = Decimal::from(threshold);
        let refs: Vec<ReferenceRow> = lines
            .iter()
            .map(|(player, over, under, _)| {
                ReferenceRow::new(player.as_str(), "Strikeouts", Some(over.as_str().into()), Some(under.as_str().into()))
            })
            .collect();
        let offers: Vec<MarketRow> = lines
            .iter()
            .map(|(player, _, _, price)| {
                MarketRow::new(player.as_str(), "Strikeouts", "fanduel", Some(RawPrice::from(*price)), None)
            })
            .collect();

        let report = EvEngine::new(threshold).evaluate(&refs, &offers);
        prop_assert!(report.results.iter().all(|r| r.ev_percent > threshold));
        prop_assert!(report
            .results
            .windows(2)
            .all(|pair| pair[0].ev_percent >= pair[1].ev_percent));
        prop_assert_eq!(report.results.len() + report.below_threshold, report.evaluated);
    }
}

#[test]
fn even_money_is_one_price() {
    assert_eq!(american_to_decimal(dec!(-100)), american_to_decimal(dec!(100)));
    assert_eq!(decimal_to_american(dec!(2)).unwrap().value(), 100);
}

#[test]
fn ev_is_none_for_unconvertible_price() {
    assert_eq!(calculate_ev(Some(dec!(0.5)), Decimal::ZERO), None);
}
