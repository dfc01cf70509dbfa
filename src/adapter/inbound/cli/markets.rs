//! Market vocabulary listing.

use serde_json::json;
use tabled::{Table, Tabled};

use super::command::ConfigPathArg;
use super::{output, paths};
use crate::domain::{Market, MarketVocabulary};
use crate::error::Result;

#[derive(Tabled)]
struct MarketRow {
    #[tabled(rename = "Market")]
    market: &'static str,
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Feed Keys")]
    feed_keys: String,
    #[tabled(rename = "Reference Names")]
    reference_names: String,
}

fn rows(vocabulary: &MarketVocabulary) -> Vec<MarketRow> {
    Market::ALL
        .into_iter()
        .map(|market| MarketRow {
            market: market.label(),
            kind: if market.is_batter() { "batter" } else { "pitcher" },
            feed_keys: join_or_dash(vocabulary.keys_for(market)),
            reference_names: join_or_dash(vocabulary.reference_names_for(market)),
        })
        .collect()
}

fn join_or_dash<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let names: Vec<&str> = names.collect();
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}

/// List every market and the provider names that resolve to it.
pub fn list(args: &ConfigPathArg) -> Result<()> {
    let (config, _) = paths::load_config(args.config.as_deref())?;
    let vocabulary = &config.markets;

    if output::is_json() {
        let markets: Vec<_> = Market::ALL
            .into_iter()
            .map(|market| {
                json!({
                    "market": market.label(),
                    "batter": market.is_batter(),
                    "feed_keys": vocabulary.keys_for(market).collect::<Vec<_>>(),
                    "reference_names": vocabulary.reference_names_for(market).collect::<Vec<_>>(),
                })
            })
            .collect();
        output::json_output(json!({
            "command": "markets",
            "markets": markets,
        }));
        return Ok(());
    }

    if output::is_quiet() {
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Markets");
    output::lines(&Table::new(rows(vocabulary)).to_string());
    output::hint("batter markets only compare the 0.5 line");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_market_has_a_row() {
        let rows = rows(&MarketVocabulary::default());
        assert_eq!(rows.len(), Market::ALL.len());
        let strikeouts = rows.iter().find(|r| r.market == "Strikeouts").unwrap();
        assert_eq!(strikeouts.kind, "pitcher");
        assert_eq!(strikeouts.feed_keys, "pitcher_strikeouts");
        assert_eq!(strikeouts.reference_names, "strikeouts");
    }

    #[test]
    fn unmapped_market_shows_dash() {
        let mut vocabulary = MarketVocabulary::default();
        vocabulary.market_keys.remove("pitcher_hits_allowed");
        let rows = rows(&vocabulary);
        let hits = rows.iter().find(|r| r.market == "Hits Allowed").unwrap();
        assert_eq!(hits.feed_keys, "-");
    }
}
