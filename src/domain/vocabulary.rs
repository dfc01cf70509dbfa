//! Provider market naming resolved into the closed [`Market`] set.
//!
//! The two providers name markets differently: the odds feed uses keys such
//! as `pitcher_strikeouts`, the reference book prints titles such as
//! `"Gerrit Cole (Strikeouts)"`. Each side has its own mapping; a name that
//! maps nowhere is dropped and never reaches the join.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::market::Market;

/// Mappings from provider-specific market names to [`Market`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketVocabulary {
    /// Odds feed market key to market.
    #[serde(default = "default_market_keys")]
    pub market_keys: BTreeMap<String, Market>,

    /// Compacted reference-book market name (ASCII letters only, lowercase)
    /// to market.
    #[serde(default = "default_reference_names")]
    pub reference_names: BTreeMap<String, Market>,
}

fn default_market_keys() -> BTreeMap<String, Market> {
    [
        ("batter_home_runs", Market::HomeRuns),
        ("batter_total_bases", Market::TotalBases),
        ("pitcher_strikeouts", Market::Strikeouts),
        ("pitcher_outs", Market::PitchingOuts),
        ("pitcher_earned_runs", Market::EarnedRuns),
        ("pitcher_hits_allowed", Market::HitsAllowed),
    ]
    .into_iter()
    .map(|(key, market)| (key.to_string(), market))
    .collect()
}

fn default_reference_names() -> BTreeMap<String, Market> {
    [
        ("homeruns", Market::HomeRuns),
        ("totalbases", Market::TotalBases),
        ("earnedruns", Market::EarnedRuns),
        ("hitsallowed", Market::HitsAllowed),
        ("strikeouts", Market::Strikeouts),
        ("pitchingouts", Market::PitchingOuts),
    ]
    .into_iter()
    .map(|(key, market)| (key.to_string(), market))
    .collect()
}

impl Default for MarketVocabulary {
    fn default() -> Self {
        Self {
            market_keys: default_market_keys(),
            reference_names: default_reference_names(),
        }
    }
}

/// Reduce a market name to lowercase ASCII letters: `"Total-Bases "` → `totalbases`.
#[must_use]
pub fn compact(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl MarketVocabulary {
    /// Resolve an odds feed market key.
    #[must_use]
    pub fn market_for_key(&self, key: &str) -> Option<Market> {
        self.market_keys.get(key).copied()
    }

    /// Odds feed market keys to request, in stable order.
    pub fn feed_keys(&self) -> impl Iterator<Item = &str> {
        self.market_keys.keys().map(String::as_str)
    }

    /// Feed keys that resolve to `market`.
    pub fn keys_for(&self, market: Market) -> impl Iterator<Item = &str> {
        self.market_keys
            .iter()
            .filter(move |(_, m)| **m == market)
            .map(|(key, _)| key.as_str())
    }

    /// Reference-book names that resolve to `market`.
    pub fn reference_names_for(&self, market: Market) -> impl Iterator<Item = &str> {
        self.reference_names
            .iter()
            .filter(move |(_, m)| **m == market)
            .map(|(name, _)| name.as_str())
    }

    /// Resolve a reference-book market name in any spacing or case.
    #[must_use]
    pub fn reference_market(&self, name: &str) -> Option<Market> {
        self.reference_names.get(&compact(name)).copied()
    }

    /// Split a reference listing title into player and market.
    ///
    /// `"Aaron Judge (Total Bases)"` → `("Aaron Judge", TotalBases)`. Every
    /// parenthesized group is tried in order and the first one that resolves
    /// wins; the player is the text before the first `(`.
    #[must_use]
    pub fn normalize_reference_title(&self, title: &str) -> Option<(String, Market)> {
        let (player, rest) = title.split_once('(')?;
        let market = std::iter::once(rest)
            .chain(rest.split('(').skip(1))
            .filter_map(|group| group.split_once(')').map(|(inner, _)| inner))
            .find_map(|inner| self.reference_market(inner))?;

        let player = player.trim();
        if player.is_empty() {
            return None;
        }
        Some((player.to_string(), market))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_feed_keys_cover_every_market() {
        let vocabulary = MarketVocabulary::default();
        for market in Market::ALL {
            assert!(vocabulary.keys_for(market).next().is_some(), "{market}");
            assert!(vocabulary.reference_names_for(market).next().is_some(), "{market}");
        }
    }

    #[test]
    fn market_for_key() {
        let vocabulary = MarketVocabulary::default();
        assert_eq!(
            vocabulary.market_for_key("pitcher_strikeouts"),
            Some(Market::Strikeouts)
        );
        assert_eq!(vocabulary.market_for_key("batter_rbis"), None);
    }

    #[test]
    fn compact_strips_non_letters() {
        assert_eq!(compact("Total-Bases 0.5"), "totalbases");
        assert_eq!(compact("Home Runs"), "homeruns");
    }

    #[test]
    fn normalize_reference_title_splits_player_and_market() {
        let vocabulary = MarketVocabulary::default();
        assert_eq!(
            vocabulary.normalize_reference_title("Aaron Judge (Total Bases)"),
            Some(("Aaron Judge".to_string(), Market::TotalBases))
        );
    }

    #[test]
    fn normalize_reference_title_tries_every_group() {
        let vocabulary = MarketVocabulary::default();
        assert_eq!(
            vocabulary.normalize_reference_title("Gerrit Cole (NYY) (Pitching Outs)"),
            Some(("Gerrit Cole".to_string(), Market::PitchingOuts))
        );
    }

    #[test]
    fn normalize_reference_title_rejects_unknown_market() {
        let vocabulary = MarketVocabulary::default();
        assert_eq!(vocabulary.normalize_reference_title("Aaron Judge (RBIs)"), None);
        assert_eq!(vocabulary.normalize_reference_title("Aaron Judge"), None);
        assert_eq!(vocabulary.normalize_reference_title("(Home Runs)"), None);
        assert_eq!(vocabulary.normalize_reference_title("Aaron Judge (Home Runs"), None);
    }

    #[test]
    fn deserializes_partial_override() {
        let vocabulary: MarketVocabulary = toml::from_str(
            r#"
[market_keys]
pitcher_strikeouts = "Strikeouts"
"#,
        )
        .unwrap();
        assert_eq!(vocabulary.market_keys.len(), 1);
        assert_eq!(vocabulary.reference_names, default_reference_names());
    }
}
