//! Player-prop market categories.
//!
//! - [`Market`] - The closed set of prop markets the scanner understands
//! - [`Side`] - Over or under on a market line

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A player-prop market category.
///
/// Both odds providers must resolve their own market naming into this set
/// before rows can be joined. Serialized using the canonical display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Market {
    #[serde(rename = "Home Runs")]
    HomeRuns,
    #[serde(rename = "Total Bases")]
    TotalBases,
    #[serde(rename = "Strikeouts")]
    Strikeouts,
    #[serde(rename = "Earned Runs")]
    EarnedRuns,
    #[serde(rename = "Pitching Outs")]
    PitchingOuts,
    #[serde(rename = "Hits Allowed")]
    HitsAllowed,
}

impl Market {
    /// Every market, in display order.
    pub const ALL: [Market; 6] = [
        Market::HomeRuns,
        Market::TotalBases,
        Market::Strikeouts,
        Market::EarnedRuns,
        Market::PitchingOuts,
        Market::HitsAllowed,
    ];

    /// Canonical display label (the join vocabulary).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HomeRuns => "Home Runs",
            Self::TotalBases => "Total Bases",
            Self::Strikeouts => "Strikeouts",
            Self::EarnedRuns => "Earned Runs",
            Self::PitchingOuts => "Pitching Outs",
            Self::HitsAllowed => "Hits Allowed",
        }
    }

    /// Resolve a canonical label, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|market| market.label().eq_ignore_ascii_case(label))
    }

    /// Whether this is a batter market (as opposed to a pitcher market).
    #[must_use]
    pub const fn is_batter(self) -> bool {
        matches!(self, Self::HomeRuns | Self::TotalBases)
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a market label is outside the closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown market '{0}'")]
pub struct UnknownMarket(pub String);

impl FromStr for Market {
    type Err = UnknownMarket;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| UnknownMarket(s.to_string()))
    }
}

/// One side of a two-way prop line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Over,
    Under,
}

impl Side {
    /// Parse an outcome name such as `"Over"` or `"under"`.
    #[must_use]
    pub fn from_outcome_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "over" => Some(Self::Over),
            "under" => Some(Self::Under),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Over => f.write_str("over"),
            Self::Under => f.write_str("under"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_label_is_case_insensitive() {
        assert_eq!(Market::from_label("total bases"), Some(Market::TotalBases));
        assert_eq!(Market::from_label(" Hits Allowed "), Some(Market::HitsAllowed));
    }

    #[test]
    fn from_label_rejects_unknown() {
        assert_eq!(Market::from_label("Stolen Bases"), None);
        assert!("RBIs".parse::<Market>().is_err());
    }

    #[test]
    fn every_label_round_trips() {
        for market in Market::ALL {
            assert_eq!(market.label().parse::<Market>(), Ok(market));
        }
    }

    #[test]
    fn serde_uses_display_label() {
        let json = serde_json::to_string(&Market::PitchingOuts).unwrap();
        assert_eq!(json, "\"Pitching Outs\"");
        let parsed: Market = serde_json::from_str("\"Earned Runs\"").unwrap();
        assert_eq!(parsed, Market::EarnedRuns);
    }

    #[test]
    fn batter_markets() {
        assert!(Market::HomeRuns.is_batter());
        assert!(Market::TotalBases.is_batter());
        assert!(!Market::Strikeouts.is_batter());
    }

    #[test]
    fn side_from_outcome_name() {
        assert_eq!(Side::from_outcome_name("Over"), Some(Side::Over));
        assert_eq!(Side::from_outcome_name("UNDER"), Some(Side::Under));
        assert_eq!(Side::from_outcome_name("Yes"), None);
    }
}
