//! Quotes, partial over/under pairs and keyed accumulation.
//!
//! Providers deliver one side of a line at a time. [`QuoteBook`] collects
//! those sides under a composite key with explicit upsert semantics, and
//! [`QuotePair`] makes the partially filled state visible.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::BookId;
use super::market::{Market, Side};
use super::odds::{american_to_decimal, parse_american};

/// A price exactly as a provider delivered it.
///
/// Kept unparsed until the engine needs it so that a malformed price becomes
/// a per-record skip instead of failing the whole load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Number(f64),
    Text(String),
    /// A price an adapter already failed to convert, kept verbatim for
    /// reporting. Never parses; `Text` claims every string on deserialize.
    Unpriceable(String),
}

impl RawPrice {
    /// Interpret as an American price.
    #[must_use]
    pub fn to_american(&self) -> Option<Decimal> {
        match self {
            Self::Number(value) => Decimal::try_from(*value).ok(),
            Self::Text(text) => parse_american(text),
            Self::Unpriceable(_) => None,
        }
    }

    /// Interpret as an American price and convert to decimal odds.
    #[must_use]
    pub fn to_decimal_odds(&self) -> Option<Decimal> {
        american_to_decimal(self.to_american()?)
    }

    /// The American price truncated to an integer.
    #[must_use]
    pub fn to_american_integer(&self) -> Option<i64> {
        self.to_american()?.trunc().to_i64()
    }
}

impl fmt::Display for RawPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) | Self::Unpriceable(text) => f.write_str(text),
        }
    }
}

impl From<i32> for RawPrice {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for RawPrice {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawPrice {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A single priced outcome for one player line at one source.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub player: String,
    pub market: Market,
    pub side: Side,
    pub price: Option<RawPrice>,
}

/// Over/under prices for one line at one source.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum QuotePair {
    #[default]
    Empty,
    OverOnly(RawPrice),
    UnderOnly(RawPrice),
    Complete { over: RawPrice, under: RawPrice },
}

impl QuotePair {
    /// Build a pair from optional sides.
    #[must_use]
    pub fn from_sides(over: Option<RawPrice>, under: Option<RawPrice>) -> Self {
        match (over, under) {
            (None, None) => Self::Empty,
            (Some(over), None) => Self::OverOnly(over),
            (None, Some(under)) => Self::UnderOnly(under),
            (Some(over), Some(under)) => Self::Complete { over, under },
        }
    }

    /// Set one side, replacing any previous price on that side.
    pub fn set(&mut self, side: Side, price: RawPrice) {
        let (over, under) = std::mem::take(self).into_sides();
        *self = match side {
            Side::Over => Self::from_sides(Some(price), under),
            Side::Under => Self::from_sides(over, Some(price)),
        };
    }

    /// Copy every present side of `other` into this pair.
    pub fn merge(&mut self, other: QuotePair) {
        let (over, under) = other.into_sides();
        if let Some(over) = over {
            self.set(Side::Over, over);
        }
        if let Some(under) = under {
            self.set(Side::Under, under);
        }
    }

    #[must_use]
    pub fn over(&self) -> Option<&RawPrice> {
        match self {
            Self::OverOnly(over) | Self::Complete { over, .. } => Some(over),
            _ => None,
        }
    }

    #[must_use]
    pub fn under(&self) -> Option<&RawPrice> {
        match self {
            Self::UnderOnly(under) | Self::Complete { under, .. } => Some(under),
            _ => None,
        }
    }

    /// The price on `side`, if present.
    #[must_use]
    pub fn side(&self, side: Side) -> Option<&RawPrice> {
        match side {
            Side::Over => self.over(),
            Side::Under => self.under(),
        }
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }

    /// Split into `(over, under)`.
    #[must_use]
    pub fn into_sides(self) -> (Option<RawPrice>, Option<RawPrice>) {
        match self {
            Self::Empty => (None, None),
            Self::OverOnly(over) => (Some(over), None),
            Self::UnderOnly(under) => (None, Some(under)),
            Self::Complete { over, under } => (Some(over), Some(under)),
        }
    }
}

/// Join key shared by both providers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct LineKey {
    pub player: String,
    pub market: Market,
}

impl LineKey {
    pub fn new(player: impl AsRef<str>, market: Market) -> Self {
        Self {
            player: player.as_ref().trim().to_string(),
            market,
        }
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.player, self.market)
    }
}

/// A line at a specific competing sportsbook.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BookLineKey {
    pub line: LineKey,
    pub book: BookId,
}

impl BookLineKey {
    pub fn new(line: LineKey, book: BookId) -> Self {
        Self { line, book }
    }
}

impl fmt::Display for BookLineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.line, self.book)
    }
}

/// Insertion-ordered accumulation of quote pairs by key.
///
/// Upserts are O(1); iteration follows first-insertion order so downstream
/// output is deterministic.
#[derive(Debug, Clone)]
pub struct QuoteBook<K> {
    entries: Vec<(K, QuotePair)>,
    index: HashMap<K, usize>,
}

impl<K> Default for QuoteBook<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> QuoteBook<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Find-or-create the pair for `key`.
    pub fn entry(&mut self, key: K) -> &mut QuotePair {
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.index.insert(key.clone(), slot);
                self.entries.push((key, QuotePair::Empty));
                slot
            }
        };
        &mut self.entries[slot].1
    }

    /// Set one side of the pair for `key`, creating the pair if needed.
    pub fn upsert(&mut self, key: K, side: Side, price: RawPrice) -> &QuotePair {
        let pair = self.entry(key);
        pair.set(side, price);
        pair
    }

    /// Merge every present side of `pair` into the entry for `key`.
    pub fn upsert_pair(&mut self, key: K, pair: QuotePair) -> &QuotePair {
        let entry = self.entry(key);
        entry.merge(pair);
        entry
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&QuotePair> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &QuotePair)> {
        self.entries.iter().map(|(key, pair)| (key, pair))
    }
}

impl<K> IntoIterator for QuoteBook<K> {
    type Item = (K, QuotePair);
    type IntoIter = std::vec::IntoIter<(K, QuotePair)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl QuoteBook<BookLineKey> {
    /// Record a competing-book quote. Quotes without a price are ignored.
    pub fn apply(&mut self, book: &BookId, quote: PriceQuote) {
        let Some(price) = quote.price else {
            return;
        };
        let key = BookLineKey::new(LineKey::new(&quote.player, quote.market), book.clone());
        self.upsert(key, quote.side, price);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn judge_tb() -> LineKey {
        LineKey::new("Aaron Judge", Market::TotalBases)
    }

    #[test]
    fn raw_price_parses_numbers_and_text() {
        assert_eq!(RawPrice::from(150).to_american(), Some(dec!(150)));
        assert_eq!(RawPrice::from("+150").to_american(), Some(dec!(150)));
        assert_eq!(RawPrice::from("-120").to_decimal_odds(), Some(dec!(1.8333)));
        assert_eq!(RawPrice::from("n/a").to_decimal_odds(), None);
        assert_eq!(RawPrice::Number(f64::NAN).to_american(), None);
    }

    #[test]
    fn unpriceable_never_parses() {
        let price = RawPrice::Unpriceable("1".into());
        assert_eq!(price.to_american(), None);
        assert_eq!(price.to_decimal_odds(), None);
        assert_eq!(price.to_string(), "1");
    }

    #[test]
    fn raw_price_truncates_to_integer() {
        assert_eq!(RawPrice::Number(115.7).to_american_integer(), Some(115));
        assert_eq!(RawPrice::Number(-115.7).to_american_integer(), Some(-115));
    }

    #[test]
    fn raw_price_deserializes_untagged() {
        let prices: Vec<Option<RawPrice>> =
            serde_json::from_str(r#"[150, "-120", null, 1.5]"#).unwrap();
        assert_eq!(prices[0], Some(RawPrice::Number(150.0)));
        assert_eq!(prices[1], Some(RawPrice::Text("-120".into())));
        assert_eq!(prices[2], None);
        assert_eq!(prices[3], Some(RawPrice::Number(1.5)));
    }

    #[test]
    fn pair_fills_in_either_order() {
        let mut pair = QuotePair::Empty;
        pair.set(Side::Under, RawPrice::from(-130));
        assert_eq!(pair, QuotePair::UnderOnly(RawPrice::from(-130)));
        pair.set(Side::Over, RawPrice::from(110));
        assert!(pair.is_complete());
        assert_eq!(pair.over(), Some(&RawPrice::from(110)));
        assert_eq!(pair.under(), Some(&RawPrice::from(-130)));
    }

    #[test]
    fn pair_set_replaces_same_side() {
        let mut pair = QuotePair::OverOnly(RawPrice::from(110));
        pair.set(Side::Over, RawPrice::from(125));
        assert_eq!(pair, QuotePair::OverOnly(RawPrice::from(125)));
    }

    #[test]
    fn merge_keeps_sides_missing_from_other() {
        let mut pair = QuotePair::Complete {
            over: RawPrice::from(110),
            under: RawPrice::from(-130),
        };
        pair.merge(QuotePair::OverOnly(RawPrice::from(105)));
        assert_eq!(pair.over(), Some(&RawPrice::from(105)));
        assert_eq!(pair.under(), Some(&RawPrice::from(-130)));
    }

    #[test]
    fn quote_book_upserts_by_key() {
        let mut book = QuoteBook::new();
        book.upsert(judge_tb(), Side::Over, RawPrice::from(140));
        book.upsert(
            LineKey::new("Shohei Ohtani", Market::HomeRuns),
            Side::Over,
            RawPrice::from(300),
        );
        book.upsert(judge_tb(), Side::Under, RawPrice::from(-170));

        assert_eq!(book.len(), 2);
        assert!(book.get(&judge_tb()).unwrap().is_complete());
    }

    #[test]
    fn quote_book_iterates_in_first_insertion_order() {
        let mut book = QuoteBook::new();
        for (player, side) in [("B", Side::Over), ("A", Side::Over), ("B", Side::Under)] {
            book.upsert(
                LineKey::new(player, Market::Strikeouts),
                side,
                RawPrice::from(-110),
            );
        }
        let players: Vec<_> = book.iter().map(|(key, _)| key.player.as_str()).collect();
        assert_eq!(players, ["B", "A"]);
    }

    #[test]
    fn line_key_trims_player_name() {
        assert_eq!(LineKey::new("  Aaron Judge ", Market::TotalBases), judge_tb());
    }

    #[test]
    fn apply_ignores_unpriced_quotes() {
        let mut book = QuoteBook::new();
        let fanduel = BookId::new("fanduel");
        book.apply(
            &fanduel,
            PriceQuote {
                player: "Aaron Judge".into(),
                market: Market::TotalBases,
                side: Side::Over,
                price: None,
            },
        );
        assert!(book.is_empty());

        book.apply(
            &fanduel,
            PriceQuote {
                player: "Aaron Judge".into(),
                market: Market::TotalBases,
                side: Side::Over,
                price: Some(RawPrice::from(120)),
            },
        );
        let key = BookLineKey::new(judge_tb(), fanduel);
        assert_eq!(book.get(&key), Some(&QuotePair::OverOnly(RawPrice::from(120))));
    }
}
