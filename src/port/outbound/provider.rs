//! Odds provider ports and the row shapes they deliver.
//!
//! Providers do all of their I/O up front and hand the engine a finished
//! collection. An empty collection is a valid answer ("nothing posted yet").

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{BookId, QuotePair, RawPrice};
use crate::error::Result;

/// A two-sided line from the reference book.
///
/// `market` must be a canonical market label; `over`/`under` are American
/// prices, usually as signed strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRow {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Market")]
    pub market: String,
    #[serde(rename = "Over", default)]
    pub over: Option<RawPrice>,
    #[serde(rename = "Under", default)]
    pub under: Option<RawPrice>,
}

impl ReferenceRow {
    pub fn new(
        player: impl Into<String>,
        market: impl Into<String>,
        over: Option<RawPrice>,
        under: Option<RawPrice>,
    ) -> Self {
        Self {
            player: player.into(),
            market: market.into(),
            over,
            under,
        }
    }

    #[must_use]
    pub fn pair(&self) -> QuotePair {
        QuotePair::from_sides(self.over.clone(), self.under.clone())
    }
}

/// A line from one competing sportsbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRow {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Market")]
    pub market: String,
    #[serde(rename = "Book")]
    pub book: BookId,
    #[serde(rename = "Over", default)]
    pub over: Option<RawPrice>,
    #[serde(rename = "Under", default)]
    pub under: Option<RawPrice>,
}

impl MarketRow {
    pub fn new(
        player: impl Into<String>,
        market: impl Into<String>,
        book: impl Into<BookId>,
        over: Option<RawPrice>,
        under: Option<RawPrice>,
    ) -> Self {
        Self {
            player: player.into(),
            market: market.into(),
            book: book.into(),
            over,
            under,
        }
    }

    #[must_use]
    pub fn pair(&self) -> QuotePair {
        QuotePair::from_sides(self.over.clone(), self.under.clone())
    }
}

/// Source of the reference ("sharp") book's two-sided lines.
#[async_trait]
pub trait ReferenceOddsProvider: Send + Sync {
    /// Fetch every currently posted reference line.
    async fn reference_rows(&self) -> Result<Vec<ReferenceRow>>;

    /// Short name for logs and output.
    fn provider_name(&self) -> &'static str;
}

/// Source of competing sportsbooks' lines.
#[async_trait]
pub trait MarketOddsProvider: Send + Sync {
    /// Fetch every currently posted line across supported books.
    async fn market_rows(&self) -> Result<Vec<MarketRow>>;

    /// Short name for logs and output.
    fn provider_name(&self) -> &'static str;
}
