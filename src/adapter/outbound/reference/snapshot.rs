//! Snapshot file reader.
//!
//! The file is a JSON array. Each entry is either a ready row
//! (`{"Player", "Market", "Over", "Under"}` with American prices) or a raw
//! listing as printed by the reference book:
//!
//! ```json
//! { "title": "Aaron Judge (Total Bases)", "over": 2.5, "under": "1.5556" }
//! ```
//!
//! Listing prices are decimal odds. They are converted to American strings;
//! a price that does not convert (text, or decimal odds at or below 1.0) is
//! kept as [`RawPrice::Unpriceable`] so that the engine reports it as a
//! skipped record instead of reading it as an American price.

use std::path::PathBuf;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::domain::{decimal_to_american, MarketVocabulary, RawPrice};
use crate::error::{ProviderError, Result};
use crate::port::{ReferenceOddsProvider, ReferenceRow};

/// One snapshot entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SnapshotEntry {
    Row(ReferenceRow),
    Listing {
        title: String,
        #[serde(default)]
        over: Option<RawPrice>,
        #[serde(default)]
        under: Option<RawPrice>,
    },
}

/// Reads reference lines from a snapshot file on every fetch.
pub struct SnapshotReferenceProvider {
    path: Option<PathBuf>,
    vocabulary: MarketVocabulary,
}

impl SnapshotReferenceProvider {
    #[must_use]
    pub fn new(path: Option<PathBuf>, vocabulary: MarketVocabulary) -> Self {
        Self { path, vocabulary }
    }

    /// Parse snapshot text into rows.
    ///
    /// Entries that match neither shape, and listings whose title names no
    /// known market, are logged and dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::SnapshotParse`] if the text is not a JSON
    /// array.
    pub fn parse(&self, content: &str, origin: &str) -> Result<Vec<ReferenceRow>> {
        let entries: Vec<serde_json::Value> =
            serde_json::from_str(content).map_err(|source| ProviderError::SnapshotParse {
                path: origin.to_string(),
                source,
            })?;

        let mut rows = Vec::with_capacity(entries.len());
        for (index, value) in entries.into_iter().enumerate() {
            match serde_json::from_value::<SnapshotEntry>(value) {
                Ok(SnapshotEntry::Row(row)) => rows.push(row),
                Ok(SnapshotEntry::Listing { title, over, under }) => {
                    match self.listing_row(&title, over, under) {
                        Some(row) => rows.push(row),
                        None => debug!(title = %title, "Listing has no known market, dropping"),
                    }
                }
                Err(err) => {
                    warn!(index, error = %err, "Unrecognized snapshot entry, dropping");
                }
            }
        }
        Ok(rows)
    }

    fn listing_row(
        &self,
        title: &str,
        over: Option<RawPrice>,
        under: Option<RawPrice>,
    ) -> Option<ReferenceRow> {
        let (player, market) = self.vocabulary.normalize_reference_title(title)?;
        Some(ReferenceRow::new(
            player,
            market.label(),
            over.map(listing_price),
            under.map(listing_price),
        ))
    }
}

/// Convert a decimal-odds listing price to an American string, or mark it
/// unpriceable when it does not convert.
#[must_use]
pub fn listing_price(raw: RawPrice) -> RawPrice {
    let decimal = match &raw {
        RawPrice::Number(value) => Decimal::try_from(*value).ok(),
        RawPrice::Text(text) => text.trim().parse::<Decimal>().ok(),
        RawPrice::Unpriceable(_) => None,
    };
    match decimal.and_then(decimal_to_american) {
        Some(american) => RawPrice::Text(american.to_string()),
        None => RawPrice::Unpriceable(raw.to_string()),
    }
}

#[async_trait]
impl ReferenceOddsProvider for SnapshotReferenceProvider {
    async fn reference_rows(&self) -> Result<Vec<ReferenceRow>> {
        let path = self.path.as_ref().ok_or(ProviderError::NoSnapshot)?;
        let origin = path.display().to_string();
        let content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ProviderError::SnapshotRead {
                    path: origin.clone(),
                    source,
                })?;

        let rows = self.parse(&content, &origin)?;
        info!(path = %origin, rows = rows.len(), "Loaded reference snapshot");
        Ok(rows)
    }

    fn provider_name(&self) -> &'static str {
        "reference-snapshot"
    }
}
