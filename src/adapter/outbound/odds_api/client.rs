//! The Odds API REST client.
//!
//! Two calls per scan: the sport's event list, then one odds request per
//! event that is still to start today. Event-level failures are logged and
//! skipped so one bad event never sinks the whole feed.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client as HttpClient;
use tokio::time::sleep;
use tracing::{debug, info, warn};
use url::Url;

use super::dto::{Event, EventOdds};
use super::settings::{OddsApiConfig, OddsApiHttpConfig, API_KEY_ENV};
use crate::domain::{BookId, BookLineKey, MarketVocabulary, PriceQuote, QuoteBook, RawPrice, Side};
use crate::error::{ProviderError, Result};
use crate::port::{MarketOddsProvider, MarketRow};

/// Batter props are posted at several lines; only the 0.5 line is compared.
const BATTER_KEY_PREFIX: &str = "batter_";
const BATTER_LINE: f64 = 0.5;

/// How often and how patiently a failed request is retried.
///
/// Only transport failures (timeouts, refused connections) are retried. An
/// HTTP error status or an undecodable body fails immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff: Duration,
}

impl RetryPolicy {
    #[must_use]
    pub fn from_config(http: &OddsApiHttpConfig) -> Self {
        Self {
            max_attempts: http.retry_max_attempts.max(1),
            backoff: Duration::from_millis(http.retry_backoff_ms),
        }
    }

    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Whether a failure on `attempt` (1-based) earns another attempt.
    #[must_use]
    pub fn should_retry(&self, attempt: u32, err: &reqwest::Error) -> bool {
        attempt < self.max_attempts && (err.is_timeout() || err.is_connect())
    }
}

/// HTTP client for the odds feed, scoped to one sport and a set of books.
pub struct OddsApiClient {
    http: HttpClient,
    base_url: String,
    sport: String,
    regions: String,
    api_key: Option<String>,
    books: Vec<BookId>,
    vocabulary: MarketVocabulary,
    retry: RetryPolicy,
}

impl OddsApiClient {
    #[must_use]
    pub fn from_config(
        config: &OddsApiConfig,
        books: Vec<BookId>,
        vocabulary: MarketVocabulary,
        api_key: Option<String>,
    ) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.http.timeout_ms))
            .connect_timeout(Duration::from_millis(config.http.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            sport: config.sport.clone(),
            regions: config.regions.clone(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            books,
            vocabulary,
            retry: RetryPolicy::from_config(&config.http),
        }
    }

    /// Like [`Self::from_config`], reading the key from `ODDS_API_KEY`.
    #[must_use]
    pub fn from_env(
        config: &OddsApiConfig,
        books: Vec<BookId>,
        vocabulary: MarketVocabulary,
    ) -> Self {
        Self::from_config(config, books, vocabulary, std::env::var(API_KEY_ENV).ok())
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            ProviderError::MissingApiKey {
                env_var: API_KEY_ENV,
            }
            .into()
        })
    }

    /// `GET {base}/sports/{sport}/events`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL does not parse.
    pub fn events_url(&self, api_key: &str) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/sports/{}/events", self.base_url, self.sport))?;
        url.query_pairs_mut()
            .append_pair("apiKey", api_key)
            .append_pair("dateFormat", "iso")
            .append_pair("regions", &self.regions);
        Ok(url)
    }

    /// `GET {base}/sports/{sport}/events/{id}/odds` for every vocabulary key.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL does not parse.
    pub fn event_odds_url(&self, event_id: &str, api_key: &str) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/sports/{}/events/{}/odds",
            self.base_url, self.sport, event_id
        ))?;
        let markets = self.vocabulary.feed_keys().collect::<Vec<_>>().join(",");
        url.query_pairs_mut()
            .append_pair("apiKey", api_key)
            .append_pair("regions", &self.regions)
            .append_pair("markets", &markets)
            .append_pair("oddsFormat", "american");
        Ok(url)
    }

    async fn get_with_retry<T>(&self, url: Url) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let err = match self.http.get(url.clone()).send().await {
                Ok(response) => {
                    if let Some(remaining) = response.headers().get("x-requests-remaining") {
                        debug!(remaining = ?remaining, "Odds API quota");
                    }
                    let response = response
                        .error_for_status()
                        .map_err(reqwest::Error::without_url)?;
                    match response.json::<T>().await {
                        Ok(parsed) => return Ok(parsed),
                        Err(err) => err,
                    }
                }
                Err(err) => err,
            };

            let retry = self.retry.should_retry(attempt, &err);
            let err = err.without_url();
            if !retry {
                return Err(err.into());
            }
            warn!(
                attempt,
                max_attempts = self.retry.max_attempts(),
                error = %err,
                "HTTP request failed, retrying"
            );
            if !self.retry.backoff.is_zero() {
                sleep(self.retry.backoff).await;
            }
        }
    }
}

/// IDs of events starting later today (UTC). Games already underway are
/// excluded; unparseable start times are logged and skipped.
#[must_use]
pub fn upcoming_today(events: &[Event], now: DateTime<Utc>) -> Vec<String> {
    let today = now.date_naive();
    events
        .iter()
        .filter(|event| match DateTime::parse_from_rfc3339(&event.commence_time) {
            Ok(start) => {
                let start = start.with_timezone(&Utc);
                start.date_naive() == today && start > now
            }
            Err(err) => {
                warn!(
                    event = %event.id,
                    commence_time = %event.commence_time,
                    error = %err,
                    "Unparseable event start time"
                );
                false
            }
        })
        .map(|event| event.id.clone())
        .collect()
}

/// Fold one event's bookmaker odds into `quotes`.
///
/// Keeps supported books and vocabulary markets only; batter markets keep
/// only the 0.5 line. Outcomes without a player, a price or an over/under
/// name are dropped.
pub fn collect_quotes(
    odds: &EventOdds,
    books: &[BookId],
    vocabulary: &MarketVocabulary,
    quotes: &mut QuoteBook<BookLineKey>,
) {
    for bookmaker in &odds.bookmakers {
        let book = BookId::new(&bookmaker.key);
        if !books.contains(&book) {
            continue;
        }

        for market in &bookmaker.markets {
            let Some(label) = vocabulary.market_for_key(&market.key) else {
                continue;
            };
            let batter = market.key.starts_with(BATTER_KEY_PREFIX);

            for outcome in &market.outcomes {
                if batter && outcome.point != Some(BATTER_LINE) {
                    continue;
                }
                let Some(side) = Side::from_outcome_name(&outcome.name) else {
                    continue;
                };
                let Some(player) = outcome.description.as_deref().filter(|p| !p.trim().is_empty())
                else {
                    continue;
                };
                let Some(price) = outcome.price else {
                    continue;
                };

                quotes.apply(
                    &book,
                    PriceQuote {
                        player: player.to_string(),
                        market: label,
                        side,
                        price: Some(RawPrice::Number(price)),
                    },
                );
            }
        }
    }
}

/// Flatten accumulated quotes into rows, in first-seen order.
#[must_use]
pub fn into_rows(quotes: QuoteBook<BookLineKey>) -> Vec<MarketRow> {
    quotes
        .into_iter()
        .map(|(key, pair)| {
            let (over, under) = pair.into_sides();
            MarketRow::new(key.line.player, key.line.market.label(), key.book, over, under)
        })
        .collect()
}

#[async_trait]
impl MarketOddsProvider for OddsApiClient {
    async fn market_rows(&self) -> Result<Vec<MarketRow>> {
        let api_key = self.api_key()?;

        let events: Vec<Event> = self.get_with_retry(self.events_url(api_key)?).await?;
        let event_ids = upcoming_today(&events, Utc::now());
        info!(
            events = events.len(),
            upcoming = event_ids.len(),
            sport = %self.sport,
            "Fetched event list"
        );

        let mut quotes = QuoteBook::new();
        for event_id in &event_ids {
            let url = self.event_odds_url(event_id, api_key)?;
            match self.get_with_retry::<EventOdds>(url).await {
                Ok(odds) => {
                    debug!(event = %event_id, bookmakers = odds.bookmakers.len(), "Fetched event odds");
                    collect_quotes(&odds, &self.books, &self.vocabulary, &mut quotes);
                }
                Err(err) => {
                    warn!(event = %event_id, error = %err, "Failed to fetch event odds, skipping");
                }
            }
        }

        Ok(into_rows(quotes))
    }

    fn provider_name(&self) -> &'static str {
        "odds-api"
    }
}
