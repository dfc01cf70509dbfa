//! Response shapes for the events and event-odds endpoints.
//!
//! Only the fields the scanner reads are modelled; everything else is ignored.

use serde::Deserialize;

/// One entry from `GET /sports/{sport}/events`.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub id: String,
    /// ISO-8601 UTC start time, e.g. `2026-10-16T23:05:00Z`.
    pub commence_time: String,
}

/// Body of `GET /sports/{sport}/events/{id}/odds`.
#[derive(Debug, Clone, Deserialize)]
pub struct EventOdds {
    pub id: String,
    #[serde(default)]
    pub bookmakers: Vec<Bookmaker>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Bookmaker {
    pub key: String,
    #[serde(default)]
    pub markets: Vec<BookmakerMarket>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookmakerMarket {
    pub key: String,
    #[serde(default)]
    pub outcomes: Vec<Outcome>,
}

/// A single priced outcome. For player props `name` is `Over`/`Under` and
/// `description` carries the player.
#[derive(Debug, Clone, Deserialize)]
pub struct Outcome {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub point: Option<f64>,
}
