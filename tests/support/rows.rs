use propedge::domain::RawPrice;
use propedge::port::{MarketRow, ReferenceRow};

/// Reference row with American prices as text, as a snapshot would carry them.
pub fn reference(player: &str, market: &str, over: &str, under: &str) -> ReferenceRow {
    ReferenceRow::new(player, market, Some(over.into()), Some(under.into()))
}

/// Competing-book row with an over price only, as numbers from the feed.
pub fn offer(player: &str, market: &str, book: &str, over: i32) -> MarketRow {
    MarketRow::new(player, market, book, Some(RawPrice::from(over)), None)
}

pub fn offer_both(player: &str, market: &str, book: &str, over: i32, under: i32) -> MarketRow {
    MarketRow::new(
        player,
        market,
        book,
        Some(RawPrice::from(over)),
        Some(RawPrice::from(under)),
    )
}
