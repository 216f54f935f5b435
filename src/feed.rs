//! Best-effort real-price seeding at startup.
//!
//! One quote per symbol is fetched before the terminal UI starts; any failure
//! just leaves that symbol at its $1.00 baseline. Nothing here is consulted
//! again once the game is running.

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::game::catalog::Symbol;
use crate::game::market::Market;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("no quote in response for {0}")]
    MissingQuote(String),
}

/// A source of last-close prices, keyed by exchange ticker.
pub trait PriceFeed {
    fn last_close(&self, ticker: &str) -> Result<f64, FeedError>;
}

// Response shape of the Yahoo Finance v8 chart endpoint, reduced to the one
// field we read.
#[derive(Deserialize)]
struct ChartResponse {
    chart: ChartBody,
}

#[derive(Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
}

#[derive(Deserialize)]
struct ChartResult {
    meta: ChartMeta,
}

#[derive(Deserialize)]
struct ChartMeta {
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: Option<f64>,
}

pub struct YahooFeed {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl YahooFeed {
    pub fn new() -> Result<Self, FeedError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .user_agent("cli-stock-treasure/0.1")
            .build()?;
        Ok(Self {
            client,
            base_url: "https://query1.finance.yahoo.com".to_string(),
        })
    }
}

impl PriceFeed for YahooFeed {
    fn last_close(&self, ticker: &str) -> Result<f64, FeedError> {
        let url = format!(
            "{}/v8/finance/chart/{}?range=1d&interval=1d",
            self.base_url, ticker
        );
        let response: ChartResponse = self.client.get(&url).send()?.error_for_status()?.json()?;
        response
            .chart
            .result
            .as_deref()
            .and_then(|r| r.first())
            .and_then(|r| r.meta.regular_market_price)
            .ok_or_else(|| FeedError::MissingQuote(ticker.to_string()))
    }
}

/// Seeds the market with real last-close prices where the feed delivers one.
/// Returns the symbols that were seeded; failures are logged and skipped.
pub fn seed_prices(market: &mut Market, feed: &dyn PriceFeed) -> Vec<(Symbol, f64)> {
    let mut seeded = Vec::new();
    for sym in Symbol::ALL {
        match feed.last_close(sym.ticker()) {
            Ok(price) if price > 0.0 => {
                debug!(ticker = sym.ticker(), price, "seeded price");
                market.set_price(sym, price);
                seeded.push((sym, price));
            }
            Ok(price) => {
                warn!(ticker = sym.ticker(), price, "ignoring non-positive quote");
            }
            Err(e) => {
                warn!(ticker = sym.ticker(), error = %e, "price fetch failed");
            }
        }
    }
    seeded
}
