use anyhow::{anyhow, Result};
use log::debug;
use serde::Deserialize;
use std::time::{Duration, Instant};

const COINGECKO_URL: &str =
    "https://api.coingecko.com/api/v3/simple/price?ids=solana&vs_currencies=usd";

#[derive(Debug, Deserialize)]
struct SimplePriceResponse {
    solana: UsdQuote,
}

#[derive(Debug, Deserialize)]
struct UsdQuote {
    usd: f64,
}

/// Caller-owned cache for the SOL/USD rate.
///
/// Each call site constructs (or is handed) its own instance, so staleness
/// is plain data with no process-wide state behind it.
#[derive(Debug)]
pub struct UsdPriceCache {
    value: Option<f64>,
    fetched_at: Option<Instant>,
    ttl: Duration,
}

impl UsdPriceCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            value: None,
            fetched_at: None,
            ttl,
        }
    }

    /// Returns the cached rate if it is younger than the TTL.
    pub fn fresh(&self) -> Option<f64> {
        match (self.value, self.fetched_at) {
            (Some(value), Some(at)) if at.elapsed() < self.ttl => Some(value),
            _ => None,
        }
    }

    pub fn store(&mut self, value: f64) {
        self.value = Some(value);
        self.fetched_at = Some(Instant::now());
    }

    /// Cached SOL/USD rate, refreshed from the aggregator when stale.
    pub async fn get(&mut self, client: &reqwest::Client) -> Result<f64> {
        if let Some(value) = self.fresh() {
            return Ok(value);
        }

        let response = client
            .get(COINGECKO_URL)
            .send()
            .await?
            .json::<SimplePriceResponse>()
            .await?;

        let rate = response.solana.usd;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(anyhow!("aggregator returned bad SOL/USD rate: {}", rate));
        }

        debug!("refreshed SOL/USD rate: {}", rate);
        self.store(rate);
        Ok(rate)
    }
}
