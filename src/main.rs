use anyhow::Result;
use colored::*;
use dotenv::dotenv;
use std::env;
use std::time::Duration;

use solana_pool_price::dex::{orca, raydium};
use solana_pool_price::models::pool::{PoolConfig, PoolKind, PoolSnapshot, POOLS};
use solana_pool_price::models::token::get_token_info;
use solana_pool_price::utils::usd::UsdPriceCache;

async fn fetch_snapshot(
    client: &solana_client::rpc_client::RpcClient,
    pool: &PoolConfig,
) -> Result<PoolSnapshot> {
    match pool.kind {
        PoolKind::RaydiumAmm => raydium::get_pool_snapshot(client, pool.address).await,
        PoolKind::OrcaWhirlpool => orca::get_pool_snapshot(client, pool.address).await,
    }
}

fn kind_label(kind: PoolKind) -> &'static str {
    match kind {
        PoolKind::RaydiumAmm => "raydium",
        PoolKind::OrcaWhirlpool => "orca",
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();
    colored::control::set_override(true);

    let rpc_url = env::var("SOLANA_RPC_URL").expect("SOLANA_RPC_URL must be set");
    let poll_interval = env::var("POLL_INTERVAL_SECS")
        .unwrap_or_else(|_| "30".to_string())
        .parse::<u64>()
        .expect("POLL_INTERVAL_SECS must be a valid number");
    let usd_ttl = env::var("USD_CACHE_TTL_SECS")
        .unwrap_or_else(|_| "120".to_string())
        .parse::<u64>()
        .expect("USD_CACHE_TTL_SECS must be a valid number");

    let client = solana_client::rpc_client::RpcClient::new(rpc_url);
    let http = reqwest::Client::new();
    let mut usd_cache = UsdPriceCache::new(Duration::from_secs(usd_ttl));

    println!(
        "{} Starting pool price scanner ({} pools, every {}s)...",
        "[INFO]".bright_green(),
        POOLS.len(),
        poll_interval
    );

    loop {
        for pool in POOLS.iter() {
            let snapshot = match fetch_snapshot(&client, pool).await {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    println!(
                        "{} {} ({}) at {}: {:#}",
                        "[ERROR]".bright_red(),
                        pool.pair,
                        kind_label(pool.kind),
                        pool.address,
                        e
                    );
                    continue;
                }
            };

            let quote_symbol = get_token_info(&snapshot.quote_mint)
                .map(|t| t.symbol)
                .unwrap_or("?");

            // Stables are taken at par; a SOL quote goes through the
            // aggregator; anything else is reported in quote units only.
            let usd_price = match get_token_info(&snapshot.quote_mint) {
                Some(token) if token.is_stable => Some(snapshot.quote.price),
                Some(token) if token.symbol == "SOL" => match usd_cache.get(&http).await {
                    Ok(rate) => Some(snapshot.quote.price * rate),
                    Err(e) => {
                        println!(
                            "{} SOL/USD rate unavailable: {:#}",
                            "[WARN]".bright_yellow(),
                            e
                        );
                        None
                    }
                },
                _ => None,
            };

            let timestamp = chrono::Local::now().format("%H:%M:%S");
            match usd_price {
                Some(usd) => println!(
                    "{} {} {} ({}) {:.9} {} (${:.4})",
                    "[PRICE]".bright_cyan(),
                    timestamp,
                    pool.pair,
                    kind_label(pool.kind),
                    snapshot.quote.price,
                    quote_symbol,
                    usd
                ),
                None => println!(
                    "{} {} {} ({}) {:.9} {}",
                    "[PRICE]".bright_cyan(),
                    timestamp,
                    pool.pair,
                    kind_label(pool.kind),
                    snapshot.quote.price,
                    quote_symbol
                ),
            }
        }

        tokio::time::sleep(Duration::from_secs(poll_interval)).await;
    }
}
