use once_cell::sync::Lazy;

/// Raydium AMM v4 liquidity state, decoded from a 752-byte account.
///
/// Only the fields needed for pricing are decoded; `status` and `nonce`
/// are kept because they sit ahead of the decimals and are occasionally
/// useful when eyeballing a suspect account dump. Public keys stay as raw
/// bytes and are rendered to base58 on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaydiumAmmState {
    pub status: u64,
    pub nonce: u64,
    pub quote_decimal: u64,
    pub base_decimal: u64,
    pub quote_vault: [u8; 32],
    pub base_vault: [u8; 32],
    pub quote_mint: [u8; 32],
    pub base_mint: [u8; 32],
    pub lp_mint: [u8; 32],
    pub open_orders: [u8; 32],
    pub market_id: [u8; 32],
    pub market_program_id: [u8; 32],
    pub target_orders: [u8; 32],
    pub withdraw_queue: [u8; 32],
    pub lp_vault: [u8; 32],
    pub owner: [u8; 32],
}

/// Orca Whirlpool state, decoded from a 653-byte account (661 with the
/// anchor discriminator still attached).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhirlpoolState {
    pub whirlpools_config: [u8; 32],
    pub whirlpool_bump: u8,
    pub tick_spacing: u16,
    pub tick_spacing_seed: u16,
    pub fee_rate: u16,
    pub protocol_fee_rate: u16,
    pub liquidity: u128,
    pub sqrt_price: u128,
    pub tick_current_index: i32,
    pub protocol_fee_owed_a: u64,
    pub protocol_fee_owed_b: u64,
    pub token_mint_a: [u8; 32],
    pub token_vault_a: [u8; 32],
    pub fee_growth_global_a: u128,
    pub token_mint_b: [u8; 32],
    pub token_vault_b: [u8; 32],
    pub fee_growth_global_b: u128,
    pub reward_last_updated_timestamp: u64,
}

/// A derived spot price: quote units per one base unit, together with the
/// decimal counts it was computed from.
#[derive(Debug, Clone, Copy)]
pub struct PriceQuote {
    pub price: f64,
    pub base_decimals: u8,
    pub quote_decimals: u8,
}

/// One priced pool, as reported by the per-DEX fetch paths.
#[derive(Debug, Clone)]
pub struct PoolSnapshot {
    pub quote: PriceQuote,
    pub base_mint: String,
    pub quote_mint: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolKind {
    RaydiumAmm,
    OrcaWhirlpool,
}

#[derive(Debug)]
pub struct PoolConfig {
    pub address: &'static str,
    pub kind: PoolKind,
    pub pair: &'static str,
}

pub static POOLS: Lazy<Vec<PoolConfig>> = Lazy::new(|| {
    vec![
        PoolConfig {
            address: "58oQChx4yWmvKdwLLZzBi4ChoCc2fqCUWBkwMihLYQo2",
            kind: PoolKind::RaydiumAmm,
            pair: "SOL/USDC",
        },
        PoolConfig {
            address: "7XawhbbxtsRcQA8KTkHT9f9nc6d69UwqCDh6U5EEbEmX",
            kind: PoolKind::RaydiumAmm,
            pair: "SOL/USDT",
        },
        PoolConfig {
            address: "HJPjoWUrhoZzkNfRpHuieeFk9WcZWjwy6PBjZ81ngndJ",
            kind: PoolKind::OrcaWhirlpool,
            pair: "SOL/USDC",
        },
    ]
});
