use anyhow::{anyhow, Context, Result};
use log::debug;
use solana_client::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

use crate::errors::PoolError;
use crate::models::pool::{PoolSnapshot, PriceQuote, WhirlpoolState};
use crate::models::token::get_token_info_by_bytes;
use crate::utils::base58;
use crate::utils::bytes::{read_i32_le, read_pubkey, read_u128_le, read_u16_le, read_u64_le};
use crate::utils::price::sqrt_price_to_price;

pub const PROGRAM_ID: &str = "whirLbMiicVdio4qvUfM5KAg6Ct8VwpYzGff3uctyCc";

/// Whirlpool account body, without the anchor discriminator.
pub const WHIRLPOOL_STATE_SIZE: usize = 653;
/// Whirlpool account with the 8-byte discriminator still attached.
pub const WHIRLPOOL_STATE_SIZE_WITH_DISCRIMINATOR: usize = 661;

const DISCRIMINATOR_SIZE: usize = 8;

/// Valid domain of the Q64.64 square-root price, matching the tick range
/// below.
pub const MIN_SQRT_PRICE: u128 = 4_295_048_016;
pub const MAX_SQRT_PRICE: u128 = 79_226_673_515_401_279_992_447_579_055;

pub const MIN_TICK_INDEX: i32 = -443_636;
pub const MAX_TICK_INDEX: i32 = 443_636;

/// Decodes an Orca Whirlpool account.
///
/// Accepts the 653-byte body, or the 661-byte form whose leading 8-byte
/// discriminator is skipped. The trailing reward-schedule bytes are left
/// undecoded, they play no part in pricing. `sqrt_price` and
/// `tick_current_index` must land inside their documented ranges or the
/// decode fails; values outside them mean either corrupt account data or
/// a wrong-offset bug, and no record is returned.
pub fn decode_whirlpool(data: &[u8]) -> Result<WhirlpoolState, PoolError> {
    let base = match data.len() {
        WHIRLPOOL_STATE_SIZE => 0,
        WHIRLPOOL_STATE_SIZE_WITH_DISCRIMINATOR => DISCRIMINATOR_SIZE,
        other => {
            return Err(PoolError::InvalidLength {
                expected: "653 or 661",
                actual: other,
            })
        }
    };

    let state = WhirlpoolState {
        whirlpools_config: read_pubkey(data, base)?,
        whirlpool_bump: data[base + 32],
        tick_spacing: read_u16_le(data, base + 33)?,
        tick_spacing_seed: read_u16_le(data, base + 35)?,
        fee_rate: read_u16_le(data, base + 37)?,
        protocol_fee_rate: read_u16_le(data, base + 39)?,
        liquidity: read_u128_le(data, base + 41)?,
        sqrt_price: read_u128_le(data, base + 57)?,
        tick_current_index: read_i32_le(data, base + 73)?,
        protocol_fee_owed_a: read_u64_le(data, base + 77)?,
        protocol_fee_owed_b: read_u64_le(data, base + 85)?,
        token_mint_a: read_pubkey(data, base + 93)?,
        token_vault_a: read_pubkey(data, base + 125)?,
        fee_growth_global_a: read_u128_le(data, base + 157)?,
        token_mint_b: read_pubkey(data, base + 173)?,
        token_vault_b: read_pubkey(data, base + 205)?,
        fee_growth_global_b: read_u128_le(data, base + 237)?,
        reward_last_updated_timestamp: read_u64_le(data, base + 253)?,
    };

    if state.sqrt_price < MIN_SQRT_PRICE || state.sqrt_price > MAX_SQRT_PRICE {
        return Err(PoolError::FieldOutOfRange {
            field: "sqrt_price",
            value: state.sqrt_price.to_string(),
        });
    }
    if state.tick_current_index < MIN_TICK_INDEX || state.tick_current_index > MAX_TICK_INDEX {
        return Err(PoolError::FieldOutOfRange {
            field: "tick_current_index",
            value: state.tick_current_index.to_string(),
        });
    }

    Ok(state)
}

/// Fetches and prices one whirlpool: account bytes, decode, then the
/// Q64.64 conversion (token B per token A). Mint decimals come from the
/// token registry, so both mints must be known tokens.
pub async fn get_pool_snapshot(client: &RpcClient, pool_address: &str) -> Result<PoolSnapshot> {
    let pool = Pubkey::from_str(pool_address)
        .with_context(|| format!("bad pool address {}", pool_address))?;
    let account = client
        .get_account(&pool)
        .with_context(|| format!("failed to fetch pool account {}", pool_address))?;

    let state = decode_whirlpool(&account.data)?;
    let mint_a = base58::encode(&state.token_mint_a);
    let mint_b = base58::encode(&state.token_mint_b);
    debug!(
        "whirlpool {}: mint A {}, mint B {}, sqrt_price {}",
        pool_address, mint_a, mint_b, state.sqrt_price
    );

    let token_a = get_token_info_by_bytes(&state.token_mint_a)
        .ok_or_else(|| anyhow!("unknown token mint {}", mint_a))?;
    let token_b = get_token_info_by_bytes(&state.token_mint_b)
        .ok_or_else(|| anyhow!("unknown token mint {}", mint_b))?;

    let price = sqrt_price_to_price(state.sqrt_price, token_a.decimals, token_b.decimals)?;

    Ok(PoolSnapshot {
        quote: PriceQuote {
            price,
            base_decimals: token_a.decimals,
            quote_decimals: token_b.decimals,
        },
        base_mint: mint_a,
        quote_mint: mint_b,
    })
}
