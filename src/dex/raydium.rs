use anyhow::{Context, Result};
use log::debug;
use solana_client::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

use crate::errors::PoolError;
use crate::models::pool::{PoolSnapshot, PriceQuote, RaydiumAmmState};
use crate::utils::base58;
use crate::utils::bytes::{read_pubkey, read_u64_le};
use crate::utils::price::constant_product_price;

pub const PROGRAM_ID: &str = "675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8";

/// Size of an AMM v4 liquidity-state account.
pub const AMM_V4_STATE_SIZE: usize = 752;

// Byte offsets into the 752-byte account. Established empirically by
// locating the wrapped-SOL mint in live account dumps and working back to
// a structurally consistent layout; the upstream SDK documentation puts
// the vaults at 192/224, which is wrong for this account version.
const OFFSET_QUOTE_DECIMAL: usize = 32;
const OFFSET_BASE_DECIMAL: usize = 40;
const OFFSET_QUOTE_VAULT: usize = 336;
const OFFSET_BASE_VAULT: usize = 368;
const OFFSET_QUOTE_MINT: usize = 400;
const OFFSET_BASE_MINT: usize = 432;
const OFFSET_LP_MINT: usize = 464;
const OFFSET_OPEN_ORDERS: usize = 496;
const OFFSET_MARKET_ID: usize = 528;
const OFFSET_MARKET_PROGRAM_ID: usize = 560;
const OFFSET_TARGET_ORDERS: usize = 592;
const OFFSET_WITHDRAW_QUEUE: usize = 624;
const OFFSET_LP_VAULT: usize = 656;
const OFFSET_OWNER: usize = 688;

/// Decodes a Raydium AMM v4 liquidity-state account.
///
/// The buffer must be exactly 752 bytes; no partial decode is attempted.
/// Embedded keys are not checked for zero and the decimal fields are not
/// range-checked here, that is the caller's call to make.
pub fn decode_amm_v4(data: &[u8]) -> Result<RaydiumAmmState, PoolError> {
    if data.len() != AMM_V4_STATE_SIZE {
        return Err(PoolError::InvalidLength {
            expected: "752",
            actual: data.len(),
        });
    }

    Ok(RaydiumAmmState {
        status: read_u64_le(data, 0)?,
        nonce: read_u64_le(data, 8)?,
        quote_decimal: read_u64_le(data, OFFSET_QUOTE_DECIMAL)?,
        base_decimal: read_u64_le(data, OFFSET_BASE_DECIMAL)?,
        quote_vault: read_pubkey(data, OFFSET_QUOTE_VAULT)?,
        base_vault: read_pubkey(data, OFFSET_BASE_VAULT)?,
        quote_mint: read_pubkey(data, OFFSET_QUOTE_MINT)?,
        base_mint: read_pubkey(data, OFFSET_BASE_MINT)?,
        lp_mint: read_pubkey(data, OFFSET_LP_MINT)?,
        open_orders: read_pubkey(data, OFFSET_OPEN_ORDERS)?,
        market_id: read_pubkey(data, OFFSET_MARKET_ID)?,
        market_program_id: read_pubkey(data, OFFSET_MARKET_PROGRAM_ID)?,
        target_orders: read_pubkey(data, OFFSET_TARGET_ORDERS)?,
        withdraw_queue: read_pubkey(data, OFFSET_WITHDRAW_QUEUE)?,
        lp_vault: read_pubkey(data, OFFSET_LP_VAULT)?,
        owner: read_pubkey(data, OFFSET_OWNER)?,
    })
}

fn fetch_vault_balance(client: &RpcClient, vault_address: &str) -> Result<u64> {
    let vault = Pubkey::from_str(vault_address)
        .with_context(|| format!("bad vault address {}", vault_address))?;
    let balance = client
        .get_token_account_balance(&vault)
        .with_context(|| format!("failed to fetch balance of vault {}", vault_address))?;
    balance
        .amount
        .parse::<u64>()
        .with_context(|| format!("non-integer vault balance for {}", vault_address))
}

/// Fetches and prices one AMM v4 pool: account bytes, decode, both vault
/// balances, then the constant-product spot price (quote per base).
pub async fn get_pool_snapshot(client: &RpcClient, pool_address: &str) -> Result<PoolSnapshot> {
    let pool = Pubkey::from_str(pool_address)
        .with_context(|| format!("bad pool address {}", pool_address))?;
    let account = client
        .get_account(&pool)
        .with_context(|| format!("failed to fetch pool account {}", pool_address))?;

    let state = decode_amm_v4(&account.data)?;
    let base_vault = base58::encode(&state.base_vault);
    let quote_vault = base58::encode(&state.quote_vault);
    debug!(
        "raydium pool {}: base vault {}, quote vault {}",
        pool_address, base_vault, quote_vault
    );

    let base_reserve = fetch_vault_balance(client, &base_vault)?;
    let quote_reserve = fetch_vault_balance(client, &quote_vault)?;
    debug!(
        "raydium pool {}: reserves {} / {}",
        pool_address, base_reserve, quote_reserve
    );

    let price = constant_product_price(
        base_reserve,
        quote_reserve,
        state.base_decimal,
        state.quote_decimal,
    );

    Ok(PoolSnapshot {
        quote: PriceQuote {
            price,
            base_decimals: state.base_decimal as u8,
            quote_decimals: state.quote_decimal as u8,
        },
        base_mint: base58::encode(&state.base_mint),
        quote_mint: base58::encode(&state.quote_mint),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(buf: &mut [u8], offset: usize, value: u8) {
        for b in buf[offset..offset + 32].iter_mut() {
            *b = value;
        }
    }

    fn sample_account() -> Vec<u8> {
        let mut data = vec![0u8; AMM_V4_STATE_SIZE];
        data[..8].copy_from_slice(&6u64.to_le_bytes());
        data[8..16].copy_from_slice(&254u64.to_le_bytes());
        data[32..40].copy_from_slice(&6u64.to_le_bytes());
        data[40..48].copy_from_slice(&9u64.to_le_bytes());
        fill(&mut data, 336, 0xA1);
        fill(&mut data, 368, 0xA2);
        fill(&mut data, 400, 0xA3);
        fill(&mut data, 432, 0xA4);
        fill(&mut data, 464, 0xA5);
        fill(&mut data, 496, 0xA6);
        fill(&mut data, 528, 0xA7);
        fill(&mut data, 560, 0xA8);
        fill(&mut data, 592, 0xA9);
        fill(&mut data, 624, 0xAA);
        fill(&mut data, 656, 0xAB);
        fill(&mut data, 688, 0xAC);
        data
    }

    #[test]
    fn decodes_every_tabulated_field() {
        let state = decode_amm_v4(&sample_account()).unwrap();
        assert_eq!(state.status, 6);
        assert_eq!(state.nonce, 254);
        assert_eq!(state.quote_decimal, 6);
        assert_eq!(state.base_decimal, 9);
        assert_eq!(state.quote_vault, [0xA1; 32]);
        assert_eq!(state.base_vault, [0xA2; 32]);
        assert_eq!(state.quote_mint, [0xA3; 32]);
        assert_eq!(state.base_mint, [0xA4; 32]);
        assert_eq!(state.lp_mint, [0xA5; 32]);
        assert_eq!(state.open_orders, [0xA6; 32]);
        assert_eq!(state.market_id, [0xA7; 32]);
        assert_eq!(state.market_program_id, [0xA8; 32]);
        assert_eq!(state.target_orders, [0xA9; 32]);
        assert_eq!(state.withdraw_queue, [0xAA; 32]);
        assert_eq!(state.lp_vault, [0xAB; 32]);
        assert_eq!(state.owner, [0xAC; 32]);
    }

    #[test]
    fn rejects_any_other_length() {
        for len in [0usize, 1, 751, 753, 1440] {
            let data = vec![0u8; len];
            assert_eq!(
                decode_amm_v4(&data),
                Err(PoolError::InvalidLength {
                    expected: "752",
                    actual: len
                })
            );
        }
    }

    #[test]
    fn vault_bytes_render_to_usable_addresses() {
        let mut data = sample_account();
        let sol_mint = crate::utils::base58::decode("So11111111111111111111111111111111111111112")
            .unwrap();
        data[432..464].copy_from_slice(&sol_mint);

        let state = decode_amm_v4(&data).unwrap();
        assert_eq!(
            crate::utils::base58::encode(&state.base_mint),
            "So11111111111111111111111111111111111111112"
        );
    }
}
