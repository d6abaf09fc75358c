use once_cell::sync::Lazy;

#[derive(Debug)]
pub struct TokenInfo {
    pub address: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
    /// True for USD-pegged stables, whose USD rate is taken as 1.0
    /// without an oracle round-trip.
    pub is_stable: bool,
}

pub static TOKENS: Lazy<Vec<TokenInfo>> = Lazy::new(|| {
    vec![
        TokenInfo {
            address: "So11111111111111111111111111111111111111112",
            symbol: "SOL",
            decimals: 9,
            is_stable: false,
        },
        TokenInfo {
            address: "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
            symbol: "USDC",
            decimals: 6,
            is_stable: true,
        },
        TokenInfo {
            address: "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB",
            symbol: "USDT",
            decimals: 6,
            is_stable: true,
        },
    ]
});

/// Looks up a known token by its base58 address.
pub fn get_token_info(address: &str) -> Option<&'static TokenInfo> {
    TOKENS.iter().find(|t| t.address == address)
}

/// Looks up a known token by raw mint bytes, as decoded from pool state.
pub fn get_token_info_by_bytes(mint: &[u8; 32]) -> Option<&'static TokenInfo> {
    get_token_info(&crate::utils::base58::encode(mint))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::base58;

    #[test]
    fn registry_addresses_round_trip_through_base58() {
        for token in TOKENS.iter() {
            let bytes = base58::decode(token.address).expect("registry address must be valid");
            assert_eq!(base58::encode(&bytes), token.address);
            assert_eq!(
                get_token_info_by_bytes(&bytes).map(|t| t.symbol),
                Some(token.symbol)
            );
        }
    }

    #[test]
    fn unknown_mint_is_none() {
        assert!(get_token_info("11111111111111111111111111111111").is_none());
        assert!(get_token_info_by_bytes(&[0xAB; 32]).is_none());
    }
}
