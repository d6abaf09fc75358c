use crate::errors::PoolError;

/// Spot price of a constant-product pool, in quote units per base unit.
///
/// Reserves are raw on-chain amounts; both are normalized by their mint
/// decimals before taking the ratio. A drained base side returns 0.0
/// rather than an error: an empty pool is a legitimate state, not
/// malformed input.
pub fn constant_product_price(
    base_reserve: u64,
    quote_reserve: u64,
    base_decimals: u64,
    quote_decimals: u64,
) -> f64 {
    let base_actual = base_reserve as f64 / 10f64.powi(base_decimals as i32);
    let quote_actual = quote_reserve as f64 / 10f64.powi(quote_decimals as i32);

    if base_actual <= 0.0 {
        return 0.0;
    }

    quote_actual / base_actual
}

/// Converts a Q64.64 square-root price into a token B per token A price.
///
/// The stored value is sqrt(price) scaled by 2^64; undoing the scale and
/// squaring recovers the raw price, and `10^(decimals_a - decimals_b)`
/// shifts for the decimal-place difference between the two mints.
pub fn sqrt_price_to_price(
    sqrt_price_q64: u128,
    decimals_a: u8,
    decimals_b: u8,
) -> Result<f64, PoolError> {
    if decimals_a > 18 {
        return Err(PoolError::DecimalsOutOfRange(decimals_a));
    }
    if decimals_b > 18 {
        return Err(PoolError::DecimalsOutOfRange(decimals_b));
    }

    let sqrt_price = sqrt_price_q64 as f64 / 2f64.powi(64);
    let price = sqrt_price * sqrt_price * 10f64.powi(decimals_a as i32 - decimals_b as i32);

    if !price.is_finite() || price < 0.0 {
        return Err(PoolError::FieldOutOfRange {
            field: "sqrt_price",
            value: sqrt_price_q64.to_string(),
        });
    }

    Ok(price)
}
