use thiserror::Error;

/// Failure kinds shared by the pool decoders and the price formulas.
///
/// Decoders fail closed: any of these aborts the whole decode and no
/// partial record is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("invalid account data length: got {actual} bytes, expected {expected}")]
    InvalidLength {
        expected: &'static str,
        actual: usize,
    },

    #[error("read of {len} bytes at offset {offset} exceeds buffer of {buf_len} bytes")]
    OutOfBounds {
        offset: usize,
        len: usize,
        buf_len: usize,
    },

    #[error("{field} out of range: {value}")]
    FieldOutOfRange {
        field: &'static str,
        value: String,
    },

    #[error("token decimals out of range: {0} (max 18)")]
    DecimalsOutOfRange(u8),
}
