use crate::errors::PoolError;

/// Fixed-width little-endian reads over raw account data.
///
/// Every read is bounds-checked and fails with `PoolError::OutOfBounds`
/// instead of returning a zero that would decode into a plausible-looking
/// record from a truncated buffer.

fn check(buf: &[u8], offset: usize, len: usize) -> Result<(), PoolError> {
    if offset.checked_add(len).map_or(true, |end| end > buf.len()) {
        return Err(PoolError::OutOfBounds {
            offset,
            len,
            buf_len: buf.len(),
        });
    }
    Ok(())
}

pub fn read_u16_le(buf: &[u8], offset: usize) -> Result<u16, PoolError> {
    check(buf, offset, 2)?;
    let mut bytes = [0u8; 2];
    bytes.copy_from_slice(&buf[offset..offset + 2]);
    Ok(u16::from_le_bytes(bytes))
}

pub fn read_u32_le(buf: &[u8], offset: usize) -> Result<u32, PoolError> {
    check(buf, offset, 4)?;
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&buf[offset..offset + 4]);
    Ok(u32::from_le_bytes(bytes))
}

/// Reads 4 bytes as unsigned and reinterprets the bit pattern as
/// two's-complement signed, so `FF FF FF FF` yields -1.
pub fn read_i32_le(buf: &[u8], offset: usize) -> Result<i32, PoolError> {
    Ok(read_u32_le(buf, offset)? as i32)
}

pub fn read_u64_le(buf: &[u8], offset: usize) -> Result<u64, PoolError> {
    check(buf, offset, 8)?;
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&buf[offset..offset + 8]);
    Ok(u64::from_le_bytes(bytes))
}

/// u128 is laid out on the wire as two u64 halves: low 64 bits first,
/// high 64 bits second.
pub fn read_u128_le(buf: &[u8], offset: usize) -> Result<u128, PoolError> {
    let low = read_u64_le(buf, offset)?;
    let high = read_u64_le(buf, offset + 8)?;
    Ok(((high as u128) << 64) | (low as u128))
}

pub fn read_pubkey(buf: &[u8], offset: usize) -> Result<[u8; 32], PoolError> {
    check(buf, offset, 32)?;
    let mut key = [0u8; 32];
    key.copy_from_slice(&buf[offset..offset + 32]);
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_scalars() {
        let buf = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        assert_eq!(read_u16_le(&buf, 0).unwrap(), 0x0201);
        assert_eq!(read_u16_le(&buf, 6).unwrap(), 0x0807);
        assert_eq!(read_u32_le(&buf, 0).unwrap(), 0x04030201);
        assert_eq!(read_u64_le(&buf, 0).unwrap(), 0x0807060504030201);
    }

    #[test]
    fn i32_is_twos_complement_reinterpretation() {
        let buf = [0xFF, 0xFF, 0xFF, 0xFF];
        assert_eq!(read_i32_le(&buf, 0).unwrap(), -1);

        let buf = [0x00, 0x00, 0x00, 0x80];
        assert_eq!(read_i32_le(&buf, 0).unwrap(), i32::MIN);
    }

    #[test]
    fn u128_assembled_from_low_then_high_half() {
        let mut buf = [0u8; 16];
        buf[..8].copy_from_slice(&2u64.to_le_bytes());
        buf[8..].copy_from_slice(&1u64.to_le_bytes());
        assert_eq!(read_u128_le(&buf, 0).unwrap(), (1u128 << 64) | 2);
    }

    #[test]
    fn pubkey_copies_raw_bytes() {
        let mut buf = [0u8; 40];
        for (i, b) in buf.iter_mut().enumerate() {
            *b = i as u8;
        }
        let key = read_pubkey(&buf, 4).unwrap();
        assert_eq!(key[0], 4);
        assert_eq!(key[31], 35);
    }

    #[test]
    fn out_of_bounds_reads_fail_loudly() {
        let buf = [0u8; 8];
        assert!(matches!(
            read_u16_le(&buf, 7),
            Err(PoolError::OutOfBounds { offset: 7, len: 2, buf_len: 8 })
        ));
        assert!(read_u64_le(&buf, 1).is_err());
        assert!(read_u128_le(&buf, 0).is_err());
        assert!(read_pubkey(&buf, 0).is_err());
        // offset past the end entirely, including overflow-prone offsets
        assert!(read_u32_le(&buf, usize::MAX).is_err());
    }
}
