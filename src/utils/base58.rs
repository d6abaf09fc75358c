/// Base58 rendering of 32-byte account addresses.
///
/// Canonical alphabet: alphanumerics minus the visually ambiguous
/// `0`, `O`, `I`, `l`.
const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Encodes a 32-byte public key as base58 text (32-44 characters).
///
/// The key bytes are treated as one big-endian integer and repeatedly
/// divided by 58; each leading zero byte of the input becomes one leading
/// `'1'` in the output, since the division loop alone cannot represent
/// them.
pub fn encode(key: &[u8; 32]) -> String {
    // Worst case for 32 input bytes is 44 base58 digits.
    let mut digits: Vec<u8> = Vec::with_capacity(44);
    let mut scratch = *key;

    loop {
        let mut remainder = 0u32;
        let mut all_zero = true;
        for byte in scratch.iter_mut() {
            let value = (remainder << 8) | (*byte as u32);
            *byte = (value / 58) as u8;
            remainder = value % 58;
            if *byte != 0 {
                all_zero = false;
            }
        }
        digits.push(ALPHABET[remainder as usize]);
        if all_zero {
            break;
        }
    }

    // The loop above emits at least one digit even for an all-zero input;
    // drop it so the leading-'1' rule is the only representation of zeros.
    if digits == [b'1'] {
        digits.clear();
    }

    let leading_zeros = key.iter().take_while(|&&b| b == 0).count();
    let mut out = String::with_capacity(leading_zeros + digits.len());
    for _ in 0..leading_zeros {
        out.push('1');
    }
    for &digit in digits.iter().rev() {
        out.push(digit as char);
    }
    out
}

/// Decodes base58 text back into 32 key bytes.
///
/// Returns `None` on alphabet violations or when the value does not fit
/// exactly 32 bytes. Leading `'1'` characters map back to leading zero
/// bytes.
pub fn decode(text: &str) -> Option<[u8; 32]> {
    let mut bytes: Vec<u8> = Vec::with_capacity(32);
    for ch in text.bytes() {
        let digit = ALPHABET.iter().position(|&a| a == ch)? as u32;
        let mut carry = digit;
        for byte in bytes.iter_mut() {
            let value = (*byte as u32) * 58 + carry;
            *byte = (value & 0xFF) as u8;
            carry = value >> 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xFF) as u8);
            carry >>= 8;
        }
    }

    let leading_ones = text.bytes().take_while(|&b| b == b'1').count();
    // `bytes` is little-endian here and excludes the leading zeros.
    if bytes.len() + leading_ones != 32 {
        return None;
    }

    let mut key = [0u8; 32];
    for (i, &b) in bytes.iter().rev().enumerate() {
        key[leading_ones + i] = b;
    }
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Wrapped-SOL mint, So11111111111111111111111111111111111111112.
    const SOL_MINT_BYTES: [u8; 32] = [
        0x06, 0x9b, 0x88, 0x57, 0xfe, 0xab, 0x81, 0x84, 0xfb, 0x68, 0x7f, 0x63, 0x46, 0x18, 0xc0,
        0x35, 0xda, 0xc4, 0x39, 0xdc, 0x1a, 0xeb, 0x3b, 0x55, 0x98, 0xa0, 0xf0, 0x00, 0x00, 0x00,
        0x00, 0x01,
    ];

    #[test]
    fn all_zero_key_is_32_ones() {
        assert_eq!(encode(&[0u8; 32]), "1".repeat(32));
    }

    #[test]
    fn encodes_wrapped_sol_mint() {
        assert_eq!(
            encode(&SOL_MINT_BYTES),
            "So11111111111111111111111111111111111111112"
        );
    }

    #[test]
    fn output_length_stays_in_address_range() {
        assert!(encode(&[0u8; 32]).len() >= 32);
        assert_eq!(encode(&[0xFF; 32]).len(), 44);
    }

    #[test]
    fn round_trips_including_leading_zeros() {
        let mut key = [0u8; 32];
        key[3] = 0x7f;
        key[31] = 0x01;
        assert_eq!(decode(&encode(&key)).unwrap(), key);

        assert_eq!(decode(&encode(&SOL_MINT_BYTES)).unwrap(), SOL_MINT_BYTES);
        assert_eq!(decode(&encode(&[0u8; 32])).unwrap(), [0u8; 32]);
        assert_eq!(decode(&encode(&[0xFF; 32])).unwrap(), [0xFF; 32]);
    }

    #[test]
    fn decode_rejects_bad_input() {
        // 'O' is not in the alphabet
        assert!(decode("O111111111111111111111111111111111").is_none());
        // wrong magnitude for a 32-byte key
        assert!(decode("1").is_none());
        assert!(decode("").is_none());
    }
}
