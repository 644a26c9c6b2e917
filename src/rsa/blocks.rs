// Message Block Codec
// Converts between raw bytes and the bounded integer blocks the RSA
// transforms operate on

use num_bigint::BigUint;
use num_traits::Zero;

/// Largest block size in bytes that is guaranteed to encode below the
/// modulus, regardless of byte values: floor(bits(n) / 8) - 1
///
/// The one-byte under-sizing is intentional. A 1024-bit modulus yields
/// a limit of 127.
pub fn block_byte_limit(n: &BigUint) -> usize {
    ((n.bits() / 8) as usize).saturating_sub(1)
}

/// Partition bytes into consecutive chunks of at most `limit` bytes,
/// preserving order; the last chunk may be shorter
///
/// `limit` must be nonzero.
pub fn split(bytes: &[u8], limit: usize) -> Vec<&[u8]> {
    bytes.chunks(limit).collect()
}

/// Interpret a block as an unsigned big-endian integer
pub fn encode_block(block: &[u8]) -> BigUint {
    BigUint::from_bytes_be(block)
}

/// Minimal big-endian byte representation of a block value
///
/// Leading zero bytes present in the original block are not
/// reconstructed; a zero value decodes to no bytes at all.
pub fn decode_block(value: &BigUint) -> Vec<u8> {
    if value.is_zero() {
        return Vec::new();
    }
    value.to_bytes_be()
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    #[test]
    fn test_limit_for_1024_bit_modulus() {
        let n = BigUint::one() << 1023u32;
        assert_eq!(n.bits(), 1024);
        assert_eq!(block_byte_limit(&n), 127);
    }

    #[test]
    fn test_limit_for_small_moduli() {
        // 8-bit modulus: no byte length is unconditionally safe
        assert_eq!(block_byte_limit(&BigUint::from(187u8)), 0);
        // 17-bit modulus: a single byte always fits
        assert_eq!(block_byte_limit(&(BigUint::one() << 16u32)), 1);
    }

    #[test]
    fn test_split_block_count_and_reassembly() {
        let data: Vec<u8> = (0u8..10).collect();
        let blocks = split(&data, 3);

        // ceil(10 / 3) = 4 blocks, none longer than the limit
        assert_eq!(blocks.len(), 4);
        assert!(blocks.iter().all(|b| b.len() <= 3));
        assert_eq!(blocks.last().unwrap().len(), 1);

        let rejoined: Vec<u8> = blocks.concat();
        assert_eq!(rejoined, data);
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split(&[], 16).is_empty());
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let block = b"hello world";
        let value = encode_block(block);
        assert_eq!(decode_block(&value), block);
    }

    #[test]
    fn test_decode_drops_leading_zero_bytes() {
        let value = encode_block(&[0x00, 0x07]);
        assert_eq!(decode_block(&value), vec![0x07]);
    }

    #[test]
    fn test_decode_zero_value() {
        assert!(decode_block(&BigUint::zero()).is_empty());
    }

    #[test]
    fn test_every_limited_block_encodes_below_modulus() {
        let n = (BigUint::one() << 64u32) + 1u8;
        let limit = block_byte_limit(&n);
        assert_eq!(limit, 7);

        // Worst case: all bytes at maximum
        let block = vec![0xFFu8; limit];
        assert!(encode_block(&block) < n);
    }
}
