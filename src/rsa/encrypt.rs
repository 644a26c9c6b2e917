// RSA Encryption
// Applies the public-key transform to each message block

use num_bigint::BigUint;

use super::bigint::mod_pow;
use super::blocks::{block_byte_limit, encode_block, split};
use super::error::{RsaError, RsaResult};
use super::keygen::PublicKey;

/// Encrypt a text message under a public key
///
/// The message is encoded as UTF-8, split into blocks sized for the
/// modulus, and each block becomes one ciphertext integer, in order.
pub fn encrypt(message: &str, public: &PublicKey) -> RsaResult<Vec<BigUint>> {
    encrypt_bytes(message.as_bytes(), public)
}

/// Encrypt raw bytes under a public key
///
/// Fails with `BlockTooLarge` on the first block whose integer encoding
/// reaches the modulus; no partial ciphertext is returned.
pub fn encrypt_bytes(plaintext: &[u8], public: &PublicKey) -> RsaResult<Vec<BigUint>> {
    // Tiny moduli leave no unconditionally safe block size; fall back to
    // single bytes and let the per-block check decide
    let limit = block_byte_limit(&public.n).max(1);

    let mut cipher = Vec::new();
    for block in split(plaintext, limit) {
        let m = encode_block(block);
        if m >= public.n {
            return Err(RsaError::BlockTooLarge);
        }
        cipher.push(mod_pow(&m, &public.e, &public.n));
    }

    Ok(cipher)
}
