// RSA Decryption
// Applies the private-key transform and reassembles the message text

use num_bigint::BigUint;

use super::bigint::mod_pow;
use super::blocks::decode_block;
use super::error::{RsaError, RsaResult};
use super::keygen::{PrivateKey, PublicKey};

/// Decrypt ciphertext blocks with a private key
///
/// When the paired public key is supplied, the moduli are compared up
/// front and a difference fails with `KeyMismatch` before any modular
/// exponentiation. Recovered bytes are concatenated in block order and
/// decoded as UTF-8 with lossy substitution, so garbled plaintext still
/// renders instead of failing.
pub fn decrypt(
    cipher: &[BigUint],
    private: &PrivateKey,
    public: Option<&PublicKey>,
) -> RsaResult<String> {
    if let Some(public) = public {
        if public.n != private.n {
            return Err(RsaError::KeyMismatch);
        }
    }

    let mut plaintext = Vec::new();
    for block in cipher {
        if block >= &private.n {
            return Err(RsaError::DecryptionFailed(
                "ciphertext block exceeds the modulus".to_string(),
            ));
        }
        let m = mod_pow(block, &private.d, &private.n);
        plaintext.extend_from_slice(&decode_block(&m));
    }

    let text = String::from_utf8_lossy(&plaintext).into_owned();
    if text.trim().is_empty() {
        return Err(RsaError::EmptyResult);
    }

    Ok(text)
}
