// RSA Key Generation
// Derives a public/private key pair from two freshly generated primes

use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::thread_rng;

use super::bigint::{gcd, mod_inverse};
use super::error::{RsaError, RsaResult};
use super::prime::generate_prime;

/// Conventional default public exponent
pub const PUBLIC_EXPONENT: u64 = 65537;

/// Smallest accepted modulus size; below this the per-prime bit length
/// degenerates
const MIN_KEY_BITS: u32 = 8;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub e: BigUint,
    pub n: BigUint,
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    pub d: BigUint,
    pub n: BigUint,
}

/// RSA Key Pair (both public and private keys)
#[derive(Debug, Clone)]
pub struct KeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
}

impl PublicKey {
    /// Bit length of the modulus
    pub fn modulus_bits(&self) -> u64 {
        self.n.bits()
    }

    /// Encrypt a text message under this key
    pub fn encrypt(&self, message: &str) -> RsaResult<Vec<BigUint>> {
        super::encrypt::encrypt(message, self)
    }
}

impl PrivateKey {
    /// Bit length of the modulus
    pub fn modulus_bits(&self) -> u64 {
        self.n.bits()
    }

    /// Decrypt ciphertext blocks with this key, optionally checking the
    /// pairing against a public key first
    pub fn decrypt(&self, cipher: &[BigUint], public: Option<&PublicKey>) -> RsaResult<String> {
        super::decrypt::decrypt(cipher, self, public)
    }
}

/// Generate an RSA key pair with a modulus of roughly `bits` bits
///
/// Both primes get floor(bits / 2) bits. The public exponent starts at
/// 65537 and falls back to random draws from [2, phi - 1] in the rare
/// case it shares a factor with phi.
pub fn generate_keypair(bits: u32) -> RsaResult<KeyPair> {
    if bits < MIN_KEY_BITS {
        return Err(RsaError::Internal(format!(
            "key size must be at least {} bits",
            MIN_KEY_BITS
        )));
    }

    let half_bits = bits / 2;

    let p = generate_prime(half_bits)?;
    let mut q = generate_prime(half_bits)?;
    while q == p {
        q = generate_prime(half_bits)?;
    }

    let n = &p * &q;
    let phi = (&p - 1u8) * (&q - 1u8);

    let mut e = BigUint::from(PUBLIC_EXPONENT);
    let two = BigUint::from(2u8);
    let mut rng = thread_rng();
    while !gcd(&e, &phi).is_one() {
        e = rng.gen_biguint_range(&two, &phi);
    }

    let d = mod_inverse(&e, &phi).ok_or_else(|| {
        RsaError::Internal("public exponent has no inverse modulo phi".to_string())
    })?;

    Ok(KeyPair {
        public: PublicKey { e, n: n.clone() },
        private: PrivateKey { d, n },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::mod_pow;

    #[test]
    fn test_key_generation() {
        let pair = generate_keypair(128).unwrap();

        // Two exact 64-bit primes put the modulus at 127 or 128 bits
        let bits = pair.public.modulus_bits();
        assert!(bits == 127 || bits == 128, "unexpected modulus size {}", bits);
        assert_eq!(pair.public.n, pair.private.n);
    }

    #[test]
    fn test_transform_roundtrip() {
        // m^(e*d) mod n must give m back for m < n
        let pair = generate_keypair(64).unwrap();
        let m = BigUint::from(123_456_789u64) % &pair.public.n;

        let c = mod_pow(&m, &pair.public.e, &pair.public.n);
        let recovered = mod_pow(&c, &pair.private.d, &pair.private.n);
        assert_eq!(recovered, m);
    }

    #[test]
    fn test_odd_bit_count_floors() {
        // 65 bits halves to two 32-bit primes
        let pair = generate_keypair(65).unwrap();
        let bits = pair.public.modulus_bits();
        assert!(bits == 63 || bits == 64, "unexpected modulus size {}", bits);
    }

    #[test]
    fn test_rejects_tiny_key_size() {
        assert!(generate_keypair(4).is_err());
    }
}
