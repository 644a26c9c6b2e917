// Primality Testing and Prime Generation
// Miller-Rabin witness loop plus random search for exact bit-length primes

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand::thread_rng;

use super::bigint::mod_pow;
use super::error::{RsaError, RsaResult};

/// Default number of Miller-Rabin rounds; false-positive probability
/// is at most 4^(-rounds)
pub const DEFAULT_ROUNDS: u32 = 5;

/// Rounds used when searching for key-quality primes
const GENERATION_ROUNDS: u32 = 10;

/// Candidates examined before prime generation gives up. Expected draws
/// grow with ln(2^bits), so this is orders of magnitude above any
/// realistic search.
const MAX_CANDIDATES: u32 = 100_000;

/// Miller-Rabin primality test
/// Returns true if n is probably prime, false if it is composite
pub fn is_probable_prime(n: &BigUint, rounds: u32) -> bool {
    let three = BigUint::from(3u8);
    if *n <= BigUint::one() {
        return false;
    }
    if *n <= three {
        return true;
    }
    if n.is_even() {
        return false;
    }

    // Write n-1 as d * 2^s with d odd
    let n_minus_one = n - 1u8;
    let mut d = n_minus_one.clone();
    let mut s = 0u32;
    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    let two = BigUint::from(2u8);
    let mut rng = thread_rng();

    for _ in 0..rounds {
        // Uniform witness a in [2, n-2]
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = mod_pow(&a, &d, n);

        if x.is_one() || x == n_minus_one {
            continue;
        }

        let mut witnessed = false;
        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_one {
                witnessed = true;
                break;
            }
        }

        if !witnessed {
            // No squaring step reached n-1: definitively composite
            return false;
        }
    }

    true
}

/// Generate a random probable prime of exactly `bits` bits
/// The top and bottom bits are forced, guaranteeing bit length and oddness
pub fn generate_prime(bits: u32) -> RsaResult<BigUint> {
    if bits < 2 {
        return Err(RsaError::Internal(format!(
            "cannot generate a {}-bit prime",
            bits
        )));
    }

    let mask = (BigUint::one() << (bits - 1)) | BigUint::one();
    let mut rng = thread_rng();

    for _ in 0..MAX_CANDIDATES {
        let mut candidate = rng.gen_biguint(bits as u64);
        candidate |= &mask;

        if is_probable_prime(&candidate, GENERATION_ROUNDS) {
            return Ok(candidate);
        }
    }

    Err(RsaError::Internal(format!(
        "no {}-bit prime found after {} candidates",
        bits, MAX_CANDIDATES
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sieve(limit: usize) -> Vec<bool> {
        let mut is_prime = vec![true; limit];
        is_prime[0] = false;
        is_prime[1] = false;
        let mut i = 2;
        while i * i < limit {
            if is_prime[i] {
                let mut j = i * i;
                while j < limit {
                    is_prime[j] = false;
                    j += i;
                }
            }
            i += 1;
        }
        is_prime
    }

    #[test]
    fn agrees_with_sieve_below_ten_thousand() {
        let reference = sieve(10_000);
        for n in 0..10_000usize {
            assert_eq!(
                is_probable_prime(&BigUint::from(n), 10),
                reference[n],
                "disagreement at n = {}",
                n
            );
        }
    }

    #[test]
    fn rejects_zero_and_one() {
        assert!(!is_probable_prime(&BigUint::from(0u8), DEFAULT_ROUNDS));
        assert!(!is_probable_prime(&BigUint::from(1u8), DEFAULT_ROUNDS));
    }

    #[test]
    fn accepts_large_known_prime() {
        // 2^89 - 1 is a Mersenne prime
        let p = (BigUint::one() << 89u32) - 1u8;
        assert!(is_probable_prime(&p, DEFAULT_ROUNDS));
    }

    #[test]
    fn rejects_large_known_composite() {
        // 2^89 + 1 is divisible by 3
        let c = (BigUint::one() << 89u32) + 1u8;
        assert!(!is_probable_prime(&c, DEFAULT_ROUNDS));
    }

    #[test]
    fn generated_primes_have_exact_bit_length() {
        for _ in 0..4 {
            let p = generate_prime(24).unwrap();
            assert_eq!(p.bits(), 24);
            assert!(p.is_odd());
            assert!(is_probable_prime(&p, 10));
        }
    }

    #[test]
    fn rejects_degenerate_bit_length() {
        assert!(generate_prime(0).is_err());
        assert!(generate_prime(1).is_err());
    }
}
