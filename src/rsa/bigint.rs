// Modular Arithmetic Helpers
// Shared big-integer operations for key generation and the RSA transforms

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Modular exponentiation: base^exp mod modulus
/// Uses the square-and-multiply algorithm
pub fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_one() {
        return BigUint::zero();
    }

    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}

/// Extended Euclidean Algorithm over signed integers
/// Returns (g, x, y) such that a*x + b*y = g = gcd(a, b)
fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if a.is_zero() {
        (b.clone(), BigInt::zero(), BigInt::one())
    } else {
        let (g, x, y) = extended_gcd(&(b % a), a);
        (g, y - (b / a) * &x, x)
    }
}

/// Compute the modular inverse: a^(-1) mod modulus
/// Returns None when a and modulus are not coprime
pub fn mod_inverse(a: &BigUint, modulus: &BigUint) -> Option<BigUint> {
    let a = BigInt::from(a.clone());
    let m = BigInt::from(modulus.clone());

    let (g, x, _) = extended_gcd(&a, &m);
    if !g.is_one() {
        return None;
    }

    // The Bezout coefficient may be negative; normalize into [0, m)
    let inverse = ((x % &m) + &m) % &m;
    inverse.to_biguint()
}

/// Greatest common divisor
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    a.gcd(b)
}
