// RSA Error Taxonomy
// Every fallible operation in the rsa module reports one of these kinds

use thiserror::Error;

/// Result type for RSA operations
pub type RsaResult<T> = Result<T, RsaError>;

#[derive(Debug, Error)]
pub enum RsaError {
    /// A plaintext block encoded to an integer at or above the modulus.
    /// Block sizing keeps encodings below the modulus; every block is
    /// still checked before exponentiation.
    #[error("message block too large for the key")]
    BlockTooLarge,

    /// The supplied public and private keys do not share a modulus.
    #[error("the keys do not match: the modulus 'n' differs")]
    KeyMismatch,

    /// Decryption produced empty or all-whitespace text. A heuristic
    /// signal that the keys were not a valid pair, not a guarantee.
    #[error("empty result - the keys are probably wrong")]
    EmptyResult,

    /// Something below the block loop went wrong; the cause is kept
    /// for diagnostics.
    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    /// Failures that cannot occur under sane inputs, such as the prime
    /// generator exhausting its candidate cap.
    #[error("internal error: {0}")]
    Internal(String),
}
