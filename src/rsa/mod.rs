// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod blocks;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod keygen;
pub mod prime;

pub use blocks::{block_byte_limit, decode_block, encode_block, split};
pub use decrypt::decrypt;
pub use encrypt::{encrypt, encrypt_bytes};
pub use error::{RsaError, RsaResult};
pub use keygen::{generate_keypair, KeyPair, PrivateKey, PublicKey};
pub use prime::{generate_prime, is_probable_prime, DEFAULT_ROUNDS};
