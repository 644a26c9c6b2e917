// rsa_lab - textbook RSA for learning, not for protecting anything
// The rsa module is the mathematical core; ui wraps it in a console menu

pub mod rsa;
pub mod ui;

pub use rsa::{decrypt, encrypt, generate_keypair, is_probable_prime};
