// Interactive Console Menu
// Session loop: prompts for input, calls into the rsa core, renders results

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use num_bigint::BigUint;

use crate::rsa::{self, is_probable_prime, KeyPair, PrivateKey, PublicKey, DEFAULT_ROUNDS};

/// Session state threaded through the menu handlers; holds at most one
/// generated key pair
pub struct Session {
    keypair: Option<KeyPair>,
}

impl Session {
    fn new() -> Self {
        Self { keypair: None }
    }
}

/// Run the interactive menu until the user quits or stdin closes
pub fn run() -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut session = Session::new();

    loop {
        print_menu();
        let choice = prompt(&mut input, "Select an option (1-7): ")?;

        match choice.as_str() {
            "1" => generate_keys(&mut input, &mut session)?,
            "2" => encrypt_message(&mut input, &session)?,
            "3" => decrypt_message(&mut input, &session)?,
            "4" => decrypt_with_other_keys(&mut input, &session)?,
            "5" => show_keys(&session),
            "6" => test_primality(&mut input)?,
            "7" => {
                println!("\nGoodbye!");
                return Ok(());
            }
            _ => println!("[!] Invalid option"),
        }

        pause(&mut input)?;
    }
}

fn print_menu() {
    let rule = "=".repeat(50);
    println!("\n{}", rule);
    println!(" INTERACTIVE RSA - KEY VALIDATION");
    println!("{}", rule);
    println!("1. Generate new keys");
    println!("2. Encrypt message (current keys)");
    println!("3. Decrypt message (current keys)");
    println!("4. Try decryption with OTHER keys");
    println!("5. Show current keys");
    println!("6. Test primality");
    println!("7. Quit");
    println!("{}", rule);
}

fn generate_keys(input: &mut impl BufRead, session: &mut Session) -> Result<()> {
    let raw = prompt(input, "Key size (bits, 1024-2048 recommended): ")?;
    let bits = match raw.parse::<u32>() {
        Ok(bits) => bits,
        Err(_) => {
            println!("[!] Key size must be a whole number");
            return Ok(());
        }
    };

    match rsa::generate_keypair(bits) {
        Ok(pair) => {
            println!("\n[ok] Keys generated!");
            println!("Public key (e, n):\ne = {}\nn = {}", pair.public.e, pair.public.n);
            println!(
                "\nPrivate key (d, n):\nd = {}\nn = {}",
                pair.private.d, pair.private.n
            );
            session.keypair = Some(pair);
        }
        Err(e) => println!("[!] {}", e),
    }
    Ok(())
}

fn encrypt_message(input: &mut impl BufRead, session: &Session) -> Result<()> {
    let pair = match &session.keypair {
        Some(pair) => pair,
        None => {
            println!("[!] Generate keys first (option 1)");
            return Ok(());
        }
    };

    let message = prompt(input, "Message to encrypt: ")?;
    match rsa::encrypt(&message, &pair.public) {
        Ok(blocks) => {
            println!("\n[ok] Encrypted message (blocks):");
            println!("{}", join_decimal(&blocks));
            println!("Hexadecimal: {}", join_hex(&blocks));
        }
        Err(e) => println!("[!] {}", e),
    }
    Ok(())
}

fn decrypt_message(input: &mut impl BufRead, session: &Session) -> Result<()> {
    let pair = match &session.keypair {
        Some(pair) => pair,
        None => {
            println!("[!] Generate keys first (option 1)");
            return Ok(());
        }
    };

    let raw = prompt(input, "Enter encrypted blocks (comma separated): ")?;
    let blocks = match parse_blocks(&raw) {
        Some(blocks) => blocks,
        None => {
            println!("[!] Blocks must be comma separated decimal integers");
            return Ok(());
        }
    };

    match rsa::decrypt(&blocks, &pair.private, Some(&pair.public)) {
        Ok(text) => {
            println!("\n[ok] Decrypted message:");
            println!("{}", text);
        }
        Err(e) => {
            println!("\n[x] Decryption failure: {}", e);
            println!("Possible causes:");
            println!("- The keys are not a matching pair");
            println!("- The message was encrypted with different keys");
            println!("- The input format is wrong");
        }
    }
    Ok(())
}

fn decrypt_with_other_keys(input: &mut impl BufRead, session: &Session) -> Result<()> {
    println!("\n=== TEST WITH DIFFERENT KEYS ===");

    let e = match prompt_biguint(input, "Enter e (public key): ")? {
        Some(v) => v,
        None => return Ok(()),
    };
    let n_public = match prompt_biguint(input, "Enter n (public key): ")? {
        Some(v) => v,
        None => return Ok(()),
    };
    let d = match prompt_biguint(input, "Enter d (private key): ")? {
        Some(v) => v,
        None => return Ok(()),
    };
    let n_private = match prompt_biguint(input, "Enter n (private key): ")? {
        Some(v) => v,
        None => return Ok(()),
    };

    let public = PublicKey { e, n: n_public };
    let private = PrivateKey { d, n: n_private };

    let raw = prompt(input, "Encrypted blocks (comma separated): ")?;
    let blocks = match parse_blocks(&raw) {
        Some(blocks) => blocks,
        None => {
            println!("[!] Blocks must be comma separated decimal integers");
            return Ok(());
        }
    };

    println!("\n[?] Attempting decryption...");
    match rsa::decrypt(&blocks, &private, Some(&public)) {
        Ok(text) => {
            println!("\n[ok] Decryption succeeded with the supplied keys:");
            println!("{}", text);

            match &session.keypair {
                Some(pair) => {
                    if public.n != pair.public.n || private.n != pair.private.n {
                        println!("\n[!] Warning: these keys differ from the current session keys");
                        println!("This shows how decryption breaks down with the wrong keys");
                    }
                }
                None => {
                    println!("\n[!] Note: no keys were generated this session, nothing to compare");
                }
            }
        }
        Err(e) => {
            println!("\n[x] Decryption failure: {}", e);
            println!("This demonstrates that the keys must form a valid pair");
        }
    }
    Ok(())
}

fn show_keys(session: &Session) {
    match &session.keypair {
        Some(pair) => {
            println!("\nCurrent public key (e, n):");
            println!("e = {}", pair.public.e);
            println!("n = {}", pair.public.n);
            println!("n (hex): {}", hex::encode(pair.public.n.to_bytes_be()));
            println!("\nCurrent private key (d, n):");
            println!("d = {}", pair.private.d);
            println!("n = {}", pair.private.n);
        }
        None => println!("[!] No keys generated"),
    }
}

fn test_primality(input: &mut impl BufRead) -> Result<()> {
    let n = match prompt_biguint(input, "Number to test for primality: ")? {
        Some(v) => v,
        None => return Ok(()),
    };

    if is_probable_prime(&n, DEFAULT_ROUNDS) {
        println!("\n[ok] {} IS prime (probabilistically)", n);
    } else {
        println!("\n[x] {} is NOT prime", n);
    }
    Ok(())
}

fn prompt(input: &mut impl BufRead, label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if read == 0 {
        bail!("input stream closed");
    }
    Ok(line.trim().to_string())
}

fn prompt_biguint(input: &mut impl BufRead, label: &str) -> Result<Option<BigUint>> {
    let raw = prompt(input, label)?;
    match raw.parse::<BigUint>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            println!("[!] Expected a non-negative decimal integer");
            Ok(None)
        }
    }
}

fn parse_blocks(raw: &str) -> Option<Vec<BigUint>> {
    raw.split(',')
        .map(|block| block.trim().parse::<BigUint>().ok())
        .collect()
}

fn join_decimal(blocks: &[BigUint]) -> String {
    blocks
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_hex(blocks: &[BigUint]) -> String {
    blocks
        .iter()
        .map(|b| hex::encode(b.to_bytes_be()))
        .collect::<Vec<_>>()
        .join("|")
}

fn pause(input: &mut impl BufRead) -> Result<()> {
    print!("\nPress Enter to continue...");
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}
