use clap::{Arg, Command, ArgAction};
use rand::Rng;
use sha2::{Sha256, Digest};

use std::process;

use crypto::{
    validate,
    CipherError,
    XteaCipher,
    BLOCK_SIZE,
    DEFAULT_ROUNDS,
    KEY_SIZE,
};

struct Args {
    rounds: u32,
    iterations: u32,
    blocks: usize,
    key: Option<[u8; KEY_SIZE]>,
    quiet: bool,
}

#[derive(Debug)]
enum HarnessError {
    Cipher(CipherError),
    ValidationFailed(u32),
}

impl From<CipherError> for HarnessError {
    fn from(e: CipherError) -> Self {
        HarnessError::Cipher(e)
    }
}

fn hash_key(key: &str) -> [u8; KEY_SIZE] {
    let mut hasher = Sha256::new();
    hasher.update(key);
    let result = hasher.finalize();
    let mut key_array = [0u8; KEY_SIZE];
    key_array.copy_from_slice(&result[..KEY_SIZE]);

    key_array
}

fn get_args() -> Args {
    let matches = Command::new("XTEA Harness")
        .about("Encrypts and decrypts random data with XTEA and checks the round trip")
        .arg(Arg::new("rounds")
            .short('r')
            .long("rounds")
            .value_parser(clap::value_parser!(u32))
            .default_value("32")
            .help("Number of XTEA rounds. Default: 32"))
        .arg(Arg::new("iterations")
            .short('i')
            .long("iterations")
            .value_parser(clap::value_parser!(u32))
            .default_value("3")
            .help("Number of test routines to run. Default: 3"))
        .arg(Arg::new("blocks")
            .short('b')
            .long("blocks")
            .value_parser(clap::value_parser!(usize))
            .default_value("4")
            .help("Number of 8-byte blocks of plaintext per routine. Default: 4"))
        .arg(Arg::new("key")
            .short('k')
            .long("key")
            .num_args(1)
            .help("Passphrase the key is derived from. A random key is used when omitted"))
        .arg(Arg::new("quiet")
            .short('q')
            .long("quiet")
            .action(ArgAction::SetTrue)
            .help("Do not print buffer contents"))
        .get_matches();

    let rounds = *matches.get_one::<u32>("rounds").unwrap_or(&DEFAULT_ROUNDS);
    let iterations = *matches.get_one::<u32>("iterations").unwrap_or(&3);
    let blocks = *matches.get_one::<usize>("blocks").unwrap_or(&4);
    let key = matches.get_one::<String>("key").map(|k| hash_key(k));
    let quiet = matches.get_flag("quiet");

    Args {
        rounds,
        iterations,
        blocks,
        key,
        quiet,
    }
}

fn print_bytes(data: &[u8]) {
    for (j, b) in data.iter().enumerate() {
        if j != 0 && j % 5 == 0 {
            println!();
        }
        print!("{}\t", b);
    }
    println!();
}

fn run_routine(args: &Args, n: u32) -> Result<(), HarnessError> {
    let mut rng = rand::thread_rng();

    let key = match args.key {
        Some(k) => k,
        None => rng.gen(),
    };
    let cipher = XteaCipher::new(&key, args.rounds)?;

    let mut plain = vec![0u8; args.blocks * BLOCK_SIZE];
    rng.fill(&mut plain[..]);
    let mut encrypted = vec![0u8; plain.len()];
    let mut decrypted = vec![0u8; plain.len()];

    println!();
    println!("Plaintext size in bytes: {}", plain.len());
    println!("Encrypted size in bytes: {}", encrypted.len());
    println!("Decrypted size in bytes: {}", decrypted.len());
    if !args.quiet {
        println!("Content of plaintext (decimal representation):");
        print_bytes(&plain);
    }

    print!("Encrypting data....");
    for i in 0..args.blocks {
        cipher.encrypt_block(&plain, i * BLOCK_SIZE, &mut encrypted, i * BLOCK_SIZE)?;
    }
    println!("Complete");

    print!("Decrypting data....");
    for i in 0..args.blocks {
        cipher.decrypt_block(&encrypted, i * BLOCK_SIZE, &mut decrypted, i * BLOCK_SIZE)?;
    }
    println!("Complete");

    if !args.quiet {
        println!("Content of ciphertext (decimal representation):");
        print_bytes(&encrypted);
        println!("Content of decrypted text (decimal representation):");
        print_bytes(&decrypted);
    }

    print!("Verifying....");
    if !validate(&plain, &decrypted) {
        println!("Failed");
        return Err(HarnessError::ValidationFailed(n));
    }
    println!("Passed");

    println!("Test routine {} of {} finished.", n, args.iterations);
    Ok(())
}

fn main() {
    let args = get_args();

    println!("XTEA validation harness, {} rounds", args.rounds);
    if args.rounds == 0 {
        println!("Warning: 0 rounds leaves data unencrypted");
    }

    for n in 1..=args.iterations {
        if let Err(e) = run_routine(&args, n) {
            match e {
                HarnessError::Cipher(e) => {
                    eprintln!("Cipher error: {}", e);
                },
                HarnessError::ValidationFailed(n) => {
                    eprintln!("Test routine {} failed: decrypted data does not match plaintext", n);
                },
            }
            process::exit(1);
        }
    }

    println!("Process done!");
}
