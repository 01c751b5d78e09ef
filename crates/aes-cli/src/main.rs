//! Command-line interface for the AES chaining library.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use aes_core::{format_state, KeySize};
use aes_modes::{strip_zero_padding, Chaining, Cipher};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// AES-128/192/256 in ECB or CBC mode with hex ciphertext.
#[derive(Parser)]
#[command(name = "aesc", version, author, about = "AES ECB/CBC encryption with hex output")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a message or file, printing hex ciphertext.
    Enc {
        #[command(flatten)]
        key: KeyArgs,
        #[command(flatten)]
        opts: CipherOpts,
        /// Plaintext given inline.
        #[arg(long, value_name = "TEXT", conflicts_with = "input")]
        message: Option<String>,
        /// Plaintext file.
        #[arg(long, value_name = "FILE", required_unless_present = "message")]
        input: Option<PathBuf>,
        /// Write hex ciphertext here instead of stdout.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Decrypt hex ciphertext given inline or in a file.
    Dec {
        #[command(flatten)]
        key: KeyArgs,
        #[command(flatten)]
        opts: CipherOpts,
        /// Hex ciphertext given inline.
        #[arg(long, value_name = "HEX", conflicts_with = "input")]
        ciphertext: Option<String>,
        /// File containing hex ciphertext.
        #[arg(long, value_name = "FILE", required_unless_present = "ciphertext")]
        input: Option<PathBuf>,
        /// Write recovered bytes here instead of printing them as text.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Keep trailing zero bytes instead of stripping them as padding.
        #[arg(long, default_value_t = false)]
        keep_padding: bool,
    },
    /// Round-trip random messages for every key size and mode.
    Check {
        /// Number of random messages per key size and mode.
        #[arg(long, default_value_t = 16)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encrypt and decrypt "Two One Nine Two" under "Thats my Kung Fu".
    Demo {
        /// Print every intermediate state.
        #[arg(long, default_value_t = false)]
        trace: bool,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct KeyArgs {
    /// Key as text; its UTF-8 bytes must number 16, 24 or 32.
    #[arg(long, value_name = "TEXT")]
    key: Option<String>,
    /// Key as 32, 48 or 64 hex characters.
    #[arg(long, value_name = "HEX")]
    key_hex: Option<String>,
}

#[derive(Args)]
struct CipherOpts {
    /// Block chaining mode.
    #[arg(long, value_enum, default_value_t = Mode::Cbc)]
    mode: Mode,
    /// Print the state after every transform.
    #[arg(long, default_value_t = false)]
    trace: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Ecb,
    Cbc,
}

impl From<Mode> for Chaining {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Ecb => Chaining::Ecb,
            Mode::Cbc => Chaining::Cbc,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc {
            key,
            opts,
            message,
            input,
            output,
        } => cmd_enc(&key, &opts, message, input.as_deref(), output.as_deref()),
        Commands::Dec {
            key,
            opts,
            ciphertext,
            input,
            output,
            keep_padding,
        } => cmd_dec(
            &key,
            &opts,
            ciphertext,
            input.as_deref(),
            output.as_deref(),
            keep_padding,
        ),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
        Commands::Demo { trace } => cmd_demo(trace),
    }
}

fn cmd_enc(
    key: &KeyArgs,
    opts: &CipherOpts,
    message: Option<String>,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let cipher = build_cipher(key, opts.trace)?;
    let plaintext = match (message, input) {
        (Some(text), _) => text.into_bytes(),
        (None, Some(path)) => fs::read(path).with_context(|| format!("read {}", path.display()))?,
        (None, None) => bail!("either --message or --input is required"),
    };
    let ciphertext = cipher.encrypt(&plaintext, opts.mode.into());
    match output {
        Some(path) => {
            fs::write(path, &ciphertext).with_context(|| format!("write {}", path.display()))?
        }
        None => println!("{ciphertext}"),
    }
    Ok(())
}

fn cmd_dec(
    key: &KeyArgs,
    opts: &CipherOpts,
    ciphertext: Option<String>,
    input: Option<&Path>,
    output: Option<&Path>,
    keep_padding: bool,
) -> Result<()> {
    let cipher = build_cipher(key, opts.trace)?;
    let hex_text = match (ciphertext, input) {
        (Some(text), _) => text,
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?,
        (None, None) => bail!("either --ciphertext or --input is required"),
    };
    let recovered = cipher
        .decrypt(hex_text.trim(), opts.mode.into())
        .context("decrypt ciphertext")?;
    let plaintext = if keep_padding {
        &recovered[..]
    } else {
        strip_zero_padding(&recovered)
    };
    match output {
        Some(path) => {
            fs::write(path, plaintext).with_context(|| format!("write {}", path.display()))?
        }
        None => println!("{}", String::from_utf8_lossy(plaintext)),
    }
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    for size in [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256] {
        let mut key = vec![0u8; size.byte_len()];
        rng.fill_bytes(&mut key);
        let cipher = Cipher::new(&key, false)?;

        for mode in [Chaining::Ecb, Chaining::Cbc] {
            for _ in 0..samples {
                let len = 1 + (rng.next_u32() % 96) as usize;
                let mut message = vec![0u8; len];
                rng.fill_bytes(&mut message);
                let ciphertext = cipher.encrypt(&message, mode);
                let recovered = cipher.decrypt(&ciphertext, mode)?;
                if recovered[..len] != message[..] || recovered[len..].iter().any(|&b| b != 0) {
                    bail!("round trip failed for {size:?} in {mode:?} mode");
                }
            }
        }
        println!("{size:?}: ok ({} rounds)", size.rounds());
    }
    Ok(())
}

fn cmd_demo(trace: bool) -> Result<()> {
    let key = "Thats my Kung Fu";
    let plaintext = "Two One Nine Two";
    let cipher = Cipher::new(key.as_bytes(), trace)?;
    println!("round key 10:\n{}", format_state(cipher.round_keys().get(10)));

    for (label, mode) in [("ECB", Chaining::Ecb), ("CBC", Chaining::Cbc)] {
        println!("=== {label} ===");
        let ciphertext = cipher.encrypt(plaintext.as_bytes(), mode);
        println!("Ciphertext: {ciphertext}");
        let recovered = cipher.decrypt(&ciphertext, mode)?;
        let recovered = String::from_utf8_lossy(strip_zero_padding(&recovered)).into_owned();
        println!("Recovered : {recovered}");
        if recovered != plaintext {
            bail!("demo roundtrip failed in {label} mode");
        }
    }
    Ok(())
}

fn build_cipher(args: &KeyArgs, trace: bool) -> Result<Cipher> {
    let key = parse_key(args)?;
    Cipher::new(&key, trace).context("construct cipher")
}

fn parse_key(args: &KeyArgs) -> Result<Vec<u8>> {
    match (&args.key, &args.key_hex) {
        (Some(text), None) => Ok(text.as_bytes().to_vec()),
        (None, Some(hex_str)) => hex::decode(hex_str.trim()).context("decode key hex"),
        _ => bail!("exactly one of --key or --key-hex is required"),
    }
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => ChaCha20Rng::seed_from_u64(value),
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
