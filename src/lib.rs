//! # hdaddr
//!
//! Offline mnemonic generation and deterministic key and address derivation.
//!
//! One run draws fresh entropy, encodes it as a mnemonic phrase, stretches the
//! phrase into a seed, derives a master key and a single child key, and turns
//! the child key into an account address:
//!
//! ```text
//! entropy --SHA-256 checksum--> mnemonic --PBKDF2-HMAC-SHA512--> seed
//!   --HMAC-SHA512("Bitcoin seed")--> master key
//!   --HMAC-SHA512(chain code, key || index)--> child key
//!   --secp256k1, Keccak-256--> address
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Using cargo
//! cargo run -- <command> [options]
//!
//! # Using the compiled binary
//! ./target/release/hdaddr <command> [options]
//! ```
//!
//! ### Generate
//!
//! Generate a 12-word mnemonic and the address of child 0:
//!
//! ```bash
//! cargo run -- generate
//! ```
//!
//! Generate a 24-word mnemonic with a passphrase, child index 5, as JSON:
//!
//! ```bash
//! cargo run -- generate -w 24 -p "passphrase" -i 5 -o json
//! ```
//!
//! **Flags:**
//! - `-c, --config <path>` (Optional): TOML config file
//! - `-w, --words <count>` (Optional): 12, 15, 18, 21 or 24 (default = `12`)
//! - `-b, --entropy-bits <bits>` (Optional): 128, 160, 192, 224 or 256
//! - `-p, --passphrase <text>` (Optional): Seed passphrase (default = empty)
//! - `-i, --index <index>` (Optional): Child index, 0-255 (default = `0`)
//! - `--wordlist <path>` (Optional): Word list file (default = embedded English list)
//! - `--reveal-secrets` (Optional): Log seed and keys in cleartext
//! - `-o, --output <format>` (Optional): `text` or `json`
//!
//! Every flag can also be set through `HDADDR_*` environment variables, for
//! example `HDADDR_PASSPHRASE`.
//!
//! ### Address of a Private Key
//!
//! ```bash
//! cargo run -- address -k 0000000000000000000000000000000000000000000000000000000000000001
//! ```
//!
//! ### Check a Word List
//!
//! ```bash
//! cargo run -- wordlist ./wordlist.json
//! ```
//!
//! ## Logging
//!
//! Progress is logged to stderr through `tracing`. Use `--log-level debug` or
//! `RUST_LOG=hdaddr=debug` for per-stage events and `--log-json` for JSON
//! lines. Seeds and keys are logged as `<redacted>` unless `--reveal-secrets`
//! is given.
//!
//! ## Child Derivation
//!
//! The child step hashes `parent_key || index` with a single index byte. It
//! is not BIP-32: there are no hardened indices, only 256 children exist, and
//! the keys will not match a standard `m/...` path. If a derived key is not a
//! valid secp256k1 scalar the next index is used.

pub mod address;
pub mod commands;
pub mod config;
pub mod constants;
pub mod derive;
pub mod error;
pub mod mnemonic;
pub mod observer;
pub mod ops;
pub mod seed;
pub mod telemetry;
pub mod types;
pub mod utils;
pub mod wordlist;

pub use address::{hex_private_key_to_address, is_valid_private_key, private_key_to_address, public_key_uncompressed, Address};
pub use config::{Config, OutputFormat};
pub use derive::{derive_child, derive_child_key, derive_master_key, derive_master_key_with, ChildIndex, MasterKeyConfig};
pub use error::{Result, WalletError};
pub use mnemonic::{checksum_bits, entropy_to_mnemonic, generate_entropy, generate_mnemonic, EntropyBits};
pub use observer::{NoopObserver, PipelineObserver, RecordingObserver, Stage, TracingObserver};
pub use ops::{derive_from_entropy, run_pipeline, PipelineOptions, WalletOutput};
pub use seed::mnemonic_to_seed;
pub use types::{Entropy, ExtendedKey, Mnemonic, Seed};
pub use utils::{display_address, display_wallet, display_wordlist};
pub use wordlist::Wordlist;
