//! The generate-and-derive pipeline.
//!
//! entropy -> mnemonic -> seed -> master key -> child key -> address.
//! Every stage runs to completion before the next starts, and nothing is
//! returned unless all of them succeed.

use rand::{CryptoRng, RngCore};
use tracing::{debug, info_span};
use zeroize::Zeroizing;

use crate::address::{private_key_to_address, Address};
use crate::derive::{derive_child, derive_master_key_with, ChildIndex, MasterKeyConfig};
use crate::error::Result;
use crate::mnemonic::{entropy_to_mnemonic, generate_mnemonic, EntropyBits};
use crate::observer::{PipelineObserver, Stage};
use crate::seed::mnemonic_to_seed;
use crate::types::Mnemonic;
use crate::wordlist::Wordlist;

/// Inputs to one pipeline run.
#[derive(Clone)]
pub struct PipelineOptions {
    pub entropy_bits: EntropyBits,
    pub passphrase: Zeroizing<String>,
    pub child_index: ChildIndex,
    pub wordlist: Wordlist,
    pub master_key: MasterKeyConfig,
}

impl PipelineOptions {
    pub fn new(entropy_bits: EntropyBits, passphrase: &str, child_index: ChildIndex) -> Self {
        Self {
            entropy_bits,
            passphrase: Zeroizing::new(passphrase.to_string()),
            child_index,
            wordlist: Wordlist::english(),
            master_key: MasterKeyConfig::default(),
        }
    }

    pub fn with_wordlist(mut self, wordlist: Wordlist) -> Self {
        self.wordlist = wordlist;
        self
    }

    pub fn with_master_key(mut self, master_key: MasterKeyConfig) -> Self {
        self.master_key = master_key;
        self
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self::new(EntropyBits::default(), "", ChildIndex::default())
    }
}

/// The two public results of a run, plus the child index actually used.
#[derive(Debug)]
pub struct WalletOutput {
    pub mnemonic: Mnemonic,
    pub address: Address,
    pub child_index: ChildIndex,
}

/// Runs the full pipeline from freshly drawn entropy.
pub fn run_pipeline<R, O>(options: &PipelineOptions, rng: &mut R, mut observer: O) -> Result<WalletOutput>
where
    R: RngCore + CryptoRng,
    O: PipelineObserver,
{
    let _span = info_span!("pipeline", bits = options.entropy_bits.bits()).entered();
    let mnemonic = generate_mnemonic(options.entropy_bits, &options.wordlist, rng)?;
    observer.on_stage(Stage::Mnemonic(&mnemonic));
    derive_wallet(mnemonic, options, &mut observer)
}

/// Runs the pipeline from caller-supplied entropy. `options.entropy_bits` is
/// ignored; the size is taken from `entropy`.
pub fn derive_from_entropy<O: PipelineObserver>(entropy: &[u8], options: &PipelineOptions, mut observer: O) -> Result<WalletOutput> {
    let _span = info_span!("pipeline", bits = entropy.len() * 8).entered();
    let mnemonic = entropy_to_mnemonic(entropy, &options.wordlist)?;
    observer.on_stage(Stage::Mnemonic(&mnemonic));
    derive_wallet(mnemonic, options, &mut observer)
}

fn derive_wallet<O: PipelineObserver>(mnemonic: Mnemonic, options: &PipelineOptions, observer: &mut O) -> Result<WalletOutput> {
    let seed = mnemonic_to_seed(mnemonic.phrase(), &options.passphrase)?;
    observer.on_stage(Stage::Seed(&seed));

    let master = derive_master_key_with(seed.as_bytes(), &options.master_key)?;
    drop(seed);
    observer.on_stage(Stage::MasterKey(&master));

    let (child_index, child) = derive_child(&master, options.child_index)?;
    drop(master);
    observer.on_stage(Stage::ChildKey { index: child_index, key: &child });

    let address = private_key_to_address(child.key())?;
    drop(child);
    observer.on_stage(Stage::Address(&address));

    debug!(requested = options.child_index.value(), used = child_index.value(), "pipeline complete");
    Ok(WalletOutput { mnemonic, address, child_index })
}
