//! Run configuration.
//!
//! Values come from an optional TOML file, then CLI flags and `HDADDR_*`
//! environment variables override them. Nothing is ever written back.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::derive::ChildIndex;
use crate::error::{Result, WalletError};
use crate::mnemonic::EntropyBits;
use crate::ops::PipelineOptions;
use crate::wordlist::Wordlist;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Entropy size in bits (128, 160, 192, 224 or 256)
    pub entropy_bits: usize,
    /// BIP-39 passphrase mixed into the seed salt
    pub passphrase: String,
    /// Child index for the single derivation step (0-255)
    pub child_index: u32,
    /// Word list file; the embedded English list when unset
    pub wordlist: Option<PathBuf>,
    /// Show secret intermediate values in log output
    pub reveal_secrets: bool,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entropy_bits: DEFAULT_ENTROPY_BITS,
            passphrase: String::new(),
            child_index: 0,
            wordlist: None,
            reveal_secrets: false,
            output: OutputFormat::Text,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("entropy_bits", &self.entropy_bits)
            .field("passphrase", &if self.passphrase.is_empty() { "" } else { "<redacted>" })
            .field("child_index", &self.child_index)
            .field("wordlist", &self.wordlist)
            .field("reveal_secrets", &self.reveal_secrets)
            .field("output", &self.output)
            .finish()
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| WalletError::Config(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| WalletError::Config(e.to_string()))
    }

    /// Checks every numeric setting without touching the random source or the filesystem.
    pub fn validate(&self) -> Result<()> {
        EntropyBits::new(self.entropy_bits)?;
        ChildIndex::new(self.child_index)?;
        Ok(())
    }

    /// Validates and resolves into pipeline inputs, loading the word list if one is configured.
    pub fn to_pipeline_options(&self) -> Result<PipelineOptions> {
        let entropy_bits = EntropyBits::new(self.entropy_bits)?;
        let child_index = ChildIndex::new(self.child_index)?;
        let wordlist = match &self.wordlist {
            Some(path) => Wordlist::load(path)?,
            None => Wordlist::english(),
        };
        Ok(PipelineOptions::new(entropy_bits, &self.passphrase, child_index).with_wordlist(wordlist))
    }
}
