use std::fmt;

use zeroize::Zeroizing;

use crate::constants::*;
use crate::error::{Result, WalletError};

/// Raw random bytes a mnemonic is encoded from. Wiped on drop.
pub struct Entropy {
    bytes: Zeroizing<Vec<u8>>,
}

impl Entropy {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Zeroizing::new(bytes),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8
    }
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entropy(<{} bits redacted>)", self.bit_len())
    }
}

/// A space-separated mnemonic phrase.
pub struct Mnemonic {
    phrase: Zeroizing<String>,
}

impl Mnemonic {
    pub fn from_phrase(phrase: String) -> Self {
        Self {
            phrase: Zeroizing::new(phrase),
        }
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn word_count(&self) -> usize {
        self.phrase.split(' ').filter(|w| !w.is_empty()).count()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.phrase.split(' ')
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mnemonic(<{} words redacted>)", self.word_count())
    }
}

/// 64-byte seed stretched from a mnemonic.
pub struct Seed {
    seed: Zeroizing<[u8; SEED_SIZE]>,
}

impl Seed {
    pub fn new(seed: [u8; SEED_SIZE]) -> Self {
        Self {
            seed: Zeroizing::new(seed),
        }
    }

    /// Fails unless `bytes` is exactly 64 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let seed: [u8; SEED_SIZE] = bytes.try_into().map_err(|_| {
            WalletError::invalid_parameter(format!("seed must be {} bytes, got {}", SEED_SIZE, bytes.len()))
        })?;
        Ok(Self::new(seed))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.seed[..]
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(<redacted>)")
    }
}

/// A (private key, chain code) pair. Never mutated after construction.
#[derive(Clone)]
pub struct ExtendedKey {
    key: Zeroizing<[u8; KEY_SIZE]>,
    chain_code: Zeroizing<[u8; CHAIN_CODE_SIZE]>,
}

impl ExtendedKey {
    pub fn new(key: [u8; KEY_SIZE], chain_code: [u8; CHAIN_CODE_SIZE]) -> Self {
        Self {
            key: Zeroizing::new(key),
            chain_code: Zeroizing::new(chain_code),
        }
    }

    /// Splits a 64-byte HMAC-SHA512 output into its left (key) and right (chain code) halves.
    pub(crate) fn from_hmac_output(output: &[u8]) -> Self {
        let mut key = [0u8; KEY_SIZE];
        let mut chain_code = [0u8; CHAIN_CODE_SIZE];
        key.copy_from_slice(&output[..KEY_SIZE]);
        chain_code.copy_from_slice(&output[KEY_SIZE..KEY_SIZE + CHAIN_CODE_SIZE]);
        let extended = Self::new(key, chain_code);
        zeroize::Zeroize::zeroize(&mut key);
        zeroize::Zeroize::zeroize(&mut chain_code);
        extended
    }

    pub fn key(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }

    pub fn chain_code(&self) -> &[u8; CHAIN_CODE_SIZE] {
        &self.chain_code
    }

    pub fn key_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(&self.key[..]))
    }

    pub fn chain_code_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(&self.chain_code[..]))
    }
}

impl PartialEq for ExtendedKey {
    fn eq(&self, other: &Self) -> bool {
        self.key[..] == other.key[..] && self.chain_code[..] == other.chain_code[..]
    }
}

impl Eq for ExtendedKey {}

impl fmt::Debug for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedKey")
            .field("key", &"<redacted>")
            .field("chain_code", &"<redacted>")
            .finish()
    }
}
