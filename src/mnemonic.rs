//! Entropy generation and mnemonic encoding.
//!
//! Entropy of `n` bits is hashed with SHA-256 and the first `n / 32` bits of
//! the digest are appended as a checksum. The combined bit string is split
//! into 11-bit groups, most significant bit first, and each group indexes the
//! word list. For every allowed `n` the combined length is a multiple of 11,
//! so no group is ever padded.

use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use crate::constants::*;
use crate::error::{Result, WalletError};
use crate::types::{Entropy, Mnemonic};
use crate::wordlist::Wordlist;

/// A validated entropy size: one of 128, 160, 192, 224 or 256 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntropyBits(usize);

impl EntropyBits {
    pub fn new(bits: usize) -> Result<Self> {
        if !ENTROPY_BITS_ALLOWED.contains(&bits) {
            return Err(WalletError::invalid_parameter(format!(
                "entropy bits must be one of {:?}, got {}",
                ENTROPY_BITS_ALLOWED, bits
            )));
        }
        Ok(Self(bits))
    }

    /// Maps a mnemonic length (12, 15, 18, 21 or 24) to its entropy size.
    pub fn from_word_count(words: usize) -> Result<Self> {
        ENTROPY_BITS_ALLOWED
            .iter()
            .map(|&bits| Self(bits))
            .find(|e| e.word_count() == words)
            .ok_or_else(|| WalletError::invalid_parameter(format!("word count must be 12, 15, 18, 21 or 24, got {}", words)))
    }

    pub fn bits(self) -> usize {
        self.0
    }

    pub fn bytes(self) -> usize {
        self.0 / 8
    }

    pub fn checksum_bits(self) -> usize {
        self.0 / 32
    }

    pub fn word_count(self) -> usize {
        (self.0 + self.checksum_bits()) / BITS_PER_WORD
    }
}

impl Default for EntropyBits {
    fn default() -> Self {
        Self(DEFAULT_ENTROPY_BITS)
    }
}

/// Draws fresh entropy from a cryptographically secure generator.
///
/// A failed draw is reported as [`WalletError::RandomSource`]; there is no fallback source.
pub fn generate_entropy<R: RngCore + CryptoRng>(bits: EntropyBits, rng: &mut R) -> Result<Entropy> {
    let mut bytes = vec![0u8; bits.bytes()];
    if let Err(e) = rng.try_fill_bytes(&mut bytes) {
        bytes.zeroize();
        return Err(e.into());
    }
    Ok(Entropy::from_bytes(bytes))
}

/// The leading `entropy_bits / 32` bits of SHA-256(entropy), right-aligned in a byte.
pub fn checksum_bits(entropy: &[u8]) -> Result<u8> {
    let bits = EntropyBits::new(entropy.len() * 8)?;
    let hash = Sha256::digest(entropy);
    Ok(hash[0] >> (8 - bits.checksum_bits()))
}

/// Splits a bit stream into 11-bit word indices, most significant bit first.
struct Chunker {
    acc: u32,
    acc_bits: usize,
    indices: Zeroizing<Vec<usize>>,
}

impl Chunker {
    fn new(capacity: usize) -> Self {
        Self { acc: 0, acc_bits: 0, indices: Zeroizing::new(Vec::with_capacity(capacity)) }
    }

    fn push(&mut self, value: u32, width: usize) {
        self.acc = (self.acc << width) | value;
        self.acc_bits += width;
        if self.acc_bits >= BITS_PER_WORD {
            self.acc_bits -= BITS_PER_WORD;
            self.indices.push(((self.acc >> self.acc_bits) & 0x7ff) as usize);
            self.acc &= (1u32 << self.acc_bits) - 1;
        }
    }

    fn finish(mut self) -> Result<Zeroizing<Vec<usize>>> {
        self.acc.zeroize();
        if self.acc_bits != 0 {
            return Err(WalletError::invalid_parameter("entropy and checksum do not split into whole 11-bit groups"));
        }
        Ok(self.indices)
    }
}

/// Encodes caller-supplied entropy as a mnemonic.
pub fn entropy_to_mnemonic(entropy: &[u8], wordlist: &Wordlist) -> Result<Mnemonic> {
    let bits = EntropyBits::new(entropy.len() * 8)?;
    let checksum = checksum_bits(entropy)?;

    let mut chunker = Chunker::new(bits.word_count());
    for &byte in entropy {
        chunker.push(byte as u32, 8);
    }
    chunker.push(checksum as u32, bits.checksum_bits());
    let indices = chunker.finish()?;

    let mut phrase = Zeroizing::new(String::new());
    for (i, &index) in indices.iter().enumerate() {
        let word = wordlist
            .word(index)
            .ok_or_else(|| WalletError::Wordlist(format!("no word at index {}", index)))?;
        if i > 0 {
            phrase.push(' ');
        }
        phrase.push_str(word);
    }
    Ok(Mnemonic::from_phrase(std::mem::take(&mut *phrase)))
}

/// Generates a new mnemonic from freshly drawn entropy. The entropy is wiped
/// before this returns.
pub fn generate_mnemonic<R: RngCore + CryptoRng>(bits: EntropyBits, wordlist: &Wordlist, rng: &mut R) -> Result<Mnemonic> {
    let entropy = generate_entropy(bits, rng)?;
    let mnemonic = entropy_to_mnemonic(entropy.as_bytes(), wordlist)?;
    drop(entropy);
    debug!(bits = bits.bits(), words = bits.word_count(), "generated mnemonic");
    Ok(mnemonic)
}
