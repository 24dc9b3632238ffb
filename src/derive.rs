//! Master and child key derivation.
//!
//! The master key is HMAC-SHA512 of the seed under a fixed key. Child keys use
//! a compact, non-standard scheme: HMAC-SHA512 keyed by the parent chain code
//! over `parent_key || index_byte`. There is no hardened bit, no 4-byte index
//! and no scalar addition, so indices are limited to 0-255 and the results do
//! not match BIP-32 paths.

use hmac::{Hmac, Mac};
use sha2::Sha512;
use tracing::{debug, warn};
use zeroize::Zeroize;

use crate::address::is_valid_private_key;
use crate::constants::*;
use crate::error::{Result, WalletError};
use crate::types::ExtendedKey;

type HmacSha512 = Hmac<Sha512>;

/// Key material for the master HMAC. Defaults to `"Bitcoin seed"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterKeyConfig {
    hmac_key: Vec<u8>,
}

impl MasterKeyConfig {
    pub fn new(hmac_key: impl Into<Vec<u8>>) -> Self {
        Self { hmac_key: hmac_key.into() }
    }

    pub fn hmac_key(&self) -> &[u8] {
        &self.hmac_key
    }
}

impl Default for MasterKeyConfig {
    fn default() -> Self {
        Self::new(MASTER_HMAC_KEY)
    }
}

/// A child index in the single-byte scheme.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChildIndex(u8);

impl ChildIndex {
    pub fn new(index: u32) -> Result<Self> {
        u8::try_from(index).map(Self).map_err(|_| {
            WalletError::invalid_parameter(format!("child index must be between 0 and {}, got {}", CHILD_INDEX_MAX, index))
        })
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl std::fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn hmac_sha512(key: &[u8], parts: &[&[u8]]) -> Result<ExtendedKey> {
    let mut mac = HmacSha512::new_from_slice(key).map_err(|e| WalletError::invalid_parameter(format!("HMAC key rejected: {}", e)))?;
    for part in parts {
        mac.update(part);
    }
    let mut output = mac.finalize().into_bytes();
    let extended = ExtendedKey::from_hmac_output(&output);
    output.as_mut_slice().zeroize();
    Ok(extended)
}

/// Derives the master key with the default `"Bitcoin seed"` HMAC key.
pub fn derive_master_key(seed: &[u8]) -> Result<ExtendedKey> {
    derive_master_key_with(seed, &MasterKeyConfig::default())
}

pub fn derive_master_key_with(seed: &[u8], config: &MasterKeyConfig) -> Result<ExtendedKey> {
    if seed.len() != SEED_SIZE {
        return Err(WalletError::invalid_parameter(format!("seed must be {} bytes, got {}", SEED_SIZE, seed.len())));
    }
    let master = hmac_sha512(config.hmac_key(), &[seed])?;
    debug!("derived master key");
    Ok(master)
}

/// Derives the child key at `index`, returning the index actually used.
///
/// If the derived key is not a valid secp256k1 scalar the next index is tried.
/// Running past index 255 is an error.
pub fn derive_child(parent: &ExtendedKey, index: ChildIndex) -> Result<(ChildIndex, ExtendedKey)> {
    derive_child_checked(parent, index, is_valid_private_key)
}

fn derive_child_checked<F>(parent: &ExtendedKey, index: ChildIndex, is_valid: F) -> Result<(ChildIndex, ExtendedKey)>
where
    F: Fn(&[u8; KEY_SIZE]) -> bool,
{
    let mut current = index;
    loop {
        let child = hmac_sha512(parent.chain_code(), &[&parent.key()[..], &[current.value()][..]])?;
        if is_valid(child.key()) {
            debug!(index = current.value(), "derived child key");
            return Ok((current, child));
        }
        warn!(index = current.value(), "derived child key is not a valid scalar, advancing index");
        current = current.next().ok_or_else(|| {
            WalletError::invalid_parameter(format!("no valid child key between index {} and {}", index, CHILD_INDEX_MAX))
        })?;
    }
}

/// Derives the child key for `parent` at `index` (0-255).
pub fn derive_child_key(parent: &ExtendedKey, index: u32) -> Result<ExtendedKey> {
    let (_, child) = derive_child(parent, ChildIndex::new(index)?)?;
    Ok(child)
}
