use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use tracing::debug;
use zeroize::Zeroizing;

use crate::constants::*;
use crate::error::{Result, WalletError};
use crate::types::Seed;

/// Stretches a mnemonic into a 64-byte seed with PBKDF2-HMAC-SHA512.
///
/// The password is the phrase exactly as given (spaces included) and the salt
/// is `"mnemonic"` followed by the passphrase. The phrase is not checked
/// against any word list.
pub fn mnemonic_to_seed(mnemonic: &str, passphrase: &str) -> Result<Seed> {
    if mnemonic.trim().is_empty() {
        return Err(WalletError::invalid_parameter("mnemonic must not be empty"));
    }
    let salt = Zeroizing::new(format!("{}{}", SEED_SALT_PREFIX, passphrase));
    let mut seed = Zeroizing::new([0u8; SEED_SIZE]);
    pbkdf2_hmac::<Sha512>(mnemonic.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut seed[..]);
    debug!(rounds = PBKDF2_ROUNDS, "stretched mnemonic into seed");
    Ok(Seed::new(*seed))
}
