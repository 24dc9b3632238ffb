//! Account addresses: the last 20 bytes of Keccak-256 over the uncompressed
//! secp256k1 public key, without its `0x04` prefix.

use std::fmt;
use std::str::FromStr;

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::SecretKey;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tiny_keccak::{Hasher, Keccak};
use tracing::debug;

use crate::constants::*;
use crate::error::{Result, WalletError};

/// A 20-byte account address, displayed as `0x` followed by 40 lowercase hex digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    pub fn from_bytes(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl FromStr for Address {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix("0x")
            .ok_or_else(|| WalletError::invalid_parameter("address must start with 0x"))?;
        if s.len() != ADDRESS_HEX_LEN {
            return Err(WalletError::invalid_parameter(format!("address must be {} characters, got {}", ADDRESS_HEX_LEN, s.len())));
        }
        let mut bytes = [0u8; ADDRESS_SIZE];
        hex::decode_to_slice(digits, &mut bytes).map_err(|e| WalletError::invalid_parameter(format!("invalid address hex: {}", e)))?;
        Ok(Self(bytes))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

fn secret_key(private_key: &[u8; KEY_SIZE]) -> Result<SecretKey> {
    Ok(SecretKey::from_bytes(&(*private_key).into())?)
}

/// True when `key` is a usable secp256k1 scalar (non-zero and below the group order).
pub fn is_valid_private_key(key: &[u8; KEY_SIZE]) -> bool {
    secret_key(key).is_ok()
}

/// The 64-byte `X || Y` public key for `private_key`.
pub fn public_key_uncompressed(private_key: &[u8; KEY_SIZE]) -> Result<[u8; 64]> {
    let public = secret_key(private_key)?.public_key();
    let point = public.to_encoded_point(false);
    let mut xy = [0u8; 64];
    xy.copy_from_slice(&point.as_bytes()[1..]);
    Ok(xy)
}

/// Converts a private key into its account address.
pub fn private_key_to_address(private_key: &[u8; KEY_SIZE]) -> Result<Address> {
    let public = public_key_uncompressed(private_key)?;
    let mut hasher = Keccak::v256();
    hasher.update(&public);
    let mut hash = [0u8; 32];
    hasher.finalize(&mut hash);
    let mut bytes = [0u8; ADDRESS_SIZE];
    bytes.copy_from_slice(&hash[32 - ADDRESS_SIZE..]);
    let address = Address(bytes);
    debug!(%address, "derived address");
    Ok(address)
}

/// Parses a hex private key (optionally `0x`-prefixed) and converts it.
pub fn hex_private_key_to_address(hex_key: &str) -> Result<Address> {
    let mut key = zeroize::Zeroizing::new([0u8; KEY_SIZE]);
    let digits = hex_key.trim().trim_start_matches("0x");
    if digits.len() != KEY_SIZE * 2 {
        return Err(WalletError::invalid_parameter(format!("private key must be {} hex characters", KEY_SIZE * 2)));
    }
    hex::decode_to_slice(digits, &mut key[..]).map_err(|_| WalletError::invalid_parameter("invalid private key hex"))?;
    private_key_to_address(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    fn scalar(n: u8) -> [u8; 32] {
        let mut key = [0u8; 32];
        key[31] = n;
        key
    }

    #[test]
    fn test_known_addresses() {
        assert_eq!(private_key_to_address(&scalar(1)).unwrap().to_string(), "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf");
        assert_eq!(private_key_to_address(&scalar(2)).unwrap().to_string(), "0x2b5ad5c4795c026514f8317c7a215e218dccd6cf");
    }

    #[test]
    fn test_fixture_child_address() {
        let key = hex!("e80af0b8a2681694ecef47df98de710eee85f8c45e8a6812da1f97355bd26280");
        let address = private_key_to_address(&key).unwrap();
        assert_eq!(address.to_string(), "0x4f64f2c59c443e542240590b9d26f95e8a6bdebb");
        assert_eq!(address.to_string().len(), 42);
    }

    #[test]
    fn test_invalid_scalars_rejected() {
        assert_eq!(private_key_to_address(&[0u8; 32]), Err(WalletError::InvalidKey));
        // secp256k1 group order n
        let order = hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");
        assert_eq!(private_key_to_address(&order), Err(WalletError::InvalidKey));
        assert_eq!(private_key_to_address(&[0xff; 32]), Err(WalletError::InvalidKey));
        assert!(!is_valid_private_key(&order));
        assert!(is_valid_private_key(&scalar(1)));
    }

    #[test]
    fn test_public_key_is_64_bytes() {
        let xy = public_key_uncompressed(&scalar(1)).unwrap();
        // generator point G
        assert_eq!(xy[..32], hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"));
        assert_eq!(xy[32..], hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"));
    }

    #[test]
    fn test_address_parse_and_serde() {
        let address: Address = "0x4f64f2c59c443e542240590b9d26f95e8a6bdebb".parse().unwrap();
        assert_eq!(address.as_bytes()[0], 0x4f);
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, "\"0x4f64f2c59c443e542240590b9d26f95e8a6bdebb\"");
        assert_eq!(serde_json::from_str::<Address>(&json).unwrap(), address);
        assert!("4f64f2c59c443e542240590b9d26f95e8a6bdebb".parse::<Address>().is_err());
        assert!("0x4f64".parse::<Address>().is_err());
    }

    #[test]
    fn test_hex_private_key() {
        let with_prefix = hex_private_key_to_address("0x0000000000000000000000000000000000000000000000000000000000000001").unwrap();
        let without = hex_private_key_to_address("0000000000000000000000000000000000000000000000000000000000000001").unwrap();
        assert_eq!(with_prefix, without);
        assert!(matches!(hex_private_key_to_address("zz"), Err(WalletError::InvalidParameter(_))));
    }
}
