use thiserror::Error;

/// Errors raised by the derivation pipeline and its collaborators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid private key: not a valid secp256k1 scalar")]
    InvalidKey,

    #[error("Random source failure: {0}")]
    RandomSource(String),

    #[error("Word list error: {0}")]
    Wordlist(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl WalletError {
    pub(crate) fn invalid_parameter(msg: impl Into<String>) -> Self {
        WalletError::InvalidParameter(msg.into())
    }
}

impl From<rand::Error> for WalletError {
    fn from(e: rand::Error) -> Self {
        WalletError::RandomSource(e.to_string())
    }
}

impl From<k256::elliptic_curve::Error> for WalletError {
    fn from(_: k256::elliptic_curve::Error) -> Self {
        WalletError::InvalidKey
    }
}

pub type Result<T> = std::result::Result<T, WalletError>;
