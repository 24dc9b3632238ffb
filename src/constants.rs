pub const WORDLIST_SIZE: usize = 2048;
pub const BITS_PER_WORD: usize = 11;
pub const ENGLISH_WORDLIST: &str = include_str!("../wordlist/english.txt");

pub const ENTROPY_BITS_ALLOWED: [usize; 5] = [128, 160, 192, 224, 256];
pub const DEFAULT_ENTROPY_BITS: usize = 128;

pub const SEED_SALT_PREFIX: &str = "mnemonic";
pub const PBKDF2_ROUNDS: u32 = 2048;
pub const SEED_SIZE: usize = 64;

pub const MASTER_HMAC_KEY: &[u8] = b"Bitcoin seed";
pub const KEY_SIZE: usize = 32;
pub const CHAIN_CODE_SIZE: usize = 32;
pub const CHILD_INDEX_MAX: u32 = u8::MAX as u32;

pub const ADDRESS_SIZE: usize = 20;
pub const ADDRESS_HEX_LEN: usize = 2 + ADDRESS_SIZE * 2;
