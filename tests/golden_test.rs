//! Pins every intermediate value of the all-zero 128-bit fixture with
//! passphrase "test".

use hdaddr::*;
use hex_literal::hex;

const MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
const PASSPHRASE: &str = "test";
const SEED: [u8; 64] = hex!(
    "0bcdfe83aa48a793f8c68f09eee46bce8aa1fe5d4eb76381dff21d1690259e58"
    "a9d609e7c6b487d7a4b78230c22465bf727e7f864f386262fc0dea12ec040e7c"
);
const MASTER_KEY: [u8; 32] = hex!("f7890ad8ccaaf3c62e3cb4713c4d54c4dbb221e9d3883edd408d552a981187ba");
const MASTER_CHAIN_CODE: [u8; 32] = hex!("d876725ffeb0c6f4ee535baee3146ff1ea6f1780ff04a108a38b9666d18321ae");
const CHILD_KEY: [u8; 32] = hex!("e80af0b8a2681694ecef47df98de710eee85f8c45e8a6812da1f97355bd26280");
const CHILD_CHAIN_CODE: [u8; 32] = hex!("eb69759263e85e5ae6d85566eb81f71919a94152b37e4c0e153afb81f5b38520");
const ADDRESS: &str = "0x4f64f2c59c443e542240590b9d26f95e8a6bdebb";

#[test]
fn test_stage_by_stage() {
    let mnemonic = entropy_to_mnemonic(&[0u8; 16], &Wordlist::english()).unwrap();
    assert_eq!(mnemonic.phrase(), MNEMONIC);

    let seed = mnemonic_to_seed(mnemonic.phrase(), PASSPHRASE).unwrap();
    assert_eq!(seed.as_bytes(), SEED);

    let master = derive_master_key(seed.as_bytes()).unwrap();
    assert_eq!(master.key(), &MASTER_KEY);
    assert_eq!(master.chain_code(), &MASTER_CHAIN_CODE);

    let child = derive_child_key(&master, 0).unwrap();
    assert_eq!(child.key(), &CHILD_KEY);
    assert_eq!(child.chain_code(), &CHILD_CHAIN_CODE);

    let address = private_key_to_address(child.key()).unwrap();
    assert_eq!(address.to_string(), ADDRESS);
}

#[test]
fn test_pipeline_matches_stages() {
    let options = PipelineOptions::new(EntropyBits::new(128).unwrap(), PASSPHRASE, ChildIndex::new(0).unwrap());
    let mut recorder = RecordingObserver::default();
    let wallet = derive_from_entropy(&[0u8; 16], &options, &mut recorder).unwrap();
    assert_eq!(wallet.mnemonic.phrase(), MNEMONIC);
    assert_eq!(wallet.address.to_string(), ADDRESS);
    assert_eq!(recorder.stages, ["mnemonic", "seed", "master_key", "child_key", "address"]);
}

#[test]
fn test_fixture_agrees_with_tiny_bip39() {
    let reference = bip39::Mnemonic::from_entropy(&[0u8; 16], bip39::Language::English).unwrap();
    assert_eq!(reference.phrase(), MNEMONIC);
    let reference_seed = bip39::Seed::new(&reference, PASSPHRASE);
    assert_eq!(reference_seed.as_bytes(), SEED);
}

#[test]
fn test_repeated_derivation_is_bit_identical() {
    let seed = Seed::new(SEED);
    let first = derive_master_key(seed.as_bytes()).unwrap();
    for _ in 0..10 {
        let again = derive_master_key(seed.as_bytes()).unwrap();
        assert_eq!(again, first);
        assert_eq!(derive_child_key(&again, 0).unwrap(), derive_child_key(&first, 0).unwrap());
    }
}

#[test]
fn test_errors_abort_the_pipeline() {
    assert!(matches!(derive_master_key(&SEED[..32]), Err(WalletError::InvalidParameter(_))));
    assert!(matches!(derive_child_key(&ExtendedKey::new(MASTER_KEY, MASTER_CHAIN_CODE), 256), Err(WalletError::InvalidParameter(_))));
    assert_eq!(private_key_to_address(&[0u8; 32]), Err(WalletError::InvalidKey));
    assert!(matches!(mnemonic_to_seed("", PASSPHRASE), Err(WalletError::InvalidParameter(_))));
    assert!(matches!(EntropyBits::new(100), Err(WalletError::InvalidParameter(_))));
}
