use proptest::prelude::*;

use hdaddr::*;

fn entropy_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::sample::select(vec![16usize, 20, 24, 28, 32]).prop_flat_map(|len| prop::collection::vec(any::<u8>(), len))
}

fn extended_key_strategy() -> impl Strategy<Value = ExtendedKey> {
    (any::<[u8; 32]>(), any::<[u8; 32]>()).prop_map(|(k, c)| ExtendedKey::new(k, c))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn mnemonic_has_expected_word_count(entropy in entropy_strategy()) {
        let list = Wordlist::english();
        let mnemonic = entropy_to_mnemonic(&entropy, &list).unwrap();
        let bits = entropy.len() * 8;
        prop_assert_eq!(mnemonic.word_count(), (bits + bits / 32) / 11);
        prop_assert!(mnemonic.words().all(|w| list.contains(w)));
    }

    #[test]
    fn mnemonic_matches_tiny_bip39(entropy in entropy_strategy()) {
        let ours = entropy_to_mnemonic(&entropy, &Wordlist::english()).unwrap();
        let reference = bip39::Mnemonic::from_entropy(&entropy, bip39::Language::English).unwrap();
        prop_assert_eq!(ours.phrase(), reference.phrase());
    }

    #[test]
    fn master_key_halves_are_32_bytes(seed in any::<[u8; 32]>().prop_map(|h| { let mut s = [0u8; 64]; s[..32].copy_from_slice(&h); s[32..].copy_from_slice(&h); s })) {
        let master = derive_master_key(&seed).unwrap();
        prop_assert_eq!(master.key().len() + master.chain_code().len(), 64);
        prop_assert_eq!(derive_master_key(&seed).unwrap(), master);
    }

    #[test]
    fn child_derivation_is_pure_and_separates_indices(parent in extended_key_strategy(), index in 0u32..255) {
        let a = derive_child_key(&parent, index).unwrap();
        let b = derive_child_key(&parent, index).unwrap();
        let next = derive_child_key(&parent, index + 1).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_ne!(a.key(), next.key());
        prop_assert_ne!(a.chain_code(), next.chain_code());
    }

    #[test]
    fn child_index_above_255_rejected(parent in extended_key_strategy(), index in 256u32..) {
        prop_assert!(matches!(derive_child_key(&parent, index), Err(WalletError::InvalidParameter(_))));
    }

    #[test]
    fn address_is_42_lowercase_chars(key in any::<[u8; 32]>().prop_filter("valid scalar", is_valid_private_key)) {
        let address = private_key_to_address(&key).unwrap().to_string();
        prop_assert_eq!(address.len(), 42);
        prop_assert!(address.starts_with("0x"));
        prop_assert!(address[2..].chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}

proptest! {
    // PBKDF2 with 2048 rounds is slow in debug builds
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn seed_is_deterministic_and_passphrase_sensitive(entropy in entropy_strategy(), passphrase in "[a-zA-Z0-9]{0,16}") {
        let mnemonic = entropy_to_mnemonic(&entropy, &Wordlist::english()).unwrap();
        let a = mnemonic_to_seed(mnemonic.phrase(), &passphrase).unwrap();
        let b = mnemonic_to_seed(mnemonic.phrase(), &passphrase).unwrap();
        let other = mnemonic_to_seed(mnemonic.phrase(), &format!("{}x", passphrase)).unwrap();
        prop_assert_eq!(a.as_bytes(), b.as_bytes());
        prop_assert_ne!(a.as_bytes(), other.as_bytes());
    }
}
