use proptest::prelude::*;

use crypto::XteaCipher;

fn encrypt(key: &[u8; 16], rounds: u32, block: &[u8; 8]) -> [u8; 8] {
    let mut out = [0u8; 8];
    XteaCipher::new(key, rounds).unwrap().encrypt_block(block, 0, &mut out, 0).unwrap();
    out
}

fn decrypt(key: &[u8; 16], rounds: u32, block: &[u8; 8]) -> [u8; 8] {
    let mut out = [0u8; 8];
    XteaCipher::new(key, rounds).unwrap().decrypt_block(block, 0, &mut out, 0).unwrap();
    out
}

proptest! {
    #[test]
    fn prop_roundtrip(key in any::<[u8; 16]>(), rounds in 1u32..128, block in any::<[u8; 8]>()) {
        let ciphertext = encrypt(&key, rounds, &block);
        prop_assert_eq!(decrypt(&key, rounds, &ciphertext), block);
    }

    #[test]
    fn prop_deterministic(key in any::<[u8; 16]>(), block in any::<[u8; 8]>()) {
        prop_assert_eq!(encrypt(&key, 32, &block), encrypt(&key, 32, &block));
    }

    #[test]
    fn prop_not_identity(key in any::<[u8; 16]>(), block in any::<[u8; 8]>()) {
        prop_assert_ne!(encrypt(&key, 32, &block), block);
    }

    #[test]
    fn prop_single_key_bit_changes_ciphertext(
        key in any::<[u8; 16]>(),
        block in any::<[u8; 8]>(),
        bit in 0usize..128,
    ) {
        let mut flipped = key;
        flipped[bit / 8] ^= 1 << (bit % 8);

        prop_assert_ne!(encrypt(&key, 32, &block), encrypt(&flipped, 32, &block));
    }

    #[test]
    fn prop_offset_touches_only_target(
        key in any::<[u8; 16]>(),
        block in any::<[u8; 8]>(),
        prefix in 0usize..24,
        suffix in 0usize..24,
        fill in any::<u8>(),
    ) {
        let cipher = XteaCipher::new(&key, 32).unwrap();
        let expected = encrypt(&key, 32, &block);

        let mut input = vec![fill; prefix + 8 + suffix];
        input[prefix..prefix + 8].copy_from_slice(&block);

        let mut output = vec![fill; prefix + 8 + suffix];
        cipher.encrypt_block(&input, prefix, &mut output, prefix).unwrap();

        prop_assert!(output[..prefix].iter().all(|&b| b == fill));
        prop_assert!(output[prefix + 8..].iter().all(|&b| b == fill));
        prop_assert_eq!(&output[prefix..prefix + 8], &expected[..]);

        cipher.decrypt_block_in_place(&mut output, prefix).unwrap();
        prop_assert_eq!(output, input);
    }
}
