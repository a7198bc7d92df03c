//! Property-based tests for the cipher facades

use dfpe::prelude::*;
use proptest::prelude::*;
use std::collections::HashSet;

const ALPHABETS: [&str; 4] = [
    "0123456789",
    "ABCD",
    "0123456789abcdefghijklmnopqrstuvwxyz",
    "αβγδεζηθικλμνξοπρστυφχψω",
];

/// An alphabet index and a message over it of an accepted FF3-1 length
fn alphabet_and_message() -> impl Strategy<Value = (usize, String)> {
    (0..ALPHABETS.len()).prop_flat_map(|i| {
        let symbols: Vec<char> = ALPHABETS[i].chars().collect();
        let cipher = FpeCipher::new(&[0u8; 16], ALPHABETS[i], &[0u8; 7], Variant::Ff3_1).unwrap();
        let settings = cipher.settings();
        let len = settings.min_len()..=settings.max_len();
        (
            Just(i),
            prop::collection::vec(prop::sample::select(symbols), len)
                .prop_map(|chars| chars.into_iter().collect::<String>()),
        )
    })
}

proptest! {
    #[test]
    fn ff1_roundtrip_preserves_length_and_alphabet(
        key in any::<[u8; 32]>(),
        tweak in prop::collection::vec(any::<u8>(), 0..64),
        (i, message) in alphabet_and_message(),
    ) {
        let alphabet = ALPHABETS[i];
        let cipher = Ff1Cipher::new(&key, alphabet, &tweak).unwrap();

        let ct = cipher.encrypt(&message).unwrap();
        prop_assert_eq!(ct.chars().count(), message.chars().count());
        prop_assert!(ct.chars().all(|c| alphabet.contains(c)));
        prop_assert_eq!(cipher.decrypt(&ct).unwrap(), message);
    }

    #[test]
    fn ff3_1_roundtrip_preserves_length_and_alphabet(
        key in any::<[u8; 24]>(),
        tweak in any::<[u8; 7]>(),
        (i, message) in alphabet_and_message(),
    ) {
        let alphabet = ALPHABETS[i];
        let cipher = Ff3_1Cipher::new(&key, alphabet, &tweak).unwrap();

        let ct = cipher.encrypt(&message).unwrap();
        prop_assert_eq!(ct.chars().count(), message.chars().count());
        prop_assert!(ct.chars().all(|c| alphabet.contains(c)));
        prop_assert_eq!(cipher.decrypt(&ct).unwrap(), message);
    }

    #[test]
    fn ff1_distinct_tweaks_give_distinct_ciphertexts(
        key in any::<[u8; 16]>(),
        a in prop::collection::vec(any::<u8>(), 0..32),
        b in prop::collection::vec(any::<u8>(), 0..32),
    ) {
        prop_assume!(a != b);
        let cipher = Ff1Cipher::new(&key, "0123456789", b"").unwrap();
        let message = "0123456789012345";
        prop_assert_ne!(
            cipher.encrypt_with_tweak(message, &a).unwrap(),
            cipher.encrypt_with_tweak(message, &b).unwrap()
        );
    }
}

/// Distinct messages of one length never share a ciphertext
#[test]
fn encryption_is_injective_on_a_slice_of_the_domain() {
    for variant in [Variant::Ff1, Variant::Ff3_1] {
        let cipher = FpeCipher::new(&[7u8; 16], "0123", b"perm-01", variant).unwrap();
        let mut seen = HashSet::new();
        for x in 0u32..4096 {
            let message: String = (0..10)
                .map(|k| char::from(b'0' + ((x >> (2 * (9 - k))) & 3) as u8))
                .collect();
            let ct = cipher.encrypt(&message).unwrap();
            assert!(seen.insert(ct), "{} collided under {}", message, variant);
        }
        assert_eq!(seen.len(), 4096);
    }
}
