//! One cipher shared across threads behaves like sequential use

use dfpe::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::sync::Arc;
use std::thread;

fn messages(seed: u64, count: usize) -> Vec<String> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(6..=20);
            (0..len).map(|_| char::from(b'0' + rng.gen_range(0..10u8))).collect()
        })
        .collect()
}

fn check_shared(cipher: Arc<dyn SharedCipher>) {
    let inputs = messages(42, 64);
    let expected: Vec<String> = inputs.iter().map(|m| cipher.enc(m)).collect();

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let cipher = Arc::clone(&cipher);
            let inputs = inputs.clone();
            let expected = expected.clone();
            thread::spawn(move || {
                // alternate directions so encrypts and decrypts overlap
                for (i, (m, ct)) in inputs.iter().zip(&expected).enumerate() {
                    if (i + t) % 2 == 0 {
                        assert_eq!(&cipher.enc(m), ct);
                    } else {
                        assert_eq!(&cipher.dec(ct), m);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

/// Object-safe view over the facades for this test
trait SharedCipher: Send + Sync {
    fn enc(&self, m: &str) -> String;
    fn dec(&self, c: &str) -> String;
}

impl<C: FormatPreservingCipher + Send + Sync> SharedCipher for C {
    fn enc(&self, m: &str) -> String {
        self.encrypt(m).unwrap()
    }

    fn dec(&self, c: &str) -> String {
        self.decrypt(c).unwrap()
    }
}

#[test]
fn ff1_shared_across_threads() {
    let cipher = Ff1Cipher::new(&[3u8; 32], "0123456789", b"threads").unwrap();
    check_shared(Arc::new(cipher));
}

#[test]
fn ff3_1_shared_across_threads() {
    let cipher = Ff3_1Cipher::new(&[3u8; 16], "0123456789", b"threads").unwrap();
    check_shared(Arc::new(cipher));
}

#[test]
fn per_call_tweaks_do_not_interfere() {
    let cipher = Arc::new(Ff1Cipher::new(&[9u8; 16], "0123456789", b"").unwrap());
    let message = "0123456789";
    let expected: Vec<String> = (0u8..8)
        .map(|t| cipher.encrypt_with_tweak(message, &[t]).unwrap())
        .collect();

    let handles: Vec<_> = (0u8..8)
        .map(|t| {
            let cipher = Arc::clone(&cipher);
            let expected = expected[t as usize].clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    let ct = cipher.encrypt_with_tweak(message, &[t]).unwrap();
                    assert_eq!(ct, expected);
                    assert_eq!(cipher.decrypt_with_tweak(&ct, &[t]).unwrap(), message);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
