use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dfpe::prelude::*;

const DIGITS: &str = "0123456789";

fn message(len: usize) -> String {
    DIGITS.chars().cycle().take(len).collect()
}

fn bench_ff1(c: &mut Criterion) {
    let mut group = c.benchmark_group("FF1");

    for len in [6usize, 16, 64, 256].iter() {
        let pt = message(*len);

        for key_size in [16usize, 24, 32] {
            let cipher = Ff1Cipher::new(&vec![0u8; key_size], DIGITS, b"bench-tweak").unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("AES-{}", key_size * 8), len),
                len,
                |b, _| {
                    b.iter(|| {
                        let _ = cipher.encrypt(&pt);
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_ff3_1(c: &mut Criterion) {
    let mut group = c.benchmark_group("FF3-1");

    // 56 is the longest decimal message FF3-1 accepts
    for len in [6usize, 16, 56].iter() {
        let pt = message(*len);

        for key_size in [16usize, 24, 32] {
            let cipher = Ff3_1Cipher::new(&vec![0u8; key_size], DIGITS, &[0u8; 7]).unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("AES-{}", key_size * 8), len),
                len,
                |b, _| {
                    b.iter(|| {
                        let _ = cipher.encrypt(&pt);
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_radix(c: &mut Criterion) {
    let mut group = c.benchmark_group("FF1-radix");
    let alphabets = [
        ("radix-2", "01"),
        ("radix-36", "0123456789abcdefghijklmnopqrstuvwxyz"),
        (
            "radix-62",
            "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ",
        ),
    ];

    for (name, alphabet) in alphabets.iter() {
        let cipher = Ff1Cipher::new(&[0u8; 16], alphabet, b"").unwrap();
        let pt: String = alphabet.chars().cycle().take(32).collect();
        group.bench_function(*name, |b| {
            b.iter(|| {
                let ct = cipher.encrypt(&pt).unwrap();
                let _ = cipher.decrypt(&ct);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ff1, bench_ff3_1, bench_radix);
criterion_main!(benches);
