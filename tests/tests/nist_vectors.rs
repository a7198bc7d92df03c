//! Known-answer tests loaded from the JSON vector files

use dfpe_api::Variant;
use dfpe_tests::init_tracing;
use dfpe_tests::vectors::{run_case, run_file, VectorError, FF1_VECTORS, FF3_1_VECTORS};

#[test]
fn ff1_nist_samples() {
    init_tracing();
    assert_eq!(FF1_VECTORS.algorithm, "FF1");
    assert_eq!(run_file(&FF1_VECTORS).unwrap(), 9);
}

#[test]
fn ff3_1_vectors() {
    init_tracing();
    assert_eq!(FF3_1_VECTORS.algorithm, "FF3-1");
    assert_eq!(run_file(&FF3_1_VECTORS).unwrap(), FF3_1_VECTORS.test_cases.len());
}

#[test]
fn ff1_vectors_fail_under_ff3_1() {
    // same key and alphabet, but a 10-byte tweak is not a valid FF3-1 tweak
    let case = &FF1_VECTORS.test_cases[1];
    match run_case(Variant::Ff3_1, case) {
        Err(VectorError::Cipher(dfpe_api::Error::InvalidTweakLength { actual: 10, .. })) => {}
        other => panic!("expected InvalidTweakLength, got {:?}", other),
    }
}

#[test]
fn mismatch_is_reported() {
    let mut case = FF1_VECTORS.test_cases[0].clone();
    case.ct = "0000000000".to_string();
    match run_case(Variant::Ff1, &case) {
        Err(VectorError::Mismatch { test_id: 1, direction: "encrypt", actual, .. }) => {
            assert_eq!(actual, "2433477484");
        }
        other => panic!("expected Mismatch, got {:?}", other),
    }
}
