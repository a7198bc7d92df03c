//! Runs a known-answer case in both directions.

use dfpe_api::{FormatPreservingCipher, Variant};
use dfpe_symmetric::FpeCipher;

use super::error::{Result, VectorError};
use super::model::{TestCase, VectorFile};

/// Encrypt `pt` and decrypt `ct`, comparing both against the case
pub fn run_case(variant: Variant, case: &TestCase) -> Result<()> {
    let cipher = FpeCipher::from_hex(&case.key, &case.alphabet, &case.tweak, variant)?;

    let actual = cipher.encrypt(&case.pt)?;
    if actual != case.ct {
        return Err(VectorError::Mismatch {
            test_id: case.test_id,
            direction: "encrypt",
            expected: case.ct.clone(),
            actual,
        });
    }

    let actual = cipher.decrypt(&case.ct)?;
    if actual != case.pt {
        return Err(VectorError::Mismatch {
            test_id: case.test_id,
            direction: "decrypt",
            expected: case.pt.clone(),
            actual,
        });
    }
    Ok(())
}

/// Run every case of a file, returning the number that passed
pub fn run_file(file: &VectorFile) -> Result<usize> {
    let variant: Variant = file.algorithm.parse()?;
    for case in &file.test_cases {
        run_case(variant, case)?;
    }
    Ok(file.test_cases.len())
}
