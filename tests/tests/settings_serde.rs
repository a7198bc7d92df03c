//! Configuration round-trips through serde and drives cipher construction

use dfpe::prelude::*;

#[test]
fn params_from_json_build_a_cipher() {
    let json = r#"{ "variant": "FF3-1", "alphabet": "0123456789abcdef" }"#;
    let params: FpeParams = serde_json::from_str(json).unwrap();
    assert_eq!(params.variant, Variant::Ff3_1);
    assert_eq!(params.max_tweak_len, 256);

    let cipher = FpeCipher::with_params(&[5u8; 16], b"seven!!", &params).unwrap();
    let settings = cipher.settings();
    assert_eq!(settings, CipherSettings::new(16, 5, 48));
    assert_eq!(cipher.params(), &params);
}

#[test]
fn settings_serialize_with_camel_case_fields() {
    let cipher = Ff1Cipher::new(&[5u8; 16], "ABCD", b"").unwrap();
    let json = serde_json::to_value(cipher.settings()).unwrap();
    assert_eq!(json, serde_json::json!({ "radix": 4, "minLen": 10, "maxLen": 4096 }));

    let back: CipherSettings = serde_json::from_value(json).unwrap();
    assert_eq!(back, cipher.settings());
}

#[test]
fn variant_names() {
    assert_eq!(serde_json::to_string(&Variant::Ff1).unwrap(), r#""FF1""#);
    assert_eq!(serde_json::to_string(&Variant::Ff3_1).unwrap(), r#""FF3-1""#);
    assert!(serde_json::from_str::<Variant>(r#""FF2""#).is_err());
    assert_eq!("ff3_1".parse::<Variant>().unwrap(), Variant::Ff3_1);
}

#[test]
fn invalid_params_are_rejected_at_construction() {
    let params = FpeParams::default().with_max_tweak_len(1024);
    assert!(matches!(
        FpeCipher::with_params(&[5u8; 16], b"", &params),
        Err(Error::InvalidParameter { .. })
    ));
}
