use std::ffi::CString;

use encoding_rs::{WINDOWS_1251, WINDOWS_1252};
use proptest::prelude::*;
use xlsxwriter_lv::{ConversionMode, Converter};

fn strict(codepage: u16) -> Converter {
    Converter::for_codepage(codepage, ConversionMode::Strict).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        rng_seed: proptest::test_runner::RngSeed::Fixed(0),
        failure_persistence: None,
        .. ProptestConfig::default()
    })]

    #[test]
    fn windows_1252_round_trips(bytes in proptest::collection::vec(1u8..=255, 0..256)) {
        let text = CString::new(bytes.clone()).unwrap();
        let arg = strict(1252).convert_cstr(&text).unwrap();
        let utf8 = std::str::from_utf8(arg.as_bytes().unwrap()).unwrap();

        let (decoded, _, _) = WINDOWS_1252.decode(&bytes);
        prop_assert_eq!(utf8, decoded.as_ref());

        let (encoded, _, had_errors) = WINDOWS_1252.encode(utf8);
        prop_assert!(!had_errors);
        prop_assert_eq!(encoded.as_ref(), bytes.as_slice());
    }

    #[test]
    fn windows_1251_round_trips(original in "[А-Яа-яЁё0-9 ,.]{0,64}") {
        let (encoded, _, had_errors) = WINDOWS_1251.encode(&original);
        prop_assume!(!had_errors);
        let text = CString::new(encoded.into_owned()).unwrap();

        let arg = strict(1251).convert_cstr(&text).unwrap();
        prop_assert_eq!(arg.as_bytes().unwrap(), original.as_bytes());
    }

    #[test]
    fn lenient_never_fails(bytes in proptest::collection::vec(1u8..=255, 0..64)) {
        let text = CString::new(bytes).unwrap();
        let converter = Converter::for_codepage(932, ConversionMode::Lenient).unwrap();
        let arg = converter.convert_cstr(&text).unwrap();
        prop_assert!(arg.as_bytes().is_some());
    }
}
