// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

use std::collections::HashSet;

use rstest::rstest;

use super::*;
use crate::fixtures::init_logging;

#[rstest]
#[case("sha1", SHA1, 20)]
#[case("sha2-256", SHA2_256, 32)]
#[case("sha2-512", SHA2_512, 64)]
#[case("sha3", SHA3, 64)]
#[case("dbl-sha2-256", DBL_SHA2_256, 32)]
fn test_builtin_functions(#[case] name: &str, #[case] code: u64, #[case] length: usize) {
    init_logging();
    assert_eq!(code_for_name(name), Some(code));
    assert_eq!(name_for_code(code), Some(name));
    assert_eq!(default_length_for_code(code), Some(length));
    assert!(is_known_code(code));
    assert!(is_valid_code(code));
}

#[rstest]
#[case(BLAKE2B_MIN, "blake2b-8", 1)]
#[case(0xb220, "blake2b-256", 32)]
#[case(BLAKE2B_MAX, "blake2b-512", 64)]
#[case(BLAKE2S_MIN, "blake2s-8", 1)]
#[case(0xb250, "blake2s-128", 16)]
#[case(BLAKE2S_MAX, "blake2s-256", 32)]
fn test_generated_families(#[case] code: u64, #[case] name: &str, #[case] length: usize) {
    assert_eq!(name_for_code(code), Some(name));
    assert_eq!(code_for_name(name), Some(code));
    assert_eq!(default_length_for_code(code), Some(length));
}

#[rstest]
fn test_family_bounds_are_exclusive() {
    assert!(!is_known_code(BLAKE2B_MIN - 1));
    assert!(!is_known_code(BLAKE2S_MAX + 1));
    assert_eq!(code_for_name("blake2b-0"), None);
    assert_eq!(code_for_name("blake2b-520"), None);
    assert_eq!(code_for_name("blake2s-264"), None);
}

#[rstest]
#[case(0x00, true)]
#[case(0x05, true)]
#[case(0x0f, true)]
#[case(0x10, false)]
#[case(0x99, false)]
#[case(SHA1, false)]
fn test_app_codes(#[case] code: u64, #[case] expected: bool) {
    assert_eq!(is_app_code(code), expected);
}

#[rstest]
fn test_app_codes_are_valid_but_unknown() {
    for code in 0..APP_CODE_LIMIT {
        assert!(is_valid_code(code), "{code:#x} should be valid");
        assert!(!is_known_code(code), "{code:#x} should not be registered");
        assert_eq!(name_for_code(code), None);
    }
}

#[rstest]
#[case(0x10)]
#[case(0x15)]
#[case(0x99)]
#[case(0xb200)]
#[case(u64::MAX)]
fn test_unknown_codes(#[case] code: u64) {
    assert!(!is_valid_code(code));
    assert_eq!(name_for_code(code), None);
    assert_eq!(default_length_for_code(code), None);
    assert!(HashFunction::lookup(code).is_none());
}

#[rstest]
#[case("")]
#[case("SHA1")]
#[case("sha2")]
#[case("blake2b")]
fn test_unknown_names(#[case] name: &str) {
    assert_eq!(code_for_name(name), None);
    assert!(HashFunction::from_name(name).is_none());
}

#[rstest]
fn test_registry_contents_are_unique() {
    let registry = Registry::global();
    assert_eq!(registry.len(), 5 + 64 + 32);

    let codes: HashSet<_> = registry.iter().map(HashFunction::code).collect();
    let names: HashSet<_> = registry.iter().map(HashFunction::name).collect();
    assert_eq!(codes.len(), registry.len(), "codes must be unique");
    assert_eq!(names.len(), registry.len(), "names must be unique");
}

#[rstest]
fn test_registry_iterates_in_code_order() {
    let codes: Vec<_> = Registry::global().iter().map(HashFunction::code).collect();
    let mut sorted = codes.clone();
    sorted.sort();
    assert_eq!(codes, sorted);
    assert_eq!(codes.first(), Some(&SHA1));
    assert_eq!(codes.last(), Some(&BLAKE2S_MAX));
}

#[rstest]
fn test_hash_function_lookup() {
    let func = HashFunction::from_name("sha2-256").expect("sha2-256 is registered");
    assert_eq!(func.code(), SHA2_256);
    assert_eq!(func.default_length(), 32);
    assert_eq!(HashFunction::lookup(SHA2_256), Some(func));
    assert_eq!(func.to_string(), "sha2-256 (0x12)");
}
