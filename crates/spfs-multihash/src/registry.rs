// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

//! The table of known hash functions and their multihash codes.

use std::collections::HashMap;

use once_cell::sync::Lazy;

#[cfg(test)]
#[path = "./registry_test.rs"]
mod registry_test;

pub const SHA1: u64 = 0x11;
pub const SHA2_256: u64 = 0x12;
pub const SHA2_512: u64 = 0x13;
pub const SHA3: u64 = 0x14;
pub const DBL_SHA2_256: u64 = 0x56;

/// The first code of the blake2b family (blake2b-8)
pub const BLAKE2B_MIN: u64 = 0xb201;
/// The last code of the blake2b family (blake2b-512)
pub const BLAKE2B_MAX: u64 = 0xb240;
/// The first code of the blake2s family (blake2s-8)
pub const BLAKE2S_MIN: u64 = 0xb241;
/// The last code of the blake2s family (blake2s-256)
pub const BLAKE2S_MAX: u64 = 0xb260;

/// Codes below this value are reserved for applications and
/// are always considered valid, registered or not.
pub const APP_CODE_LIMIT: u64 = 0x10;

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::builtin);

/// A single known hash function.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashFunction {
    name: String,
    code: u64,
    default_length: usize,
}

impl HashFunction {
    fn new<S: Into<String>>(name: S, code: u64, default_length: usize) -> Self {
        Self {
            name: name.into(),
            code,
            default_length,
        }
    }

    /// Find the registered hash function with the given code
    pub fn lookup(code: u64) -> Option<&'static HashFunction> {
        Registry::global().get(code)
    }

    /// Find the registered hash function with the given name
    pub fn from_name(name: &str) -> Option<&'static HashFunction> {
        Registry::global().get_by_name(name)
    }

    /// The stable, human-readable identifier of this function
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The logical multihash code of this function.
    ///
    /// Only the low byte of this value is written to the wire.
    pub fn code(&self) -> u64 {
        self.code
    }

    /// The digest length, in bytes, that this function usually produces
    pub fn default_length(&self) -> usize {
        self.default_length
    }
}

impl std::fmt::Display for HashFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:#x})", self.name, self.code)
    }
}

/// The immutable set of hash functions known to this crate.
///
/// A single instance is built on first use and shared for the
/// remainder of the process, see [`Registry::global`].
#[derive(Debug)]
pub struct Registry {
    functions: Vec<HashFunction>,
    by_code: HashMap<u64, usize>,
    by_name: HashMap<String, usize>,
}

impl Registry {
    /// The process-wide registry
    pub fn global() -> &'static Registry {
        &REGISTRY
    }

    fn builtin() -> Self {
        let mut functions = vec![
            HashFunction::new("sha1", SHA1, 20),
            HashFunction::new("sha2-256", SHA2_256, 32),
            HashFunction::new("sha2-512", SHA2_512, 64),
            HashFunction::new("sha3", SHA3, 64),
            HashFunction::new("dbl-sha2-256", DBL_SHA2_256, 32),
        ];
        functions.extend(sized_family("blake2b", BLAKE2B_MIN, BLAKE2B_MAX));
        functions.extend(sized_family("blake2s", BLAKE2S_MIN, BLAKE2S_MAX));
        functions.sort_by_key(HashFunction::code);

        let by_code = functions
            .iter()
            .enumerate()
            .map(|(index, func)| (func.code, index))
            .collect();
        let by_name = functions
            .iter()
            .enumerate()
            .map(|(index, func)| (func.name.clone(), index))
            .collect();

        tracing::trace!(count = functions.len(), "initialized multihash registry");
        Self {
            functions,
            by_code,
            by_name,
        }
    }

    /// The hash function registered under the given code, if any
    pub fn get(&self, code: u64) -> Option<&HashFunction> {
        self.by_code.get(&code).map(|index| &self.functions[*index])
    }

    /// The hash function registered under the given name, if any
    pub fn get_by_name(&self, name: &str) -> Option<&HashFunction> {
        self.by_name.get(name).map(|index| &self.functions[*index])
    }

    pub fn code_for_name(&self, name: &str) -> Option<u64> {
        self.get_by_name(name).map(HashFunction::code)
    }

    pub fn name_for_code(&self, code: u64) -> Option<&str> {
        self.get(code).map(HashFunction::name)
    }

    pub fn default_length_for_code(&self, code: u64) -> Option<usize> {
        self.get(code).map(HashFunction::default_length)
    }

    /// True if the given code has an entry in this registry.
    ///
    /// Application codes are not registered, see [`is_valid_code`].
    pub fn is_known_code(&self, code: u64) -> bool {
        self.by_code.contains_key(&code)
    }

    /// The number of registered hash functions
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Iterate all registered hash functions in ascending code order
    pub fn iter(&self) -> impl Iterator<Item = &HashFunction> {
        self.functions.iter()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a HashFunction;
    type IntoIter = std::slice::Iter<'a, HashFunction>;

    fn into_iter(self) -> Self::IntoIter {
        self.functions.iter()
    }
}

/// Generate one entry per code in `min..=max`, where each step adds
/// one byte of output, eg: blake2b-8, blake2b-16, ..., blake2b-512
fn sized_family(base: &'static str, min: u64, max: u64) -> impl Iterator<Item = HashFunction> {
    (min..=max).map(move |code| {
        let bytes = code - min + 1;
        HashFunction::new(format!("{base}-{}", bytes * 8), code, bytes as usize)
    })
}

/// The code registered for the given hash function name
pub fn code_for_name(name: &str) -> Option<u64> {
    Registry::global().code_for_name(name)
}

/// The name registered for the given code
pub fn name_for_code(code: u64) -> Option<&'static str> {
    Registry::global().name_for_code(code)
}

/// The default digest length of the given code
pub fn default_length_for_code(code: u64) -> Option<usize> {
    Registry::global().default_length_for_code(code)
}

/// True if the given code is registered
pub fn is_known_code(code: u64) -> bool {
    Registry::global().is_known_code(code)
}

/// True if the given code is in the application-reserved range
pub fn is_app_code(code: u64) -> bool {
    code < APP_CODE_LIMIT
}

/// True if the given code may be used in a multihash, either
/// because it is registered or because it is an application code
pub fn is_valid_code(code: u64) -> bool {
    is_app_code(code) || is_known_code(code)
}
