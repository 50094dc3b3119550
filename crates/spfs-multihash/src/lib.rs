// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

//! Self-describing hash digests.
//!
//! A multihash prefixes a raw digest with the code of the hash
//! function that produced it and the length of the digest, so that
//! it can be identified without any other metadata:
//!
//! ```
//! use spfs_multihash::{Multihash, SHA1};
//!
//! let multihash = Multihash::new(&[0xaa, 0xbb, 0xcc, 0xdd], SHA1).unwrap();
//! assert_eq!(multihash.to_hex(), "1104aabbccdd");
//! assert_eq!(multihash.name(), Some("sha1"));
//! ```

mod binary;
mod error;
mod multihash;
pub mod prelude;
mod registry;

#[cfg(test)]
mod fixtures;

pub use binary::{
    decode, encode, encode_name, DecodedMultihash, HEADER_SIZE, MAX_DIGEST_SIZE, MAX_SIZE,
    MIN_SIZE,
};
pub use error::{Error, Result};
pub use multihash::Multihash;
pub use registry::{
    code_for_name, default_length_for_code, is_app_code, is_known_code, is_valid_code,
    name_for_code, HashFunction, Registry, APP_CODE_LIMIT, BLAKE2B_MAX, BLAKE2B_MIN, BLAKE2S_MAX,
    BLAKE2S_MIN, DBL_SHA2_256, SHA1, SHA2_256, SHA2_512, SHA3,
};
