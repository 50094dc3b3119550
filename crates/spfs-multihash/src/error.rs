// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

use miette::Diagnostic;
use thiserror::Error;

use crate::binary::DecodedMultihash;
use crate::{MAX_DIGEST_SIZE, MAX_SIZE, MIN_SIZE};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Diagnostic, Debug, Error)]
#[diagnostic(
    url(
        "https://spkenv.dev/error_codes#{}",
        self.code().unwrap_or_else(|| Box::new("spfs::multihash"))
    )
)]
pub enum Error {
    #[error("Unknown multihash code: {0:#x}")]
    #[diagnostic(
        code("spfs::multihash::unknown_code"),
        help("Codes below 0x10 are reserved for applications, all others must be registered")
    )]
    UnknownCode(u64),
    #[error(
        "Multihash too short, must be at least {} bytes, got {0}",
        MIN_SIZE
    )]
    #[diagnostic(code("spfs::multihash::too_short"))]
    TooShort(usize),
    #[error(
        "Multihash too long, must be at most {} bytes, got {0}",
        MAX_SIZE
    )]
    #[diagnostic(code("spfs::multihash::too_long"))]
    TooLong(usize),
    #[error(
        "Multihash does not support digests longer than {} bytes, got {0}",
        MAX_DIGEST_SIZE
    )]
    #[diagnostic(code("spfs::multihash::length_not_supported"))]
    LengthNotSupported(usize),
    #[error("Multihash length inconsistent: {0}")]
    #[diagnostic(code("spfs::multihash::inconsistent_length"))]
    InconsistentLength(Box<DecodedMultihash>),
    #[error("Input is not a valid multihash")]
    #[diagnostic(code("spfs::multihash::invalid"))]
    InvalidMultihash,
    #[error("Unknown hash function name: {0:?}")]
    #[diagnostic(code("spfs::multihash::name_not_found"))]
    NameNotFound(String),
    #[error("Invalid hex encoded multihash")]
    #[diagnostic(code("spfs::multihash::invalid_hex"))]
    InvalidHex(#[source] data_encoding::DecodeError),
    #[error("Invalid base58 encoded multihash")]
    #[diagnostic(code("spfs::multihash::invalid_base58"))]
    InvalidBase58(#[source] bs58::decode::Error),
}

impl Error {
    /// The partially decoded value carried by an
    /// [`Error::InconsistentLength`], if this is one.
    pub fn decoded(&self) -> Option<&DecodedMultihash> {
        match self {
            Error::InconsistentLength(dm) => Some(dm.as_ref()),
            _ => None,
        }
    }
}
