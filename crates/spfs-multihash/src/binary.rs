// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

use data_encoding::HEXLOWER;

use crate::registry;
use crate::{Error, Result};

#[cfg(test)]
#[path = "./binary_test.rs"]
mod binary_test;

/// The number of bytes preceding the digest (code and length)
pub const HEADER_SIZE: usize = 2;
/// The longest digest that can be described by the length byte
pub const MAX_DIGEST_SIZE: usize = 127;
/// The smallest valid multihash, a header and at least one digest byte
pub const MIN_SIZE: usize = HEADER_SIZE + 1;
/// The largest valid multihash, a header and the longest digest
pub const MAX_SIZE: usize = HEADER_SIZE + MAX_DIGEST_SIZE;

/// The parts of a multihash, as read from its binary form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecodedMultihash {
    /// The function code, as stored in the first byte
    pub code: u64,
    /// The registered name of the code, if it has one
    pub name: Option<&'static str>,
    /// The digest length, as stored in the second byte
    pub length: u8,
    /// The digest bytes following the header
    pub digest: Vec<u8>,
}

impl std::fmt::Display for DecodedMultihash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "code={:#x} name={} length={} digest={}",
            self.code,
            self.name.unwrap_or("<unknown>"),
            self.length,
            HEXLOWER.encode(&self.digest)
        )
    }
}

/// Encode a digest along with the given function code.
///
/// The length is taken from the digest itself. Codes wider than
/// one byte only have their low byte written.
pub fn encode(digest: &[u8], code: u64) -> Result<Vec<u8>> {
    if !registry::is_valid_code(code) {
        return Err(Error::UnknownCode(code));
    }
    if digest.len() > MAX_DIGEST_SIZE {
        return Err(Error::LengthNotSupported(digest.len()));
    }

    let mut buf = Vec::with_capacity(HEADER_SIZE + digest.len());
    buf.push(code as u8);
    buf.push(digest.len() as u8);
    buf.extend_from_slice(digest);
    Ok(buf)
}

/// Encode a digest along with the code of the named hash function.
pub fn encode_name(digest: &[u8], name: &str) -> Result<Vec<u8>> {
    let code =
        registry::code_for_name(name).ok_or_else(|| Error::NameNotFound(name.to_owned()))?;
    encode(digest, code)
}

/// Split a binary multihash into its parts.
///
/// Unknown codes are not an error here, the name is simply
/// left empty. Use [`crate::Multihash::cast`] to also validate
/// the code.
pub fn decode(buf: &[u8]) -> Result<DecodedMultihash> {
    if buf.len() < MIN_SIZE {
        return Err(Error::TooShort(buf.len()));
    }
    if buf.len() > MAX_SIZE {
        return Err(Error::TooLong(buf.len()));
    }

    let code = u64::from(buf[0]);
    let decoded = DecodedMultihash {
        code,
        name: registry::name_for_code(code),
        length: buf[1],
        digest: buf[HEADER_SIZE..].to_vec(),
    };
    if decoded.digest.len() != usize::from(decoded.length) {
        return Err(Error::InconsistentLength(Box::new(decoded)));
    }
    Ok(decoded)
}
