// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

use std::fmt::Display;

use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};
use serde::{Deserialize, Serialize};

use crate::binary::{self, DecodedMultihash, HEADER_SIZE};
use crate::{registry, Error, Result};

#[cfg(test)]
#[path = "./multihash_test.rs"]
mod multihash_test;

/// A validated, self-describing digest in its binary form.
///
/// The bytes are laid out as `[code][length][digest...]`. Every
/// instance is known to decode cleanly and to carry a code that is
/// either registered or reserved for applications, which is why
/// the only ways to create one go through [`Multihash::cast`].
#[derive(PartialEq, Eq, Hash, Clone, Ord, PartialOrd)]
pub struct Multihash(Vec<u8>);

impl Multihash {
    /// Validate the given bytes as a multihash, taking ownership of them.
    pub fn cast<B: Into<Vec<u8>>>(buf: B) -> Result<Self> {
        let buf = buf.into();
        let decoded = binary::decode(&buf)?;
        if !registry::is_valid_code(decoded.code) {
            return Err(Error::UnknownCode(decoded.code));
        }
        Ok(Self(buf))
    }

    /// Create a multihash from a digest and the code of the function
    /// that produced it.
    ///
    /// Wide codes are truncated to their low byte when encoded, and the
    /// truncated code must itself be valid for the result to be accepted.
    pub fn new(digest: &[u8], code: u64) -> Result<Self> {
        Self::cast(binary::encode(digest, code)?)
    }

    /// Create a multihash from a digest and the name of the function
    /// that produced it.
    pub fn from_name(digest: &[u8], name: &str) -> Result<Self> {
        Self::cast(binary::encode_name(digest, name)?)
    }

    /// Parse a hex encoded multihash.
    pub fn from_hex<S: AsRef<str>>(source: S) -> Result<Self> {
        let bytes = HEXLOWER_PERMISSIVE
            .decode(source.as_ref().as_bytes())
            .map_err(Error::InvalidHex)?;
        Self::cast(bytes)
    }

    /// Parse a base58 encoded multihash.
    pub fn from_b58<S: AsRef<str>>(source: S) -> Result<Self> {
        let bytes = bs58::decode(source.as_ref())
            .into_vec()
            .map_err(Error::InvalidBase58)?;
        if bytes.is_empty() {
            return Err(Error::InvalidMultihash);
        }
        Self::cast(bytes)
    }

    /// The lowercase hex encoding of this multihash
    pub fn to_hex(&self) -> String {
        HEXLOWER.encode(&self.0)
    }

    /// The base58 (bitcoin alphabet) encoding of this multihash
    pub fn to_b58(&self) -> String {
        bs58::encode(&self.0).into_string()
    }

    /// The function code of this multihash, as stored on the wire
    pub fn code(&self) -> u64 {
        u64::from(self.0[0])
    }

    /// The registered name of this multihash's function.
    ///
    /// Application codes have no name.
    pub fn name(&self) -> Option<&'static str> {
        registry::name_for_code(self.code())
    }

    /// The raw digest, without the code and length header
    pub fn digest(&self) -> &[u8] {
        &self.0[HEADER_SIZE..]
    }

    /// Split this multihash into its parts.
    pub fn decode(&self) -> DecodedMultihash {
        let digest = self.digest();
        DecodedMultihash {
            code: self.code(),
            name: self.name(),
            length: self.0[1],
            digest: digest.to_vec(),
        }
    }

    /// Yields a view of the underlying bytes for this multihash
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_ref()
    }

    /// Extract the raw bytes of this multihash
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl std::ops::Deref for Multihash {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0[..]
    }
}

impl AsRef<[u8]> for Multihash {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl From<Multihash> for Vec<u8> {
    fn from(multihash: Multihash) -> Self {
        multihash.0
    }
}

impl TryFrom<Vec<u8>> for Multihash {
    type Error = Error;

    fn try_from(buf: Vec<u8>) -> Result<Self> {
        Self::cast(buf)
    }
}

impl TryFrom<&[u8]> for Multihash {
    type Error = Error;

    fn try_from(buf: &[u8]) -> Result<Self> {
        Self::cast(buf)
    }
}

impl std::str::FromStr for Multihash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Display for Multihash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::fmt::Debug for Multihash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Multihash({})", self.to_hex())
    }
}

impl Serialize for Multihash {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_b58())
    }
}

impl<'de> Deserialize<'de> for Multihash {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        /// Visits a serialized string, decoding it as a base58 multihash
        struct StringVisitor;

        impl serde::de::Visitor<'_> for StringVisitor {
            type Value = Multihash;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("base58 encoded multihash")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Multihash, E>
            where
                E: serde::de::Error,
            {
                Multihash::from_b58(value).map_err(|_| {
                    serde::de::Error::invalid_value(serde::de::Unexpected::Str(value), &self)
                })
            }
        }
        deserializer.deserialize_str(StringVisitor)
    }
}
