// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

pub use crate::binary::DecodedMultihash;
pub use crate::multihash::Multihash;
pub use crate::registry::{HashFunction, Registry};
pub use crate::Error;
