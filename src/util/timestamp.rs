// zkSync Transfer Library
// Written in 2026 by
//   zkSync Rust Contributors
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//

//! Validity window bounds.
//!
//! `validFrom` and `validUntil` are each written as an 8-byte field: four zero bytes followed
//! by the low 32 bits of the value, big-endian. Values above `u32::MAX` are truncated.

use thiserror::Error;

/// Width in bytes of an encoded time bound.
pub const TIMESTAMP_LENGTH: usize = 8;

/// Potential errors encountered when encoding time bounds.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The time bound is before the epoch.
    #[error("Negative timestamp: {0}")]
    Negative(i64),
}

/// Encode a time bound, in seconds.
pub fn encode(ts: i64) -> Result<[u8; TIMESTAMP_LENGTH], Error> {
    if ts < 0 {
        return Err(Error::Negative(ts));
    }
    let mut out = [0u8; TIMESTAMP_LENGTH];
    out[4..].copy_from_slice(&(ts as u32).to_be_bytes());
    Ok(out)
}

/// Decode an encoded time bound. The padding is not checked.
pub fn decode(bytes: &[u8; TIMESTAMP_LENGTH]) -> u32 {
    u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]])
}
