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

//! Hash support
//!
//! Keccak-256 digests of canonical transaction bytes.
//!

use tiny_keccak::{Hasher, Keccak};

fixed_hash::construct_fixed_hash!(
    /// Result of a Keccak-256
    pub struct TxHash(32);
);

impl TxHash {
    /// Create a null hash with all zeros
    pub fn null_hash() -> TxHash {
        TxHash([0u8; 32])
    }

    /// Hash a stream of bytes with Keccak 256
    pub fn hash(input: &[u8]) -> TxHash {
        let mut keccak = Keccak::v256();
        let mut out = [0u8; 32];
        keccak.update(input);
        keccak.finalize(&mut out);
        TxHash(out)
    }

    /// Return the hash value
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }
}
