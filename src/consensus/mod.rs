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

//! Consensus encoding as defined by the ledger transaction format.
//!
//! This module defines traits and functions which are needed to conform to the canonical
//! transaction layout signed by users and verified by the network.
//!
//! ## Encode module
//!
//! The [`encode`] module is based on the consensus encoding of the
//! [`rust-bitcoin`](https://github.com/rust-bitcoin/rust-bitcoin) and
//! [`monero-rs`](https://github.com/monero-rs/monero-rs) libraries, with big-endian fixed
//! width fields instead of variable length integers.
//!

pub mod encode;

pub use self::encode::{
    deserialize_with, serialize, serialize_hex, serialize_with, Decodable, Encodable, Error,
    Field, ReadExt, WriteExt,
};
