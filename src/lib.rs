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

//! # zkSync Transfer Library
//!
//! This is a library for the canonical serialization of zkSync Transfer transactions. The
//! produced bytes are what senders sign and what contracts, wallets and nodes verify, so the
//! layout is bit for bit fixed: field order, widths, address decoding and amount packing are
//! all consensus rules.
//!
//! Encoding is pure and validating. Each field is checked against the protocol [`Params`] in
//! wire order and the first invalid field aborts the whole serialization, no partial output is
//! ever returned.
//!
//! ```rust
//! use zksync_transfer::{Transfer, TxType};
//!
//! let tx = Transfer {
//!     tx_type: TxType::Transfer,
//!     account_id: 1,
//!     from: "0x36615cf349d7f6344891b1e7ca7c72883f5dc049".to_string(),
//!     to: "0x1234567812345678123456781234567812345678".to_string(),
//!     token: 0,
//!     amount: "0".to_string(),
//!     fee: "37500000000000".to_string(),
//!     nonce: 2,
//!     ..Default::default()
//! };
//! assert_eq!(tx.serialize()?.len(), 74);
//! # Ok::<(), zksync_transfer::consensus::Error>(())
//! ```
//!
//! ## Caution
//!
//! The Software is provided “as is”, without warranty of any kind, express or
//! implied, including but not limited to the warranties of merchantability,
//! fitness for a particular purpose and noninfringement. In no event shall the
//! authors or copyright holders be liable for any claim, damages or other
//! liability, whether in an action of contract, tort or otherwise, arising
//! from, out of or in connection with the software or the use or other dealings
//! in the Software.
//!

// Coding conventions
#![forbid(unsafe_code)]
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(unused_mut)]
#![deny(missing_docs)]

pub mod blockdata;
pub mod consensus;
pub mod hash;
pub mod params;
pub mod util;

pub use blockdata::transaction::deserialize_transfer;
pub use blockdata::transaction::SignedTransaction;
pub use blockdata::transaction::Transfer;
pub use blockdata::transaction::TransferPayload;
pub use blockdata::transaction::TxType;
pub use hash::TxHash;
pub use params::Params;
pub use util::address::Address;
