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

//! Protocol parameters
//!
//! The limits and packing schemes every encoder is checked against. They are passed explicitly
//! to the encoding functions, [`Params::default`] holds the values of the deployed ledger.

use crate::util::amount::PackingScheme;

/// Number of account slots in the account tree, `2^24`.
pub const MAX_NUMBER_OF_ACCOUNTS: u64 = 1 << 24;

/// Number of registered tokens.
pub const MAX_NUMBER_OF_TOKENS: u64 = 128;

/// Encoding parameters of a ledger deployment.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Params {
    /// Account ids must be strictly below this value.
    pub max_accounts: u64,
    /// Token ids must be strictly below this value.
    pub max_tokens: u64,
    /// Packing used for transferred amounts.
    pub amount_packing: PackingScheme,
    /// Packing used for fees.
    pub fee_packing: PackingScheme,
}

impl Params {
    /// Parameters of the deployed ledger.
    pub const MAINNET: Params = Params {
        max_accounts: MAX_NUMBER_OF_ACCOUNTS,
        max_tokens: MAX_NUMBER_OF_TOKENS,
        amount_packing: PackingScheme::AMOUNT,
        fee_packing: PackingScheme::FEE,
    };
}

impl Default for Params {
    fn default() -> Params {
        Params::MAINNET
    }
}
