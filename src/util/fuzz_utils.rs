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

//! Fuzzing helpers
//!
//! Entry points shared by the `fuzz/` targets and the property tests below. Each function
//! returns `false` when an encoding invariant is broken and must never panic, whatever the
//! input.

use std::str::FromStr;

use crate::blockdata::transaction::{deserialize_transfer, Transfer, TxType};
use crate::consensus::encode::serialize_with;
use crate::params::Params;
use crate::util::address::{Address, AddressPrefix};
use crate::util::amount::{parse_decimal, PackingScheme};

fn u64_val_from_fuzz_data(fuzz_data: &[u8]) -> u64 {
    let mut bytes = [0u8; 8];
    let len = fuzz_data.len().min(8);
    bytes[..len].copy_from_slice(&fuzz_data[..len]);
    u64::from_le_bytes(bytes)
}

fn chunk_from_fuzz_data(fuzz_data: &[u8], start: usize, len: usize) -> &[u8] {
    let start = start.min(fuzz_data.len());
    let end = (start + len).min(fuzz_data.len());
    &fuzz_data[start..end]
}

fn digits_from_fuzz_data(fuzz_data: &[u8]) -> String {
    fuzz_data.iter().map(|b| char::from(b'0' + b % 10)).collect()
}

/// Fuzz for address decoding, called from the fuzz target
pub fn fuzz_address_decode(fuzz_data: &[u8]) -> bool {
    let s = String::from_utf8_lossy(fuzz_data);
    match Address::decode_with_prefix(&s) {
        Ok((prefix, address)) => {
            Address::decode_with_prefix(&address.to_prefixed(prefix)) == Ok((prefix, address))
        }
        Err(_) => true,
    }
}

/// Fuzz for amount packing, called from the fuzz target
pub fn fuzz_amount_pack(fuzz_data: &[u8]) -> bool {
    let (scheme, rest) = match fuzz_data.split_first() {
        Some((selector, rest)) if selector % 2 == 0 => (PackingScheme::AMOUNT, rest),
        Some((_, rest)) => (PackingScheme::FEE, rest),
        None => return true,
    };
    let value = match parse_decimal(&digits_from_fuzz_data(rest)) {
        Ok(value) => value,
        Err(_) => return rest.is_empty(),
    };

    let closest = scheme.closest_packable(&value);
    if closest > value || !scheme.is_packable(&closest) {
        return false;
    }
    match scheme.pack(&value) {
        Ok(packed) => packed.len() == scheme.width() && scheme.unpack(&packed) == Ok(value),
        Err(_) => closest != value,
    }
}

/// Fuzz for Transfer deserialization, called from the fuzz target
pub fn fuzz_transfer_deserialize(fuzz_data: &[u8]) -> bool {
    let params = Params::default();
    match deserialize_transfer(fuzz_data, &params) {
        Ok(payload) => match serialize_with(&payload, &params) {
            Ok(bytes) => bytes == fuzz_data,
            Err(_) => false,
        },
        Err(_) => true,
    }
}

/// Fuzz helper function to create a Transfer, called from the fuzz target
pub fn fuzz_create_transfer(fuzz_data: &[u8]) -> Transfer {
    let chunk = |start: usize, len: usize| chunk_from_fuzz_data(fuzz_data, start, len);
    let prefix = if u64_val_from_fuzz_data(chunk(0, 1)) % 2 == 0 {
        AddressPrefix::Ethereum
    } else {
        AddressPrefix::PubKeyHash
    };
    let valid_from = u64_val_from_fuzz_data(chunk(70, 8)) as i64;
    let valid_until = u64_val_from_fuzz_data(chunk(78, 8)) as i64;

    Transfer {
        tx_type: TxType::Transfer,
        account_id: u64_val_from_fuzz_data(chunk(1, 4)),
        from: format!("{}{}", prefix, hex::encode(chunk(5, 20))),
        to: format!("{}{}", prefix, hex::encode(chunk(25, 20))),
        token: u64_val_from_fuzz_data(chunk(45, 1)),
        amount: digits_from_fuzz_data(chunk(46, 12)),
        fee: digits_from_fuzz_data(chunk(58, 4)),
        nonce: u64_val_from_fuzz_data(chunk(62, 8)),
        signature: None,
        valid_from,
        valid_until,
    }
}

/// Fuzz for Transfer serialization, called from the fuzz target
pub fn fuzz_transfer_serialize(fuzz_data: &[u8]) -> bool {
    let params = Params::default();
    let transfer = fuzz_create_transfer(fuzz_data);
    let first = transfer.serialize_with(&params);
    if first != transfer.serialize_with(&params) {
        return false;
    }
    match first {
        Ok(bytes) => {
            let payload = match transfer.payload(&params) {
                Ok(payload) => payload,
                Err(_) => return false,
            };
            bytes.len() == Transfer::encoded_len(&params)
                && Address::from_str(&transfer.from).ok() == Some(payload.from)
                && bytes[5..25] == payload.from.to_bytes()
                && parse_decimal(&transfer.amount).ok() == Some(payload.amount.clone())
                && deserialize_transfer(&bytes, &params) == Ok(payload)
        }
        // every validation failure names its field
        Err(e) => e.field().is_some(),
    }
}
