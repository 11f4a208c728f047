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

//! Transfer transaction
//!
//! This module supports serializing Transfer transactions into the canonical byte layout that
//! is signed by the sender and checked by verifiers, and reading that layout back.
//!
//! | Field        | Encoding                                   | Width   |
//! |--------------|--------------------------------------------|---------|
//! | type tag     | [`TRANSFER_TX_TYPE`]                       | 1       |
//! | `accountId`  | big-endian uint                            | 4       |
//! | `from`       | raw address                                | 20      |
//! | `to`         | raw address                                | 20      |
//! | `token`      | big-endian uint                            | 2       |
//! | `amount`     | packed, [`PackingScheme::AMOUNT`]          | 5       |
//! | `fee`        | packed, [`PackingScheme::FEE`]             | 2       |
//! | `nonce`      | big-endian uint                            | 4       |
//! | `validFrom`  | zero padding (4) + big-endian uint (4)     | 8       |
//! | `validUntil` | zero padding (4) + big-endian uint (4)     | 8       |
//!
//! ```rust
//! use zksync_transfer::{Params, Transfer, TxType};
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
//!     signature: None,
//!     valid_from: 0,
//!     valid_until: 0,
//! };
//!
//! let bytes = tx.serialize()?;
//! assert_eq!(bytes.len(), Transfer::encoded_len(&Params::default()));
//! # Ok::<(), zksync_transfer::consensus::Error>(())
//! ```
//!

use std::io;
use std::str::FromStr;

use num_bigint::BigUint;
use sealed::sealed;
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::consensus::encode::{
    self, encode_account_id, encode_token_id, Decodable, Error, Field, ReadExt, WriteExt,
};
use crate::hash::TxHash;
use crate::params::Params;
use crate::util::address::{Address, ADDRESS_LENGTH};
use crate::util::amount::{self, PackingScheme};
use crate::util::timestamp::{self, TIMESTAMP_LENGTH};

/// Operation code of a Transfer in the ledger.
pub const TRANSFER_TX_TYPE: u8 = 5;

/// Transaction type, as named in request documents.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(crate = "serde_crate"))]
pub enum TxType {
    /// Transfer of tokens between two accounts.
    Transfer,
}

impl TxType {
    /// Leading byte of the serialized transaction.
    pub fn tag(&self) -> u8 {
        match self {
            TxType::Transfer => TRANSFER_TX_TYPE,
        }
    }
}

impl Default for TxType {
    fn default() -> TxType {
        TxType::Transfer
    }
}

/// Layer 2 signature over the serialized transaction, carried as is.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(crate = "serde_crate", rename_all = "camelCase")
)]
pub struct TxSignature {
    /// Hex encoded public key of the signer.
    pub pub_key: String,
    /// Hex encoded signature.
    pub signature: String,
}

/// Layer 1 signature of the transaction envelope, carried as is.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(crate = "serde_crate"))]
pub struct EthereumSignature {
    /// Signature kind, `EthereumSignature` for plain ECDSA.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub sig_type: String,
    /// `0x` prefixed signature.
    pub signature: String,
}

/// A Transfer request as received from the sender.
///
/// Fields are kept in their request form, validation happens when the transaction is
/// encoded.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(crate = "serde_crate", rename_all = "camelCase")
)]
pub struct Transfer {
    /// Transaction type
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub tx_type: TxType,
    /// Sender account id
    pub account_id: u64,
    /// Sender address, `0x` or `sync:` prefixed
    pub from: String,
    /// Recipient address, `0x` or `sync:` prefixed
    pub to: String,
    /// Token id
    pub token: u64,
    /// Decimal amount
    pub amount: String,
    /// Decimal fee
    pub fee: String,
    /// Sender nonce, only the low 32 bits are encoded
    pub nonce: u64,
    /// Sender signature, absent until the transaction is signed
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub signature: Option<TxSignature>,
    /// Transaction is valid from this time, in seconds
    #[cfg_attr(feature = "serde", serde(default))]
    pub valid_from: i64,
    /// Transaction is valid until this time, in seconds
    #[cfg_attr(feature = "serde", serde(default))]
    pub valid_until: i64,
}

impl Transfer {
    /// Length of a serialized Transfer under the given parameters.
    pub fn encoded_len(params: &Params) -> usize {
        1 + 4
            + 2 * ADDRESS_LENGTH
            + 2
            + params.amount_packing.width()
            + params.fee_packing.width()
            + 4
            + 2 * TIMESTAMP_LENGTH
    }

    /// Validate every field, in wire order, and return their typed values.
    ///
    /// The first invalid field aborts with an error attributed to that field.
    pub fn payload(&self, params: &Params) -> Result<TransferPayload, Error> {
        let account_id =
            u32::from_be_bytes(encode_account_id(self.account_id, params.max_accounts)?);
        let from = decode_address(Field::From, &self.from)?;
        let to = decode_address(Field::To, &self.to)?;
        let token = u16::from_be_bytes(encode_token_id(self.token, params.max_tokens)?);
        let amount = packable_amount(Field::Amount, &self.amount, &params.amount_packing)?;
        let fee = packable_amount(Field::Fee, &self.fee, &params.fee_packing)?;
        let valid_from = time_bound(Field::ValidFrom, self.valid_from)?;
        let valid_until = time_bound(Field::ValidUntil, self.valid_until)?;

        Ok(TransferPayload {
            account_id,
            from,
            to,
            token,
            amount,
            fee,
            nonce: self.nonce as u32,
            valid_from,
            valid_until,
        })
    }

    /// Serialize with explicit parameters.
    pub fn serialize_with(&self, params: &Params) -> Result<Vec<u8>, Error> {
        encode::serialize_with(self, params)
    }

    /// Serialize with the default parameters.
    pub fn serialize(&self) -> Result<Vec<u8>, Error> {
        self.serialize_with(&Params::default())
    }

    /// Keccak-256 of the serialized transaction.
    pub fn tx_hash(&self, params: &Params) -> Result<TxHash, Error> {
        Ok(TxHash::hash(&self.serialize_with(params)?))
    }
}

fn decode_address(field: Field, s: &str) -> Result<Address, Error> {
    Address::from_str(s).map_err(|source| Error::Address { field, source })
}

fn packable_amount(field: Field, s: &str, scheme: &PackingScheme) -> Result<BigUint, Error> {
    let value = amount::parse_decimal(s).map_err(|source| Error::Amount { field, source })?;
    if !scheme.is_packable(&value) {
        return Err(Error::Amount {
            field,
            source: amount::Error::NotPackable(s.to_string()),
        });
    }
    Ok(value)
}

fn time_bound(field: Field, ts: i64) -> Result<u32, Error> {
    match timestamp::encode(ts) {
        Ok(bytes) => Ok(timestamp::decode(&bytes)),
        Err(timestamp::Error::Negative(value)) => Err(Error::NegativeTimestamp { field, value }),
    }
}

#[sealed]
impl encode::Encodable for Transfer {
    fn consensus_encode<W: io::Write + ?Sized>(
        &self,
        w: &mut W,
        params: &Params,
    ) -> Result<usize, Error> {
        let payload = match self.payload(params) {
            Ok(payload) => payload,
            Err(e) => {
                debug!(
                    account_id = self.account_id,
                    nonce = self.nonce,
                    field = ?e.field(),
                    error = %e,
                    "failed to encode transfer"
                );
                return Err(e);
            }
        };
        let len = encode::Encodable::consensus_encode(&payload, w, params)?;
        trace!(account_id = self.account_id, nonce = self.nonce, len, "encoded transfer");
        Ok(len)
    }
}

/// Typed content of a serialized Transfer.
///
/// Obtained from a request with [`Transfer::payload`] or read back from bytes with
/// [`deserialize_transfer`]. Integer fields hold exactly what goes on the wire, so the nonce
/// and time bounds are already truncated to 32 bits.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TransferPayload {
    /// Sender account id
    pub account_id: u32,
    /// Sender address
    pub from: Address,
    /// Recipient address
    pub to: Address,
    /// Token id
    pub token: u16,
    /// Transferred amount
    pub amount: BigUint,
    /// Fee
    pub fee: BigUint,
    /// Sender nonce
    pub nonce: u32,
    /// Lower bound of the validity window
    pub valid_from: u32,
    /// Upper bound of the validity window
    pub valid_until: u32,
}

#[sealed]
impl encode::Encodable for TransferPayload {
    fn consensus_encode<W: io::Write + ?Sized>(
        &self,
        w: &mut W,
        params: &Params,
    ) -> Result<usize, Error> {
        let account_id = encode_account_id(u64::from(self.account_id), params.max_accounts)?;
        let token = encode_token_id(u64::from(self.token), params.max_tokens)?;
        let amount = params
            .amount_packing
            .pack(&self.amount)
            .map_err(|source| Error::Amount {
                field: Field::Amount,
                source,
            })?;
        let fee = params
            .fee_packing
            .pack(&self.fee)
            .map_err(|source| Error::Amount {
                field: Field::Fee,
                source,
            })?;

        w.emit_u8(TRANSFER_TX_TYPE)?;
        w.emit_slice(&account_id)?;
        let mut len = 1 + account_id.len();
        len += encode::Encodable::consensus_encode(&self.from, w, params)?;
        len += encode::Encodable::consensus_encode(&self.to, w, params)?;
        w.emit_slice(&token)?;
        w.emit_slice(&amount)?;
        w.emit_slice(&fee)?;
        w.emit_uint_be(u64::from(self.nonce), 4)?;
        len += token.len() + amount.len() + fee.len() + 4;
        for bound in [self.valid_from, self.valid_until] {
            w.emit_slice(&[0u8; TIMESTAMP_LENGTH - 4])?;
            w.emit_uint_be(u64::from(bound), 4)?;
            len += TIMESTAMP_LENGTH;
        }
        Ok(len)
    }
}

impl Decodable for TransferPayload {
    fn consensus_decode<R: io::Read + ?Sized>(r: &mut R, params: &Params) -> Result<Self, Error> {
        let tag = r.read_u8()?;
        if tag != TRANSFER_TX_TYPE {
            return Err(Error::ParseFailed(format!(
                "unexpected transaction type {}, expected {}",
                tag, TRANSFER_TX_TYPE
            )));
        }
        let account_id = r.read_u32_be()?;
        encode_account_id(u64::from(account_id), params.max_accounts)?;
        let from = Address::consensus_decode(r, params)?;
        let to = Address::consensus_decode(r, params)?;
        let token = r.read_u16_be()?;
        encode_token_id(u64::from(token), params.max_tokens)?;
        let amount = read_packed(r, Field::Amount, &params.amount_packing)?;
        let fee = read_packed(r, Field::Fee, &params.fee_packing)?;
        let nonce = r.read_u32_be()?;
        let valid_from = read_time_bound(r, Field::ValidFrom)?;
        let valid_until = read_time_bound(r, Field::ValidUntil)?;

        Ok(TransferPayload {
            account_id,
            from,
            to,
            token,
            amount,
            fee,
            nonce,
            valid_from,
            valid_until,
        })
    }
}

fn read_packed<R: io::Read + ?Sized>(
    r: &mut R,
    field: Field,
    scheme: &PackingScheme,
) -> Result<BigUint, Error> {
    let mut bytes = vec![0u8; scheme.width()];
    r.read_slice(&mut bytes)?;
    let value = scheme
        .unpack(&bytes)
        .map_err(|source| Error::Amount { field, source })?;
    // one byte string per value: the repacked form must match what was read
    match scheme.pack(&value) {
        Ok(canonical) if canonical == bytes => Ok(value),
        _ => Err(Error::ParseFailed(format!(
            "non-canonical packed `{}`: {}",
            field,
            hex::encode(&bytes)
        ))),
    }
}

fn read_time_bound<R: io::Read + ?Sized>(r: &mut R, field: Field) -> Result<u32, Error> {
    let mut bytes = [0u8; TIMESTAMP_LENGTH];
    r.read_slice(&mut bytes)?;
    if bytes[..4] != [0u8; 4] {
        return Err(Error::ParseFailed(format!(
            "non-zero padding in `{}`: {}",
            field,
            hex::encode(bytes)
        )));
    }
    Ok(timestamp::decode(&bytes))
}

/// Read a serialized Transfer back, fail on trailing bytes.
pub fn deserialize_transfer(data: &[u8], params: &Params) -> Result<TransferPayload, Error> {
    encode::deserialize_with(data, params)
}

/// A signed Transfer with its Ethereum envelope signature, as submitted to the network.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(crate = "serde_crate", rename_all = "camelCase")
)]
pub struct SignedTransaction {
    /// The transaction
    pub tx: Transfer,
    /// Envelope signature, if any
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub ethereum_signature: Option<EthereumSignature>,
}
