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

//! Consensus-encodable types and errors.
//!
//! This represent the core logic for serializing transactions to conform to the ledger
//! consensus rules. Anything that gets signed must be encoded using the [`Encodable`] trait,
//! since the bytes must be the same for every signer and verifier.
//!
//! Unlike a plain wire format, encoding validates: every field is range checked against the
//! [`Params`] in use and an encoder either produces the complete byte string or an [`Error`]
//! naming the first offending field.
//!

use hex::encode as hex_encode;

use std::{fmt, io};

use sealed::sealed;
use thiserror::Error;

use crate::params::Params;
use crate::util::address::{Address, Error as AddressError};
use crate::util::amount::Error as AmountError;

/// Transaction fields, as named in request documents.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Field {
    /// Sender account id.
    AccountId,
    /// Sender address.
    From,
    /// Recipient address.
    To,
    /// Token id.
    Token,
    /// Transferred amount.
    Amount,
    /// Fee paid to the operator.
    Fee,
    /// Sender nonce.
    Nonce,
    /// Lower bound of the validity window.
    ValidFrom,
    /// Upper bound of the validity window.
    ValidUntil,
}

impl Field {
    /// Name of the field in request documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::AccountId => "accountId",
            Field::From => "from",
            Field::To => "to",
            Field::Token => "token",
            Field::Amount => "amount",
            Field::Fee => "fee",
            Field::Nonce => "nonce",
            Field::ValidFrom => "validFrom",
            Field::ValidUntil => "validUntil",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors encountered when encoding or decoding data.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// And I/O error.
    #[error("IO error: {0}")]
    Io(String),
    /// Account id does not fit in the account tree.
    #[error("AccountId {value} is too big, must be below {max}")]
    AccountIdOutOfRange {
        /// The rejected account id.
        value: u64,
        /// Exclusive upper bound.
        max: u64,
    },
    /// Token id is not in the token registry range.
    #[error("TokenId {value} is too big, must be below {max}")]
    TokenIdOutOfRange {
        /// The rejected token id.
        value: u64,
        /// Exclusive upper bound.
        max: u64,
    },
    /// An address field failed to decode.
    #[error("Invalid `{field}` address: {source}")]
    Address {
        /// The address field.
        field: Field,
        /// Address error.
        source: AddressError,
    },
    /// An amount field is malformed or not packable.
    #[error("Invalid `{field}`: {source}")]
    Amount {
        /// The amount field.
        field: Field,
        /// Amount error.
        source: AmountError,
    },
    /// A time bound is negative.
    #[error("Negative timestamp for `{field}`: {value}")]
    NegativeTimestamp {
        /// The time bound field.
        field: Field,
        /// The rejected value.
        value: i64,
    },
    /// A generic parsing error.
    #[error("Parsing error: {0}")]
    ParseFailed(String),
}

impl Error {
    /// The transaction field the error is attributed to, if any.
    pub fn field(&self) -> Option<Field> {
        match *self {
            Error::AccountIdOutOfRange { .. } => Some(Field::AccountId),
            Error::TokenIdOutOfRange { .. } => Some(Field::Token),
            Error::Address { field, .. }
            | Error::Amount { field, .. }
            | Error::NegativeTimestamp { field, .. } => Some(field),
            Error::Io(_) | Error::ParseFailed(_) => None,
        }
    }
}

#[doc(hidden)]
impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error {
        Error::Io(e.to_string())
    }
}

/// Big-endian representation of `value` on exactly `width` bytes.
///
/// The value is laid out on 8 bytes and the low `width` bytes are kept, higher bytes are
/// silently dropped. Callers range check before encoding. Widths above 8 are zero padded.
pub fn uint_to_be_bytes(value: u64, width: usize) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    if width <= bytes.len() {
        bytes[bytes.len() - width..].to_vec()
    } else {
        let mut out = vec![0u8; width - bytes.len()];
        out.extend_from_slice(&bytes);
        out
    }
}

/// Encode an account id on 4 bytes, fail if it is not below `max` or does not fit the width.
pub fn encode_account_id(id: u64, max: u64) -> Result<[u8; 4], Error> {
    let out_of_range = || Error::AccountIdOutOfRange { value: id, max };
    if id >= max {
        return Err(out_of_range());
    }
    let id = u32::try_from(id).map_err(|_| out_of_range())?;
    Ok(id.to_be_bytes())
}

/// Encode a token id on 2 bytes, fail if it is not below `max` or does not fit the width.
pub fn encode_token_id(id: u64, max: u64) -> Result<[u8; 2], Error> {
    let out_of_range = || Error::TokenIdOutOfRange { value: id, max };
    if id >= max {
        return Err(out_of_range());
    }
    let id = u16::try_from(id).map_err(|_| out_of_range())?;
    Ok(id.to_be_bytes())
}

/// Encode an object into a vector of bytes with the default parameters.
pub fn serialize<T: Encodable + ?Sized>(data: &T) -> Result<Vec<u8>, Error> {
    serialize_with(data, &Params::default())
}

/// Encode an object into a vector of bytes.
pub fn serialize_with<T: Encodable + ?Sized>(data: &T, params: &Params) -> Result<Vec<u8>, Error> {
    let mut encoder = Vec::new();
    let len = data.consensus_encode(&mut encoder, params)?;
    debug_assert_eq!(len, encoder.len());
    Ok(encoder)
}

/// Encode an object into a hex-encoded string.
pub fn serialize_hex<T: Encodable + ?Sized>(data: &T, params: &Params) -> Result<String, Error> {
    Ok(hex_encode(serialize_with(data, params)?))
}

/// Deserialize an object from a byte slice, will error if said deserialization doesn't consume
/// the entire slice.
pub fn deserialize_with<T: Decodable>(data: &[u8], params: &Params) -> Result<T, Error> {
    let mut decoder = io::Cursor::new(data);
    let rv = T::consensus_decode(&mut decoder, params)?;
    let consumed = decoder.position() as usize;

    // Fail if data are not consumed entirely.
    if consumed == data.len() {
        Ok(rv)
    } else {
        Err(Error::ParseFailed(format!(
            "data not consumed entirely when explicitly deserializing: input data {}, consumed {}",
            data.len(),
            consumed
        )))
    }
}

/// Extensions of [`io::Write`] to encode data as per the ledger consensus.
pub trait WriteExt: io::Write {
    /// Output a big-endian uint on `width` bytes, see [`uint_to_be_bytes`].
    fn emit_uint_be(&mut self, v: u64, width: usize) -> Result<(), io::Error>;
    /// Output a 8-bit uint.
    fn emit_u8(&mut self, v: u8) -> Result<(), io::Error>;
    /// Output a byte slice.
    fn emit_slice(&mut self, v: &[u8]) -> Result<(), io::Error>;
}

/// Extensions of [`io::Read`] to decode data as per the ledger consensus.
pub trait ReadExt: io::Read {
    /// Read a big-endian 32-bit uint.
    fn read_u32_be(&mut self) -> Result<u32, Error>;
    /// Read a big-endian 16-bit uint.
    fn read_u16_be(&mut self) -> Result<u16, Error>;
    /// Read a 8-bit uint.
    fn read_u8(&mut self) -> Result<u8, Error>;
    /// Read a byte slice.
    fn read_slice(&mut self, slice: &mut [u8]) -> Result<(), Error>;
}

impl<W: io::Write + ?Sized> WriteExt for W {
    #[inline]
    fn emit_uint_be(&mut self, v: u64, width: usize) -> Result<(), io::Error> {
        self.write_all(&uint_to_be_bytes(v, width))
    }

    #[inline]
    fn emit_u8(&mut self, v: u8) -> Result<(), io::Error> {
        self.write_all(&[v])
    }

    #[inline]
    fn emit_slice(&mut self, v: &[u8]) -> Result<(), io::Error> {
        self.write_all(v)
    }
}

macro_rules! decoder_fn {
    ($name:ident, $val_type:ty, $byte_len: expr) => {
        #[inline]
        fn $name(&mut self) -> Result<$val_type, Error> {
            let mut val = [0; $byte_len];
            self.read_exact(&mut val[..])?;
            Ok(<$val_type>::from_be_bytes(val))
        }
    };
}

impl<R: io::Read + ?Sized> ReadExt for R {
    decoder_fn!(read_u32_be, u32, 4);
    decoder_fn!(read_u16_be, u16, 2);
    decoder_fn!(read_u8, u8, 1);

    #[inline]
    fn read_slice(&mut self, slice: &mut [u8]) -> Result<(), Error> {
        self.read_exact(slice).map_err(Error::from)
    }
}

/// Data which can be encoded in a consensus-consistent way.
///
/// ## Sealed trait
/// This trait is sealed and cannot be implemented for types outside of this crate. This is
/// done to ensure every implementation validates before writing anything.
#[sealed(pub(crate))]
pub trait Encodable {
    /// Encode an object with a well-defined format and return the number of bytes written.
    ///
    /// Nothing is written unless every field is valid, the only errors after the first byte
    /// is written are the ones of the writer itself.
    fn consensus_encode<W: io::Write + ?Sized>(
        &self,
        w: &mut W,
        params: &Params,
    ) -> Result<usize, Error>;
}

/// Data which can be decoded in a consensus-consistent way.
pub trait Decodable: Sized {
    /// Decode an object with a well-defined format.
    fn consensus_decode<R: io::Read + ?Sized>(r: &mut R, params: &Params) -> Result<Self, Error>;
}

#[sealed]
impl Encodable for Address {
    #[inline]
    fn consensus_encode<W: io::Write + ?Sized>(
        &self,
        w: &mut W,
        _params: &Params,
    ) -> Result<usize, Error> {
        w.emit_slice(self.as_bytes())?;
        Ok(self.as_bytes().len())
    }
}

impl Decodable for Address {
    #[inline]
    fn consensus_decode<R: io::Read + ?Sized>(r: &mut R, _params: &Params) -> Result<Self, Error> {
        let mut bytes = [0u8; 20];
        r.read_slice(&mut bytes)?;
        Ok(Address(bytes))
    }
}
