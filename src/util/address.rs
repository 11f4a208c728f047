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

//! Account addresses types and helper functions.
//!
//! An account is identified by 20 opaque bytes. Two historical namespaces share this format:
//! Ethereum addresses written with a `0x` prefix and public key hashes written with a `sync:`
//! prefix. Both decode to the same [`Address`] type, the prefix only tells which namespace the
//! string came from.
//!
//! ## Parsing an address
//!
//! ```rust
//! use std::str::FromStr;
//! use zksync_transfer::util::address::{Address, AddressPrefix, Error};
//!
//! let addr = Address::from_str("0x36615cf349d7f6344891b1e7ca7c72883f5dc049")?;
//! assert_eq!(addr.as_bytes()[0], 0x36);
//!
//! let (prefix, pkh) = Address::decode_with_prefix("sync:36615cf349d7f6344891b1e7ca7c72883f5dc049")?;
//! assert_eq!(prefix, AddressPrefix::PubKeyHash);
//! assert_eq!(pkh, addr);
//! # Ok::<(), Error>(())
//! ```
//!

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Length in bytes of a decoded address.
pub const ADDRESS_LENGTH: usize = 20;

/// Potential errors encountered when decoding addresses.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// Unknown prefix or non hexadecimal content.
    #[error("Invalid address format: {0}")]
    InvalidFormat(String),
    /// Valid hexadecimal that does not decode to 20 bytes.
    #[error("Address must be 20 bytes long, got {0}")]
    InvalidLength(usize),
}

/// Address namespace marker.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum AddressPrefix {
    /// Ethereum address, `0x`.
    Ethereum,
    /// Public key hash of a layer 2 signing key, `sync:`.
    PubKeyHash,
}

impl AddressPrefix {
    /// The prefix as written in front of the hexadecimal digits.
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressPrefix::Ethereum => "0x",
            AddressPrefix::PubKeyHash => "sync:",
        }
    }

    /// Split a prefixed address string into its namespace and hexadecimal part.
    pub fn strip(s: &str) -> Result<(AddressPrefix, &str), Error> {
        for prefix in [AddressPrefix::Ethereum, AddressPrefix::PubKeyHash] {
            if let Some(rest) = s.strip_prefix(prefix.as_str()) {
                return Ok((prefix, rest));
            }
        }
        Err(Error::InvalidFormat(
            "ETH address must start with '0x' and PubKeyHash must start with 'sync:'".to_string(),
        ))
    }
}

impl Default for AddressPrefix {
    fn default() -> AddressPrefix {
        AddressPrefix::Ethereum
    }
}

impl fmt::Display for AddressPrefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fixed_hash::construct_fixed_hash! {
    /// Account address, a fixed 20-bytes array.
    pub struct Address(ADDRESS_LENGTH);
}

impl Address {
    /// Decode a prefixed hexadecimal address and report which namespace it belongs to.
    ///
    /// Digits are consumed pairwise from left to right, each pair giving one byte, no
    /// reordering is applied.
    pub fn decode_with_prefix(s: &str) -> Result<(AddressPrefix, Address), Error> {
        let (prefix, digits) = AddressPrefix::strip(s)?;
        let bytes = hex::decode(digits).map_err(|e| Error::InvalidFormat(e.to_string()))?;
        if bytes.len() != ADDRESS_LENGTH {
            return Err(Error::InvalidLength(bytes.len()));
        }
        Ok((prefix, Address::from_slice(&bytes)))
    }

    /// Render the address with the given namespace prefix and lowercase digits.
    pub fn to_prefixed(&self, prefix: AddressPrefix) -> String {
        format!("{}{}", prefix, hex::encode(self.as_bytes()))
    }

    /// Return the raw address bytes.
    pub fn to_bytes(&self) -> [u8; ADDRESS_LENGTH] {
        self.0
    }
}

impl FromStr for Address {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::decode_with_prefix(s).map(|(_, address)| address)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;

    use serde_crate::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Address {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&self.to_prefixed(AddressPrefix::Ethereum))
        }
    }

    impl<'de> Deserialize<'de> for Address {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Address::from_str(&s).map_err(D::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use hex_literal::hex;
    use quickcheck::QuickCheck;

    use super::{Address, AddressPrefix, Error};

    #[test]
    fn decode_ethereum_address() {
        let addr = Address::from_str("0x36615cf349d7f6344891b1e7ca7c72883f5dc049").unwrap();
        assert_eq!(
            addr.to_bytes(),
            hex!("36615cf349d7f6344891b1e7ca7c72883f5dc049")
        );
    }

    #[test]
    fn parse_checks_prefix() {
        let addr: Address = "0x36615cf349d7f6344891b1e7ca7c72883f5dc049".parse().unwrap();
        assert_eq!(
            addr.to_bytes(),
            hex!("36615cf349d7f6344891b1e7ca7c72883f5dc049")
        );
        assert!(matches!(
            "36615cf349d7f6344891b1e7ca7c72883f5dc049".parse::<Address>(),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn decode_pubkey_hash() {
        let (prefix, addr) =
            Address::decode_with_prefix("sync:1234567812345678123456781234567812345678").unwrap();
        assert_eq!(prefix, AddressPrefix::PubKeyHash);
        assert_eq!(
            addr.to_bytes(),
            hex!("1234567812345678123456781234567812345678")
        );
    }

    #[test]
    fn decode_mixed_case() {
        let lower = Address::from_str("0xabcdefabcdefabcdefabcdefabcdefabcdefabcd").unwrap();
        let upper = Address::from_str("0xABCDEFabcdefABCDEFabcdefABCDEFabcdefABCD").unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn reject_unknown_prefix() {
        for s in [
            "36615cf349d7f6344891b1e7ca7c72883f5dc049",
            "0X36615cf349d7f6344891b1e7ca7c72883f5dc049",
            "zksync:36615cf349d7f6344891b1e7ca7c72883f5dc049",
            "",
        ] {
            assert!(matches!(Address::from_str(s), Err(Error::InvalidFormat(_))));
        }
    }

    #[test]
    fn reject_bad_hex() {
        // odd number of digits
        assert!(matches!(
            Address::from_str("0x36615cf349d7f6344891b1e7ca7c72883f5dc04"),
            Err(Error::InvalidFormat(_))
        ));
        assert!(matches!(
            Address::from_str("0x36615cf349d7f6344891b1e7ca7c72883f5dc0zz"),
            Err(Error::InvalidFormat(_))
        ));
        assert!(matches!(
            Address::from_str("sync:+6615cf349d7f6344891b1e7ca7c72883f5dc049"),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn reject_wrong_length() {
        assert_eq!(Address::from_str("0x"), Err(Error::InvalidLength(0)));
        assert_eq!(
            Address::from_str("0x36615cf349d7f6344891b1e7ca7c72883f5dc0"),
            Err(Error::InvalidLength(19))
        );
        assert_eq!(
            Address::from_str("sync:36615cf349d7f6344891b1e7ca7c72883f5dc04900"),
            Err(Error::InvalidLength(21))
        );
    }

    #[test]
    fn prefixed_round_trip() {
        fn internal(a: u64, b: u64, c: u32, pubkey_hash: bool) -> bool {
            let mut bytes = [0u8; 20];
            bytes[..8].copy_from_slice(&a.to_be_bytes());
            bytes[8..16].copy_from_slice(&b.to_be_bytes());
            bytes[16..].copy_from_slice(&c.to_be_bytes());
            let prefix = if pubkey_hash {
                AddressPrefix::PubKeyHash
            } else {
                AddressPrefix::Ethereum
            };
            let s = Address(bytes).to_prefixed(prefix);
            Address::decode_with_prefix(&s) == Ok((prefix, Address(bytes)))
        }

        QuickCheck::new()
            .tests(1_000)
            .quickcheck(internal as fn(u64, u64, u32, bool) -> bool);
    }
}
