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

//! Packed amounts.
//!
//! Amounts and fees travel on the wire in a lossy floating-point form: a mantissa and an
//! exponent packed side by side into a fixed number of bytes, the represented value being
//! `mantissa * base^exponent`. The layout is mantissa first (most significant bits) and the
//! exponent in the low bits, written big-endian:
//!
//! ```text
//! | mantissa (mantissa_bits) | exponent (exponent_bits) |
//! ```
//!
//! Not every integer has a representation. A value is *packable* only if it can be
//! reconstructed exactly, [`PackingScheme::pack`] refuses anything else so that a signer never
//! signs a value different from the one the network rebuilds.
//!
//! ```rust
//! use zksync_transfer::util::amount::PackingScheme;
//!
//! let fee = PackingScheme::FEE.pack_str("37500000000000")?;
//! assert_eq!(fee, vec![0x2e, 0xeb]);
//! assert_eq!(PackingScheme::FEE.unpack(&fee)?.to_string(), "37500000000000");
//! # Ok::<(), zksync_transfer::util::amount::Error>(())
//! ```
//!

use num_bigint::BigUint;
use num_traits::{One, Zero};

use thiserror::Error;

/// Potential errors encountered when packing or unpacking amounts.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// The amount is not a decimal integer.
    #[error("Invalid amount format: `{0}`")]
    InvalidFormat(String),
    /// The amount has no exact packed representation.
    #[error("Amount {0} is not packable")]
    NotPackable(String),
    /// Packed input of the wrong width.
    #[error("Packed amount must be {expected} bytes long, got {found}")]
    InvalidLength {
        /// Width of the packing scheme.
        expected: usize,
        /// Width of the given input.
        found: usize,
    },
    /// The packing parameters are unusable.
    #[error("Invalid packing scheme: {0}")]
    InvalidScheme(String),
}

/// Parse a decimal integer string into an arbitrary precision amount.
///
/// Only a non-empty run of ASCII digits is accepted: no sign, no whitespace and no digit
/// separators.
pub fn parse_decimal(s: &str) -> Result<BigUint, Error> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidFormat(s.to_string()));
    }
    BigUint::parse_bytes(s.as_bytes(), 10).ok_or_else(|| Error::InvalidFormat(s.to_string()))
}

/// Bit widths and base of a mantissa/exponent packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackingScheme {
    mantissa_bits: u32,
    exponent_bits: u32,
    exponent_base: u32,
}

impl PackingScheme {
    /// Transfer amounts: 35 bits of mantissa, 5 bits of base 10 exponent, 5 bytes.
    pub const AMOUNT: PackingScheme = PackingScheme {
        mantissa_bits: 35,
        exponent_bits: 5,
        exponent_base: 10,
    };

    /// Fees: 11 bits of mantissa, 5 bits of base 10 exponent, 2 bytes.
    pub const FEE: PackingScheme = PackingScheme {
        mantissa_bits: 11,
        exponent_bits: 5,
        exponent_base: 10,
    };

    /// Create a packing scheme, fail if the widths do not add up to whole bytes or if any
    /// parameter is out of its supported range.
    pub fn new(
        mantissa_bits: u32,
        exponent_bits: u32,
        exponent_base: u32,
    ) -> Result<PackingScheme, Error> {
        if exponent_base < 2 {
            return Err(Error::InvalidScheme(format!(
                "exponent base must be at least 2, got {}",
                exponent_base
            )));
        }
        if exponent_bits == 0 || exponent_bits > 8 {
            return Err(Error::InvalidScheme(format!(
                "exponent must be 1 to 8 bits wide, got {}",
                exponent_bits
            )));
        }
        if mantissa_bits == 0 || mantissa_bits > 64 {
            return Err(Error::InvalidScheme(format!(
                "mantissa must be 1 to 64 bits wide, got {}",
                mantissa_bits
            )));
        }
        if (mantissa_bits + exponent_bits) % 8 != 0 {
            return Err(Error::InvalidScheme(format!(
                "{} mantissa bits and {} exponent bits do not fill whole bytes",
                mantissa_bits, exponent_bits
            )));
        }
        Ok(PackingScheme {
            mantissa_bits,
            exponent_bits,
            exponent_base,
        })
    }

    /// Number of mantissa bits.
    pub fn mantissa_bits(&self) -> u32 {
        self.mantissa_bits
    }

    /// Number of exponent bits.
    pub fn exponent_bits(&self) -> u32 {
        self.exponent_bits
    }

    /// Base the exponent is applied to.
    pub fn exponent_base(&self) -> u32 {
        self.exponent_base
    }

    /// Width in bytes of a packed value.
    pub fn width(&self) -> usize {
        ((self.mantissa_bits + self.exponent_bits) / 8) as usize
    }

    /// Largest mantissa, `2^mantissa_bits - 1`.
    pub fn max_mantissa(&self) -> BigUint {
        (BigUint::one() << self.mantissa_bits as usize) - 1u32
    }

    /// Largest exponent, `2^exponent_bits - 1`.
    pub fn max_exponent(&self) -> u32 {
        (1u32 << self.exponent_bits) - 1
    }

    /// Largest representable value.
    pub fn max_value(&self) -> BigUint {
        self.max_mantissa() * BigUint::from(self.exponent_base).pow(self.max_exponent())
    }

    /// Exact decomposition of `value` with the smallest exponent, if one exists.
    fn split(&self, value: &BigUint) -> Option<(BigUint, u32)> {
        let base = BigUint::from(self.exponent_base);
        let max_mantissa = self.max_mantissa();
        let mut mantissa = value.clone();
        let mut exponent = 0u32;
        while mantissa > max_mantissa {
            if !(&mantissa % &base).is_zero() {
                return None;
            }
            mantissa /= &base;
            exponent += 1;
            if exponent > self.max_exponent() {
                return None;
            }
        }
        Some((mantissa, exponent))
    }

    /// Largest packable value not greater than `value`.
    ///
    /// Values beyond the range of the scheme saturate to [`PackingScheme::max_value`].
    pub fn closest_packable(&self, value: &BigUint) -> BigUint {
        let max_value = self.max_value();
        if *value >= max_value {
            return max_value;
        }
        let base = BigUint::from(self.exponent_base);
        let max_mantissa = self.max_mantissa();
        let mut mantissa = value.clone();
        let mut exponent = 0u32;
        while mantissa > max_mantissa {
            mantissa /= &base;
            exponent += 1;
        }
        let truncated = mantissa * base.pow(exponent);
        if exponent == 0 {
            return truncated;
        }
        // a full mantissa one exponent lower can beat the truncated digits
        let full = max_mantissa * base.pow(exponent - 1);
        truncated.max(full)
    }

    /// Whether `value` survives a pack/unpack cycle unchanged.
    pub fn is_packable(&self, value: &BigUint) -> bool {
        self.split(value).is_some()
    }

    /// Pack `value`, fail with [`Error::NotPackable`] if it has no exact representation.
    pub fn pack(&self, value: &BigUint) -> Result<Vec<u8>, Error> {
        let (mantissa, exponent) = self
            .split(value)
            .ok_or_else(|| Error::NotPackable(value.to_string()))?;

        let packed = (mantissa << self.exponent_bits as usize) | BigUint::from(exponent);
        let bytes = if packed.is_zero() {
            Vec::new()
        } else {
            packed.to_bytes_be()
        };

        let width = self.width();
        let mut out = vec![0u8; width - bytes.len()];
        out.extend_from_slice(&bytes);
        Ok(out)
    }

    /// Parse a decimal string and pack it.
    pub fn pack_str(&self, s: &str) -> Result<Vec<u8>, Error> {
        self.pack(&parse_decimal(s)?)
    }

    /// Recover the value of a packed amount.
    pub fn unpack(&self, bytes: &[u8]) -> Result<BigUint, Error> {
        if bytes.len() != self.width() {
            return Err(Error::InvalidLength {
                expected: self.width(),
                found: bytes.len(),
            });
        }
        // The exponent never spans more than the last byte.
        let exponent = u32::from(bytes[bytes.len() - 1]) & self.max_exponent();
        let mantissa = BigUint::from_bytes_be(bytes) >> self.exponent_bits as usize;
        Ok(mantissa * BigUint::from(self.exponent_base).pow(exponent))
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use quickcheck::QuickCheck;

    use super::{parse_decimal, Error, PackingScheme};

    fn big(s: &str) -> BigUint {
        parse_decimal(s).unwrap()
    }

    #[test]
    fn scheme_widths() {
        assert_eq!(PackingScheme::AMOUNT.width(), 5);
        assert_eq!(PackingScheme::FEE.width(), 2);
        assert_eq!(PackingScheme::FEE.max_mantissa(), BigUint::from(2047u32));
        assert_eq!(PackingScheme::FEE.max_exponent(), 31);
        assert_eq!(
            PackingScheme::AMOUNT.max_mantissa(),
            BigUint::from(34_359_738_367u64)
        );
    }

    #[test]
    fn reject_invalid_schemes() {
        assert!(matches!(
            PackingScheme::new(11, 5, 1),
            Err(Error::InvalidScheme(_))
        ));
        assert!(matches!(
            PackingScheme::new(12, 5, 10),
            Err(Error::InvalidScheme(_))
        ));
        assert!(matches!(
            PackingScheme::new(16, 0, 10),
            Err(Error::InvalidScheme(_))
        ));
        assert!(matches!(
            PackingScheme::new(71, 9, 10),
            Err(Error::InvalidScheme(_))
        ));
        assert_eq!(PackingScheme::new(11, 5, 10), Ok(PackingScheme::FEE));
        assert_eq!(PackingScheme::new(35, 5, 10), Ok(PackingScheme::AMOUNT));
    }

    #[test]
    fn parse_decimal_strings() {
        assert_eq!(parse_decimal("0"), Ok(BigUint::from(0u32)));
        assert_eq!(
            parse_decimal("37500000000000"),
            Ok(BigUint::from(37_500_000_000_000u64))
        );
        for bad in ["", "-1", "+1", "1_000", " 1", "1.5", "0x10", "abc"] {
            assert_eq!(parse_decimal(bad), Err(Error::InvalidFormat(bad.to_string())));
        }
    }

    #[test]
    fn pack_fee() {
        let fee = PackingScheme::FEE;
        assert_eq!(fee.pack_str("0").unwrap(), vec![0x00, 0x00]);
        // 375 * 10^11
        assert_eq!(fee.pack_str("37500000000000").unwrap(), vec![0x2e, 0xeb]);
        // 2047 * 10^0
        assert_eq!(fee.pack_str("2047").unwrap(), vec![0xff, 0xe0]);
        assert_eq!(fee.pack_str("20470").unwrap(), vec![0xff, 0xe1]);
    }

    #[test]
    fn pack_amount() {
        let amount = PackingScheme::AMOUNT;
        assert_eq!(amount.pack_str("0").unwrap(), vec![0u8; 5]);
        assert_eq!(amount.pack_str("1").unwrap(), vec![0, 0, 0, 0, 0x20]);
        assert_eq!(
            amount.pack_str("34359738367").unwrap(),
            vec![0xff, 0xff, 0xff, 0xff, 0xe0]
        );
        assert_eq!(
            amount.pack_str("343597383670").unwrap(),
            vec![0xff, 0xff, 0xff, 0xff, 0xe1]
        );
    }

    #[test]
    fn not_packable() {
        assert_eq!(
            PackingScheme::FEE.pack_str("2049"),
            Err(Error::NotPackable("2049".to_string()))
        );
        assert_eq!(
            PackingScheme::FEE.pack_str("20480"),
            Err(Error::NotPackable("20480".to_string()))
        );
        assert_eq!(
            PackingScheme::AMOUNT.pack_str("34359738369"),
            Err(Error::NotPackable("34359738369".to_string()))
        );
        // The mantissa fits only after more divisions than the exponent allows.
        let too_big = format!("1{}", "0".repeat(35));
        assert_eq!(
            PackingScheme::FEE.pack_str(&too_big),
            Err(Error::NotPackable(too_big.clone()))
        );
        assert!(matches!(
            PackingScheme::FEE.pack_str("12a"),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn closest_packable_rounds_down() {
        let fee = PackingScheme::FEE;
        assert_eq!(fee.closest_packable(&big("2049")), big("2047"));
        assert_eq!(fee.closest_packable(&big("20480")), big("20470"));
        assert_eq!(fee.closest_packable(&big("20500")), big("20500"));
        assert_eq!(fee.closest_packable(&big("37512345678901")), big("37500000000000"));
        assert_eq!(fee.closest_packable(&big("2047")), big("2047"));
        let beyond = fee.max_value() + 1u32;
        assert_eq!(fee.closest_packable(&beyond), fee.max_value());
        assert!(fee.is_packable(&fee.max_value()));
        assert!(!fee.is_packable(&big("2049")));
    }

    #[test]
    fn closest_packable_is_largest() {
        let fee = PackingScheme::FEE;
        let mut packable: Vec<u64> = (0..=3u32)
            .flat_map(|exponent| (0..=2047u64).map(move |m| m * 10u64.pow(exponent)))
            .collect();
        packable.sort_unstable();
        packable.dedup();

        for value in (0..=300_000u64).step_by(7) {
            let idx = packable.partition_point(|&p| p <= value);
            let expected = packable[idx - 1];
            assert_eq!(
                fee.closest_packable(&BigUint::from(value)),
                BigUint::from(expected),
                "closest packable to {}",
                value
            );
        }
    }

    #[test]
    fn unpack_wrong_width() {
        assert_eq!(
            PackingScheme::FEE.unpack(&[0u8; 3]),
            Err(Error::InvalidLength {
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            PackingScheme::AMOUNT.unpack(&[]),
            Err(Error::InvalidLength {
                expected: 5,
                found: 0
            })
        );
    }

    #[test]
    fn packable_values_round_trip() {
        fn internal(mantissa: u64, exponent: u8, fee: bool) -> bool {
            let scheme = if fee {
                PackingScheme::FEE
            } else {
                PackingScheme::AMOUNT
            };
            let mantissa = BigUint::from(mantissa) % (scheme.max_mantissa() + 1u32);
            let exponent = u32::from(exponent) % (scheme.max_exponent() + 1);
            let value = mantissa * BigUint::from(10u32).pow(exponent);
            match scheme.pack(&value) {
                Ok(packed) => {
                    packed.len() == scheme.width() && scheme.unpack(&packed) == Ok(value)
                }
                Err(_) => false,
            }
        }

        QuickCheck::new()
            .tests(1_000)
            .quickcheck(internal as fn(u64, u8, bool) -> bool);
    }

    #[test]
    fn closest_packable_is_packable() {
        fn internal(high: u64, low: u64) -> bool {
            let value = (BigUint::from(high) << 64usize) | BigUint::from(low);
            let scheme = PackingScheme::AMOUNT;
            let closest = scheme.closest_packable(&value);
            closest <= value
                && scheme.is_packable(&closest)
                && scheme.is_packable(&value) == (closest == value)
        }

        QuickCheck::new()
            .tests(1_000)
            .quickcheck(internal as fn(u64, u64) -> bool);
    }
}
