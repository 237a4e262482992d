// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Decimal-string parsing into canonical BLS12-381 base field elements.

use std::str::FromStr;

use ark_bls12_381::{Fq, Fq2};
use ark_ff::{BigInteger384, PrimeField};
use num_bigint::{BigInt, BigUint};

use crate::error::{VkError, VkResult};

/// Parse a decimal string into a canonical base field element.
///
/// The exporter is expected to emit already-reduced values. Anything
/// negative or `>=` the field modulus fails with [`VkError::OutOfRange`]
/// instead of being reduced; arkworks' own `from_str` reduces silently and
/// is therefore not used here.
pub fn fq_from_decimal(s: &str) -> VkResult<Fq> {
    let value = BigInt::from_str(s).map_err(|_| {
        VkError::MalformedInput(format!("expected a decimal integer, got {:?}", s))
    })?;
    let magnitude = BigUint::try_from(value).map_err(|_| VkError::OutOfRange)?;
    let limbs = BigInteger384::try_from(magnitude).map_err(|_| VkError::OutOfRange)?;
    Fq::from_bigint(limbs).ok_or(VkError::OutOfRange)
}

/// Parse a pair of decimal strings as the element `c0 + c1 * u` of the
/// quadratic extension field.
pub fn fq2_from_decimal(c0: &str, c1: &str) -> VkResult<Fq2> {
    Ok(Fq2::new(fq_from_decimal(c0)?, fq_from_decimal(c1)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_vectors::FQ_MODULUS;
    use ark_ff::{One, Zero};

    #[test]
    fn accepts_canonical_values() {
        assert_eq!(fq_from_decimal("0").unwrap(), Fq::zero());
        assert_eq!(fq_from_decimal("1").unwrap(), Fq::one());
        assert_eq!(fq_from_decimal("4").unwrap(), Fq::from(4u64));

        // The largest canonical value is modulus - 1, i.e. -1 in the field.
        let modulus_minus_one = format!("{}6", &FQ_MODULUS[..FQ_MODULUS.len() - 1]);
        assert_eq!(fq_from_decimal(&modulus_minus_one).unwrap(), -Fq::one());
    }

    #[test]
    fn rejects_non_canonical_values() {
        assert_eq!(fq_from_decimal(FQ_MODULUS), Err(VkError::OutOfRange));
        assert_eq!(fq_from_decimal("-1"), Err(VkError::OutOfRange));

        // Values past the 384-bit limb capacity are just as out of range.
        let oversized = format!("{}0000", FQ_MODULUS);
        assert_eq!(fq_from_decimal(&oversized), Err(VkError::OutOfRange));
    }

    #[test]
    fn rejects_non_decimal_strings() {
        for bad in ["", "garbage", "0x12", "12ab", "10_0", "1.5", "1 2"] {
            assert!(
                matches!(fq_from_decimal(bad), Err(VkError::MalformedInput(_))),
                "{:?} should be malformed",
                bad
            );
        }
    }

    #[test]
    fn parses_extension_elements_componentwise() {
        let fe = fq2_from_decimal("4", "7").unwrap();
        assert_eq!(fe, Fq2::new(Fq::from(4u64), Fq::from(7u64)));

        assert_eq!(fq2_from_decimal("1", "-1"), Err(VkError::OutOfRange));
        assert_eq!(fq2_from_decimal(FQ_MODULUS, "0"), Err(VkError::OutOfRange));
    }
}
