// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Affine point constructors for the base group and the twist group.

use ark_bls12_381::{Fq, Fq2, G1Affine, G2Affine};
use ark_ec::AffineRepr;
use ark_ff::Zero;

use crate::error::{VkError, VkResult};

/// Assemble a validated affine point of the base group.
///
/// A coordinate pair of (0, 0) is the exporter's sentinel for the point at
/// infinity. It does not satisfy the curve equation, so it has to be
/// recognized before validation.
pub fn g1_from_affine_coordinates(x: Fq, y: Fq) -> VkResult<G1Affine> {
    if x.is_zero() && y.is_zero() {
        return Ok(G1Affine::zero());
    }
    let point = G1Affine::new_unchecked(x, y);
    if !point.is_on_curve() {
        return Err(VkError::PointNotOnCurve);
    }
    Ok(point)
}

/// Assemble a validated affine point of the twist group. The (0, 0)
/// sentinel applies here as well, with both extension components zero.
pub fn g2_from_affine_coordinates(x: Fq2, y: Fq2) -> VkResult<G2Affine> {
    if x.is_zero() && y.is_zero() {
        return Ok(G2Affine::zero());
    }
    let point = G2Affine::new_unchecked(x, y);
    if !point.is_on_curve() {
        return Err(VkError::PointNotOnCurve);
    }
    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bls12381::field::{fq2_from_decimal, fq_from_decimal};
    use crate::test_vectors::{
        G1_GENERATOR_X, G1_GENERATOR_Y, G2_GENERATOR_X_C0, G2_GENERATOR_X_C1, G2_GENERATOR_Y_C0,
        G2_GENERATOR_Y_C1,
    };
    use ark_ff::One;

    #[test]
    fn zero_pair_is_the_infinity_sentinel() {
        let g1 = g1_from_affine_coordinates(Fq::zero(), Fq::zero()).unwrap();
        assert!(g1.is_zero());

        let g2 = g2_from_affine_coordinates(Fq2::zero(), Fq2::zero()).unwrap();
        assert!(g2.is_zero());
    }

    #[test]
    fn accepts_the_published_generators() {
        let x = fq_from_decimal(G1_GENERATOR_X).unwrap();
        let y = fq_from_decimal(G1_GENERATOR_Y).unwrap();
        assert_eq!(
            g1_from_affine_coordinates(x, y).unwrap(),
            G1Affine::generator()
        );

        let x = fq2_from_decimal(G2_GENERATOR_X_C0, G2_GENERATOR_X_C1).unwrap();
        let y = fq2_from_decimal(G2_GENERATOR_Y_C0, G2_GENERATOR_Y_C1).unwrap();
        assert_eq!(
            g2_from_affine_coordinates(x, y).unwrap(),
            G2Affine::generator()
        );
    }

    #[test]
    fn rejects_off_curve_coordinates() {
        assert_eq!(
            g1_from_affine_coordinates(Fq::one(), Fq::one()),
            Err(VkError::PointNotOnCurve)
        );
        assert_eq!(
            g2_from_affine_coordinates(Fq2::one(), Fq2::one()),
            Err(VkError::PointNotOnCurve)
        );

        // A zero coordinate alone is not the sentinel.
        assert_eq!(
            g1_from_affine_coordinates(Fq::zero(), Fq::one()),
            Err(VkError::PointNotOnCurve)
        );
    }
}
