// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Compressed point encodings for the on-chain verifier.
//!
//! The wire format is the Zcash one, shared by blst and by the chain's
//! builtin curve primitives: the big-endian x-coordinate (c1 ‖ c0 for the
//! twist group) with three flags packed into the top bits of byte 0.
//! See section 5.4.9.2 of <https://zips.z.cash/protocol/protocol.pdf>.
//! Arkworks uses its own flag convention, so the packing is done by hand
//! here rather than through `CanonicalSerialize`.

use ark_bls12_381::{Fq, Fq2, G1Affine, G2Affine};
use ark_ec::AffineRepr;
use ark_ff::{BigInteger, BigInteger384, PrimeField};

use crate::error::{VkError, VkResult};

#[cfg(test)]
#[path = "unit_tests/compress_tests.rs"]
mod compress_tests;

/// Byte length of a compressed base-group point, one base field element.
pub const G1_COMPRESSED_SIZE: usize = 48;
/// Byte length of a compressed twist-group point, two base field elements.
pub const G2_COMPRESSED_SIZE: usize = 96;

const FQ_BYTE_SIZE: usize = 48;

// The modulus is 381 bits, so the top three bits of the leading byte of a
// big-endian field element are always clear and can hold the flags.
const COMPRESSED_FLAG: u8 = 1 << 7;
const INFINITY_FLAG: u8 = 1 << 6;
const SIGN_FLAG: u8 = 1 << 5;
const FLAG_MASK: u8 = COMPRESSED_FLAG | INFINITY_FLAG | SIGN_FLAG;

fn fq_to_be_bytes(field: &Fq) -> [u8; FQ_BYTE_SIZE] {
    let mut bytes = [0u8; FQ_BYTE_SIZE];
    bytes.copy_from_slice(&field.into_bigint().to_bytes_be());
    bytes
}

/// Returns `None` if the bytes encode an integer `>=` the modulus.
fn fq_from_be_bytes(bytes: &[u8; FQ_BYTE_SIZE]) -> Option<Fq> {
    let mut limbs = BigInteger384::default();
    for (limb, chunk) in limbs.0.iter_mut().rev().zip(bytes.chunks_exact(8)) {
        *limb = u64::from_be_bytes(chunk.try_into().unwrap());
    }
    Fq::from_bigint(limbs)
}

/// Compress a base-group point to its 48-byte encoding.
///
/// Deterministic and total over validated points. The sign flag marks the
/// lexicographically larger of {y, -y}.
pub fn compress_g1(point: &G1Affine) -> [u8; G1_COMPRESSED_SIZE] {
    let mut bytes = [0u8; G1_COMPRESSED_SIZE];
    if point.infinity {
        bytes[0] = COMPRESSED_FLAG | INFINITY_FLAG;
        return bytes;
    }
    bytes.copy_from_slice(&fq_to_be_bytes(&point.x));
    bytes[0] |= COMPRESSED_FLAG;
    if point.y > -point.y {
        bytes[0] |= SIGN_FLAG;
    }
    bytes
}

/// Compress a twist-group point to its 96-byte encoding, x serialized as
/// c1 ‖ c0. The Fq2 ordering behind the sign flag compares c1 first, then
/// c0.
pub fn compress_g2(point: &G2Affine) -> [u8; G2_COMPRESSED_SIZE] {
    let mut bytes = [0u8; G2_COMPRESSED_SIZE];
    if point.infinity {
        bytes[0] = COMPRESSED_FLAG | INFINITY_FLAG;
        return bytes;
    }
    bytes[..FQ_BYTE_SIZE].copy_from_slice(&fq_to_be_bytes(&point.x.c1));
    bytes[FQ_BYTE_SIZE..].copy_from_slice(&fq_to_be_bytes(&point.x.c0));
    bytes[0] |= COMPRESSED_FLAG;
    if point.y > -point.y {
        bytes[0] |= SIGN_FLAG;
    }
    bytes
}

/// Recover a base-group point from its 48-byte encoding.
pub fn decompress_g1(bytes: &[u8; G1_COMPRESSED_SIZE]) -> VkResult<G1Affine> {
    if bytes[0] & COMPRESSED_FLAG == 0 {
        return Err(VkError::MalformedInput(
            "uncompressed point encoding".to_string(),
        ));
    }
    if bytes[0] & INFINITY_FLAG != 0 {
        return Ok(G1Affine::zero());
    }
    let greatest = bytes[0] & SIGN_FLAG != 0;

    let mut x_bytes = *bytes;
    x_bytes[0] &= !FLAG_MASK;
    let x = fq_from_be_bytes(&x_bytes).ok_or(VkError::OutOfRange)?;

    G1Affine::get_point_from_x_unchecked(x, greatest).ok_or(VkError::PointNotOnCurve)
}

/// Recover a twist-group point from its 96-byte encoding.
pub fn decompress_g2(bytes: &[u8; G2_COMPRESSED_SIZE]) -> VkResult<G2Affine> {
    if bytes[0] & COMPRESSED_FLAG == 0 {
        return Err(VkError::MalformedInput(
            "uncompressed point encoding".to_string(),
        ));
    }
    if bytes[0] & INFINITY_FLAG != 0 {
        return Ok(G2Affine::zero());
    }
    let greatest = bytes[0] & SIGN_FLAG != 0;

    let mut c1_bytes = [0u8; FQ_BYTE_SIZE];
    c1_bytes.copy_from_slice(&bytes[..FQ_BYTE_SIZE]);
    c1_bytes[0] &= !FLAG_MASK;
    let mut c0_bytes = [0u8; FQ_BYTE_SIZE];
    c0_bytes.copy_from_slice(&bytes[FQ_BYTE_SIZE..]);

    let c1 = fq_from_be_bytes(&c1_bytes).ok_or(VkError::OutOfRange)?;
    let c0 = fq_from_be_bytes(&c0_bytes).ok_or(VkError::OutOfRange)?;

    G2Affine::get_point_from_x_unchecked(Fq2::new(c0, c1), greatest)
        .ok_or(VkError::PointNotOnCurve)
}
