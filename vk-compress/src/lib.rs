// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0
#![warn(missing_docs, unreachable_pub)]
#![deny(unused_must_use, missing_debug_implementations)]

//! Conversion of circom/snarkjs Groth16 artifacts over BLS12-381 into the
//! compressed point encodings expected by an on-chain verifier.
//!
//! The pipeline is a pure transformation with no shared mutable state:
//! decimal strings → validated field elements → validated affine points →
//! compressed bytes → hex text. Any failure aborts the whole assembly and
//! names the component that failed; a key or proof with even one bad point
//! is unusable by the verifier, so there is no partial output.

/// BLS12-381 field parsing, point validation and point compression.
pub mod bls12381;

/// Data model for snarkjs JSON artifacts and conversion to arkworks types.
pub mod circom;

/// Errors raised while decoding and compressing key material.
pub mod error;

/// Assembly of compressed verification keys and proofs.
pub mod vk;

#[cfg(test)]
pub(crate) mod test_vectors;
