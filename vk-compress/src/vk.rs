// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Assembly of compressed verification keys and proofs.
//!
//! Each component runs through the same fixed pipeline — parse, construct,
//! compress, hex-encode — and the output keeps the original field names so
//! it can be consumed as a drop-in JSON replacement for the uncompressed
//! key.

use std::fmt;

use ark_bls12_381::Bls12_381;
use ark_groth16::{Proof, VerifyingKey};
use serde::{Deserialize, Serialize};

use crate::bls12381::compress::{compress_g1, compress_g2};
use crate::circom::{CircomProof, CircomVerificationKey};
use crate::error::VkResult;

#[cfg(test)]
#[path = "unit_tests/vk_tests.rs"]
mod vk_tests;

/// A verification key with every point in compressed hex form, lowercase
/// and unprefixed: 96 hex characters per base-group point, 192 per
/// twist-group point.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CompressedVerificationKey {
    /// The compressed `alpha` point.
    pub vk_alpha_1: String,
    /// The compressed `beta` point.
    pub vk_beta_2: String,
    /// The compressed `gamma` point.
    pub vk_gamma_2: String,
    /// The compressed `delta` point.
    pub vk_delta_2: String,
    /// The compressed `IC` points, in input order. The order encodes the
    /// public-input order the verifier expects and is never changed.
    #[serde(rename = "IC")]
    pub ic: Vec<String>,
}

impl CompressedVerificationKey {
    /// Decode, validate and compress a snarkjs verification key.
    pub fn from_circom(vk: &CircomVerificationKey) -> VkResult<Self> {
        Ok(compress_verification_key(&vk.to_arkworks()?))
    }
}

/// Compress every component of a parsed verification key.
///
/// The input points are already validated, so this stage cannot fail.
pub fn compress_verification_key(vk: &VerifyingKey<Bls12_381>) -> CompressedVerificationKey {
    CompressedVerificationKey {
        vk_alpha_1: hex::encode(compress_g1(&vk.alpha_g1)),
        vk_beta_2: hex::encode(compress_g2(&vk.beta_g2)),
        vk_gamma_2: hex::encode(compress_g2(&vk.gamma_g2)),
        vk_delta_2: hex::encode(compress_g2(&vk.delta_g2)),
        ic: vk
            .gamma_abc_g1
            .iter()
            .map(|point| hex::encode(compress_g1(point)))
            .collect(),
    }
}

/// A proof with every point in compressed hex form.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CompressedProof {
    /// The compressed `pi_a` point.
    pub pi_a: String,
    /// The compressed `pi_b` point.
    pub pi_b: String,
    /// The compressed `pi_c` point.
    pub pi_c: String,
}

impl CompressedProof {
    /// Decode, validate and compress a snarkjs proof.
    pub fn from_circom(proof: &CircomProof) -> VkResult<Self> {
        Ok(compress_proof(&proof.to_arkworks()?))
    }
}

/// Compress every component of a parsed proof. Total over valid proofs.
pub fn compress_proof(proof: &Proof<Bls12_381>) -> CompressedProof {
    CompressedProof {
        pi_a: hex::encode(compress_g1(&proof.a)),
        pi_b: hex::encode(compress_g2(&proof.b)),
        pi_c: hex::encode(compress_g1(&proof.c)),
    }
}

/// The downstream consumer splits the proof back apart by character
/// offset, so the concatenation order and widths (96, 192, 96) are fixed.
impl fmt::Display for CompressedProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.pi_a, self.pi_b, self.pi_c)
    }
}
