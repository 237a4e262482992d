// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Data model for circom/snarkjs JSON artifacts.
//!
//! snarkjs exports verification keys and proofs as JSON objects whose
//! coordinates are decimal-string big integers, G2 coordinates as pairs of
//! extension components. The types here mirror that wire shape verbatim;
//! conversion into arkworks types runs the full parse → construct →
//! validate pipeline and fails fast, naming the offending component.

use ark_bls12_381::{Bls12_381, G1Affine, G2Affine};
use ark_groth16::{Proof, VerifyingKey};
use serde::{Deserialize, Serialize};

use crate::bls12381::field::{fq2_from_decimal, fq_from_decimal};
use crate::bls12381::point::{g1_from_affine_coordinates, g2_from_affine_coordinates};
use crate::error::{VkComponent, VkError, VkResult};

/// A base-group point as snarkjs emits it: `[x, y]` decimal strings.
pub type CircomG1 = Vec<String>;

/// A twist-group point as snarkjs emits it:
/// `[[x_c0, x_c1], [y_c0, y_c1]]` decimal strings.
pub type CircomG2 = Vec<Vec<String>>;

/// A Groth16 verification key in snarkjs JSON shape.
///
/// Unrecognized keys (such as `vk_alphabeta_12`) are ignored. `protocol`,
/// `curve` and `nPublic` are validated when present.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CircomVerificationKey {
    /// Proof system name; must be `groth16` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Curve name; must be `bls12381` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<String>,
    /// Number of public inputs; `IC` must have one more entry.
    #[serde(rename = "nPublic", default, skip_serializing_if = "Option::is_none")]
    pub n_public: Option<usize>,
    /// The `alpha` base-group point.
    pub vk_alpha_1: CircomG1,
    /// The `beta` twist-group point.
    pub vk_beta_2: CircomG2,
    /// The `gamma` twist-group point.
    pub vk_gamma_2: CircomG2,
    /// The `delta` twist-group point.
    pub vk_delta_2: CircomG2,
    /// One base-group point per public input, plus one. The order matches
    /// the public-input order the verifier expects and is load-bearing.
    #[serde(rename = "IC")]
    pub ic: Vec<CircomG1>,
}

impl CircomVerificationKey {
    /// Decode a verification key from JSON text.
    pub fn from_json(json: &str) -> VkResult<Self> {
        serde_json::from_str(json).map_err(|e| VkError::MalformedInput(e.to_string()))
    }

    /// Convert into an arkworks verification key, validating every
    /// component. The first failure aborts the whole conversion.
    pub fn to_arkworks(&self) -> VkResult<VerifyingKey<Bls12_381>> {
        self.validate_header()?;

        let alpha_g1 = g1_from_coordinates(&self.vk_alpha_1)
            .map_err(|e| e.for_component(VkComponent::Alpha))?;
        let beta_g2 = g2_from_coordinates(&self.vk_beta_2)
            .map_err(|e| e.for_component(VkComponent::Beta))?;
        let gamma_g2 = g2_from_coordinates(&self.vk_gamma_2)
            .map_err(|e| e.for_component(VkComponent::Gamma))?;
        let delta_g2 = g2_from_coordinates(&self.vk_delta_2)
            .map_err(|e| e.for_component(VkComponent::Delta))?;

        let mut gamma_abc_g1 = Vec::with_capacity(self.ic.len());
        for (i, coordinates) in self.ic.iter().enumerate() {
            let point = g1_from_coordinates(coordinates)
                .map_err(|e| e.for_component(VkComponent::Ic(i)))?;
            gamma_abc_g1.push(point);
        }

        Ok(VerifyingKey {
            alpha_g1,
            beta_g2,
            gamma_g2,
            delta_g2,
            gamma_abc_g1,
        })
    }

    fn validate_header(&self) -> VkResult<()> {
        validate_protocol_and_curve(self.protocol.as_deref(), self.curve.as_deref())?;
        if let Some(n_public) = self.n_public {
            if n_public + 1 != self.ic.len() {
                return Err(VkError::MalformedInput(format!(
                    "nPublic is {} but IC has {} entries",
                    n_public,
                    self.ic.len()
                )));
            }
        }
        Ok(())
    }
}

/// A Groth16 proof in snarkjs JSON shape.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CircomProof {
    /// Proof system name; must be `groth16` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Curve name; must be `bls12381` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<String>,
    /// The `pi_a` base-group point.
    pub pi_a: CircomG1,
    /// The `pi_b` twist-group point.
    pub pi_b: CircomG2,
    /// The `pi_c` base-group point.
    pub pi_c: CircomG1,
}

impl CircomProof {
    /// Decode a proof from JSON text.
    pub fn from_json(json: &str) -> VkResult<Self> {
        serde_json::from_str(json).map_err(|e| VkError::MalformedInput(e.to_string()))
    }

    /// Convert into an arkworks proof, validating every component.
    pub fn to_arkworks(&self) -> VkResult<Proof<Bls12_381>> {
        validate_protocol_and_curve(self.protocol.as_deref(), self.curve.as_deref())?;

        let a = g1_from_coordinates(&self.pi_a).map_err(|e| e.for_component(VkComponent::PiA))?;
        let b = g2_from_coordinates(&self.pi_b).map_err(|e| e.for_component(VkComponent::PiB))?;
        let c = g1_from_coordinates(&self.pi_c).map_err(|e| e.for_component(VkComponent::PiC))?;

        Ok(Proof { a, b, c })
    }
}

fn validate_protocol_and_curve(protocol: Option<&str>, curve: Option<&str>) -> VkResult<()> {
    if let Some(protocol) = protocol {
        if protocol != "groth16" {
            return Err(VkError::MalformedInput(format!(
                "unsupported protocol {:?}",
                protocol
            )));
        }
    }
    if let Some(curve) = curve {
        if curve != "bls12381" && curve != "bls12_381" {
            return Err(VkError::MalformedInput(format!(
                "unsupported curve {:?}",
                curve
            )));
        }
    }
    Ok(())
}

/// Parse `[x, y]` decimal strings into a validated base-group point.
fn g1_from_coordinates(coordinates: &[String]) -> VkResult<G1Affine> {
    if coordinates.len() != 2 {
        return Err(VkError::MalformedInput(format!(
            "expected an [x, y] coordinate pair, got {} entries",
            coordinates.len()
        )));
    }
    let x = fq_from_decimal(&coordinates[0])?;
    let y = fq_from_decimal(&coordinates[1])?;
    g1_from_affine_coordinates(x, y)
}

/// Parse `[[x_c0, x_c1], [y_c0, y_c1]]` decimal strings into a validated
/// twist-group point.
fn g2_from_coordinates(coordinates: &[Vec<String>]) -> VkResult<G2Affine> {
    if coordinates.len() != 2 || coordinates.iter().any(|pair| pair.len() != 2) {
        return Err(VkError::MalformedInput(
            "expected [[x_c0, x_c1], [y_c0, y_c1]] coordinate pairs".to_string(),
        ));
    }
    let x = fq2_from_decimal(&coordinates[0][0], &coordinates[0][1])?;
    let y = fq2_from_decimal(&coordinates[1][0], &coordinates[1][1])?;
    g2_from_affine_coordinates(x, y)
}
