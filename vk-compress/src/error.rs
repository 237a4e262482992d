// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Collection of errors raised while decoding and compressing key material.
//!
//! Every error here is a data-validity error, not a transient fault, and is
//! fatal to the assembly that raised it.

use std::fmt;

use thiserror::Error;

/// Convenience alias for results returned by this crate.
pub type VkResult<T> = Result<T, VkError>;

/// Collection of errors raised while decoding and compressing key material.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum VkError {
    /// A required key is missing, a coordinate array has the wrong arity, or
    /// a string is not a decimal integer.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A decimal string is negative or not below the field modulus. Key
    /// material must already be canonical; values are never reduced
    /// silently, as a reduced value would encode a well-formed but wrong
    /// point.
    #[error("value is not a canonical field element")]
    OutOfRange,

    /// Coordinates that are neither on the curve nor the (0, 0) infinity
    /// sentinel.
    #[error("point is not on the curve")]
    PointNotOnCurve,

    /// Any of the above, tagged with the named key or proof component that
    /// raised it.
    #[error("{component}: {source}")]
    Component {
        /// The component that failed.
        component: VkComponent,
        /// The underlying failure.
        source: Box<VkError>,
    },
}

impl VkError {
    /// Tag this error with the component being processed when it was raised.
    pub(crate) fn for_component(self, component: VkComponent) -> Self {
        VkError::Component {
            component,
            source: Box::new(self),
        }
    }
}

/// The named components of a verification key or proof, used to identify
/// which part of the input an error refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VkComponent {
    /// The `vk_alpha_1` point of a verification key.
    Alpha,
    /// The `vk_beta_2` point of a verification key.
    Beta,
    /// The `vk_gamma_2` point of a verification key.
    Gamma,
    /// The `vk_delta_2` point of a verification key.
    Delta,
    /// An entry of the `IC` list, by input position.
    Ic(usize),
    /// The `pi_a` point of a proof.
    PiA,
    /// The `pi_b` point of a proof.
    PiB,
    /// The `pi_c` point of a proof.
    PiC,
}

impl fmt::Display for VkComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VkComponent::Alpha => f.write_str("vk_alpha_1"),
            VkComponent::Beta => f.write_str("vk_beta_2"),
            VkComponent::Gamma => f.write_str("vk_gamma_2"),
            VkComponent::Delta => f.write_str("vk_delta_2"),
            VkComponent::Ic(i) => write!(f, "IC[{}]", i),
            VkComponent::PiA => f.write_str("pi_a"),
            VkComponent::PiB => f.write_str("pi_b"),
            VkComponent::PiC => f.write_str("pi_c"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_errors_name_the_component() {
        let err = VkError::PointNotOnCurve.for_component(VkComponent::Ic(3));
        assert_eq!(err.to_string(), "IC[3]: point is not on the curve");

        let err = VkError::OutOfRange.for_component(VkComponent::Alpha);
        assert_eq!(
            err.to_string(),
            "vk_alpha_1: value is not a canonical field element"
        );
    }
}
