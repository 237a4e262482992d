// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! BLS12-381 primitives for verification-key compression.

/// Decimal-string parsing into canonical field elements.
pub mod field;

/// Affine point constructors with the exporter's infinity sentinel.
pub mod point;

/// Compressed point encodings for the on-chain verifier.
pub mod compress;
