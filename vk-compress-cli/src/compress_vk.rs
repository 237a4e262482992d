// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::fs;
use std::io::{Error, ErrorKind};
use vk_compress::circom::CircomVerificationKey;
use vk_compress::vk::CompressedVerificationKey;

#[derive(Parser)]
#[command(name = "compress-vk")]
#[command(about = "Compress a snarkjs BLS12-381 verification key into on-chain point encodings", long_about = None)]
struct Command {
    /// Path to the verification_key.json produced by snarkjs.
    path: String,
}

fn main() {
    match execute(Command::parse()) {
        Ok(_) => {
            std::process::exit(exitcode::OK);
        }
        Err(e) => {
            println!("Error: {}", e);
            std::process::exit(exitcode::DATAERR);
        }
    }
}

fn execute(cmd: Command) -> Result<(), Error> {
    let json = fs::read_to_string(&cmd.path)?;
    let vk = CircomVerificationKey::from_json(&json)
        .map_err(|e| Error::new(ErrorKind::InvalidInput, e.to_string()))?;
    let compressed = CompressedVerificationKey::from_circom(&vk)
        .map_err(|e| Error::new(ErrorKind::InvalidData, e.to_string()))?;
    let output = serde_json::to_string_pretty(&compressed)
        .map_err(|e| Error::new(ErrorKind::InvalidData, e.to_string()))?;
    println!("{}", output);
    Ok(())
}
