// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::fs;
use std::io::{Error, ErrorKind};
use vk_compress::circom::CircomProof;
use vk_compress::vk::CompressedProof;

#[derive(Parser)]
#[command(name = "compress-proof")]
#[command(about = "Compress a snarkjs BLS12-381 proof into on-chain point encodings", long_about = None)]
struct Command {
    /// Path to the proof.json produced by snarkjs.
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
    let proof = CircomProof::from_json(&json)
        .map_err(|e| Error::new(ErrorKind::InvalidInput, e.to_string()))?;
    let compressed = CompressedProof::from_circom(&proof)
        .map_err(|e| Error::new(ErrorKind::InvalidData, e.to_string()))?;

    // The consumer slices this concatenation at fixed offsets (96, 288).
    println!("{}", compressed);
    Ok(())
}
