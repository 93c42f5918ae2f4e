//! Compact binary demonstration driver.
//!
//! Prints a table of values alongside their minimal binary representation,
//! their compact codeword, and the decoded value, verifying that
//! decode(encode(n)) == n for each row.
//!
//! Usage:
//!   compactbinary [limit]     # table for 0..=limit (default 128)
//!   compactbinary --version
//!   compactbinary --help

use compactbinary::{decode, encode, BitVector};
use num_bigint::BigInt;
use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print version information.
fn print_version() {
    println!("compactbinary {VERSION}");
}

/// Print help message with usage information.
fn print_help(prog_name: &str) {
    println!("Compact Binary Codec (v{VERSION})");
    println!("=================================\n");
    println!("Bijective variable-length binary encoding of non-negative integers.");
    println!("Each codeword is one bit shorter than the minimal binary form of n + 2.\n");
    println!("Usage:");
    println!("  {prog_name} [limit]\n");
    println!("Options:");
    println!("  -h, --help     Show this help message");
    println!("  -v, --version  Show version information\n");
    println!("Arguments:");
    println!("  limit          Last value in the table, inclusive (default 128)\n");
    println!("Output columns:");
    println!("  n              The value being encoded");
    println!("  binary         Minimal binary representation, LSB first");
    println!("  encoded        Compact codeword, LSB first");
    println!("  decoded        Round-trip result of decode(encode(n))");
}

/// Print the demonstration table for values 0..=limit.
///
/// Halts with an error on the first value that fails to convert.
fn run_table(limit: u64) -> Result<(), String> {
    println!(
        "{:<16}{:<16}{:<16}{:<16}",
        "n", "binary", "encoded", "decoded"
    );

    for n in 0..=limit {
        let value = BigInt::from(n);

        let bits = BitVector::from_integer(&value, true).map_err(|e| e.to_string())?;
        let codeword = encode(&value).map_err(|e| e.to_string())?;
        let decoded = decode(&codeword);

        // Width formatting needs `String`: the Display impls write the
        // digits directly and do not pad.
        println!(
            "{n:<16}{:<16}{:<16}{:<16}",
            bits.to_string(),
            codeword.to_string(),
            decoded.to_string()
        );
    }

    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let prog_name = args
        .first()
        .map_or("compactbinary", String::as_str)
        .to_string();

    let mut limit = 128u64;

    if args.len() > 1 {
        match args[1].as_str() {
            "-h" | "--help" => {
                print_help(&prog_name);
                return;
            }
            "-v" | "--version" => {
                print_version();
                return;
            }
            arg => match arg.parse::<u64>() {
                Ok(n) => limit = n,
                Err(_) => {
                    eprintln!("Error: invalid limit '{arg}'");
                    eprintln!("Try '{prog_name} --help' for usage.");
                    process::exit(1);
                }
            },
        }
    }

    if let Err(e) = run_table(limit) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
