//! Basic JSON serialization and deserialization.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize};
use serde_jsonlite::{from_str, to_string, to_string_pretty};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Specs {
    cores: u32,
    ram_gb: f64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Computer {
    model: String,
    year: u16,
    specs: Specs,
    owner: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let computer = Computer {
        model: "Workstation \"Pro\"".to_string(),
        year: 2024,
        specs: Specs {
            cores: 16,
            ram_gb: 64.0,
        },
        owner: None,
    };

    // Serialize to compact and pretty JSON
    let json = to_string(&computer)?;
    println!("Compact:\n{}\n", json);
    println!("Pretty:\n{}\n", to_string_pretty(&computer)?);

    // Deserialize back to struct
    let computer_back: Computer = from_str(&json)?;
    assert_eq!(computer, computer_back);
    println!("✓ Round-trip successful");

    // Lenient input: single quotes, unknown keys, missing fields
    let loose = "{'model': 'Laptop', 'specs': {'cores': 8}, 'color': 'grey'}";
    let laptop: Computer = from_str(loose)?;
    println!("\nFrom lenient input: {:?}", laptop);

    // Malformed input reports where it went wrong
    if let Err(e) = from_str::<Computer>("{'model' 'Laptop'}") {
        println!("Rejected: {}", e);
    }

    Ok(())
}
