//! Working with Value for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use serde::Serialize;
use serde_jsonlite::{json, parse, to_string, to_string_pretty, to_value, Value};
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Build config dynamically with json! macro
    let mut config = json!({
        "host": "localhost",
        "port": 8080,
        "features": ["auth", "logging", "metrics"],
        "debug": true
    });

    println!("Config:\n{}\n", to_string_pretty(&config)?);

    // Access values dynamically
    if let Some(host) = config.get("host").and_then(Value::as_str) {
        println!("Accessing field 'host': {}", host);
    }
    if let Some(port) = config["port"].as_i64() {
        println!("Accessing field 'port': {}", port);
    }
    if let Some(features) = config["features"].as_array() {
        println!("Accessing field 'features': {} items", features.len());
    }
    println!("Absent field reads as null: {}\n", config["timeout"]);

    // Update in place; key order is preserved
    config.set("port", Value::from(9090))?;
    config.set("timeout", Value::from(30))?;
    println!("Updated: {}\n", to_string(&config)?);

    // Parse arbitrary text, including arrays of mixed values
    let mixed = parse("[ 'a', {'k':'v'}, 'b', 1.5, null]")?;
    for (i, item) in mixed.as_array().into_iter().flatten().enumerate() {
        println!("  [{}] {} ({})", i, item, item.kind());
    }

    // Convert existing struct to Value
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };

    let user_value = to_value(&user)?;
    println!("\nUser as Value:\n{}\n", to_string_pretty(&user_value)?);

    // Runtime type checking
    println!("Type checks:");
    println!("  is_object: {}", user_value.is_object());
    println!("  is_array:  {}", user_value.is_array());
    println!("  is_string: {}", user_value.is_string());

    Ok(())
}
