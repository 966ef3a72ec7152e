//! Demonstrate error handling for invalid WKT input.

use wkt_parser::{Expected, parse_geometry};

fn main() {
    // Trailing input after a complete geometry
    match parse_geometry("POINT(1 2))") {
        Ok(_) => println!("Parsed OK (unexpected)"),
        Err(e) => {
            println!("Parse error: {e}");
            println!("  Expected: {}", e.expected);
            println!("  Offset: {:?}", e.offset());
        }
    }

    println!();

    // Z modifier demands three ordinates
    match parse_geometry("POINT Z(1 2)") {
        Ok(_) => println!("Parsed OK (unexpected)"),
        Err(e) => {
            println!("Parse error: {e}");
            if let Expected::AnyOf(kinds) = &e.expected {
                println!("  Alternatives: {}", kinds.len());
            }
        }
    }

    println!();

    // Nothing to parse
    if let Err(e) = parse_geometry("") {
        println!("Parse error: {e}");
        println!("  At end of input: {}", e.found.is_none());
    }
}
