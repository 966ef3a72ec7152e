//! CLI tool to validate and inspect WKT geometry literals.

use std::fs;
use std::process::ExitCode;

use wkt_parser::{Geometry, parse_geometry};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: wkt <command> [args...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  validate  Check every line of the given file(s) is valid WKT");
        eprintln!("  inspect   Parse WKT literal(s) and describe the result");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  wkt validate shapes.wkt");
        eprintln!("  wkt inspect 'SRID=4326;POINT(1 2)'");
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let inputs = &args[2..];

    if inputs.is_empty() {
        eprintln!("Error: no input specified");
        return ExitCode::from(2);
    }

    let had_error = match command {
        "validate" => validate(inputs),
        "inspect" => inspect(inputs),
        _ => {
            eprintln!("Unknown command: {command}");
            return ExitCode::from(2);
        }
    };

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// One literal per non-blank line. Returns whether anything failed.
fn validate(paths: &[String]) -> bool {
    let mut had_error = false;

    for path in paths {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        let mut valid = 0usize;
        let mut invalid = 0usize;
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_geometry(line) {
                Ok(_) => valid += 1,
                Err(e) => {
                    println!("{path}:{}: {e}", index + 1);
                    invalid += 1;
                }
            }
        }

        eprintln!("{path}: {valid} valid, {invalid} invalid");
        had_error |= invalid > 0;
    }

    had_error
}

fn inspect(literals: &[String]) -> bool {
    let mut had_error = false;

    for literal in literals {
        match parse_geometry(literal) {
            Ok(geometry) => println!("{}", describe(&geometry)),
            Err(e) => {
                eprintln!("{literal}: {e}");
                had_error = true;
            }
        }
    }

    had_error
}

fn describe(geometry: &Geometry) -> String {
    let srid = geometry
        .srid()
        .map_or_else(String::new, |srid| format!(" SRID={srid}"));
    if geometry.is_empty() {
        return format!(
            "{} {}{srid} EMPTY",
            geometry.type_name(),
            geometry.dimension()
        );
    }
    format!(
        "{} {}{srid} ({} point(s))",
        geometry.type_name(),
        geometry.dimension(),
        geometry.num_points()
    )
}
