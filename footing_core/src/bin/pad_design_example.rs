//! Run a pad foundation design and print the report as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Built-in 2.5 m square pad under an 800 kN dead / 300 kN live column
//! RUST_LOG=debug cargo run --bin pad-design-example
//!
//! # Foundation and design parameters from a file
//! cargo run --bin pad-design-example -- request.json
//! ```
//!
//! A request file holds `{ "foundation": { ... }, "input": { ... } }`, where
//! `input` may be omitted to use the default design parameters.

use std::fs;

use log::info;
use serde::Deserialize;

use footing_core::{design, CalcResult, DesignReport, FoundationGeometry, PadDesignInput, PadFoundation};

#[derive(Debug, Deserialize)]
struct DesignRequest {
    foundation: PadFoundation,
    #[serde(default)]
    input: PadDesignInput,
}

fn worked_example() -> CalcResult<DesignRequest> {
    let geometry = FoundationGeometry::centered(2500.0, 2500.0, 400.0, 400.0)?;
    let mut foundation = PadFoundation::new(geometry, 200.0)?;
    foundation.set_column_axial_loads(800.0, 300.0, 0.0)?;
    foundation.set_foundation_loads(400.0, 700.0, 18.0, 24.0)?;
    Ok(DesignRequest {
        foundation,
        input: PadDesignInput::default(),
    })
}

fn load_request(path: &str) -> CalcResult<DesignRequest> {
    let text = fs::read_to_string(path)
        .map_err(|e| footing_core::CalcError::invalid_input("request", path, e.to_string()))?;
    let request: DesignRequest = serde_json::from_str(&text)?;
    request.foundation.validate()?;
    Ok(request)
}

fn run() -> CalcResult<DesignReport> {
    let request = match std::env::args().nth(1) {
        Some(path) => {
            info!("Reading design request from {}", path);
            load_request(&path)?
        }
        None => worked_example()?,
    };
    design(&request.foundation, &request.input)
}

fn main() {
    env_logger::init();

    let report = match run() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error [{}]: {}", e.error_code(), e);
            std::process::exit(1);
        }
    };

    info!(
        "Design {}: {}",
        if report.is_adequate { "adequate" } else { "inadequate" },
        report
            .verdicts()
            .iter()
            .map(|(label, status)| format!("{} {}", label, status))
            .collect::<Vec<_>>()
            .join("; ")
    );

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing report: {}", e);
            std::process::exit(1);
        }
    }
}
