// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extension Schema Generator
//!
//! Writes a JSON document describing every extension registered by this
//! crate: parameters, defaults, return attributes and examples.
//!
//! ```bash
//! cargo run --bin extension_schema -- --output schema.json
//! ```

use clap::Parser;
use eventflux_string::core::config::eventflux_context::EventFluxContext;
use eventflux_string::core::extension::ExtensionMeta;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Describe the registered extensions as JSON", author, version)]
struct Cli {
    /// Write to this file instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExtensionSchema {
    version: String,
    generated: String,
    stream_processors: BTreeMap<String, ExtensionMeta>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let ctx = EventFluxContext::new();
    let mut stream_processors = BTreeMap::new();
    for name in ctx.list_stream_processor_factories() {
        match ctx.get_stream_processor_factory(&name) {
            Ok(factory) => {
                stream_processors.insert(name, factory.metadata());
            }
            Err(e) => log::warn!("Skipping '{name}': {e}"),
        }
    }

    let schema = ExtensionSchema {
        version: env!("CARGO_PKG_VERSION").to_string(),
        generated: chrono::Utc::now().to_rfc3339(),
        stream_processors,
    };
    let json = match serde_json::to_string_pretty(&schema) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Failed to serialize schema: {e}");
            std::process::exit(1);
        }
    };

    match cli.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, &json) {
                eprintln!("Failed to write {}: {e}", path.display());
                std::process::exit(1);
            }
            println!("Schema written to {}", path.display());
        }
        None => println!("{json}"),
    }
}
