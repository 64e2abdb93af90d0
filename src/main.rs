// MRZ identity normalization front-end
// Reads the raw field JSON produced by the upstream MRZ reader and
// emits the pruned identity record for the form-filling service.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use serde_json::Value;

use mrznorm::models::{CountryCodeTable, RawMrzFields};
use mrznorm::MrzNormalizer;

#[derive(Parser)]
#[command(
    name = "mrznorm",
    about = "Normalize raw MRZ reader output into a clean identity record"
)]
struct Args {
    /// Raw MRZ field JSON produced by the reader
    input: PathBuf,

    /// Country code table resource
    #[arg(long, default_value = "nationality_map.json")]
    nationality_map: PathBuf,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let raw_text = match std::fs::read_to_string(&args.input) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Error reading {}: {}", args.input.display(), err);
            process::exit(1);
        }
    };

    let upstream: Value = match serde_json::from_str(&raw_text) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Error parsing {}: {}", args.input.display(), err);
            process::exit(1);
        }
    };

    // The reader reports "no MRZ detected" as a single error key. That
    // is a precondition failure, not pipeline input, and must never be
    // merged into a record.
    if let Some(message) = upstream.get("error").and_then(Value::as_str) {
        eprintln!("Upstream reader error: {}", message);
        process::exit(2);
    }

    let raw: RawMrzFields = match serde_json::from_value(upstream) {
        Ok(fields) => fields,
        Err(err) => {
            eprintln!("Error decoding raw MRZ fields: {}", err);
            process::exit(1);
        }
    };

    let table = match CountryCodeTable::from_path(&args.nationality_map) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("Error loading country table: {}", err);
            process::exit(1);
        }
    };

    let record = MrzNormalizer::new().normalize_with_table(&table, &raw);

    let rendered = if args.compact {
        serde_json::to_string(&record)
    } else {
        serde_json::to_string_pretty(&record)
    };

    match rendered {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("Error serializing record: {}", err);
            process::exit(1);
        }
    }
}
