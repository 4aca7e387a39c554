// src/bin/sheets_to_json.rs

use anyhow::Result;
use sheetconv::{paths, sheet};
use std::{env, process::exit};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    // Expect exactly one CLI argument: the exported sheet's target name.
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <TARGET_NAME>", args[0]);
        exit(1);
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();

    if let Err(e) = run(&args[1]) {
        eprintln!("Error: {e:#}");
        exit(1);
    }
}

fn run(target: &str) -> Result<()> {
    let base = paths::base_dir()?;
    sheet::run(&base, target)
}
