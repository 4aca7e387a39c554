// src/bin/coords_to_json.rs

use anyhow::{ensure, Context, Result};
use sheetconv::{
    formation::{self, parse},
    jsonio, paths,
};
use std::{
    env, fs,
    io::{self, BufRead},
    process::exit,
};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    // Expect exactly one CLI argument: the output filename stem.
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <OUTPUT_NAME>", args[0]);
        eprintln!("Example: {} 442", args[0]);
        exit(1);
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();

    if let Err(e) = run(&args[1]) {
        eprintln!("Error: {e:#}");
        exit(1);
    }
}

fn run(stem: &str) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut read_line = move || -> Result<String> {
        lines
            .next()
            .context("stdin closed before all three inputs were pasted")?
            .context("reading pasted input")
    };

    println!("\n[1/3] paste the base coordinates:");
    let base = parse::parse_labeled(&read_line()?);
    ensure!(!base.is_empty(), "no valid slot data found in base input");
    let expected = base.len();
    println!("  -> detected {expected} slots");

    println!("\n[2/3] paste the goalKickOffense coordinates:");
    let offense = parse::parse_pairs(&read_line()?);
    ensure!(
        offense.len() == expected,
        "goalKickOffense count mismatch: expected {expected}, found {}",
        offense.len()
    );
    println!("  -> detected {} coordinates", offense.len());

    println!("\n[3/3] paste the goalKickDefense coordinates:");
    let defense = parse::parse_pairs(&read_line()?);
    ensure!(
        defense.len() == expected,
        "goalKickDefense count mismatch: expected {expected}, found {}",
        defense.len()
    );
    println!("  -> detected {} coordinates", defense.len());

    let doc = formation::build_document(base, offense, defense)?;

    let coords_dir = paths::coords_dir(&paths::base_dir()?);
    fs::create_dir_all(&coords_dir).with_context(|| format!("creating {:?}", coords_dir))?;
    let out_path = coords_dir.join(format!("{stem}.json"));
    jsonio::write_pretty_newline(&out_path, &doc)?;

    println!("\nsaved: {}", out_path.display());
    println!("wrote {expected} slots");
    Ok(())
}
