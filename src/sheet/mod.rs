// src/sheet/mod.rs

pub mod convert;

use anyhow::{bail, Context, Result};
use glob::glob;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

use crate::{jsonio, paths};

pub use convert::{coerce_cell, convert_file, table_id, TableDocument};

/// The resolved CSV source for a run. The spreadsheet exporter names
/// both the per-sheet folder and a single-sheet file `<target>.csv`, so
/// the same path can be either; directory takes priority.
#[derive(Debug)]
pub enum Source {
    Dir(PathBuf),
    File(PathBuf),
}

impl Source {
    pub fn path(&self) -> &Path {
        match self {
            Source::Dir(p) | Source::File(p) => p,
        }
    }
}

/// Locate the CSV source for `target` under `base`.
pub fn resolve_source(base: &Path, target: &str) -> Result<Source> {
    let path = base.join(format!("{target}.csv"));
    if path.is_dir() {
        Ok(Source::Dir(path))
    } else if path.is_file() {
        Ok(Source::File(path))
    } else {
        bail!("no CSV source named {target:?} under {:?}", base)
    }
}

/// List the CSV files a source contributes, in glob order.
pub fn source_files(source: &Source) -> Result<Vec<PathBuf>> {
    match source {
        Source::File(path) => Ok(vec![path.clone()]),
        Source::Dir(dir) => {
            let pattern = format!("{}/*.csv", dir.display());
            let mut files = Vec::new();
            for entry in glob(&pattern).context("building CSV glob")? {
                files.push(entry.context("reading CSV glob entry")?);
            }
            if files.is_empty() {
                bail!("no CSV files inside {:?}", dir);
            }
            Ok(files)
        }
    }
}

/// Run the full tabular conversion for `target`: purge the staging
/// directories, convert every matched CSV to JSON, then archive the
/// source. Per-file failures skip that file and keep going; only a
/// missing source fails the run.
pub fn run(base: &Path, target: &str) -> Result<()> {
    let json_dir = paths::json_dir(base);
    fs::create_dir_all(&json_dir).with_context(|| format!("creating {:?}", json_dir))?;
    paths::purge_files(&json_dir)?;
    paths::purge_files(&paths::convert_dir(base))?;

    let source = resolve_source(base, target)?;
    let files = source_files(&source)?;
    info!(sheet = target, files = files.len(), "converting");

    for file in &files {
        match convert_one(file, &json_dir) {
            Ok(id) => info!(file = %file.display(), id = %id, "converted"),
            Err(e) => warn!(file = %file.display(), error = %e, "skipping file"),
        }
    }

    archive_source(base, target, &source);
    Ok(())
}

fn convert_one(file: &Path, json_dir: &Path) -> Result<String> {
    let id = convert::table_id(file);
    let doc = convert::convert_file(file)?;
    jsonio::write_pretty(&json_dir.join(format!("{id}.json")), &doc)?;
    Ok(id)
}

/// Move the source into the `CSV` archive directory, replacing any prior
/// entry of the same name. Failures are logged and swallowed like
/// per-file failures; the converted JSON is already on disk.
fn archive_source(base: &Path, target: &str, source: &Source) {
    if let Err(e) = try_archive(base, target, source) {
        warn!(error = %e, "archive move failed");
    }
}

fn try_archive(base: &Path, target: &str, source: &Source) -> Result<()> {
    let archive = paths::csv_archive_dir(base);
    fs::create_dir_all(&archive).with_context(|| format!("creating {:?}", archive))?;
    let dest = archive.join(format!("{target}.csv"));
    if dest.is_dir() {
        fs::remove_dir_all(&dest).with_context(|| format!("removing {:?}", dest))?;
    } else if dest.exists() {
        fs::remove_file(&dest).with_context(|| format!("removing {:?}", dest))?;
    }
    fs::rename(source.path(), &dest)
        .with_context(|| format!("moving {:?} to {:?}", source.path(), dest))?;
    Ok(())
}
