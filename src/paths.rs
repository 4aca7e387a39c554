// src/paths.rs

use anyhow::{Context, Result};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Environment override for the pipeline base directory.
pub const BASE_ENV: &str = "SHEETCONV_BASE";

/// Resolve the directory all pipeline paths hang off.
///
/// Defaults to the directory containing the running executable, which is
/// where the spreadsheet exporter drops its files. `SHEETCONV_BASE`
/// overrides it.
pub fn base_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var(BASE_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let exe = env::current_exe().context("resolving current executable path")?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// JSON output directory for converted tables.
pub fn json_dir(base: &Path) -> PathBuf {
    base.join("Json")
}

/// Staging directory the engine-side importer reads from.
pub fn convert_dir(base: &Path) -> PathBuf {
    base.join("JsonConvert")
}

/// Archive directory converted CSV sources are moved into.
pub fn csv_archive_dir(base: &Path) -> PathBuf {
    base.join("CSV")
}

/// Output directory for formation coordinate documents.
pub fn coords_dir(base: &Path) -> PathBuf {
    base.join("Coords")
}

/// Delete the direct file entries of `dir`, leaving subdirectories
/// alone. A missing directory is not an error.
pub fn purge_files(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }
    for entry in fs::read_dir(dir).with_context(|| format!("reading {:?}", dir))? {
        let entry = entry.with_context(|| format!("reading entry of {:?}", dir))?;
        let path = entry.path();
        if path.is_file() {
            fs::remove_file(&path).with_context(|| format!("removing {:?}", path))?;
            debug!(path = %path.display(), "purged stale file");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn purge_removes_direct_files_only() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("stale.json"), "{}")?;
        fs::write(dir.path().join("other.json"), "{}")?;
        let sub = dir.path().join("keep");
        fs::create_dir(&sub)?;
        fs::write(sub.join("nested.json"), "{}")?;

        purge_files(dir.path())?;

        assert!(!dir.path().join("stale.json").exists());
        assert!(!dir.path().join("other.json").exists());
        assert!(sub.join("nested.json").exists());
        Ok(())
    }

    #[test]
    fn purge_of_missing_dir_is_ok() {
        assert!(purge_files(Path::new("/definitely/not/here")).is_ok());
    }
}
