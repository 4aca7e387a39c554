// src/jsonio.rs

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::{fs, path::Path};

/// Serialize `value` as pretty JSON with 4-space indentation. Non-ASCII
/// characters stay literal so the output diffs cleanly against what the
/// engine importer has checked in.
pub fn to_string_pretty<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let fmt = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    value.serialize(&mut ser).context("serializing to JSON")?;
    String::from_utf8(buf).context("JSON output was not UTF-8")
}

/// Write `value` to `path` as pretty JSON.
pub fn write_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("writing {:?}", path))
}

/// Same as [`write_pretty`] but with a trailing newline, for documents
/// that get committed to the asset tree verbatim.
pub fn write_pretty_newline<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut json = to_string_pretty(value)?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("writing {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn four_space_indent_and_literal_non_ascii() -> Result<()> {
        let value = json!({ "name": "表1", "n": 7 });
        let out = to_string_pretty(&value)?;
        assert!(out.contains("\n    \"name\": \"表1\""));
        assert!(!out.contains("\\u"));
        Ok(())
    }

    #[test]
    fn newline_variant_appends_exactly_one() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("doc.json");
        write_pretty_newline(&path, &json!({ "a": 1 }))?;
        let written = fs::read_to_string(&path)?;
        assert!(written.ends_with("}\n"));
        assert!(!written.ends_with("\n\n"));
        Ok(())
    }
}
