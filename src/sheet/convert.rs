// src/sheet/convert.rs

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::{fs::File, io::BufReader, path::Path};

/// Trailing sheet-index suffix the spreadsheet exporter appends when one
/// sheet is split across several CSV files ("-表1", "-表1-1", "-表1-1-1").
static SHEET_INDEX_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"-表\d+(-\d+)*$").unwrap());

/// One converted table, rows in source order.
#[derive(Debug, Serialize)]
pub struct TableDocument {
    pub data: Vec<Map<String, Value>>,
}

/// Derive the output table identifier from a CSV filename: the stem with
/// any exporter sheet-index suffix removed. A single file exported
/// without splitting already carries the bare target name.
pub fn table_id(file: &Path) -> String {
    let stem = file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    SHEET_INDEX_SUFFIX.replace(stem, "").into_owned()
}

/// Coerce one raw cell, in the pipeline's historical order: integer
/// unless the raw cell contains a literal '.', else float, else the
/// trimmed text. Empty cells become null.
///
/// The '.'-gate means "007" stays an integer (7) while "1e5" falls
/// through to text; downstream sheets rely on both readings.
pub fn coerce_cell(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if !raw.contains('.') {
        if let Ok(n) = trimmed.parse::<i64>() {
            return Value::Number(n.into());
        }
    } else if let Ok(f) = trimmed.parse::<f64>() {
        if let Some(n) = Number::from_f64(f) {
            return Value::Number(n);
        }
    }
    Value::String(trimmed.to_string())
}

/// Parse a header-plus-rows CSV file into a [`TableDocument`], dropping
/// rows whose cells are all empty/whitespace. Every record carries
/// exactly the header columns, in header order.
pub fn convert_file(path: &Path) -> Result<TableDocument> {
    let file = File::open(path).with_context(|| format!("opening {:?}", path))?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers: Vec<String> = rdr
        .headers()
        .with_context(|| format!("reading header row of {:?}", path))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut data = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record =
            result.with_context(|| format!("CSV parse error in {:?} at record {}", path, idx))?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let mut row = Map::with_capacity(headers.len());
        for (col, header) in headers.iter().enumerate() {
            let raw = record.get(col).unwrap_or("");
            row.insert(header.clone(), coerce_cell(raw));
        }
        data.push(row);
    }
    Ok(TableDocument { data })
}
