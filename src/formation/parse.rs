// src/formation/parse.rs

use once_cell::sync::Lazy;
use regex::Regex;

/// One labeled base entry: position group, position, base coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotEntry {
    pub group: String,
    pub position: String,
    pub x: i64,
    pub y: i64,
}

static LABELED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z]+)\s*,\s*([A-Z]+)\s*,\s*\(\s*(\d+)\s*,\s*(\d+)\s*\)").unwrap());

static PAIR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(\s*(\d+)\s*,\s*(\d+)\s*\)").unwrap());

/// Replace the smart quotes and full-width punctuation the geometry
/// tool's clipboard output tends to carry with their ASCII forms.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            '\u{201c}' | '\u{201d}' => '"',
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{ff08}' => '(',
            '\u{ff09}' => ')',
            '\u{ff0c}' => ',',
            other => other,
        })
        .collect()
}

/// Extract every labeled entry (`DF,SB,(13,34)` ...) in input order.
/// Coordinates too large for i64 drop the match.
pub fn parse_labeled(raw: &str) -> Vec<SlotEntry> {
    let normalized = normalize(raw);
    LABELED
        .captures_iter(&normalized)
        .filter_map(|cap| {
            Some(SlotEntry {
                group: cap[1].to_string(),
                position: cap[2].to_string(),
                x: cap[3].parse().ok()?,
                y: cap[4].parse().ok()?,
            })
        })
        .collect()
}

/// Extract every bare coordinate pair (`(13,34)` ...) in input order.
pub fn parse_pairs(raw: &str) -> Vec<(i64, i64)> {
    let normalized = normalize(raw);
    PAIR.captures_iter(&normalized)
        .filter_map(|cap| Some((cap[1].parse().ok()?, cap[2].parse().ok()?)))
        .collect()
}
