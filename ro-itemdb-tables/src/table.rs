//! Parser for the client's `id#value#` text tables.
//!
//! Format:
//! ```text
//! 501#Red_Potion#
//! 502#
//! A line of text
//! Another line
//! #
//! ```
//!
//! A line starting with `<digits>#` opens a record. If text follows the
//! first `#` on that line, it is the whole value and the record closes
//! immediately. Otherwise the following lines accumulate until a line that
//! is just `#`.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::TableError;

/// Parsed table: record id to its (newline-joined) text.
pub type Table = BTreeMap<u32, String>;

/// Decode legacy single-byte text. Every byte maps to the code point with
/// the same value (ISO-8859-1), so this never fails.
pub fn decode_legacy(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split text into lines on every legacy line break (`\r\n` counts once).
///
/// A trailing line break does not produce an empty final line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Split `123#rest` into `("123", "rest")`. Returns `None` unless the line
/// starts with at least one ASCII digit followed by `#`.
fn split_record_key(line: &str) -> Option<(&str, &str)> {
    let (key, rest) = line.split_once('#')?;
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((key, rest))
}

/// Parse decoded table text.
///
/// Lines that belong to no open record are ignored, as are record keys
/// that do not fit in a `u32`.
pub fn parse_table(text: &str) -> Table {
    let mut records: BTreeMap<u32, Vec<&str>> = BTreeMap::new();
    let mut current: Option<u32> = None;

    for raw in split_lines(text) {
        let line = raw.trim();

        if let Some((key, rest)) = split_record_key(line) {
            current = None;
            let Ok(id) = key.parse::<u32>() else {
                log::warn!("Skipping record with out-of-range id: {key}");
                continue;
            };
            if rest.is_empty() {
                current = Some(id);
            } else {
                records.entry(id).or_default().push(rest.trim_matches('#'));
            }
            continue;
        }

        if line == "#" {
            current = None;
            continue;
        }

        if let Some(id) = current {
            records.entry(id).or_default().push(line);
        }
    }

    records
        .into_iter()
        .map(|(id, parts)| (id, parts.join("\n")))
        .collect()
}

/// Decode and parse raw table bytes.
pub fn parse_table_bytes(bytes: &[u8]) -> Table {
    parse_table(&decode_legacy(bytes))
}

/// Read and parse a table file from disk.
pub fn parse_table_file(path: &Path) -> Result<Table, TableError> {
    let bytes = std::fs::read(path).map_err(|e| TableError::io(path, e))?;
    let table = parse_table_bytes(&bytes);
    log::debug!("Parsed {} records from {}", table.len(), path.display());
    Ok(table)
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;
