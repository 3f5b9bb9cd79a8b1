// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roster file parsing.
//!
//! Each non-blank line holds up to three delimited fields: a required name,
//! an optional restricted category tag and an optional optional category tag.
//! Whitespace-only lines are skipped. A line with more than three fields is
//! rejected outright rather than passed through.

use crate::error::IngestError;
use csv::{Position, StringRecord};
use drawlot_domain::{CategoryTag, Entry};
use std::path::Path;
use tracing::debug;

/// The delimiter used when none is configured.
pub const DEFAULT_DELIMITER: char = ',';

/// The maximum number of fields a roster line may carry.
const MAX_FIELDS: usize = 3;

/// Converts a configured delimiter character to the single byte the parser
/// needs.
///
/// # Errors
///
/// Returns `IngestError::InvalidDelimiter` if the character is not ASCII.
pub fn delimiter_byte(value: char) -> Result<u8, IngestError> {
    // Bytes 128-255 also fit in a u8 but are multi-byte sequences in UTF-8
    // text, so only ASCII is usable as a field delimiter.
    if value.is_ascii() {
        u8::try_from(value).map_err(|_| IngestError::InvalidDelimiter { value })
    } else {
        Err(IngestError::InvalidDelimiter { value })
    }
}

/// Reads and parses a roster file.
///
/// # Arguments
///
/// * `path` - The roster file path
/// * `delimiter` - The field delimiter byte
///
/// # Errors
///
/// Returns `IngestError::FileRead` if the file cannot be read, and any error
/// `parse_roster` produces for its content.
pub fn read_roster(path: &Path, delimiter: u8) -> Result<Vec<Entry>, IngestError> {
    let text: String = std::fs::read_to_string(path).map_err(|err| IngestError::FileRead {
        path: path.display().to_string(),
        error: err.to_string(),
    })?;

    let entries: Vec<Entry> = parse_roster(&text, delimiter)?;
    debug!(
        path = %path.display(),
        entries = entries.len(),
        "roster loaded"
    );
    Ok(entries)
}

/// Parses roster text into entries.
///
/// Entry positions are the 1-based line numbers of the source text, so a
/// roster with blank lines keeps stable ordinals for the lines that follow
/// them.
///
/// # Arguments
///
/// * `text` - The roster content
/// * `delimiter` - The field delimiter byte
///
/// # Errors
///
/// Returns:
/// * `IngestError::RecordRead` if a line cannot be tokenized
/// * `IngestError::TooManyFields` if a line has more than three fields
/// * `IngestError::MissingName` if a delimited line has an empty first field
/// * `IngestError::EmptyRoster` if no entry remains after skipping blanks
pub fn parse_roster(text: &str, delimiter: u8) -> Result<Vec<Entry>, IngestError> {
    // Roster lines are plain delimited text; quote characters have no
    // special meaning in them.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut entries: Vec<Entry> = Vec::new();

    for result in reader.records() {
        let record: StringRecord = result.map_err(|err| IngestError::RecordRead {
            line: err.position().map_or(0, Position::line),
            error: err.to_string(),
        })?;
        let line: u64 = record.position().map_or(0, Position::line);

        if record.len() > MAX_FIELDS {
            return Err(IngestError::TooManyFields {
                line,
                fields: record.len(),
            });
        }

        let name: &str = record.get(0).map_or("", str::trim);
        if name.is_empty() {
            // A lone whitespace field is a blank line; a delimited line with
            // an empty first field is a malformed entry.
            if record.len() <= 1 {
                continue;
            }
            return Err(IngestError::MissingName { line });
        }

        let restricted: Option<CategoryTag> = tag_field(&record, 1);
        let optional: Option<CategoryTag> = tag_field(&record, 2);
        let position: u32 = u32::try_from(line).unwrap_or(u32::MAX);

        entries.push(Entry::new(
            String::from(name),
            position,
            restricted,
            optional,
        ));
    }

    if entries.is_empty() {
        return Err(IngestError::EmptyRoster);
    }

    Ok(entries)
}

/// Extracts an optional tag field, treating blank fields as absent.
fn tag_field(record: &StringRecord, index: usize) -> Option<CategoryTag> {
    record
        .get(index)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(CategoryTag::new)
}
