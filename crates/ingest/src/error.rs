// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while loading a roster or a draw configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// A file could not be read.
    FileRead {
        /// The path that failed.
        path: String,
        /// The underlying I/O error message.
        error: String,
    },
    /// A roster line could not be parsed at all.
    RecordRead {
        /// The 1-based line number.
        line: u64,
        /// The underlying parser error message.
        error: String,
    },
    /// A roster line carries more fields than the format allows.
    TooManyFields {
        /// The 1-based line number.
        line: u64,
        /// The number of fields found.
        fields: usize,
    },
    /// A roster line has no name in its first field.
    MissingName {
        /// The 1-based line number.
        line: u64,
    },
    /// The roster contains no entries at all.
    EmptyRoster,
    /// The configured field delimiter is not a single-byte character.
    InvalidDelimiter {
        /// The rejected delimiter.
        value: char,
    },
    /// The draw configuration document is malformed.
    ConfigParse {
        /// The underlying parser error message.
        error: String,
    },
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileRead { path, error } => {
                write!(f, "Failed to read [{path}]: {error}")
            }
            Self::RecordRead { line, error } => {
                write!(f, "Failed to parse roster line [{line}]: {error}")
            }
            Self::TooManyFields { line, fields } => {
                write!(
                    f,
                    "Invalid entry at line [{line}]: found [{fields}] fields, \
                     at most 3 are allowed"
                )
            }
            Self::MissingName { line } => {
                write!(f, "Invalid name found for entry at line [{line}]")
            }
            Self::EmptyRoster => write!(f, "No valid entries found"),
            Self::InvalidDelimiter { value } => {
                write!(f, "Delimiter [{value}] is not a single-byte character")
            }
            Self::ConfigParse { error } => {
                write!(f, "Failed to parse draw configuration: {error}")
            }
        }
    }
}

impl std::error::Error for IngestError {}
