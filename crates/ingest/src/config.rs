// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::IngestError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Static draw configuration.
///
/// Covers the non-interactive sourcing mode: an operator keeps the draw
/// parameters in a JSON document next to the roster instead of answering a
/// prompt on every run. Command-line arguments take precedence over these
/// values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawConfig {
    /// The number of entries per group.
    pub group_size: usize,
    /// The roster field delimiter. Defaults to a comma when absent.
    #[serde(default)]
    pub delimiter: Option<char>,
    /// The roster file path, resolved relative to the working directory.
    #[serde(default)]
    pub roster: Option<PathBuf>,
}

/// Loads a draw configuration file.
///
/// # Arguments
///
/// * `path` - The configuration file path
///
/// # Errors
///
/// Returns `IngestError::FileRead` if the file cannot be read, or
/// `IngestError::ConfigParse` if its content is not a valid configuration
/// document.
pub fn load_config(path: &Path) -> Result<DrawConfig, IngestError> {
    let text: String = std::fs::read_to_string(path).map_err(|err| IngestError::FileRead {
        path: path.display().to_string(),
        error: err.to_string(),
    })?;

    let config: DrawConfig = parse_config(&text)?;
    debug!(path = %path.display(), group_size = config.group_size, "configuration loaded");
    Ok(config)
}

/// Parses a draw configuration document.
///
/// # Errors
///
/// Returns `IngestError::ConfigParse` if the text is not a valid
/// configuration document.
pub fn parse_config(text: &str) -> Result<DrawConfig, IngestError> {
    serde_json::from_str(text).map_err(|err| IngestError::ConfigParse {
        error: err.to_string(),
    })
}
