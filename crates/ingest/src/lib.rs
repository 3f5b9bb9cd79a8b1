// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod config;
mod error;
mod roster;

pub use config::{DrawConfig, load_config, parse_config};
pub use error::IngestError;
pub use roster::{DEFAULT_DELIMITER, delimiter_byte, parse_roster, read_roster};
