// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use drawlot_domain::{CategoryTag, Entry};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn create_entry(position: u32, name: &str) -> Entry {
    Entry::new(String::from(name), position, None, None)
}

pub fn create_restricted_entry(position: u32, name: &str, tag: &str) -> Entry {
    Entry::new(
        String::from(name),
        position,
        Some(CategoryTag::new(tag)),
        None,
    )
}

pub fn create_optional_entry(position: u32, name: &str, tag: &str) -> Entry {
    Entry::new(
        String::from(name),
        position,
        None,
        Some(CategoryTag::new(tag)),
    )
}

pub fn create_tagged_entry(position: u32, name: &str, restricted: &str, optional: &str) -> Entry {
    Entry::new(
        String::from(name),
        position,
        Some(CategoryTag::new(restricted)),
        Some(CategoryTag::new(optional)),
    )
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
