// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{CategoryKind, CategoryTag, Entry};
use std::collections::HashMap;

/// Per-dimension tag-to-entries mappings, built once from the full entry list.
///
/// An entry lacking a tag in a dimension is absent from that dimension's map.
/// The index is read-only for the duration of a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryIndex {
    /// Entries keyed by their restricted tag.
    restricted: HashMap<CategoryTag, Vec<Entry>>,
    /// Entries keyed by their optional tag.
    optional: HashMap<CategoryTag, Vec<Entry>>,
}

impl CategoryIndex {
    /// Builds the index from the full entry list.
    ///
    /// # Arguments
    ///
    /// * `entries` - All entries participating in the draw
    #[must_use]
    pub fn from_entries(entries: &[Entry]) -> Self {
        let mut restricted: HashMap<CategoryTag, Vec<Entry>> = HashMap::new();
        let mut optional: HashMap<CategoryTag, Vec<Entry>> = HashMap::new();

        for entry in entries {
            if let Some(tag) = entry.restricted() {
                restricted.entry(tag.clone()).or_default().push(entry.clone());
            }
            if let Some(tag) = entry.optional() {
                optional.entry(tag.clone()).or_default().push(entry.clone());
            }
        }

        Self {
            restricted,
            optional,
        }
    }

    /// Returns the tag-to-entries mapping for the given dimension.
    #[must_use]
    pub const fn tagged(&self, kind: CategoryKind) -> &HashMap<CategoryTag, Vec<Entry>> {
        match kind {
            CategoryKind::Restricted => &self.restricted,
            CategoryKind::Optional => &self.optional,
        }
    }

    /// Derives the per-tag population counts for the given dimension.
    #[must_use]
    pub fn population(&self, kind: CategoryKind) -> HashMap<CategoryTag, usize> {
        self.tagged(kind)
            .iter()
            .map(|(tag, entries)| (tag.clone(), entries.len()))
            .collect()
    }

    /// Returns whether any entry carries a tag in the given dimension.
    #[must_use]
    pub fn has_any(&self, kind: CategoryKind) -> bool {
        !self.tagged(kind).is_empty()
    }
}
