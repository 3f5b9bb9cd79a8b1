// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Selects which exclusion dimension an operation addresses.
///
/// Restricted categories are hard constraints: two entries sharing a
/// restricted tag may never cohabit a group. Optional categories are soft:
/// sharing should be avoided but may be forced when no conflict-free
/// placement remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryKind {
    /// Hard exclusion: never violated.
    Restricted,
    /// Soft exclusion: violated only when unavoidable.
    Optional,
}

impl CategoryKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Restricted => "restricted",
            Self::Optional => "optional",
        }
    }
}

impl std::fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents an exclusion category tag.
///
/// Tags are free-form labels read from the roster file. Leading and trailing
/// whitespace is stripped so that `" A "` and `"A"` denote the same category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryTag {
    /// The tag value.
    value: String,
}

impl CategoryTag {
    /// Creates a new `CategoryTag`.
    ///
    /// # Arguments
    ///
    /// * `value` - The tag value (will be trimmed)
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_owned(),
        }
    }

    /// Returns the tag value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents one participant to be placed into exactly one group.
///
/// Entries are immutable once constructed. Identity is the full four-field
/// tuple: two entries with identical name, position and tags are the same
/// entry. The engine relies on this when it stores entries in sets to compute
/// not-yet-placed remainders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// The entry's name.
    name: String,
    /// The 1-based source ordinal. Display and tie-break stability only;
    /// never consulted by placement logic.
    position: u32,
    /// The restricted (hard-exclusion) category, if any.
    restricted: Option<CategoryTag>,
    /// The optional (soft-exclusion) category, if any.
    optional: Option<CategoryTag>,
}

impl Entry {
    /// Creates a new `Entry`.
    ///
    /// # Arguments
    ///
    /// * `name` - The entry's name
    /// * `position` - The 1-based source ordinal
    /// * `restricted` - The restricted category tag, if any
    /// * `optional` - The optional category tag, if any
    #[must_use]
    pub const fn new(
        name: String,
        position: u32,
        restricted: Option<CategoryTag>,
        optional: Option<CategoryTag>,
    ) -> Self {
        Self {
            name,
            position,
            restricted,
            optional,
        }
    }

    /// Returns the entry's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the 1-based source ordinal.
    #[must_use]
    pub const fn position(&self) -> u32 {
        self.position
    }

    /// Returns the restricted category tag, if any.
    #[must_use]
    pub const fn restricted(&self) -> Option<&CategoryTag> {
        self.restricted.as_ref()
    }

    /// Returns the optional category tag, if any.
    #[must_use]
    pub const fn optional(&self) -> Option<&CategoryTag> {
        self.optional.as_ref()
    }

    /// Returns the tag carried in the given dimension, if any.
    #[must_use]
    pub const fn tag(&self, kind: CategoryKind) -> Option<&CategoryTag> {
        match kind {
            CategoryKind::Restricted => self.restricted.as_ref(),
            CategoryKind::Optional => self.optional.as_ref(),
        }
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]-[{}]", self.position, self.name)?;
        if let Some(restricted) = &self.restricted {
            write!(f, "-[{restricted}]")?;
        }
        if let Some(optional) = &self.optional {
            write!(f, "-[{optional}]")?;
        }
        Ok(())
    }
}
