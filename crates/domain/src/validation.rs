// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::CategoryTag;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The validated shape of a draw: how many groups of what size.
///
/// `total_entries == total_groups * group_size` holds exactly; there are no
/// remainder or partial groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawPlan {
    /// The number of groups the draw will produce.
    total_groups: usize,
    /// The fixed member capacity of every group.
    group_size: usize,
    /// The total number of entries.
    total_entries: usize,
}

impl DrawPlan {
    /// Returns the number of groups.
    #[must_use]
    pub const fn total_groups(&self) -> usize {
        self.total_groups
    }

    /// Returns the fixed group size.
    #[must_use]
    pub const fn group_size(&self) -> usize {
        self.group_size
    }

    /// Returns the total entry count.
    #[must_use]
    pub const fn total_entries(&self) -> usize {
        self.total_entries
    }
}

/// Decides whether a conflict-free partition can possibly exist and computes
/// the derived group count.
///
/// Runs once before any placement. This function is pure and deterministic:
/// calling it twice with the same inputs yields the same decision and plan.
///
/// # Arguments
///
/// * `total_entries` - Count of all entries participating in the draw
/// * `group_size` - The requested entries-per-group
/// * `restricted_population` - Per-tag population counts for the restricted
///   dimension (possibly empty)
///
/// # Returns
///
/// * `Ok(DrawPlan)` with the derived group count
/// * `Err(DomainError)` naming the violated precondition
///
/// # Errors
///
/// Returns `DomainError::InvalidParameter` if the group size is zero, exceeds
/// the entry count, or does not evenly divide it. Returns
/// `DomainError::InfeasibleConstraint` if any restricted tag's population
/// exceeds the derived group count: placing N same-tag entries conflict-free
/// requires at least N distinct groups.
///
/// No equivalent bound is checked for optional-tag populations. Optional
/// conflicts are soft and may be violated during placement when unavoidable.
pub fn validate_draw(
    total_entries: usize,
    group_size: usize,
    restricted_population: &HashMap<CategoryTag, usize>,
) -> Result<DrawPlan, DomainError> {
    if group_size == 0 {
        return Err(DomainError::InvalidParameter {
            reason: String::from("group size must be a positive integer"),
        });
    }

    if group_size > total_entries {
        return Err(DomainError::InvalidParameter {
            reason: format!(
                "group size can not be bigger than the entry count, which is [{total_entries}]"
            ),
        });
    }

    if total_entries % group_size != 0 {
        return Err(DomainError::InvalidParameter {
            reason: format!(
                "the entry count is [{total_entries}], which is not dividable \
                 by group size [{group_size}]"
            ),
        });
    }

    let total_groups: usize = total_entries / group_size;

    // Stable iteration so the same infeasible tag is reported on every call.
    let mut populations: Vec<(&CategoryTag, &usize)> = restricted_population.iter().collect();
    populations.sort_by(|left, right| left.0.cmp(right.0));

    for (tag, population) in populations {
        if *population > total_groups {
            return Err(DomainError::InfeasibleConstraint {
                tag: tag.clone(),
                population: *population,
                total_groups,
            });
        }
    }

    Ok(DrawPlan {
        total_groups,
        group_size,
        total_entries,
    })
}
