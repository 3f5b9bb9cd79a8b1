// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Randomized three-pass group assignment.
//!
//! The engine partitions a validated entry list into equally-sized groups
//! under two exclusion dimensions with different strengths.
//!
//! ## Placement Rules (Authoritative)
//!
//! - Restricted categories are hard: two entries sharing a restricted tag
//!   never land in the same group. Feasibility is proven up front, so the
//!   passes never have to violate this.
//! - Optional categories are soft: sharing a group is avoided while any
//!   conflict-free choice remains, and tolerated once none does.
//! - Selection is uniformly random over the currently eligible candidates.
//!   Entry positions and insertion order never influence selection.
//!
//! ## Passes
//!
//! 1. Restricted entries first, one per group per tag, steering around
//!    optional conflicts where possible.
//! 2. Optional entries second, one per group per tag, steering around
//!    restricted conflicts.
//! 3. Round-robin fill of everything left. Optional exclusion stays enforced
//!    for a bounded number of sweeps, then is lifted so the draw always
//!    terminates; restricted exclusion is never lifted.
//!
//! All placement state lives in a context owned by a single
//! [`perform_draw`] call. Nothing observes a partially-filled pool.

use crate::error::CoreError;
use drawlot_domain::{CategoryIndex, CategoryKind, DrawPlan, Entry, Group, validate_draw};
use rand::{Rng, RngExt};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};

/// How many full sweeps of the group pool the fill pass keeps enforcing the
/// optional exclusion before lifting it.
const OPTIONAL_ENFORCEMENT_SWEEPS: u32 = 10;

/// The completed output of one draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    /// The validated draw shape.
    pub plan: DrawPlan,
    /// The filled groups, in creation order.
    pub groups: Vec<Group>,
}

/// Mutable placement state shared by the three passes.
///
/// `placed` only ever grows; `groups` are mutated in place.
struct DrawContext {
    placed: HashSet<Entry>,
    groups: Vec<Group>,
}

/// Performs a complete draw: feasibility validation followed by the three
/// placement passes.
///
/// # Arguments
///
/// * `entries` - All entries participating in the draw
/// * `group_size` - The requested entries-per-group
/// * `rng` - The randomness source; inject a seeded generator for
///   deterministic tests
///
/// # Returns
///
/// * `Ok(DrawResult)` with every entry placed exactly once and every group
///   filled to capacity
/// * `Err(CoreError)` if validation rejects the parameters
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` wrapping the validator's rejection.
/// Validation runs before any group is created, so a failed draw has no
/// partial results. Given validated input the passes themselves cannot fail.
pub fn perform_draw<R: Rng>(
    entries: &[Entry],
    group_size: usize,
    rng: &mut R,
) -> Result<DrawResult, CoreError> {
    let index: CategoryIndex = CategoryIndex::from_entries(entries);
    let plan: DrawPlan = validate_draw(
        entries.len(),
        group_size,
        &index.population(CategoryKind::Restricted),
    )?;

    let groups: Vec<Group> = (1..=plan.total_groups())
        .map(|number| Group::new(format!("Group {number}"), plan.group_size()))
        .collect();
    let mut context: DrawContext = DrawContext {
        placed: HashSet::with_capacity(plan.total_entries()),
        groups,
    };

    if index.has_any(CategoryKind::Restricted) {
        place_restricted(&index, &mut context, rng)?;
    }
    if index.has_any(CategoryKind::Optional) {
        place_optional(&index, &mut context, rng)?;
    }
    fill_remaining(entries, &mut context, rng)?;

    info!(
        total_entries = plan.total_entries(),
        total_groups = plan.total_groups(),
        group_size = plan.group_size(),
        "draw complete"
    );

    Ok(DrawResult {
        plan,
        groups: context.groups,
    })
}

/// First pass: place restricted-tagged entries.
///
/// For each restricted tag, each group receives at most one not-yet-placed
/// carrier of that tag. Groups already holding the tag, and full groups, are
/// skipped. Candidates whose optional tag is already present in the group are
/// steered away from it; if every remaining carrier conflicts, the group
/// simply receives none on this pass.
fn place_restricted<R: Rng>(
    index: &CategoryIndex,
    context: &mut DrawContext,
    rng: &mut R,
) -> Result<(), CoreError> {
    let DrawContext { placed, groups } = context;

    for (tag, members) in index.tagged(CategoryKind::Restricted) {
        let mut sources: Vec<Entry> = members
            .iter()
            .filter(|entry| !placed.contains(*entry))
            .cloned()
            .collect();

        for group in groups.iter_mut() {
            if sources.is_empty() {
                break;
            }

            if group.is_full() || group.has_category(Some(tag), CategoryKind::Restricted) {
                continue;
            }

            // Same-tag exclusion is covered by the group skip above; only the
            // optional dimension needs steering here.
            let Some(selected) = select_into(group, &sources, placed, rng, false, true)? else {
                continue;
            };
            sources.retain(|entry| entry != &selected);
        }
    }

    debug!(placed = placed.len(), "restricted pass done");
    Ok(())
}

/// Second pass: place optional-tagged entries left over from the first.
///
/// Symmetric to the restricted pass with the dimensions swapped: groups
/// already holding the optional tag are skipped, and candidates are steered
/// away from restricted conflicts.
fn place_optional<R: Rng>(
    index: &CategoryIndex,
    context: &mut DrawContext,
    rng: &mut R,
) -> Result<(), CoreError> {
    let DrawContext { placed, groups } = context;

    for (tag, members) in index.tagged(CategoryKind::Optional) {
        let mut sources: Vec<Entry> = members
            .iter()
            .filter(|entry| !placed.contains(*entry))
            .cloned()
            .collect();

        for group in groups.iter_mut() {
            if sources.is_empty() {
                break;
            }

            if group.is_full() || group.has_category(Some(tag), CategoryKind::Optional) {
                continue;
            }

            let Some(selected) = select_into(group, &sources, placed, rng, true, false)? else {
                continue;
            };
            sources.retain(|entry| entry != &selected);
        }
    }

    debug!(placed = placed.len(), "optional pass done");
    Ok(())
}

/// Final pass: round-robin fill until every entry is placed.
///
/// Sweeps the group pool in order, handing each non-full group one randomly
/// selected unplaced entry. Restricted exclusion is always enforced. Optional
/// exclusion is enforced for the first [`OPTIONAL_ENFORCEMENT_SWEEPS`] sweeps
/// and then lifted, which guarantees forward progress even when every
/// remaining candidate would violate some optional tag. Total capacity equals
/// the entry count and restricted feasibility was pre-validated, so the loop
/// terminates with full groups.
fn fill_remaining<R: Rng>(
    entries: &[Entry],
    context: &mut DrawContext,
    rng: &mut R,
) -> Result<(), CoreError> {
    let DrawContext { placed, groups } = context;

    let mut sources: Vec<Entry> = entries
        .iter()
        .filter(|entry| !placed.contains(*entry))
        .cloned()
        .collect();
    let mut sweeps: u32 = 0;

    while placed.len() < entries.len() {
        for group in groups.iter_mut() {
            if sources.is_empty() {
                break;
            }

            if group.is_full() {
                continue;
            }

            let check_optional: bool = sweeps < OPTIONAL_ENFORCEMENT_SWEEPS;
            let Some(selected) = select_into(group, &sources, placed, rng, true, check_optional)?
            else {
                continue;
            };
            sources.retain(|entry| entry != &selected);
        }

        sweeps += 1;
    }

    debug!(placed = placed.len(), sweeps, "fill pass done");
    Ok(())
}

/// Randomly selects one candidate that fits the group and places it.
///
/// Draws uniformly from a local copy of the candidate list. A candidate
/// conflicting with the group on an enforced dimension is discarded from the
/// local pool and another is drawn, until a placement succeeds or the pool is
/// exhausted. Exhaustion is not an error; the caller moves on to the next
/// group.
///
/// On success the entry has been added to the group and to the placed set,
/// and is returned so the caller can drop it from its own pool.
fn select_into<R: Rng>(
    group: &mut Group,
    candidates: &[Entry],
    placed: &mut HashSet<Entry>,
    rng: &mut R,
    check_restricted: bool,
    check_optional: bool,
) -> Result<Option<Entry>, CoreError> {
    let mut pool: Vec<Entry> = candidates.to_vec();

    while !pool.is_empty() {
        let pick: usize = rng.random_range(0..pool.len());
        let candidate: Entry = pool.swap_remove(pick);

        let restricted_conflict: bool = check_restricted
            && group.has_category(
                candidate.tag(CategoryKind::Restricted),
                CategoryKind::Restricted,
            );
        let optional_conflict: bool = check_optional
            && group.has_category(candidate.tag(CategoryKind::Optional), CategoryKind::Optional);

        if restricted_conflict || optional_conflict {
            continue;
        }

        group.add(candidate.clone())?;
        placed.insert(candidate.clone());
        return Ok(Some(candidate));
    }

    Ok(None)
}
