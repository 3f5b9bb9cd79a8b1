// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CategoryIndex, CategoryKind, CategoryTag, Entry};
use std::collections::HashMap;

fn create_test_roster() -> Vec<Entry> {
    vec![
        Entry::new(
            String::from("Alice"),
            1,
            Some(CategoryTag::new("A")),
            Some(CategoryTag::new("X")),
        ),
        Entry::new(String::from("Bob"), 2, Some(CategoryTag::new("A")), None),
        Entry::new(String::from("Cara"), 3, None, Some(CategoryTag::new("X"))),
        Entry::new(String::from("Dane"), 4, None, None),
    ]
}

#[test]
fn test_index_partitions_by_dimension() {
    let entries: Vec<Entry> = create_test_roster();
    let index: CategoryIndex = CategoryIndex::from_entries(&entries);

    let restricted: &HashMap<CategoryTag, Vec<Entry>> = index.tagged(CategoryKind::Restricted);
    let optional: &HashMap<CategoryTag, Vec<Entry>> = index.tagged(CategoryKind::Optional);

    assert_eq!(restricted.len(), 1);
    assert_eq!(restricted[&CategoryTag::new("A")].len(), 2);
    assert_eq!(optional.len(), 1);
    assert_eq!(optional[&CategoryTag::new("X")].len(), 2);
}

#[test]
fn test_untagged_entries_absent_from_both_dimensions() {
    let entries: Vec<Entry> = create_test_roster();
    let index: CategoryIndex = CategoryIndex::from_entries(&entries);

    let indexed: usize = index
        .tagged(CategoryKind::Restricted)
        .values()
        .chain(index.tagged(CategoryKind::Optional).values())
        .map(Vec::len)
        .sum();

    // Alice twice, Bob once, Cara once; Dane nowhere.
    assert_eq!(indexed, 4);
}

#[test]
fn test_population_counts_derived_from_index() {
    let entries: Vec<Entry> = create_test_roster();
    let index: CategoryIndex = CategoryIndex::from_entries(&entries);

    let restricted: HashMap<CategoryTag, usize> = index.population(CategoryKind::Restricted);
    let optional: HashMap<CategoryTag, usize> = index.population(CategoryKind::Optional);

    assert_eq!(restricted[&CategoryTag::new("A")], 2);
    assert_eq!(optional[&CategoryTag::new("X")], 2);
}

#[test]
fn test_has_any_reflects_dimension_contents() {
    let tagged: CategoryIndex = CategoryIndex::from_entries(&create_test_roster());
    let untagged: CategoryIndex = CategoryIndex::from_entries(&[Entry::new(
        String::from("Dane"),
        1,
        None,
        None,
    )]);

    assert!(tagged.has_any(CategoryKind::Restricted));
    assert!(tagged.has_any(CategoryKind::Optional));
    assert!(!untagged.has_any(CategoryKind::Restricted));
    assert!(!untagged.has_any(CategoryKind::Optional));
}

#[test]
fn test_empty_roster_produces_empty_index() {
    let index: CategoryIndex = CategoryIndex::from_entries(&[]);

    assert!(!index.has_any(CategoryKind::Restricted));
    assert!(!index.has_any(CategoryKind::Optional));
}
