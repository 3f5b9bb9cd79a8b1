// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CategoryKind, CategoryTag, DomainError, Entry, Group};

fn create_tagged_entry(position: u32, name: &str, restricted: &str, optional: &str) -> Entry {
    Entry::new(
        String::from(name),
        position,
        Some(CategoryTag::new(restricted)),
        Some(CategoryTag::new(optional)),
    )
}

fn create_plain_entry(position: u32, name: &str) -> Entry {
    Entry::new(String::from(name), position, None, None)
}

#[test]
fn test_new_group_is_empty() {
    let group: Group = Group::new(String::from("Group 1"), 2);

    assert!(group.is_empty());
    assert!(!group.is_full());
    assert_eq!(group.len(), 0);
    assert_eq!(group.capacity(), 2);
    assert_eq!(group.name(), "Group 1");
}

#[test]
fn test_add_preserves_insertion_order() {
    let mut group: Group = Group::new(String::from("Group 1"), 3);
    let first: Entry = create_plain_entry(1, "Alice");
    let second: Entry = create_plain_entry(2, "Bob");

    group.add(first.clone()).unwrap();
    group.add(second.clone()).unwrap();

    assert_eq!(group.members(), &[first, second]);
}

#[test]
fn test_add_to_full_group_rejected() {
    let mut group: Group = Group::new(String::from("Group 1"), 1);
    group.add(create_plain_entry(1, "Alice")).unwrap();

    let result: Result<(), DomainError> = group.add(create_plain_entry(2, "Bob"));

    assert!(matches!(
        result.unwrap_err(),
        DomainError::CapacityViolation { capacity: 1, .. }
    ));
    assert_eq!(group.len(), 1);
}

#[test]
fn test_add_duplicate_entry_rejected() {
    let mut group: Group = Group::new(String::from("Group 1"), 2);
    let entry: Entry = create_plain_entry(1, "Alice");
    group.add(entry.clone()).unwrap();

    let result: Result<(), DomainError> = group.add(entry);

    assert!(matches!(
        result.unwrap_err(),
        DomainError::DuplicateMember { .. }
    ));
    assert_eq!(group.len(), 1);
}

#[test]
fn test_has_category_per_dimension() {
    let mut group: Group = Group::new(String::from("Group 1"), 2);
    group.add(create_tagged_entry(1, "Alice", "A", "X")).unwrap();

    assert!(group.has_category(Some(&CategoryTag::new("A")), CategoryKind::Restricted));
    assert!(group.has_category(Some(&CategoryTag::new("X")), CategoryKind::Optional));

    // The dimensions are independent: "A" as an optional tag is absent.
    assert!(!group.has_category(Some(&CategoryTag::new("A")), CategoryKind::Optional));
    assert!(!group.has_category(Some(&CategoryTag::new("X")), CategoryKind::Restricted));
}

#[test]
fn test_has_category_none_is_false() {
    let mut group: Group = Group::new(String::from("Group 1"), 2);
    group.add(create_tagged_entry(1, "Alice", "A", "X")).unwrap();

    assert!(!group.has_category(None, CategoryKind::Restricted));
    assert!(!group.has_category(None, CategoryKind::Optional));
}

#[test]
fn test_group_display_lists_members() {
    let mut group: Group = Group::new(String::from("Group 1"), 2);
    group.add(create_plain_entry(1, "Alice")).unwrap();
    group.add(create_plain_entry(2, "Bob")).unwrap();

    assert_eq!(group.to_string(), "[Group 1]:\n\n[1]-[Alice]\n[2]-[Bob]");
}
