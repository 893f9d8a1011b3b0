// =====
// TESTS: 9
// =====
//
// Store-level grouping behavior: bulk regroup, incremental insertion, and
// the read accessors the list view renders from.

use grouped_chat::store::{Direction, GroupedMessageStore, InsertOutcome, Message};
use pretty_assertions::assert_eq;

use crate::helpers::{at, incoming, outgoing};

#[test]
fn load_all_of_nothing_yields_no_sections() {
    let mut store = GroupedMessageStore::new();
    store.load_all(Vec::new());
    assert_eq!(store.section_count(), 0);
}

#[test]
fn first_insert_opens_section_zero() {
    let mut store = GroupedMessageStore::new();
    let outcome = store.insert(incoming(25, 9, "hello"));
    assert_eq!(outcome, InsertOutcome::NewSection { section: 0 });
    assert_eq!(store.section_count(), 1);
    assert_eq!(store.row_count(0), 1);
}

#[test]
fn same_day_insert_appends_a_row() {
    let mut store = GroupedMessageStore::new();
    store.insert(incoming(25, 9, "hello"));
    let outcome = store.insert(outgoing(25, 10, "hi back"));
    assert_eq!(
        outcome,
        InsertOutcome::Appended { section: 0, row: 1, direction: Direction::Outgoing }
    );
    assert_eq!(store.row_count(0), 2);
}

#[test]
fn next_day_insert_opens_a_second_section() {
    let mut store = GroupedMessageStore::new();
    store.insert(incoming(25, 9, "hello"));
    store.insert(outgoing(25, 10, "hi back"));
    let outcome = store.insert(incoming(26, 8, "morning"));
    assert_eq!(outcome, InsertOutcome::NewSection { section: 1 });
    assert_eq!(store.section_count(), 2);
    assert_eq!(store.row_count(1), 1);
}

#[test]
fn bulk_load_groups_days_ascending_with_per_day_order_kept() {
    let mut store = GroupedMessageStore::new();
    let input = vec![
        incoming(28, 9, "d28 first"),
        outgoing(25, 12, "d25 first"),
        incoming(28, 7, "d28 second"), // earlier hour, later arrival
        outgoing(26, 10, "d26 first"),
        incoming(25, 20, "d25 second"),
    ];
    store.load_all(input);

    assert_eq!(store.section_count(), 3);
    // Keys strictly ascending and pairwise distinct
    let keys: Vec<_> = store.sections().iter().map(|s| s.key).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(keys, sorted);

    // Arrival order within a day survives, even against timestamps
    assert_eq!(store.message(0, 0).text, "d25 first");
    assert_eq!(store.message(0, 1).text, "d25 second");
    assert_eq!(store.message(2, 0).text, "d28 first");
    assert_eq!(store.message(2, 1).text, "d28 second");
}

#[test]
fn flattening_reconstructs_the_day_grouped_input() {
    let input = vec![
        incoming(25, 9, "a"),
        incoming(26, 9, "b"),
        incoming(25, 10, "c"),
        incoming(26, 11, "d"),
    ];
    let mut store = GroupedMessageStore::new();
    store.load_all(input.clone());

    let mut flattened: Vec<Message> = Vec::new();
    for section in 0..store.section_count() {
        for row in 0..store.row_count(section) {
            flattened.push(store.message(section, row).clone());
        }
    }

    // Group-then-flatten of the input by day
    let expected = vec![input[0].clone(), input[2].clone(), input[1].clone(), input[3].clone()];
    assert_eq!(flattened, expected);
}

#[test]
fn reads_are_idempotent() {
    let mut store = GroupedMessageStore::new();
    store.insert(incoming(25, 9, "stable"));
    let first_read = store.message(0, 0).clone();
    let second_read = store.message(0, 0).clone();
    assert_eq!(first_read, second_read);
}

#[test]
fn header_source_matches_the_section_day() {
    let mut store = GroupedMessageStore::new();
    store.load_all(vec![incoming(25, 9, "a"), incoming(26, 9, "b")]);
    let first = store.first_message_in_section(1).unwrap();
    assert_eq!(first.timestamp, at(26, 9));
}

#[test]
fn out_of_range_row_access_panics() {
    let mut store = GroupedMessageStore::new();
    store.insert(incoming(25, 9, "only one"));
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _ = store.message(0, 5);
    }));
    assert!(result.is_err());
}
