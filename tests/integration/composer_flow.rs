// =====
// TESTS: 7
// =====
//
// Composer → store flow driven through real key events: Enter submits,
// Shift+Enter breaks the line, blanks never reach the store.

use crossterm::event::{KeyCode, KeyModifiers};
use grouped_chat::store::Direction;
use pretty_assertions::assert_eq;

use crate::helpers::{press, press_with, test_app, type_str};

#[test]
fn enter_submits_the_typed_message() {
    let mut app = test_app();
    type_str(&mut app, "Hello there");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.store.section_count(), 1);
    assert_eq!(app.store.row_count(0), 1);
    let message = app.store.message(0, 0);
    assert_eq!(message.text, "Hello there");
    assert_eq!(message.direction, Direction::Outgoing);
    assert!(app.composer.is_empty());
}

#[test]
fn submitted_text_is_trimmed() {
    let mut app = test_app();
    type_str(&mut app, "   padded   ");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.store.message(0, 0).text, "padded");
}

#[test]
fn blank_input_submits_nothing() {
    let mut app = test_app();
    type_str(&mut app, "    ");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.store.section_count(), 0);
    // The blanks stay in the composer for further editing
    assert_eq!(app.composer.text(), "    ");
}

#[test]
fn enter_on_an_empty_composer_is_a_no_op() {
    let mut app = test_app();
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.store.section_count(), 0);
    assert!(app.composer.is_empty());
}

#[test]
fn shift_enter_inserts_a_newline_instead_of_submitting() {
    let mut app = test_app();
    type_str(&mut app, "first");
    press_with(&mut app, KeyCode::Enter, KeyModifiers::SHIFT);
    type_str(&mut app, "second");

    assert_eq!(app.store.section_count(), 0);
    assert_eq!(app.composer.text(), "first\nsecond");

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.store.message(0, 0).text, "first\nsecond");
}

#[test]
fn two_sends_on_the_same_day_share_a_section() {
    let mut app = test_app();
    type_str(&mut app, "one");
    press(&mut app, KeyCode::Enter);
    type_str(&mut app, "two");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.store.section_count(), 1);
    assert_eq!(app.store.row_count(0), 2);
    assert_eq!(app.store.last_position(), Some((0, 1)));
}

#[test]
fn submit_re_engages_scroll_follow() {
    let mut app = test_app();
    // User scrolled up into history
    press_with(&mut app, KeyCode::Up, KeyModifiers::CONTROL);
    assert!(!app.auto_scroll);

    type_str(&mut app, "back to the bottom");
    press(&mut app, KeyCode::Enter);
    assert!(app.auto_scroll);
}
