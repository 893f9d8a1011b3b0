// =====
// TESTS: 6
// =====
//
// Feed → store flow: the demo refresh queues received messages on the feed
// channel and the event loop inserts them one at a time, in order.

use crossterm::event::{KeyCode, KeyModifiers};
use grouped_chat::app::{FeedEvent, feed, handle_feed_event};
use grouped_chat::store::Direction;
use pretty_assertions::assert_eq;

use crate::helpers::{drain_feed, incoming, press_with, test_app, type_str};

#[test]
fn refresh_delivers_the_scripted_conversation() {
    let mut app = test_app();
    feed::request_refresh(&app);
    drain_feed(&mut app);

    // Three messages stamped "now" land in a single section, arrival order
    assert_eq!(app.store.section_count(), 1);
    assert_eq!(app.store.row_count(0), 3);
    assert_eq!(app.store.message(0, 0).text, "Hi");
    assert_eq!(app.store.message(0, 1).text, "I am good");
    assert_eq!(app.store.message(0, 2).text, "How are you?");
    assert!((0..3).all(|row| app.store.message(0, row).direction == Direction::Incoming));
}

#[test]
fn ctrl_r_triggers_the_refresh() {
    let mut app = test_app();
    press_with(&mut app, KeyCode::Char('r'), KeyModifiers::CONTROL);
    drain_feed(&mut app);
    assert_eq!(app.store.row_count(0), 3);
}

#[test]
fn received_messages_join_todays_outgoing_section() {
    let mut app = test_app();
    type_str(&mut app, "anyone there?");
    press_with(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    assert_eq!(app.store.section_count(), 1);

    feed::request_refresh(&app);
    drain_feed(&mut app);

    // Same calendar day, so no new section
    assert_eq!(app.store.section_count(), 1);
    assert_eq!(app.store.row_count(0), 4);
    assert_eq!(app.store.last_position(), Some((0, 3)));
}

#[test]
fn two_refreshes_append_in_order() {
    let mut app = test_app();
    feed::request_refresh(&app);
    feed::request_refresh(&app);
    drain_feed(&mut app);

    assert_eq!(app.store.section_count(), 1);
    assert_eq!(app.store.row_count(0), 6);
    assert_eq!(app.store.message(0, 3).text, "Hi");
}

#[test]
fn received_message_re_engages_scroll_follow() {
    let mut app = test_app();
    press_with(&mut app, KeyCode::Up, KeyModifiers::CONTROL);
    assert!(!app.auto_scroll);

    handle_feed_event(&mut app, FeedEvent::Received(incoming(25, 9, "ping")));
    assert!(app.auto_scroll);
    assert_eq!(app.store.section_count(), 1);
}

#[test]
fn blank_feed_message_is_dropped_not_inserted() {
    let mut app = test_app();
    handle_feed_event(&mut app, FeedEvent::Received(incoming(25, 9, "   ")));
    assert_eq!(app.store.section_count(), 0);
}
