use chrono::{DateTime, Local, TimeZone as _};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use grouped_chat::app::{App, handle_feed_event, handle_terminal_event};
use grouped_chat::store::Message;

/// Build a minimal `App` for integration testing.
/// No terminal, no feed producer -- just state.
pub fn test_app() -> App {
    App::test_default()
}

/// A fixed point in time on the given May 2020 day.
pub fn at(day: u32, hour: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2020, 5, day, hour, 0, 0).unwrap()
}

pub fn incoming(day: u32, hour: u32, text: &str) -> Message {
    Message::incoming(text, at(day, hour))
}

pub fn outgoing(day: u32, hour: u32, text: &str) -> Message {
    Message::outgoing(text, at(day, hour))
}

/// Press a key with no modifiers.
pub fn press(app: &mut App, code: KeyCode) {
    press_with(app, code, KeyModifiers::NONE);
}

pub fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    handle_terminal_event(app, Event::Key(KeyEvent::new(code, modifiers)));
}

/// Type a string one key press at a time, like a user would.
pub fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Apply every feed event currently queued on the channel, in order.
pub fn drain_feed(app: &mut App) {
    while let Ok(event) = app.feed_rx.try_recv() {
        handle_feed_event(app, event);
    }
}
