use std::cell::RefCell;
use std::rc::Rc;

use sheet_editor::{
    EditorSession, SessionConfig, SessionError, StateChangeType,
};

fn session(text: &str) -> EditorSession {
    EditorSession::new(text, SessionConfig::default())
}

#[test]
fn test_edit_records_a_structured_delta() {
    let mut s = session("hello world");
    s.edit(5..5, ",").unwrap();

    let delta = s.last_text_delta().unwrap();
    assert_eq!(delta.before_len, 11);
    assert_eq!(delta.after_len, 12);
    assert_eq!(delta.edits.len(), 1);
    assert_eq!(delta.edits[0].start, 5);
    assert_eq!(delta.edits[0].deleted, "");
    assert_eq!(delta.edits[0].inserted, ",");
    assert_eq!(s.text(), "hello, world");
}

#[test]
fn test_invalid_edit_range_is_rejected() {
    let mut s = session("abc");
    assert_eq!(
        s.edit(2..9, "x"),
        Err(SessionError::InvalidRange { start: 2, end: 9 })
    );
    assert_eq!(s.text(), "abc");

    assert!(s.edit(3..3, "d").is_ok());
    assert_eq!(s.text(), "abcd");
}

#[test]
fn test_undo_redo_round_trip() {
    let mut s = session("int x = 1;");
    s.edit(8..9, "42").unwrap();
    assert_eq!(s.text(), "int x = 42;");
    s.edit(4..5, "answer").unwrap();
    assert_eq!(s.text(), "int answer = 42;");

    assert!(s.undo());
    assert_eq!(s.text(), "int x = 42;");
    assert!(s.undo());
    assert_eq!(s.text(), "int x = 1;");
    assert!(!s.undo());

    assert!(s.redo());
    assert!(s.redo());
    assert_eq!(s.text(), "int answer = 42;");
    assert!(!s.redo());
}

#[test]
fn test_new_edit_clears_redo_history() {
    let mut s = session("a");
    s.edit(1..1, "b").unwrap();
    assert!(s.undo());
    assert!(s.can_redo());

    s.edit(1..1, "c").unwrap();
    assert!(!s.can_redo());
    assert_eq!(s.text(), "ac");
}

#[test]
fn test_cursor_shifts_with_edits_before_it() {
    let mut s = session("one two three");
    s.set_cursor(8); // at 't' of "three"
    s.edit(0..3, "1").unwrap();
    assert_eq!(s.text(), "1 two three");
    assert_eq!(s.cursor(), 6);
}

#[test]
fn test_cursor_snaps_to_grapheme_boundaries() {
    // "👍🏽" is two scalar values forming one grapheme cluster.
    let mut s = session("a👍🏽b");
    s.set_cursor(2);
    assert_eq!(s.cursor(), 1);
    s.set_cursor(3);
    assert_eq!(s.cursor(), 3);
    s.set_cursor(100);
    assert_eq!(s.cursor(), 4);
}

#[test]
fn test_display_column_accounts_for_tabs_and_width() {
    let mut s = session("\tint\t宽 = 0;");
    // After "\tint\t宽": tab → 2, "int" → 5, tab → 6, wide char → 8.
    s.set_cursor(6);
    assert_eq!(s.cursor_display_column(), 8);
}

#[test]
fn test_subscribers_observe_document_changes() {
    let mut s = session("x");
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    s.subscribe(move |change| sink.borrow_mut().push(change.change_type));

    s.edit(1..1, "y").unwrap();
    s.set_cursor(1);
    s.set_cursor(1); // no-op: cursor did not move

    let seen = seen.borrow();
    assert_eq!(
        *seen,
        vec![StateChangeType::DocumentModified, StateChangeType::CursorMoved]
    );
}

#[test]
fn test_versions_distinguish_content_from_style() {
    let mut s = session("x");
    let v0 = s.content_version();
    s.set_theme(Default::default());
    assert_eq!(s.content_version(), v0);
    assert!(s.version() > 0);

    s.edit(0..0, "y").unwrap();
    assert_eq!(s.content_version(), v0 + 1);
}
