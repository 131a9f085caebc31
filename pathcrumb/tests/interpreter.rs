use pathcrumb::{Action, Event, Interpreter, Key, Modifiers};

fn split(candidate: &str, remainder: &str) -> Action {
    Action::Split {
        candidate: candidate.to_string(),
        remainder: remainder.to_string(),
    }
}

// ============================================================================
// Separator trigger
// ============================================================================

#[test]
fn test_separator_splits_at_first_occurrence() {
    let interp = Interpreter::new('/');

    let actions = interp.interpret(&Event::char('/'), "src/", 0);

    assert_eq!(actions, vec![split("src", "")]);
}

#[test]
fn test_separator_keeps_text_after_separator() {
    let interp = Interpreter::new('/');

    // Separator typed in the middle of "srcmain"
    let actions = interp.interpret(&Event::char('/'), "src/main", 0);

    assert_eq!(actions, vec![split("src", "main")]);
}

#[test]
fn test_lone_separator_yields_empty_candidate() {
    let interp = Interpreter::new('/');

    let actions = interp.interpret(&Event::char('/'), "/", 0);

    assert_eq!(actions, vec![split("", "")]);
}

#[test]
fn test_doubled_separator_rescans_remainder() {
    let interp = Interpreter::new('/');

    let actions = interp.interpret(&Event::Paste("a//b".into()), "a//b", 0);

    assert_eq!(actions, vec![split("a", "/b"), split("", "b")]);
}

#[test]
fn test_non_separator_char_never_splits() {
    let interp = Interpreter::new('/');

    // A separator already in the field is left alone until one is typed
    assert!(interp.interpret(&Event::char('x'), "a/x", 0).is_empty());
    assert!(interp.interpret(&Event::key(Key::Left), "a/b", 0).is_empty());
}

#[test]
fn test_ctrl_separator_is_not_a_separator() {
    let interp = Interpreter::new('/');
    let event = Event::Key {
        key: Key::Char('/'),
        modifiers: Modifiers::ctrl(),
    };

    assert!(interp.interpret(&event, "src/", 0).is_empty());
}

#[test]
fn test_shifted_separator_still_counts() {
    let interp = Interpreter::new(':');
    let event = Event::Key {
        key: Key::Char(':'),
        modifiers: Modifiers::shift(),
    };

    assert_eq!(interp.interpret(&event, "c:", 0), vec![split("c", "")]);
}

#[test]
fn test_custom_multibyte_separator() {
    let interp = Interpreter::new('›');

    let actions = interp.interpret(&Event::char('›'), "docs›api", 0);

    assert_eq!(actions, vec![split("docs", "api")]);
}

#[test]
fn test_paste_without_separator() {
    let interp = Interpreter::new('/');

    assert!(interp
        .interpret(&Event::Paste("main.rs".into()), "main.rs", 0)
        .is_empty());
}

// ============================================================================
// Deletion trigger
// ============================================================================

#[test]
fn test_backspace_on_unchanged_field_uncommits() {
    let mut interp = Interpreter::new('/');
    interp.sync("");

    let actions = interp.interpret(&Event::key(Key::Backspace), "", 1);

    assert_eq!(actions, vec![Action::Uncommit]);
}

#[test]
fn test_backspace_that_deleted_a_char_does_not_uncommit() {
    let mut interp = Interpreter::new('/');
    interp.sync("ab");

    assert!(interp
        .interpret(&Event::key(Key::Backspace), "a", 2)
        .is_empty());
}

#[test]
fn test_backspace_with_empty_tail_is_noop() {
    let mut interp = Interpreter::new('/');
    interp.sync("");

    assert!(interp
        .interpret(&Event::key(Key::Backspace), "", 0)
        .is_empty());
}

#[test]
fn test_backspace_at_start_of_non_empty_field() {
    // Cursor at 0 with "main" in the field: backspace changes nothing
    let mut interp = Interpreter::new('/');
    interp.sync("main");

    assert_eq!(
        interp.interpret(&Event::key(Key::Backspace), "main", 1),
        vec![Action::Uncommit]
    );
}

#[test]
fn test_modified_backspace_is_ignored() {
    let mut interp = Interpreter::new('/');
    interp.sync("");
    let event = Event::Key {
        key: Key::Backspace,
        modifiers: Modifiers::ctrl(),
    };

    assert!(interp.interpret(&event, "", 1).is_empty());
}

#[test]
fn test_delete_key_is_not_a_deletion_trigger() {
    let mut interp = Interpreter::new('/');
    interp.sync("");

    assert!(interp.interpret(&Event::key(Key::Delete), "", 1).is_empty());
}

// ============================================================================
// Cache
// ============================================================================

#[test]
fn test_sync_updates_cache() {
    let mut interp = Interpreter::default();
    assert_eq!(interp.cached(), "");
    assert_eq!(interp.separator(), '/');

    interp.sync("abc");
    assert_eq!(interp.cached(), "abc");

    interp.sync("");
    assert_eq!(interp.cached(), "");
}
