use std::cell::RefCell;
use std::rc::Rc;

use pathcrumb::{
    Breadcrumb, BreadcrumbConfig, BreadcrumbError, Callbacks, Container, Event, FieldState, Key,
    MarkupSink, MemorySink, Notification, Page, TextField,
};

type Crumbs = Breadcrumb<MemorySink, FieldState>;

fn page() -> Page<MemorySink, FieldState> {
    Page::new().with_container(
        "breadcrumb",
        Container::new(MemorySink::new(), MemorySink::new(), FieldState::default()),
    )
}

fn mounted(config: BreadcrumbConfig) -> Crumbs {
    mounted_with(config, Callbacks::new())
}

fn mounted_with(config: BreadcrumbConfig, callbacks: Callbacks) -> Crumbs {
    let mut crumbs = Breadcrumb::mount(&mut page(), config, callbacks).unwrap();
    crumbs.init();
    crumbs
}

/// Deliver an event the way a host does: edit the field, then notify.
fn send(crumbs: &mut Crumbs, event: Event) {
    crumbs.input_box_mut().field_mut().apply(&event);
    crumbs.handle_event(&event);
}

fn type_str(crumbs: &mut Crumbs, s: &str) {
    for c in s.chars() {
        send(crumbs, Event::char(c));
    }
}

fn backspace(crumbs: &mut Crumbs) {
    send(crumbs, Event::key(Key::Backspace));
}

fn tail_hrefs(crumbs: &Crumbs) -> Vec<String> {
    crumbs
        .tail_sink()
        .crumbs()
        .iter()
        .map(|c| c.href.clone())
        .collect()
}

// ============================================================================
// Mounting
// ============================================================================

#[test]
fn test_mount_missing_container() {
    let mut page = page();
    let err = Breadcrumb::mount(
        &mut page,
        BreadcrumbConfig::new().container_id("nav"),
        Callbacks::new(),
    )
    .unwrap_err();

    match err {
        BreadcrumbError::MissingMarkup { region } => assert_eq!(region, "container 'nav'"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_mount_missing_regions() {
    let cases = [
        (
            Container {
                prefix: None,
                tail: Some(MemorySink::new()),
                input: Some(FieldState::default()),
            },
            "basepath-container",
        ),
        (
            Container {
                prefix: Some(MemorySink::new()),
                tail: None,
                input: Some(FieldState::default()),
            },
            "sections-container",
        ),
        (
            Container {
                prefix: Some(MemorySink::new()),
                tail: Some(MemorySink::new()),
                input: None,
            },
            "breadcrumb-input",
        ),
        (Container::empty(), "basepath-container"),
    ];

    for (container, expected) in cases {
        let mut page = Page::new().with_container("breadcrumb", container);
        let err = Breadcrumb::mount(&mut page, BreadcrumbConfig::new(), Callbacks::new())
            .unwrap_err();
        assert_eq!(err.to_string(), format!("missing markup region: {expected}"));
    }
}

#[test]
fn test_mount_invalid_pattern() {
    let err = Breadcrumb::mount(
        &mut page(),
        BreadcrumbConfig::new().valid_pattern("(("),
        Callbacks::new(),
    )
    .unwrap_err();

    assert!(matches!(err, BreadcrumbError::InvalidPattern(_)));
}

#[test]
fn test_mount_takes_container() {
    let mut page = page();
    assert!(page.contains("breadcrumb"));

    Breadcrumb::mount(&mut page, BreadcrumbConfig::new(), Callbacks::new()).unwrap();

    assert!(!page.contains("breadcrumb"));
}

// ============================================================================
// Init
// ============================================================================

#[test]
fn test_init_renders_and_fills_field() {
    let crumbs = mounted(
        BreadcrumbConfig::new()
            .prefix(["org", "repo"])
            .tail(["src"])
            .file_name("main")
            .placeholder("file name"),
    );

    assert!(crumbs.is_initialized());
    assert_eq!(crumbs.prefix_sink().crumbs().len(), 2);
    assert_eq!(tail_hrefs(&crumbs), ["org/repo/src/"]);
    assert_eq!(crumbs.input_box().value(), "main");
    assert_eq!(crumbs.input_box().field().placeholder(), "file name");
}

#[test]
fn test_init_splits_initial_file_name() {
    let mut crumbs = mounted(BreadcrumbConfig::new().file_name("a/b"));

    let path = crumbs.path();
    assert_eq!(path.tail, vec!["a"]);
    assert_eq!(path.file_name, "b");
    assert_eq!(tail_hrefs(&crumbs), ["a/"]);

    type_str(&mut crumbs, "c");

    let path = crumbs.path();
    assert_eq!(path.tail, vec!["a"]);
    assert_eq!(path.file_name, "bc");
    assert!(!path.file_name.contains('/'));
}

#[test]
fn test_init_drops_invalid_initial_segments() {
    let crumbs = mounted(BreadcrumbConfig::new().file_name("/bad name/x"));

    let path = crumbs.path();
    assert!(path.tail.is_empty());
    assert_eq!(path.file_name, "x");
}

#[test]
fn test_events_before_init_are_ignored() {
    let mut crumbs = Breadcrumb::mount(&mut page(), BreadcrumbConfig::new(), Callbacks::new())
        .unwrap();

    for c in "src/".chars() {
        let event = Event::char(c);
        crumbs.input_box_mut().field_mut().apply(&event);
        crumbs.handle_event(&event);
    }

    assert!(crumbs.path().tail.is_empty());
    assert_eq!(crumbs.input_box().value(), "src/");
}

#[test]
fn test_new_from_regions() {
    let mut crumbs = Breadcrumb::new(
        MarkupSink::new(),
        MarkupSink::new(),
        FieldState::default(),
        BreadcrumbConfig::new().prefix(["org"]),
        Callbacks::new(),
    )
    .unwrap();
    crumbs.init();

    assert_eq!(
        crumbs.prefix_sink().html(),
        "<a class=\"section\" href=\"org/\">org</a><span class=\"separator\"> / </span>"
    );
    assert_eq!(crumbs.tail_sink().html(), "");
}

// ============================================================================
// Commit
// ============================================================================

#[test]
fn test_typing_segment_and_separator_commits() {
    let mut crumbs = mounted(BreadcrumbConfig::new());

    type_str(&mut crumbs, "src/");

    let path = crumbs.path();
    assert_eq!(path.tail, ["src"]);
    assert_eq!(path.file_name, "");
    assert_eq!(crumbs.input_box().field().cursor(), 0);
}

#[test]
fn test_separator_mid_text_keeps_remainder() {
    let mut crumbs = mounted(BreadcrumbConfig::new().file_name("srcmain"));
    for _ in 0..4 {
        send(&mut crumbs, Event::key(Key::Left));
    }

    send(&mut crumbs, Event::char('/'));

    assert_eq!(crumbs.path().tail, ["src"]);
    assert_eq!(crumbs.input_box().value(), "main");
    assert_eq!(crumbs.input_box().field().cursor(), 0);
}

#[test]
fn test_lone_separator_never_commits() {
    let mut crumbs = mounted(BreadcrumbConfig::new());

    type_str(&mut crumbs, "/");
    type_str(&mut crumbs, "/");

    assert!(crumbs.path().tail.is_empty());
    assert_eq!(crumbs.input_box().value(), "");
}

#[test]
fn test_pasted_double_separator_commits_once() {
    let adds = Rc::new(RefCell::new(0));
    let counter = adds.clone();
    let callbacks = Callbacks::new().on(Notification::AfterAdd, move |_| {
        *counter.borrow_mut() += 1;
    });
    let mut crumbs = mounted_with(BreadcrumbConfig::new(), callbacks);

    send(&mut crumbs, Event::Paste("a//b".into()));

    assert_eq!(crumbs.path().tail, ["a"]);
    assert_eq!(crumbs.path().file_name, "b");
    assert_eq!(*adds.borrow(), 1);
}

#[test]
fn test_invalid_segment_is_dropped_but_field_cleared() {
    let adds = Rc::new(RefCell::new(0));
    let counter = adds.clone();
    let callbacks = Callbacks::new().on(Notification::AfterAdd, move |_| {
        *counter.borrow_mut() += 1;
    });
    let mut crumbs = mounted_with(BreadcrumbConfig::new(), callbacks);

    type_str(&mut crumbs, "main.rs/x");

    assert!(crumbs.path().tail.is_empty());
    assert_eq!(crumbs.input_box().value(), "x");
    assert_eq!(*adds.borrow(), 0);
}

#[test]
fn test_no_validation_accepts_dots() {
    let mut crumbs = mounted(BreadcrumbConfig::new().no_validation());

    type_str(&mut crumbs, "v1.2/");

    assert_eq!(crumbs.path().tail, ["v1.2"]);
}

#[test]
fn test_custom_separator() {
    let mut crumbs = mounted(BreadcrumbConfig::new().separator(':'));

    type_str(&mut crumbs, "a/b:");

    // '/' is ordinary text here, and fails the default pattern
    assert!(crumbs.path().tail.is_empty());

    type_str(&mut crumbs, "docs:");
    assert_eq!(crumbs.path().tail, ["docs"]);
}

// ============================================================================
// Uncommit
// ============================================================================

#[test]
fn test_backspace_on_empty_field_reopens_segment() {
    let mut crumbs = mounted(BreadcrumbConfig::new());
    type_str(&mut crumbs, "src/lib/");
    assert_eq!(crumbs.path().tail, ["src", "lib"]);

    backspace(&mut crumbs);

    assert_eq!(crumbs.path().tail, ["src"]);
    assert_eq!(crumbs.input_box().value(), "lib");
    assert_eq!(crumbs.input_box().field().cursor(), 3);
}

#[test]
fn test_backspace_deletes_chars_before_reopening() {
    let mut crumbs = mounted(BreadcrumbConfig::new());
    type_str(&mut crumbs, "src/ab");

    backspace(&mut crumbs);
    backspace(&mut crumbs);
    assert_eq!(crumbs.path().tail, ["src"]);
    assert_eq!(crumbs.input_box().value(), "");

    // Field was already empty: this one reopens "src"
    backspace(&mut crumbs);
    assert!(crumbs.path().tail.is_empty());
    assert_eq!(crumbs.input_box().value(), "src");
}

#[test]
fn test_backspace_at_field_start_joins_text() {
    let mut crumbs = mounted(BreadcrumbConfig::new());
    type_str(&mut crumbs, "src/main");
    send(&mut crumbs, Event::key(Key::Home));

    backspace(&mut crumbs);

    assert!(crumbs.path().tail.is_empty());
    assert_eq!(crumbs.input_box().value(), "srcmain");
    assert_eq!(crumbs.input_box().field().cursor(), 3);

    // Typing continues at the boundary
    type_str(&mut crumbs, "/");
    assert_eq!(crumbs.path().tail, ["src"]);
    assert_eq!(crumbs.input_box().value(), "main");
}

#[test]
fn test_backspace_with_empty_tail_is_noop() {
    let mut crumbs = mounted(BreadcrumbConfig::new().prefix(["org"]));

    backspace(&mut crumbs);
    backspace(&mut crumbs);

    assert!(crumbs.path().tail.is_empty());
    assert_eq!(crumbs.path().prefix, ["org"]);
    assert_eq!(crumbs.input_box().value(), "");
}

#[test]
fn test_initial_tail_reopens_on_first_backspace() {
    let mut crumbs = mounted(BreadcrumbConfig::new().tail(["a", "b"]));

    backspace(&mut crumbs);

    assert_eq!(crumbs.path().tail, ["a"]);
    assert_eq!(crumbs.input_box().value(), "b");
}

#[test]
fn test_commits_and_uncommits_preserve_order() {
    let mut crumbs = mounted(BreadcrumbConfig::new());
    type_str(&mut crumbs, "a/b/c/d/");

    backspace(&mut crumbs);
    // "d" is back in the field; clear it so the next backspace reopens "c"
    for _ in 0..2 {
        backspace(&mut crumbs);
    }

    assert_eq!(crumbs.path().tail, ["a", "b"]);
    assert_eq!(crumbs.input_box().value(), "c");
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_commit_rerenders_tail_only() {
    let mut crumbs = mounted(BreadcrumbConfig::new().prefix(["org"]));
    let prefix_writes = crumbs.prefix_sink().writes();
    let tail_writes = crumbs.tail_sink().writes();

    type_str(&mut crumbs, "src/");
    backspace(&mut crumbs);

    assert_eq!(crumbs.prefix_sink().writes(), prefix_writes);
    assert_eq!(crumbs.tail_sink().writes(), tail_writes + 2);
    assert!(crumbs.tail_sink().crumbs().is_empty());
}

#[test]
fn test_render_twice_is_identical() {
    let mut crumbs = mounted(BreadcrumbConfig::new().prefix(["org"]).tail(["src"]));
    let before = (
        crumbs.prefix_sink().crumbs().to_vec(),
        crumbs.tail_sink().crumbs().to_vec(),
    );

    crumbs.render();
    crumbs.render();

    assert_eq!(crumbs.prefix_sink().crumbs(), before.0.as_slice());
    assert_eq!(crumbs.tail_sink().crumbs(), before.1.as_slice());
}

#[test]
fn test_plain_mode() {
    let mut page = Page::new().with_container(
        "breadcrumb",
        Container::new(MarkupSink::new(), MarkupSink::new(), FieldState::default()),
    );
    let mut crumbs = Breadcrumb::mount(
        &mut page,
        BreadcrumbConfig::new().create_links(false),
        Callbacks::new(),
    )
    .unwrap();
    crumbs.init();

    for c in "src/".chars() {
        let event = Event::char(c);
        crumbs.input_box_mut().field_mut().apply(&event);
        crumbs.handle_event(&event);
    }

    assert_eq!(
        crumbs.tail_sink().html(),
        "<span class=\"section\">src</span><span class=\"separator\"> / </span>"
    );
}

// ============================================================================
// Notifications
// ============================================================================

#[test]
fn test_notification_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut callbacks = Callbacks::new();
    for kind in [
        Notification::Init,
        Notification::InputKeyup,
        Notification::AfterAdd,
        Notification::AfterRemove,
    ] {
        let log = log.clone();
        callbacks.set(kind, move |notice| {
            log.borrow_mut().push(notice.kind.name());
        });
    }
    let mut crumbs = mounted_with(BreadcrumbConfig::new(), callbacks);

    type_str(&mut crumbs, "a/");
    backspace(&mut crumbs);

    assert_eq!(
        *log.borrow(),
        [
            "on_init",
            "on_input_keyup",
            "after_add_section",
            "on_input_keyup",
            "after_remove_section",
            "on_input_keyup",
        ]
    );
}

#[test]
fn test_keyup_notice_carries_event_and_path() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let callbacks = Callbacks::new().on(Notification::InputKeyup, move |notice| {
        sink.borrow_mut()
            .push((notice.event.cloned(), notice.path.tail.clone()));
    });
    let mut crumbs = mounted_with(BreadcrumbConfig::new(), callbacks);

    type_str(&mut crumbs, "x/");

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], (Some(Event::char('x')), Vec::<String>::new()));
    assert_eq!(seen[1], (Some(Event::char('/')), vec!["x".to_string()]));
}

#[test]
fn test_after_add_sees_committed_path() {
    let tails = Rc::new(RefCell::new(Vec::new()));
    let sink = tails.clone();
    let callbacks = Callbacks::new().on(Notification::AfterAdd, move |notice| {
        assert!(notice.event.is_none());
        sink.borrow_mut().push(notice.path.tail.clone());
    });
    let mut crumbs = mounted_with(BreadcrumbConfig::new(), callbacks);

    type_str(&mut crumbs, "a/b/");

    assert_eq!(
        *tails.borrow(),
        vec![vec!["a".to_string()], vec!["a".to_string(), "b".to_string()]]
    );
}

#[test]
fn test_callbacks_registry() {
    let mut callbacks = Callbacks::new().on(Notification::Init, |_| {});
    assert!(callbacks.has(Notification::Init));
    assert!(!callbacks.has(Notification::AfterAdd));
    assert_eq!(callbacks.len(), 1);

    assert!(callbacks.remove(Notification::Init));
    assert!(callbacks.is_empty());
    assert!(!callbacks.remove(Notification::Init));
}

// ============================================================================
// Path snapshot
// ============================================================================

#[test]
fn test_path_reflects_live_field_text() {
    let mut crumbs = mounted(BreadcrumbConfig::new().prefix(["org"]));
    type_str(&mut crumbs, "src/ma");

    crumbs.input_box_mut().field_mut().set_value("changed");

    let path = crumbs.path();
    assert_eq!(path.prefix, ["org"]);
    assert_eq!(path.tail, ["src"]);
    assert_eq!(path.file_name, "changed");
}

#[test]
fn test_widgets_do_not_share_state() {
    let mut first = mounted(BreadcrumbConfig::new());
    let second = mounted(BreadcrumbConfig::new());

    type_str(&mut first, "a/");

    assert_eq!(first.path().tail, ["a"]);
    assert!(second.path().tail.is_empty());
}

// ============================================================================
// End to end
// ============================================================================

#[test]
fn test_end_to_end() {
    let mut crumbs = mounted(BreadcrumbConfig::new().prefix(["org", "repo"]));

    type_str(&mut crumbs, "src/");
    assert_eq!(crumbs.path().tail, ["src"]);
    assert_eq!(tail_hrefs(&crumbs), ["org/repo/src/"]);

    type_str(&mut crumbs, "main.js");
    assert_eq!(crumbs.path().tail, ["src"]);
    assert_eq!(crumbs.path().file_name, "main.js");

    // Empty the field; a non-editing key lets the cache catch up
    crumbs.input_box_mut().set_value("");
    send(&mut crumbs, Event::key(Key::End));

    backspace(&mut crumbs);
    assert!(crumbs.path().tail.is_empty());
    assert_eq!(crumbs.input_box().value(), "src");
    assert!(tail_hrefs(&crumbs).is_empty());
}
