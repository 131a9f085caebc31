//! Host notifications.
//!
//! - `Notification`: the closed set of things a breadcrumb reports
//! - `Notice`: context value handed to a handler
//! - `Callbacks`: at most one handler per notification

use std::collections::HashMap;

use crate::event::Event;
use crate::path::PathSnapshot;

/// Things a breadcrumb reports to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    /// After the first render and event binding.
    Init,
    /// After every processed event.
    InputKeyup,
    /// After a segment was committed.
    AfterAdd,
    /// After a segment was pulled back into the field.
    AfterRemove,
}

impl Notification {
    /// Host-facing name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init => "on_init",
            Self::InputKeyup => "on_input_keyup",
            Self::AfterAdd => "after_add_section",
            Self::AfterRemove => "after_remove_section",
        }
    }
}

/// Context handed to a handler.
#[derive(Debug, Clone)]
pub struct Notice<'a> {
    pub kind: Notification,
    /// Path at the time of the notification.
    pub path: PathSnapshot,
    /// The event being processed, for `InputKeyup`.
    pub event: Option<&'a Event>,
}

/// A notification handler.
pub type Handler = Box<dyn FnMut(&Notice<'_>)>;

/// Handlers keyed by notification.
#[derive(Default)]
pub struct Callbacks {
    handlers: HashMap<Notification, Handler>,
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `kind`, replacing any previous one.
    pub fn on(mut self, kind: Notification, handler: impl FnMut(&Notice<'_>) + 'static) -> Self {
        self.set(kind, handler);
        self
    }

    pub fn set(&mut self, kind: Notification, handler: impl FnMut(&Notice<'_>) + 'static) {
        self.handlers.insert(kind, Box::new(handler));
    }

    pub fn remove(&mut self, kind: Notification) -> bool {
        self.handlers.remove(&kind).is_some()
    }

    pub fn has(&self, kind: Notification) -> bool {
        self.handlers.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Invoke the handler for `notice.kind`. Returns false if none is set.
    pub fn dispatch(&mut self, notice: &Notice<'_>) -> bool {
        match self.handlers.get_mut(&notice.kind) {
            Some(handler) => {
                handler(notice);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<&str> = self.handlers.keys().map(Notification::name).collect();
        kinds.sort_unstable();
        f.debug_struct("Callbacks")
            .field("handlers", &kinds)
            .finish()
    }
}
