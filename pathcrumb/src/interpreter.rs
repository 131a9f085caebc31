//! Keystroke interpreter.
//!
//! Decides, per event, whether the field text must be split into a committed
//! segment or whether the last segment must be pulled back into the field.
//! It only reads the field; [`crate::Breadcrumb`] applies the returned
//! actions to the path and the input box.
//!
//! Triggers:
//! - separator: the event inserted the separator character (typed or
//!   pasted). The field is split at the first separator, then the remainder
//!   is scanned again until no separator is left.
//! - deletion: a plain backspace while the field text is unchanged since the
//!   previous event, i.e. the user backspaced past the start of the field.

use crate::event::Event;

/// Mutation requested by the interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Commit `candidate` if it is acceptable, and leave `remainder` in the
    /// field with the cursor at its start.
    Split { candidate: String, remainder: String },
    /// Move the last tail segment back into the field.
    Uncommit,
}

/// Per-widget interpreter state.
#[derive(Debug, Clone)]
pub struct Interpreter {
    separator: char,
    /// Field text observed after the previous event.
    cached: String,
}

impl Interpreter {
    pub fn new(separator: char) -> Self {
        Self {
            separator,
            cached: String::new(),
        }
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn cached(&self) -> &str {
        &self.cached
    }

    /// Record the field text once an event is fully processed.
    pub fn sync(&mut self, value: &str) {
        if self.cached != value {
            self.cached.clear();
            self.cached.push_str(value);
        }
    }

    /// Decide what `event` does, given the field text after the host applied
    /// it and the number of tail segments.
    pub fn interpret(&self, event: &Event, value: &str, tail_len: usize) -> Vec<Action> {
        if event.inserts(self.separator) {
            let actions = self.split(value);
            log::trace!(
                "[interpreter] separator in {:?}: {} split(s)",
                value,
                actions.len()
            );
            return actions;
        }

        if event.is_backspace() && tail_len > 0 && value == self.cached {
            log::trace!("[interpreter] backspace past start of {:?}", value);
            return vec![Action::Uncommit];
        }

        Vec::new()
    }

    /// Split `value` at its first separator, repeating on the remainder.
    pub fn split(&self, value: &str) -> Vec<Action> {
        let mut actions = Vec::new();
        let mut rest = value;

        while let Some(index) = rest.find(self.separator) {
            let candidate = &rest[..index];
            let remainder = &rest[index + self.separator.len_utf8()..];
            actions.push(Action::Split {
                candidate: candidate.to_string(),
                remainder: remainder.to_string(),
            });
            rest = remainder;
        }

        actions
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new('/')
    }
}
