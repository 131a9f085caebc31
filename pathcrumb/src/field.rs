//! In-memory single-line text field for hosts without a native one.
//!
//! Cursor and anchor are char indices.

use crate::event::{Event, Key, Modifiers};
use crate::input_box::{CaretApi, TextField};

/// Text content, cursor and selection of one field.
#[derive(Debug, Clone, Default)]
pub struct FieldState {
    text: String,
    cursor: usize,
    /// Anchor position for selection. When Some and != cursor, text is selected.
    anchor: Option<usize>,
    placeholder: String,
    focused: bool,
}

impl FieldState {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self {
            text,
            cursor,
            ..Default::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Get the selection range as (start, end) where start <= end.
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.anchor.and_then(|a| {
            if a != self.cursor {
                Some(if a < self.cursor {
                    (a, self.cursor)
                } else {
                    (self.cursor, a)
                })
            } else {
                None
            }
        })
    }

    pub fn has_selection(&self) -> bool {
        self.selection().is_some()
    }

    pub fn clear_selection(&mut self) {
        self.anchor = None;
    }

    pub fn select_all(&mut self) {
        if !self.text.is_empty() {
            self.anchor = Some(0);
            self.cursor = self.char_count();
        }
    }

    /// Apply an editing event, the way a native text box would before the
    /// breadcrumb sees it.
    pub fn apply(&mut self, event: &Event) -> TextEditResult {
        match event {
            Event::Key { key, modifiers } => self.handle_key(*key, *modifiers),
            Event::Paste(text) => {
                self.insert_str(text);
                TextEditResult::Changed
            }
        }
    }

    fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> TextEditResult {
        match key {
            Key::Char(c) if modifiers.inserts_text() => {
                self.insert_str(c.encode_utf8(&mut [0; 4]));
                TextEditResult::Changed
            }

            Key::Char('a') if modifiers.ctrl => {
                self.select_all();
                TextEditResult::Handled
            }

            Key::Backspace if modifiers.none() => {
                if self.delete_back() {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Delete if modifiers.none() => {
                if self.delete_forward() {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Left if !modifiers.ctrl => {
                self.move_cursor(-1, modifiers.shift);
                TextEditResult::Handled
            }

            Key::Right if !modifiers.ctrl => {
                self.move_cursor(1, modifiers.shift);
                TextEditResult::Handled
            }

            Key::Home if !modifiers.ctrl => {
                self.move_to(0, modifiers.shift);
                TextEditResult::Handled
            }

            Key::End if !modifiers.ctrl => {
                self.move_to(self.char_count(), modifiers.shift);
                TextEditResult::Handled
            }

            Key::Enter => TextEditResult::Submitted,

            _ => TextEditResult::Ignored,
        }
    }

    /// Insert text at the cursor, replacing the selection if any.
    pub fn insert_str(&mut self, s: &str) {
        let at = match self.selection() {
            Some((start, end)) => {
                self.remove_range(start, end);
                start
            }
            None => self.cursor,
        };
        let byte_pos = char_to_byte_index(&self.text, at);
        self.text.insert_str(byte_pos, s);
        self.cursor = at + s.chars().count();
        self.clear_selection();
    }

    /// Delete character before cursor or delete selection.
    /// Returns true if text changed.
    fn delete_back(&mut self) -> bool {
        if let Some((start, end)) = self.selection() {
            self.remove_range(start, end);
            self.cursor = start;
            self.clear_selection();
            true
        } else if self.cursor > 0 {
            self.remove_range(self.cursor - 1, self.cursor);
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Delete character after cursor or delete selection.
    /// Returns true if text changed.
    fn delete_forward(&mut self) -> bool {
        if let Some((start, end)) = self.selection() {
            self.remove_range(start, end);
            self.cursor = start;
            self.clear_selection();
            true
        } else if self.cursor < self.char_count() {
            self.remove_range(self.cursor, self.cursor + 1);
            true
        } else {
            false
        }
    }

    fn remove_range(&mut self, start: usize, end: usize) {
        let start = char_to_byte_index(&self.text, start);
        let end = char_to_byte_index(&self.text, end);
        self.text.replace_range(start..end, "");
    }

    /// Move cursor by delta characters.
    fn move_cursor(&mut self, delta: isize, extend_selection: bool) {
        if !extend_selection {
            // Collapse an existing selection onto the edge in the direction of travel
            if let Some((start, end)) = self.selection() {
                self.cursor = if delta < 0 { start } else { end };
                self.clear_selection();
                return;
            }
        }
        let target = self.cursor.saturating_add_signed(delta);
        self.move_to(target, extend_selection);
    }

    fn move_to(&mut self, pos: usize, extend_selection: bool) {
        if extend_selection && self.anchor.is_none() {
            self.anchor = Some(self.cursor);
        } else if !extend_selection {
            self.clear_selection();
        }
        self.cursor = pos.min(self.char_count());
    }
}

impl TextField for FieldState {
    fn value(&self) -> &str {
        &self.text
    }

    /// Replace the text, placing cursor at end.
    fn set_value(&mut self, value: &str) {
        self.text.clear();
        self.text.push_str(value);
        self.cursor = self.char_count();
        self.anchor = None;
    }

    fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn caret_api(&self) -> CaretApi {
        CaretApi::SelectionRange
    }

    fn set_selection_range(&mut self, start: usize, end: usize) {
        let len = self.char_count();
        let (start, end) = (start.min(len), end.min(len));
        self.anchor = (start != end).then_some(start);
        self.cursor = end;
    }
}

/// Result of handling a text editing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditResult {
    /// Text was modified.
    Changed,
    /// Enter was pressed.
    Submitted,
    /// Key was handled but text didn't change (e.g., cursor movement).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
