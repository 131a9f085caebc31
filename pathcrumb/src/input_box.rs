//! Input box controller: a thin facade over the host's text field.
//!
//! Hosts expose one of two caret APIs. A native selection range places the
//! caret directly; the legacy text range API builds a range object, collapses
//! it and moves both ends. [`InputBox`] picks the matching [`CaretDriver`]
//! once, when it is created.

/// Caret API offered by a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretApi {
    /// `set_selection_range(start, end)`
    SelectionRange,
    /// `create_text_range()` + `select_text_range(range)`
    TextRange,
    /// No way to place the caret.
    Unsupported,
}

/// The host's text field.
pub trait TextField {
    fn value(&self) -> &str;

    fn set_value(&mut self, value: &str);

    fn set_placeholder(&mut self, placeholder: &str);

    fn focus(&mut self);

    /// Which caret API this field implements.
    fn caret_api(&self) -> CaretApi;

    /// Select the chars in `start..end`; an empty range places the caret.
    fn set_selection_range(&mut self, _start: usize, _end: usize) {}

    /// Range spanning the whole value.
    fn create_text_range(&self) -> TextRange {
        TextRange::new(self.value().chars().count())
    }

    /// Apply a range built with [`TextField::create_text_range`].
    fn select_text_range(&mut self, _range: &TextRange) {}
}

/// Legacy text range over a field value, in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRange {
    start: usize,
    end: usize,
    len: usize,
}

impl TextRange {
    /// Range covering `len` chars.
    pub fn new(len: usize) -> Self {
        Self { start: 0, end: len, len }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Collapse onto the start (`true`) or the end (`false`).
    pub fn collapse(&mut self, to_start: bool) {
        if to_start {
            self.end = self.start;
        } else {
            self.start = self.end;
        }
    }

    /// Move the start by `count` chars. The end follows if overtaken.
    pub fn move_start(&mut self, count: isize) {
        self.start = self.shift(self.start, count);
        if self.start > self.end {
            self.end = self.start;
        }
    }

    /// Move the end by `count` chars. The start follows if overtaken.
    pub fn move_end(&mut self, count: isize) {
        self.end = self.shift(self.end, count);
        if self.end < self.start {
            self.start = self.end;
        }
    }

    fn shift(&self, pos: usize, count: isize) -> usize {
        pos.saturating_add_signed(count).min(self.len)
    }
}

/// Places the caret through one specific caret API.
pub trait CaretDriver: std::fmt::Debug {
    fn place(&self, field: &mut dyn TextField, offset: usize);
}

/// Native selection range.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionRangeCaret;

impl CaretDriver for SelectionRangeCaret {
    fn place(&self, field: &mut dyn TextField, offset: usize) {
        field.focus();
        field.set_selection_range(offset, offset);
    }
}

/// Legacy text range.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRangeCaret;

impl CaretDriver for TextRangeCaret {
    fn place(&self, field: &mut dyn TextField, offset: usize) {
        let offset = isize::try_from(offset).unwrap_or(isize::MAX);
        let mut range = field.create_text_range();
        range.collapse(true);
        range.move_end(offset);
        range.move_start(offset);
        field.select_text_range(&range);
    }
}

/// Fields without a caret API.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCaret;

impl CaretDriver for NoCaret {
    fn place(&self, _field: &mut dyn TextField, _offset: usize) {}
}

/// Driver matching `api`.
pub fn caret_driver(api: CaretApi) -> Box<dyn CaretDriver> {
    match api {
        CaretApi::SelectionRange => Box::new(SelectionRangeCaret),
        CaretApi::TextRange => Box::new(TextRangeCaret),
        CaretApi::Unsupported => Box::new(NoCaret),
    }
}

/// Controller over a host text field.
#[derive(Debug)]
pub struct InputBox<F> {
    field: F,
    caret: Box<dyn CaretDriver>,
}

impl<F: TextField> InputBox<F> {
    pub fn new(field: F) -> Self {
        let caret = caret_driver(field.caret_api());
        Self { field, caret }
    }

    pub fn value(&self) -> &str {
        self.field.value()
    }

    pub fn set_value(&mut self, value: &str) {
        self.field.set_value(value);
    }

    /// Place the caret at `offset` chars, clamped to the value length.
    pub fn set_cursor(&mut self, offset: usize) {
        let offset = offset.min(self.field.value().chars().count());
        self.caret.place(&mut self.field, offset);
    }

    pub fn focus(&mut self) {
        self.field.focus();
    }

    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.field.set_placeholder(placeholder);
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut F {
        &mut self.field
    }

    pub fn into_field(self) -> F {
        self.field
    }
}
