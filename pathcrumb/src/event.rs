//! Key presses and pastes as the breadcrumb sees them.

/// Input events delivered to a breadcrumb by its host.
///
/// The host applies the event to its text field first; the breadcrumb then
/// inspects the field to decide whether a segment was committed or popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press
    Key { key: Key, modifiers: Modifiers },
    /// Text inserted in one go (bracketed paste)
    Paste(String),
}

impl Event {
    /// Key press without modifiers.
    pub fn key(key: Key) -> Self {
        Self::Key {
            key,
            modifiers: Modifiers::new(),
        }
    }

    /// Typed character without modifiers.
    pub fn char(c: char) -> Self {
        Self::key(Key::Char(c))
    }

    /// Returns true if this event inserts `c` into the field.
    pub fn inserts(&self, c: char) -> bool {
        match self {
            Self::Key {
                key: Key::Char(k),
                modifiers,
            } => *k == c && modifiers.inserts_text(),
            Self::Key { .. } => false,
            Self::Paste(text) => text.contains(c),
        }
    }

    /// Returns true for a plain backspace.
    pub fn is_backspace(&self) -> bool {
        matches!(
            self,
            Self::Key {
                key: Key::Backspace,
                modifiers,
            } if modifiers.none()
        )
    }

    /// Map a crossterm event. Only key presses and pastes are kept.
    pub fn from_crossterm(event: &crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{Event as CtEvent, KeyEventKind};
        match event {
            CtEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Self::Key {
                key: key.code.into(),
                modifiers: key.modifiers.into(),
            }),
            CtEvent::Paste(text) => Some(Self::Paste(text.clone())),
            _ => None,
        }
    }
}

/// Keys the field and the breadcrumb react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    /// Submits the field; the host decides what that means.
    Enter,
    /// Host-level quit key.
    Escape,
    /// Any other key; ignored by both the field and the breadcrumb.
    Other,
}

/// Held modifier keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift only, as for selection moves.
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::new()
        }
    }

    /// Ctrl only, as for shortcuts.
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::new()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Self::new()
        }
    }

    /// No modifier held.
    pub fn none(&self) -> bool {
        *self == Self::new()
    }

    /// Shift alone still produces a character; ctrl and alt turn the key
    /// into a shortcut.
    pub fn inserts_text(&self) -> bool {
        !self.ctrl && !self.alt
    }
}

impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Self::Char(c),
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Delete => Self::Delete,
            KeyCode::Left => Self::Left,
            KeyCode::Right => Self::Right,
            KeyCode::Home => Self::Home,
            KeyCode::End => Self::End,
            KeyCode::Enter => Self::Enter,
            KeyCode::Esc => Self::Escape,
            _ => Self::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}
