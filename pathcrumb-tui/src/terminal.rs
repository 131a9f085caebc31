use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal,
};
use pathcrumb::render::SEPARATOR_GLYPH;
use pathcrumb::{Crumb, LinkMode};
use unicode_width::UnicodeWidthStr;

/// Row the breadcrumb line is drawn on.
const CRUMB_ROW: u16 = 2;
/// First row of the notification log.
const STATUS_ROW: u16 = 4;

/// Everything drawn in one frame.
pub struct Frame<'a> {
    pub title: &'a str,
    pub prefix: &'a [Crumb],
    pub tail: &'a [Crumb],
    pub mode: LinkMode,
    pub input: &'a str,
    /// Cursor position in chars.
    pub cursor: usize,
    pub placeholder: &'a str,
    pub status: &'a [String],
}

pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            event::EnableBracketedPaste
        )?;

        Ok(Self { stdout })
    }

    /// Wait for the next input, then take whatever else is already queued
    /// so a burst of keys is handled before the next redraw.
    pub fn read_events(&self) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = vec![event::read()?];
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }
        Ok(events)
    }

    pub fn draw(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        let (width, _) = terminal::size()?;

        queue!(
            self.stdout,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
            SetAttribute(Attribute::Bold),
            Print(frame.title),
            SetAttribute(Attribute::Reset),
            cursor::MoveTo(0, CRUMB_ROW),
        )?;

        let mut column = 0;
        for crumb in frame.prefix.iter().chain(frame.tail) {
            self.draw_crumb(crumb, frame.mode)?;
            column += crumb.label.width() + SEPARATOR_GLYPH.width();
        }

        if frame.input.is_empty() {
            queue!(
                self.stdout,
                SetAttribute(Attribute::Dim),
                Print(frame.placeholder),
                SetAttribute(Attribute::Reset),
            )?;
        } else {
            queue!(self.stdout, Print(frame.input))?;
        }

        let before_cursor: String = frame.input.chars().take(frame.cursor).collect();
        column += before_cursor.width();

        for (row, line) in (STATUS_ROW..).zip(frame.status) {
            queue!(
                self.stdout,
                cursor::MoveTo(0, row),
                SetForegroundColor(Color::DarkGrey),
                Print(truncate(line, usize::from(width))),
                ResetColor,
            )?;
        }

        let column = u16::try_from(column).unwrap_or(u16::MAX).min(width.saturating_sub(1));
        queue!(self.stdout, cursor::MoveTo(column, CRUMB_ROW), cursor::Show)?;
        self.stdout.flush()
    }

    fn draw_crumb(&mut self, crumb: &Crumb, mode: LinkMode) -> io::Result<()> {
        queue!(self.stdout, SetForegroundColor(Color::Cyan))?;
        match mode {
            LinkMode::Anchor => {
                // OSC 8 hyperlink: \x1b]8;;URL\x1b\\text\x1b]8;;\x1b\\
                write!(
                    self.stdout,
                    "\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\",
                    crumb.href, crumb.label
                )?;
            }
            LinkMode::Plain => queue!(self.stdout, Print(&crumb.label))?,
        }
        queue!(
            self.stdout,
            SetForegroundColor(Color::DarkGrey),
            Print(SEPARATOR_GLYPH),
            ResetColor,
        )
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableBracketedPaste,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn truncate(s: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        out.push(ch);
        width += ch_width;
    }
    out
}
