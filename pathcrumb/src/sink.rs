//! Rendering sinks.

use crate::render::{Crumb, LinkMode, SEPARATOR_GLYPH};

/// Destination for rendered crumbs. Each call replaces what was there.
pub trait RenderSink {
    fn replace(&mut self, crumbs: &[Crumb], mode: LinkMode);
}

/// HTML markup sink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupSink {
    html: String,
}

impl MarkupSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

impl RenderSink for MarkupSink {
    fn replace(&mut self, crumbs: &[Crumb], mode: LinkMode) {
        self.html = markup(crumbs, mode);
    }
}

/// Markup for a list of crumbs.
pub fn markup(crumbs: &[Crumb], mode: LinkMode) -> String {
    let separator = format!("<span class=\"separator\">{SEPARATOR_GLYPH}</span>");
    let mut html = String::new();

    for crumb in crumbs {
        let label = escape(&crumb.label);
        match mode {
            LinkMode::Anchor => {
                let href = escape(&crumb.href);
                html.push_str(&format!(
                    "<a class=\"section\" href=\"{href}\">{label}</a>"
                ));
            }
            LinkMode::Plain => {
                html.push_str(&format!("<span class=\"section\">{label}</span>"));
            }
        }
        html.push_str(&separator);
    }

    html
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Keeps the last crumbs it was given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    crumbs: Vec<Crumb>,
    mode: LinkMode,
    writes: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn crumbs(&self) -> &[Crumb] {
        &self.crumbs
    }

    pub fn mode(&self) -> LinkMode {
        self.mode
    }

    /// Number of times the sink was rewritten.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl RenderSink for MemorySink {
    fn replace(&mut self, crumbs: &[Crumb], mode: LinkMode) {
        self.crumbs = crumbs.to_vec();
        self.mode = mode;
        self.writes += 1;
    }
}
