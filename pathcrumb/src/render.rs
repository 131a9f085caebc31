//! Breadcrumb renderer.
//!
//! Projects a [`Path`] into crumbs and writes them into two sinks: one for
//! the fixed prefix and one for the tail. After the initial render only the
//! tail sink is rewritten.

use serde::Serialize;

use crate::path::Path;
use crate::sink::RenderSink;

/// Glyph drawn after every crumb.
pub const SEPARATOR_GLYPH: &str = " / ";

/// One rendered segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    pub label: String,
    /// Every segment up to and including this one, each followed by `/`.
    pub href: String,
}

/// How crumbs are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkMode {
    /// Each crumb links to its href.
    #[default]
    Anchor,
    /// Label only.
    Plain,
}

impl LinkMode {
    pub fn from_create_links(create_links: bool) -> Self {
        if create_links {
            Self::Anchor
        } else {
            Self::Plain
        }
    }
}

/// Build the prefix and tail crumbs. Hrefs accumulate across the boundary.
pub fn crumbs(prefix: &[String], tail: &[String]) -> (Vec<Crumb>, Vec<Crumb>) {
    let mut href = String::new();
    let prefix = accumulate(prefix, &mut href);
    let tail = accumulate(tail, &mut href);
    (prefix, tail)
}

fn accumulate(segments: &[String], href: &mut String) -> Vec<Crumb> {
    segments
        .iter()
        .map(|segment| {
            href.push_str(segment);
            href.push('/');
            Crumb {
                label: segment.clone(),
                href: href.clone(),
            }
        })
        .collect()
}

/// Writes a path's crumbs into a pair of sinks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    mode: LinkMode,
}

impl Renderer {
    pub fn new(mode: LinkMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> LinkMode {
        self.mode
    }

    /// Render both sinks. The prefix sink is left alone when there is no
    /// prefix.
    pub fn render_all<S: RenderSink>(&self, path: &Path, prefix_sink: &mut S, tail_sink: &mut S) {
        let (prefix, tail) = crumbs(path.prefix(), path.tail());
        if !prefix.is_empty() {
            prefix_sink.replace(&prefix, self.mode);
        }
        tail_sink.replace(&tail, self.mode);
        log::debug!(
            "[render] {} prefix crumb(s), {} tail crumb(s)",
            prefix.len(),
            tail.len()
        );
    }

    /// Render the tail sink only.
    pub fn render_tail<S: RenderSink>(&self, path: &Path, tail_sink: &mut S) {
        let (_, tail) = crumbs(path.prefix(), path.tail());
        tail_sink.replace(&tail, self.mode);
        log::debug!("[render] {} tail crumb(s)", tail.len());
    }
}
