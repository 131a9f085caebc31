//! Host markup contract.
//!
//! A breadcrumb mounts into a container holding three regions: a sink for
//! the prefix, a sink for the tail, and the text field. The document hands
//! the regions over by value, so every widget owns its own.

use std::collections::HashMap;

use crate::error::BreadcrumbError;
use crate::field::FieldState;
use crate::input_box::TextField;
use crate::sink::{MarkupSink, RenderSink};

/// Region receiving the prefix crumbs.
pub const PREFIX_REGION: &str = "basepath-container";
/// Region receiving the tail crumbs.
pub const TAIL_REGION: &str = "sections-container";
/// The text field region.
pub const INPUT_REGION: &str = "breadcrumb-input";

/// Regions of one breadcrumb container. Any of them may be missing.
#[derive(Debug)]
pub struct Container<S, F> {
    pub prefix: Option<S>,
    pub tail: Option<S>,
    pub input: Option<F>,
}

impl<S, F> Container<S, F> {
    /// Container with all three regions present.
    pub fn new(prefix: S, tail: S, input: F) -> Self {
        Self {
            prefix: Some(prefix),
            tail: Some(tail),
            input: Some(input),
        }
    }

    /// Container with no regions.
    pub fn empty() -> Self {
        Self {
            prefix: None,
            tail: None,
            input: None,
        }
    }

    /// Take the regions out, naming the first missing one.
    pub fn into_regions(self) -> Result<(S, S, F), BreadcrumbError> {
        let prefix = self
            .prefix
            .ok_or_else(|| BreadcrumbError::missing(PREFIX_REGION))?;
        let tail = self
            .tail
            .ok_or_else(|| BreadcrumbError::missing(TAIL_REGION))?;
        let input = self
            .input
            .ok_or_else(|| BreadcrumbError::missing(INPUT_REGION))?;
        Ok((prefix, tail, input))
    }
}

/// Lookup of breadcrumb containers by id.
pub trait Document {
    type Sink: RenderSink;
    type Field: TextField;

    /// Remove and return the container registered under `id`.
    fn take_container(&mut self, id: &str) -> Option<Container<Self::Sink, Self::Field>>;
}

/// In-memory document.
#[derive(Debug)]
pub struct Page<S = MarkupSink, F = FieldState> {
    containers: HashMap<String, Container<S, F>>,
}

impl<S, F> Page<S, F> {
    pub fn new() -> Self {
        Self {
            containers: HashMap::new(),
        }
    }

    /// Register a container under `id`.
    pub fn with_container(mut self, id: impl Into<String>, container: Container<S, F>) -> Self {
        self.insert(id, container);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, container: Container<S, F>) {
        self.containers.insert(id.into(), container);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.containers.contains_key(id)
    }
}

impl<S, F> Default for Page<S, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RenderSink, F: TextField> Document for Page<S, F> {
    type Sink = S;
    type Field = F;

    fn take_container(&mut self, id: &str) -> Option<Container<S, F>> {
        self.containers.remove(id)
    }
}
