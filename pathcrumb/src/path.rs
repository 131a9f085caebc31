//! Path model: committed segments split into a fixed prefix and an
//! editable tail.
//!
//! The pending (uncommitted) text is not stored here; it lives in the input
//! box and is folded into a [`PathSnapshot`] when the path is read.

use serde::Serialize;

use crate::error::PathError;
use crate::validation::NameRule;

/// Committed path segments.
#[derive(Debug, Clone)]
pub struct Path {
    prefix: Vec<String>,
    tail: Vec<String>,
    /// `None` disables pattern validation; empty names are still rejected.
    rule: Option<NameRule>,
}

impl Path {
    pub fn new(prefix: Vec<String>, tail: Vec<String>, rule: Option<NameRule>) -> Self {
        Self { prefix, tail, rule }
    }

    /// Segments fixed at construction.
    pub fn prefix(&self) -> &[String] {
        &self.prefix
    }

    /// Segments committed by the user (plus any initial ones).
    pub fn tail(&self) -> &[String] {
        &self.tail
    }

    /// Number of committed segments, prefix included.
    pub fn len(&self) -> usize {
        self.prefix.len() + self.tail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All committed segments, prefix first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.prefix.iter().chain(self.tail.iter()).map(String::as_str)
    }

    /// Returns true if `name` may be committed.
    pub fn accepts(&self, name: &str) -> bool {
        match &self.rule {
            Some(rule) => rule.accepts(name),
            None => !name.is_empty(),
        }
    }

    /// Append `name` to the tail.
    ///
    /// Returns false, leaving the tail untouched, if the name is empty or
    /// fails validation.
    pub fn commit(&mut self, name: &str) -> bool {
        if !self.accepts(name) {
            return false;
        }
        self.tail.push(name.to_string());
        true
    }

    /// Remove and return the last tail segment.
    pub fn uncommit(&mut self) -> Result<String, PathError> {
        self.tail.pop().ok_or(PathError::EmptyTail)
    }

    /// Owned view of the path with `file_name` as the pending text.
    pub fn snapshot(&self, file_name: impl Into<String>) -> PathSnapshot {
        PathSnapshot {
            prefix: self.prefix.clone(),
            tail: self.tail.clone(),
            file_name: file_name.into(),
        }
    }
}

/// Read-only copy of a breadcrumb's path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathSnapshot {
    pub prefix: Vec<String>,
    pub tail: Vec<String>,
    /// Text still in the input box.
    pub file_name: String,
}

impl PathSnapshot {
    /// The logical path joined with `separator`, pending text last.
    pub fn joined(&self, separator: char) -> String {
        let mut parts: Vec<&str> = self
            .prefix
            .iter()
            .chain(self.tail.iter())
            .map(String::as_str)
            .collect();
        if !self.file_name.is_empty() {
            parts.push(&self.file_name);
        }
        parts.join(&separator.to_string())
    }
}
