//! Breadcrumb configuration.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::BreadcrumbError;
use crate::render::LinkMode;
use crate::validation::{NameRule, DEFAULT_VALID_PATTERN};

/// Container id used when none is configured.
pub const DEFAULT_CONTAINER_ID: &str = "breadcrumb";

/// Construction options for a breadcrumb.
///
/// Built in code with the builder methods, or loaded from JSON:
///
/// ```ignore
/// let config = BreadcrumbConfig::from_json(r#"{
///     "basePath": ["org", "repo"],
///     "sections": ["src"],
///     "fileName": "main.rs",
///     "createLinks": false
/// }"#)?;
/// ```
///
/// Segment lists that are not arrays load as empty lists.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BreadcrumbConfig {
    /// Id of the container to mount into.
    pub container_id: String,

    /// Fixed leading segments.
    #[serde(alias = "section", alias = "basePath", deserialize_with = "lenient_segments")]
    pub prefix: Vec<String>,

    /// Initial editable segments.
    #[serde(
        alias = "subsections",
        alias = "sections",
        deserialize_with = "lenient_segments"
    )]
    pub tail: Vec<String>,

    /// Initial text of the input box.
    pub file_name: String,

    /// Pattern every committed segment must match.
    pub valid_pattern: String,

    /// When false, only empty names are rejected.
    pub validate: bool,

    /// Hint shown in the empty input box.
    pub placeholder: String,

    /// Render crumbs as links (true) or plain labels (false).
    pub create_links: bool,

    /// Character that commits a segment.
    pub separator: char,
}

impl Default for BreadcrumbConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            prefix: Vec::new(),
            tail: Vec::new(),
            file_name: String::new(),
            valid_pattern: DEFAULT_VALID_PATTERN.to_string(),
            validate: true,
            placeholder: String::new(),
            create_links: true,
            separator: '/',
        }
    }
}

impl BreadcrumbConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, BreadcrumbError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn container_id(mut self, id: impl Into<String>) -> Self {
        self.container_id = id.into();
        self
    }

    pub fn prefix<I, T>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.prefix = segments.into_iter().map(Into::into).collect();
        self
    }

    pub fn tail<I, T>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tail = segments.into_iter().map(Into::into).collect();
        self
    }

    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// Set the segment pattern and turn validation on.
    pub fn valid_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.valid_pattern = pattern.into();
        self.validate = true;
        self
    }

    /// Accept any non-empty segment name.
    pub fn no_validation(mut self) -> Self {
        self.validate = false;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn create_links(mut self, create_links: bool) -> Self {
        self.create_links = create_links;
        self
    }

    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn link_mode(&self) -> LinkMode {
        LinkMode::from_create_links(self.create_links)
    }

    /// Compile the segment rule, `None` when validation is off.
    pub fn name_rule(&self) -> Result<Option<NameRule>, BreadcrumbError> {
        if !self.validate {
            return Ok(None);
        }
        Ok(Some(NameRule::new(&self.valid_pattern)?))
    }
}

/// Accept an array of strings; anything else becomes an empty list.
fn lenient_segments<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(segments_from_value(value))
}

fn segments_from_value(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                other => {
                    log::warn!("[config] skipping non-string segment {other}");
                    None
                }
            })
            .collect(),
        Value::Null => Vec::new(),
        other => {
            log::warn!("[config] segment list is not an array ({other}), using an empty list");
            Vec::new()
        }
    }
}
