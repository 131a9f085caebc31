//! Error types.

use thiserror::Error;

/// Errors raised while mounting or configuring a breadcrumb.
#[derive(Debug, Error)]
pub enum BreadcrumbError {
    /// The container or one of its regions is absent from the document.
    #[error("missing markup region: {region}")]
    MissingMarkup {
        /// Name of the absent region.
        region: String,
    },

    /// The segment name pattern does not compile.
    #[error("invalid segment pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl BreadcrumbError {
    pub(crate) fn missing(region: impl Into<String>) -> Self {
        Self::MissingMarkup {
            region: region.into(),
        }
    }
}

/// Errors raised by the path model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    /// `uncommit` was called with no committed segment left.
    #[error("no committed segment to remove")]
    EmptyTail,
}
