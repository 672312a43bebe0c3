//! Error types for page loading, selector parsing and preference storage
//!
//! None of these reach the presentation controller's event handlers: the
//! controller degrades feature-by-feature instead of failing. They surface
//! only at startup (a page that cannot be read) or in the log (a preference
//! that cannot be written).

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a page description
#[derive(Debug, Error)]
pub enum PageError {
    #[error("failed to read page '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid page description: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors raised while parsing a selector
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unexpected character '{found}' at offset {offset} in selector '{selector}'")]
    UnexpectedChar {
        selector: String,
        found: char,
        offset: usize,
    },

    #[error("unterminated attribute in selector '{0}'")]
    UnterminatedAttribute(String),
}

/// Errors raised by a persisted key-value store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("store contents are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
