//! Configuration errors.

use thiserror::Error;

/// A pattern or flag string that cannot be used. Raised before any input is touched.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Pattern failed to compile.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    /// Unknown or repeated match flag.
    #[error("invalid match flag '{flag}'")]
    InvalidFlag { flag: char },
}

impl ConfigError {
    pub(crate) fn pattern(pattern: &str, source: regex::Error) -> Self {
        ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source: Box::new(source),
        }
    }
}
