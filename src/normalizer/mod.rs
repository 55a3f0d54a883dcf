//! Fold accented characters to ASCII, drop disallowed characters, and apply a whitespace policy.

pub mod char_map;
mod config;
mod error;
mod flags;
mod syntax;
mod transform;

pub use config::{
    NormalizationConfig, DEFAULT_MATCH_FLAGS, DEFAULT_REPLACE_PATTERN, DEFAULT_VALIDATION_PATTERN,
};
pub use error::ConfigError;
pub use flags::MatchFlags;
pub use transform::{transform, Normalizer};
