//! Normalization options and their defaults.

pub const DEFAULT_REPLACE_PATTERN: &str = "[áéíóúÁÉÍÓÚñÑ]";
pub const DEFAULT_VALIDATION_PATTERN: &str = r"[a-zA-Z0-9\s]";
pub const DEFAULT_MATCH_FLAGS: &str = "g";

/// Options for one normalizer instance. Fields may be changed between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationConfig {
    /// Characters that are candidates for substitution.
    pub replace_pattern: String,
    /// Single-character test; characters that do not match are dropped.
    pub validation_pattern: String,
    /// Flags for `replace_pattern` only (see [`MatchFlags`](super::MatchFlags)).
    pub match_flags: String,
    /// Collapse whitespace runs to one space when true, delete them when false.
    pub allow_spaces: bool,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            replace_pattern: DEFAULT_REPLACE_PATTERN.to_string(),
            validation_pattern: DEFAULT_VALIDATION_PATTERN.to_string(),
            match_flags: DEFAULT_MATCH_FLAGS.to_string(),
            allow_spaces: true,
        }
    }
}

impl NormalizationConfig {
    pub fn with_replace_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.replace_pattern = pattern.into();
        self
    }

    pub fn with_validation_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.validation_pattern = pattern.into();
        self
    }

    pub fn with_match_flags(mut self, flags: impl Into<String>) -> Self {
        self.match_flags = flags.into();
        self
    }

    pub fn with_allow_spaces(mut self, allow: bool) -> Self {
        self.allow_spaces = allow;
        self
    }
}
