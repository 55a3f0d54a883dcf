//! Parse single-letter match flags (`g`, `i`, `m`, `s`, `u`, `d`).

use regex::{Regex, RegexBuilder};

use super::error::ConfigError;
use super::syntax::translate;

/// Parsed form of `NormalizationConfig::match_flags`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchFlags {
    /// Replace every match instead of only the first.
    pub global: bool,
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_all: bool,
}

impl MatchFlags {
    pub fn parse(flags: &str) -> Result<Self, ConfigError> {
        let mut out = MatchFlags::default();
        let mut seen = String::new();
        for flag in flags.chars() {
            if seen.contains(flag) {
                return Err(ConfigError::InvalidFlag { flag });
            }
            seen.push(flag);
            match flag {
                'g' => out.global = true,
                'i' => out.case_insensitive = true,
                'm' => out.multi_line = true,
                's' => out.dot_all = true,
                // Unicode-aware matching is always on; match indices are not reported.
                'u' | 'd' => {}
                _ => return Err(ConfigError::InvalidFlag { flag }),
            }
        }
        Ok(out)
    }

    /// Compile `pattern` with these flags applied. Shorthand classes are rewritten first.
    pub fn compile(&self, pattern: &str) -> Result<Regex, ConfigError> {
        RegexBuilder::new(&translate(pattern))
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_all)
            .build()
            .map_err(|e| ConfigError::pattern(pattern, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_global() {
        let f = MatchFlags::parse("g").unwrap();
        assert!(f.global);
        assert!(!f.case_insensitive);
    }

    #[test]
    fn parse_empty() {
        assert_eq!(MatchFlags::parse("").unwrap(), MatchFlags::default());
    }

    #[test]
    fn parse_combined_any_order() {
        let f = MatchFlags::parse("igu").unwrap();
        assert!(f.global && f.case_insensitive);
        assert!(!f.multi_line && !f.dot_all);
    }

    #[test]
    fn parse_indices_flag_is_accepted() {
        let f = MatchFlags::parse("gd").unwrap();
        assert!(f.global);
    }

    #[test]
    fn parse_unknown_flag() {
        assert!(matches!(
            MatchFlags::parse("gx"),
            Err(ConfigError::InvalidFlag { flag: 'x' })
        ));
    }

    #[test]
    fn parse_repeated_flag() {
        assert!(matches!(
            MatchFlags::parse("gg"),
            Err(ConfigError::InvalidFlag { flag: 'g' })
        ));
    }

    #[test]
    fn compile_case_insensitive() {
        let re = MatchFlags::parse("i").unwrap().compile("[a]").unwrap();
        assert!(re.is_match("A"));
    }

    #[test]
    fn compile_uses_ascii_digits() {
        let re = MatchFlags::default().compile(r"\d").unwrap();
        assert!(re.is_match("4"));
        assert!(!re.is_match("٣"));
    }

    #[test]
    fn compile_bad_pattern() {
        let err = MatchFlags::default().compile("[a-").unwrap_err();
        assert!(err.to_string().starts_with("invalid pattern '[a-'"));
    }
}
