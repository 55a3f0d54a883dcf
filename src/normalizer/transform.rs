//! The three-stage transform: substitution, filtering, whitespace policy.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::char_map::replace_match;
use super::config::NormalizationConfig;
use super::error::ConfigError;
use super::flags::MatchFlags;
use super::syntax::WHITESPACE_CLASS;

/// One or more ECMAScript whitespace characters.
static WHITESPACE_RUN_RE: OnceLock<Regex> = OnceLock::new();

fn whitespace_run_re() -> &'static Regex {
    WHITESPACE_RUN_RE
        .get_or_init(|| Regex::new(&format!("{}+", WHITESPACE_CLASS)).unwrap())
}

/// Mapped ASCII character for the match, or the match itself.
fn substitute_match(caps: &Captures) -> String {
    let m = &caps[0];
    match replace_match(m) {
        Some(c) => c.to_string(),
        None => m.to_string(),
    }
}

/// A config with both patterns compiled. Build once, then transform any number of values.
#[derive(Debug, Clone)]
pub struct Normalizer {
    replace: Regex,
    global: bool,
    /// Compiled without flags; evaluated against one character at a time.
    validate: Regex,
    allow_spaces: bool,
}

impl Normalizer {
    pub fn new(config: &NormalizationConfig) -> Result<Self, ConfigError> {
        let flags = MatchFlags::parse(&config.match_flags)?;
        let replace = flags.compile(&config.replace_pattern)?;
        let validate = MatchFlags::default().compile(&config.validation_pattern)?;
        Ok(Self {
            replace,
            global: flags.global,
            validate,
            allow_spaces: config.allow_spaces,
        })
    }

    pub fn transform(&self, raw: &str) -> String {
        let substituted = self.substitute(raw);
        let filtered = self.filter(&substituted);
        self.apply_whitespace_policy(&filtered)
    }

    fn substitute<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if self.global {
            self.replace.replace_all(raw, substitute_match)
        } else {
            self.replace.replace(raw, substitute_match)
        }
    }

    /// Keep characters that individually match the validation pattern.
    fn filter(&self, text: &str) -> String {
        let mut buf = [0u8; 4];
        text.chars()
            .filter(|c| self.validate.is_match(c.encode_utf8(&mut buf)))
            .collect()
    }

    fn apply_whitespace_policy(&self, text: &str) -> String {
        let sep = if self.allow_spaces { " " } else { "" };
        whitespace_run_re().replace_all(text, sep).into_owned()
    }
}

/// Compile `config` and normalize `raw` in one step.
pub fn transform(raw: &str, config: &NormalizationConfig) -> Result<String, ConfigError> {
    Ok(Normalizer::new(config)?.transform(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(raw: &str) -> String {
        transform(raw, &NormalizationConfig::default()).unwrap()
    }

    #[test]
    fn substitutes_accents() {
        assert_eq!(t("Hóla Múndo"), "Hola Mundo");
    }

    #[test]
    fn drops_symbols() {
        assert_eq!(t("abc123!@#$%"), "abc123");
    }

    #[test]
    fn empty_input() {
        assert_eq!(t(""), "");
    }

    #[test]
    fn all_disallowed() {
        assert_eq!(t("!@#$%^&*"), "");
    }

    #[test]
    fn first_match_only_without_global() {
        let config = NormalizationConfig::default().with_match_flags("");
        // Second accent survives substitution, then fails validation.
        assert_eq!(transform("áá", &config).unwrap(), "a");
    }

    #[test]
    fn multi_char_match_left_unchanged() {
        let config = NormalizationConfig::default()
            .with_replace_pattern("[áé]+")
            .with_validation_pattern(r"[a-zA-Z\s]|á|é");
        assert_eq!(transform("xáéx á", &config).unwrap(), "xáéx a");
    }

    #[test]
    fn validation_ignores_match_flags() {
        let config = NormalizationConfig::default()
            .with_match_flags("gi")
            .with_validation_pattern("[a-z]");
        assert_eq!(transform("abcABC", &config).unwrap(), "abc");
    }

    #[test]
    fn tabs_and_newlines_collapse() {
        assert_eq!(t("a\t\n b"), "a b");
    }

    #[test]
    fn next_line_is_not_whitespace() {
        assert_eq!(t("a\u{85}b"), "ab");
    }

    #[test]
    fn byte_order_mark_is_whitespace() {
        assert_eq!(t("a\u{feff}b"), "a b");
        let config = NormalizationConfig::default().with_allow_spaces(false);
        assert_eq!(transform("a\u{feff}b", &config).unwrap(), "ab");
    }

    #[test]
    fn leading_and_trailing_runs_become_single_space() {
        assert_eq!(t("  a  "), " a ");
    }
}
