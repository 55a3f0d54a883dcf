//! Property tests for the transform.

use proptest::prelude::*;
use rchars::{NormalizationConfig, Normalizer};

fn normalizer(allow_spaces: bool) -> Normalizer {
    Normalizer::new(&NormalizationConfig::default().with_allow_spaces(allow_spaces)).unwrap()
}

/// Mostly characters the transform cares about, plus arbitrary ones.
fn input() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            prop::sample::select(vec![
                'a', 'Z', '7', ' ', ' ', '\t', '\n', 'á', 'É', 'ñ', 'Ñ', 'ü', '!', '\u{a0}',
            ]),
            any::<char>(),
        ],
        0..40,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn idempotent(s in input(), allow_spaces in any::<bool>()) {
        let n = normalizer(allow_spaces);
        let once = n.transform(&s);
        prop_assert_eq!(n.transform(&once), once);
    }

    #[test]
    fn output_chars_pass_validation(s in input(), allow_spaces in any::<bool>()) {
        let out = normalizer(allow_spaces).transform(&s);
        prop_assert!(out.chars().all(|c| c.is_ascii_alphanumeric() || c == ' '));
        prop_assert!(out.chars().count() <= s.chars().count());
    }

    #[test]
    fn collapsed_spaces_never_adjacent(s in input()) {
        let out = normalizer(true).transform(&s);
        prop_assert!(!out.contains("  "));
    }

    #[test]
    fn stripped_output_has_no_whitespace(s in input()) {
        let out = normalizer(false).transform(&s);
        prop_assert!(!out.chars().any(char::is_whitespace));
    }

    #[test]
    fn clean_input_preserved(s in "[a-zA-Z0-9]{0,8}( [a-zA-Z0-9]{1,8}){0,4}") {
        prop_assert_eq!(normalizer(true).transform(&s), s);
    }
}
