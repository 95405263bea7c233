use proptest::prelude::*;
use threadbot_classify::normalize::normalize_text;
use threadbot_classify::stopwords::is_stopword;

proptest! {
    #[test]
    fn normalization_is_idempotent(s in ".{0,200}") {
        let once = normalize_text(&s);
        let twice = normalize_text(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn output_uses_only_allowed_characters(s in ".{0,200}") {
        let out = normalize_text(&s);
        prop_assert!(out
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase() || matches!(c, ' ' | '#' | '+' | '_')));
    }

    #[test]
    fn output_has_single_spaces_and_no_stopwords(s in "[A-Za-z ,.;/?!]{0,120}") {
        let out = normalize_text(&s);
        prop_assert!(!out.starts_with(' ') && !out.ends_with(' '));
        prop_assert!(!out.contains("  "));
        for word in out.split(' ').filter(|w| !w.is_empty()) {
            prop_assert!(!is_stopword(word), "stopword {} survived", word);
        }
    }
}
