//! Property tests for capitalize/upcase.

use proptest::prelude::*;

use primer::{capitalize, upcase, FormAnswers};

fn ascii_word() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 ,.'-]{0,24}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: ASCII transforms keep the character count.
    #[test]
    fn property_transforms_keep_length(word in ascii_word()) {
        prop_assert_eq!(capitalize(&word).chars().count(), word.chars().count());
        prop_assert_eq!(upcase(&word).chars().count(), word.chars().count());
    }

    /// PROPERTY: applying a transform twice changes nothing further.
    #[test]
    fn property_transforms_are_idempotent(word in ascii_word()) {
        let once = capitalize(&word);
        prop_assert_eq!(capitalize(&once), once.clone());

        let shouted = upcase(&word);
        prop_assert_eq!(upcase(&shouted), shouted.clone());
    }

    /// PROPERTY: only the first character can be uppercase after capitalize.
    #[test]
    fn property_capitalize_tail_is_lowercase(word in ascii_word()) {
        let out = capitalize(&word);
        prop_assert!(out.chars().skip(1).all(|c| !c.is_ascii_uppercase()));
    }

    /// PROPERTY: the sentence always embeds the normalized answers.
    #[test]
    fn property_sentence_embeds_answers(
        first in ascii_word(),
        last in ascii_word(),
        city in ascii_word(),
        state in ascii_word(),
    ) {
        let answers = FormAnswers::from_raw(&first, &last, &city, &state);
        let sentence = answers.sentence();
        prop_assert!(sentence.starts_with("Your name is "));
        prop_assert!(sentence.ends_with('!'));
        let expected_state = format!(", {}!", upcase(&state));
        prop_assert!(sentence.ends_with(&expected_state));
    }
}
