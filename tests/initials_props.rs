use avatar_kit::initials::extract_initials;
use proptest::prelude::*;

proptest! {
    #[test]
    fn short_labels_are_returned_verbatim(s in "\\PC{0,2}") {
        prop_assert_eq!(extract_initials(Some(&s)), Some(s.clone()));
    }

    #[test]
    fn result_has_at_most_two_chars(s in "\\PC{0,40}") {
        let out = extract_initials(Some(&s)).unwrap();
        prop_assert!(out.chars().count() <= 2);
        if s.chars().count() > 2 {
            prop_assert!(!out.is_empty());
        }
    }

    #[test]
    fn extraction_is_deterministic(s in "\\PC{0,40}") {
        prop_assert_eq!(extract_initials(Some(&s)), extract_initials(Some(&s)));
    }
}

#[test]
fn documented_examples() {
    assert_eq!(extract_initials(Some("PrimeFaces Rocks")).as_deref(), Some("PR"));
    assert_eq!(extract_initials(Some("12345")).as_deref(), Some("1"));
    assert_eq!(extract_initials(None), None);
}

#[test]
fn three_words_use_first_and_last() {
    assert_eq!(extract_initials(Some("Grace Brewster Hopper")).as_deref(), Some("GH"));
}

#[test]
fn combining_marks_stay_attached() {
    // "e" + COMBINING ACUTE ACCENT; the mark follows a word char, so it is not a word start
    let label = "e\u{301}cole normale";
    assert_eq!(extract_initials(Some(label)).as_deref(), Some("en"));
}
