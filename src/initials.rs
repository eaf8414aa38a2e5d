//! Initials for text avatars.
//!
//! Long labels are abbreviated to the first letter of the first word and the
//! first letter of the last word: `"PrimeFaces Rocks"` becomes `"PR"`.
//! Labels of one or two characters are shown as given.

use regex::Regex;
use std::sync::LazyLock;

/// A letter or combining mark directly after a Unicode word boundary.
static WORD_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[\p{L}\p{M}]").expect("word start pattern"));

/// Compute the display initials for `label`.
///
/// ### Rules
/// - `None` stays `None`; labels of at most two code points are returned verbatim.
/// - Otherwise every letter (or combining mark) that starts a word is collected.
///   Digits and symbols never count as a word start.
/// - If nothing was collected the first character of the label is used.
/// - A single collected character is returned as-is, anything longer collapses
///   to its first and last character.
///
/// ### Example
/// ```
/// use avatar_kit::initials::extract_initials;
///
/// assert_eq!(extract_initials(Some("Prime Faces Rocks")).as_deref(), Some("PR"));
/// assert_eq!(extract_initials(Some("12345")).as_deref(), Some("1"));
/// assert_eq!(extract_initials(Some("Al")).as_deref(), Some("Al"));
/// assert_eq!(extract_initials(None), None);
/// ```
pub fn extract_initials(label: Option<&str>) -> Option<String> {
    let value = label?;
    let mut chars = value.chars();
    let first = match (chars.next(), chars.next(), chars.next()) {
        (Some(first), Some(_), Some(_)) => first,
        _ => return Some(value.to_string()),
    };

    let mut found = WORD_START.find_iter(value).flat_map(|m| m.as_str().chars());
    let initials = match found.next() {
        None => first.to_string(),
        Some(head) => match found.last() {
            Some(tail) => [head, tail].iter().collect(),
            None => head.to_string(),
        },
    };
    log::debug!("initials for {value:?}: {initials:?}");
    Some(initials)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initials(s: &str) -> String {
        extract_initials(Some(s)).unwrap()
    }

    #[test]
    fn short_labels_pass_through() {
        assert_eq!(initials(""), "");
        assert_eq!(initials("a"), "a");
        assert_eq!(initials("AB"), "AB");
        assert_eq!(initials("1!"), "1!");
        // two code points, four bytes each
        assert_eq!(initials("😀😀"), "😀😀");
    }

    #[test]
    fn first_and_last_word_start() {
        assert_eq!(initials("PrimeFaces Rocks"), "PR");
        assert_eq!(initials("Prime Faces Rocks"), "PR");
        assert_eq!(initials("  spaced   out label  "), "sl");
        assert_eq!(initials("x-ray vision"), "xv");
    }

    #[test]
    fn single_word_gives_single_letter() {
        assert_eq!(initials("hello"), "h");
        assert_eq!(initials("12 monkeys"), "m");
    }

    #[test]
    fn digits_do_not_start_words() {
        assert_eq!(initials("12345"), "1");
        assert_eq!(initials("3D printer"), "p");
        assert_eq!(initials("#$%"), "#");
    }

    #[test]
    fn non_latin_scripts() {
        assert_eq!(initials("Иван Петров"), "ИП");
        assert_eq!(initials("Ünïcode Ëxample"), "ÜË");
        assert_eq!(initials("Ωmega αlpha βeta"), "Ωβ");
    }
}
