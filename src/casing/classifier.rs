use super::tokenizer::{has_letters, split_on};
use super::CasingStyle;

/// Detect the casing convention `text` follows.
///
/// A string may satisfy several conventions at once (`HELLO` is both upper
/// and Pascal); the checks below run in a fixed order and the first match
/// wins.
pub fn classify(text: &str) -> CasingStyle {
    if text.is_empty() || !has_letters(text) {
        return CasingStyle::Unrecognized;
    }

    if is_snake(text) {
        CasingStyle::Snake
    } else if is_upper(text) {
        CasingStyle::Upper
    } else if is_lower(text) {
        CasingStyle::Lower
    } else if is_title(text) {
        CasingStyle::Title
    } else if is_pascal(text) {
        CasingStyle::Pascal
    } else if is_camel(text) {
        CasingStyle::Camel
    } else if is_inverse(text) {
        CasingStyle::Inverse
    } else if is_alternating(text) {
        CasingStyle::Alternating
    } else {
        CasingStyle::Unrecognized
    }
}

fn is_snake(text: &str) -> bool {
    split_on(text, &['_']).len() >= 2
}

fn is_upper(text: &str) -> bool {
    text.chars().all(|c| !c.is_alphabetic() || c.is_uppercase())
}

fn is_lower(text: &str) -> bool {
    text.chars().all(|c| !c.is_alphabetic() || c.is_lowercase())
}

fn is_title(text: &str) -> bool {
    split_on(text, &[' ']).into_iter().all(|word| {
        let mut chars = word.chars();
        chars.next().is_some_and(char::is_uppercase) && chars.all(char::is_lowercase)
    })
}

fn is_inverse(text: &str) -> bool {
    let words = split_on(text, &[' ']);
    !words.is_empty()
        && words.into_iter().all(|word| {
            let mut chars = word.chars();
            chars.next().is_some_and(char::is_lowercase) && chars.all(char::is_uppercase)
        })
}

fn has_separator(text: &str) -> bool {
    text.contains(|c: char| c == ' ' || c == '_')
}

fn is_pascal(text: &str) -> bool {
    if !text.chars().next().is_some_and(char::is_uppercase) || has_separator(text) {
        return false;
    }

    let chars: Vec<char> = text.chars().collect();
    chars
        .windows(2)
        .all(|pair| !(pair[0].is_uppercase() && pair[1].is_uppercase()))
}

fn is_camel(text: &str) -> bool {
    if !text.chars().next().is_some_and(char::is_lowercase) || has_separator(text) {
        return false;
    }

    let chars: Vec<char> = text.chars().collect();
    chars
        .windows(2)
        .all(|pair| !pair[0].is_uppercase() || pair[1].is_lowercase())
}

// Parity is counted over letters only; separators and digits are skipped.
fn is_alternating(text: &str) -> bool {
    let letters = || text.chars().filter(|c| c.is_alphabetic()).enumerate();

    let upper_first = letters().all(|(i, c)| {
        if i % 2 == 0 {
            c.is_uppercase()
        } else {
            c.is_lowercase()
        }
    });
    let lower_first = letters().all(|(i, c)| {
        if i % 2 == 0 {
            c.is_lowercase()
        } else {
            c.is_uppercase()
        }
    });

    upper_first || lower_first
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_examples() {
        assert_eq!(classify("Some Random Test"), CasingStyle::Title);
        assert_eq!(classify("SOME RANDOM TEST"), CasingStyle::Upper);
        assert_eq!(classify("some random test"), CasingStyle::Lower);
        assert_eq!(classify("some_random_test"), CasingStyle::Snake);
        assert_eq!(classify("someRandomTest"), CasingStyle::Camel);
        assert_eq!(classify("SomeRandomTest"), CasingStyle::Pascal);
        assert_eq!(classify("sOME rANDOM tEST"), CasingStyle::Inverse);
        assert_eq!(classify("SoMe RaNdOm TeSt"), CasingStyle::Alternating);
        assert_eq!(
            classify("Ahhu4urwu hfAUu3828audhHS haHAH"),
            CasingStyle::Unrecognized
        );
    }

    #[test]
    fn test_empty_and_letterless() {
        assert_eq!(classify(""), CasingStyle::Unrecognized);
        assert_eq!(classify("   "), CasingStyle::Unrecognized);
        assert_eq!(classify("1_2_3"), CasingStyle::Unrecognized);
        assert_eq!(classify("42!"), CasingStyle::Unrecognized);
    }

    #[test]
    fn test_tie_break_order() {
        // Snake beats everything, even when all letters share a case.
        assert_eq!(classify("SOME_TEST"), CasingStyle::Snake);
        assert_eq!(classify("some_test"), CasingStyle::Snake);
        // A single uppercase word is also Pascal, but Upper comes first.
        assert_eq!(classify("A"), CasingStyle::Upper);
        assert_eq!(classify("HELLO"), CasingStyle::Upper);
        // A single capitalized word is Title before Pascal.
        assert_eq!(classify("Hello"), CasingStyle::Title);
        assert_eq!(classify("hello"), CasingStyle::Lower);
    }

    #[test]
    fn test_single_underscore_segment_is_not_snake() {
        assert_eq!(classify("_hello_"), CasingStyle::Lower);
        // Leading separators are structural for the Title and Pascal checks.
        assert_eq!(classify("__Hello"), CasingStyle::Unrecognized);
    }

    #[test]
    fn test_non_letters_ignored_for_case_checks() {
        assert_eq!(classify("HTTP 404!"), CasingStyle::Upper);
        assert_eq!(classify("route 66"), CasingStyle::Lower);
    }

    #[test]
    fn test_pascal_rejects_consecutive_capitals() {
        assert_eq!(classify("HTTPServer"), CasingStyle::Unrecognized);
        assert_eq!(classify("Abc1Def"), CasingStyle::Pascal);
    }

    #[test]
    fn test_camel_requires_lowercase_after_capital() {
        assert_eq!(classify("abc123Def"), CasingStyle::Camel);
        assert_eq!(classify("someX"), CasingStyle::Camel);
        assert_eq!(classify("getHTTP"), CasingStyle::Unrecognized);
    }

    #[test]
    fn test_alternating_either_parity() {
        assert_eq!(classify("sOmE rAnDoM"), CasingStyle::Alternating);
        assert_eq!(classify("Ab Cd"), CasingStyle::Title);
        assert_eq!(classify("aB cD"), CasingStyle::Inverse);
        assert_eq!(classify("AbC dEf"), CasingStyle::Alternating);
    }
}
