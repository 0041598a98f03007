// Word segmentation shared by the classifier and the transformer.

/// Split on any of `delimiters`, dropping empty segments.
pub fn split_on<'a>(text: &'a str, delimiters: &[char]) -> Vec<&'a str> {
    text.split(|ch: char| delimiters.contains(&ch))
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Split before every uppercase character except the first one.
///
/// The first word always starts at index 0, so a leading lowercase run
/// (`some` in `someRandomTest`) becomes a word of its own. Digits are not
/// boundaries: `abc123Def` yields `abc123` and `Def`.
pub fn split_before_uppercase(text: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut word_start = 0;

    for (idx, ch) in text.char_indices().skip(1) {
        if ch.is_uppercase() {
            result.push(&text[word_start..idx]);
            word_start = idx;
        }
    }

    if word_start < text.len() {
        result.push(&text[word_start..]);
    }

    result
}

pub fn has_letters(text: &str) -> bool {
    text.chars().any(char::is_alphabetic)
}
