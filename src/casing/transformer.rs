use super::classifier::classify;
use super::tokenizer::{has_letters, split_before_uppercase, split_on};
use super::CasingStyle;
use crate::error::CasingError;
use log::debug;

/// Rewrite `text` into the `target` convention.
///
/// The input is classified first and split into words with a rule picked by
/// the detected style. `Upper`, `Lower`, `Inverse` and the two alternating
/// targets ignore the word split and work on the original string directly.
pub fn set_casing(text: &str, target: CasingStyle) -> Result<String, CasingError> {
    if text.is_empty() {
        return Ok(String::new());
    }

    if !target.is_target() {
        return Err(CasingError::InvalidTargetStyle(target));
    }

    if !has_letters(text) {
        return Ok(text.to_string());
    }

    let converted = match target {
        CasingStyle::Upper => text.to_uppercase(),
        CasingStyle::Lower => text.to_lowercase(),
        CasingStyle::Inverse => text.chars().flat_map(flip_case).collect(),
        CasingStyle::AlternatingNormal => alternate(text, 0),
        CasingStyle::AlternatingReverse => alternate(text, 1),
        CasingStyle::Title => segment(text)
            .iter()
            .map(|word| capitalize(word))
            .collect::<Vec<_>>()
            .join(" "),
        CasingStyle::Pascal => segment(text).iter().map(|word| capitalize(word)).collect(),
        CasingStyle::Camel => segment(text)
            .iter()
            .enumerate()
            .map(|(i, word)| {
                if i == 0 {
                    word.to_lowercase()
                } else {
                    capitalize(word)
                }
            })
            .collect(),
        CasingStyle::Snake => segment(text).join("_"),
        CasingStyle::Unrecognized | CasingStyle::Alternating => {
            return Err(CasingError::InvalidTargetStyle(target))
        }
    };

    Ok(converted)
}

/// Split `text` into words using the rule for its detected style.
fn segment(text: &str) -> Vec<String> {
    let detected = classify(text);

    let words: Vec<String> = match detected {
        CasingStyle::Upper => owned(split_on(&text.to_lowercase(), &[' '])),
        CasingStyle::Lower | CasingStyle::Title | CasingStyle::Unrecognized => {
            owned(split_on(text, &[' ']))
        }
        CasingStyle::Pascal | CasingStyle::Camel => owned(split_before_uppercase(text)),
        CasingStyle::Snake => owned(split_on(text, &['_'])),
        _ => owned(split_on(text, &[' ', '_'])),
    };

    debug!(
        "segmented {:?} as {} into {} word(s)",
        text,
        detected,
        words.len()
    );
    words
}

fn owned(words: Vec<&str>) -> Vec<String> {
    words.into_iter().map(str::to_string).collect()
}

/// First character uppercase, the rest lowercase.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

fn flip_case(c: char) -> Vec<char> {
    if c.is_uppercase() {
        c.to_lowercase().collect()
    } else if c.is_lowercase() {
        c.to_uppercase().collect()
    } else {
        vec![c]
    }
}

// Parity is taken over every character, separators included.
fn alternate(text: &str, upper_parity: usize) -> String {
    let mut result = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        if !c.is_alphabetic() {
            result.push(c);
        } else if i % 2 == upper_parity {
            result.extend(c.to_uppercase());
        } else {
            result.extend(c.to_lowercase());
        }
    }
    result
}
