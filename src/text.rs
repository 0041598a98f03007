use crate::casing::{self, CasingStyle};
use crate::error::CasingError;
use std::str::FromStr;
use unicode_segmentation::UnicodeSegmentation;

/// Convenience helpers on string slices.
pub trait StrExt {
    /// `true` for empty strings and strings made only of whitespace.
    fn is_blank(&self) -> bool;

    fn is_not_blank(&self) -> bool {
        !self.is_blank()
    }

    /// Parse a number, returning `None` on failure.
    fn try_parse_number<N: FromStr>(&self) -> Option<N> {
        self.parse_number().ok()
    }

    /// Parse a number after trimming surrounding whitespace.
    fn parse_number<N: FromStr>(&self) -> Result<N, N::Err>;

    /// Case-insensitive palindrome check, reversing by grapheme cluster.
    fn is_palindrome(&self) -> bool;

    fn casing(&self) -> CasingStyle;

    fn set_casing(&self, target: CasingStyle) -> Result<String, CasingError>;
}

impl StrExt for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }

    fn parse_number<N: FromStr>(&self) -> Result<N, N::Err> {
        self.trim().parse()
    }

    fn is_palindrome(&self) -> bool {
        let reversed: String = self.graphemes(true).rev().collect();
        reversed.to_lowercase() == self.to_lowercase()
    }

    fn casing(&self) -> CasingStyle {
        casing::classify(self)
    }

    fn set_casing(&self, target: CasingStyle) -> Result<String, CasingError> {
        casing::set_casing(self, target)
    }
}

/// `true` when there is no string at all or it is blank.
pub fn is_none_or_blank(text: Option<&str>) -> bool {
    text.map_or(true, str::is_blank)
}
