pub mod classifier;
pub mod tokenizer;
pub mod transformer;

pub use classifier::classify;
pub use transformer::set_casing;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A naming convention a string can follow.
///
/// `Alternating` is only ever reported by [`classify`], while
/// `AlternatingNormal` and `AlternatingReverse` are only accepted by
/// [`set_casing`]. `Unrecognized` can be detected but never produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CasingStyle {
    /// No known convention matched.
    #[serde(alias = "other")]
    Unrecognized,
    /// `THIS IS AN EXAMPLE`
    Upper,
    /// `this is an example`
    Lower,
    /// `This Is An Example`
    Title,
    /// `ThisIsAnExample`
    Pascal,
    /// `thisIsAnExample`
    Camel,
    /// `this_is_an_example`, words may have any capitalization
    Snake,
    /// `tHIS iS aN eXAMPLE`
    Inverse,
    /// `ThIs Is An ExAmPlE` or `tHiS iS aN eXaMpLe`
    Alternating,
    /// Letters at even character positions uppercase, odd lowercase.
    AlternatingNormal,
    /// Letters at odd character positions uppercase, even lowercase.
    AlternatingReverse,
}

impl CasingStyle {
    pub const ALL: [CasingStyle; 11] = [
        CasingStyle::Unrecognized,
        CasingStyle::Upper,
        CasingStyle::Lower,
        CasingStyle::Title,
        CasingStyle::Pascal,
        CasingStyle::Camel,
        CasingStyle::Snake,
        CasingStyle::Inverse,
        CasingStyle::Alternating,
        CasingStyle::AlternatingNormal,
        CasingStyle::AlternatingReverse,
    ];

    /// Whether [`classify`] can ever return this style.
    pub fn is_detectable(self) -> bool {
        !matches!(
            self,
            CasingStyle::AlternatingNormal | CasingStyle::AlternatingReverse
        )
    }

    /// Whether [`set_casing`] accepts this style as a target.
    pub fn is_target(self) -> bool {
        !matches!(self, CasingStyle::Unrecognized | CasingStyle::Alternating)
    }

    pub fn name(self) -> &'static str {
        match self {
            CasingStyle::Unrecognized => "unrecognized",
            CasingStyle::Upper => "upper",
            CasingStyle::Lower => "lower",
            CasingStyle::Title => "title",
            CasingStyle::Pascal => "pascal",
            CasingStyle::Camel => "camel",
            CasingStyle::Snake => "snake",
            CasingStyle::Inverse => "inverse",
            CasingStyle::Alternating => "alternating",
            CasingStyle::AlternatingNormal => "alternating-normal",
            CasingStyle::AlternatingReverse => "alternating-reverse",
        }
    }
}

impl FromStr for CasingStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        if normalized == "other" {
            return Ok(CasingStyle::Unrecognized);
        }
        CasingStyle::ALL
            .into_iter()
            .find(|style| style.name() == normalized)
            .ok_or_else(|| format!("Unknown casing style: {}", s))
    }
}

impl fmt::Display for CasingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_style_names() {
        assert_eq!("pascal".parse::<CasingStyle>(), Ok(CasingStyle::Pascal));
        assert_eq!("SNAKE".parse::<CasingStyle>(), Ok(CasingStyle::Snake));
        assert_eq!(
            "alternating_reverse".parse::<CasingStyle>(),
            Ok(CasingStyle::AlternatingReverse)
        );
        assert_eq!("other".parse::<CasingStyle>(), Ok(CasingStyle::Unrecognized));
        assert!("kebab".parse::<CasingStyle>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for style in CasingStyle::ALL {
            assert_eq!(style.to_string().parse::<CasingStyle>(), Ok(style));
        }
    }

    #[test]
    fn test_capabilities() {
        assert!(CasingStyle::Alternating.is_detectable());
        assert!(!CasingStyle::Alternating.is_target());
        assert!(!CasingStyle::AlternatingNormal.is_detectable());
        assert!(CasingStyle::AlternatingNormal.is_target());
        assert!(!CasingStyle::Unrecognized.is_target());
    }

    #[test]
    fn test_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            style: CasingStyle,
        }

        let parsed: Wrapper = toml::from_str("style = \"alternating-normal\"").unwrap();
        assert_eq!(parsed.style, CasingStyle::AlternatingNormal);

        let parsed: Wrapper = toml::from_str("style = \"other\"").unwrap();
        assert_eq!(parsed.style, CasingStyle::Unrecognized);
    }
}
