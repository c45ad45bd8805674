//! Round languages and their alphabets

use serde::{Deserialize, Serialize};
use std::fmt;

/// Language a round is played in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Arabic,
}

/// Virtual keyboard rows for English
const ENGLISH_LAYOUT: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Virtual keyboard rows for Arabic
const ARABIC_LAYOUT: [&str; 3] = ["ضصثقفغعهخحجد", "شسيبلاتنمكط", "ءئؤرىةوزظ"];

impl Language {
    /// Parse a language from its persisted or command-line name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "english" | "en" => Some(Self::English),
            "arabic" | "ar" => Some(Self::Arabic),
            _ => None,
        }
    }

    /// Name used in persisted records
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Arabic => "arabic",
        }
    }

    /// Check whether a (normalized) letter belongs to this language's alphabet
    ///
    /// English accepts `a-z`; Arabic accepts the Arabic block U+0600..=U+06FF.
    #[must_use]
    pub fn accepts(self, letter: char) -> bool {
        match self {
            Self::English => letter.is_ascii_lowercase(),
            Self::Arabic => ('\u{0600}'..='\u{06FF}').contains(&letter),
        }
    }

    /// Normalize a typed character: English letters are lowercased,
    /// Arabic letters have no case.
    #[must_use]
    pub fn normalize(self, letter: char) -> char {
        match self {
            Self::English => letter.to_ascii_lowercase(),
            Self::Arabic => letter,
        }
    }

    /// Rows of the on-screen keyboard
    #[must_use]
    pub const fn keyboard_rows(self) -> [&'static str; 3] {
        match self {
            Self::English => ENGLISH_LAYOUT,
            Self::Arabic => ARABIC_LAYOUT,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("Unknown language: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_accepts_latin_only() {
        assert!(Language::English.accepts('a'));
        assert!(Language::English.accepts('z'));
        assert!(!Language::English.accepts('A'));
        assert!(!Language::English.accepts('1'));
        assert!(!Language::English.accepts('ب'));
    }

    #[test]
    fn arabic_accepts_arabic_block() {
        assert!(Language::Arabic.accepts('ب'));
        assert!(Language::Arabic.accepts('ء'));
        assert!(!Language::Arabic.accepts('a'));
    }

    #[test]
    fn normalize_lowercases_english() {
        assert_eq!(Language::English.normalize('Q'), 'q');
        assert_eq!(Language::Arabic.normalize('ق'), 'ق');
    }

    #[test]
    fn names_round_trip() {
        for language in [Language::English, Language::Arabic] {
            assert_eq!(Language::from_name(language.name()), Some(language));
        }
        assert_eq!(Language::from_name("AR"), Some(Language::Arabic));
        assert_eq!(Language::from_name("klingon"), None);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Language::Arabic).unwrap();
        assert_eq!(json, "\"arabic\"");
    }

    #[test]
    fn keyboard_letters_belong_to_alphabet() {
        for language in [Language::English, Language::Arabic] {
            for row in language.keyboard_rows() {
                for key in row.chars() {
                    assert!(language.accepts(language.normalize(key)), "{key}");
                }
            }
        }
    }
}
