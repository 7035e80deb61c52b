// src/i18n/language.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Languages served by the site. Polish is the primary content language
/// and the fallback for every lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Pl,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Pl, Language::En];

    /// ISO 639-1 code used in cookies, query parameters and relay payloads.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Pl => "pl",
            Language::En => "en",
        }
    }

    /// Parses a language code, accepting regional variants like "en-GB".
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.trim().split(['-', '_']).next().unwrap_or("");
        match primary.to_ascii_lowercase().as_str() {
            "pl" => Some(Language::Pl),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Picks the first supported language listed in an Accept-Language header.
    pub fn from_accept_language(header: &str) -> Option<Self> {
        header
            .split(',')
            .filter_map(|part| part.split(';').next())
            .find_map(Self::from_code)
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Pl
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_accepts_regional_variants() {
        assert_eq!(Language::from_code("pl"), Some(Language::Pl));
        assert_eq!(Language::from_code("PL"), Some(Language::Pl));
        assert_eq!(Language::from_code("en-GB"), Some(Language::En));
        assert_eq!(Language::from_code("en_US"), Some(Language::En));
        assert_eq!(Language::from_code(" en "), Some(Language::En));
    }

    #[test]
    fn test_from_code_rejects_unsupported_languages() {
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::from_code(""), None);
        assert_eq!(Language::from_code("polish"), None);
    }

    #[test]
    fn test_from_accept_language_picks_first_supported() {
        assert_eq!(
            Language::from_accept_language("de-DE,de;q=0.9,en;q=0.8"),
            Some(Language::En)
        );
        assert_eq!(
            Language::from_accept_language("pl-PL,pl;q=0.9,en-US;q=0.8"),
            Some(Language::Pl)
        );
        assert_eq!(Language::from_accept_language("fr-FR,fr;q=0.9"), None);
    }

    #[test]
    fn test_default_is_polish() {
        assert_eq!(Language::default(), Language::Pl);
    }
}
