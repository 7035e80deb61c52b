// src/i18n/translator.rs
use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

use crate::i18n::Language;

// =============================================================================
// Constants
// =============================================================================

/// Upper bound for indexed key scans. Enumerations such as FAQ entries or
/// policy paragraphs probe `prefix1`, `prefix2`, ... and stop at the first
/// missing index, never probing past this bound.
pub const INDEXED_SCAN_LIMIT: usize = 20;

static PL_BUNDLE: &str = include_str!("../../locales/pl.json");
static EN_BUNDLE: &str = include_str!("../../locales/en.json");

/// Matches English season names so free-form text can carry them as tokens
/// and have them swapped for localized labels.
static SEASON_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(Spring|Summer|Autumn|Winter)\b").expect("Invalid season regex"));

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("Failed to parse {language} translation bundle: {source}")]
    Parse {
        language: Language,
        #[source]
        source: serde_json::Error,
    },
}

// =============================================================================
// Bundle
// =============================================================================

#[derive(Debug)]
struct Bundle {
    /// Nested message tree exactly as authored, for structured reads.
    tree: Value,
    /// Dot-separated keys flattened for direct lookups. Arrays stay in the
    /// tree only.
    flat: HashMap<String, String>,
}

impl Bundle {
    fn parse(language: Language, source: &str) -> Result<Self, TranslationError> {
        let tree: Value = serde_json::from_str(source)
            .map_err(|source| TranslationError::Parse { language, source })?;
        let mut flat = HashMap::new();
        flatten_into(&tree, String::new(), &mut flat);
        Ok(Self { tree, flat })
    }
}

fn flatten_into(value: &Value, prefix: String, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let child_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(child, child_prefix, out);
            }
        }
        Value::String(text) => {
            out.insert(prefix, text.clone());
        }
        _ => {}
    }
}

fn tree_at<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |node, segment| node.get(segment))
}

// =============================================================================
// Translator
// =============================================================================

/// Bilingual message catalogue backing every localized response.
///
/// Lookups fall back to Polish when the requested language misses a key,
/// and [`resolve`](Self::resolve) returns the key itself when both bundles
/// miss it, so a broken key surfaces verbatim instead of disappearing.
#[derive(Debug)]
pub struct Translator {
    pl: Bundle,
    en: Bundle,
}

impl Translator {
    /// Builds the catalogue from the bundles embedded at compile time.
    pub fn from_embedded() -> Result<Self, TranslationError> {
        Self::from_sources(PL_BUNDLE, EN_BUNDLE)
    }

    pub fn from_sources(pl: &str, en: &str) -> Result<Self, TranslationError> {
        Ok(Self {
            pl: Bundle::parse(Language::Pl, pl)?,
            en: Bundle::parse(Language::En, en)?,
        })
    }

    fn bundle(&self, language: Language) -> &Bundle {
        match language {
            Language::Pl => &self.pl,
            Language::En => &self.en,
        }
    }

    /// Returns the message for `key`, falling back to Polish.
    pub fn lookup(&self, key: &str, language: Language) -> Option<&str> {
        self.bundle(language)
            .flat
            .get(key)
            .or_else(|| self.pl.flat.get(key))
            .map(String::as_str)
    }

    /// Returns the message for `key`, or the key itself when no bundle
    /// carries it.
    pub fn resolve(&self, key: &str, language: Language) -> String {
        match self.lookup(key, language) {
            Some(text) => text.to_owned(),
            None => key.to_owned(),
        }
    }

    /// True when `key` can be served for `language`, counting the fallback.
    pub fn exists(&self, key: &str, language: Language) -> bool {
        self.lookup(key, language).is_some()
    }

    /// Resolves `key` and substitutes the `{count}` placeholder.
    pub fn resolve_count(&self, key: &str, language: Language, count: u64) -> String {
        self.resolve(key, language)
            .replace("{count}", &count.to_string())
    }

    /// Collects `prefix1`, `prefix2`, ... until the first missing index.
    pub fn indexed(&self, prefix: &str, language: Language) -> Vec<String> {
        self.indexed_entries(prefix, language)
            .map(|(_, text)| text)
            .collect()
    }

    /// Like [`indexed`](Self::indexed), but yields `(index, message)` pairs
    /// lazily so callers can pair parallel sequences by index.
    pub fn indexed_entries<'a>(
        &'a self,
        prefix: &'a str,
        language: Language,
    ) -> impl Iterator<Item = (usize, String)> + 'a {
        (1..=INDEXED_SCAN_LIMIT).map_while(move |index| {
            let key = format!("{prefix}{index}");
            self.lookup(&key, language)
                .map(|text| (index, text.to_owned()))
        })
    }

    /// Swaps English season names inside `text` for their localized labels.
    pub fn localize_seasons(&self, text: &str, language: Language) -> String {
        SEASON_NAME_REGEX
            .replace_all(text, |caps: &regex::Captures<'_>| {
                let season = caps[0].to_ascii_lowercase();
                self.resolve(&format!("portfolio.types.{season}"), language)
            })
            .into_owned()
    }

    /// Structured read of a subtree, arrays included. Falls back to the
    /// Polish tree when the requested language misses the path.
    pub fn table(&self, path: &str, language: Language) -> Option<&Value> {
        tree_at(&self.bundle(language).tree, path).or_else(|| tree_at(&self.pl.tree, path))
    }
}

// =============================================================================
// Tests
// =============================================================================
