// src/i18n/mod.rs
pub mod language;
pub mod translator;

pub use language::Language;
pub use translator::{TranslationError, Translator, INDEXED_SCAN_LIMIT};
