// studio-backend/src/api/dto/language_dto.rs

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageUpdateRequest {
    pub language: String,
}

/// Active language plus the code the client should mirror into the
/// document metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageInfoResponse {
    pub language: Language,
    pub html_lang: String,
    pub available: Vec<String>,
}

impl LanguageInfoResponse {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            html_lang: language.code().to_string(),
            available: Language::ALL.iter().map(|l| l.code().to_string()).collect(),
        }
    }
}
