// studio-backend/src/api/locale.rs

use axum::http::{header, HeaderMap};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::api::cookies;
use crate::i18n::Language;

/// Query parameters every localized route accepts.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LanguageQuery {
    pub lang: Option<String>,
}

/// Request language, in order: explicit query parameter, preference
/// cookie, `Accept-Language` header, configured default.
pub fn detect(
    query: Option<&str>,
    jar: &CookieJar,
    headers: &HeaderMap,
    default: Language,
) -> Language {
    query
        .and_then(Language::from_code)
        .or_else(|| {
            jar.get(cookies::LANGUAGE)
                .and_then(|cookie| Language::from_code(cookie.value()))
        })
        .or_else(|| {
            headers
                .get(header::ACCEPT_LANGUAGE)
                .and_then(|value| value.to_str().ok())
                .and_then(Language::from_accept_language)
        })
        .unwrap_or(default)
}
