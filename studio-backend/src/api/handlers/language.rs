// studio-backend/src/api/handlers/language.rs

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;

use crate::api::dto::{LanguageInfoResponse, LanguageUpdateRequest};
use crate::api::locale::{self, LanguageQuery};
use crate::api::{cookies, AppState};
use crate::error::AppError;
use crate::i18n::Language;
use crate::types::ApiResponse;

pub async fn current(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Query(query): Query<LanguageQuery>,
) -> Response {
    let language = locale::detect(
        query.lang.as_deref(),
        &jar,
        &headers,
        state.config.default_language,
    );
    ApiResponse::success(LanguageInfoResponse::new(language)).into_response()
}

/// Switches the UI language: persists the preference cookie and reports
/// the code the client mirrors into the document metadata.
pub async fn switch_language(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LanguageUpdateRequest>,
) -> Response {
    let Some(language) = Language::from_code(&request.language) else {
        return AppError::BadRequest(format!(
            "Unsupported language code: {}",
            request.language
        ))
        .into_response();
    };

    let jar = jar.add(cookies::preference(
        cookies::LANGUAGE,
        language.code().to_string(),
        state.config.security.cookie_secure,
    ));
    tracing::info!(language = %language, "Language preference saved");

    (jar, ApiResponse::success(LanguageInfoResponse::new(language))).into_response()
}
