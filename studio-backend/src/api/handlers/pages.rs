// studio-backend/src/api/handlers/pages.rs

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::api::locale::{self, LanguageQuery};
use crate::api::{cookies, AppState};
use crate::domain::{FormKind, ServiceKind};
use crate::service::sitemap;
use crate::types::ApiResponse;

/// Home view. Consumes the pending scroll-target handoff, if one is set.
pub async fn home(
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

    let scroll_to = jar
        .get(cookies::SCROLL_TARGET)
        .map(|cookie| cookie.value().to_string());
    let jar = if scroll_to.is_some() {
        jar.remove(cookies::removal(cookies::SCROLL_TARGET))
    } else {
        jar
    };

    (jar, ApiResponse::success(state.content.home(language, scroll_to))).into_response()
}

#[derive(Debug, Default, Deserialize)]
pub struct BookingQuery {
    pub lang: Option<String>,
    /// Direct pre-selection, taking precedence over the handoff cookie.
    pub service: Option<String>,
}

/// Booking view. Consumes the pre-selected-service handoff; an explicit
/// `?service=` query wins over the cookie.
pub async fn booking(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Query(query): Query<BookingQuery>,
) -> Response {
    let language = locale::detect(
        query.lang.as_deref(),
        &jar,
        &headers,
        state.config.default_language,
    );

    let handoff = jar
        .get(cookies::SERVICE_TYPE)
        .map(|cookie| cookie.value().to_string());
    let jar = if handoff.is_some() {
        jar.remove(cookies::removal(cookies::SERVICE_TYPE))
    } else {
        jar
    };

    let preselected = query
        .service
        .as_deref()
        .and_then(ServiceKind::from_str)
        .or_else(|| handoff.as_deref().and_then(ServiceKind::from_str));

    (
        jar,
        ApiResponse::success(state.content.booking(language, preselected)),
    )
        .into_response()
}

pub async fn contact(
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
    ApiResponse::success(state.content.contact(language)).into_response()
}

pub async fn booking_confirmation(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Query(query): Query<LanguageQuery>,
) -> Response {
    confirmation(state, jar, headers, query, FormKind::Booking)
}

pub async fn contact_confirmation(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Query(query): Query<LanguageQuery>,
) -> Response {
    confirmation(state, jar, headers, query, FormKind::Contact)
}

fn confirmation(
    state: AppState,
    jar: CookieJar,
    headers: HeaderMap,
    query: LanguageQuery,
    form: FormKind,
) -> Response {
    let language = locale::detect(
        query.lang.as_deref(),
        &jar,
        &headers,
        state.config.default_language,
    );
    ApiResponse::success(state.content.confirmation(form, language)).into_response()
}

pub async fn privacy_policy(
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
    ApiResponse::success(state.content.privacy_policy(language)).into_response()
}

pub async fn terms(
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
    ApiResponse::success(state.content.terms(language)).into_response()
}

pub async fn sitemap(State(state): State<AppState>) -> Response {
    let xml = sitemap::render(&state.config.public_base_url);
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        xml,
    )
        .into_response()
}

/// Catch-all: a localized not-found view with an HTTP 404.
pub async fn not_found(
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
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::success(state.content.not_found(language))),
    )
        .into_response()
}
