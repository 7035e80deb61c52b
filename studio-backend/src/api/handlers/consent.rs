// studio-backend/src/api/handlers/consent.rs

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;

use crate::api::dto::{ConsentStatusResponse, ConsentUpdateRequest};
use crate::api::AppState;
use crate::service::consent::{ConsentStore, CookieConsentStore};
use crate::types::ApiResponse;

fn store(state: &AppState, jar: CookieJar) -> CookieConsentStore {
    CookieConsentStore::new(jar, state.config.security.cookie_secure)
}

/// Banner gate: present record suppresses the banner, an absent or
/// malformed one shows it.
pub async fn status(State(state): State<AppState>, jar: CookieJar) -> Response {
    let record = store(&state, jar).load();
    ApiResponse::success(ConsentStatusResponse::from_record(record)).into_response()
}

/// The banner's "save preferences" action.
pub async fn save_preferences(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<ConsentUpdateRequest>,
) -> Response {
    save(state, jar, request.functional)
}

pub async fn accept_all(State(state): State<AppState>, jar: CookieJar) -> Response {
    save(state, jar, true)
}

pub async fn reject_all(State(state): State<AppState>, jar: CookieJar) -> Response {
    save(state, jar, false)
}

fn save(state: AppState, jar: CookieJar, functional: bool) -> Response {
    let mut store = store(&state, jar);
    let record = store.save(functional);
    tracing::info!(functional, "Consent preferences saved");
    (
        store.into_jar(),
        ApiResponse::success(ConsentStatusResponse::from_record(Some(record))),
    )
        .into_response()
}

/// Footer "cookie preferences" reset: forgets the decision so the banner
/// gates back on without a reload.
pub async fn reset(State(state): State<AppState>, jar: CookieJar) -> Response {
    let mut store = store(&state, jar);
    store.clear();
    if state.config.is_development() {
        tracing::info!("Developer consent reset");
    }
    (
        store.into_jar(),
        ApiResponse::success(ConsentStatusResponse::from_record(None)),
    )
        .into_response()
}
