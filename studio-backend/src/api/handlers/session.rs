// studio-backend/src/api/handlers/session.rs

//! One-shot session handoffs: set here, consumed and deleted by the page
//! handlers that read them.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;

use crate::api::dto::{HandoffAckResponse, ScrollTargetRequest, ServiceTypeRequest};
use crate::api::{cookies, AppState};
use crate::domain::ServiceKind;
use crate::error::AppError;
use crate::types::ApiResponse;

pub async fn set_scroll_target(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<ScrollTargetRequest>,
) -> Response {
    let target = request.target.trim();
    if target.is_empty() {
        return AppError::BadRequest("Scroll target must not be empty".to_string())
            .into_response();
    }

    let jar = jar.add(cookies::handoff(
        cookies::SCROLL_TARGET,
        target.to_string(),
        state.config.security.cookie_secure,
    ));
    (
        jar,
        ApiResponse::success(HandoffAckResponse {
            stored: cookies::SCROLL_TARGET.to_string(),
        }),
    )
        .into_response()
}

pub async fn set_service_type(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<ServiceTypeRequest>,
) -> Response {
    let Some(service) = ServiceKind::from_str(&request.service) else {
        return AppError::BadRequest(format!("Unknown service: {}", request.service))
            .into_response();
    };

    let jar = jar.add(cookies::handoff(
        cookies::SERVICE_TYPE,
        service.as_str().to_string(),
        state.config.security.cookie_secure,
    ));
    (
        jar,
        ApiResponse::success(HandoffAckResponse {
            stored: cookies::SERVICE_TYPE.to_string(),
        }),
    )
        .into_response()
}
