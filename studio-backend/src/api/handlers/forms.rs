// studio-backend/src/api/handlers/forms.rs

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use validator::{Validate, ValidationErrors};

use crate::api::dto::{BookingRequest, ContactRequest, SubmissionAcceptedResponse};
use crate::api::locale::{self, LanguageQuery};
use crate::api::AppState;
use crate::domain::{FormField, FormKind, FormState};
use crate::error::ErrorResponse;
use crate::i18n::Language;
use crate::types::ApiResponse;

pub async fn submit_reservation(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Query(query): Query<LanguageQuery>,
    Json(request): Json<BookingRequest>,
) -> Response {
    let dto_failure = request.validate().err();
    submit(
        &state,
        &jar,
        &headers,
        &query,
        request.form_state(),
        dto_failure,
    )
    .await
}

pub async fn submit_contact(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Query(query): Query<LanguageQuery>,
    Json(request): Json<ContactRequest>,
) -> Response {
    let dto_failure = request.validate().err();
    submit(
        &state,
        &jar,
        &headers,
        &query,
        request.form_state(),
        dto_failure,
    )
    .await
}

/// Shared submit flow: merge DTO and schema validation, then hand the
/// payload to the relay. Delivery resets the form state; failure keeps the
/// values and echoes them back for retry.
async fn submit(
    state: &AppState,
    jar: &CookieJar,
    headers: &HeaderMap,
    query: &LanguageQuery,
    mut form: FormState,
    dto_failure: Option<ValidationErrors>,
) -> Response {
    let language = locale::detect(
        query.lang.as_deref(),
        jar,
        headers,
        state.config.default_language,
    );
    let kind = form.kind();

    let mut errors: Vec<(FormField, String)> = dto_failure
        .as_ref()
        .map(dto_field_errors)
        .unwrap_or_default();
    if !form.begin_submit() {
        for error in form.errors() {
            if !errors.iter().any(|(field, _)| *field == error.field) {
                errors.push((error.field, error.message_key.to_string()));
            }
        }
    }
    if !errors.is_empty() {
        tracing::debug!(
            form = %kind,
            fields = errors.len(),
            "Submission rejected by validation"
        );
        return validation_failure(state, language, errors);
    }

    let payload = form.payload(language);
    let delivered = state.relay.deliver(kind, &payload).await;
    form.finish_submit(delivered.is_ok());

    match delivered {
        Ok(()) => ApiResponse::success(SubmissionAcceptedResponse {
            form: kind,
            confirmation_route: kind.confirmation_route().path().to_string(),
        })
        .into_response(),
        Err(error) => {
            tracing::warn!(form = %kind, %error, "Submission relay failed");
            relay_failure(state, language, &form)
        }
    }
}

/// First derive error per field, keyed by the locale-key message.
fn dto_field_errors(errors: &ValidationErrors) -> Vec<(FormField, String)> {
    let mut out = Vec::new();
    for (field_name, field_errors) in errors.field_errors() {
        let field = match field_name.to_string().as_str() {
            "name" => FormField::Name,
            "email" => FormField::Email,
            "phone" => FormField::Phone,
            "service_type" => FormField::ServiceType,
            "message" => FormField::Message,
            _ => continue,
        };
        if let Some(error) = field_errors.first() {
            let message_key = error
                .message
                .as_ref()
                .map(|message| message.to_string())
                .unwrap_or_else(|| error.code.to_string());
            out.push((field, message_key));
        }
    }
    out
}

fn validation_failure(
    state: &AppState,
    language: Language,
    errors: Vec<(FormField, String)>,
) -> Response {
    let validation_errors: HashMap<String, Vec<String>> = errors
        .into_iter()
        .map(|(field, message_key)| {
            (
                field.as_str().to_string(),
                vec![state.translator.resolve(&message_key, language)],
            )
        })
        .collect();

    let body = ErrorResponse {
        success: false,
        error: "Validation failed".to_string(),
        message: "Validation failed".to_string(),
        details: None,
        validation_errors: Some(validation_errors),
        error_type: "validation_errors".to_string(),
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

fn relay_failure(state: &AppState, language: Language, form: &FormState) -> Response {
    let kind = form.kind();
    let title_key = format!("forms.{kind}.error.title");

    // Echo of the submitted values so the client can restore the form.
    let echoed = serde_json::json!({
        "preferredContact": form.method(),
        "values": form.values(),
    });

    let body = ErrorResponse {
        success: false,
        error: state.translator.resolve(&title_key, language),
        message: state
            .translator
            .resolve(kind.error_message_key(), language),
        details: Some(echoed),
        validation_errors: None,
        error_type: "submission_failed".to_string(),
    };
    (StatusCode::BAD_GATEWAY, Json(body)).into_response()
}
