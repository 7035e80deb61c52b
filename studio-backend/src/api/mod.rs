// studio-backend/src/api/mod.rs

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::{middleware, Router};
use tower_http::cors::CorsLayer;

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::i18n::Translator;
use crate::logging::{inject_request_context, logging_middleware};
use crate::service::relay::{create_relay, RelayApi};
use crate::service::ContentService;

pub mod cookies;
pub mod dto;
pub mod handlers;
pub mod locale;

use handlers::{consent, forms, language, pages, session};

/// Shared application state, one per process.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub translator: Arc<Translator>,
    pub content: Arc<ContentService>,
    pub relay: Arc<dyn RelayApi>,
}

impl AppState {
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let relay = create_relay(&config.relay)?;
        Self::with_relay(config, relay)
    }

    /// State with an injected relay, the seam the integration tests use.
    pub fn with_relay(config: AppConfig, relay: Arc<dyn RelayApi>) -> AppResult<Self> {
        let translator = Arc::new(Translator::from_embedded()?);
        let content = Arc::new(ContentService::new(translator.clone()));
        Ok(Self {
            config: Arc::new(config),
            translator,
            content,
            relay,
        })
    }
}

/// Builds the router with every route and middleware layer attached.
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        // Localized page view models
        .route("/", get(pages::home))
        .route("/booking", get(pages::booking))
        .route("/contact", get(pages::contact))
        .route("/booking-confirmation", get(pages::booking_confirmation))
        .route("/contact-confirmation", get(pages::contact_confirmation))
        .route("/privacy-policy", get(pages::privacy_policy))
        .route("/terms", get(pages::terms))
        .route("/sitemap.xml", get(pages::sitemap))
        // Form submissions
        .route("/api/reservation", post(forms::submit_reservation))
        .route("/api/contact", post(forms::submit_contact))
        // Cookie consent
        .route(
            "/api/consent",
            get(consent::status)
                .put(consent::save_preferences)
                .delete(consent::reset),
        )
        .route("/api/consent/accept-all", post(consent::accept_all))
        .route("/api/consent/reject-all", post(consent::reject_all))
        // Language preference
        .route(
            "/api/language",
            get(language::current).put(language::switch_language),
        )
        // One-shot session handoffs
        .route(
            "/api/session/scroll-target",
            post(session::set_scroll_target),
        )
        .route(
            "/api/session/service-type",
            post(session::set_service_type),
        )
        .fallback(pages::not_found)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(inject_request_context))
        .layer(cors)
        .with_state(state)
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT_LANGUAGE])
        .allow_credentials(true)
}
