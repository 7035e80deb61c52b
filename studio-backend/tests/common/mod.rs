// tests/common/mod.rs

pub mod requests;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use axum::Router;

use studio_backend::api::{create_app, AppState};
use studio_backend::config::AppConfig;
use studio_backend::domain::{FormKind, SubmissionPayload};
use studio_backend::error::{AppError, AppResult};
use studio_backend::service::relay::RelayApi;

static INIT: Once = Once::new();

/// One-time test logging setup.
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("studio_backend=debug,tower_http=debug")
            .with_test_writer()
            .try_init();
    });
}

/// Relay double: records every payload, optionally refusing delivery.
#[derive(Default)]
pub struct MockRelay {
    refuse: AtomicBool,
    deliveries: Mutex<Vec<(FormKind, SubmissionPayload)>>,
}

impl MockRelay {
    /// Makes every following delivery fail.
    pub fn refuse_deliveries(&self) {
        self.refuse.store(true, Ordering::SeqCst);
    }

    pub fn deliveries(&self) -> Vec<(FormKind, SubmissionPayload)> {
        self.deliveries.lock().unwrap().clone()
    }
}

#[async_trait]
impl RelayApi for MockRelay {
    async fn deliver(&self, form: FormKind, payload: &SubmissionPayload) -> AppResult<()> {
        self.deliveries.lock().unwrap().push((form, payload.clone()));
        if self.refuse.load(Ordering::SeqCst) {
            return Err(AppError::ExternalServiceError(
                "mock relay refused the submission".to_string(),
            ));
        }
        Ok(())
    }
}

/// The full router wired to a recording relay.
pub fn create_test_app() -> (Router, Arc<MockRelay>) {
    init_test_env();
    let relay = Arc::new(MockRelay::default());
    let state = AppState::with_relay(AppConfig::for_testing(), relay.clone())
        .expect("Failed to build test app state");
    (create_app(state), relay)
}
