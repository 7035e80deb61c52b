// studio-backend/src/service/relay.rs

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::RelayConfig;
use crate::domain::{FormKind, SubmissionPayload};
use crate::error::{AppError, AppResult};

/// Outbound side of a form submission.
///
/// The relay is an external service; only the response status class is
/// consumed, never the body. Implementations must not retry on their own,
/// the retry decision belongs to the visitor.
#[async_trait]
pub trait RelayApi: Send + Sync {
    async fn deliver(&self, form: FormKind, payload: &SubmissionPayload) -> AppResult<()>;
}

/// Production relay: one JSON POST per submission, bounded by the
/// configured timeout.
pub struct HttpRelayClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRelayClient {
    pub fn new(config: &RelayConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                AppError::InternalServerError(format!("Failed to build relay client: {e}"))
            })?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl RelayApi for HttpRelayClient {
    async fn deliver(&self, form: FormKind, payload: &SubmissionPayload) -> AppResult<()> {
        let url = format!("{}{}", self.base_url, form.relay_path());

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Relay request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "Relay returned {status} for a {form} submission"
            )));
        }

        tracing::info!(
            form = %form,
            status = status.as_u16(),
            "Submission relayed"
        );
        Ok(())
    }
}

/// Development relay: logs the submission instead of delivering it, so the
/// forms can be exercised without a relay endpoint at hand.
pub struct DevelopmentRelay;

#[async_trait]
impl RelayApi for DevelopmentRelay {
    async fn deliver(&self, form: FormKind, payload: &SubmissionPayload) -> AppResult<()> {
        tracing::info!(
            form = %form,
            name = %payload.name,
            contact_method = %payload.contact_method,
            language = %payload.language,
            "Development mode: submission logged, not delivered"
        );
        Ok(())
    }
}

/// Picks the relay implementation for the given configuration.
pub fn create_relay(config: &RelayConfig) -> AppResult<Arc<dyn RelayApi>> {
    if config.development_mode {
        tracing::warn!("Relay running in development mode; submissions are not delivered");
        Ok(Arc::new(DevelopmentRelay))
    } else {
        Ok(Arc::new(HttpRelayClient::new(config)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactMethod;
    use crate::i18n::Language;

    fn payload() -> SubmissionPayload {
        SubmissionPayload {
            name: "Anna Kowalska".into(),
            email: "anna@example.com".into(),
            phone: String::new(),
            contact_method: ContactMethod::Email,
            service: None,
            message: "Dzień dobry".into(),
            language: Language::Pl,
        }
    }

    #[tokio::test]
    async fn test_development_relay_always_accepts() {
        let relay = DevelopmentRelay;
        assert!(relay.deliver(FormKind::Contact, &payload()).await.is_ok());
        assert!(relay.deliver(FormKind::Booking, &payload()).await.is_ok());
    }

    #[tokio::test]
    async fn test_http_relay_reports_transport_failures() {
        // Reserved TLD, nothing listens there; the send itself must fail.
        let relay = HttpRelayClient::new(&RelayConfig {
            base_url: "http://relay.invalid".into(),
            timeout_secs: 1,
            development_mode: false,
        })
        .unwrap();
        let result = relay.deliver(FormKind::Contact, &payload()).await;
        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }

    #[test]
    fn test_create_relay_honours_development_mode() {
        let config = RelayConfig {
            base_url: "http://relay.invalid".into(),
            timeout_secs: 1,
            development_mode: true,
        };
        assert!(create_relay(&config).is_ok());
    }

    #[test]
    fn test_http_relay_strips_the_trailing_slash() {
        let relay = HttpRelayClient::new(&RelayConfig {
            base_url: "http://relay.invalid/".into(),
            timeout_secs: 1,
            development_mode: false,
        })
        .unwrap();
        assert_eq!(relay.base_url, "http://relay.invalid");
    }
}
