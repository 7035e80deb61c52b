// studio-backend/src/service/consent.rs

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::domain::ConsentRecord;

/// Cookie holding the serialized [`ConsentRecord`].
pub const CONSENT_COOKIE: &str = "cookie_consent_given";

/// How long a stored decision remains valid.
const CONSENT_MAX_AGE_DAYS: i64 = 365;

/// Persistence seam for the consent decision.
///
/// The store is injected into the handlers rather than read ambiently, so
/// the banner-gating logic is testable against the in-memory variant.
pub trait ConsentStore {
    /// The stored decision, if any. A malformed record reads as absent.
    fn load(&self) -> Option<ConsentRecord>;

    /// Persists a decision, stamping the current time.
    fn save(&mut self, functional: bool) -> ConsentRecord;

    /// Forgets the decision so the banner gates back on.
    fn clear(&mut self);
}

// =============================================================================
// Cookie-backed store
// =============================================================================

/// Production store: the record rides in a first-party cookie.
pub struct CookieConsentStore {
    jar: CookieJar,
    secure: bool,
}

impl CookieConsentStore {
    pub fn new(jar: CookieJar, secure: bool) -> Self {
        Self { jar, secure }
    }

    /// Hands the jar back so the handler can attach it to the response.
    pub fn into_jar(self) -> CookieJar {
        self.jar
    }

    fn build_cookie(&self, record: &ConsentRecord) -> Option<Cookie<'static>> {
        let value = serde_json::to_string(record).ok()?;
        Some(
            Cookie::build((CONSENT_COOKIE, value))
                .path("/")
                .max_age(Duration::days(CONSENT_MAX_AGE_DAYS))
                .same_site(SameSite::Lax)
                .http_only(false)
                .secure(self.secure)
                .build(),
        )
    }
}

impl ConsentStore for CookieConsentStore {
    fn load(&self) -> Option<ConsentRecord> {
        let raw = self.jar.get(CONSENT_COOKIE)?.value().to_string();
        match serde_json::from_str::<ConsentRecord>(&raw) {
            Ok(record) => Some(record),
            Err(error) => {
                // Treated as if the visitor never answered the banner.
                tracing::debug!(%error, "Malformed consent cookie, treating as absent");
                None
            }
        }
    }

    fn save(&mut self, functional: bool) -> ConsentRecord {
        let record = ConsentRecord::new(functional);
        if let Some(cookie) = self.build_cookie(&record) {
            self.jar = self.jar.clone().add(cookie);
        }
        record
    }

    fn clear(&mut self) {
        self.jar = self
            .jar
            .clone()
            .remove(Cookie::build(CONSENT_COOKIE).path("/"));
    }
}

// =============================================================================
// In-memory store
// =============================================================================

/// Test double with the same observable behavior as the cookie store.
#[derive(Debug, Default)]
pub struct MemoryConsentStore {
    record: Option<ConsentRecord>,
}

impl ConsentStore for MemoryConsentStore {
    fn load(&self) -> Option<ConsentRecord> {
        self.record.clone()
    }

    fn save(&mut self, functional: bool) -> ConsentRecord {
        let record = ConsentRecord::new(functional);
        self.record = Some(record.clone());
        record
    }

    fn clear(&mut self) {
        self.record = None;
    }
}

// =============================================================================
// Tests
// =============================================================================
