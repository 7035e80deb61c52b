// studio-backend/src/api/cookies.rs

//! Cookie names and builders shared by the handlers.
//!
//! Two preference cookies live for a year; the two session handoffs carry
//! no max-age and are deleted by the first reader.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

pub use crate::service::consent::CONSENT_COOKIE as CONSENT;

/// Preferred UI language code.
pub const LANGUAGE: &str = "preferred_language";
/// Section id the home view should scroll to after navigation.
pub const SCROLL_TARGET: &str = "pending_scroll_target";
/// Offer slug pre-selected for the booking form.
pub const SERVICE_TYPE: &str = "pending_service_type";

const PREFERENCE_MAX_AGE_DAYS: i64 = 365;

/// Year-lived preference cookie.
pub fn preference(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .max_age(Duration::days(PREFERENCE_MAX_AGE_DAYS))
        .same_site(SameSite::Lax)
        .http_only(false)
        .secure(secure)
        .build()
}

/// Session-scoped handoff cookie, read once and removed by the reader.
pub fn handoff(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .same_site(SameSite::Lax)
        .http_only(false)
        .secure(secure)
        .build()
}

/// Removal cookie matching the path the setters use.
pub fn removal(name: &'static str) -> Cookie<'static> {
    Cookie::build(name).path("/").build()
}
