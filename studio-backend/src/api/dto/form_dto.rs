// studio-backend/src/api/dto/form_dto.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::form_state::FormValues;
use crate::domain::{ContactMethod, FormKind, FormState};
use crate::utils::validation::common::{
    validate_email_format, validate_name_charset, validate_phone_format,
};

/// Booking submission body.
///
/// The derive carries the discriminator-independent constraints; the
/// phone pattern runs unconditionally here, which is this form's
/// deliberate asymmetry against the contact form. Required-ness keyed by
/// the chosen contact method comes from the form schema.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(default)]
    #[validate(
        length(min = 2, max = 30, message = "forms.validation.nameRequired"),
        custom(function = validate_name_charset)
    )]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = validate_email_format))]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = validate_phone_format))]
    pub phone: String,

    #[serde(default)]
    pub preferred_contact: ContactMethod,

    #[serde(default)]
    pub service_type: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "forms.validation.messageLength"))]
    pub message: String,
}

impl BookingRequest {
    pub fn form_state(&self) -> FormState {
        FormState::with_values(FormKind::Booking, self.preferred_contact, self.values())
    }

    fn values(&self) -> FormValues {
        FormValues {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            service_type: self.service_type.clone(),
            message: self.message.clone(),
        }
    }
}

/// Contact submission body. No phone rule here: on this form the phone is
/// validated only when it is the chosen contact method, which the form
/// schema decides.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[serde(default)]
    #[validate(
        length(min = 2, max = 30, message = "forms.validation.nameRequired"),
        custom(function = validate_name_charset)
    )]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = validate_email_format))]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub preferred_contact: ContactMethod,

    #[serde(default)]
    #[validate(length(min = 10, message = "forms.validation.messageLength"))]
    pub message: String,
}

impl ContactRequest {
    pub fn form_state(&self) -> FormState {
        FormState::with_values(FormKind::Contact, self.preferred_contact, self.values())
    }

    fn values(&self) -> FormValues {
        FormValues {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            service_type: String::new(),
            message: self.message.clone(),
        }
    }
}

/// Body of a delivered submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionAcceptedResponse {
    pub form: FormKind,
    /// Client-side route of the matching confirmation view.
    pub confirmation_route: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(json: serde_json::Value) -> BookingRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let request = booking(serde_json::json!({}));
        assert_eq!(request.name, "");
        assert_eq!(request.preferred_contact, ContactMethod::Email);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_valid_booking_request_passes_the_derive() {
        let request = booking(serde_json::json!({
            "name": "Anna Kowalska",
            "email": "anna@example.com",
            "preferredContact": "email",
            "serviceType": "lily"
        }));
        assert!(request.validate().is_ok());
        let state = request.form_state();
        assert_eq!(state.kind(), FormKind::Booking);
        assert_eq!(state.values().service_type, "lily");
    }

    #[test]
    fn test_booking_derive_rejects_a_malformed_phone() {
        let request = booking(serde_json::json!({
            "name": "Anna Kowalska",
            "email": "anna@example.com",
            "phone": "12345",
            "preferredContact": "email",
            "serviceType": "lily"
        }));
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone"));
    }

    #[test]
    fn test_contact_derive_ignores_the_phone() {
        let request: ContactRequest = serde_json::from_value(serde_json::json!({
            "name": "Anna Kowalska",
            "email": "anna@example.com",
            "phone": "12345",
            "preferredContact": "email",
            "message": "Wiadomość o wystarczającej długości."
        }))
        .unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_contact_message_must_reach_ten_characters() {
        let request: ContactRequest = serde_json::from_value(serde_json::json!({
            "name": "Anna Kowalska",
            "email": "anna@example.com",
            "preferredContact": "email",
            "message": "Krótko"
        }))
        .unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("message"));
    }
}
