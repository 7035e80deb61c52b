// studio-backend/src/domain/schema.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::ValidateEmail;

use crate::domain::form_state::FormValues;
use crate::domain::{ContactMethod, ServiceKind, SiteRoute};
use crate::utils::validation::common::{email, message, name, phone, NAME_REGEX, PHONE_REGEX};

// =============================================================================
// Form kinds and fields
// =============================================================================

/// The two submission forms served by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Booking,
    Contact,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Booking => "booking",
            Self::Contact => "contact",
        }
    }

    /// Relay path the accepted submission is POSTed to.
    pub fn relay_path(&self) -> &'static str {
        match self {
            Self::Booking => "/api/reservation",
            Self::Contact => "/api/contact",
        }
    }

    /// Route the client is sent to after a delivered submission.
    pub fn confirmation_route(&self) -> SiteRoute {
        match self {
            Self::Booking => SiteRoute::BookingConfirmation,
            Self::Contact => SiteRoute::ContactConfirmation,
        }
    }

    /// Locale key of this form's generic submission-failure message.
    pub fn error_message_key(&self) -> &'static str {
        match self {
            Self::Booking => "forms.booking.error.message",
            Self::Contact => "forms.contact.error.message",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Form fields addressed by validation errors and transition clearing.
/// The discriminator itself is not a tracked field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Name,
    Email,
    Phone,
    ServiceType,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::ServiceType,
        FormField::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::ServiceType => "serviceType",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Error keys
// =============================================================================

/// Locale keys reported on validation failure. Every name violation maps to
/// the single name key; the message level does not distinguish length from
/// charset failures.
pub mod error_keys {
    pub const NAME: &str = "forms.validation.nameRequired";
    pub const EMAIL: &str = "forms.validation.emailValid";
    pub const PHONE: &str = "forms.validation.phoneLength";
    pub const SERVICE: &str = "forms.validation.serviceRequired";
    pub const MESSAGE: &str = "forms.validation.messageLength";
    pub const REQUIRED: &str = "forms.contact.requiredField";
}

/// A field-keyed validation failure. The message is a locale key, localized
/// at the response boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FormField,
    pub message_key: &'static str,
}

// =============================================================================
// Rules
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Trimmed value must be non-empty.
    Required,
    /// Character count within the inclusive bounds.
    CharRange { min: u64, max: u64 },
    MinChars(u64),
    MaxChars(u64),
    /// Letters (ASCII or Polish diacritics) and spaces only.
    NameCharset,
    EmailFormat,
    /// International prefix, then digits; 7 to 15 characters overall.
    PhoneFormat,
    /// Value must name one of the bookable offers.
    KnownService,
}

/// One rule paired with the locale key it reports on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCheck {
    pub rule: FieldRule,
    pub message_key: &'static str,
}

impl FieldCheck {
    const fn new(rule: FieldRule, message_key: &'static str) -> Self {
        Self { rule, message_key }
    }

    fn passes(&self, value: &str) -> bool {
        let chars = value.chars().count() as u64;
        match self.rule {
            FieldRule::Required => !value.trim().is_empty(),
            FieldRule::CharRange { min, max } => chars >= min && chars <= max,
            FieldRule::MinChars(min) => chars >= min,
            FieldRule::MaxChars(max) => chars <= max,
            FieldRule::NameCharset => NAME_REGEX.is_match(value),
            FieldRule::EmailFormat => value.validate_email(),
            FieldRule::PhoneFormat => {
                chars >= phone::MIN_LENGTH
                    && chars <= phone::MAX_LENGTH
                    && PHONE_REGEX.is_match(value)
            }
            FieldRule::KnownService => ServiceKind::from_str(value).is_some(),
        }
    }
}

// =============================================================================
// Schema
// =============================================================================

/// Validation schema for one (form, discriminator) state.
///
/// Derived, never stored: rebuilt on every discriminator change and
/// discarded on reset. The booking and contact forms are kept as two
/// separate rule tables; the booking form validates a provided phone even
/// when e-mail is the chosen channel, the contact form does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    kind: FormKind,
    method: ContactMethod,
    fields: Vec<(FormField, Vec<FieldCheck>)>,
}

impl FormSchema {
    /// Derives the schema for the given form and contact method.
    pub fn build(kind: FormKind, method: ContactMethod) -> Self {
        let fields = match kind {
            FormKind::Booking => Self::booking_fields(method),
            FormKind::Contact => Self::contact_fields(method),
        };
        Self {
            kind,
            method,
            fields,
        }
    }

    fn name_checks() -> Vec<FieldCheck> {
        vec![
            FieldCheck::new(FieldRule::Required, error_keys::NAME),
            FieldCheck::new(
                FieldRule::CharRange {
                    min: name::MIN_LENGTH,
                    max: name::MAX_LENGTH,
                },
                error_keys::NAME,
            ),
            FieldCheck::new(FieldRule::NameCharset, error_keys::NAME),
        ]
    }

    fn chosen_email_checks() -> Vec<FieldCheck> {
        vec![
            FieldCheck::new(FieldRule::Required, error_keys::REQUIRED),
            FieldCheck::new(FieldRule::EmailFormat, error_keys::EMAIL),
            FieldCheck::new(FieldRule::MaxChars(email::MAX_LENGTH), error_keys::EMAIL),
        ]
    }

    fn optional_email_checks() -> Vec<FieldCheck> {
        vec![FieldCheck::new(FieldRule::EmailFormat, error_keys::EMAIL)]
    }

    fn chosen_phone_checks() -> Vec<FieldCheck> {
        vec![
            FieldCheck::new(FieldRule::Required, error_keys::REQUIRED),
            FieldCheck::new(FieldRule::PhoneFormat, error_keys::PHONE),
        ]
    }

    fn booking_fields(method: ContactMethod) -> Vec<(FormField, Vec<FieldCheck>)> {
        let mut fields = vec![(FormField::Name, Self::name_checks())];
        match method {
            ContactMethod::Email => {
                fields.push((FormField::Email, Self::chosen_email_checks()));
                // Optional here, yet still pattern-checked when filled in.
                fields.push((
                    FormField::Phone,
                    vec![FieldCheck::new(FieldRule::PhoneFormat, error_keys::PHONE)],
                ));
            }
            ContactMethod::Phone => {
                fields.push((FormField::Email, Self::optional_email_checks()));
                fields.push((FormField::Phone, Self::chosen_phone_checks()));
            }
        }
        fields.push((
            FormField::ServiceType,
            vec![
                FieldCheck::new(FieldRule::Required, error_keys::SERVICE),
                FieldCheck::new(FieldRule::KnownService, error_keys::SERVICE),
            ],
        ));
        fields.push((
            FormField::Message,
            vec![FieldCheck::new(
                FieldRule::MaxChars(message::BOOKING_MAX_LENGTH),
                error_keys::MESSAGE,
            )],
        ));
        fields
    }

    fn contact_fields(method: ContactMethod) -> Vec<(FormField, Vec<FieldCheck>)> {
        let mut fields = vec![(FormField::Name, Self::name_checks())];
        match method {
            ContactMethod::Email => {
                fields.push((FormField::Email, Self::chosen_email_checks()));
                // Phone stays entirely unvalidated on this form.
            }
            ContactMethod::Phone => {
                fields.push((FormField::Email, Self::optional_email_checks()));
                fields.push((FormField::Phone, Self::chosen_phone_checks()));
            }
        }
        fields.push((
            FormField::Message,
            vec![
                FieldCheck::new(FieldRule::Required, error_keys::MESSAGE),
                FieldCheck::new(
                    FieldRule::MinChars(message::CONTACT_MIN_LENGTH),
                    error_keys::MESSAGE,
                ),
            ],
        ));
        fields
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn method(&self) -> ContactMethod {
        self.method
    }

    /// Checks attached to `field` in this state. Empty when the field is
    /// not validated at all.
    pub fn checks_for(&self, field: FormField) -> &[FieldCheck] {
        self.fields
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, checks)| checks.as_slice())
            .unwrap_or(&[])
    }

    fn is_required(checks: &[FieldCheck]) -> bool {
        checks
            .iter()
            .any(|check| matches!(check.rule, FieldRule::Required))
    }

    /// Validates values against this schema. At most one error per field;
    /// the first failing rule wins. A blank optional field passes without
    /// running its remaining checks.
    pub fn validate(&self, values: &FormValues) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for (field, checks) in &self.fields {
            let value = values.field(*field);
            if value.trim().is_empty() && !Self::is_required(checks) {
                continue;
            }
            if let Some(check) = checks.iter().find(|check| !check.passes(value)) {
                errors.push(FieldError {
                    field: *field,
                    message_key: check.message_key,
                });
            }
        }
        errors
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn values(
        name: &str,
        email: &str,
        phone: &str,
        service_type: &str,
        message: &str,
    ) -> FormValues {
        FormValues {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            service_type: service_type.into(),
            message: message.into(),
        }
    }

    fn error_for(errors: &[FieldError], field: FormField) -> Option<&'static str> {
        errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message_key)
    }

    #[test]
    fn test_valid_booking_with_email_passes() {
        let schema = FormSchema::build(FormKind::Booking, ContactMethod::Email);
        let values = values("Anna Kowalska", "anna@example.com", "", "lily", "");
        assert!(schema.validate(&values).is_empty());
    }

    #[test]
    fn test_valid_contact_with_phone_passes() {
        let schema = FormSchema::build(FormKind::Contact, ContactMethod::Phone);
        let values = values(
            "Jan Śliwiński",
            "",
            "+48123456789",
            "",
            "Proszę o kontakt w sprawie terminu.",
        );
        assert!(schema.validate(&values).is_empty());
    }

    #[test]
    fn test_name_violations_share_one_error_kind() {
        let schema = FormSchema::build(FormKind::Contact, ContactMethod::Email);
        let too_long = "x".repeat(31);
        for bad_name in ["", "A", "Anna123", "Jan_Kowalski", too_long.as_str()] {
            let values = values(
                bad_name,
                "anna@example.com",
                "",
                "",
                "Wiadomość testowa o wystarczającej długości.",
            );
            let errors = schema.validate(&values);
            assert_eq!(
                error_for(&errors, FormField::Name),
                Some(error_keys::NAME),
                "name {bad_name:?} should fail with the name error kind"
            );
        }
    }

    #[test]
    fn test_polish_diacritics_are_valid_name_letters() {
        let schema = FormSchema::build(FormKind::Contact, ContactMethod::Email);
        let values = values(
            "Łukasz Żółć",
            "lukasz@example.com",
            "",
            "",
            "Wiadomość testowa o wystarczającej długości.",
        );
        assert!(schema.validate(&values).is_empty());
    }

    #[test]
    fn test_chosen_email_is_required_and_bounded() {
        let schema = FormSchema::build(FormKind::Booking, ContactMethod::Email);

        let blank = values("Anna Kowalska", "", "", "lily", "");
        assert_eq!(
            error_for(&schema.validate(&blank), FormField::Email),
            Some(error_keys::REQUIRED)
        );

        let malformed = values("Anna Kowalska", "not-an-email", "", "lily", "");
        assert_eq!(
            error_for(&schema.validate(&malformed), FormField::Email),
            Some(error_keys::EMAIL)
        );

        let long_local = "a".repeat(45);
        let too_long = values(
            "Anna Kowalska",
            &format!("{long_local}@example.com"),
            "",
            "lily",
            "",
        );
        assert_eq!(
            error_for(&schema.validate(&too_long), FormField::Email),
            Some(error_keys::EMAIL)
        );
    }

    #[test]
    fn test_unchosen_email_is_optional_but_format_checked() {
        let schema = FormSchema::build(FormKind::Booking, ContactMethod::Phone);

        let blank = values("Anna Kowalska", "", "+48123456789", "lily", "");
        assert!(schema.validate(&blank).is_empty());

        let malformed = values("Anna Kowalska", "oops", "+48123456789", "lily", "");
        assert_eq!(
            error_for(&schema.validate(&malformed), FormField::Email),
            Some(error_keys::EMAIL)
        );
    }

    #[test]
    fn test_chosen_phone_is_required() {
        let schema = FormSchema::build(FormKind::Contact, ContactMethod::Phone);
        let values = values(
            "Anna Kowalska",
            "",
            "",
            "",
            "Wiadomość testowa o wystarczającej długości.",
        );
        assert_eq!(
            error_for(&schema.validate(&values), FormField::Phone),
            Some(error_keys::REQUIRED)
        );
    }

    #[test]
    fn test_phone_pattern_and_length_table() {
        let schema = FormSchema::build(FormKind::Contact, ContactMethod::Phone);
        let cases = [
            ("+48123456789", true),
            ("0048123456789", true),
            ("+1234567", true),
            ("123456789", false),   // no international prefix
            ("+0123456789", false), // leading zero after prefix
            ("+48 123 456", false), // spaces break the pattern
            ("+412345", false),     // under 7 characters
            ("+1234567890123456", false), // over 15 characters
        ];
        for (input, ok) in cases {
            let values = values(
                "Anna Kowalska",
                "",
                input,
                "",
                "Wiadomość testowa o wystarczającej długości.",
            );
            let errors = schema.validate(&values);
            if ok {
                assert!(errors.is_empty(), "phone {input:?} should pass");
            } else {
                assert_eq!(
                    error_for(&errors, FormField::Phone),
                    Some(error_keys::PHONE),
                    "phone {input:?} should fail"
                );
            }
        }
    }

    #[test]
    fn test_booking_checks_phone_even_when_email_is_chosen() {
        let schema = FormSchema::build(FormKind::Booking, ContactMethod::Email);
        let values = values("Anna Kowalska", "anna@example.com", "12345", "lily", "");
        assert_eq!(
            error_for(&schema.validate(&values), FormField::Phone),
            Some(error_keys::PHONE)
        );
    }

    #[test]
    fn test_contact_ignores_phone_when_email_is_chosen() {
        let schema = FormSchema::build(FormKind::Contact, ContactMethod::Email);
        let values = values(
            "Anna Kowalska",
            "anna@example.com",
            "12345",
            "",
            "Wiadomość testowa o wystarczającej długości.",
        );
        assert!(schema.validate(&values).is_empty());
        assert!(schema.checks_for(FormField::Phone).is_empty());
    }

    #[test]
    fn test_booking_requires_a_known_service() {
        let schema = FormSchema::build(FormKind::Booking, ContactMethod::Email);

        let blank = values("Anna Kowalska", "anna@example.com", "", "", "");
        assert_eq!(
            error_for(&schema.validate(&blank), FormField::ServiceType),
            Some(error_keys::SERVICE)
        );

        let unknown = values("Anna Kowalska", "anna@example.com", "", "tulip", "");
        assert_eq!(
            error_for(&schema.validate(&unknown), FormField::ServiceType),
            Some(error_keys::SERVICE)
        );
    }

    #[test]
    fn test_contact_has_no_service_field() {
        let schema = FormSchema::build(FormKind::Contact, ContactMethod::Email);
        assert!(schema.checks_for(FormField::ServiceType).is_empty());
    }

    #[test]
    fn test_message_bounds_differ_per_form() {
        let booking = FormSchema::build(FormKind::Booking, ContactMethod::Email);
        let blank_message = values("Anna Kowalska", "anna@example.com", "", "lily", "");
        assert!(booking.validate(&blank_message).is_empty());

        let long_message = values(
            "Anna Kowalska",
            "anna@example.com",
            "",
            "lily",
            &"x".repeat(501),
        );
        assert_eq!(
            error_for(&booking.validate(&long_message), FormField::Message),
            Some(error_keys::MESSAGE)
        );

        let contact = FormSchema::build(FormKind::Contact, ContactMethod::Email);
        for short in ["", "Krótko"] {
            let values = values("Anna Kowalska", "anna@example.com", "", "", short);
            assert_eq!(
                error_for(&contact.validate(&values), FormField::Message),
                Some(error_keys::MESSAGE),
                "message {short:?} should fail"
            );
        }
    }

    #[test]
    fn test_first_failing_rule_wins_per_field() {
        let schema = FormSchema::build(FormKind::Booking, ContactMethod::Email);
        let values = values("", "", "", "", "");
        let errors = schema.validate(&values);
        let name_errors = errors
            .iter()
            .filter(|error| error.field == FormField::Name)
            .count();
        assert_eq!(name_errors, 1);
    }
}
