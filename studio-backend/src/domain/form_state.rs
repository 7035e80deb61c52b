// studio-backend/src/domain/form_state.rs

use serde::{Deserialize, Serialize};

use crate::domain::schema::{FieldError, FormField, FormKind, FormSchema};
use crate::domain::{ContactMethod, SubmissionPayload};
use crate::i18n::Language;

// =============================================================================
// Form values
// =============================================================================

/// Raw field values of one form instance. The discriminator lives beside
/// these in [`FormState`], not in the map, so the change tracker never
/// counts it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub service_type: String,
    #[serde(default)]
    pub message: String,
}

impl FormValues {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::ServiceType => &self.service_type,
            FormField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::ServiceType => &mut self.service_type,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn clear_field(&mut self, field: FormField) {
        self.set_field(field, String::new());
    }

    /// True when any tracked field holds a non-blank value.
    pub fn any_filled(&self) -> bool {
        FormField::ALL
            .iter()
            .any(|field| !self.field(*field).trim().is_empty())
    }
}

// =============================================================================
// Form state machine
// =============================================================================

/// Submission lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
}

/// Per-instance form state machine: field values, the contact-method
/// discriminator, validation errors and the at-most-one-in-flight submit
/// guard.
///
/// The submit handlers drive one of these per request; the unit tests walk
/// it through the interactive sequences a browser session would.
#[derive(Debug, Clone)]
pub struct FormState {
    kind: FormKind,
    method: ContactMethod,
    values: FormValues,
    errors: Vec<FieldError>,
    phase: FormPhase,
}

impl FormState {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            method: ContactMethod::default(),
            values: FormValues::default(),
            errors: Vec::new(),
            phase: FormPhase::Editing,
        }
    }

    pub fn with_values(kind: FormKind, method: ContactMethod, values: FormValues) -> Self {
        Self {
            kind,
            method,
            values,
            errors: Vec::new(),
            phase: FormPhase::Editing,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn method(&self) -> ContactMethod {
        self.method
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Schema for the current discriminator state. Derived on demand,
    /// never cached.
    pub fn schema(&self) -> FormSchema {
        FormSchema::build(self.kind, self.method)
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.values.set_field(field, value);
    }

    /// Discriminator transition. Clears the now-irrelevant contact field's
    /// value and drops the errors of both contact fields, so neither stale
    /// data nor stale errors survive the switch.
    pub fn set_method(&mut self, method: ContactMethod) {
        if self.method == method {
            return;
        }
        self.method = method;
        let irrelevant = match method {
            ContactMethod::Email => FormField::Phone,
            ContactMethod::Phone => FormField::Email,
        };
        self.values.clear_field(irrelevant);
        self.errors
            .retain(|error| error.field != FormField::Email && error.field != FormField::Phone);
    }

    /// Runs schema validation, replacing the stored errors. True when clean.
    pub fn validate(&mut self) -> bool {
        self.errors = self.schema().validate(&self.values);
        self.errors.is_empty()
    }

    /// Change tracker: true when any tracked field holds a non-blank value.
    /// Cleared by a delivered submission and by [`reset`](Self::reset).
    pub fn has_changes(&self) -> bool {
        self.values.any_filled()
    }

    /// Gate for the leave-page warning and the inline unsaved-data notice.
    pub fn needs_exit_warning(&self) -> bool {
        self.has_changes() && self.phase != FormPhase::Submitting
    }

    /// Starts a submission attempt. Returns false, touching nothing, when
    /// one is already in flight or the values do not validate.
    pub fn begin_submit(&mut self) -> bool {
        if self.phase == FormPhase::Submitting {
            return false;
        }
        if !self.validate() {
            return false;
        }
        self.phase = FormPhase::Submitting;
        true
    }

    /// Ends the in-flight submission. Delivery resets the form; failure
    /// keeps every value for retry. The guard is released either way.
    pub fn finish_submit(&mut self, delivered: bool) {
        self.phase = FormPhase::Editing;
        if delivered {
            self.reset();
        }
    }

    /// Back to the defaults, discriminator included. Values, errors and
    /// the change tracker all clear.
    pub fn reset(&mut self) {
        self.method = ContactMethod::default();
        self.values = FormValues::default();
        self.errors.clear();
        self.phase = FormPhase::Editing;
    }

    /// Flattens the current values into the relay wire shape.
    pub fn payload(&self, language: Language) -> SubmissionPayload {
        SubmissionPayload {
            name: self.values.name.clone(),
            email: self.values.email.clone(),
            phone: self.values.phone.clone(),
            contact_method: self.method,
            service: match self.kind {
                FormKind::Booking => Some(self.values.service_type.clone()),
                FormKind::Contact => None,
            },
            message: self.values.message.clone(),
            language,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
