// studio-backend/src/domain/submission.rs

use serde::{Deserialize, Serialize};

use crate::domain::ContactMethod;
use crate::i18n::Language;

/// Wire shape of a relayed submission: the form values flattened together
/// with the active UI language. Serialized once per submit, never persisted.
/// `service` is present on booking submissions only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub contact_method: ContactMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub message: String,
    pub language: Language,
}
