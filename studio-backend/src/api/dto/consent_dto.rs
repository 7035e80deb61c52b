// studio-backend/src/api/dto/consent_dto.rs

use serde::{Deserialize, Serialize};

use crate::domain::ConsentRecord;

/// Banner preference body: only the functional category is a choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsentUpdateRequest {
    pub functional: bool,
}

/// Banner gate: the stored record, if any, and whether to show the banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsentStatusResponse {
    pub show_banner: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<ConsentRecord>,
}

impl ConsentStatusResponse {
    pub fn from_record(record: Option<ConsentRecord>) -> Self {
        Self {
            show_banner: record.is_none(),
            record,
        }
    }
}
