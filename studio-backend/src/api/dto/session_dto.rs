// studio-backend/src/api/dto/session_dto.rs

use serde::{Deserialize, Serialize};

/// Section id the home view should scroll to after navigation.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrollTargetRequest {
    pub target: String,
}

/// Offer slug a service card hands to the booking form.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceTypeRequest {
    pub service: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandoffAckResponse {
    pub stored: String,
}
