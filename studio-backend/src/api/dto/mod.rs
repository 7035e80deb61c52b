// studio-backend/src/api/dto/mod.rs

pub mod consent_dto;
pub mod form_dto;
pub mod language_dto;
pub mod session_dto;

pub use consent_dto::{ConsentStatusResponse, ConsentUpdateRequest};
pub use form_dto::{BookingRequest, ContactRequest, SubmissionAcceptedResponse};
pub use language_dto::{LanguageInfoResponse, LanguageUpdateRequest};
pub use session_dto::{HandoffAckResponse, ScrollTargetRequest, ServiceTypeRequest};
