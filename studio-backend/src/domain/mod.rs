// studio-backend/src/domain/mod.rs

pub mod consent;
pub mod contact_method;
pub mod form_state;
pub mod portfolio;
pub mod schema;
pub mod season;
pub mod service_offer;
pub mod site_route;
pub mod submission;

pub use consent::ConsentRecord;
pub use contact_method::ContactMethod;
pub use form_state::{FormPhase, FormState, FormValues};
pub use portfolio::PortfolioItem;
pub use schema::{FieldError, FormField, FormKind, FormSchema};
pub use season::Season;
pub use service_offer::ServiceKind;
pub use site_route::SiteRoute;
pub use submission::SubmissionPayload;
