// studio-backend/src/service/mod.rs

pub mod consent;
pub mod content;
pub mod relay;
pub mod sitemap;

pub use consent::{ConsentStore, CookieConsentStore, MemoryConsentStore};
pub use content::ContentService;
pub use relay::{create_relay, DevelopmentRelay, HttpRelayClient, RelayApi};
