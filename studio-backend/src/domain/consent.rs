// studio-backend/src/domain/consent.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cookie-consent decision as persisted in the consent cookie.
///
/// `necessary` is always true: essential cookies cannot be refused, the
/// record only exists once the visitor has interacted with the banner.
/// The timestamp is refreshed on every save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentRecord {
    pub necessary: bool,
    pub functional: bool,
    pub timestamp: DateTime<Utc>,
}

impl ConsentRecord {
    pub fn new(functional: bool) -> Self {
        Self {
            necessary: true,
            functional,
            timestamp: Utc::now(),
        }
    }

    /// The banner's "accept all" button.
    pub fn accept_all() -> Self {
        Self::new(true)
    }

    /// The banner's "essential only" button.
    pub fn reject_all() -> Self {
        Self::new(false)
    }
}
