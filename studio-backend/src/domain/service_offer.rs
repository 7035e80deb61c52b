// studio-backend/src/domain/service_offer.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// The studio's three bookable offers. The slug is the canonical
/// `service_type` value in submissions and in the pre-selection handoff;
/// titles, descriptions, prices and feature lists live in the locale
/// bundles under `services.{slug}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Crocus,
    Lily,
    Rose,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 3] = [ServiceKind::Crocus, ServiceKind::Lily, ServiceKind::Rose];

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "crocus" => Some(Self::Crocus),
            "lily" => Some(Self::Lily),
            "rose" => Some(Self::Rose),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Crocus => "crocus",
            Self::Lily => "lily",
            Self::Rose => "rose",
        }
    }

    /// Locale key prefix of this offer's content block.
    pub fn locale_prefix(&self) -> String {
        format!("services.{}", self.as_str())
    }

    /// The offer highlighted as the most popular choice.
    pub fn is_popular(&self) -> bool {
        matches!(self, Self::Lily)
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
