// studio-backend/src/domain/contact_method.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Preferred contact channel, the discriminator of both submission forms.
/// Exactly one of the two contact fields is mandatory at any time, selected
/// by this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    Email,
    Phone,
}

impl ContactMethod {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    /// The opposite channel, the one a transition makes irrelevant.
    pub fn other(&self) -> Self {
        match self {
            Self::Email => Self::Phone,
            Self::Phone => Self::Email,
        }
    }
}

impl Default for ContactMethod {
    fn default() -> Self {
        Self::Email
    }
}

impl fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(ContactMethod::from_str("email"), Some(ContactMethod::Email));
        assert_eq!(ContactMethod::from_str("PHONE"), Some(ContactMethod::Phone));
        assert_eq!(ContactMethod::from_str("fax"), None);
    }

    #[test]
    fn test_other_flips_the_channel() {
        assert_eq!(ContactMethod::Email.other(), ContactMethod::Phone);
        assert_eq!(ContactMethod::Phone.other(), ContactMethod::Email);
    }

    #[test]
    fn test_default_is_email() {
        assert_eq!(ContactMethod::default(), ContactMethod::Email);
    }

    #[test]
    fn test_serde() {
        assert_eq!(
            serde_json::to_string(&ContactMethod::Phone).unwrap(),
            r#""phone""#
        );
        let parsed: ContactMethod = serde_json::from_str(r#""email""#).unwrap();
        assert_eq!(parsed, ContactMethod::Email);
    }
}
