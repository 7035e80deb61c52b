// studio-backend/src/domain/site_route.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// The site's route table. Shared by the router, the confirmation
/// redirect metadata and the sitemap generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SiteRoute {
    Home,
    Booking,
    Contact,
    BookingConfirmation,
    ContactConfirmation,
    PrivacyPolicy,
    Terms,
    NotFound,
}

impl SiteRoute {
    pub const ALL: [SiteRoute; 8] = [
        SiteRoute::Home,
        SiteRoute::Booking,
        SiteRoute::Contact,
        SiteRoute::BookingConfirmation,
        SiteRoute::ContactConfirmation,
        SiteRoute::PrivacyPolicy,
        SiteRoute::Terms,
        SiteRoute::NotFound,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Booking => "/booking",
            Self::Contact => "/contact",
            Self::BookingConfirmation => "/booking-confirmation",
            Self::ContactConfirmation => "/contact-confirmation",
            Self::PrivacyPolicy => "/privacy-policy",
            Self::Terms => "/terms",
            Self::NotFound => "/404",
        }
    }

    /// Routes exposed to crawlers. Confirmation pages are reachable only
    /// after a submission and the 404 catch-all is not a page, so neither
    /// is listed.
    pub fn indexable() -> [SiteRoute; 5] {
        [
            Self::Home,
            Self::Booking,
            Self::Contact,
            Self::PrivacyPolicy,
            Self::Terms,
        ]
    }

    /// Crawl priority used by the sitemap, highest for the home page.
    pub fn sitemap_priority(&self) -> &'static str {
        match self {
            Self::Home => "1.0",
            _ => "0.8",
        }
    }
}

impl fmt::Display for SiteRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_absolute_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for route in SiteRoute::ALL {
            assert!(route.path().starts_with('/'));
            assert!(seen.insert(route.path()));
        }
    }

    #[test]
    fn test_indexable_excludes_confirmations_and_not_found() {
        let indexable = SiteRoute::indexable();
        assert!(!indexable.contains(&SiteRoute::BookingConfirmation));
        assert!(!indexable.contains(&SiteRoute::ContactConfirmation));
        assert!(!indexable.contains(&SiteRoute::NotFound));
        assert!(indexable.contains(&SiteRoute::Home));
    }

    #[test]
    fn test_home_has_top_priority() {
        assert_eq!(SiteRoute::Home.sitemap_priority(), "1.0");
        assert_eq!(SiteRoute::Terms.sitemap_priority(), "0.8");
    }
}
