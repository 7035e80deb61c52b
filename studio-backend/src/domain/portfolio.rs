// studio-backend/src/domain/portfolio.rs

use crate::domain::Season;
use crate::i18n::Language;

/// One gallery entry. The title carries English season tokens and goes
/// through the season substitution before display; descriptions are
/// authored per language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioItem {
    pub id: u32,
    pub title: &'static str,
    pub description_pl: &'static str,
    pub description_en: &'static str,
    pub category: Season,
    pub image_url: &'static str,
    pub before_after_images: [&'static str; 2],
}

impl PortfolioItem {
    pub fn description(&self, language: Language) -> &'static str {
        match language {
            Language::Pl => self.description_pl,
            Language::En => self.description_en,
        }
    }
}

/// The built-in gallery, one realisation per season.
pub const DEFAULT_ITEMS: [PortfolioItem; 4] = [
    PortfolioItem {
        id: 1,
        title: "Spring Color Analysis",
        description_pl: "Kompleksowa analiza kolorystyczna dla typu Wiosna",
        description_en: "Complete color analysis for the Spring type",
        category: Season::Spring,
        image_url: "/images/akademia-soft-about-me.jpg",
        before_after_images: [
            "/images/akademia-soft-background.jpg",
            "/images/akademia-soft-about-me.jpg",
        ],
    },
    PortfolioItem {
        id: 2,
        title: "Summer Color Analysis",
        description_pl: "Profesjonalna analiza dla typu Lato",
        description_en: "Professional analysis for the Summer type",
        category: Season::Summer,
        image_url: "/images/akademia-soft-background.jpg",
        before_after_images: [
            "/images/akademia-soft-logo.jpg",
            "/images/akademia-soft-background.jpg",
        ],
    },
    PortfolioItem {
        id: 3,
        title: "Autumn Color Analysis",
        description_pl: "Szczegółowa analiza dla typu Jesień",
        description_en: "Detailed analysis for the Autumn type",
        category: Season::Autumn,
        image_url: "/images/akademia-soft-logo.jpg",
        before_after_images: [
            "/images/akademia-soft-about-me.jpg",
            "/images/akademia-soft-logo.jpg",
        ],
    },
    PortfolioItem {
        id: 4,
        title: "Winter Color Analysis",
        description_pl: "Kompleksowa analiza dla typu Zima",
        description_en: "Complete analysis for the Winter type",
        category: Season::Winter,
        image_url: "/images/akademia-soft-about-me.jpg",
        before_after_images: [
            "/images/akademia-soft-background.jpg",
            "/images/akademia-soft-about-me.jpg",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_covers_every_season() {
        for season in Season::ALL {
            assert!(DEFAULT_ITEMS.iter().any(|item| item.category == season));
        }
    }

    #[test]
    fn test_descriptions_follow_the_language() {
        let item = &DEFAULT_ITEMS[0];
        assert!(item.description(Language::Pl).contains("Wiosna"));
        assert!(item.description(Language::En).contains("Spring"));
    }

    #[test]
    fn test_titles_carry_season_tokens() {
        for item in &DEFAULT_ITEMS {
            let token = match item.category {
                Season::Spring => "Spring",
                Season::Summer => "Summer",
                Season::Autumn => "Autumn",
                Season::Winter => "Winter",
            };
            assert!(item.title.contains(token));
        }
    }
}
