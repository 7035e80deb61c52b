// studio-backend/src/service/content.rs

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::domain::portfolio::DEFAULT_ITEMS;
use crate::domain::{FormKind, Season, ServiceKind, SiteRoute};
use crate::i18n::{Language, Translator, INDEXED_SCAN_LIMIT};

/// Seconds a confirmation page counts down before sending the visitor home.
pub const REDIRECT_AFTER_SECS: u64 = 7;

// =============================================================================
// View models
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct MetaBlock {
    pub site_name: String,
    pub tagline: String,
    pub language: Language,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroBlock {
    pub title: String,
    pub subtitle: String,
    pub cta: String,
    pub secondary_cta: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceOfferView {
    pub slug: ServiceKind,
    pub title: String,
    pub description: String,
    pub price: String,
    pub features: Vec<String>,
    pub popular: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServicesBlock {
    pub title: String,
    pub subtitle: String,
    pub popular_label: String,
    pub offers: Vec<ServiceOfferView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioItemView {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: Season,
    pub category_label: String,
    pub image_url: String,
    pub before_after_images: [String; 2],
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioBlock {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<PortfolioItemView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestimonialsBlock {
    pub title: String,
    pub subtitle: String,
    pub reviews: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FaqBlock {
    pub title: String,
    pub subtitle: String,
    pub cta: String,
    pub cta_button: String,
    pub entries: Vec<FaqEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub meta: MetaBlock,
    pub hero: HeroBlock,
    pub services: ServicesBlock,
    pub portfolio: PortfolioBlock,
    pub testimonials: TestimonialsBlock,
    pub faq: FaqBlock,
    /// Section id handed off by a navbar link used away from home.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_to: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormPageView {
    pub title: String,
    pub subtitle: String,
    /// Field labels, placeholders and button captions for the form.
    pub labels: Value,
    /// Booking only: offer pre-selected through the handoff or query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preselected_service: Option<ServiceKind>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfirmationView {
    pub title: String,
    pub message: String,
    /// Countdown notice with the seconds already interpolated.
    pub redirect_notice: String,
    pub redirect_to: String,
    pub redirect_after_secs: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentSection {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentView {
    pub last_updated: String,
    pub date: String,
    pub sections: Vec<DocumentSection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotFoundView {
    pub title: String,
    pub message: String,
    pub back_home: String,
    pub home_route: String,
}

// =============================================================================
// Content service
// =============================================================================

/// Assembles localized view models on top of the [`Translator`].
///
/// Everything here is a pure read of the embedded bundles and the built-in
/// gallery; no state survives a request.
pub struct ContentService {
    translator: Arc<Translator>,
}

impl ContentService {
    pub fn new(translator: Arc<Translator>) -> Self {
        Self { translator }
    }

    fn resolve(&self, key: &str, language: Language) -> String {
        self.translator.resolve(key, language)
    }

    pub fn home(&self, language: Language, scroll_to: Option<String>) -> HomeView {
        HomeView {
            meta: MetaBlock {
                site_name: self.resolve("meta.siteName", language),
                tagline: self.resolve("meta.tagline", language),
                language,
            },
            hero: HeroBlock {
                title: self.resolve("hero.title", language),
                subtitle: self.resolve("hero.subtitle", language),
                cta: self.resolve("hero.cta", language),
                secondary_cta: self.resolve("hero.secondaryCta", language),
            },
            services: self.services(language),
            portfolio: self.portfolio(language),
            testimonials: self.testimonials(language),
            faq: self.faq(language),
            scroll_to,
        }
    }

    pub fn services(&self, language: Language) -> ServicesBlock {
        let offers = ServiceKind::ALL
            .iter()
            .map(|kind| {
                let prefix = kind.locale_prefix();
                ServiceOfferView {
                    slug: *kind,
                    title: self.resolve(&format!("{prefix}.title"), language),
                    description: self.resolve(&format!("{prefix}.description"), language),
                    price: self.resolve(&format!("{prefix}.price"), language),
                    features: self
                        .translator
                        .indexed(&format!("{prefix}.features.feature"), language),
                    popular: kind.is_popular(),
                }
            })
            .collect();
        ServicesBlock {
            title: self.resolve("services.title", language),
            subtitle: self.resolve("services.subtitle", language),
            popular_label: self.resolve("services.popular", language),
            offers,
        }
    }

    pub fn portfolio(&self, language: Language) -> PortfolioBlock {
        let items = DEFAULT_ITEMS
            .iter()
            .map(|item| PortfolioItemView {
                id: item.id,
                title: self.translator.localize_seasons(item.title, language),
                description: item.description(language).to_string(),
                category: item.category,
                category_label: self.resolve(&item.category.label_key(), language),
                image_url: item.image_url.to_string(),
                before_after_images: [
                    item.before_after_images[0].to_string(),
                    item.before_after_images[1].to_string(),
                ],
            })
            .collect();
        PortfolioBlock {
            title: self.resolve("portfolio.title", language),
            subtitle: self.resolve("portfolio.subtitle", language),
            items,
        }
    }

    pub fn testimonials(&self, language: Language) -> TestimonialsBlock {
        TestimonialsBlock {
            title: self.resolve("testimonials.title", language),
            subtitle: self.resolve("testimonials.subtitle", language),
            reviews: self
                .translator
                .table("testimonials.reviews", language)
                .cloned()
                .unwrap_or_else(|| Value::Array(Vec::new())),
        }
    }

    /// FAQ entries, paired by index. The scan halts at the first missing
    /// question.
    pub fn faq(&self, language: Language) -> FaqBlock {
        let entries = self
            .translator
            .indexed_entries("faq.questions.q", language)
            .map(|(index, question)| FaqEntry {
                question,
                answer: self.resolve(&format!("faq.answers.a{index}"), language),
            })
            .collect();
        FaqBlock {
            title: self.resolve("faq.title", language),
            subtitle: self.resolve("faq.subtitle", language),
            cta: self.resolve("faq.cta", language),
            cta_button: self.resolve("faq.ctaButton", language),
            entries,
        }
    }

    pub fn booking(&self, language: Language, preselected: Option<ServiceKind>) -> FormPageView {
        FormPageView {
            title: self.resolve("booking.title", language),
            subtitle: self.resolve("booking.subtitle", language),
            labels: self.form_labels("forms.booking", language),
            preselected_service: preselected,
        }
    }

    pub fn contact(&self, language: Language) -> FormPageView {
        FormPageView {
            title: self.resolve("contact.title", language),
            subtitle: self.resolve("contact.subtitle", language),
            labels: self.form_labels("forms.contact", language),
            preselected_service: None,
        }
    }

    fn form_labels(&self, prefix: &str, language: Language) -> Value {
        self.translator
            .table(prefix, language)
            .cloned()
            .unwrap_or_else(|| Value::Object(Default::default()))
    }

    pub fn confirmation(&self, form: FormKind, language: Language) -> ConfirmationView {
        let prefix = match form {
            FormKind::Booking => "bookingConfirmation",
            FormKind::Contact => "contactConfirmation",
        };
        ConfirmationView {
            title: self.resolve(&format!("{prefix}.title"), language),
            message: self.resolve(&format!("{prefix}.message"), language),
            redirect_notice: self.translator.resolve_count(
                &format!("{prefix}.redirect"),
                language,
                REDIRECT_AFTER_SECS,
            ),
            redirect_to: SiteRoute::Home.path().to_string(),
            redirect_after_secs: REDIRECT_AFTER_SECS,
        }
    }

    /// Numbered sections of a legal document. Section, paragraph and bullet
    /// scans all terminate at the first missing index.
    fn document(&self, prefix: &str, language: Language) -> DocumentView {
        let sections = (1..=INDEXED_SCAN_LIMIT)
            .map_while(|index| {
                let section = format!("{prefix}.sections.section{index}");
                let title_key = format!("{section}.title");
                if !self.translator.exists(&title_key, language) {
                    return None;
                }
                Some(DocumentSection {
                    title: self.resolve(&title_key, language),
                    paragraphs: self
                        .translator
                        .indexed(&format!("{section}.content"), language),
                    items: self.section_items(&section, language),
                })
            })
            .collect();
        DocumentView {
            last_updated: self.resolve(&format!("{prefix}.lastUpdated"), language),
            date: self.resolve(&format!("{prefix}.date"), language),
            sections,
        }
    }

    /// Bullet items appear as `item{n}` directly under the section in one
    /// document and under an `items` subtree in the other.
    fn section_items(&self, section: &str, language: Language) -> Vec<String> {
        let direct = self.translator.indexed(&format!("{section}.item"), language);
        if !direct.is_empty() {
            return direct;
        }
        self.translator
            .indexed(&format!("{section}.items.item"), language)
    }

    pub fn privacy_policy(&self, language: Language) -> DocumentView {
        self.document("privacyPolicy", language)
    }

    pub fn terms(&self, language: Language) -> DocumentView {
        self.document("termsOfService", language)
    }

    pub fn not_found(&self, language: Language) -> NotFoundView {
        NotFoundView {
            title: self.resolve("notFound.title", language),
            message: self.resolve("notFound.message", language),
            back_home: self.resolve("notFound.backHome", language),
            home_route: SiteRoute::Home.path().to_string(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
