// studio-backend/src/config/app.rs

use std::env;

use crate::i18n::Language;

#[derive(Clone, Debug)]
pub struct SecurityConfig {
    pub cookie_secure: bool,
}

/// Mail-relay endpoint settings.
#[derive(Clone, Debug)]
pub struct RelayConfig {
    pub base_url: String,
    /// Upper bound for one delivery attempt, connection included.
    pub timeout_secs: u64,
    /// Log submissions instead of delivering them.
    pub development_mode: bool,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    /// Absolute origin used in the sitemap and other outward-facing links.
    pub public_base_url: String,
    pub default_language: Language,
    pub relay: RelayConfig,
    pub security: SecurityConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let is_production = environment == "production";
        let is_development = environment == "development";

        Ok(Self {
            environment,
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .map_err(|_| "Invalid PORT value")?,
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3001".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            public_base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "https://softacademy.com.pl".to_string()),
            default_language: match env::var("DEFAULT_LANGUAGE") {
                Ok(code) => {
                    Language::from_code(&code).ok_or("Invalid DEFAULT_LANGUAGE value")?
                }
                Err(_) => Language::default(),
            },
            relay: RelayConfig {
                base_url: env::var("FORM_RELAY_BASE_URL")
                    .map_err(|_| "FORM_RELAY_BASE_URL must be set")?,
                timeout_secs: env::var("FORM_RELAY_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .map_err(|_| "Invalid FORM_RELAY_TIMEOUT_SECS value")?,
                development_mode: env::var("RELAY_DEVELOPMENT_MODE")
                    .map(|value| value == "true" || value == "1")
                    .unwrap_or(is_development),
            },
            security: SecurityConfig {
                cookie_secure: is_production,
            },
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    #[allow(dead_code)]
    pub fn is_test(&self) -> bool {
        self.environment == "test"
    }

    #[allow(dead_code)]
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Fixed settings for tests: no environment reads, relay pointed at a
    /// placeholder origin that nothing should ever dial.
    pub fn for_testing() -> Self {
        Self {
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 5000,
            cors_allowed_origins: vec!["http://localhost:3001".to_string()],
            public_base_url: "https://softacademy.com.pl".to_string(),
            default_language: Language::Pl,
            relay: RelayConfig {
                base_url: "http://relay.invalid".to_string(),
                timeout_secs: 1,
                development_mode: false,
            },
            security: SecurityConfig {
                cookie_secure: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_testing_uses_the_test_environment() {
        let config = AppConfig::for_testing();
        assert!(config.is_test());
        assert!(!config.is_development());
        assert!(!config.is_production());
        assert!(!config.security.cookie_secure);
    }

    #[test]
    fn test_for_testing_never_points_at_a_real_relay() {
        let config = AppConfig::for_testing();
        assert!(config.relay.base_url.ends_with(".invalid"));
        assert_eq!(config.default_language, Language::Pl);
    }
}
