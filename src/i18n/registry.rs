//! Language registry: Single source of truth for all supported languages.
//!
//! Uses a singleton with `OnceLock` for thread-safe initialization and
//! access. The supported set is closed: the active language is always a
//! member, never an arbitrary string.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// BCP 47 locale code (e.g., "pt-BR", "en-US")
    pub code: &'static str,

    /// English name of the language (e.g., "Portuguese (Brazil)")
    pub name: &'static str,

    /// Native name of the language (e.g., "Português (Brasil)")
    pub native_name: &'static str,

    /// Whether this is the built-in default locale (only one should be true)
    pub is_default: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,
}

/// Global language registry singleton.
///
/// Initialized once on first access and immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its locale code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get all languages (including disabled ones).
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the built-in default language configuration.
    ///
    /// The default is what the app falls back to when no valid persisted
    /// preference exists. There must be exactly one.
    ///
    /// # Panics
    /// Panics if zero or multiple default languages are configured (a
    /// registry configuration error).
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a locale code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// The supported locales. Brazilian Portuguese is the default; English is
/// the only other variant the app ships.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "pt-BR",
            name: "Portuguese (Brazil)",
            native_name: "Português (Brasil)",
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            code: "en-US",
            name: "English (US)",
            native_name: "English (US)",
            is_default: false,
            enabled: true,
        },
    ]
}
