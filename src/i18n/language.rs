//! Language type: validated language representation.
//!
//! A `Language` can only be constructed for codes the registry supports,
//! so the active language is always a member of the closed supported set.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// BCP 47 locale code (e.g., "pt-BR", "en-US")
    code: &'static str,
}

impl Language {
    /// Brazilian Portuguese, the built-in default.
    pub const PORTUGUESE_BR: Language = Language { code: "pt-BR" };

    /// US English.
    pub const ENGLISH_US: Language = Language { code: "en-US" };

    /// Create a Language from a locale code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The built-in default language.
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// The BCP 47 locale code as a static string.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Full configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not in the registry, which cannot happen for
    /// a properly constructed Language.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Whether this is the built-in default.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portuguese_constant() {
        let pt = Language::PORTUGUESE_BR;
        assert_eq!(pt.code(), "pt-BR");
        assert_eq!(pt.native_name(), "Português (Brasil)");
        assert!(pt.is_default());
    }

    #[test]
    fn test_english_constant() {
        let en = Language::ENGLISH_US;
        assert_eq!(en.code(), "en-US");
        assert_eq!(en.name(), "English (US)");
        assert!(!en.is_default());
    }

    #[test]
    fn test_from_code_valid() {
        let language = Language::from_code("en-US").expect("Should succeed");
        assert_eq!(language, Language::ENGLISH_US);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("es-ES");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_from_code_is_exact() {
        // Neither bare language nor underscore variants are supported codes.
        assert!(Language::from_code("pt").is_err());
        assert!(Language::from_code("pt_BR").is_err());
    }

    #[test]
    fn test_default_language() {
        assert_eq!(Language::default_language(), Language::PORTUGUESE_BR);
    }

    #[test]
    fn test_language_equality() {
        let lang = Language::from_code("pt-BR").unwrap();
        assert_eq!(lang, Language::PORTUGUESE_BR);
        assert_ne!(lang, Language::ENGLISH_US);
    }

    #[test]
    fn test_language_copy() {
        let lang1 = Language::ENGLISH_US;
        let lang2 = lang1; // Copy
        assert_eq!(lang1, lang2); // Both still valid
    }
}
