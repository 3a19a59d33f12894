//! Catalog quality validation.
//!
//! Checks a catalog slice for structural defects: duplicate keys, empty
//! texts, locale gaps, and `{placeholder}` sets that disagree between
//! locales for the same key. Run from tests to keep the shipped catalog
//! complete; the runtime fallback still covers anything that slips by.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::i18n::{catalog::Entry, LanguageRegistry};

/// Validation report containing errors and warnings about a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Structural defects (duplicate keys, empty texts)
    pub errors: Vec<String>,

    /// Quality issues (locale gaps, placeholder mismatches)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for the translation catalog.
pub struct CatalogValidator;

// Placeholder pattern, cached for repeated validation runs
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Validate a catalog slice.
    ///
    /// Checks:
    /// - keys are unique (error)
    /// - no present text is empty (error)
    /// - every enabled locale has text for every key (warning: the
    ///   runtime degrades gracefully, but a gap ships the raw key)
    /// - `{placeholder}` sets agree across locales (warning)
    pub fn validate(entries: &[Entry]) -> ValidationReport {
        let mut report = ValidationReport::new();

        let mut seen = HashSet::new();
        for entry in entries {
            if !seen.insert(entry.key) {
                report
                    .errors
                    .push(format!("Duplicate catalog key: '{}'", entry.key));
            }
        }

        for entry in entries {
            for (code, text) in [("pt-BR", entry.pt_br), ("en-US", entry.en_us)] {
                match text {
                    Some(t) if t.is_empty() => {
                        report
                            .errors
                            .push(format!("Empty {} text for key '{}'", code, entry.key));
                    }
                    Some(_) => {}
                    None => {
                        if LanguageRegistry::get().is_enabled(code) {
                            report
                                .warnings
                                .push(format!("Key '{}' has no {} text", entry.key, code));
                        }
                    }
                }
            }

            // Placeholders must survive translation.
            if let (Some(pt), Some(en)) = (entry.pt_br, entry.en_us) {
                let pt_placeholders = Self::extract_placeholders(pt);
                let en_placeholders = Self::extract_placeholders(en);
                if pt_placeholders != en_placeholders {
                    report.warnings.push(format!(
                        "Placeholder mismatch for key '{}': pt-BR has {:?}, en-US has {:?}",
                        entry.key, pt_placeholders, en_placeholders
                    ));
                }
            }
        }

        report
    }

    /// Extract the `{placeholder}` names from a text, order-insensitive.
    fn extract_placeholders(text: &str) -> HashSet<String> {
        let regex = PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{([a-zA-Z][a-zA-Z0-9_]*)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
