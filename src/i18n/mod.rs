//! Internationalization (i18n) module for multi-language support.
//!
//! This module provides a centralized, extensible architecture for the
//! app's display languages. All language-related logic, the localized
//! string catalog, and translation infrastructure is contained here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language type validated against the registry
//! - `catalog`: Static key -> locale -> text table (data, not logic)
//! - `store`: The translation store pages resolve text through
//! - `validator`: Catalog completeness and quality validation
//! - `metrics`: Lookup observability and metrics
//!
//! # Example
//!
//! ```rust,ignore
//! use greengo_client::i18n::{Language, TranslationStore};
//!
//! let store = TranslationStore::init(storage);
//! let title = store.translate("profile.title");
//! store.set_active_language(Language::ENGLISH_US);
//! ```

mod language;
mod metrics;
mod registry;
mod store;
mod validator;

pub mod catalog;

pub use language::Language;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use store::{ObserverId, TranslationStore};
pub use validator::{CatalogValidator, ValidationReport};
