//! The translation store: active-language state, persistence, and key
//! resolution.
//!
//! The store is an explicitly constructed object rather than a process
//! global, so tests can run isolated instances against their own storage
//! and catalog. Pages resolve copy through [`TranslationStore::translate`]
//! on every render; a language switch notifies registered observers so
//! consumers re-render.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, RwLock};
use tracing::{debug, warn};

use crate::i18n::{catalog, Language, TranslationMetrics};
use crate::storage::{keys, Storage};

/// Handle returned by [`TranslationStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverId(u64);

type Observer = Box<dyn Fn(Language) + Send + Sync>;
type LocaleSink = Box<dyn Fn(&str) + Send + Sync>;

pub struct TranslationStore {
    active: RwLock<Language>,
    entries: &'static [catalog::Entry],
    storage: Storage,
    observers: Mutex<Vec<(ObserverId, Observer)>>,
    next_observer: AtomicU64,
    /// Mirrors the active locale code into the embedding document/root
    /// attribute (accessibility and rendering tooling read it).
    locale_sink: Mutex<Option<LocaleSink>>,
}

impl TranslationStore {
    /// Build a store over the application catalog, restoring the
    /// persisted language preference when one is present and valid.
    pub fn init(storage: Storage) -> Self {
        Self::with_catalog(storage, catalog::CATALOG)
    }

    /// Build a store over an arbitrary catalog slice (tests).
    pub fn with_catalog(storage: Storage, entries: &'static [catalog::Entry]) -> Self {
        let active = match storage.get(keys::LANGUAGE) {
            Some(code) => match Language::from_code(&code) {
                Ok(language) => language,
                Err(_) => {
                    warn!(
                        "Ignoring unsupported persisted language '{}', using default",
                        code
                    );
                    Language::default_language()
                }
            },
            None => Language::default_language(),
        };

        Self {
            active: RwLock::new(active),
            entries,
            storage,
            observers: Mutex::new(Vec::new()),
            next_observer: AtomicU64::new(0),
            locale_sink: Mutex::new(None),
        }
    }

    /// The currently active language. Never fails.
    pub fn active_language(&self) -> Language {
        *self.active.read().unwrap()
    }

    /// Switch the active language.
    ///
    /// Persists the new code before returning, pushes it through the
    /// document-locale sink, and notifies observers. Selecting the
    /// already-active language is a no-op.
    pub fn set_active_language(&self, language: Language) {
        {
            let mut active = self.active.write().unwrap();
            if *active == language {
                return;
            }
            debug!(
                "set_active_language: {} -> {}",
                active.code(),
                language.code()
            );
            *active = language;
        }

        // In-memory state stays authoritative if the disk write fails;
        // the preference just won't survive a restart.
        if let Err(e) = self.storage.set(keys::LANGUAGE, language.code()) {
            warn!("Failed to persist language preference: {:#}", e);
        }

        if let Some(sink) = self.locale_sink.lock().unwrap().as_ref() {
            sink(language.code());
        }

        let observers = self.observers.lock().unwrap();
        for (_, observer) in observers.iter() {
            observer(language);
        }
    }

    /// Resolve `key` under the active language.
    ///
    /// An unknown key, or a key with no text for the active locale,
    /// resolves to the key itself: the raw key on screen is a cosmetic
    /// defect, a crash or blank label is not. Never fails.
    pub fn translate(&self, key: &str) -> String {
        let language = self.active_language();

        if let Some(text) = catalog::text_for(self.entries, key, language) {
            TranslationMetrics::global().record_hit();
            return text.to_string();
        }

        if catalog::contains(self.entries, key) {
            TranslationMetrics::global().record_locale_gap();
            warn!("Translation key '{}' has no {} text", key, language.code());
        } else {
            TranslationMetrics::global().record_unknown_key();
            warn!("Translation key not found: {}", key);
        }
        key.to_string()
    }

    /// Register an observer called with the new language after each
    /// switch.
    pub fn subscribe(&self, observer: impl Fn(Language) + Send + Sync + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer.fetch_add(1, Ordering::Relaxed));
        self.observers
            .lock()
            .unwrap()
            .push((id, Box::new(observer)));
        id
    }

    /// Remove a previously registered observer. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: ObserverId) {
        self.observers.lock().unwrap().retain(|(oid, _)| *oid != id);
    }

    /// Install the document-locale sink and apply it immediately so the
    /// document attribute agrees with the store from the start.
    pub fn set_document_locale_sink(&self, sink: impl Fn(&str) + Send + Sync + 'static) {
        sink(self.active_language().code());
        *self.locale_sink.lock().unwrap() = Some(Box::new(sink));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::catalog::Entry;
    use serial_test::serial;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;
    use tempfile::TempDir;

    static TEST_CATALOG: &[Entry] = &[
        Entry {
            key: "test.greeting",
            pt_br: Some("Olá"),
            en_us: Some("Hello"),
        },
        Entry {
            key: "test.onlyPortuguese",
            pt_br: Some("Somente em português"),
            en_us: None,
        },
    ];

    fn storage_in(dir: &TempDir) -> Storage {
        Storage::open(dir.path().join("store.json")).expect("open storage")
    }

    #[test]
    fn test_defaults_to_portuguese() {
        let dir = TempDir::new().expect("tempdir");
        let store = TranslationStore::with_catalog(storage_in(&dir), TEST_CATALOG);
        assert_eq!(store.active_language(), Language::PORTUGUESE_BR);
    }

    #[test]
    fn test_restores_persisted_language() {
        let dir = TempDir::new().expect("tempdir");
        let storage = storage_in(&dir);
        storage.set(keys::LANGUAGE, "en-US").expect("seed storage");

        let store = TranslationStore::with_catalog(storage, TEST_CATALOG);
        assert_eq!(store.active_language(), Language::ENGLISH_US);
    }

    #[test]
    fn test_invalid_persisted_language_falls_back() {
        let dir = TempDir::new().expect("tempdir");
        let storage = storage_in(&dir);
        storage.set(keys::LANGUAGE, "xx-XX").expect("seed storage");

        let store = TranslationStore::with_catalog(storage, TEST_CATALOG);
        assert_eq!(store.active_language(), Language::PORTUGUESE_BR);
    }

    #[test]
    fn test_set_persists_synchronously() {
        let dir = TempDir::new().expect("tempdir");
        let storage = storage_in(&dir);
        let store = TranslationStore::with_catalog(storage.clone(), TEST_CATALOG);

        store.set_active_language(Language::ENGLISH_US);
        assert_eq!(storage.get(keys::LANGUAGE).as_deref(), Some("en-US"));
    }

    // Lookup tests share the global metrics counters with the metrics
    // module's tests, so they run serialized.
    #[test]
    #[serial]
    fn test_translate_resolves_active_language() {
        let dir = TempDir::new().expect("tempdir");
        let store = TranslationStore::with_catalog(storage_in(&dir), TEST_CATALOG);

        assert_eq!(store.translate("test.greeting"), "Olá");
        store.set_active_language(Language::ENGLISH_US);
        assert_eq!(store.translate("test.greeting"), "Hello");
    }

    #[test]
    #[serial]
    fn test_translate_unknown_key_returns_key() {
        let dir = TempDir::new().expect("tempdir");
        let store = TranslationStore::with_catalog(storage_in(&dir), TEST_CATALOG);
        assert_eq!(store.translate("test.missing"), "test.missing");
    }

    #[test]
    #[serial]
    fn test_translate_locale_gap_returns_key() {
        let dir = TempDir::new().expect("tempdir");
        let store = TranslationStore::with_catalog(storage_in(&dir), TEST_CATALOG);

        store.set_active_language(Language::ENGLISH_US);
        // No inter-language fallback: the key itself comes back.
        assert_eq!(store.translate("test.onlyPortuguese"), "test.onlyPortuguese");
    }

    #[test]
    fn test_observers_notified_on_switch() {
        let dir = TempDir::new().expect("tempdir");
        let store = TranslationStore::with_catalog(storage_in(&dir), TEST_CATALOG);

        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        store.subscribe(move |language| seen_clone.lock().unwrap().push(language));

        store.set_active_language(Language::ENGLISH_US);
        store.set_active_language(Language::PORTUGUESE_BR);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![Language::ENGLISH_US, Language::PORTUGUESE_BR]
        );
    }

    #[test]
    fn test_setting_same_language_is_noop() {
        let dir = TempDir::new().expect("tempdir");
        let store = TranslationStore::with_catalog(storage_in(&dir), TEST_CATALOG);

        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        store.subscribe(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        store.set_active_language(Language::PORTUGUESE_BR);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let dir = TempDir::new().expect("tempdir");
        let store = TranslationStore::with_catalog(storage_in(&dir), TEST_CATALOG);

        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        let id = store.subscribe(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        store.unsubscribe(id);
        store.set_active_language(Language::ENGLISH_US);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_document_locale_sink_applied_immediately_and_on_switch() {
        let dir = TempDir::new().expect("tempdir");
        let store = TranslationStore::with_catalog(storage_in(&dir), TEST_CATALOG);

        let codes = Arc::new(Mutex::new(Vec::new()));
        let codes_clone = Arc::clone(&codes);
        store.set_document_locale_sink(move |code| {
            codes_clone.lock().unwrap().push(code.to_string());
        });

        store.set_active_language(Language::ENGLISH_US);
        assert_eq!(*codes.lock().unwrap(), vec!["pt-BR", "en-US"]);
    }
}
