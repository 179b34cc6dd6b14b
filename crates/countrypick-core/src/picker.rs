// crates/countrypick-core/src/picker.rs
//! # Country picker state
//!
//! [`CountryPicker`] owns the collaborators (catalog, history store, locale
//! ordering) and the cached section composition. The cache is tagged with
//! the version it was built at; every configuration replacement or history
//! mutation bumps the version, and the next read rebuilds.

use crate::collation::LatinOrdering;
use crate::config::PickerConfig;
use crate::error::Result;
use crate::model::{Country, CountrySelected, Section};
use crate::organizer::{organize, section_for_index_title};
use crate::recorder::record_selection;
use crate::search::{search, SearchResult};
use crate::text::fold_key;
use crate::traits::{CountryCatalog, HistoryStore, LocaleOrdering};
use std::collections::HashSet;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use tracing::{debug, warn};

pub const DEFAULT_LOCALE: &str = "en";

struct Composition {
    built_at: Option<u64>,
    sections: Arc<[Section]>,
}

/// Sections, search and selection history for one picker instance.
///
/// Reads that may rebuild the cache take `&mut self`. To share across
/// threads wrap it in a `RwLock` and hand readers
/// [`CountryPicker::snapshot`] instead of the live slice.
///
/// ```rust
/// use countrypick_core::{CountryPicker, EmbeddedCatalog, MemoryHistoryStore, PickerConfig, SectionKind};
///
/// let mut picker = CountryPicker::new(EmbeddedCatalog, MemoryHistoryStore::new())
///     .with_platform_region(Some("FR"));
/// assert_eq!(picker.sections()[0].kind, SectionKind::CurrentLocation);
///
/// let event = picker.select("de").unwrap().unwrap();
/// assert_eq!(event.name, "Germany");
/// assert_eq!(picker.sections()[0].kind, SectionKind::Recent);
/// ```
pub struct CountryPicker<C: CountryCatalog, H: HistoryStore> {
    catalog: C,
    history: H,
    ordering: Box<dyn LocaleOrdering + Send + Sync>,
    config: PickerConfig,
    locale: String,
    platform_region: Option<String>,
    custom_codes: Option<Vec<String>>,
    version: u64,
    cache: Composition,
    subscribers: Vec<Sender<CountrySelected>>,
}

impl<C: CountryCatalog, H: HistoryStore> CountryPicker<C, H> {
    pub fn new(catalog: C, history: H) -> Self {
        Self {
            catalog,
            history,
            ordering: Box::new(LatinOrdering::default()),
            config: PickerConfig::default(),
            locale: DEFAULT_LOCALE.to_owned(),
            platform_region: None,
            custom_codes: None,
            version: 0,
            cache: Composition {
                built_at: None,
                sections: Arc::from(Vec::new()),
            },
            subscribers: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: PickerConfig) -> Self {
        self.set_config(config);
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.set_locale(locale);
        self
    }

    pub fn with_ordering(mut self, ordering: impl LocaleOrdering + Send + Sync + 'static) -> Self {
        self.ordering = Box::new(ordering);
        self.invalidate();
        self
    }

    /// Region the platform reports for the user (e.g. from the system locale).
    pub fn with_platform_region(mut self, region: Option<&str>) -> Self {
        self.set_platform_region(region);
        self
    }

    /// Restrict the catalog to `codes` when the configuration has no
    /// allowed list of its own.
    pub fn with_custom_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_codes = Some(codes.into_iter().map(Into::into).collect());
        self.invalidate();
        self
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Replace the configuration. Cached sections become stale.
    pub fn set_config(&mut self, config: PickerConfig) {
        self.config = config;
        self.invalidate();
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
        self.invalidate();
    }

    pub fn set_platform_region(&mut self, region: Option<&str>) {
        self.platform_region = region.map(str::to_owned);
        self.invalidate();
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Current cache version. Bumped by every invalidation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// True if the cached sections were built at the current version.
    pub fn is_fresh(&self) -> bool {
        self.cache.built_at == Some(self.version)
    }

    /// Mark cached sections stale.
    pub fn invalidate(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    /// The organized sections, rebuilt first if stale.
    pub fn sections(&mut self) -> &[Section] {
        self.refresh();
        &self.cache.sections
    }

    /// A shared, immutable copy of the current sections.
    pub fn snapshot(&mut self) -> Arc<[Section]> {
        self.refresh();
        Arc::clone(&self.cache.sections)
    }

    /// Every row in display order (priority sections included).
    pub fn rows(&mut self) -> Vec<Country> {
        crate::model::flatten_sections(self.sections())
    }

    /// Index-bar titles in canonical order.
    pub fn index_titles(&self) -> &[String] {
        self.ordering.index_titles()
    }

    /// Section position an index-bar tap on `title_index` scrolls to.
    pub fn section_for_index_title(&mut self, title_index: usize) -> Option<usize> {
        self.refresh();
        section_for_index_title(&self.cache.sections, self.ordering.index_titles(), title_index)
    }

    /// Rank the organized rows against `query`.
    pub fn search(&mut self, query: &str) -> SearchResult {
        let rows = self.rows();
        search(query, &rows, &self.config)
    }

    /// Stored recent codes, or nothing when recents are disabled.
    pub fn recent_codes(&self) -> Vec<String> {
        if !self.config.recents_enabled() {
            return Vec::new();
        }
        self.history.get(&self.config.recent_countries_storage_key)
    }

    /// Receive a [`CountrySelected`] for every confirmed pick.
    pub fn subscribe(&mut self) -> Receiver<CountrySelected> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    /// Confirm a pick by code.
    ///
    /// Returns `Ok(None)` when `code` is not among the shown rows. Otherwise
    /// the history is updated (if recents are enabled), cached sections are
    /// invalidated and the event is sent to every subscriber.
    pub fn select(&mut self, code: &str) -> Result<Option<CountrySelected>> {
        let Some(country) = self.country_for_code(code) else {
            debug!(code = %code, "selection ignored; code not shown");
            return Ok(None);
        };

        if self.config.recents_enabled() {
            let key = self.config.recent_countries_storage_key.clone();
            let current = self.history.get(&key);
            let updated = record_selection(country.code(), &self.config, &current);
            if let Err(e) = self.history.set(&key, updated) {
                warn!(error = %e, key = %key, "failed to persist recent selection");
                return Err(e);
            }
            self.invalidate();
        }

        let event = CountrySelected::from(&country);
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        Ok(Some(event))
    }

    /// Shown country with exactly this code (ignoring case).
    pub fn country_for_code(&mut self, code: &str) -> Option<Country> {
        self.refresh();
        self.cache
            .sections
            .iter()
            .flat_map(|s| s.countries.iter())
            .find(|c| c.has_code(code))
            .cloned()
    }

    pub fn name_for(&mut self, code: &str) -> Option<String> {
        self.country_for_code(code).map(|c| c.name().to_owned())
    }

    pub fn dial_code_for(&mut self, code: &str) -> Option<String> {
        self.country_for_code(code).map(|c| c.dial_code().to_owned())
    }

    /// Shown countries whose code starts with `prefix`, case- and
    /// accent-insensitively, in display order without repeats.
    pub fn countries_with_code_prefix(&mut self, prefix: &str) -> Vec<Country> {
        let prefix = fold_key(prefix.trim());
        let mut seen = HashSet::new();
        self.rows()
            .into_iter()
            .filter(|c| fold_key(c.code()).starts_with(&prefix))
            .filter(|c| seen.insert(c.code().to_ascii_uppercase()))
            .collect()
    }

    fn refresh(&mut self) {
        if self.is_fresh() {
            return;
        }
        let sections = self.compose();
        debug!(
            version = self.version,
            sections = sections.len(),
            locale = %self.locale,
            "recomposed country sections"
        );
        self.cache = Composition {
            built_at: Some(self.version),
            sections: sections.into(),
        };
    }

    fn compose(&self) -> Vec<Section> {
        let mut all = self.catalog.countries(&self.locale);
        if self.config.allowed_country_codes.is_none() {
            if let Some(custom) = &self.custom_codes {
                all.retain(|c| custom.iter().any(|code| c.has_code(code)));
            }
        }
        let recents = self.recent_codes();
        organize(
            &self.config,
            &all,
            &recents,
            self.platform_region.as_deref(),
            self.ordering.as_ref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EmbeddedCatalog;
    use crate::error::PickerError;
    use crate::history::MemoryHistoryStore;
    use crate::model::SectionKind;

    struct FailingStore;

    impl HistoryStore for FailingStore {
        fn get(&self, _key: &str) -> Vec<String> {
            Vec::new()
        }
        fn set(&mut self, key: &str, _codes: Vec<String>) -> Result<()> {
            Err(PickerError::NotFound(key.to_owned()))
        }
    }

    fn picker() -> CountryPicker<EmbeddedCatalog, MemoryHistoryStore> {
        CountryPicker::new(EmbeddedCatalog, MemoryHistoryStore::new())
    }

    #[test]
    fn cache_is_lazy_and_versioned() {
        let mut p = picker();
        assert!(!p.is_fresh());
        let first = p.snapshot();
        assert!(p.is_fresh());
        let second = p.snapshot();
        assert!(Arc::ptr_eq(&first, &second));

        p.set_config(PickerConfig::default());
        assert!(!p.is_fresh());
        let third = p.snapshot();
        assert!(!Arc::ptr_eq(&first, &third));
        assert_eq!(&*first, &*third);
    }

    #[test]
    fn select_updates_history_and_invalidates() {
        let mut p = picker();
        p.sections();
        let v = p.version();
        p.select("fr").unwrap();
        assert!(p.version() > v);
        assert_eq!(p.recent_codes(), vec!["FR".to_string()]);
        assert_eq!(p.sections()[0].kind, SectionKind::Recent);
    }

    #[test]
    fn select_without_recents_keeps_cache() {
        let mut p = picker().with_config(PickerConfig {
            shows_recent_countries: false,
            ..PickerConfig::default()
        });
        p.sections();
        let v = p.version();
        assert!(p.select("FR").unwrap().is_some());
        assert_eq!(p.version(), v);
        assert!(p.history().get(&p.config().recent_countries_storage_key).is_empty());
    }

    #[test]
    fn subscribers_receive_one_event_per_pick() {
        let mut p = picker();
        let rx = p.subscribe();
        let dropped = p.subscribe();
        drop(dropped);

        p.select("JP").unwrap();
        assert!(p.select("XX").unwrap().is_none());
        let event = rx.try_recv().unwrap();
        assert_eq!(
            event,
            CountrySelected {
                name: "Japan".into(),
                code: "JP".into(),
                dial_code: "+81".into(),
            }
        );
        assert!(rx.try_recv().is_err());
        assert_eq!(p.subscribers.len(), 1);
    }

    #[test]
    fn store_failure_is_reported_and_no_event_sent() {
        let mut p = CountryPicker::new(EmbeddedCatalog, FailingStore);
        let rx = p.subscribe();
        assert!(p.select("FR").is_err());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn hidden_countries_cannot_be_selected() {
        let mut p = picker().with_config(PickerConfig::default().with_allowed(["FR", "DE"]));
        assert!(p.select("US").unwrap().is_none());
        assert!(p.recent_codes().is_empty());
    }

    #[test]
    fn custom_codes_apply_only_without_allowed_list() {
        let mut p = picker().with_custom_codes(["FR", "DE", "IT"]);
        let codes: HashSet<String> = p.rows().iter().map(|c| c.code().to_owned()).collect();
        assert_eq!(codes.len(), 3);

        p.set_config(PickerConfig::default().with_allowed(["ES"]));
        let codes: Vec<String> = p.rows().iter().map(|c| c.code().to_owned()).collect();
        assert_eq!(codes, vec!["ES".to_string()]);
    }

    #[test]
    fn code_lookups() {
        let mut p = picker();
        assert_eq!(p.name_for("ch").as_deref(), Some("Switzerland"));
        assert_eq!(p.dial_code_for("CH").as_deref(), Some("+41"));
        assert_eq!(p.dial_code_for("BV").as_deref(), Some(crate::model::UNKNOWN_DIAL_CODE));
        assert!(p.name_for("ZZ").is_none());

        let prefixed: Vec<String> = p
            .countries_with_code_prefix("g")
            .iter()
            .map(|c| c.code().to_owned())
            .collect();
        assert!(prefixed.contains(&"GB".to_string()));
        assert!(prefixed.iter().all(|c| c.starts_with('G')));
    }
}
