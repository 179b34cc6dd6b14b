// crates/countrypick-core/src/traits.rs
use crate::error::Result;
use crate::model::Country;
use crate::text::{equals_folded, fold_key};
use std::cmp::Ordering;

/// Locale data provider: which regions exist, what they are called and how
/// to dial them.
///
/// Implementations must be deterministic per `(code, locale)`; the organizer
/// caches what it derives from them.
pub trait CountryCatalog {
    /// All region codes known for `locale`, in catalog order.
    fn list_codes(&self, locale: &str) -> Vec<String>;

    /// Localized display name, or `None` if the region has no name in `locale`.
    fn display_name(&self, code: &str, locale: &str) -> Option<String>;

    /// International calling code (e.g. "+49"), if known.
    fn dial_code(&self, code: &str) -> Option<String>;

    /// Resolve one code into a [`Country`]. Codes without a display name are
    /// not countries for this locale.
    fn country(&self, code: &str, locale: &str) -> Option<Country> {
        let name = self.display_name(code, locale)?;
        let dial = self.dial_code(code);
        Some(Country::new(name, code, dial.as_deref()))
    }

    /// Resolve every code from [`CountryCatalog::list_codes`].
    fn countries(&self, locale: &str) -> Vec<Country> {
        self.list_codes(locale)
            .iter()
            .filter_map(|code| self.country(code, locale))
            .collect()
    }
}

impl<T: CountryCatalog + ?Sized> CountryCatalog for Box<T> {
    fn list_codes(&self, locale: &str) -> Vec<String> {
        (**self).list_codes(locale)
    }

    fn display_name(&self, code: &str, locale: &str) -> Option<String> {
        (**self).display_name(code, locale)
    }

    fn dial_code(&self, code: &str) -> Option<String> {
        (**self).dial_code(code)
    }
}

/// Key-value store of ordered code lists (the recent-selection history).
///
/// Missing keys read as an empty list. Writes are last-write-wins.
pub trait HistoryStore {
    fn get(&self, key: &str) -> Vec<String>;
    fn set(&mut self, key: &str, codes: Vec<String>) -> Result<()>;
}

impl<T: HistoryStore + ?Sized> HistoryStore for Box<T> {
    fn get(&self, key: &str) -> Vec<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, codes: Vec<String>) -> Result<()> {
        (**self).set(key, codes)
    }
}

/// Locale-driven collation: bucket keys for names and the canonical order of
/// buckets, as an index-jump list needs them.
pub trait LocaleOrdering {
    /// Bucket titles in canonical index order. The last title is the
    /// trailing "other" bucket.
    fn index_titles(&self) -> &[String];

    /// Index into [`LocaleOrdering::index_titles`] for a display name.
    fn bucket_index(&self, name: &str) -> usize;

    /// Locale-aware comparison of two display names.
    fn compare_names(&self, a: &str, b: &str) -> Ordering;
}

/// Name-based matching helpers for types that expose a display name.
///
/// Comparisons are accent-insensitive and case-insensitive, based on
/// [`fold_key`].
///
/// # Examples
/// ```rust
/// use countrypick_core::traits::NameMatch;
/// use countrypick_core::Country;
///
/// let c = Country::new("Curaçao", "CW", Some("+599"));
/// assert!(c.is_named("curacao"));
/// assert!(c.name_contains("RAC"));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        equals_folded(self.name_str(), q.trim())
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q.trim()))
    }
}

impl NameMatch for Country {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}
