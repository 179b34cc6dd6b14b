// crates/countrypick-core/src/collation.rs
//! # Collation
//!
//! Groups countries into alphabetic buckets for an index-jump list.
//!
//! Every bucket of the ordering is emitted, empty ones included, so an index
//! bar can address a fixed set of anchors. Within a bucket countries are
//! sorted by name under the ordering, ties broken by code.

use crate::model::{Country, Section, SectionKind};
use crate::text::{compare_codes, compare_folded, fold_key};
use crate::traits::LocaleOrdering;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Title of the trailing bucket for names that start with no letter of the
/// alphabet.
pub const OTHER_BUCKET: &str = "#";

/// Latin-script ordering on transliterated names: `A`..`Z` then `#`.
///
/// Names are folded with [`fold_key`] before bucketing, so `Åland Islands`
/// files under `A` and `Ελλάδα` under `E`.
#[derive(Clone, Debug)]
pub struct LatinOrdering {
    letters: Vec<char>,
    titles: Vec<String>,
}

impl Default for LatinOrdering {
    fn default() -> Self {
        Self::with_alphabet('A'..='Z')
    }
}

impl LatinOrdering {
    /// Ordering over a custom alphabet. Letters are matched case-insensitively
    /// against the folded name; anything else lands in [`OTHER_BUCKET`].
    pub fn with_alphabet(letters: impl IntoIterator<Item = char>) -> Self {
        let mut seen = HashSet::new();
        let letters: Vec<char> = letters
            .into_iter()
            .map(|c| c.to_ascii_lowercase())
            .filter(|c| seen.insert(*c))
            .collect();
        let mut titles: Vec<String> = letters
            .iter()
            .map(|c| c.to_ascii_uppercase().to_string())
            .collect();
        titles.push(OTHER_BUCKET.to_owned());
        Self { letters, titles }
    }

    fn other_index(&self) -> usize {
        self.titles.len() - 1
    }
}

impl LocaleOrdering for LatinOrdering {
    fn index_titles(&self) -> &[String] {
        &self.titles
    }

    fn bucket_index(&self, name: &str) -> usize {
        let folded = fold_key(name);
        // First collation-significant character; punctuation is skipped.
        let first = folded.chars().find(|c| c.is_alphanumeric());
        first
            .and_then(|c| self.letters.iter().position(|l| *l == c))
            .unwrap_or_else(|| self.other_index())
    }

    fn compare_names(&self, a: &str, b: &str) -> Ordering {
        compare_folded(a, b)
    }
}

/// Sort `countries` into the ordering's buckets.
///
/// Duplicate codes are collapsed to their first occurrence.
///
/// ```rust
/// use countrypick_core::collation::{collate, LatinOrdering};
/// use countrypick_core::Country;
///
/// let countries = vec![
///     Country::new("Austria", "AT", Some("+43")),
///     Country::new("Åland Islands", "AX", Some("+358")),
///     Country::new("Belgium", "BE", Some("+32")),
/// ];
/// let sections = collate(&countries, &LatinOrdering::default());
/// assert_eq!(sections.len(), 27);
/// let a: Vec<&str> = sections[0].countries.iter().map(|c| c.code()).collect();
/// assert_eq!(a, ["AX", "AT"]);
/// ```
pub fn collate(countries: &[Country], ordering: &dyn LocaleOrdering) -> Vec<Section> {
    let titles = ordering.index_titles();
    let mut buckets: Vec<Vec<Country>> = vec![Vec::new(); titles.len()];
    let mut seen = HashSet::new();

    for country in countries {
        if !seen.insert(country.code().to_ascii_uppercase()) {
            continue;
        }
        let idx = ordering
            .bucket_index(country.name())
            .min(titles.len().saturating_sub(1));
        if let Some(bucket) = buckets.get_mut(idx) {
            bucket.push(country.clone());
        }
    }

    titles
        .iter()
        .zip(buckets)
        .map(|(title, mut members)| {
            members.sort_by(|a, b| {
                ordering
                    .compare_names(a.name(), b.name())
                    .then_with(|| compare_codes(a.code(), b.code()))
            });
            Section::new(SectionKind::Alphabetic(title.clone()), members)
        })
        .collect()
}
