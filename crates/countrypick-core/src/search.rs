// crates/countrypick-core/src/search.rs
//! # Search
//!
//! Token-based relevance search over the organized rows.
//!
//! # Scoring (per token, summed)
//!
//! | field     | prefix | substring |
//! |-----------|--------|-----------|
//! | name      | 20     | 10        |
//! | ISO code  | 6      | 3         |
//! | dial code | 4      | 2         |
//!
//! Code and dial code only count when
//! [`PickerConfig::search_matches_dialing_code_and_iso_code`] is set. For a
//! given token and field a prefix hit replaces the substring hit. All fields
//! are compared on their [`fold_key`] form.

use crate::config::PickerConfig;
use crate::model::Country;
use crate::text::{compare_codes, fold_key, tokenize};
use std::collections::HashMap;
use tracing::trace;

pub const NAME_PREFIX: u32 = 20;
pub const NAME_SUBSTRING: u32 = 10;
pub const CODE_PREFIX: u32 = 6;
pub const CODE_SUBSTRING: u32 = 3;
pub const DIAL_PREFIX: u32 = 4;
pub const DIAL_SUBSTRING: u32 = 2;

/// A country with its relevance score. Scores are always positive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchMatch {
    pub country: Country,
    pub score: u32,
}

/// Outcome of a search.
///
/// `NoFilter` means the query was blank and the caller should show the
/// unfiltered sections; `Matches(vec![])` means nothing matched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchResult {
    NoFilter,
    Matches(Vec<SearchMatch>),
}

impl SearchResult {
    pub fn is_filtering(&self) -> bool {
        matches!(self, SearchResult::Matches(_))
    }

    pub fn matches(&self) -> &[SearchMatch] {
        match self {
            SearchResult::NoFilter => &[],
            SearchResult::Matches(m) => m,
        }
    }

    /// Matched countries in rank order.
    pub fn countries(&self) -> Vec<&Country> {
        self.matches().iter().map(|m| &m.country).collect()
    }
}

// Pre-folded view of one candidate.
struct Folded<'a> {
    country: &'a Country,
    name: String,
    code: String,
    // None for the unknown-dial sentinel.
    dial: Option<String>,
}

impl<'a> Folded<'a> {
    fn new(country: &'a Country) -> Self {
        Self {
            country,
            name: fold_key(country.name()),
            code: fold_key(country.code()),
            dial: country.has_dial_code().then(|| fold_key(country.dial_code())),
        }
    }

    fn score(&self, tokens: &[String], widen: bool) -> u32 {
        tokens
            .iter()
            .map(|t| {
                let mut s = field_score(&self.name, t, NAME_PREFIX, NAME_SUBSTRING);
                if widen {
                    s += field_score(&self.code, t, CODE_PREFIX, CODE_SUBSTRING);
                    if let Some(dial) = &self.dial {
                        s += field_score(dial, t, DIAL_PREFIX, DIAL_SUBSTRING);
                    }
                }
                s
            })
            .sum()
    }
}

#[inline]
fn field_score(field: &str, token: &str, prefix: u32, substring: u32) -> u32 {
    if field.starts_with(token) {
        prefix
    } else if field.contains(token) {
        substring
    } else {
        0
    }
}

/// Score one country against already-folded tokens.
///
/// ```rust
/// use countrypick_core::search::score_country;
/// use countrypick_core::Country;
///
/// let fr = Country::new("France", "FR", Some("+33"));
/// let tokens = vec!["fr".to_string()];
/// // name prefix (20) + code prefix (6)
/// assert_eq!(score_country(&fr, &tokens, true), 26);
/// assert_eq!(score_country(&fr, &tokens, false), 20);
/// ```
pub fn score_country(country: &Country, tokens: &[String], widen: bool) -> u32 {
    Folded::new(country).score(tokens, widen)
}

/// Rank `countries` against `query`.
///
/// Duplicated countries (for example one listed under "Recent" and again in
/// its letter bucket) are reported once, with their best score. Ties sort
/// by folded name, then code.
///
/// ```rust
/// use countrypick_core::search::{search, SearchResult};
/// use countrypick_core::{Country, PickerConfig};
///
/// let rows = vec![
///     Country::new("Uganda", "UG", Some("+256")),
///     Country::new("United States", "US", Some("+1")),
/// ];
/// let cfg = PickerConfig::default();
///
/// let hits = search("uni", &rows, &cfg);
/// assert_eq!(hits.countries()[0].code(), "US");
/// assert_eq!(search("   ", &rows, &cfg), SearchResult::NoFilter);
/// ```
pub fn search(query: &str, countries: &[Country], config: &PickerConfig) -> SearchResult {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return SearchResult::NoFilter;
    }
    let widen = config.search_matches_dialing_code_and_iso_code;

    let mut best: HashMap<String, (Folded<'_>, u32)> = HashMap::new();
    for country in countries {
        let folded = Folded::new(country);
        let score = folded.score(&tokens, widen);
        if score == 0 {
            continue;
        }
        let key = country.code().to_ascii_uppercase();
        let better = best.get(&key).map_or(true, |(_, prev)| score > *prev);
        if better {
            best.insert(key, (folded, score));
        }
    }

    let mut ranked: Vec<(Folded<'_>, u32)> = best.into_values().collect();
    ranked.sort_by(|(a, sa), (b, sb)| {
        sb.cmp(sa)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| compare_codes(a.country.code(), b.country.code()))
    });

    trace!(query = %query, tokens = tokens.len(), matches = ranked.len(), "search");

    SearchResult::Matches(
        ranked
            .into_iter()
            .map(|(f, score)| SearchMatch {
                country: f.country.clone(),
                score,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Country> {
        vec![
            Country::new("United States", "US", Some("+1")),
            Country::new("Uganda", "UG", Some("+256")),
            Country::new("France", "FR", Some("+33")),
            Country::new("Réunion", "RE", Some("+262")),
            Country::new("Bouvet Island", "BV", None),
        ]
    }

    fn codes(result: &SearchResult) -> Vec<&str> {
        result.countries().iter().map(|c| c.code()).collect()
    }

    #[test]
    fn prefix_on_name_outranks_substring() {
        let result = search("uni", &rows(), &PickerConfig::default());
        assert_eq!(codes(&result), ["US", "RE"]);
        assert_eq!(result.matches()[0].score, NAME_PREFIX);
        assert_eq!(result.matches()[1].score, NAME_SUBSTRING);
    }

    #[test]
    fn dial_code_only_counts_when_widened() {
        let narrow = PickerConfig {
            search_matches_dialing_code_and_iso_code: false,
            ..PickerConfig::default()
        };
        let result = search("33", &rows(), &narrow);
        assert_eq!(result, SearchResult::Matches(vec![]));
        assert!(result.is_filtering());

        let result = search("33", &rows(), &PickerConfig::default());
        assert_eq!(codes(&result), ["FR"]);
        assert_eq!(result.matches()[0].score, DIAL_SUBSTRING);

        let result = search("+33", &rows(), &PickerConfig::default());
        assert_eq!(result.matches()[0].score, DIAL_PREFIX);
    }

    #[test]
    fn unknown_dial_code_never_matches() {
        let result = search("-", &rows(), &PickerConfig::default());
        assert_eq!(result, SearchResult::Matches(vec![]));
    }

    #[test]
    fn tokens_accumulate_across_fields() {
        // "u" prefixes "united states"/"uganda" and "us"/"ug"; it is a
        // substring of "reunion" and "bouvet island".
        let result = search("u", &rows(), &PickerConfig::default());
        let scores: Vec<(&str, u32)> = result
            .matches()
            .iter()
            .map(|m| (m.country.code(), m.score))
            .collect();
        assert_eq!(scores, [("UG", 26), ("US", 26), ("BV", 10), ("RE", 10)]);
    }

    #[test]
    fn multi_token_query_sums_per_token() {
        let result = search("united states", &rows(), &PickerConfig::default());
        // "united": name prefix 20; "states": name substring 10.
        assert_eq!(result.matches()[0].score, 30);
        assert_eq!(codes(&result), ["US"]);
    }

    #[test]
    fn query_is_folded_like_names() {
        let result = search("REUNIÓN", &rows(), &PickerConfig::default());
        assert_eq!(codes(&result), ["RE"]);
    }

    #[test]
    fn duplicates_are_reported_once() {
        let mut input = rows();
        input.insert(0, Country::new("France", "fr", Some("+33")));
        let result = search("fra", &input, &PickerConfig::default());
        assert_eq!(result.matches().len(), 1);
        assert_eq!(result.matches()[0].score, NAME_PREFIX);
    }

    #[test]
    fn blank_query_is_not_a_filter() {
        assert_eq!(search("", &rows(), &PickerConfig::default()), SearchResult::NoFilter);
        assert_eq!(search(" \n\t", &rows(), &PickerConfig::default()), SearchResult::NoFilter);
        assert!(SearchResult::NoFilter.countries().is_empty());
    }
}
