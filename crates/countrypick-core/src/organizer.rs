// crates/countrypick-core/src/organizer.rs
//! # List organizer
//!
//! Composes the full section list shown by a picker:
//!
//! ```text
//! Recent · Preferred · Current Location · A · B · … · Z · #
//! ```
//!
//! Priority sections are omitted when their source resolves to nothing;
//! alphabetic buckets are always present, possibly empty.

use crate::collation::collate;
use crate::config::PickerConfig;
use crate::model::{Country, Section, SectionKind};
use crate::traits::LocaleOrdering;
use std::collections::HashSet;
use tracing::debug;

/// Build the ordered sections for one configuration snapshot.
///
/// Pure: the same inputs always produce the same sections.
///
/// * `all` – every country the catalog resolved for the current locale.
/// * `recent_codes` – history, most recent first.
/// * `platform_region` – region reported by the platform, if any.
///
/// ```rust
/// use countrypick_core::collation::LatinOrdering;
/// use countrypick_core::organizer::organize;
/// use countrypick_core::{Country, PickerConfig, SectionKind};
///
/// let all = vec![
///     Country::new("France", "FR", Some("+33")),
///     Country::new("Germany", "DE", Some("+49")),
/// ];
/// let cfg = PickerConfig::default().with_preferred(["de"]);
/// let sections = organize(&cfg, &all, &["FR".to_string()], Some("FR"), &LatinOrdering::default());
///
/// assert_eq!(sections[0].kind, SectionKind::Recent);
/// assert_eq!(sections[1].kind, SectionKind::Preferred);
/// assert_eq!(sections[2].kind, SectionKind::CurrentLocation);
/// assert!(sections[3..].iter().all(|s| s.kind.is_alphabetic()));
/// ```
pub fn organize(
    config: &PickerConfig,
    all: &[Country],
    recent_codes: &[String],
    platform_region: Option<&str>,
    ordering: &dyn LocaleOrdering,
) -> Vec<Section> {
    let pool = restrict(config, all);
    let mut sections = collate(&pool, ordering);

    if config.shows_current_location {
        let code = resolve_current_location_code(config, platform_region);
        let found = find_by_code(&pool, &code).or_else(|| {
            debug!(code = %code, "current location not in catalog; trying default");
            find_by_code(&pool, &config.default_country_code)
        });
        match found {
            Some(country) => sections.insert(
                0,
                Section::new(SectionKind::CurrentLocation, vec![country.clone()]),
            ),
            None => debug!("no resolvable current location; section omitted"),
        }
    }

    if !config.preferred_country_codes.is_empty() {
        let preferred = resolve_codes(&config.preferred_country_codes, &pool);
        if !preferred.is_empty() {
            sections.insert(0, Section::new(SectionKind::Preferred, preferred));
        }
    }

    if config.recents_enabled() && !recent_codes.is_empty() {
        let recents = resolve_codes(recent_codes, &pool);
        if !recents.is_empty() {
            sections.insert(0, Section::new(SectionKind::Recent, recents));
        }
    }

    sections
}

/// Apply the allowed-codes restriction. Codes the catalog does not know are
/// ignored; catalog order is kept.
pub fn restrict(config: &PickerConfig, all: &[Country]) -> Vec<Country> {
    match &config.allowed_country_codes {
        None => all.to_vec(),
        Some(_) => all.iter().filter(|c| config.allows(c.code())).cloned().collect(),
    }
}

/// Region shown under "Current Location": the configured default when forced
/// or when the platform has no answer, otherwise the platform's region.
pub fn resolve_current_location_code(config: &PickerConfig, platform_region: Option<&str>) -> String {
    let platform = platform_region.map(str::trim).filter(|r| !r.is_empty());
    match platform {
        Some(region) if !config.force_default_country_code => region.to_owned(),
        _ => config.default_country_code.trim().to_owned(),
    }
}

fn find_by_code<'a>(pool: &'a [Country], code: &str) -> Option<&'a Country> {
    pool.iter().find(|c| c.has_code(code))
}

// Look up codes in order, dropping unknown ones and repeats.
fn resolve_codes(codes: &[String], pool: &[Country]) -> Vec<Country> {
    let mut seen = HashSet::new();
    codes
        .iter()
        .filter_map(|code| {
            let found = find_by_code(pool, code);
            if found.is_none() {
                debug!(code = %code, "dropping unresolvable code");
            }
            found
        })
        .filter(|c| seen.insert(c.code().to_ascii_uppercase()))
        .cloned()
        .collect()
}

/// Position in `sections` of the alphabetic bucket an index-bar tap on
/// `titles[title_index]` should scroll to.
///
/// Priority sections sit above the buckets, so the answer is offset by them.
pub fn section_for_index_title(
    sections: &[Section],
    titles: &[String],
    title_index: usize,
) -> Option<usize> {
    let title = titles.get(title_index)?;
    sections
        .iter()
        .position(|s| matches!(&s.kind, SectionKind::Alphabetic(key) if key == title))
}

/// Extract the region subtag from a POSIX or BCP 47 locale tag.
///
/// ```rust
/// use countrypick_core::organizer::region_from_locale_tag;
///
/// assert_eq!(region_from_locale_tag("en_US.UTF-8").as_deref(), Some("US"));
/// assert_eq!(region_from_locale_tag("de-CH").as_deref(), Some("CH"));
/// assert_eq!(region_from_locale_tag("sr_Latn_RS").as_deref(), Some("RS"));
/// assert_eq!(region_from_locale_tag("C"), None);
/// ```
pub fn region_from_locale_tag(tag: &str) -> Option<String> {
    let base = tag.split(['.', '@']).next().unwrap_or("");
    base.split(['_', '-'])
        .skip(1)
        .find(|part| part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()))
        .map(str::to_ascii_uppercase)
}
