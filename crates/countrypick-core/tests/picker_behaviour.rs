// crates/countrypick-core/tests/picker_behaviour.rs
use countrypick_core::collation::OTHER_BUCKET;
use countrypick_core::loader::embedded_countries;
use countrypick_core::organizer::organize;
use countrypick_core::prelude::*;
use countrypick_core::search::{search, NAME_PREFIX, NAME_SUBSTRING};
use std::collections::HashSet;

fn picker(config: PickerConfig) -> CountryPicker<EmbeddedCatalog, MemoryHistoryStore> {
    CountryPicker::new(EmbeddedCatalog, MemoryHistoryStore::new()).with_config(config)
}

fn codes(countries: &[Country]) -> Vec<String> {
    countries.iter().map(|c| c.code().to_owned()).collect()
}

#[test]
fn organizing_is_idempotent() {
    let cfg = PickerConfig::default().with_preferred(["JP", "BR"]);
    let ordering = LatinOrdering::default();
    let recents = vec!["DE".to_string(), "FR".to_string()];
    let a = organize(&cfg, embedded_countries(), &recents, Some("CA"), &ordering);
    let b = organize(&cfg, embedded_countries(), &recents, Some("CA"), &ordering);
    assert_eq!(a, b);
    let names_a: Vec<&str> = a.iter().flat_map(|s| s.countries.iter().map(|c| c.name())).collect();
    let names_b: Vec<&str> = b.iter().flat_map(|s| s.countries.iter().map(|c| c.name())).collect();
    assert_eq!(names_a, names_b);
}

#[test]
fn section_order_is_priority_then_alphabet() {
    let mut p = picker(PickerConfig::default().with_preferred(["BR"])).with_platform_region(Some("CA"));
    p.select("DE").unwrap();

    let titles: Vec<String> = p.index_titles().to_vec();
    let sections = p.sections();
    assert_eq!(sections[0].kind, SectionKind::Recent);
    assert_eq!(sections[1].kind, SectionKind::Preferred);
    assert_eq!(sections[2].kind, SectionKind::CurrentLocation);
    assert_eq!(sections[2].countries[0].code(), "CA");

    let buckets: Vec<&str> = sections[3..].iter().map(|s| s.kind.label()).collect();
    assert_eq!(buckets, titles.iter().map(String::as_str).collect::<Vec<_>>());
    assert_eq!(buckets.last().copied(), Some(OTHER_BUCKET));
}

#[test]
fn allowed_codes_restrict_every_section() {
    let cfg = PickerConfig::default()
        .with_allowed(["FR", "DE", "IT"])
        .with_preferred(["US", "IT"]);
    let mut p = picker(cfg).with_platform_region(Some("GB"));
    p.select("FR").unwrap();
    assert!(p.select("US").unwrap().is_none());

    let allowed: HashSet<&str> = ["FR", "DE", "IT"].into_iter().collect();
    for section in p.sections() {
        for c in &section.countries {
            assert!(allowed.contains(c.code()), "{} leaked into {:?}", c.code(), section.kind);
        }
    }
    // GB and the default US are both filtered out, so no current location.
    assert!(p.sections().iter().all(|s| s.kind != SectionKind::CurrentLocation));
    let preferred = p.sections().iter().find(|s| s.kind == SectionKind::Preferred).unwrap();
    assert_eq!(codes(&preferred.countries), ["IT"]);
}

#[test]
fn every_allowed_country_appears_once_in_buckets() {
    let mut p = picker(PickerConfig::default());
    let bucketed: Vec<Country> = p
        .sections()
        .iter()
        .filter(|s| s.kind.is_alphabetic())
        .flat_map(|s| s.countries.iter().cloned())
        .collect();
    let unique: HashSet<Country> = bucketed.iter().cloned().collect();
    assert_eq!(unique.len(), bucketed.len());
    assert_eq!(bucketed.len(), embedded_countries().len());
}

#[test]
fn empty_query_is_no_filter() {
    let mut p = picker(PickerConfig::default());
    assert_eq!(p.search(""), SearchResult::NoFilter);
    assert_eq!(p.search("   "), SearchResult::NoFilter);
    assert!(!p.search(" ").is_filtering());
}

#[test]
fn name_prefix_matches_rank_first() {
    let mut p = picker(PickerConfig::default());
    let result = p.search("uni");
    let ranked: Vec<(&str, u32)> = result
        .matches()
        .iter()
        .map(|m| (m.country.code(), m.score))
        .collect();
    assert_eq!(
        ranked,
        [
            ("AE", NAME_PREFIX),
            ("GB", NAME_PREFIX),
            ("US", NAME_PREFIX),
            ("RE", NAME_SUBSTRING),
            ("TN", NAME_SUBSTRING),
        ]
    );
}

#[test]
fn dial_code_search_follows_toggle() {
    let narrow = PickerConfig {
        search_matches_dialing_code_and_iso_code: false,
        ..PickerConfig::default()
    };
    let wide = PickerConfig::default();

    let hit = |cfg: &PickerConfig| {
        search("+33", embedded_countries(), cfg)
            .countries()
            .iter()
            .any(|c| c.code() == "FR")
    };
    assert!(hit(&wide));
    assert!(!hit(&narrow));
    assert_eq!(search("+33", embedded_countries(), &narrow), SearchResult::Matches(vec![]));
}

#[test]
fn recents_are_most_recent_first_and_bounded() {
    let mut p = picker(PickerConfig::default().with_recent_limit(3));
    for code in ["FR", "US", "FR", "DE", "JP"] {
        p.select(code).unwrap();
    }
    assert_eq!(p.recent_codes(), ["JP", "DE", "FR"]);
    let recent = &p.sections()[0];
    assert_eq!(recent.kind, SectionKind::Recent);
    assert_eq!(codes(&recent.countries), ["JP", "DE", "FR"]);
}

#[test]
fn history_survives_a_new_picker() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recents.json");

    {
        let store = JsonFileHistoryStore::open(&path).unwrap();
        let mut p = CountryPicker::new(EmbeddedCatalog, store);
        p.select("NZ").unwrap();
        p.select("AU").unwrap();
    }

    let store = JsonFileHistoryStore::open(&path).unwrap();
    let mut p = CountryPicker::new(EmbeddedCatalog, store);
    assert_eq!(p.recent_codes(), ["AU", "NZ"]);
    assert_eq!(codes(&p.sections()[0].countries), ["AU", "NZ"]);
}

#[test]
fn events_carry_the_selected_row() {
    let mut p = picker(PickerConfig::default());
    let rx = p.subscribe();
    p.select("bv").unwrap();
    let event = rx.try_recv().unwrap();
    assert_eq!(event.code, "BV");
    assert_eq!(event.dial_code, countrypick_core::UNKNOWN_DIAL_CODE);
}

#[test]
fn localized_json_catalog_drives_sections() {
    let catalog = JsonCatalog::from_json_str(
        r#"[
            { "code": "DE", "dial_code": "+49", "name": "Germany", "names": { "de": "Deutschland" } },
            { "code": "AT", "dial_code": "43", "name": "Austria", "names": { "de": "Österreich" } },
            { "code": "CH", "dial_code": "+41", "name": "Switzerland", "names": { "de": "Schweiz" } }
        ]"#,
    )
    .unwrap();
    let mut p = CountryPicker::new(catalog, MemoryHistoryStore::new())
        .with_locale("de_DE")
        .with_platform_region(Some("CH"));

    assert_eq!(p.sections()[0].kind, SectionKind::CurrentLocation);
    assert_eq!(p.sections()[0].countries[0].name(), "Schweiz");
    let o = p.section_for_index_title(14).unwrap();
    assert_eq!(p.sections()[o].kind.label(), "O");
    assert_eq!(p.sections()[o].countries[0].dial_code(), "+43");
}

#[test]
fn failed_history_write_leaves_no_trace() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recents.json");
    let store = JsonFileHistoryStore::open(&path).unwrap();
    std::fs::create_dir(&path).unwrap();

    let mut p = CountryPicker::new(EmbeddedCatalog, store);
    let rx = p.subscribe();
    assert!(p.select("FR").is_err());
    assert!(rx.try_recv().is_err());
    assert!(p.recent_codes().is_empty());

    p.invalidate();
    assert_eq!(p.sections()[0].kind, SectionKind::CurrentLocation);
}
