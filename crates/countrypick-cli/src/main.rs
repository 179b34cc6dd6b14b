//! countrypick: command-line interface for countrypick-core
//!
//! Prints what a country picker would show: priority sections ("Recent",
//! "Preferred", "Current Location") followed by the alphabetic buckets, and
//! lets you search, pick and inspect the index bar from a terminal.
//!
//! Usage examples
//! --------------
//!
//! - Show the sections with dialing codes
//!   $ countrypick sections --dial-codes
//!
//! - Restrict to a few countries and pin one
//!   $ countrypick --allowed=DE,CH,AT --preferred=CH sections
//!
//! - Search by name, ISO code or dialing code
//!   $ countrypick search united
//!   $ countrypick search +41
//!
//! - Pick a country and remember it
//!   $ countrypick --history recents.json select fr
//!   $ countrypick --history recents.json recents
//!
//! Data source
//! -----------
//!
//! By default the embedded English catalog is used. `--catalog <path>` reads
//! a JSON catalog with localized names (see `countrypick_core::CatalogEntry`),
//! and `--locale` selects the names to display.
mod args;
mod logging;

use crate::args::{split_codes, CliArgs, Commands};
use crate::logging::{init_logging, LogConfig};
use anyhow::Context;
use clap::Parser;
use countrypick_core::organizer::region_from_locale_tag;
use countrypick_core::phone::find_countries_by_dial_code;
use countrypick_core::traits::NameMatch;
use countrypick_core::{
    Country, CountryCatalog, CountryPicker, EmbeddedCatalog, HistoryStore, JsonCatalog,
    JsonFileHistoryStore, MemoryHistoryStore, PickerConfig, SearchResult,
};
use std::collections::HashSet;
use tracing::{debug, info};

type Picker = CountryPicker<Box<dyn CountryCatalog>, Box<dyn HistoryStore>>;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(&LogConfig::from_verbosity(args.verbose));

    let mut picker = build_picker(&args)?;

    match args.command {
        Commands::Sections {
            show_empty,
            dial_codes,
        } => {
            for section in picker.sections() {
                match section.header() {
                    Some(header) => println!("== {header} =="),
                    None if show_empty => println!("== {} == (empty)", section.kind.label()),
                    None => continue,
                }
                for c in &section.countries {
                    println!("  {} [{}]", c.row_label(dial_codes), c.code());
                }
            }
        }

        Commands::Search { query } => {
            let query = query.join(" ");
            match picker.search(&query) {
                SearchResult::NoFilter => println!("Empty query; nothing to filter."),
                SearchResult::Matches(matches) if matches.is_empty() => {
                    println!("No countries found matching: {query}");
                }
                SearchResult::Matches(matches) => {
                    for m in matches {
                        println!(
                            "{:>3}  {} ({}, {})",
                            m.score,
                            m.country.name(),
                            m.country.code(),
                            m.country.dial_code()
                        );
                    }
                }
            }
        }

        Commands::Select { code } => {
            let events = picker.subscribe();
            match picker.select(&code)? {
                Some(_) => {
                    for event in events.try_iter() {
                        println!("Selected: {} ({}, {})", event.name, event.code, event.dial_code);
                    }
                    if args.history.is_none() && picker.config().recents_enabled() {
                        info!("no --history file given; selection is not persisted");
                    }
                }
                None => eprintln!("Country {code} is not shown by this picker"),
            }
        }

        Commands::Recents => {
            let codes = picker.recent_codes();
            if codes.is_empty() {
                println!("No recent countries.");
            }
            for code in codes {
                match picker.name_for(&code) {
                    Some(name) => println!("{name} ({code})"),
                    None => debug!(code = %code, "recent code no longer shown"),
                }
            }
        }

        Commands::Lookup { code, prefix } => {
            if prefix {
                for c in picker.countries_with_code_prefix(&code) {
                    print_country(&c);
                }
            } else if let Some(c) = picker.country_for_code(&code) {
                print_country(&c);
            } else {
                // Fall back to a name lookup.
                let named = lookup_by_name(&picker.rows(), &code);
                if named.is_empty() {
                    eprintln!("No country found for: {code}");
                }
                for c in named {
                    print_country(&c);
                }
            }
        }

        Commands::Index { title } => {
            let titles = picker.index_titles().to_vec();
            match title {
                None => println!("{}", titles.join(" ")),
                Some(title) => {
                    let found = titles
                        .iter()
                        .position(|t| t.eq_ignore_ascii_case(title.trim()))
                        .and_then(|idx| picker.section_for_index_title(idx));
                    match found {
                        Some(pos) => {
                            let section = &picker.sections()[pos];
                            println!("Index {title} -> section #{pos} ({} countries)", section.len());
                            for c in &section.countries {
                                println!("  {}", c.name());
                            }
                        }
                        None => eprintln!("Unknown index title: {title}"),
                    }
                }
            }
        }

        Commands::Dial { prefix } => {
            // Alphabetic buckets hold each shown country exactly once.
            let shown: Vec<Country> = picker
                .sections()
                .iter()
                .filter(|s| s.kind.is_alphabetic())
                .flat_map(|s| s.countries.iter().cloned())
                .collect();
            let matches = find_countries_by_dial_code(&shown, &prefix);
            if matches.is_empty() {
                println!("No countries found with dialing code: {prefix}");
            }
            for c in matches {
                println!("{} {} ({})", c.dial_code(), c.name(), c.code());
            }
        }
    }

    Ok(())
}

fn build_picker(args: &CliArgs) -> anyhow::Result<Picker> {
    let config = load_config(args)?;

    let catalog: Box<dyn CountryCatalog> = match &args.catalog {
        Some(path) => Box::new(
            JsonCatalog::load_from_path(path)
                .with_context(|| format!("loading catalog {}", path.display()))?,
        ),
        None => Box::new(EmbeddedCatalog),
    };

    let history: Box<dyn HistoryStore> = match &args.history {
        Some(path) => Box::new(
            JsonFileHistoryStore::open(path)
                .with_context(|| format!("opening history {}", path.display()))?,
        ),
        None => Box::new(MemoryHistoryStore::new()),
    };

    let region = args.region.clone().or_else(|| {
        std::env::var("LANG")
            .ok()
            .and_then(|tag| region_from_locale_tag(&tag))
    });
    debug!(region = ?region, locale = %args.locale, "picker environment");

    Ok(CountryPicker::new(catalog, history)
        .with_config(config)
        .with_locale(args.locale.clone())
        .with_platform_region(region.as_deref()))
}

/// Config file (or defaults) with command-line overrides applied on top.
fn load_config(args: &CliArgs) -> anyhow::Result<PickerConfig> {
    let mut config = match &args.config {
        Some(path) => PickerConfig::from_json_path(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => PickerConfig::default(),
    };

    if let Some(list) = &args.allowed {
        config.allowed_country_codes = Some(split_codes(list));
    }
    if let Some(list) = &args.preferred {
        config.preferred_country_codes = split_codes(list);
    }
    if let Some(limit) = args.limit {
        config = config.with_recent_limit(limit);
    }
    if args.no_recents {
        config.shows_recent_countries = false;
    }
    if args.no_current_location {
        config.shows_current_location = false;
    }
    if args.names_only {
        config.search_matches_dialing_code_and_iso_code = false;
    }
    Ok(config)
}

/// Exact (folded) name match, else every shown country whose name contains
/// `query`. Each country appears once.
fn lookup_by_name(rows: &[Country], query: &str) -> Vec<Country> {
    let mut seen = HashSet::new();
    let unique: Vec<&Country> = rows
        .iter()
        .filter(|c| seen.insert(c.code().to_ascii_uppercase()))
        .collect();
    if let Some(c) = unique.iter().find(|c| c.is_named(query)) {
        return vec![(*c).clone()];
    }
    unique
        .into_iter()
        .filter(|c| c.name_contains(query))
        .cloned()
        .collect()
}

fn print_country(c: &Country) {
    println!("{} ({})", c.name(), c.code());
    println!("  Dial code: {}", c.dial_code());
}
