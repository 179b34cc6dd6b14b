//! Search ranking example for countrypick-rs
//!
//! Shows how name, ISO code and dialing code matches are weighted, and how
//! the dialing/ISO toggle changes the results.

use countrypick_rs::prelude::*;

fn show(title: &str, result: &SearchResult) {
    println!("--- {title} ---");
    match result {
        SearchResult::NoFilter => println!("(no filter)"),
        SearchResult::Matches(m) if m.is_empty() => println!("(no matches)"),
        SearchResult::Matches(m) => {
            for hit in m.iter().take(8) {
                println!("{:>3}  {} [{}] {}", hit.score, hit.country.name(), hit.country.code(), hit.country.dial_code());
            }
        }
    }
    println!();
}

fn main() -> Result<()> {
    println!("=== countrypick-rs Search Ranking Example ===\n");

    let mut picker = CountryPicker::new(EmbeddedCatalog, MemoryHistoryStore::new());

    show("\"uni\": name prefix beats substring", &picker.search("uni"));
    show("\"united states\": tokens add up", &picker.search("united states"));
    show("\"+41\": dialing code", &picker.search("+41"));
    show("\"ch\": ISO code and name", &picker.search("ch"));
    show("\"  \": blank", &picker.search("  "));

    let mut names_only = picker.config().clone();
    names_only.search_matches_dialing_code_and_iso_code = false;
    picker.set_config(names_only);
    show("\"+41\" with names only", &picker.search("+41"));

    Ok(())
}
