//! Basic usage example for countrypick-rs
//!
//! This example demonstrates how to:
//! - Build a picker over the embedded catalog
//! - Print its sections
//! - Pick countries and watch the "Recent" section change
//! - Jump through the index bar

use countrypick_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== countrypick-rs Basic Usage Example ===\n");

    let config = PickerConfig::default()
        .with_preferred(["CH", "AT"])
        .with_recent_limit(3);
    let mut picker = CountryPicker::new(EmbeddedCatalog, MemoryHistoryStore::new())
        .with_config(config)
        .with_platform_region(Some("DE"));

    // Example 1: Section overview
    println!("--- Example 1: Sections ---");
    for section in picker.sections() {
        if let Some(header) = section.header() {
            println!("{header}: {} countries", section.len());
        }
    }
    println!();

    // Example 2: Picking countries
    println!("--- Example 2: Recent selections ---");
    let events = picker.subscribe();
    for code in ["fr", "JP", "FR", "BR"] {
        picker.select(code)?;
    }
    for event in events.try_iter() {
        println!("picked {} ({})", event.name, event.dial_code);
    }
    let recent = &picker.sections()[0];
    println!("{}:", recent.kind.label());
    for c in &recent.countries {
        println!("- {}", c.row_label(true));
    }
    println!();

    // Example 3: Index bar
    println!("--- Example 3: Index jump ---");
    let titles = picker.index_titles().to_vec();
    if let Some(z) = titles.iter().position(|t| t == "Z") {
        if let Some(pos) = picker.section_for_index_title(z) {
            let names: Vec<&str> = picker.sections()[pos].countries.iter().map(|c| c.name()).collect();
            println!("Z -> section #{pos}: {}", names.join(", "));
        }
    }

    Ok(())
}
