//! Error handling example for countrypick-rs
//!
//! This example demonstrates how missing or malformed files surface as
//! `PickerError` values and how unknown codes are handled.

use countrypick_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== countrypick-rs Error Handling Example ===\n");

    // Example 1: Missing catalog file
    println!("--- Example 1: Loading a catalog that does not exist ---");
    match JsonCatalog::load_from_path("does/not/exist.json") {
        Ok(_) => println!("  unexpectedly loaded"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 2: Malformed catalog
    println!("--- Example 2: Malformed catalog content ---");
    for text in [r#"{ "not": "an array" }"#, r#"[{ "code": "" }]"#] {
        match JsonCatalog::from_json_str(text) {
            Ok(_) => println!("  unexpectedly loaded"),
            Err(PickerError::Json(e)) => println!("  ✗ JSON error: {e}"),
            Err(e) => println!("  ✗ {e}"),
        }
    }
    println!();

    // Example 3: Corrupt history file
    println!("--- Example 3: Corrupt history file ---");
    let path = std::env::temp_dir().join("countrypick-demo-history.json");
    std::fs::write(&path, "[oops")?;
    match JsonFileHistoryStore::open(&path) {
        Ok(_) => println!("  unexpectedly opened"),
        Err(e) => println!("  ✗ {e}"),
    }
    std::fs::remove_file(&path)?;
    println!();

    // Example 4: Unknown codes are ignored, not errors
    println!("--- Example 4: Unknown codes ---");
    let config = PickerConfig::default().with_preferred(["XX", "CH", "ZZ"]);
    let mut picker = CountryPicker::new(EmbeddedCatalog, MemoryHistoryStore::new()).with_config(config);
    for code in ["XX", "", "ABCD", "ch"] {
        match picker.select(code)? {
            Some(event) => println!("  Selected: {} ({})", event.name, event.code),
            None => println!("  Not shown: {code:?}"),
        }
    }
    let preferred = &picker.sections()[1];
    println!("  {} holds {} country", preferred.kind.label(), preferred.len());

    Ok(())
}
