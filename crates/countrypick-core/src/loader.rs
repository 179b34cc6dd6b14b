// crates/countrypick-core/src/loader.rs

//! # Data Loader
//!
//! Handles the physical layer (files, readers) for catalogs and keeps a
//! process-wide copy of the embedded country list.

use crate::catalog::EmbeddedCatalog;
use crate::model::Country;
use crate::traits::CountryCatalog;
use once_cell::sync::OnceCell;

#[cfg(feature = "json")]
use crate::catalog::{CatalogEntry, JsonCatalog};
#[cfg(feature = "json")]
use crate::error::{PickerError, Result};
#[cfg(feature = "json")]
use std::fs::File;
#[cfg(feature = "json")]
use std::io::{BufReader, Read};
#[cfg(feature = "json")]
use std::path::Path;

// Embedded names ignore the locale.
static EMBEDDED_COUNTRIES: OnceCell<Vec<Country>> = OnceCell::new();

/// Every country of the [`EmbeddedCatalog`], resolved once per process.
pub fn embedded_countries() -> &'static [Country] {
    EMBEDDED_COUNTRIES.get_or_init(|| EmbeddedCatalog.countries("en"))
}

#[cfg(feature = "json")]
impl JsonCatalog {
    /// Load a catalog file: a JSON array of [`CatalogEntry`].
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_stream(path)?;
        Self::from_reader(reader)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_reader(reader)?;
        Self::validated(entries)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(s)?;
        Self::validated(entries)
    }

    fn validated(entries: Vec<CatalogEntry>) -> Result<Self> {
        if let Some(pos) = entries.iter().position(|e| e.code.trim().is_empty()) {
            return Err(PickerError::InvalidData(format!(
                "catalog entry #{pos} has an empty code"
            )));
        }
        tracing::debug!(entries = entries.len(), "loaded JSON catalog");
        Ok(Self::from_entries(entries))
    }
}

/// Opens a file and buffers it.
#[cfg(feature = "json")]
fn open_stream(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| {
        PickerError::NotFound(format!("Catalog not found at {}: {}", path.display(), e))
    })?;
    Ok(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_countries_are_cached() {
        let a = embedded_countries();
        let b = embedded_countries();
        assert!(std::ptr::eq(a, b));
        assert!(a.iter().any(|c| c.has_code("FR")));
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_catalog_rejects_empty_codes() {
        let err = JsonCatalog::from_json_str(r#"[{ "code": " ", "name": "Nowhere" }]"#);
        assert!(matches!(err, Err(PickerError::InvalidData(_))));
    }

    #[cfg(feature = "json")]
    #[test]
    fn missing_catalog_file_is_not_found() {
        let err = JsonCatalog::load_from_path("/definitely/not/here.json");
        assert!(matches!(err, Err(PickerError::NotFound(_))));
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_catalog_resolves_countries() {
        let catalog = JsonCatalog::from_json_str(
            r#"[
                { "code": "FR", "dial_code": "33", "names": { "fr": "France", "de": "Frankreich" } },
                { "code": "XK", "name": "Kosovo" }
            ]"#,
        )
        .unwrap();
        let de = catalog.countries("de");
        // XK has no German name but a fallback; FR has no fallback for "en".
        assert_eq!(de.len(), 2);
        assert_eq!(de[0].name(), "Frankreich");
        assert_eq!(de[0].dial_code(), "+33");
        let en = catalog.countries("en");
        assert_eq!(en.len(), 1);
        assert_eq!(en[0].code(), "XK");
        assert!(!en[0].has_dial_code());
    }
}
