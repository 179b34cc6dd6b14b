// crates/countrypick-core/src/lib.rs
//! Country picker core: section composition, locale collation, relevance
//! search and recent-selection history, independent of any UI toolkit.

pub mod catalog; // Embedded + JSON-backed catalogs
pub mod collation;
pub mod config;
pub mod error;
pub mod history;
pub mod loader;
pub mod model;
pub mod organizer; // Pure section composition
pub mod phone;
pub mod picker; // Stateful facade (cache + events)
pub mod prelude;
pub mod recorder;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::error::{PickerError, Result};
pub use crate::model::{Country, CountrySelected, Section, SectionKind, UNKNOWN_DIAL_CODE};
pub use crate::config::PickerConfig;
pub use crate::traits::{CountryCatalog, HistoryStore, LocaleOrdering};
pub use crate::catalog::EmbeddedCatalog;
#[cfg(feature = "json")]
pub use crate::catalog::{CatalogEntry, JsonCatalog};
pub use crate::history::MemoryHistoryStore;
#[cfg(feature = "json")]
pub use crate::history::JsonFileHistoryStore;
pub use crate::collation::LatinOrdering;
pub use crate::search::{SearchMatch, SearchResult};
pub use crate::picker::CountryPicker;
