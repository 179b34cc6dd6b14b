// crates/countrypick-core/src/prelude.rs
//! Everything a typical picker integration needs.
//!
//! ```rust
//! use countrypick_core::prelude::*;
//!
//! let mut picker = CountryPicker::new(EmbeddedCatalog, MemoryHistoryStore::new());
//! assert!(picker.search("germ").is_filtering());
//! ```

pub use crate::error::{PickerError, Result};
pub use crate::model::{Country, CountrySelected, Section, SectionKind};
pub use crate::config::PickerConfig;
pub use crate::traits::{CountryCatalog, HistoryStore, LocaleOrdering};
pub use crate::catalog::EmbeddedCatalog;
#[cfg(feature = "json")]
pub use crate::catalog::JsonCatalog;
pub use crate::history::MemoryHistoryStore;
#[cfg(feature = "json")]
pub use crate::history::JsonFileHistoryStore;
pub use crate::collation::LatinOrdering;
pub use crate::search::{SearchMatch, SearchResult};
pub use crate::picker::CountryPicker;
