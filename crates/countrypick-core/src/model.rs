// crates/countrypick-core/src/model.rs
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Dial code used when the catalog has no calling code for a region.
pub const UNKNOWN_DIAL_CODE: &str = "-";

/// A country row: display name, ISO region code and calling code.
///
/// Identity is the ISO code compared case-insensitively; the display name
/// depends on the locale the catalog was queried with.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "RawCountry")]
pub struct Country {
    name: String,
    code: String,
    dial_code: String,
}

// Wire form; goes through `Country::new` so blank dial codes normalize.
#[derive(Deserialize)]
struct RawCountry {
    name: String,
    code: String,
    #[serde(default)]
    dial_code: Option<String>,
}

impl From<RawCountry> for Country {
    fn from(raw: RawCountry) -> Self {
        Country::new(raw.name, raw.code, raw.dial_code.as_deref())
    }
}

impl Country {
    /// Build a country. A missing or blank dial code becomes
    /// [`UNKNOWN_DIAL_CODE`].
    pub fn new(name: impl Into<String>, code: impl Into<String>, dial_code: Option<&str>) -> Self {
        let dial_code = dial_code
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(UNKNOWN_DIAL_CODE)
            .to_owned();
        Self {
            name: name.into(),
            code: code.into(),
            dial_code,
        }
    }

    /// Localized display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// ISO 3166-1 alpha-2 region code as provided by the catalog (e.g. "FR").
    pub fn code(&self) -> &str {
        &self.code
    }

    /// International calling code (e.g. "+33"), or [`UNKNOWN_DIAL_CODE`].
    pub fn dial_code(&self) -> &str {
        &self.dial_code
    }

    pub fn has_dial_code(&self) -> bool {
        self.dial_code != UNKNOWN_DIAL_CODE
    }

    /// True if `code` names this country, ignoring ASCII case.
    #[inline]
    pub fn has_code(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code.trim())
    }

    /// Text shown for this country in a list row.
    ///
    /// ```rust
    /// use countrypick_core::Country;
    ///
    /// let fr = Country::new("France", "FR", Some("+33"));
    /// assert_eq!(fr.row_label(true), "France (+33)");
    /// assert_eq!(fr.row_label(false), "France");
    /// ```
    pub fn row_label(&self, show_dial_code: bool) -> String {
        if show_dial_code {
            format!("{} ({})", self.name, self.dial_code)
        } else {
            self.name.clone()
        }
    }
}

impl PartialEq for Country {
    fn eq(&self, other: &Self) -> bool {
        self.code.eq_ignore_ascii_case(&other.code)
    }
}

impl Eq for Country {}

impl Hash for Country {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.to_ascii_uppercase().hash(state);
    }
}

/// What a section holds. Only alphabetic buckets carry a collation key; the
/// other kinds are fixed semantic labels the caller may localize.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    Recent,
    Preferred,
    CurrentLocation,
    Alphabetic(String),
}

impl SectionKind {
    /// Default English label (the bucket key for alphabetic sections).
    pub fn label(&self) -> &str {
        match self {
            SectionKind::Recent => "Recent",
            SectionKind::Preferred => "Preferred",
            SectionKind::CurrentLocation => "Current Location",
            SectionKind::Alphabetic(key) => key,
        }
    }

    pub fn is_alphabetic(&self) -> bool {
        matches!(self, SectionKind::Alphabetic(_))
    }
}

/// An ordered group of rows under one header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    pub countries: Vec<Country>,
}

impl Section {
    pub fn new(kind: SectionKind, countries: Vec<Country>) -> Self {
        Self { kind, countries }
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Header title, or `None` for an empty section (which renders without
    /// a header).
    pub fn header(&self) -> Option<&str> {
        if self.is_empty() {
            None
        } else {
            Some(self.kind.label())
        }
    }
}

/// Flatten sections into rows, in display order. Countries present in more
/// than one section appear more than once.
pub fn flatten_sections(sections: &[Section]) -> Vec<Country> {
    sections
        .iter()
        .flat_map(|s| s.countries.iter().cloned())
        .collect()
}

/// Event emitted when the user confirms a pick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySelected {
    pub name: String,
    pub code: String,
    pub dial_code: String,
}

impl From<&Country> for CountrySelected {
    fn from(c: &Country) -> Self {
        Self {
            name: c.name.clone(),
            code: c.code.clone(),
            dial_code: c.dial_code.clone(),
        }
    }
}
