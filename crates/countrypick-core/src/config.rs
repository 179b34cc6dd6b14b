// crates/countrypick-core/src/config.rs
use serde::{Deserialize, Deserializer, Serialize};

#[cfg(feature = "json")]
use crate::error::Result;
#[cfg(feature = "json")]
use std::path::Path;

pub const DEFAULT_RECENT_LIMIT: usize = 6;
pub const DEFAULT_RECENT_STORAGE_KEY: &str = "countrypick.recent_country_codes";
pub const DEFAULT_COUNTRY_CODE: &str = "US";

/// Behavior and content configuration for the picker.
///
/// These options are the whole tunable contract: nothing else influences
/// section composition or search ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// If set, only these ISO region codes are shown. Order is irrelevant.
    pub allowed_country_codes: Option<Vec<String>>,

    /// Codes pinned at the top in a dedicated section, in this order.
    pub preferred_country_codes: Vec<String>,

    /// Enable the "Recent" section and record selections.
    pub shows_recent_countries: bool,

    /// Maximum length of the recorded history; each selection truncates the
    /// stored list to this size. 0 disables recents.
    #[serde(deserialize_with = "deserialize_clamped_limit")]
    pub recent_countries_limit: usize,

    /// History store key used to persist recent selections.
    pub recent_countries_storage_key: String,

    /// Show the "Current Location" section.
    pub shows_current_location: bool,

    /// If true, search also matches dialing code and ISO code.
    pub search_matches_dialing_code_and_iso_code: bool,

    /// Region used for "Current Location" when the platform cannot provide one.
    pub default_country_code: String,

    /// Always use `default_country_code`, even when a region is known.
    pub force_default_country_code: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            allowed_country_codes: None,
            preferred_country_codes: Vec::new(),
            shows_recent_countries: true,
            recent_countries_limit: DEFAULT_RECENT_LIMIT,
            recent_countries_storage_key: DEFAULT_RECENT_STORAGE_KEY.to_owned(),
            shows_current_location: true,
            search_matches_dialing_code_and_iso_code: true,
            default_country_code: DEFAULT_COUNTRY_CODE.to_owned(),
            force_default_country_code: false,
        }
    }
}

impl PickerConfig {
    /// Set the recent limit from a signed value, clamping negatives to 0.
    ///
    /// ```rust
    /// use countrypick_core::PickerConfig;
    ///
    /// let cfg = PickerConfig::default().with_recent_limit(-4);
    /// assert_eq!(cfg.recent_countries_limit, 0);
    /// assert!(!cfg.recents_enabled());
    /// ```
    pub fn with_recent_limit(mut self, limit: i64) -> Self {
        self.recent_countries_limit = clamp_limit(limit);
        self
    }

    pub fn with_allowed<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_country_codes = Some(codes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_preferred<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_country_codes = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Recents are shown and recorded only when enabled with a positive limit.
    pub fn recents_enabled(&self) -> bool {
        self.shows_recent_countries && self.recent_countries_limit > 0
    }

    /// True if `code` passes the allowed-codes restriction.
    pub fn allows(&self, code: &str) -> bool {
        match &self.allowed_country_codes {
            Some(allowed) => allowed.iter().any(|a| a.trim().eq_ignore_ascii_case(code)),
            None => true,
        }
    }

    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    #[cfg(feature = "json")]
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            crate::error::PickerError::NotFound(format!(
                "Config not found at {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&text)
    }
}

fn clamp_limit(limit: i64) -> usize {
    usize::try_from(limit.max(0)).unwrap_or(usize::MAX)
}

fn deserialize_clamped_limit<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    i64::deserialize(deserializer).map(clamp_limit)
}
