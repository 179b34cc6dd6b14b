// crates/countrypick-core/src/recorder.rs
use crate::config::PickerConfig;

/// Put `code` at the front of the recent list.
///
/// Existing entries equal to `code` (ignoring ASCII case) are removed, the
/// upper-cased code is inserted first and the list is cut to
/// `recent_countries_limit`. When recents are disabled, or `code` is blank,
/// `current` is returned unchanged.
///
/// Persisting the result and invalidating cached sections is the caller's job.
///
/// ```rust
/// use countrypick_core::recorder::record_selection;
/// use countrypick_core::PickerConfig;
///
/// let cfg = PickerConfig::default().with_recent_limit(3);
/// let mut recents = Vec::new();
/// for code in ["FR", "US", "fr", "DE"] {
///     recents = record_selection(code, &cfg, &recents);
/// }
/// assert_eq!(recents, ["DE", "FR", "US"]);
/// ```
pub fn record_selection(code: &str, config: &PickerConfig, current: &[String]) -> Vec<String> {
    let code = code.trim();
    if !config.recents_enabled() || code.is_empty() {
        return current.to_vec();
    }

    let mut recents: Vec<String> = current
        .iter()
        .filter(|c| !c.trim().eq_ignore_ascii_case(code))
        .cloned()
        .collect();
    recents.insert(0, code.to_ascii_uppercase());
    recents.truncate(config.recent_countries_limit);
    recents
}
