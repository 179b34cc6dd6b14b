// crates/countrypick-core/src/phone.rs
use crate::model::Country;

/// Normalize a calling code to the `+<digits>` form.
///
/// Blank input stays blank so callers can treat it as "unknown".
///
/// ```rust
/// use countrypick_core::phone::normalize_dial_code;
///
/// assert_eq!(normalize_dial_code("33"), "+33");
/// assert_eq!(normalize_dial_code(" +1 "), "+1");
/// assert_eq!(normalize_dial_code(""), "");
/// ```
pub fn normalize_dial_code(raw: &str) -> String {
    let digits = raw.trim().trim_start_matches('+').trim();
    if digits.is_empty() {
        String::new()
    } else {
        format!("+{digits}")
    }
}

/// Countries whose calling code starts with `prefix` (leading `+` optional),
/// in input order. Countries without a known dial code never match.
pub fn find_countries_by_dial_code<'a>(countries: &'a [Country], prefix: &str) -> Vec<&'a Country> {
    let prefix = prefix.trim().trim_start_matches('+');
    if prefix.is_empty() {
        return Vec::new();
    }
    countries
        .iter()
        .filter(|c| c.has_dial_code())
        .filter(|c| c.dial_code().trim_start_matches('+').starts_with(prefix))
        .collect()
}
