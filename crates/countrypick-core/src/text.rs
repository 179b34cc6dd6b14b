// crates/countrypick-core/src/text.rs
use std::cmp::Ordering;

/// Convert a string into a folded key suitable for matching and ordering.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Åland` -> `Aland`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use countrypick_core::text::fold_key;
///
/// assert_eq!(fold_key("Côte d’Ivoire"), "cote d'ivoire");
/// assert_eq!(fold_key("TÜRKIYE"), "turkiye");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after folding.
///
/// ```rust
/// use countrypick_core::text::equals_folded;
///
/// assert!(equals_folded("Réunion", "reunion"));
/// assert!(!equals_folded("Niger", "Nigeria"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Orders two display names on their folded form, falling back to the raw
/// strings so distinct names never compare equal.
pub fn compare_folded(a: &str, b: &str) -> Ordering {
    fold_key(a).cmp(&fold_key(b)).then_with(|| a.cmp(b))
}

/// Orders two ISO codes ignoring ASCII case.
pub fn compare_codes(a: &str, b: &str) -> Ordering {
    a.to_ascii_uppercase().cmp(&b.to_ascii_uppercase())
}

/// Splits a search query into folded tokens.
///
/// Returns an empty vector for blank input.
///
/// ```rust
/// use countrypick_core::text::tokenize;
///
/// assert_eq!(tokenize("  Újpest  Kör "), vec!["ujpest", "kor"]);
/// assert!(tokenize(" \t ").is_empty());
/// ```
pub fn tokenize(query: &str) -> Vec<String> {
    fold_key(query.trim())
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_key_strips_diacritics_and_case() {
        assert_eq!(fold_key("Åland Islands"), "aland islands");
        assert_eq!(fold_key("São Tomé & Príncipe"), "sao tome & principe");
    }

    #[test]
    fn compare_folded_ignores_accents_first() {
        assert_eq!(compare_folded("Éire", "Estonia"), Ordering::Less);
        assert_eq!(compare_folded("Éire", "Egypt"), Ordering::Greater);
        assert_eq!(compare_folded("Egypt", "egypt"), Ordering::Less);
    }

    #[test]
    fn compare_codes_is_case_insensitive() {
        assert_eq!(compare_codes("de", "DE"), Ordering::Equal);
        assert_eq!(compare_codes("at", "DE"), Ordering::Less);
    }
}
