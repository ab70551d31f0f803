// crates/country-core/src/text.rs

/// Convert a string into a folded key for case- and accent-insensitive matching.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Réunion` -> `Reunion`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use country_core::text::fold_key;
///
/// assert_eq!(fold_key("Réunion"), "reunion");
/// assert_eq!(fold_key("Åland Islands"), "aland islands");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after folding with [`fold_key`].
///
/// ```rust
/// use country_core::text::equals_folded;
///
/// assert!(equals_folded("CURAÇAO", "curacao"));
/// assert!(!equals_folded("Peru", "Paraguay"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// True when the folded `haystack` contains the folded `needle`.
///
/// An empty needle matches everything.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    let needle = fold_key(needle);
    needle.is_empty() || fold_key(haystack).contains(&needle)
}

/// Treat empty or whitespace-only strings as absent.
pub(crate) fn non_blank(s: Option<String>) -> Option<String> {
    s.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == v.len() {
            Some(v)
        } else {
            Some(trimmed.to_string())
        }
    })
}
