// crates/countrypicker-core/src/text.rs

//! Text folding helpers shared by sectioning and search.
//!
//! Two families live here:
//! - [`fold_key`]: accent-insensitive, case-insensitive key (via `deunicode`),
//!   used as the primary collation key when sorting names.
//! - [`lowercase_in`] / [`uppercase_in`]: Unicode case mapping tailored to a
//!   [`Locale`], used for section titles and prefix matching.

use crate::locale::Locale;

/// Convert a string into a folded key suitable for sorting and comparison.
///
/// This performs:
/// 1) Transliterate Unicode → ASCII (e.g. `Åland` -> `Aland`)
/// 2) Normalize to lowercase
///
/// ```rust
/// use countrypicker_core::text::fold_key;
///
/// assert_eq!(fold_key("Åland Islands"), "aland islands");
/// assert_eq!(fold_key("Curaçao"), "curacao");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Lower-case `s` following the case rules of `locale`.
pub fn lowercase_in(s: &str, locale: &Locale) -> String {
    if !locale.has_turkic_casing() {
        return s.to_lowercase();
    }
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            'I' => out.push('ı'),
            'İ' => out.push('i'),
            _ => out.extend(ch.to_lowercase()),
        }
    }
    out
}

/// Upper-case `s` following the case rules of `locale`.
pub fn uppercase_in(s: &str, locale: &Locale) -> String {
    if !locale.has_turkic_casing() {
        return s.to_uppercase();
    }
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            'i' => out.push('İ'),
            'ı' => out.push('I'),
            _ => out.extend(ch.to_uppercase()),
        }
    }
    out
}

/// The case-normalized first letter of `s`, used as a section title.
///
/// Returns `None` for an empty string. When upper-casing would expand the
/// letter into several characters (`ß` → `SS`) the letter is kept as is, so
/// titles are always a single character.
///
/// ```rust
/// use countrypicker_core::{text::first_letter, Locale};
///
/// let en = Locale::new("en", None);
/// assert_eq!(first_letter("ghana", &en).as_deref(), Some("G"));
/// assert_eq!(first_letter("Åland", &en).as_deref(), Some("Å"));
/// assert_eq!(first_letter("", &en), None);
/// ```
pub fn first_letter(s: &str, locale: &Locale) -> Option<String> {
    let first = s.chars().next()?;
    let mut buf = [0u8; 4];
    let upper = uppercase_in(first.encode_utf8(&mut buf), locale);
    if upper.chars().count() == 1 {
        Some(upper)
    } else {
        Some(first.to_string())
    }
}

/// Case-insensitive prefix test under `locale`.
pub fn starts_with_folded(haystack: &str, prefix: &str, locale: &Locale) -> bool {
    lowercase_in(haystack, locale).starts_with(&lowercase_in(prefix, locale))
}
