// crates/countrypicker-core/src/search.rs

//! # Search
//!
//! Prefix search over a [`Sections`] snapshot.
//!
//! The candidate pool is a single bucket: the preferred section when the
//! picker shows only that section, otherwise the alphabetical section named
//! by the query's first letter. Names in other buckets cannot start with the
//! query, so scanning one bucket gives the same name matches as scanning the
//! whole list.

use crate::config::PickerConfig;
use crate::model::Country;
use crate::names::NameResolver;
use crate::sections::Sections;
use crate::text::{first_letter, starts_with_folded};

/// Countries matching `query`, in the candidate pool's order.
///
/// A country matches when its display name starts with `query`
/// (case-insensitive, under `config.locale`) or, with
/// `show_country_code_in_list` on, when its code does. An empty query yields
/// an empty result: the caller is expected to show all sections instead.
///
/// ```rust
/// use countrypicker_core::{build_sections, search, Country, PickerConfig};
///
/// let countries = [
///     Country::new("Ghana", "GH", "+233"),
///     Country::new("Germany", "DE", "+49"),
///     Country::new("Nigeria", "NG", "+234"),
/// ];
/// let cfg = PickerConfig::default();
/// let sections = build_sections(&countries, &cfg);
///
/// let found = search("g", &sections, &cfg);
/// let hits: Vec<&str> = found.iter().map(|c| c.code()).collect();
/// assert_eq!(hits, ["DE", "GH"]);
/// assert!(search("", &sections, &cfg).is_empty());
/// ```
pub fn search(query: &str, sections: &Sections, config: &PickerConfig) -> Vec<Country> {
    search_with(query, sections, config, &config.name_style)
}

/// Same as [`search`] with a caller-supplied [`NameResolver`].
pub fn search_with<R: NameResolver + ?Sized>(
    query: &str,
    sections: &Sections,
    config: &PickerConfig,
    resolver: &R,
) -> Vec<Country> {
    if query.is_empty() {
        return Vec::new();
    }

    let locale = &config.locale;

    candidate_pool(query, sections, config)
        .iter()
        .filter(|c| {
            starts_with_folded(resolver.display_name(c, locale), query, locale)
                || (config.show_country_code_in_list
                    && starts_with_folded(c.code(), query, locale))
        })
        .cloned()
        .collect()
}

/// The bucket a query is matched against.
pub fn candidate_pool<'a>(
    query: &str,
    sections: &'a Sections,
    config: &PickerConfig,
) -> &'a [Country] {
    if config.show_only_preferred_section {
        if let Some(preferred) = sections.preferred() {
            return &preferred.countries;
        }
    }
    first_letter(query, &config.locale)
        .and_then(|title| sections.alphabetical(&title))
        .unwrap_or(&[])
}
