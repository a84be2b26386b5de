#![allow(dead_code)]

use countrypicker_core::{Country, CountryCatalog, Locale, PickerConfig};
use std::sync::Arc;

/// The three-country catalog used throughout the examples.
pub fn gdn_catalog() -> Arc<CountryCatalog> {
    Arc::new(CountryCatalog::from_countries([
        Country::new("Ghana", "GH", "+233"),
        Country::new("Germany", "DE", "+49").with_translation("de", "Deutschland"),
        Country::new("Nigeria", "NG", "+234"),
    ]))
}

/// Default config pinned to a fixed locale so tests don't depend on `LANG`.
pub fn config() -> PickerConfig {
    PickerConfig::default().with_locale(Locale::new("en", Some("US")))
}

pub fn codes(countries: &[Country]) -> Vec<&str> {
    countries.iter().map(Country::code).collect()
}
