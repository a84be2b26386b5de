// crates/countrypicker-core/src/loader/mod.rs

//! # Country Catalog
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates record
//! parsing to the JSON module. The bundled dataset is embedded in the
//! binary and parsed once per process.

use crate::error::Result;
use crate::model::Country;
use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;
use tracing::warn;

#[cfg(feature = "json")]
mod common_io;
#[cfg(feature = "json")]
mod json;

#[cfg(feature = "json")]
use once_cell::sync::OnceCell;
#[cfg(feature = "json")]
use std::sync::Arc;

#[cfg(feature = "json")]
static BUNDLED_CATALOG: OnceCell<Arc<CountryCatalog>> = OnceCell::new();

/// The bundled dataset, embedded at compile time.
#[cfg(feature = "json")]
const BUNDLED_DATASET: &str = include_str!("../../data/CountryCodes.json");

/// The immutable reference list of countries.
///
/// Codes are unique: when a dataset repeats a code the first entry wins.
#[derive(Clone, Debug, Default)]
pub struct CountryCatalog {
    countries: Vec<Country>,
}

impl CountryCatalog {
    /// Build a catalog from already-parsed countries, keeping dataset order
    /// and dropping later duplicates of a code.
    pub fn from_countries(countries: impl IntoIterator<Item = Country>) -> Self {
        let mut seen = HashSet::new();
        let countries = countries
            .into_iter()
            .filter(|c| {
                let fresh = seen.insert(c.code().to_owned());
                if !fresh {
                    warn!(code = c.code(), name = c.name(), "duplicate country code skipped");
                }
                fresh
            })
            .collect();
        CountryCatalog { countries }
    }

    /// Load the bundled catalog.
    ///
    /// The dataset is parsed on first use; every later call returns the very
    /// same `Arc`.
    ///
    /// ```rust
    /// use countrypicker_core::CountryCatalog;
    /// use std::sync::Arc;
    ///
    /// let a = CountryCatalog::load().unwrap();
    /// let b = CountryCatalog::load().unwrap();
    /// assert!(Arc::ptr_eq(&a, &b));
    /// assert_eq!(a.get("ng").map(|c| c.name()), Some("Nigeria"));
    /// ```
    #[cfg(feature = "json")]
    pub fn load() -> Result<Arc<Self>> {
        BUNDLED_CATALOG
            .get_or_try_init(|| Self::from_json_str(BUNDLED_DATASET).map(Arc::new))
            .cloned()
    }

    /// Directory holding the dataset shipped with this crate.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "CountryCodes.json"
    }

    /// All countries, in dataset order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Find a country by ISO code, case-insensitive (e.g. "DE", "us").
    pub fn get(&self, code: &str) -> Option<&Country> {
        let code = code.trim();
        self.countries
            .iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Countries whose code is not in `excluded`, in dataset order.
    ///
    /// `excluded` is expected to hold upper-case codes, as produced by
    /// [`PickerConfig`](crate::PickerConfig).
    pub fn usable(&self, excluded: &BTreeSet<String>) -> Vec<Country> {
        self.countries
            .iter()
            .filter(|c| !excluded.contains(c.code()))
            .cloned()
            .collect()
    }
}
