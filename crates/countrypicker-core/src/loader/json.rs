// crates/countrypicker-core/src/loader/json.rs

// ---------------------------------------------------------------------------
// FILE GUARD: this module is only compiled with the 'json' feature.
// ---------------------------------------------------------------------------

use super::{common_io, CountryCatalog};
use crate::error::Result;
use crate::model::CountryRaw;
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing::debug;

impl CountryCatalog {
    /// Parse a catalog from dataset JSON text.
    ///
    /// The document must be a JSON array; anything else fails with
    /// [`PickerError::CatalogUnavailable`](crate::PickerError::CatalogUnavailable).
    /// Entries that are not objects, or that lack `name`, `code` or
    /// `dial_code`, are skipped.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<Value> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// Parse a catalog from any reader yielding dataset JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<Value> = serde_json::from_reader(reader)?;
        Ok(Self::from_records(records))
    }

    /// Load a dataset file. `.gz` files are decompressed on the fly when the
    /// `compact` feature is enabled.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let catalog = Self::from_reader(reader)?;
        debug!(path = %path.display(), countries = catalog.len(), "catalog loaded from file");
        Ok(catalog)
    }

    fn from_records(records: Vec<Value>) -> Self {
        let total = records.len();
        let countries = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| {
                let parsed = if record.is_object() {
                    serde_json::from_value::<CountryRaw>(record)
                        .ok()
                        .and_then(CountryRaw::into_country)
                } else {
                    None
                };
                if parsed.is_none() {
                    debug!(index, "malformed country record skipped");
                }
                parsed
            });

        let catalog = Self::from_countries(countries);
        debug!(records = total, countries = catalog.len(), "country catalog built");
        catalog
    }
}
