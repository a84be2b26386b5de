// crates/countrypicker-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by the picker engine.
///
/// Everything else (malformed dataset entries, unknown codes in the
/// configuration, an incomplete preferred section) is recovered locally and
/// never reaches the caller.
#[derive(Debug, Error)]
pub enum PickerError {
    /// The reference dataset could not be read or parsed at all.
    #[error("country catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// A default selection was requested but there are no usable countries.
    #[error("no default country: the catalog has no usable countries")]
    NoDefaultCountry,

    /// A serialized picker configuration could not be parsed.
    #[error("invalid picker configuration: {0}")]
    InvalidConfig(String),
}

impl PickerError {
    /// True for the fatal dataset error raised while building a catalog.
    pub fn is_catalog_unavailable(&self) -> bool {
        matches!(self, PickerError::CatalogUnavailable(_))
    }
}

impl From<std::io::Error> for PickerError {
    fn from(e: std::io::Error) -> Self {
        PickerError::CatalogUnavailable(format!("I/O error: {e}"))
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for PickerError {
    fn from(e: serde_json::Error) -> Self {
        PickerError::CatalogUnavailable(format!("invalid JSON: {e}"))
    }
}

pub type Result<T> = std::result::Result<T, PickerError>;
