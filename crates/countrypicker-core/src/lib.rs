// crates/countrypicker-core/src/lib.rs

//! # countrypicker-core
//!
//! The list-preparation and search engine behind a country picker: it turns
//! a flat reference list of countries into a sectioned, sorted, filterable
//! and locale-aware index, and tracks the user's pick. Rendering is left to
//! the host; a list view only needs `section_count`, `row_count`, `title`,
//! `item_at` and, while searching, `search_result_count` / `search_item_at`.
//!
//! ```rust
//! use countrypicker_core::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let config = PickerConfig::default()
//!     .with_locale("en_NG")
//!     .with_preferred("Preferred", ["NG", "GH"]);
//! let mut picker = CountryPicker::bundled(config)?;
//!
//! assert_eq!(picker.title(0), Some("Preferred"));
//! assert_eq!(picker.selected_country()?.code(), "NG");
//!
//! picker.on_query_changed("gha");
//! assert_eq!(picker.search_item_at(0).map(|c| c.code()), Some("GH"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod labels;
pub mod loader;
pub mod locale;
pub mod model;
pub mod names;
pub mod picker;
pub mod prelude;
pub mod search;
pub mod sections;
pub mod selection;
pub mod text;

// Re-exports
pub use crate::config::{PickerConfig, PickerDataSource, DEFAULT_COUNTRY_CODE};
pub use crate::error::{PickerError, Result};
pub use crate::loader::CountryCatalog;
pub use crate::locale::Locale;
pub use crate::model::{Country, CountryRaw};
pub use crate::names::{NameResolver, NameStyle};
pub use crate::picker::CountryPicker;
pub use crate::search::{search, search_with};
pub use crate::sections::{build_sections, build_sections_with, Section, Sections};
pub use crate::selection::{PickerDelegate, SelectionModel};
