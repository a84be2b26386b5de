//! countrypicker prelude: bring common types and traits into scope.

pub use crate::config::{PickerConfig, PickerDataSource, DEFAULT_COUNTRY_CODE};
pub use crate::error::{PickerError, Result};
pub use crate::loader::CountryCatalog;
pub use crate::locale::Locale;
pub use crate::model::Country;
pub use crate::names::{NameResolver, NameStyle};
pub use crate::picker::CountryPicker;
pub use crate::search::search;
pub use crate::sections::{build_sections, Section, Sections};
pub use crate::selection::{PickerDelegate, SelectionModel};
