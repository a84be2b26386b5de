// crates/countrypicker-core/src/config.rs

//! # Picker configuration
//!
//! [`PickerConfig`] is the plain set of options driving the engine. It can be
//! built in code, deserialized from JSON, or assembled from a
//! [`PickerDataSource`], in which case the engine supplies the documented
//! default for every option the data source leaves unanswered.

use crate::loader::CountryCatalog;
use crate::locale::Locale;
use crate::model::Country;
use crate::names::NameStyle;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// Fallback default selection when the locale's region is not in the catalog.
pub const DEFAULT_COUNTRY_CODE: &str = "NG";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Codes removed from the catalog before anything else happens.
    pub excluded_countries: BTreeSet<String>,
    /// Codes pinned at the top of the list, in the caller's order.
    pub preferred_countries: Vec<String>,
    /// Title of the pinned section. Both this and a non-empty
    /// `preferred_countries` are needed for the section to exist.
    pub preferred_section_title: Option<String>,
    pub show_only_preferred_section: bool,
    pub show_country_code_in_list: bool,
    pub show_phone_code_in_list: bool,
    pub show_country_code_in_view: bool,
    pub show_phone_code_in_view: bool,
    pub locale: Locale,
    pub name_style: NameStyle,
    pub default_country_code: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        PickerConfig {
            excluded_countries: BTreeSet::new(),
            preferred_countries: Vec::new(),
            preferred_section_title: None,
            show_only_preferred_section: false,
            show_country_code_in_list: false,
            show_phone_code_in_list: false,
            show_country_code_in_view: true,
            show_phone_code_in_view: true,
            locale: Locale::from_env(),
            name_style: NameStyle::default(),
            default_country_code: DEFAULT_COUNTRY_CODE.to_owned(),
        }
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

impl PickerConfig {
    /// Parse a configuration from JSON. Missing keys take their defaults.
    ///
    /// ```rust
    /// use countrypicker_core::PickerConfig;
    ///
    /// let cfg = PickerConfig::from_json(r#"{
    ///     "preferred_countries": ["ng", "GH"],
    ///     "preferred_section_title": "Preferred",
    ///     "locale": "en_NG"
    /// }"#).unwrap();
    /// assert_eq!(cfg.preferred_countries, ["NG", "GH"]);
    /// assert!(!cfg.show_only_preferred_section);
    /// ```
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let cfg: PickerConfig = serde_json::from_str(json)
            .map_err(|e| crate::PickerError::InvalidConfig(e.to_string()))?;
        Ok(cfg.normalized())
    }

    pub fn with_excluded<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excluded_countries = codes.into_iter().map(|c| normalize_code(c.as_ref())).collect();
        self
    }

    pub fn with_preferred<I, S>(mut self, title: impl Into<String>, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.preferred_section_title = Some(title.into());
        self.preferred_countries = codes.into_iter().map(|c| normalize_code(c.as_ref())).collect();
        self
    }

    pub fn show_only_preferred_section(mut self, on: bool) -> Self {
        self.show_only_preferred_section = on;
        self
    }

    pub fn show_country_code_in_list(mut self, on: bool) -> Self {
        self.show_country_code_in_list = on;
        self
    }

    pub fn show_phone_code_in_list(mut self, on: bool) -> Self {
        self.show_phone_code_in_list = on;
        self
    }

    pub fn show_country_code_in_view(mut self, on: bool) -> Self {
        self.show_country_code_in_view = on;
        self
    }

    pub fn show_phone_code_in_view(mut self, on: bool) -> Self {
        self.show_phone_code_in_view = on;
        self
    }

    pub fn with_locale(mut self, locale: impl Into<Locale>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_name_style(mut self, style: NameStyle) -> Self {
        self.name_style = style;
        self
    }

    pub fn with_default_country_code(mut self, code: &str) -> Self {
        self.default_country_code = normalize_code(code);
        self
    }

    /// The preferred section's title and codes, if both are present.
    pub fn preferred_section(&self) -> Option<(&str, &[String])> {
        match &self.preferred_section_title {
            Some(title) if !self.preferred_countries.is_empty() => {
                Some((title.as_str(), self.preferred_countries.as_slice()))
            }
            _ => None,
        }
    }

    /// Upper-case every code; used after deserialization.
    pub fn normalized(mut self) -> Self {
        self.excluded_countries = self
            .excluded_countries
            .iter()
            .map(|c| normalize_code(c))
            .collect();
        self.preferred_countries = self
            .preferred_countries
            .iter()
            .map(|c| normalize_code(c))
            .collect();
        self.default_country_code = normalize_code(&self.default_country_code);
        self
    }

    /// A copy of this configuration checked against `catalog`.
    ///
    /// Unknown excluded or preferred codes are ignored, as are preferred codes
    /// that are also excluded and repeated preferred codes.
    pub fn validated(&self, catalog: &CountryCatalog) -> Self {
        let mut cfg = self.clone().normalized();

        cfg.excluded_countries.retain(|code| {
            let known = catalog.contains(code);
            if !known {
                debug!(code = code.as_str(), "ignoring unknown excluded country");
            }
            known
        });

        let mut seen = HashSet::new();
        let excluded = &cfg.excluded_countries;
        cfg.preferred_countries.retain(|code| {
            if !catalog.contains(code) {
                debug!(code = code.as_str(), "ignoring unknown preferred country");
                return false;
            }
            !excluded.contains(code) && seen.insert(code.clone())
        });

        cfg
    }

    /// Assemble a configuration from an optional data source, supplying the
    /// engine's defaults for every unanswered option.
    pub fn from_data_source(source: Option<&dyn PickerDataSource>) -> Self {
        let defaults = PickerConfig::default();
        let Some(ds) = source else {
            return defaults;
        };

        PickerConfig {
            excluded_countries: ds
                .excluded_countries()
                .map(|codes| codes.iter().map(|c| normalize_code(c)).collect())
                .unwrap_or(defaults.excluded_countries),
            preferred_countries: ds
                .preferred_countries()
                .map(|cs| cs.iter().map(|c| c.code().to_owned()).collect())
                .unwrap_or(defaults.preferred_countries),
            preferred_section_title: ds.preferred_section_title(),
            show_only_preferred_section: ds
                .show_only_preferred_section()
                .unwrap_or(defaults.show_only_preferred_section),
            show_country_code_in_list: ds
                .show_country_code_in_list()
                .unwrap_or(defaults.show_country_code_in_list),
            show_phone_code_in_list: ds
                .show_phone_code_in_list()
                .unwrap_or(defaults.show_phone_code_in_list),
            show_country_code_in_view: ds
                .show_country_code_in_view()
                .unwrap_or(defaults.show_country_code_in_view),
            show_phone_code_in_view: ds
                .show_phone_code_in_view()
                .unwrap_or(defaults.show_phone_code_in_view),
            locale: ds.locale().unwrap_or(defaults.locale),
            name_style: ds.name_style().unwrap_or(defaults.name_style),
            default_country_code: ds
                .default_country_code()
                .map(|c| normalize_code(&c))
                .unwrap_or(defaults.default_country_code),
        }
    }
}

/// Capability interface through which a host answers configuration
/// questions.
///
/// Every accessor returns `Option`; `None` means "use the engine default"
/// (see [`PickerConfig::from_data_source`]). Defaults:
///
/// | accessor | default |
/// |---|---|
/// | `preferred_countries` | empty |
/// | `preferred_section_title` | none |
/// | `show_only_preferred_section` | `false` |
/// | `excluded_countries` | empty |
/// | `show_country_code_in_list` / `show_phone_code_in_list` | `false` |
/// | `show_country_code_in_view` / `show_phone_code_in_view` | `true` |
/// | `locale` | [`Locale::from_env`] |
/// | `name_style` | [`NameStyle::Localized`] |
/// | `default_country_code` | [`DEFAULT_COUNTRY_CODE`] |
pub trait PickerDataSource {
    fn preferred_countries(&self) -> Option<Vec<Country>>;
    fn preferred_section_title(&self) -> Option<String>;
    fn show_only_preferred_section(&self) -> Option<bool>;
    fn excluded_countries(&self) -> Option<Vec<String>>;
    fn show_country_code_in_list(&self) -> Option<bool>;
    fn show_phone_code_in_list(&self) -> Option<bool>;
    fn show_country_code_in_view(&self) -> Option<bool>;
    fn show_phone_code_in_view(&self) -> Option<bool>;
    fn locale(&self) -> Option<Locale>;
    fn name_style(&self) -> Option<NameStyle>;
    fn default_country_code(&self) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CountryCatalog {
        CountryCatalog::from_countries([
            Country::new("Ghana", "GH", "+233"),
            Country::new("Germany", "DE", "+49"),
            Country::new("Nigeria", "NG", "+234"),
        ])
    }

    #[test]
    fn preferred_section_needs_title_and_codes() {
        let base = PickerConfig::default();
        assert!(base.preferred_section().is_none());

        let mut only_title = base.clone();
        only_title.preferred_section_title = Some("Top".into());
        assert!(only_title.preferred_section().is_none());

        let mut only_codes = base.clone();
        only_codes.preferred_countries = vec!["NG".into()];
        assert!(only_codes.preferred_section().is_none());

        let both = base.with_preferred("Top", ["ng"]);
        assert_eq!(both.preferred_section(), Some(("Top", &["NG".to_string()][..])));
    }

    #[test]
    fn validation_drops_unknown_and_excluded_codes() {
        let cfg = PickerConfig::default()
            .with_excluded(["de", "ZZ"])
            .with_preferred("Top", ["XX", "DE", "ng", "NG", "gh"])
            .validated(&catalog());

        assert_eq!(cfg.excluded_countries, BTreeSet::from(["DE".to_string()]));
        assert_eq!(cfg.preferred_countries, ["NG", "GH"]);
    }

    #[cfg(feature = "json")]
    #[test]
    fn wrongly_typed_json_field_is_invalid_config() {
        let err = PickerConfig::from_json(r#"{"show_only_preferred_section": "yes"}"#).unwrap_err();
        assert!(matches!(err, crate::PickerError::InvalidConfig(_)), "got {err}");
        assert!(!err.is_catalog_unavailable());
    }

    #[test]
    fn missing_data_source_yields_defaults() {
        let cfg = PickerConfig::from_data_source(None);
        assert!(cfg.preferred_section().is_none());
        assert!(cfg.show_country_code_in_view && cfg.show_phone_code_in_view);
        assert!(!cfg.show_country_code_in_list && !cfg.show_phone_code_in_list);
        assert_eq!(cfg.default_country_code, DEFAULT_COUNTRY_CODE);
    }
}
