// crates/countrypicker-core/src/picker.rs

//! # CountryPicker
//!
//! The facade a rendering layer talks to. It owns one picker's state (the
//! validated configuration, the usable countries, the current [`Sections`]
//! snapshot, the search query and results, and the selection) and shares
//! the read-only [`CountryCatalog`] with any other picker through an `Arc`.
//!
//! Rendering layers borrow the picker; they never own it.

use crate::config::{PickerConfig, PickerDataSource};
use crate::error::Result;
use crate::labels;
use crate::loader::CountryCatalog;
use crate::model::Country;
use crate::names::NameResolver;
use crate::search::search;
use crate::sections::{build_sections, Sections};
use crate::selection::{self, PickerDelegate, SelectionModel};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
pub struct CountryPicker {
    catalog: Arc<CountryCatalog>,
    config: PickerConfig,
    usable: Vec<Country>,
    sections: Sections,
    query: String,
    search_results: Vec<Country>,
    selection: SelectionModel,
}

impl CountryPicker {
    /// Build a picker over `catalog`. Unknown codes in `config` are ignored.
    pub fn new(catalog: Arc<CountryCatalog>, config: PickerConfig) -> Self {
        let mut picker = CountryPicker {
            catalog,
            config: PickerConfig::default(),
            usable: Vec::new(),
            sections: Sections::default(),
            query: String::new(),
            search_results: Vec::new(),
            selection: SelectionModel::new(),
        };
        picker.set_config(config);
        picker
    }

    /// Build a picker whose options come from a data source; unanswered
    /// options take the engine defaults.
    pub fn with_data_source(catalog: Arc<CountryCatalog>, source: &dyn PickerDataSource) -> Self {
        Self::new(catalog, PickerConfig::from_data_source(Some(source)))
    }

    /// Build a picker over the bundled catalog.
    #[cfg(feature = "json")]
    pub fn bundled(config: PickerConfig) -> Result<Self> {
        Ok(Self::new(CountryCatalog::load()?, config))
    }

    /// Replace the configuration, rebuild sections and re-run the active query.
    ///
    /// An explicit selection that the new configuration excludes is dropped;
    /// the default policy applies again.
    pub fn set_config(&mut self, config: PickerConfig) {
        self.config = config.validated(&self.catalog);
        self.usable = self.catalog.usable(&self.config.excluded_countries);
        if let Some(stale) = self
            .selection
            .explicit()
            .filter(|c| !self.usable.contains(c))
        {
            debug!(code = stale.code(), "selected country is no longer usable, selection cleared");
            self.selection.clear();
        }
        self.sections = build_sections(&self.usable, &self.config);
        self.search_results = search(&self.query, &self.sections, &self.config);
        debug!(
            usable = self.usable.len(),
            sections = self.sections.section_count(),
            locale = %self.config.locale,
            "picker configured"
        );
    }

    /// Re-read every option from `source`.
    pub fn reload_from(&mut self, source: &dyn PickerDataSource) {
        self.set_config(PickerConfig::from_data_source(Some(source)));
    }

    pub fn set_delegate(&mut self, delegate: Box<dyn PickerDelegate>) {
        self.selection.set_delegate(delegate);
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<CountryCatalog> {
        &self.catalog
    }

    /// Catalog entries left after exclusions, in dataset order.
    pub fn usable_countries(&self) -> &[Country] {
        &self.usable
    }

    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    // -----------------------------------------------------------------------
    // Sectioned display
    // -----------------------------------------------------------------------

    pub fn section_count(&self) -> usize {
        self.sections.section_count()
    }

    pub fn row_count(&self, section: usize) -> usize {
        self.sections.row_count(section)
    }

    pub fn title(&self, section: usize) -> Option<&str> {
        self.sections.title(section)
    }

    pub fn item_at(&self, section: usize, row: usize) -> Option<&Country> {
        self.sections.item_at(section, row)
    }

    pub fn index_titles(&self) -> Vec<&str> {
        self.sections.index_titles()
    }

    // -----------------------------------------------------------------------
    // Search display
    // -----------------------------------------------------------------------

    /// True while the query is non-empty; the caller then shows the flat
    /// result list instead of the sections.
    pub fn is_search_mode(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn search_result_count(&self) -> usize {
        self.search_results.len()
    }

    pub fn search_item_at(&self, row: usize) -> Option<&Country> {
        self.search_results.get(row)
    }

    pub fn search_results(&self) -> &[Country] {
        &self.search_results
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    pub fn on_query_changed(&mut self, text: &str) {
        self.query = text.to_owned();
        self.search_results = search(&self.query, &self.sections, &self.config);
        debug!(query = text, results = self.search_results.len(), "search updated");
    }

    /// Select the country shown at `(section, row)`. Returns it, or `None`
    /// (and selects nothing) when the position is out of range.
    pub fn on_select(&mut self, section: usize, row: usize) -> Option<Country> {
        let country = self.sections.item_at(section, row)?.clone();
        self.select(country.clone());
        Some(country)
    }

    /// Select the search result at `row`.
    pub fn on_select_search_result(&mut self, row: usize) -> Option<Country> {
        let country = self.search_results.get(row)?.clone();
        self.select(country.clone());
        Some(country)
    }

    /// Select `country` and notify the delegate.
    pub fn select(&mut self, country: Country) {
        self.selection.select(country);
    }

    /// Forget the explicit selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // -----------------------------------------------------------------------
    // Selection & lookups
    // -----------------------------------------------------------------------

    /// The selected country, or the default one when nothing was picked.
    pub fn selected_country(&self) -> Result<&Country> {
        self.selection.selected(&self.usable, &self.config)
    }

    pub fn is_selected(&self, country: &Country) -> bool {
        self.selected_country().is_ok_and(|c| c == country)
    }

    pub fn country_by_name(&self, name: &str) -> Option<&Country> {
        selection::by_name(&self.usable, name)
    }

    pub fn country_by_code(&self, code: &str) -> Option<&Country> {
        selection::by_code(&self.usable, code)
    }

    pub fn country_by_phone_code(&self, phone_code: &str) -> Option<&Country> {
        selection::by_phone_code(&self.usable, phone_code)
    }

    // -----------------------------------------------------------------------
    // Labels
    // -----------------------------------------------------------------------

    pub fn display_name<'a>(&self, country: &'a Country) -> &'a str {
        self.config
            .name_style
            .display_name(country, &self.config.locale)
    }

    pub fn row_label(&self, country: &Country) -> String {
        labels::row_label(country, self.display_name(country), &self.config)
    }

    /// Summary label of the selected country.
    pub fn summary_label(&self) -> Result<String> {
        let country = self.selected_country()?;
        Ok(labels::summary_label(country, &self.config))
    }
}
