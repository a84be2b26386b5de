// crates/countrypicker-core/src/selection.rs
use crate::config::PickerConfig;
use crate::error::{PickerError, Result};
use crate::model::Country;
use std::fmt;
use tracing::debug;

/// Receives selection notifications.
///
/// Any `FnMut(&Country)` closure is a delegate.
pub trait PickerDelegate {
    fn on_country_selected(&mut self, country: &Country);
}

impl<F: FnMut(&Country)> PickerDelegate for F {
    fn on_country_selected(&mut self, country: &Country) {
        self(country)
    }
}

/// Tracks the selected country and notifies the delegate on every pick.
#[derive(Default)]
pub struct SelectionModel {
    selected: Option<Country>,
    delegate: Option<Box<dyn PickerDelegate>>,
}

impl fmt::Debug for SelectionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionModel")
            .field("selected", &self.selected)
            .field("delegate", &self.delegate.is_some())
            .finish()
    }
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_delegate(&mut self, delegate: Box<dyn PickerDelegate>) {
        self.delegate = Some(delegate);
    }

    /// The explicitly selected country, if any.
    pub fn explicit(&self) -> Option<&Country> {
        self.selected.as_ref()
    }

    /// The selected country, applying the default-selection policy when
    /// nothing was picked yet. See [`default_country`].
    pub fn selected<'a>(
        &'a self,
        usable: &'a [Country],
        config: &PickerConfig,
    ) -> Result<&'a Country> {
        match &self.selected {
            Some(country) => Ok(country),
            None => default_country(usable, config),
        }
    }

    /// Store `country` as the selection, then notify the delegate. Never
    /// fails; selecting the same country again notifies again.
    pub fn select(&mut self, country: Country) {
        debug!(code = country.code(), "country selected");
        let selected = self.selected.insert(country);
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.on_country_selected(selected);
        }
    }

    /// Forget the explicit selection; the default policy applies again.
    pub fn clear(&mut self) {
        self.selected = None;
    }
}

/// Default selection: the country of the locale's region, else
/// `config.default_country_code`, else the first usable country.
///
/// Fails with [`PickerError::NoDefaultCountry`] only when `usable` is empty.
pub fn default_country<'a>(usable: &'a [Country], config: &PickerConfig) -> Result<&'a Country> {
    config
        .locale
        .region()
        .and_then(|region| by_code(usable, region))
        .or_else(|| by_code(usable, &config.default_country_code))
        .or_else(|| usable.first())
        .ok_or(PickerError::NoDefaultCountry)
}

/// First country whose canonical name equals `name` exactly.
pub fn by_name<'a>(countries: &'a [Country], name: &str) -> Option<&'a Country> {
    countries.iter().find(|c| c.name() == name)
}

/// First country with ISO code `code`, case-insensitive.
pub fn by_code<'a>(countries: &'a [Country], code: &str) -> Option<&'a Country> {
    let code = code.trim();
    countries
        .iter()
        .find(|c| c.code().eq_ignore_ascii_case(code))
}

/// First country with dial code `phone_code`; the leading "+" is optional.
///
/// Several countries share some dial codes (`+1`, `+44`, `+7`): the first in
/// dataset order wins.
pub fn by_phone_code<'a>(countries: &'a [Country], phone_code: &str) -> Option<&'a Country> {
    let wanted = phone_code.trim().trim_start_matches('+');
    if wanted.is_empty() {
        return None;
    }
    countries
        .iter()
        .find(|c| c.phone_code().trim_start_matches('+') == wanted)
}
