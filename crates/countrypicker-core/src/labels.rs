// crates/countrypicker-core/src/labels.rs

//! Label text for list rows and the compact selected-country summary.

use crate::config::PickerConfig;
use crate::model::Country;

/// Row text: the display name, followed by `(CODE)` and/or `(+DIAL)` when
/// the matching list toggles are on.
///
/// ```rust
/// use countrypicker_core::{labels::row_label, Country, PickerConfig};
///
/// let ng = Country::new("Nigeria", "NG", "+234");
/// let cfg = PickerConfig::default();
/// assert_eq!(row_label(&ng, "Nigeria", &cfg), "Nigeria");
///
/// let cfg = cfg.show_phone_code_in_list(true);
/// assert_eq!(row_label(&ng, "Nigeria", &cfg), "Nigeria (+234)");
///
/// let cfg = cfg.show_country_code_in_list(true);
/// assert_eq!(row_label(&ng, "Nigeria", &cfg), "Nigeria (NG) (+234)");
/// ```
pub fn row_label(country: &Country, display_name: &str, config: &PickerConfig) -> String {
    let mut label = display_name.to_owned();
    if config.show_country_code_in_list {
        label.push_str(&format!(" ({})", country.code()));
    }
    if config.show_phone_code_in_list {
        label.push_str(&format!(" ({})", country.phone_code()));
    }
    label
}

/// Compact summary of the selected country: `(NG) +234`, `NG`, `+234`, or an
/// empty string, depending on the view toggles.
pub fn summary_label(country: &Country, config: &PickerConfig) -> String {
    match (config.show_country_code_in_view, config.show_phone_code_in_view) {
        (true, true) => format!("({}) {}", country.code(), country.phone_code()),
        (true, false) => country.code().to_owned(),
        (false, true) => country.phone_code().to_owned(),
        (false, false) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_follows_view_toggles() {
        let gh = Country::new("Ghana", "GH", "+233");
        let cfg = PickerConfig::default();
        assert_eq!(summary_label(&gh, &cfg), "(GH) +233");
        assert_eq!(summary_label(&gh, &cfg.clone().show_phone_code_in_view(false)), "GH");
        assert_eq!(summary_label(&gh, &cfg.clone().show_country_code_in_view(false)), "+233");
        let none = cfg.show_country_code_in_view(false).show_phone_code_in_view(false);
        assert_eq!(summary_label(&gh, &none), "");
    }
}
