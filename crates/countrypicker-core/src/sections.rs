// crates/countrypicker-core/src/sections.rs

//! # Sectioner
//!
//! Turns a flat country list into the sectioned index a list view renders:
//! alphabetical buckets keyed by the first letter of each display name,
//! optionally preceded by a caller-ordered "preferred" section.
//!
//! The result is an immutable [`Sections`] snapshot. It is rebuilt from
//! scratch whenever the configuration changes and compares by value, which
//! keeps the engine trivially testable.

use crate::config::PickerConfig;
use crate::locale::Locale;
use crate::model::Country;
use crate::names::NameResolver;
use crate::text::{first_letter, fold_key, lowercase_in};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use tracing::trace;

/// A titled group of countries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub countries: Vec<Country>,
}

/// Sectioned snapshot produced by [`build_sections`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Sections {
    sections: Vec<Section>,
    /// True when `sections[0]` is the preferred section.
    has_preferred: bool,
}

/// Collation key: accent-folded name, then locale-lowered name, then code.
type SortKey = (String, String, String);

fn sort_key(display_name: &str, country: &Country, locale: &Locale) -> SortKey {
    (
        fold_key(display_name),
        lowercase_in(display_name, locale),
        country.code().to_owned(),
    )
}

/// Group and sort `countries` according to `config`, naming them with
/// `config.name_style`.
///
/// ```rust
/// use countrypicker_core::{build_sections, Country, PickerConfig};
///
/// let countries = [
///     Country::new("Ghana", "GH", "+233"),
///     Country::new("Germany", "DE", "+49"),
///     Country::new("Nigeria", "NG", "+234"),
/// ];
/// let sections = build_sections(&countries, &PickerConfig::default());
/// assert_eq!(sections.titles(), ["G", "N"]);
///
/// let names: Vec<&str> = sections.get("G").unwrap().iter().map(|c| c.name()).collect();
/// assert_eq!(names, ["Germany", "Ghana"]);
/// ```
pub fn build_sections(countries: &[Country], config: &PickerConfig) -> Sections {
    build_sections_with(countries, config, &config.name_style)
}

/// Same as [`build_sections`] with a caller-supplied [`NameResolver`].
pub fn build_sections_with<R: NameResolver + ?Sized>(
    countries: &[Country],
    config: &PickerConfig,
    resolver: &R,
) -> Sections {
    let locale = &config.locale;
    let mut sections = Vec::new();

    if !config.show_only_preferred_section {
        let mut groups: BTreeMap<String, Vec<(SortKey, &Country)>> = BTreeMap::new();
        for country in countries {
            let name = resolver.display_name(country, locale);
            let Some(title) = first_letter(name, locale) else {
                continue;
            };
            groups
                .entry(title)
                .or_default()
                .push((sort_key(name, country, locale), country));
        }

        // BTreeMap<String, _> iterates in code-point order.
        for (title, mut members) in groups {
            members.sort_by(|a, b| a.0.cmp(&b.0));
            sections.push(Section {
                title,
                countries: members.into_iter().map(|(_, c)| c.clone()).collect(),
            });
        }
    }

    let mut has_preferred = false;
    if let Some(preferred) = preferred_section(countries, config) {
        sections.insert(0, preferred);
        has_preferred = true;
    }

    trace!(
        sections = sections.len(),
        preferred = has_preferred,
        "sections built"
    );

    Sections {
        sections,
        has_preferred,
    }
}

/// The preferred section, in the caller's order, restricted to `countries`.
/// `None` when the title is missing or no preferred code resolves.
fn preferred_section(countries: &[Country], config: &PickerConfig) -> Option<Section> {
    let (title, codes) = config.preferred_section()?;

    let mut seen = HashSet::new();
    let members: Vec<Country> = codes
        .iter()
        .filter_map(|code| {
            countries
                .iter()
                .find(|c| c.code().eq_ignore_ascii_case(code))
        })
        .filter(|c| seen.insert(c.code()))
        .cloned()
        .collect();

    if members.is_empty() {
        return None;
    }
    Some(Section {
        title: title.to_owned(),
        countries: members,
    })
}

impl Sections {
    /// Section titles in display order.
    pub fn titles(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.title.as_str()).collect()
    }

    /// Countries of the first section titled `title` (the preferred section
    /// wins if its title collides with a letter).
    pub fn get(&self, title: &str) -> Option<&[Country]> {
        self.sections
            .iter()
            .find(|s| s.title == title)
            .map(|s| s.countries.as_slice())
    }

    /// Countries of the alphabetical section titled `title`, never the
    /// preferred section.
    pub fn alphabetical(&self, title: &str) -> Option<&[Country]> {
        self.alphabetical_sections()
            .iter()
            .find(|s| s.title == title)
            .map(|s| s.countries.as_slice())
    }

    pub fn preferred(&self) -> Option<&Section> {
        if self.has_preferred {
            self.sections.first()
        } else {
            None
        }
    }

    pub fn has_preferred_section(&self) -> bool {
        self.has_preferred
    }

    fn alphabetical_sections(&self) -> &[Section] {
        let skip = usize::from(self.has_preferred);
        &self.sections[skip..]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Row count of a section; 0 when out of range.
    pub fn row_count(&self, section: usize) -> usize {
        self.sections.get(section).map_or(0, |s| s.countries.len())
    }

    pub fn title(&self, section: usize) -> Option<&str> {
        self.sections.get(section).map(|s| s.title.as_str())
    }

    pub fn item_at(&self, section: usize, row: usize) -> Option<&Country> {
        self.sections.get(section)?.countries.get(row)
    }

    /// Titles for a side index: every title except the preferred section's.
    pub fn index_titles(&self) -> Vec<&str> {
        self.alphabetical_sections()
            .iter()
            .map(|s| s.title.as_str())
            .collect()
    }

    /// Section position for a side-index title.
    pub fn section_for_index_title(&self, title: &str) -> Option<usize> {
        let skip = usize::from(self.has_preferred);
        self.alphabetical_sections()
            .iter()
            .position(|s| s.title == title)
            .map(|i| i + skip)
    }

    /// First `(section, row)` holding `code`, e.g. to scroll to the selection.
    pub fn position_of(&self, code: &str) -> Option<(usize, usize)> {
        self.sections.iter().enumerate().find_map(|(si, s)| {
            s.countries
                .iter()
                .position(|c| c.code().eq_ignore_ascii_case(code))
                .map(|row| (si, row))
        })
    }
}

impl<'a> IntoIterator for &'a Sections {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
