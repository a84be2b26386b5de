mod common;

use common::{codes, config, gdn_catalog};
use countrypicker_core::text::fold_key;
use countrypicker_core::{build_sections, CountryCatalog, Locale, NameResolver, Sections};
use std::collections::HashMap;

fn gdn_sections(cfg: &countrypicker_core::PickerConfig) -> Sections {
    let catalog = gdn_catalog();
    build_sections(catalog.countries(), cfg)
}

#[test]
fn groups_by_first_letter_and_sorts_members() {
    let sections = gdn_sections(&config());

    assert_eq!(sections.titles(), ["G", "N"]);
    assert_eq!(codes(sections.get("G").unwrap()), ["DE", "GH"]);
    assert_eq!(codes(sections.get("N").unwrap()), ["NG"]);
    assert!(!sections.has_preferred_section());
}

#[test]
fn preferred_section_comes_first() {
    let cfg = config().with_preferred("Preferred", ["NG"]);
    let sections = gdn_sections(&cfg);

    assert_eq!(sections.titles(), ["Preferred", "G", "N"]);
    assert_eq!(codes(sections.get("Preferred").unwrap()), ["NG"]);
    // Additive: Nigeria stays in its own letter too.
    assert_eq!(codes(sections.get("N").unwrap()), ["NG"]);
    assert_eq!(sections.index_titles(), ["G", "N"]);
    assert_eq!(sections.section_for_index_title("N"), Some(2));
}

#[test]
fn preferred_order_is_the_callers() {
    let cfg = config().with_preferred("Top", ["NG", "DE", "GH"]);
    let sections = gdn_sections(&cfg);
    assert_eq!(codes(sections.get("Top").unwrap()), ["NG", "DE", "GH"]);
}

#[test]
fn incomplete_preferred_config_is_ignored() {
    let mut cfg = config();
    cfg.preferred_section_title = Some("Preferred".into());
    assert_eq!(gdn_sections(&cfg).titles(), ["G", "N"]);

    let mut cfg = config();
    cfg.preferred_countries = vec!["NG".into()];
    assert_eq!(gdn_sections(&cfg).titles(), ["G", "N"]);
}

#[test]
fn only_preferred_section_without_a_valid_one_is_empty() {
    let cfg = config().show_only_preferred_section(true);
    let sections = gdn_sections(&cfg);
    assert!(sections.is_empty());
    assert_eq!(sections, Sections::default());

    let cfg = cfg.with_preferred("Preferred", ["ZZ"]);
    assert!(gdn_sections(&cfg).is_empty());
}

#[test]
fn only_preferred_section_skips_the_alphabet() {
    let cfg = config()
        .with_preferred("Preferred", ["GH", "NG"])
        .show_only_preferred_section(true);
    let sections = gdn_sections(&cfg);
    assert_eq!(sections.titles(), ["Preferred"]);
    assert!(sections.index_titles().is_empty());
}

#[test]
fn localized_names_drive_titles_and_order() {
    let cfg = config().with_locale(Locale::parse("de_DE"));
    let sections = gdn_sections(&cfg);
    assert_eq!(sections.titles(), ["D", "G", "N"]);
    assert_eq!(codes(sections.get("D").unwrap()), ["DE"]);
}

#[test]
fn ties_on_name_are_broken_by_code() {
    let catalog = CountryCatalog::from_countries([
        countrypicker_core::Country::new("Guinea", "GN", "+224"),
        countrypicker_core::Country::new("guinea", "GB", "+44"),
        countrypicker_core::Country::new("Guinea", "AA", "+1"),
    ]);
    let sections = build_sections(catalog.countries(), &config());
    assert_eq!(codes(sections.get("G").unwrap()), ["AA", "GB", "GN"]);
}

#[test]
fn bundled_catalog_sections_partition_usable_countries() {
    let catalog = CountryCatalog::load().unwrap();
    let cfg = config()
        .with_excluded(["US", "GB"])
        .with_preferred("Preferred", ["NG", "GH"])
        .validated(&catalog);
    let usable = catalog.usable(&cfg.excluded_countries);
    let sections = build_sections(&usable, &cfg);

    let titles = sections.titles();
    assert_eq!(titles[0], "Preferred");
    let letters = &titles[1..];
    let mut sorted = letters.to_vec();
    sorted.sort();
    assert_eq!(letters, sorted.as_slice(), "titles must be code-point sorted");

    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    for section in sections.iter().skip(1) {
        for c in &section.countries {
            *occurrences.entry(c.code()).or_default() += 1;
        }
    }
    assert_eq!(occurrences.len(), usable.len());
    assert!(occurrences.values().all(|&n| n == 1));
    assert!(!occurrences.contains_key("US"));
    assert!(!occurrences.contains_key("GB"));
    assert!(occurrences.contains_key("AX"), "Åland Islands must be listed");
}

#[test]
fn members_are_sorted_and_resorting_is_stable() {
    let catalog = CountryCatalog::load().unwrap();
    let cfg = config();
    let sections = build_sections(catalog.countries(), &cfg);

    for section in &sections {
        let keys: Vec<String> = section
            .countries
            .iter()
            .map(|c| fold_key(cfg.name_style.display_name(c, &cfg.locale)))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted, "section {} is not sorted", section.title);
    }

    let again = build_sections(
        &sections.iter().flat_map(|s| s.countries.clone()).collect::<Vec<_>>(),
        &cfg,
    );
    assert_eq!(again, sections);
}

#[test]
fn german_sections_hold_only_german_names() {
    let catalog = CountryCatalog::load().unwrap();
    let cfg = config().with_locale("de_DE");
    let sections = build_sections(catalog.countries(), &cfg);

    let v: Vec<&str> = sections
        .get("V")
        .unwrap()
        .iter()
        .map(|c| cfg.name_style.display_name(c, &cfg.locale))
        .collect();
    assert!(v.contains(&"Vereinigte Staaten"));
    assert!(!v.iter().any(|name| name.starts_with("Virgin Islands")));
    assert!(codes(sections.get("A").unwrap()).contains(&"VI"), "Amerikanische Jungferninseln");
}

#[test]
fn turkish_locale_uses_dotted_capital_i() {
    let catalog = CountryCatalog::load().unwrap();
    let cfg = config().with_locale(Locale::parse("tr_TR"));
    let sections = build_sections(catalog.countries(), &cfg);

    let dotted = sections.get("İ").expect("dotted İ section");
    assert!(codes(dotted).contains(&"IT"));
    assert!(codes(dotted).contains(&"ES"));
    assert!(codes(dotted).contains(&"IS"), "İzlanda");
    // "Irak" starts with the dotless capital.
    assert_eq!(codes(sections.get("I").unwrap()), ["IQ"]);
}
