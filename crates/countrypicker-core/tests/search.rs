mod common;

use common::{codes, config, gdn_catalog};
use countrypicker_core::text::lowercase_in;
use countrypicker_core::{
    build_sections, build_sections_with, search, search_with, Country, CountryCatalog, Locale,
    NameResolver,
};

#[test]
fn prefix_matches_come_from_the_query_bucket() {
    let catalog = gdn_catalog();
    let cfg = config();
    let sections = build_sections(catalog.countries(), &cfg);

    assert_eq!(codes(&search("g", &sections, &cfg)), ["DE", "GH"]);
    assert_eq!(codes(&search("GH", &sections, &cfg)), ["GH"]);
    assert_eq!(codes(&search("nig", &sections, &cfg)), ["NG"]);
    assert!(search("ghanaian", &sections, &cfg).is_empty());
}

#[test]
fn empty_query_is_not_a_search() {
    let catalog = gdn_catalog();
    let cfg = config();
    let sections = build_sections(catalog.countries(), &cfg);
    assert!(search("", &sections, &cfg).is_empty());
}

#[test]
fn preferred_countries_are_not_reported_twice() {
    let catalog = gdn_catalog();
    let cfg = config().with_preferred("Preferred", ["NG"]);
    let sections = build_sections(catalog.countries(), &cfg);
    assert_eq!(codes(&search("n", &sections, &cfg)), ["NG"]);
}

#[test]
fn localized_names_are_searched() {
    let catalog = gdn_catalog();
    let cfg = config().with_locale(Locale::parse("de-DE"));
    let sections = build_sections(catalog.countries(), &cfg);

    assert_eq!(codes(&search("deu", &sections, &cfg)), ["DE"]);
    assert!(search("germ", &sections, &cfg).is_empty());
}

#[test]
fn results_are_exactly_the_prefix_matches_of_the_catalog() {
    let catalog = CountryCatalog::load().unwrap();
    let cfg = config().with_excluded(["GB"]);
    let usable = catalog.usable(&cfg.excluded_countries);
    let sections = build_sections(&usable, &cfg);

    for query in ["a", "ni", "Uni", "sou", "gu", "z", "åland", "cura", "q"] {
        let needle = lowercase_in(query, &cfg.locale);
        let hits = search(query, &sections, &cfg);

        let mut expected: Vec<&str> = usable
            .iter()
            .filter(|c| {
                lowercase_in(cfg.name_style.display_name(c, &cfg.locale), &cfg.locale)
                    .starts_with(&needle)
            })
            .map(|c| c.code())
            .collect();
        let mut got = codes(&hits);
        expected.sort_unstable();
        got.sort_unstable();
        assert_eq!(got, expected, "query {query:?}");
    }

    let united = search("united", &sections, &cfg);
    assert!(codes(&united).contains(&"US"));
    assert!(!codes(&united).contains(&"GB"), "excluded countries never match");
}

#[test]
fn phone_codes_are_not_searchable() {
    let catalog = CountryCatalog::load().unwrap();
    let cfg = config().show_phone_code_in_list(true);
    let sections = build_sections(catalog.countries(), &cfg);
    assert!(search("+234", &sections, &cfg).is_empty());
}

#[test]
fn codes_are_searchable_when_shown() {
    let catalog = CountryCatalog::load().unwrap();
    let cfg = config().show_country_code_in_list(true);
    let sections = build_sections(catalog.countries(), &cfg);

    // "ng" names no country, so only the code matches.
    assert_eq!(codes(&search("ng", &sections, &cfg)), ["NG"]);
}

/// Names every country by its ISO code.
struct ByCode;

impl NameResolver for ByCode {
    fn display_name<'a>(&self, country: &'a Country, _locale: &Locale) -> &'a str {
        country.code()
    }
}

#[test]
fn custom_resolver_drives_sections_and_search() {
    let catalog = gdn_catalog();
    let cfg = config();
    let sections = build_sections_with(catalog.countries(), &cfg, &ByCode);

    assert_eq!(sections.titles(), ["D", "G", "N"]);
    assert_eq!(codes(&search_with("g", &sections, &cfg, &ByCode)), ["GH"]);
    assert!(search_with("ger", &sections, &cfg, &ByCode).is_empty());
}
