//! Error handling example for countrypicker-rs
//!
//! This example demonstrates proper error handling and edge cases

use countrypicker_rs::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== countrypicker-rs Error Handling Example ===\n");

    // Example 1: Loading a catalog from a path that does not exist
    println!("--- Example 1: Missing dataset ---");
    match CountryCatalog::load_from_path("/nonexistent/CountryCodes.json") {
        Ok(catalog) => println!("✓ Loaded {} countries", catalog.len()),
        Err(e) if e.is_catalog_unavailable() => println!("  Catalog unavailable: {e}"),
        Err(e) => return Err(e),
    }
    println!();

    // Example 2: Malformed entries are skipped, not fatal
    println!("--- Example 2: Malformed entries ---");
    let catalog = CountryCatalog::from_json_str(
        r#"[
            {"name": "Ghana", "dial_code": "+233", "code": "GH"},
            {"name": "", "dial_code": "+0", "code": "XX"},
            {"dial_code": "+1"}
        ]"#,
    )?;
    println!("  Usable entries: {}", catalog.len());
    println!();

    // Example 3: Unknown codes in the configuration are ignored
    println!("--- Example 3: Unknown codes ---");
    let config = PickerConfig::default()
        .with_preferred("Preferred", ["ZZ", "GH"])
        .with_excluded(["QQ"]);
    let picker = CountryPicker::new(Arc::new(catalog), config);
    println!("  Preferred kept: {:?}", picker.config().preferred_countries);
    for code in ["ZZ", "", "GHA"] {
        match picker.country_by_code(code) {
            Some(country) => println!("  Found: {}", country.name()),
            None => println!("  Not found: {code:?}"),
        }
    }
    println!();

    // Example 4: Excluding every country leaves nothing to select
    println!("--- Example 4: No default country ---");
    let empty = CountryPicker::new(
        picker.catalog().clone(),
        PickerConfig::default().with_excluded(["GH"]),
    );
    match empty.selected_country() {
        Ok(country) => println!("  Selected: {}", country.name()),
        Err(PickerError::NoDefaultCountry) => println!("  No country left to select"),
        Err(e) => return Err(e),
    }

    // Example 5: Invalid JSON configuration
    println!("\n--- Example 5: Invalid configuration ---");
    if let Err(e) = PickerConfig::from_json(r#"{"show_only_preferred_section": "yes"}"#) {
        println!("  Rejected: {e}");
    }

    Ok(())
}
