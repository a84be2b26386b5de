//! Basic usage example for countrypicker-rs
//!
//! This example demonstrates how to:
//! - Load the bundled country catalog
//! - Build a picker and walk its sections
//! - Look countries up by code, name and dial code
//! - Select a country and read the summary label

use countrypicker_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== countrypicker-rs Basic Usage Example ===\n");

    // Load the catalog
    println!("Loading bundled catalog...");
    let catalog = CountryCatalog::load()?;
    println!("✓ Catalog loaded: {} countries\n", catalog.len());

    // Example 1: Sections as a list view sees them
    println!("--- Example 1: Sections ---");
    let config = PickerConfig::default().with_locale("en_US");
    let mut picker = CountryPicker::new(catalog, config);
    println!("Sections: {}", picker.section_count());
    for section in 0..picker.section_count().min(3) {
        let title = picker.title(section).unwrap_or_default();
        println!("[{title}] {} rows", picker.row_count(section));
        for row in 0..picker.row_count(section).min(3) {
            if let Some(country) = picker.item_at(section, row) {
                println!("  {}", picker.row_label(country));
            }
        }
    }
    println!("Index: {}\n", picker.index_titles().join(" "));

    // Example 2: Lookups
    println!("--- Example 2: Lookups ---");
    if let Some(country) = picker.country_by_code("ng") {
        println!("By code 'ng': {} {}", country.name(), country.phone_code());
    }
    if let Some(country) = picker.country_by_name("Ghana") {
        println!("By name 'Ghana': {}", country.code());
    }
    if let Some(country) = picker.country_by_phone_code("49") {
        println!("By dial code '49': {}", country.name());
    }
    println!();

    // Example 3: Selection
    println!("--- Example 3: Selection ---");
    println!("Default selection: {}", picker.selected_country()?.name());
    picker.set_delegate(Box::new(|country: &Country| {
        println!("  delegate: picked {} ({})", country.name(), country.flag_asset());
    }));
    if let Some((section, row)) = picker.sections().position_of("GH") {
        picker.on_select(section, row);
    }
    println!("Summary label: {}", picker.summary_label()?);

    Ok(())
}
