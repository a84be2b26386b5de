//! Preferred section and search example for countrypicker-rs
//!
//! This example demonstrates how to:
//! - Pin a preferred section above the alphabetical ones
//! - Exclude countries
//! - Switch the display locale
//! - Run prefix searches the way a search bar would

use countrypicker_rs::prelude::*;

fn print_sections(picker: &CountryPicker, limit: usize) {
    for section in 0..picker.section_count().min(limit) {
        let names: Vec<&str> = (0..picker.row_count(section))
            .filter_map(|row| picker.item_at(section, row))
            .map(|c| picker.display_name(c))
            .take(4)
            .collect();
        println!(
            "  [{}] {}",
            picker.title(section).unwrap_or_default(),
            names.join(", ")
        );
    }
}

fn main() -> Result<()> {
    println!("=== countrypicker-rs Preferred & Search Example ===\n");

    // Example 1: Preferred countries first
    println!("--- Example 1: Preferred section ---");
    let config = PickerConfig::default()
        .with_locale("en_NG")
        .with_preferred("West Africa", ["NG", "GH", "SN"])
        .with_excluded(["AQ"])
        .show_phone_code_in_list(true);
    let mut picker = CountryPicker::bundled(config.clone())?;
    print_sections(&picker, 3);
    println!();

    // Example 2: Only the preferred section
    println!("--- Example 2: Only the preferred section ---");
    picker.set_config(config.clone().show_only_preferred_section(true));
    print_sections(&picker, 3);
    println!();

    // Example 3: Searching
    println!("--- Example 3: Search ---");
    picker.set_config(config.clone());
    for query in ["ni", "Uni", "åland", "xyz"] {
        picker.on_query_changed(query);
        let hits: Vec<String> = picker
            .search_results()
            .iter()
            .map(|c| picker.row_label(c))
            .collect();
        println!("  {query:>6} -> {} hit(s): {}", hits.len(), hits.join("; "));
    }
    picker.on_query_changed("");
    println!();

    // Example 4: Localized names
    println!("--- Example 4: German display names ---");
    picker.set_config(config.with_locale("de_DE"));
    picker.on_query_changed("deu");
    for country in picker.search_results() {
        println!("  {} -> {}", country.name(), picker.display_name(country));
    }

    Ok(())
}
