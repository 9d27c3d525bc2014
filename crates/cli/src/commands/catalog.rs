//! List the seeded shop catalog.

use std::fmt::Write;

use petcare_core::{CategoryFilter, Product, Store};
use tracing::info;

/// Log every product passing the category filter.
///
/// # Errors
///
/// Returns an error if `category` is not a known category key.
pub fn list(category: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let filter = category.map_or(Ok(CategoryFilter::All), str::parse::<CategoryFilter>)?;
    let store = Store::seeded();

    let lines: Vec<String> = store.catalog().filtered(filter).map(format_line).collect();
    info!(filter = filter.key(), count = lines.len(), "Catalog");
    for line in lines {
        info!("{line}");
    }
    Ok(())
}

fn format_line(product: &Product) -> String {
    let mut line = format!(
        "#{} {} [{}] {}",
        product.id, product.name, product.category, product.price
    );
    if let Some(old_price) = &product.old_price {
        let _ = write!(line, " (was {old_price})");
    }
    if let Some(badge) = &product.badge {
        let _ = write!(line, " - {badge}");
    }
    line
}
