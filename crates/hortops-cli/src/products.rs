//! Catalog listing for the CLI.

use std::path::Path;

use hortops_core::{load_catalog, ChemicalProduct, ProductCategory};

/// Print catalog products as a table, optionally filtered by category.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub(crate) fn run_products(
    catalog_path: &Path,
    category: Option<ProductCategory>,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;

    let rows: Vec<&ChemicalProduct> = match category {
        Some(category) => catalog.by_category(category).collect(),
        None => catalog.products().iter().collect(),
    };

    if rows.is_empty() {
        println!(
            "no products found{} in {}",
            category.map(|c| format!(" for category {c}")).unwrap_or_default(),
            catalog_path.display()
        );
        return Ok(());
    }

    println!(
        "{:<26}{:<36}{:<18}{:<10}{:<10}RATE",
        "ID", "NAME", "CATEGORY", "REI", "SIGNAL"
    );
    for product in rows {
        println!(
            "{:<26}{:<36}{:<18}{:<10}{:<10}{}",
            product.id,
            truncate(&product.name, 34),
            product.category.to_string(),
            product.rei_label(),
            product.signal_word.as_deref().unwrap_or("-"),
            rate_summary(product)
        );
    }

    Ok(())
}

/// Short description of the stored rate, preferring rates the calculators
/// would actually use.
fn rate_summary(product: &ChemicalProduct) -> String {
    if let Some(rate) = product.stored_rate_per_gallon() {
        return format!("{rate} fl oz/gal");
    }
    if let Some(rate) = product.stored_granular_rate() {
        return format!("{rate} lbs/1,000 sq ft");
    }
    product
        .mix_rate
        .clone()
        .unwrap_or_else(|| "see label".to_string())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", text.chars().take(max_chars - 3).collect::<String>())
    } else {
        text.to_string()
    }
}
