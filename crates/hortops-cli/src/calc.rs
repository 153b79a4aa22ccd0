//! Calculator command handlers for the CLI.
//!
//! Catalog products are resolved first, in the order given, then ad-hoc
//! `--rate` products are appended. Calculator errors are returned so `main`
//! exits non-zero; in JSON mode the `{"error": ...}` object is also printed.

use std::path::Path;

use clap::ValueEnum;
use hortops_core::{
    calculate_granular, format_granular_results_html, format_granular_results_text,
    format_mix_results_html, format_mix_results_text, load_catalog, CalcError, ConfigError,
    GranularResult, MixResult, MixSettings, ProductRate,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Html,
    Json,
}

/// Parse an ad-hoc `--rate` argument.
///
/// `"Chelated Iron=1.5"` yields a numeric per-gallon rate. A value that is
/// not a number (`"Neem=1-2 oz per gallon"`) is kept as label text.
pub(crate) fn parse_adhoc_rate(raw: &str) -> Result<ProductRate, String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=RATE, got '{raw}'"))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("product name must be non-empty in '{raw}'"));
    }

    let value = value.trim();
    let (default_rate_per_gallon, mix_rate) = match value.parse::<f64>() {
        Ok(rate) => (Some(rate), None),
        Err(_) => (None, (!value.is_empty()).then(|| value.to_string())),
    };

    Ok(ProductRate {
        id: format!("adhoc:{}", name.to_lowercase().replace(' ', "-")),
        name: name.to_string(),
        default_rate_per_gallon,
        mix_rate,
    })
}

pub(crate) fn render_mix(
    result: &Result<MixResult, CalcError>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => format_mix_results_text(result),
        OutputFormat::Html => format_mix_results_html(result),
        OutputFormat::Json => match result {
            Ok(mix) => serde_json::to_string_pretty(mix)?,
            Err(err) => serde_json::to_string_pretty(err)?,
        },
    })
}

pub(crate) fn render_granular(
    result: &Result<GranularResult, CalcError>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => format_granular_results_text(result),
        OutputFormat::Html => format_granular_results_html(result),
        OutputFormat::Json => match result {
            Ok(granular) => serde_json::to_string_pretty(granular)?,
            Err(err) => serde_json::to_string_pretty(err)?,
        },
    })
}

/// Run the tank-mix calculator and print the rendered result.
///
/// The catalog is only read when at least one `--product` id is given.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, a product id is
/// unknown, or the calculator rejects the input.
pub(crate) fn run_mix(
    settings: &MixSettings,
    catalog_path: &Path,
    tank: Option<f64>,
    product_ids: &[String],
    adhoc: Vec<ProductRate>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut products = if product_ids.is_empty() {
        Vec::new()
    } else {
        load_catalog(catalog_path)?.select(product_ids)?
    };
    products.extend(adhoc);

    tracing::debug!(
        catalog = product_ids.len(),
        total = products.len(),
        "resolved tank-mix selection"
    );

    let result = settings.calculate_mix(tank, &products);
    let rendered = render_mix(&result, format)?;
    finish(&rendered, result.err(), format)
}

/// Run the granular calculator and print the rendered result.
///
/// With `--product`, the rate and display name come from the catalog. A
/// catalog product without a numeric granular rate reports the missing-rate
/// error rather than guessing.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, the product id is
/// unknown, or the calculator rejects the input.
pub(crate) fn run_granular(
    catalog_path: &Path,
    area: Option<f64>,
    product_id: Option<&str>,
    rate: Option<f64>,
    name: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let (rate, name) = match product_id {
        Some(id) => {
            let catalog = load_catalog(catalog_path)?;
            let product = catalog
                .get(id)
                .ok_or_else(|| ConfigError::UnknownProduct(id.to_string()))?;
            (
                product.granular_rate_per_1000_sqft,
                Some(product.name.clone()),
            )
        }
        None => (rate, name.map(ToString::to_string)),
    };

    let result = calculate_granular(area, rate, name.as_deref());
    let rendered = render_granular(&result, format)?;
    finish(&rendered, result.err(), format)
}

fn finish(rendered: &str, error: Option<CalcError>, format: OutputFormat) -> anyhow::Result<()> {
    match error {
        None => {
            println!("{rendered}");
            Ok(())
        }
        Some(err) => {
            if format == OutputFormat::Json {
                println!("{rendered}");
            }
            Err(err.into())
        }
    }
}
