//! Human-readable renderings of calculator results.
//!
//! Formatters only format fields that are already computed. An error
//! result is returned as its message, verbatim and unescaped.

use std::borrow::Cow;

use super::{GranularResult, MixItem, MixResult};
use crate::CalcError;

/// Render a tank-mix result as an HTML fragment.
#[must_use]
pub fn format_mix_results_html(result: &Result<MixResult, CalcError>) -> String {
    let mix = match result {
        Ok(mix) => mix,
        Err(err) => return err.to_string(),
    };

    let mut lines = vec![
        "<div class=\"mix-results\">".to_string(),
        format!("<p><strong>Tank size:</strong> {} gal</p>", mix.tank_size),
        format!(
            "<p><strong>Spray volume:</strong> {} gal per 1,000 sq ft</p>",
            mix.spray_volume
        ),
        format!(
            "<p><strong>Estimated coverage:</strong> {} sq ft</p>",
            mix.estimated_coverage_sq_ft.round()
        ),
        "<ul class=\"mix-items\">".to_string(),
    ];

    for item in &mix.mix_items {
        let detail = match item {
            MixItem::Computed {
                rate_per_gallon,
                fl_oz,
                ml,
                ..
            } => format!(
                "{fl_oz:.2} fl oz (~{} mL) at {rate_per_gallon} fl oz/gal",
                ml.round()
            ),
            MixItem::Fallback { label_rate, .. } => escape_html(label_rate).into_owned(),
        };
        lines.push(format!(
            "<li><strong>{}:</strong> {detail}</li>",
            escape_html(item.name())
        ));
    }

    lines.push("</ul>".to_string());
    lines.push("</div>".to_string());
    lines.join("\n")
}

/// Render a granular result as an HTML fragment.
#[must_use]
pub fn format_granular_results_html(result: &Result<GranularResult, CalcError>) -> String {
    let granular = match result {
        Ok(granular) => granular,
        Err(err) => return err.to_string(),
    };

    let mut lines = vec!["<div class=\"granular-results\">".to_string()];
    if !granular.product_name.is_empty() {
        lines.push(format!(
            "<p><strong>Product:</strong> {}</p>",
            escape_html(&granular.product_name)
        ));
    }
    lines.push(format!(
        "<p><strong>Area:</strong> {} sq ft ({:.2} &times; 1,000 sq ft)</p>",
        granular.area_sq_ft.round(),
        granular.area_thousands
    ));
    lines.push(format!(
        "<p><strong>Rate:</strong> {} lbs per 1,000 sq ft</p>",
        granular.rate_per_thousand_sq_ft
    ));
    lines.push(format!(
        "<p><strong>Total product needed:</strong> {:.2} lbs</p>",
        granular.total_lbs
    ));
    lines.push("</div>".to_string());
    lines.join("\n")
}

/// Plain-text counterpart of [`format_mix_results_html`] for terminals.
#[must_use]
pub fn format_mix_results_text(result: &Result<MixResult, CalcError>) -> String {
    let mix = match result {
        Ok(mix) => mix,
        Err(err) => return err.to_string(),
    };

    let mut lines = vec![
        format!("Tank size: {} gal", mix.tank_size),
        format!("Spray volume: {} gal per 1,000 sq ft", mix.spray_volume),
        format!(
            "Estimated coverage: {} sq ft",
            mix.estimated_coverage_sq_ft.round()
        ),
    ];
    for item in &mix.mix_items {
        let detail = match item {
            MixItem::Computed {
                rate_per_gallon,
                fl_oz,
                ml,
                ..
            } => format!(
                "{fl_oz:.2} fl oz (~{} mL) at {rate_per_gallon} fl oz/gal",
                ml.round()
            ),
            MixItem::Fallback { label_rate, .. } => label_rate.clone(),
        };
        lines.push(format!("  - {}: {detail}", item.name()));
    }
    lines.join("\n")
}

/// Plain-text counterpart of [`format_granular_results_html`] for terminals.
#[must_use]
pub fn format_granular_results_text(result: &Result<GranularResult, CalcError>) -> String {
    let granular = match result {
        Ok(granular) => granular,
        Err(err) => return err.to_string(),
    };

    let mut lines = Vec::with_capacity(4);
    if !granular.product_name.is_empty() {
        lines.push(format!("Product: {}", granular.product_name));
    }
    lines.push(format!(
        "Area: {} sq ft ({:.2} x 1,000 sq ft)",
        granular.area_sq_ft.round(),
        granular.area_thousands
    ));
    lines.push(format!(
        "Rate: {} lbs per 1,000 sq ft",
        granular.rate_per_thousand_sq_ft
    ));
    lines.push(format!("Total product needed: {:.2} lbs", granular.total_lbs));
    lines.join("\n")
}

fn escape_html(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(raw);
    }
    let mut escaped = String::with_capacity(raw.len() + 8);
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
#[path = "format_test.rs"]
mod tests;
