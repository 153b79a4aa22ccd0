//! Tank-mix and granular application arithmetic.
//!
//! Both calculators are pure: they read their arguments, allocate a fresh
//! result, and report invalid input as a [`CalcError`](crate::CalcError)
//! value. They are safe to call concurrently without synchronization.

mod format;
mod granular;
mod mix;

pub use format::{
    format_granular_results_html, format_granular_results_text, format_mix_results_html,
    format_mix_results_text,
};
pub use granular::{calculate_granular, GranularRate, GranularResult};
pub use mix::{calculate_mix, MixItem, MixResult, MixSettings};

/// Milliliters per US fluid ounce, as printed on product labels.
pub const FL_OZ_TO_ML: f64 = 29.57;

/// Square feet in one application-rate unit ("per 1,000 sq ft").
pub const SQ_FT_PER_THOUSAND: f64 = 1000.0;

/// Gallons of finished spray assumed to cover 1,000 sq ft.
///
/// A simplifying assumption, not a label value. Override it through
/// [`MixSettings::new`] or `HORTOPS_SPRAY_VOLUME_GAL_PER_1000_SQFT`.
pub const DEFAULT_SPRAY_VOLUME_GAL_PER_1000_SQFT: f64 = 1.0;

/// Shown for a product that has neither a numeric rate nor label text.
pub const DEFAULT_LABEL_RATE_TEXT: &str = "Check the product label for exact rates.";
