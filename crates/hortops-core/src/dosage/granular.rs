use serde::{Deserialize, Serialize};

use super::SQ_FT_PER_THOUSAND;
use crate::products::{lenient_f64, positive_finite};
use crate::CalcError;

/// Inputs for a single-product granular application.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GranularRate {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub area_sq_ft: Option<f64>,
    /// Pounds of product per 1,000 sq ft.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rate_per_thousand_sq_ft: Option<f64>,
    #[serde(default)]
    pub product_name: Option<String>,
}

impl GranularRate {
    /// # Errors
    ///
    /// See [`calculate_granular`].
    pub fn calculate(&self) -> Result<GranularResult, CalcError> {
        calculate_granular(
            self.area_sq_ft,
            self.rate_per_thousand_sq_ft,
            self.product_name.as_deref(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GranularResult {
    /// Echoed unchanged; empty when no name was given.
    pub product_name: String,
    pub area_sq_ft: f64,
    pub rate_per_thousand_sq_ft: f64,
    /// `area_sq_ft / 1000`.
    pub area_thousands: f64,
    /// Pounds of product for the whole area.
    pub total_lbs: f64,
}

/// Compute the pounds of dry product needed to treat `area_sq_ft`.
///
/// The area is checked first, then the rate. Both must be finite and
/// strictly positive.
///
/// # Errors
///
/// Returns [`CalcError::InvalidArea`] for a missing or non-positive area,
/// and [`CalcError::MissingApplicationRate`] for a missing, non-positive
/// or NaN rate.
pub fn calculate_granular(
    area_sq_ft: Option<f64>,
    rate_per_thousand_sq_ft: Option<f64>,
    product_name: Option<&str>,
) -> Result<GranularResult, CalcError> {
    let area_sq_ft = positive_finite(area_sq_ft).ok_or(CalcError::InvalidArea)?;
    let rate_per_thousand_sq_ft =
        positive_finite(rate_per_thousand_sq_ft).ok_or(CalcError::MissingApplicationRate)?;

    let area_thousands = area_sq_ft / SQ_FT_PER_THOUSAND;
    let total_lbs = area_thousands * rate_per_thousand_sq_ft;
    if !total_lbs.is_finite() {
        return Err(CalcError::MissingApplicationRate);
    }

    tracing::debug!(
        area_sq_ft,
        rate_per_thousand_sq_ft,
        total_lbs,
        "calculated granular application"
    );

    Ok(GranularResult {
        product_name: product_name.unwrap_or_default().to_string(),
        area_sq_ft,
        rate_per_thousand_sq_ft,
        area_thousands,
        total_lbs,
    })
}
