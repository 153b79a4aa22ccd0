use serde::{Deserialize, Deserializer, Serialize};

/// One product selected for a tank mix.
///
/// Built from a catalog entry (see [`crate::ChemicalProduct::to_product_rate`])
/// or supplied directly by a caller holding its own product records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRate {
    /// Opaque identifier, unique within one calculation call.
    pub id: String,
    pub name: String,
    /// Fluid ounces of product per gallon of carrier.
    ///
    /// Non-numeric input is read as `None` rather than rejected, so a
    /// product with a text-only rate still reaches the calculator and
    /// falls back to its label text.
    #[serde(
        default,
        alias = "default_rate_per_gallon",
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_rate_per_gallon: Option<f64>,
    /// Free-text rate shown when no numeric rate exists, e.g. `"1-2 oz per gallon"`.
    #[serde(
        default,
        alias = "mix_rate",
        skip_serializing_if = "Option::is_none"
    )]
    pub mix_rate: Option<String>,
}

impl ProductRate {
    /// Returns the per-gallon rate if it is a finite, strictly positive number.
    #[must_use]
    pub fn stored_rate(&self) -> Option<f64> {
        positive_finite(self.default_rate_per_gallon)
    }

    /// Returns the label text to show instead of a computed quantity, if any.
    #[must_use]
    pub fn label_text(&self) -> Option<&str> {
        self.mix_rate.as_deref().filter(|s| !s.trim().is_empty())
    }
}

pub(crate) fn positive_finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Serde helper for `Option<f64>` fields fed by forms and hand-edited files.
///
/// Accepts a number or a numeric string; anything else (prose, `null`,
/// booleans) deserializes to `None` so the calculators can report it.
///
/// # Errors
///
/// Only fails if the underlying deserializer fails.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawNumber {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match RawNumber::deserialize(deserializer)? {
        RawNumber::Number(n) => Some(n),
        RawNumber::Text(s) => s.trim().parse::<f64>().ok(),
        RawNumber::Other(_) => None,
    })
}
