use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::{
    DEFAULT_LABEL_RATE_TEXT, DEFAULT_SPRAY_VOLUME_GAL_PER_1000_SQFT, FL_OZ_TO_ML,
    SQ_FT_PER_THOUSAND,
};
use crate::products::positive_finite;
use crate::{CalcError, ConfigError, ProductRate};

/// Tunables for the tank-mix calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixSettings {
    spray_volume_gal_per_1000_sqft: f64,
}

impl Default for MixSettings {
    fn default() -> Self {
        Self {
            spray_volume_gal_per_1000_sqft: DEFAULT_SPRAY_VOLUME_GAL_PER_1000_SQFT,
        }
    }
}

impl MixSettings {
    /// Build settings with a custom spray volume (gallons per 1,000 sq ft).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSprayVolume` if the volume is not a
    /// finite, strictly positive number.
    pub fn new(spray_volume_gal_per_1000_sqft: f64) -> Result<Self, ConfigError> {
        positive_finite(Some(spray_volume_gal_per_1000_sqft))
            .map(|spray_volume_gal_per_1000_sqft| Self {
                spray_volume_gal_per_1000_sqft,
            })
            .ok_or(ConfigError::InvalidSprayVolume(
                spray_volume_gal_per_1000_sqft,
            ))
    }

    #[must_use]
    pub fn spray_volume(&self) -> f64 {
        self.spray_volume_gal_per_1000_sqft
    }

    /// Compute per-product quantities for a tank of `tank_size` gallons.
    ///
    /// Validation runs in order and the first failure wins: the tank size
    /// must be finite and strictly positive, then `products` must be
    /// non-empty. Products without a usable numeric rate are not errors;
    /// they come back as [`MixItem::Fallback`] entries in input order.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidTankSize`] or [`CalcError::NoChemicalSelected`].
    pub fn calculate_mix(
        &self,
        tank_size: Option<f64>,
        products: &[ProductRate],
    ) -> Result<MixResult, CalcError> {
        let tank_size = positive_finite(tank_size).ok_or(CalcError::InvalidTankSize)?;

        let estimated_coverage_sq_ft =
            tank_size * SQ_FT_PER_THOUSAND / self.spray_volume_gal_per_1000_sqft;
        if !estimated_coverage_sq_ft.is_finite() {
            return Err(CalcError::InvalidTankSize);
        }

        if products.is_empty() {
            return Err(CalcError::NoChemicalSelected);
        }

        let mix_items: Vec<MixItem> = products
            .iter()
            .map(|product| MixItem::for_product(product, tank_size))
            .collect();

        let mix_text = mix_items
            .iter()
            .filter_map(MixItem::summary_line)
            .collect::<Vec<_>>()
            .join("\n");

        tracing::debug!(
            tank_size,
            products = mix_items.len(),
            computed = mix_items.iter().filter(|i| i.has_stored_rate()).count(),
            "calculated tank mix"
        );

        Ok(MixResult {
            tank_size,
            spray_volume: self.spray_volume_gal_per_1000_sqft,
            estimated_coverage_sq_ft,
            mix_items,
            mix_text,
        })
    }
}

/// Tank-mix calculation with the default spray volume.
///
/// See [`MixSettings::calculate_mix`].
///
/// # Errors
///
/// Returns [`CalcError::InvalidTankSize`] or [`CalcError::NoChemicalSelected`].
pub fn calculate_mix(
    tank_size: Option<f64>,
    products: &[ProductRate],
) -> Result<MixResult, CalcError> {
    MixSettings::default().calculate_mix(tank_size, products)
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MixResult {
    /// Carrier volume in gallons, echoed from the input.
    pub tank_size: f64,
    /// Gallons of finished spray per 1,000 sq ft.
    pub spray_volume: f64,
    pub estimated_coverage_sq_ft: f64,
    pub mix_items: Vec<MixItem>,
    /// One line per computed item, newline-joined. Presentation only.
    pub mix_text: String,
}

/// One entry per input product, in input order.
#[derive(Debug, Clone, PartialEq)]
pub enum MixItem {
    /// The product had a usable per-gallon rate.
    Computed {
        id: String,
        name: String,
        rate_per_gallon: f64,
        fl_oz: f64,
        ml: f64,
    },
    /// No usable numeric rate; the operator must read the label.
    Fallback {
        id: String,
        name: String,
        label_rate: String,
    },
}

impl MixItem {
    fn for_product(product: &ProductRate, tank_size: f64) -> Self {
        let computed = product.stored_rate().and_then(|rate| {
            let fl_oz = rate * tank_size;
            let ml = fl_oz * FL_OZ_TO_ML;
            (fl_oz.is_finite() && ml.is_finite()).then_some((rate, fl_oz, ml))
        });

        match computed {
            Some((rate_per_gallon, fl_oz, ml)) => MixItem::Computed {
                id: product.id.clone(),
                name: product.name.clone(),
                rate_per_gallon,
                fl_oz,
                ml,
            },
            None => MixItem::Fallback {
                id: product.id.clone(),
                name: product.name.clone(),
                label_rate: product
                    .label_text()
                    .unwrap_or(DEFAULT_LABEL_RATE_TEXT)
                    .to_string(),
            },
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            MixItem::Computed { id, .. } | MixItem::Fallback { id, .. } => id,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            MixItem::Computed { name, .. } | MixItem::Fallback { name, .. } => name,
        }
    }

    #[must_use]
    pub fn has_stored_rate(&self) -> bool {
        matches!(self, MixItem::Computed { .. })
    }

    /// `"<name>: 20.00 fl oz (~591 mL) at 2 fl oz/gal"` for computed items.
    fn summary_line(&self) -> Option<String> {
        match self {
            MixItem::Computed {
                name,
                rate_per_gallon,
                fl_oz,
                ml,
                ..
            } => Some(format!(
                "{name}: {fl_oz:.2} fl oz (~{} mL) at {rate_per_gallon} fl oz/gal",
                ml.round()
            )),
            MixItem::Fallback { .. } => None,
        }
    }
}

impl Serialize for MixItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MixItem::Computed {
                id,
                name,
                rate_per_gallon,
                fl_oz,
                ml,
            } => {
                let mut state = serializer.serialize_struct("MixItem", 6)?;
                state.serialize_field("id", id)?;
                state.serialize_field("name", name)?;
                state.serialize_field("ratePerGallon", rate_per_gallon)?;
                state.serialize_field("flOz", fl_oz)?;
                state.serialize_field("ml", ml)?;
                state.serialize_field("hasStoredRate", &true)?;
                state.end()
            }
            MixItem::Fallback {
                id,
                name,
                label_rate,
            } => {
                let mut state = serializer.serialize_struct("MixItem", 4)?;
                state.serialize_field("id", id)?;
                state.serialize_field("name", name)?;
                state.serialize_field("labelRate", label_rate)?;
                state.serialize_field("hasStoredRate", &false)?;
                state.end()
            }
        }
    }
}

#[cfg(test)]
#[path = "mix_test.rs"]
mod tests;
