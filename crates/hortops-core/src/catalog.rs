use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::products::{lenient_f64, positive_finite};
use crate::{ConfigError, ProductRate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductCategory {
    Herbicide,
    Fungicide,
    Insecticide,
    Fertilizer,
    GrowthRegulator,
    Other,
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductCategory::Herbicide => write!(f, "herbicide"),
            ProductCategory::Fungicide => write!(f, "fungicide"),
            ProductCategory::Insecticide => write!(f, "insecticide"),
            ProductCategory::Fertilizer => write!(f, "fertilizer"),
            ProductCategory::GrowthRegulator => write!(f, "growth-regulator"),
            ProductCategory::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for ProductCategory {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "herbicide" => Ok(ProductCategory::Herbicide),
            "fungicide" => Ok(ProductCategory::Fungicide),
            "insecticide" => Ok(ProductCategory::Insecticide),
            "fertilizer" => Ok(ProductCategory::Fertilizer),
            "growth-regulator" => Ok(ProductCategory::GrowthRegulator),
            "other" => Ok(ProductCategory::Other),
            other => Err(ConfigError::Validation(format!(
                "unknown product category '{other}'"
            ))),
        }
    }
}

/// A chemical or fertilizer product as maintained in the catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChemicalProduct {
    /// Slug-shaped identifier, e.g. `"propiconazole-14-3"`.
    pub id: String,
    pub name: String,
    pub category: ProductCategory,
    #[serde(default)]
    pub active_ingredient: Option<String>,
    /// Fluid ounces per gallon of carrier for tank mixes.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub default_rate_per_gallon: Option<f64>,
    /// Label rate text for products without a numeric per-gallon rate.
    #[serde(default)]
    pub mix_rate: Option<String>,
    /// Pounds per 1,000 sq ft for dry products.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub granular_rate_per_1000_sqft: Option<f64>,
    /// Re-entry interval in hours.
    #[serde(default)]
    pub rei_hours: Option<u32>,
    /// Label signal word, e.g. `"CAUTION"` or `"WARNING"`.
    #[serde(default)]
    pub signal_word: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ChemicalProduct {
    /// The subset of this record the tank-mix calculator reads.
    #[must_use]
    pub fn to_product_rate(&self) -> ProductRate {
        ProductRate {
            id: self.id.clone(),
            name: self.name.clone(),
            default_rate_per_gallon: self.default_rate_per_gallon,
            mix_rate: self.mix_rate.clone(),
        }
    }

    /// Per-gallon rate the mix calculator would use, if any.
    #[must_use]
    pub fn stored_rate_per_gallon(&self) -> Option<f64> {
        positive_finite(self.default_rate_per_gallon)
    }

    /// Pounds per 1,000 sq ft the granular calculator would accept, if any.
    #[must_use]
    pub fn stored_granular_rate(&self) -> Option<f64> {
        positive_finite(self.granular_rate_per_1000_sqft)
    }

    /// REI for display, e.g. `"12 h"`; `"see label"` when not recorded.
    #[must_use]
    pub fn rei_label(&self) -> String {
        self.rei_hours
            .map_or_else(|| "see label".to_string(), |h| format!("{h} h"))
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: Vec<ChemicalProduct>,
}

/// Validated, read-only product catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<ChemicalProduct>,
}

impl Catalog {
    /// Build a catalog from already-parsed records.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any record fails validation.
    pub fn from_products(products: Vec<ChemicalProduct>) -> Result<Self, ConfigError> {
        validate_products(&products)?;
        Ok(Self { products })
    }

    #[must_use]
    pub fn products(&self) -> &[ChemicalProduct] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ChemicalProduct> {
        let wanted = id.trim().to_lowercase();
        self.products.iter().find(|p| p.id == wanted)
    }

    pub fn by_category(
        &self,
        category: ProductCategory,
    ) -> impl Iterator<Item = &ChemicalProduct> + '_ {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Resolve a selection of ids into tank-mix inputs.
    ///
    /// Order is preserved and repeated ids are kept.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownProduct` for the first id not in the catalog.
    pub fn select<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<ProductRate>, ConfigError> {
        ids.iter()
            .map(|id| {
                self.get(id.as_ref())
                    .map(ChemicalProduct::to_product_rate)
                    .ok_or_else(|| ConfigError::UnknownProduct(id.as_ref().to_string()))
            })
            .collect()
    }
}

/// Load and validate the product catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let catalog_file: CatalogFile =
        serde_yaml::from_str(&content).map_err(ConfigError::CatalogFileParse)?;

    let catalog = Catalog::from_products(catalog_file.products)?;
    tracing::debug!(path = %path.display(), products = catalog.len(), "loaded product catalog");
    Ok(catalog)
}

fn is_slug(id: &str) -> bool {
    !id.starts_with('-')
        && !id.ends_with('-')
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn validate_products(products: &[ChemicalProduct]) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for product in products {
        if product.id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "product id must be non-empty".to_string(),
            ));
        }

        if !is_slug(&product.id) {
            return Err(ConfigError::Validation(format!(
                "product id '{}' must contain only lowercase letters, digits, and inner dashes",
                product.id
            )));
        }

        if product.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "product '{}' must have a non-empty name",
                product.id
            )));
        }

        if !seen_ids.insert(product.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate product id: '{}'",
                product.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
