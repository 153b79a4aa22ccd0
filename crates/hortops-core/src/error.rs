use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    CatalogFileParse(#[from] serde_yaml::Error),

    #[error("catalog validation failed: {0}")]
    Validation(String),

    #[error("unknown product id: '{0}'")]
    UnknownProduct(String),

    #[error("spray volume must be a positive number of gallons per 1,000 sq ft, got {0}")]
    InvalidSprayVolume(f64),
}

/// Input problems reported by the dosage calculators.
///
/// These are returned in place of a result, never alongside one. The
/// `Display` text is the exact message shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Enter a valid tank size in gallons.")]
    InvalidTankSize,

    #[error("Select at least one chemical.")]
    NoChemicalSelected,

    #[error("Enter a valid area in square feet.")]
    InvalidArea,

    #[error("No stored application rate for the selected product. Please refer to the product label.")]
    MissingApplicationRate,
}

impl Serialize for CalcError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CalcError", 1)?;
        state.serialize_field("error", &self.to_string())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calc_error_serializes_as_error_object() {
        let json = serde_json::to_value(CalcError::NoChemicalSelected).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "error": "Select at least one chemical." })
        );
    }

    #[test]
    fn unknown_product_names_the_id() {
        let err = ConfigError::UnknownProduct("glyphosate-41".to_string());
        assert_eq!(err.to_string(), "unknown product id: 'glyphosate-41'");
    }
}
