use axum::{
    extract::{Query, State},
    Extension, Json,
};
use hortops_core::{ChemicalProduct, ProductCategory};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_config_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct ProductItem {
    id: String,
    name: String,
    category: ProductCategory,
    active_ingredient: Option<String>,
    default_rate_per_gallon: Option<f64>,
    mix_rate: Option<String>,
    granular_rate_per_1000_sqft: Option<f64>,
    rei_hours: Option<u32>,
    rei_label: String,
    signal_word: Option<String>,
    notes: Option<String>,
}

impl From<&ChemicalProduct> for ProductItem {
    fn from(product: &ChemicalProduct) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            category: product.category,
            active_ingredient: product.active_ingredient.clone(),
            default_rate_per_gallon: product.default_rate_per_gallon,
            mix_rate: product.mix_rate.clone(),
            granular_rate_per_1000_sqft: product.granular_rate_per_1000_sqft,
            rei_hours: product.rei_hours,
            rei_label: product.rei_label(),
            signal_word: product.signal_word.clone(),
            notes: product.notes.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ProductQuery {
    pub category: Option<String>,
}

pub(super) async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<ApiResponse<Vec<ProductItem>>>, ApiError> {
    let category = query
        .category
        .as_deref()
        .map(str::parse::<ProductCategory>)
        .transpose()
        .map_err(|e| map_config_error(req_id.0.clone(), &e))?;

    let data = state
        .catalog
        .products()
        .iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .map(ProductItem::from)
        .collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
