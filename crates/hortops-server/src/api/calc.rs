use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use hortops_core::{
    format_granular_results_html, format_mix_results_html, products::lenient_f64, GranularRate,
    GranularResult, MixResult, ProductRate,
};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{
    json_body, map_calc_error, map_config_error, ApiError, ApiResponse, AppState, ResponseMeta,
};

#[derive(Debug, Deserialize)]
pub(super) struct MixRequest {
    #[serde(default, alias = "tankSize", deserialize_with = "lenient_f64")]
    tank_size: Option<f64>,
    /// Catalog ids, resolved in order.
    #[serde(default, alias = "productIds")]
    product_ids: Vec<String>,
    /// Caller-supplied products, appended after the catalog ones.
    #[serde(default)]
    products: Vec<ProductRate>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GranularRequest {
    #[serde(default, alias = "areaSqFt", deserialize_with = "lenient_f64")]
    area_sq_ft: Option<f64>,
    #[serde(default, alias = "productId")]
    product_id: Option<String>,
    #[serde(
        default,
        alias = "ratePerThousandSqFt",
        deserialize_with = "lenient_f64"
    )]
    rate_per_thousand_sq_ft: Option<f64>,
    #[serde(default, alias = "productName")]
    product_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct MixResponse {
    #[serde(flatten)]
    result: MixResult,
    html: String,
}

#[derive(Debug, Serialize)]
pub(super) struct GranularResponse {
    #[serde(flatten)]
    result: GranularResult,
    html: String,
}

pub(super) async fn calculate_mix(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<MixRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<MixResponse>>, ApiError> {
    let request = json_body(&req_id.0, body)?;

    let mut products = state
        .catalog
        .select(&request.product_ids)
        .map_err(|e| map_config_error(req_id.0.clone(), &e))?;
    products.extend(request.products);

    let result = state
        .mix_settings
        .calculate_mix(request.tank_size, &products);
    let html = format_mix_results_html(&result);
    let result = result.map_err(|e| map_calc_error(req_id.0.clone(), e))?;

    Ok(Json(ApiResponse {
        data: MixResponse { result, html },
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn calculate_granular(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<GranularRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<GranularResponse>>, ApiError> {
    let request = json_body(&req_id.0, body)?;

    let input = match request.product_id.as_deref() {
        Some(_) if request.rate_per_thousand_sq_ft.is_some() => {
            return Err(ApiError::new(
                req_id.0,
                "validation_error",
                "send either product_id or rate_per_thousand_sq_ft, not both",
            ));
        }
        Some(id) => {
            let product = state.catalog.get(id).ok_or_else(|| {
                map_config_error(
                    req_id.0.clone(),
                    &hortops_core::ConfigError::UnknownProduct(id.to_string()),
                )
            })?;
            GranularRate {
                area_sq_ft: request.area_sq_ft,
                rate_per_thousand_sq_ft: product.granular_rate_per_1000_sqft,
                product_name: request.product_name.or_else(|| Some(product.name.clone())),
            }
        }
        None => GranularRate {
            area_sq_ft: request.area_sq_ft,
            rate_per_thousand_sq_ft: request.rate_per_thousand_sq_ft,
            product_name: request.product_name,
        },
    };

    let result = input.calculate();
    let html = format_granular_results_html(&result);
    let result = result.map_err(|e| map_calc_error(req_id.0.clone(), e))?;

    Ok(Json(ApiResponse {
        data: GranularResponse { result, html },
        meta: ResponseMeta::new(req_id.0),
    }))
}
