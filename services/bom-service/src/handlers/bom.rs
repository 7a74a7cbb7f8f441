//! BOM Handlers
//!
//! Preview and generation of BOMs from a product variant's attributes.

use std::collections::HashMap;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use forgebom_models::{AttributeSet, BomLine, ProductFamily};
use forgebom_rules::{BomPreview, GenerationOutcome};
use forgebom_utils::bom::AttributeExtractor;
use forgebom_utils::{log_error, validate_model, ErrorResponse, ForgeError};

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub product_family: String,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateRequest {
    pub product_id: Uuid,
    pub product_family: String,
    #[validate(length(min = 1, max = 255, message = "Reference must be between 1 and 255 characters"))]
    pub reference: String,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub bom_id: Uuid,
    pub lines: Vec<BomLine>,
}

/// Error body with the status the error maps to.
pub struct ApiError(ForgeError);

impl From<ForgeError> for ApiError {
    fn from(error: ForgeError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorResponse::from(self.0))).into_response()
    }
}

fn variant(
    family: &str,
    attributes: HashMap<String, String>,
) -> Result<(ProductFamily, AttributeSet), ForgeError> {
    let family = ProductFamily::from_template_name(family.trim())?;
    let extraction = AttributeExtractor::new().extract(attributes);
    for warning in &extraction.warnings {
        tracing::warn!(family = %family, warning = %warning, "Attribute extraction");
    }
    Ok((family, extraction.attributes))
}

fn record_failure(state: &AppState, error: ForgeError) -> ApiError {
    if error.is_validation() {
        state.metrics.rule_failures.inc();
        tracing::info!(code = error.error_code(), error = %error, "BOM request rejected");
    } else {
        log_error!(error, "BOM request failed", code = error.error_code());
    }
    ApiError(error)
}

/// Derive a BOM without writing it
///
/// POST /api/v1/bom/preview
pub async fn preview_bom(
    State(state): State<AppState>,
    Json(request): Json<PreviewRequest>,
) -> Result<Json<BomPreview>, ApiError> {
    let (family, attrs) = variant(&request.product_family, request.attributes)?;
    let preview = state
        .generator
        .preview(family, &attrs)
        .await
        .map_err(|e| record_failure(&state, e))?;
    Ok(Json(preview))
}

/// Derive and persist a BOM
///
/// POST /api/v1/bom/generate
pub async fn generate_bom(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<(StatusCode, Json<GenerateResponse>), ApiError> {
    validate_model(&request)?;
    let (family, attrs) = variant(&request.product_family, request.attributes)?;

    let outcome = state
        .generator
        .generate(request.product_id, family, &request.reference, &attrs)
        .await
        .map_err(|e| record_failure(&state, e))?;

    match outcome {
        GenerationOutcome::Created { bom_id, lines } => {
            state.metrics.boms_generated.inc();
            Ok((StatusCode::CREATED, Json(GenerateResponse { bom_id, lines })))
        }
        GenerationOutcome::Skipped { product_id } => Err(ApiError(ForgeError::conflict(format!(
            "A BOM already exists for core barrel product {}",
            product_id
        )))),
    }
}
