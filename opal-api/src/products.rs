use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{repo_error, AppError};
use crate::state::AppState;
use opal_catalog::ProductRecord;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ProductSummary {
    pub id: Uuid,
    pub name: String,
    pub sku: Option<String>,
    pub price: f64,
    pub cost: Option<f64>,
    pub source: Option<String>,
}

impl From<ProductRecord> for ProductSummary {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            sku: record.sku,
            price: record.price,
            cost: record.cost,
            source: record.source,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /v1/products
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductSummary>>, AppError> {
    let products = state.products.list_products().await.map_err(repo_error)?;
    Ok(Json(products.into_iter().map(ProductSummary::from).collect()))
}

/// GET /v1/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductRecord>, AppError> {
    let record = state
        .products
        .get_product(id)
        .await
        .map_err(repo_error)?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(record))
}
