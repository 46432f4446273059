use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{engine_error, repo_error, AppError};
use crate::state::AppState;
use opal_catalog::OptimizationRun;
use opal_engine::OptimizationParameters;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub product_id: Uuid,
    #[serde(default)]
    pub parameters: OptimizationParameters,
}

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    /// Persisted run id, usable with the apply endpoint.
    pub run_id: Uuid,
    pub optimal_price: f64,
    pub expected_sales: f64,
    pub expected_revenue: f64,
    pub expected_profit: f64,
    pub current_price: f64,
}

#[derive(Debug, Serialize)]
pub struct ApplyResponse {
    pub product_id: Uuid,
    pub price: f64,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /v1/optimize
/// Resolve the record, run the engine, persist the run, return the result.
pub async fn optimize_price(
    State(state): State<AppState>,
    Json(req): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, AppError> {
    let record = state
        .products
        .get_product(req.product_id)
        .await
        .map_err(repo_error)?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    let result = state
        .optimizer
        .optimize(&record, &req.parameters)
        .map_err(engine_error)?;

    let run = OptimizationRun {
        id: Uuid::new_v4(),
        product_id: record.id,
        current_price: result.current_price,
        recommended_price: result.optimal_price,
        expected_sales: result.expected_sales,
        expected_revenue: result.expected_revenue,
        expected_profit: result.expected_profit,
        created_at: Utc::now(),
    };
    state.history.record_run(&run).await.map_err(repo_error)?;

    Ok(Json(OptimizeResponse {
        run_id: run.id,
        optimal_price: result.optimal_price,
        expected_sales: result.expected_sales,
        expected_revenue: result.expected_revenue,
        expected_profit: result.expected_profit,
        current_price: result.current_price,
    }))
}

/// GET /v1/products/{id}/history
pub async fn list_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<OptimizationRun>>, AppError> {
    let runs = state.history.list_runs(id).await.map_err(repo_error)?;
    Ok(Json(runs))
}

/// POST /v1/products/{id}/apply/{run_id}
/// Write a recommended price back to the catalog row.
pub async fn apply_run(
    State(state): State<AppState>,
    Path((id, run_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApplyResponse>, AppError> {
    let run = state
        .history
        .get_run(run_id)
        .await
        .map_err(repo_error)?
        .ok_or_else(|| AppError::NotFound("Optimization run not found".to_string()))?;

    if run.product_id != id {
        return Err(AppError::Validation(
            "Run does not belong to this product".to_string(),
        ));
    }

    state
        .products
        .update_price(id, run.recommended_price)
        .await
        .map_err(repo_error)?;

    Ok(Json(ApplyResponse {
        product_id: id,
        price: run.recommended_price,
    }))
}
