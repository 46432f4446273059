use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One persisted optimization outcome for a product.
///
/// Rows are append-only; applying a recommendation writes the price back to
/// the catalog but never rewrites the run that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRun {
    pub id: Uuid,
    pub product_id: Uuid,
    pub current_price: f64,
    pub recommended_price: f64,
    pub expected_sales: f64,
    pub expected_revenue: f64,
    pub expected_profit: f64,
    pub created_at: DateTime<Utc>,
}
