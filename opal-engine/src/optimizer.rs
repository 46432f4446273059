use opal_catalog::ProductRecord;
use serde::Serialize;

use crate::config::OptimizerConfig;
use crate::demand;
use crate::error::OptimizeError;
use crate::features::{FeatureVector, OptimizationParameters};
use crate::predictor::Prediction;

/// The optimization outcome. Immutable once produced; every call builds a
/// fresh value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationResult {
    pub optimal_price: f64,
    pub expected_sales: f64,
    pub expected_revenue: f64,
    pub expected_profit: f64,
    pub current_price: f64,
}

/// Stateless price optimization engine.
///
/// Holds only its injected constants: every call is independently
/// re-entrant and identical inputs produce identical output.
pub struct PriceOptimizer {
    config: OptimizerConfig,
}

impl PriceOptimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// Recommend a price for `record` and project its expected outcome.
    ///
    /// The only I/O is the scoped artifact probe; the handle is released
    /// before projection starts.
    pub fn optimize(
        &self,
        record: &ProductRecord,
        params: &OptimizationParameters,
    ) -> Result<OptimizationResult, OptimizeError> {
        if record.is_empty() {
            return Err(OptimizeError::InvalidRecord);
        }

        let features = FeatureVector::build(record, params);
        let prediction = Prediction::resolve(&self.config.model_path)?;
        let optimal_price = prediction.price(&features, &self.config)?;
        let projection = demand::project(optimal_price, record, &self.config)?;

        Ok(OptimizationResult {
            optimal_price,
            expected_sales: projection.expected_sales,
            expected_revenue: projection.expected_revenue,
            expected_profit: projection.expected_profit,
            current_price: record.price,
        })
    }
}
