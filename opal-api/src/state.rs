use std::sync::Arc;

use opal_catalog::{OptimizationHistoryRepository, ProductRepository};
use opal_engine::PriceOptimizer;

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
    pub history: Arc<dyn OptimizationHistoryRepository>,
    pub optimizer: Arc<PriceOptimizer>,
}
