use async_trait::async_trait;
use uuid::Uuid;

use crate::history::OptimizationRun;
use crate::product::ProductRecord;

/// Repository trait for product catalog access
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list_products(
        &self,
    ) -> Result<Vec<ProductRecord>, Box<dyn std::error::Error + Send + Sync>>;

    async fn get_product(
        &self,
        id: Uuid,
    ) -> Result<Option<ProductRecord>, Box<dyn std::error::Error + Send + Sync>>;

    /// Write an accepted recommendation back to the catalog row.
    async fn update_price(
        &self,
        id: Uuid,
        price: f64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Repository trait for persisted optimization runs
#[async_trait]
pub trait OptimizationHistoryRepository: Send + Sync {
    async fn record_run(
        &self,
        run: &OptimizationRun,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn list_runs(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<OptimizationRun>, Box<dyn std::error::Error + Send + Sync>>;

    async fn get_run(
        &self,
        id: Uuid,
    ) -> Result<Option<OptimizationRun>, Box<dyn std::error::Error + Send + Sync>>;
}
