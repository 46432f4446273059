use async_trait::async_trait;
use chrono::{DateTime, Utc};
use opal_catalog::{OptimizationHistoryRepository, OptimizationRun};
use sqlx::PgPool;
use uuid::Uuid;

pub struct PgHistoryRepository {
    pool: PgPool,
}

impl PgHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RunRow {
    id: Uuid,
    product_id: Uuid,
    current_price: f64,
    recommended_price: f64,
    expected_sales: f64,
    expected_revenue: f64,
    expected_profit: f64,
    created_at: DateTime<Utc>,
}

impl From<RunRow> for OptimizationRun {
    fn from(row: RunRow) -> Self {
        OptimizationRun {
            id: row.id,
            product_id: row.product_id,
            current_price: row.current_price,
            recommended_price: row.recommended_price,
            expected_sales: row.expected_sales,
            expected_revenue: row.expected_revenue,
            expected_profit: row.expected_profit,
            created_at: row.created_at,
        }
    }
}

const RUN_COLUMNS: &str = "id, product_id, current_price::FLOAT8 AS current_price, \
     recommended_price::FLOAT8 AS recommended_price, \
     expected_sales::FLOAT8 AS expected_sales, \
     expected_revenue::FLOAT8 AS expected_revenue, \
     expected_profit::FLOAT8 AS expected_profit, created_at";

#[async_trait]
impl OptimizationHistoryRepository for PgHistoryRepository {
    async fn record_run(
        &self,
        run: &OptimizationRun,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query(
            r#"
            INSERT INTO price_optimization_history (
                id, product_id, current_price, recommended_price,
                expected_sales, expected_revenue, expected_profit, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(run.id)
        .bind(run.product_id)
        .bind(run.current_price)
        .bind(run.recommended_price)
        .bind(run.expected_sales)
        .bind(run.expected_revenue)
        .bind(run.expected_profit)
        .bind(run.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_runs(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<OptimizationRun>, Box<dyn std::error::Error + Send + Sync>> {
        let rows: Vec<RunRow> = sqlx::query_as(&format!(
            "SELECT {} FROM price_optimization_history WHERE product_id = $1 ORDER BY created_at DESC",
            RUN_COLUMNS
        ))
        .bind(product_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(OptimizationRun::from).collect())
    }

    async fn get_run(
        &self,
        id: Uuid,
    ) -> Result<Option<OptimizationRun>, Box<dyn std::error::Error + Send + Sync>> {
        let row: Option<RunRow> = sqlx::query_as(&format!(
            "SELECT {} FROM price_optimization_history WHERE id = $1",
            RUN_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(OptimizationRun::from))
    }
}
