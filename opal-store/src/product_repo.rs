use async_trait::async_trait;
use opal_catalog::{ProductRecord, ProductRepository};
use sqlx::PgPool;
use uuid::Uuid;

pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal struct for type-safe querying. Money columns are DECIMAL in the
// schema and cast to FLOAT8 in the queries.
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    sku: Option<String>,
    price: f64,
    cost: Option<f64>,
    category: Option<String>,
    sales_velocity: Option<f64>,
    historical_sales: Option<f64>,
    historical_price: Option<f64>,
    source: Option<String>,
}

impl From<ProductRow> for ProductRecord {
    fn from(row: ProductRow) -> Self {
        ProductRecord {
            id: row.id,
            name: row.name,
            sku: row.sku,
            price: row.price,
            cost: row.cost,
            category: row.category,
            sales_velocity: row.sales_velocity,
            historical_sales: row.historical_sales,
            historical_price: row.historical_price,
            source: row.source,
        }
    }
}

const PRODUCT_COLUMNS: &str = "id, name, sku, price::FLOAT8 AS price, cost::FLOAT8 AS cost, \
     category, sales_velocity::FLOAT8 AS sales_velocity, \
     historical_sales::FLOAT8 AS historical_sales, \
     historical_price::FLOAT8 AS historical_price, source";

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list_products(
        &self,
    ) -> Result<Vec<ProductRecord>, Box<dyn std::error::Error + Send + Sync>> {
        let rows: Vec<ProductRow> = sqlx::query_as(&format!(
            "SELECT {} FROM products ORDER BY name",
            PRODUCT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductRecord::from).collect())
    }

    async fn get_product(
        &self,
        id: Uuid,
    ) -> Result<Option<ProductRecord>, Box<dyn std::error::Error + Send + Sync>> {
        let row: Option<ProductRow> = sqlx::query_as(&format!(
            "SELECT {} FROM products WHERE id = $1",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProductRecord::from))
    }

    async fn update_price(
        &self,
        id: Uuid,
        price: f64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query("UPDATE products SET price = $1 WHERE id = $2")
            .bind(price)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
