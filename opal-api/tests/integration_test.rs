use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use opal_api::{app, AppState};
use opal_catalog::{
    OptimizationHistoryRepository, OptimizationRun, ProductRecord, ProductRepository,
};
use opal_engine::{OptimizerConfig, PriceOptimizer};

// ============================================================================
// In-memory repository fakes
// ============================================================================

#[derive(Default)]
struct InMemoryCatalog {
    products: Mutex<HashMap<Uuid, ProductRecord>>,
}

#[async_trait]
impl ProductRepository for InMemoryCatalog {
    async fn list_products(
        &self,
    ) -> Result<Vec<ProductRecord>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.products.lock().unwrap().values().cloned().collect())
    }

    async fn get_product(
        &self,
        id: Uuid,
    ) -> Result<Option<ProductRecord>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.products.lock().unwrap().get(&id).cloned())
    }

    async fn update_price(
        &self,
        id: Uuid,
        price: f64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if let Some(record) = self.products.lock().unwrap().get_mut(&id) {
            record.price = price;
        }
        Ok(())
    }
}

#[derive(Default)]
struct InMemoryHistory {
    runs: Mutex<Vec<OptimizationRun>>,
}

#[async_trait]
impl OptimizationHistoryRepository for InMemoryHistory {
    async fn record_run(
        &self,
        run: &OptimizationRun,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.runs.lock().unwrap().push(run.clone());
        Ok(())
    }

    async fn list_runs(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<OptimizationRun>, Box<dyn std::error::Error + Send + Sync>> {
        let mut runs: Vec<OptimizationRun> = self
            .runs
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.product_id == product_id)
            .cloned()
            .collect();
        runs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(runs)
    }

    async fn get_run(
        &self,
        id: Uuid,
    ) -> Result<Option<OptimizationRun>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self
            .runs
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn speaker(id: Uuid) -> ProductRecord {
    ProductRecord {
        id,
        name: "Bluetooth Speaker".to_string(),
        sku: Some("BS-210".to_string()),
        price: 20.0,
        cost: Some(10.0),
        category: Some("electronics".to_string()),
        sales_velocity: Some(2.0),
        historical_sales: Some(100.0),
        historical_price: Some(20.0),
        source: Some("lazada".to_string()),
    }
}

/// State backed by the in-memory fakes, with the artifact path pointing into
/// `model_dir` so tests control whether a model exists.
fn test_state(records: Vec<ProductRecord>, model_dir: &std::path::Path) -> AppState {
    let catalog = InMemoryCatalog::default();
    {
        let mut products = catalog.products.lock().unwrap();
        for record in records {
            products.insert(record.id, record);
        }
    }

    let config = OptimizerConfig {
        model_path: model_dir.join("price_model.json"),
        ..Default::default()
    };

    AppState {
        products: Arc::new(catalog),
        history: Arc::new(InMemoryHistory::default()),
        optimizer: Arc::new(PriceOptimizer::new(config)),
    }
}

async fn get(router: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn post(router: &axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn health_endpoint_responds() {
    let dir = tempfile::tempdir().unwrap();
    let router = app(test_state(vec![], dir.path()));

    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn optimize_recommends_and_records_history() {
    let dir = tempfile::tempdir().unwrap();
    let id = Uuid::new_v4();
    let router = app(test_state(vec![speaker(id)], dir.path()));

    let (status, body) = post(
        &router,
        "/v1/optimize",
        json!({
            "product_id": id,
            "parameters": { "competitor_price": 15.0 }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["optimal_price"], json!(12.0));
    assert_eq!(body["current_price"], json!(20.0));

    let sales = body["expected_sales"].as_f64().unwrap();
    assert_eq!(
        body["expected_revenue"].as_f64().unwrap(),
        12.0 * sales,
        "revenue must be derived from price and sales"
    );
    assert_eq!(body["expected_profit"].as_f64().unwrap(), (12.0 - 10.0) * sales);

    let (status, history) = get(&router, &format!("/v1/products/{}/history", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history.as_array().unwrap().len(), 1);
    assert_eq!(history[0]["recommended_price"], json!(12.0));
}

#[tokio::test]
async fn optimize_unknown_product_is_a_404_error_payload() {
    let dir = tempfile::tempdir().unwrap();
    let router = app(test_state(vec![], dir.path()));

    let (status, body) = post(
        &router,
        "/v1/optimize",
        json!({ "product_id": Uuid::new_v4() }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Product not found"));
}

#[tokio::test]
async fn optimize_without_cost_surfaces_the_reason() {
    let dir = tempfile::tempdir().unwrap();
    let id = Uuid::new_v4();
    let mut record = speaker(id);
    record.cost = None;
    let router = app(test_state(vec![record], dir.path()));

    let (status, body) = post(&router, "/v1/optimize", json!({ "product_id": id })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("cost"));
}

#[tokio::test]
async fn apply_writes_the_recommendation_back() {
    let dir = tempfile::tempdir().unwrap();
    let id = Uuid::new_v4();
    let router = app(test_state(vec![speaker(id)], dir.path()));

    let (_, body) = post(&router, "/v1/optimize", json!({ "product_id": id })).await;
    let run_id = body["run_id"].as_str().unwrap().to_string();

    let (status, applied) = post(
        &router,
        &format!("/v1/products/{}/apply/{}", id, run_id),
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(applied["price"], json!(12.0));

    let (_, product) = get(&router, &format!("/v1/products/{}", id)).await;
    assert_eq!(product["price"], json!(12.0));
}

#[tokio::test]
async fn apply_rejects_a_run_from_another_product() {
    let dir = tempfile::tempdir().unwrap();
    let id = Uuid::new_v4();
    let other = Uuid::new_v4();
    let mut second = speaker(other);
    second.name = "Desk Lamp".to_string();
    let router = app(test_state(vec![speaker(id), second], dir.path()));

    let (_, body) = post(&router, "/v1/optimize", json!({ "product_id": id })).await;
    let run_id = body["run_id"].as_str().unwrap().to_string();

    let (status, body) = post(
        &router,
        &format!("/v1/products/{}/apply/{}", other, run_id),
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("product"));
}

#[tokio::test]
async fn list_products_returns_summaries() {
    let dir = tempfile::tempdir().unwrap();
    let id = Uuid::new_v4();
    let router = app(test_state(vec![speaker(id)], dir.path()));

    let (status, body) = get(&router, "/v1/products").await;
    assert_eq!(status, StatusCode::OK);

    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], json!("Bluetooth Speaker"));
    assert_eq!(list[0]["price"], json!(20.0));
    // Summaries do not leak the full record.
    assert!(list[0].get("historical_sales").is_none());
}
