use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog row as supplied by upstream ingestion.
///
/// Optional fields are genuinely optional in the source data. Downstream
/// consumers fill defaults where a computation tolerates it and surface an
/// error where it does not; nothing here guesses a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: Uuid,
    pub name: String,
    pub sku: Option<String>,

    /// Current listed price. Expected positive; zero is tolerated.
    pub price: f64,

    /// Unit cost. Unknown upstream stays unknown here.
    pub cost: Option<f64>,

    pub category: Option<String>,

    /// Recent sales rate (units per day).
    pub sales_velocity: Option<f64>,

    /// Baseline pair for demand estimation.
    pub historical_sales: Option<f64>,
    pub historical_price: Option<f64>,

    /// Marketplace the row was imported from.
    pub source: Option<String>,
}

impl ProductRecord {
    /// True for a placeholder row carrying no usable data: nil id, zero
    /// price, and neither cost nor a historical baseline.
    pub fn is_empty(&self) -> bool {
        self.id.is_nil()
            && self.price == 0.0
            && self.cost.is_none()
            && self.historical_sales.is_none()
            && self.historical_price.is_none()
    }
}
