use opal_catalog::ProductRecord;
use serde::{Deserialize, Serialize};

/// Category label substituted when the catalog row has none.
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// Season label substituted when the caller supplies none.
pub const REGULAR_SEASON: &str = "regular";

/// Caller-supplied knobs for one optimization request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationParameters {
    /// A competitor's listed price; zero means no competitor signal.
    #[serde(default)]
    pub competitor_price: f64,

    #[serde(default = "default_season")]
    pub season: String,
}

fn default_season() -> String {
    REGULAR_SEASON.to_string()
}

impl Default for OptimizationParameters {
    fn default() -> Self {
        Self {
            competitor_price: 0.0,
            season: default_season(),
        }
    }
}

/// The fixed-shape input both prediction paths consume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    pub category: String,
    /// Unit cost stays optional here; only computations that genuinely need
    /// it may reject its absence.
    pub cost: Option<f64>,
    pub competitor_price: f64,
    pub sales_velocity: f64,
    pub season: String,
}

impl FeatureVector {
    /// Build the vector from a record plus request parameters.
    ///
    /// Defaulting is total: an absent optional field never produces an
    /// error here. This never touches storage.
    pub fn build(record: &ProductRecord, params: &OptimizationParameters) -> Self {
        Self {
            category: record
                .category
                .clone()
                .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string()),
            cost: record.cost,
            competitor_price: params.competitor_price,
            sales_velocity: record.sales_velocity.unwrap_or(0.0),
            season: params.season.clone(),
        }
    }
}
