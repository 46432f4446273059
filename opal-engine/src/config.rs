use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Engine constants, injected at construction so deployments and tests can
/// override any of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Price elasticity of demand. Negative: a higher price sells fewer units.
    #[serde(default = "default_elasticity")]
    pub elasticity: f64,

    /// Multiplier over unit cost for the heuristic candidate price.
    #[serde(default = "default_markup_factor")]
    pub markup_factor: f64,

    /// Fraction of a known competitor price to undercut to.
    #[serde(default = "default_undercut_factor")]
    pub undercut_factor: f64,

    /// Floor multiplier over unit cost. The heuristic never prices below it.
    #[serde(default = "default_margin_floor_factor")]
    pub margin_floor_factor: f64,

    /// Baseline sales volume assumed for products with no history on file.
    #[serde(default = "default_base_sales")]
    pub default_base_sales: f64,

    /// Location of the trained model artifact.
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,
}

fn default_elasticity() -> f64 {
    -1.2
}

fn default_markup_factor() -> f64 {
    1.2
}

fn default_undercut_factor() -> f64 {
    0.95
}

fn default_margin_floor_factor() -> f64 {
    1.1
}

fn default_base_sales() -> f64 {
    100.0
}

fn default_model_path() -> PathBuf {
    PathBuf::from("models/price_model.json")
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            elasticity: default_elasticity(),
            markup_factor: default_markup_factor(),
            undercut_factor: default_undercut_factor(),
            margin_floor_factor: default_margin_floor_factor(),
            default_base_sales: default_base_sales(),
            model_path: default_model_path(),
        }
    }
}
