use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ArtifactError;
use crate::features::FeatureVector;

/// Coefficients for the numeric features of the exported model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelWeights {
    pub cost: f64,
    pub competitor_price: f64,
    pub sales_velocity: f64,
}

/// A trained price model, exported by the offline training pipeline as a
/// portable coefficient file.
///
/// Prediction is a dot product over the encoded feature vector: the same
/// artifact and features always produce the same price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceModel {
    pub intercept: f64,
    pub weights: ModelWeights,

    /// Additive contribution per category label; unlisted labels add zero.
    #[serde(default)]
    pub category_weights: HashMap<String, f64>,

    /// Additive contribution per season label; unlisted labels add zero.
    #[serde(default)]
    pub season_weights: HashMap<String, f64>,
}

impl PriceModel {
    /// Read and deserialize the artifact at `path`. The file handle is
    /// released before this returns; nothing is cached across calls.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let bytes = fs::read(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ArtifactError::NotFound(path.to_path_buf())
            } else {
                ArtifactError::Io(e)
            }
        })?;
        serde_json::from_slice(&bytes).map_err(ArtifactError::Malformed)
    }

    /// Predict a single scalar price for the given features. An unknown
    /// cost contributes nothing rather than a made-up value.
    pub fn predict(&self, features: &FeatureVector) -> f64 {
        let mut price = self.intercept;
        if let Some(cost) = features.cost {
            price += self.weights.cost * cost;
        }
        price += self.weights.competitor_price * features.competitor_price;
        price += self.weights.sales_velocity * features.sales_velocity;
        price += self
            .category_weights
            .get(&features.category)
            .copied()
            .unwrap_or(0.0);
        price += self
            .season_weights
            .get(&features.season)
            .copied()
            .unwrap_or(0.0);
        price
    }
}
