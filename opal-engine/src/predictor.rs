use std::path::Path;

use crate::config::OptimizerConfig;
use crate::error::{ArtifactError, OptimizeError};
use crate::features::FeatureVector;
use crate::model::PriceModel;

/// The two prediction paths. Which one runs is decided by a capability
/// probe on the artifact location, not by exception control flow.
#[derive(Debug)]
pub enum Prediction {
    /// A trained model is available and its output is trusted verbatim.
    Model(PriceModel),
    /// No artifact on disk; use the deterministic markup rule.
    Heuristic,
}

impl Prediction {
    /// Probe the artifact location. Absence or a low-level read failure
    /// selects the heuristic; a malformed artifact is an inference fault
    /// and propagates.
    pub fn resolve(path: &Path) -> Result<Self, OptimizeError> {
        match PriceModel::load(path) {
            Ok(model) => Ok(Prediction::Model(model)),
            Err(ArtifactError::NotFound(_)) | Err(ArtifactError::Io(_)) => {
                Ok(Prediction::Heuristic)
            }
            Err(err @ ArtifactError::Malformed(_)) => {
                Err(OptimizeError::Inference(err.to_string()))
            }
        }
    }

    /// Produce the candidate price for the given features.
    pub fn price(
        &self,
        features: &FeatureVector,
        config: &OptimizerConfig,
    ) -> Result<f64, OptimizeError> {
        match self {
            Prediction::Model(model) => {
                let price = model.predict(features);
                if !price.is_finite() {
                    return Err(OptimizeError::Inference(
                        "model produced a non-finite price".to_string(),
                    ));
                }
                // The model branch has no floor: clamping belongs to the
                // heuristic only.
                Ok(price)
            }
            Prediction::Heuristic => heuristic_price(features, config),
        }
    }
}

/// Markup over cost, undercut a known competitor, and never drop below the
/// margin floor.
fn heuristic_price(
    features: &FeatureVector,
    config: &OptimizerConfig,
) -> Result<f64, OptimizeError> {
    let cost = features.cost.ok_or(OptimizeError::MissingCost)?;

    let mut price = cost * config.markup_factor;
    if features.competitor_price > 0.0 {
        price = price.min(features.competitor_price * config.undercut_factor);
    }
    Ok(price.max(cost * config.margin_floor_factor))
}
