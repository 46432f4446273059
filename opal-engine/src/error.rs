use std::path::PathBuf;

/// Failures the engine surfaces to its caller.
#[derive(Debug, thiserror::Error)]
pub enum OptimizeError {
    /// The record carried no usable data at all.
    #[error("product record is empty")]
    InvalidRecord,

    /// Profit (or the heuristic markup) needs a unit cost the catalog does
    /// not have. An assumed cost would corrupt the figures, so this is
    /// never defaulted.
    #[error("unit cost is unknown for this product")]
    MissingCost,

    /// A model artifact was present but unusable, or produced an unusable
    /// prediction.
    #[error("model inference failed: {0}")]
    Inference(String),
}

/// Failures while probing the model artifact. Absence and low-level read
/// failures select the fallback path; malformed content does not.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("model artifact not found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read model artifact: {0}")]
    Io(std::io::Error),

    #[error("model artifact is malformed: {0}")]
    Malformed(serde_json::Error),
}
