use std::path::PathBuf;

use thiserror::Error;
use tweet_pre_processing::VectorizerError;

#[derive(Error, Debug)]
pub enum InferenceError {
    // Artifact loading
    #[error("Failed to read artifact {}", path.display())]
    ArtifactRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode artifact {}", path.display())]
    ArtifactDecode {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Unsupported artifact {}: {reason}", path.display())]
    UnsupportedArtifact { path: PathBuf, reason: &'static str },

    // Inference
    #[error("Classifier expects {expected} features but the vectorizer produces {actual}")]
    FeatureMismatch { expected: usize, actual: usize },

    #[error("Classifier returned {actual} labels for {expected} documents")]
    MissingOutput { expected: usize, actual: usize },

    #[error("Classifier session is poisoned by an earlier panic")]
    SessionPoisoned,

    // Pass-through from dependencies
    #[error(transparent)]
    Vectorizer(#[from] VectorizerError),

    #[error(transparent)]
    Encode(#[from] bincode::error::EncodeError),

    #[cfg(feature = "onnx")]
    #[error(transparent)]
    Onnx(#[from] ort::Error),
}

impl InferenceError {
    /// True for failures that happen while loading artifacts at startup.
    #[must_use]
    pub fn is_artifact_error(&self) -> bool {
        matches!(
            self,
            Self::ArtifactRead { .. } | Self::ArtifactDecode { .. } | Self::UnsupportedArtifact { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, InferenceError>;
