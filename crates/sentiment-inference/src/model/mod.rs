//! Artifact loading.
//!
//! Both artifacts are read from disk once at startup. The vectorizer is always
//! a bincode `TfidfVectorizer`; the classifier kind follows the file extension.

mod linear;
#[cfg(feature = "onnx")]
mod onnx;

use std::{ffi::OsStr, path::Path};

pub use linear::LinearClassifier;
#[cfg(feature = "onnx")]
pub use onnx::OnnxClassifier;
use tracing::info;
use tweet_pre_processing::TfidfVectorizer;

use crate::{Classifier, InferenceError, Result};

pub const ONNX_EXTENSION: &str = "onnx";

fn read_artifact(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| InferenceError::ArtifactRead {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_vectorizer(path: &Path) -> Result<TfidfVectorizer> {
    let bytes = read_artifact(path)?;
    let vectorizer =
        TfidfVectorizer::from_bytes(&bytes).map_err(|source| InferenceError::ArtifactDecode {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
    info!(
        path = %path.display(),
        num_features = vectorizer.num_features(),
        "Loaded vectorizer"
    );
    Ok(vectorizer)
}

pub fn load_classifier(path: &Path) -> Result<Box<dyn Classifier>> {
    if path.extension().and_then(OsStr::to_str) == Some(ONNX_EXTENSION) {
        return load_onnx_classifier(path);
    }

    let bytes = read_artifact(path)?;
    let classifier =
        LinearClassifier::from_bytes(&bytes).map_err(|source| InferenceError::ArtifactDecode {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
    info!(
        path = %path.display(),
        num_features = classifier.weights().len(),
        "Loaded linear classifier"
    );
    Ok(Box::new(classifier))
}

#[cfg(feature = "onnx")]
fn load_onnx_classifier(path: &Path) -> Result<Box<dyn Classifier>> {
    let classifier = OnnxClassifier::from_file(path)?;
    info!(path = %path.display(), "Loaded ONNX classifier");
    Ok(Box::new(classifier))
}

#[cfg(not(feature = "onnx"))]
fn load_onnx_classifier(path: &Path) -> Result<Box<dyn Classifier>> {
    Err(InferenceError::UnsupportedArtifact {
        path: path.to_path_buf(),
        reason: "built without the `onnx` feature",
    })
}
