use std::borrow::Cow;

use sprs::CsMat;
use tracing::debug;

use crate::{Classifier, InferenceError, Result};

/// Linear binary classifier: `label = 1` when `w·x + b > 0`.
///
/// Covers the coefficients of a fitted logistic regression or linear SVM.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize, bincode::Encode, bincode::Decode)]
pub struct LinearClassifier {
    weights: Vec<f64>,
    intercept: f64,
}

impl LinearClassifier {
    #[must_use]
    pub fn new(weights: Vec<f64>, intercept: f64) -> Self {
        Self { weights, intercept }
    }

    pub fn from_bytes(bytes: &[u8]) -> std::result::Result<Self, bincode::error::DecodeError> {
        let (classifier, _): (Self, usize) =
            bincode::decode_from_slice(bytes, bincode::config::standard())?;
        Ok(classifier)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::encode_to_vec(self, bincode::config::standard())?)
    }

    /// Signed distance of every row from the decision boundary.
    pub fn decision_function(&self, features: &CsMat<f64>) -> Result<Vec<f64>> {
        if features.cols() != self.weights.len() {
            return Err(InferenceError::FeatureMismatch {
                expected: self.weights.len(),
                actual: features.cols(),
            });
        }
        let rows: Cow<'_, CsMat<f64>> = if features.is_csr() {
            Cow::Borrowed(features)
        } else {
            Cow::Owned(features.to_csr())
        };

        Ok(rows
            .outer_iterator()
            .map(|row| {
                row.iter()
                    .map(|(col_idx, &value)| value * self.weights[col_idx])
                    .sum::<f64>()
                    + self.intercept
            })
            .collect())
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl Classifier for LinearClassifier {
    fn predict(&self, features: &CsMat<f64>) -> Result<Vec<i64>> {
        let scores = self.decision_function(features)?;
        debug!(num_rows = scores.len(), "Scored rows with linear classifier");
        Ok(scores
            .into_iter()
            .map(|score| i64::from(score > 0.0))
            .collect())
    }

    fn num_features(&self) -> Option<usize> {
        Some(self.weights.len())
    }
}
