use std::{path::Path, sync::Mutex};

use ort::{
    session::{Session, SessionOutputs, builder::GraphOptimizationLevel},
    value::{Tensor, TensorValueType, Value},
};
use sprs::CsMat;
use tracing::debug;

use crate::{Classifier, InferenceError, Result};

/// A classifier exported to ONNX (e.g. with `skl2onnx`).
///
/// The graph takes a dense `[batch, features]` `f32` tensor and its first
/// output is the `i64` label tensor.
pub struct OnnxClassifier {
    // `Session::run` needs `&mut self`
    session: Mutex<Session>,
}

impl OnnxClassifier {
    pub fn from_memory(bytes: &[u8]) -> ort::Result<Self> {
        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_intra_threads(1)?
            .commit_from_memory(bytes)?;
        Ok(Self {
            session: Mutex::new(session),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| InferenceError::ArtifactRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_memory(&bytes).map_err(|source| InferenceError::ArtifactDecode {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
    }
}

#[allow(clippy::cast_possible_truncation)]
fn prepare_input_for_inference(
    features: &CsMat<f64>,
) -> ort::Result<Value<TensorValueType<f32>>> {
    let (rows, cols) = features.shape();
    let mut data = vec![0.0_f32; rows * cols];
    for (row_idx, row) in features.to_csr().outer_iterator().enumerate() {
        for (col_idx, &value) in row.iter() {
            data[row_idx * cols + col_idx] = value as f32;
        }
    }
    Tensor::from_array((vec![rows, cols], data.into_boxed_slice()))
}

fn run_model_inference(
    session: &mut Session,
    input: Value<TensorValueType<f32>>,
) -> ort::Result<SessionOutputs<'_>> {
    let input_name = session.inputs[0].name.clone();
    session.run(ort::inputs![input_name => input])
}

/// First output: class labels (e.g., [1])
fn parse_model_outputs(outputs: &SessionOutputs<'_>) -> ort::Result<Vec<i64>> {
    Ok(outputs[0]
        .try_extract_array::<i64>()?
        .iter()
        .copied()
        .collect())
}

impl Classifier for OnnxClassifier {
    fn predict(&self, features: &CsMat<f64>) -> Result<Vec<i64>> {
        let input = prepare_input_for_inference(features)?;
        let labels = {
            let mut session = self
                .session
                .lock()
                .map_err(|_| InferenceError::SessionPoisoned)?;
            let outputs = run_model_inference(&mut session, input)?;
            parse_model_outputs(&outputs)?
        };
        debug!(num_rows = labels.len(), "Scored rows with ONNX classifier");
        Ok(labels)
    }

    fn num_features(&self) -> Option<usize> {
        None
    }
}
