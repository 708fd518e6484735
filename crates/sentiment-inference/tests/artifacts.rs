use std::{fs, path::PathBuf};

use ahash::HashMap;
use sentiment_inference::{InferenceError, LinearClassifier, Predictor, Sentiment};
use tempfile::TempDir;
use tweet_pre_processing::{TfidfVectorizer, VectorizerParams};

/// Writes a four-word vectorizer and a matching linear model into a temp dir.
fn write_artifacts(weights: Vec<f64>) -> (TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let vocabulary: HashMap<String, usize> = [("love", 0), ("happy", 1), ("sad", 2), ("hate", 3)]
        .into_iter()
        .map(|(t, i)| (t.to_owned(), i))
        .collect();
    let vectorizer =
        TfidfVectorizer::from_parts(VectorizerParams::default(), vocabulary, vec![1.2, 1.1, 1.3, 1.4])
            .expect("Valid vectorizer parts");
    let vectorizer_path = dir.path().join("vectorizer.bin");
    fs::write(&vectorizer_path, vectorizer.to_bytes().expect("Vectorizer encodes"))
        .expect("Failed to write vectorizer");

    let classifier = LinearClassifier::new(weights, 0.0);
    let model_path = dir.path().join("model.bin");
    fs::write(&model_path, classifier.to_bytes().expect("Classifier encodes"))
        .expect("Failed to write model");

    (dir, vectorizer_path, model_path)
}

#[test]
fn test_load_and_predict() {
    let (_dir, vectorizer_path, model_path) = write_artifacts(vec![2.0, 1.0, -1.0, -2.0]);
    let predictor = Predictor::load(&vectorizer_path, &model_path).expect("Artifacts should load");

    let positive = predictor.predict("So happy, I love it!").unwrap();
    assert_eq!(positive.input, "So happy, I love it!");
    assert_eq!(positive.prediction, Sentiment::Positive);

    let negative = predictor.predict("sad day, hate mondays").unwrap();
    assert_eq!(negative.prediction, Sentiment::Negative);
}

#[test]
fn test_missing_artifact_fails_to_load() {
    let (dir, vectorizer_path, _model_path) = write_artifacts(vec![0.0; 4]);
    let err = Predictor::load(&vectorizer_path, dir.path().join("absent.bin")).unwrap_err();
    assert!(matches!(err, InferenceError::ArtifactRead { .. }));
    assert!(err.is_artifact_error());
}

#[test]
fn test_corrupt_artifact_fails_to_load() {
    let (_dir, vectorizer_path, model_path) = write_artifacts(vec![0.0; 4]);
    fs::write(&vectorizer_path, b"\xff\xff\xff garbage").unwrap();
    let err = Predictor::load(&vectorizer_path, &model_path).unwrap_err();
    assert!(matches!(err, InferenceError::ArtifactDecode { .. }));
    assert!(err.to_string().contains("vectorizer.bin"));
}

#[test]
fn test_width_mismatch_fails_to_load() {
    let (_dir, vectorizer_path, model_path) = write_artifacts(vec![1.0; 7]);
    let err = Predictor::load(&vectorizer_path, &model_path).unwrap_err();
    assert!(matches!(err, InferenceError::FeatureMismatch { expected: 7, actual: 4 }));
    assert!(!err.is_artifact_error());
}

#[cfg(not(feature = "onnx"))]
#[test]
fn test_onnx_requires_feature() {
    let (dir, vectorizer_path, _model_path) = write_artifacts(vec![0.0; 4]);
    let onnx_path = dir.path().join("model.onnx");
    fs::write(&onnx_path, b"onnx").unwrap();
    let err = Predictor::load(&vectorizer_path, &onnx_path).unwrap_err();
    assert!(matches!(err, InferenceError::UnsupportedArtifact { .. }));
}
