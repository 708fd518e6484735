//! # sentiment-inference
//!
//! Binary sentiment prediction for short texts such as tweets.
//!
//! A [`Predictor`] chains three steps: tweet normalization, a fitted TF-IDF
//! [`Vectorizer`] and a fitted binary [`Classifier`]. The two fitted pieces
//! are loaded from artifacts produced elsewhere; this crate never trains.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sentiment_inference::Predictor;
//!
//! let predictor = Predictor::load("Models/vectorizer.bin", "Models/model.bin")?;
//! let prediction = predictor.predict("I love this!")?;
//! println!("{}: {}", prediction.input, prediction.prediction);
//! # Ok::<(), sentiment_inference::InferenceError>(())
//! ```
//!
//! ## Custom artifacts
//!
//! Anything implementing [`Vectorizer`] and [`Classifier`] can be plugged in:
//!
//! ```rust
//! use sentiment_inference::{LinearClassifier, Predictor, Sentiment};
//! use tweet_pre_processing::{TfidfVectorizer, VectorizerParams};
//!
//! let vocabulary = [("love".to_owned(), 0), ("hate".to_owned(), 1)].into_iter().collect();
//! let vectorizer = TfidfVectorizer::from_parts(VectorizerParams::default(), vocabulary, vec![1.0, 1.0])?;
//! let classifier = LinearClassifier::new(vec![1.0, -1.0], 0.0);
//!
//! let predictor = Predictor::new(vectorizer, classifier);
//! assert_eq!(predictor.classify("I love it")?, Sentiment::Positive);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
pub mod model;
mod pipeline;

pub use error::{InferenceError, Result};
#[cfg(feature = "onnx")]
pub use model::OnnxClassifier;
pub use model::{LinearClassifier, load_classifier, load_vectorizer};
pub use pipeline::{Predictor, Sentiment, SentimentPrediction};
use sprs::CsMat;
use tweet_pre_processing::TfidfVectorizer;

/// Turns cleaned documents into one feature row each.
pub trait Vectorizer: Send + Sync {
    fn transform(&self, documents: &[&str]) -> Result<CsMat<f64>>;

    /// Width of every row `transform` returns.
    fn num_features(&self) -> usize;
}

/// Maps feature rows to integer class labels, one per row.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &CsMat<f64>) -> Result<Vec<i64>>;

    /// Row width the classifier was fitted on, when the artifact records it.
    fn num_features(&self) -> Option<usize>;
}

impl Vectorizer for TfidfVectorizer {
    fn transform(&self, documents: &[&str]) -> Result<CsMat<f64>> {
        Ok(TfidfVectorizer::transform(self, documents))
    }

    fn num_features(&self) -> usize {
        TfidfVectorizer::num_features(self)
    }
}
