use core::fmt;
use std::path::Path;

use sprs::CsMat;
use tracing::debug;
use tweet_pre_processing::TextNormalizer;

use crate::{Classifier, InferenceError, Result, Vectorizer, model};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Sentiment {
    Negative,
    Positive,
}

impl Sentiment {
    /// Label 1 is positive; every other label is negative.
    #[must_use]
    pub fn from_label(label: i64) -> Self {
        if label == 1 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    #[must_use]
    pub fn is_positive(&self) -> bool {
        matches!(self, Self::Positive)
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative => write!(f, "Negative"),
            Self::Positive => write!(f, "Positive"),
        }
    }
}

impl From<i64> for Sentiment {
    fn from(label: i64) -> Self {
        Self::from_label(label)
    }
}

impl From<Sentiment> for i64 {
    fn from(sentiment: Sentiment) -> Self {
        match sentiment {
            Sentiment::Negative => 0,
            Sentiment::Positive => 1,
        }
    }
}

/// The input text, verbatim, and its predicted sentiment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SentimentPrediction {
    pub input: String,
    pub prediction: Sentiment,
}

/// Normalizer → vectorizer → classifier.
///
/// Built once at startup and only read afterwards, so a single instance can
/// be shared by every request handler.
pub struct Predictor {
    normalizer: TextNormalizer,
    vectorizer: Box<dyn Vectorizer>,
    classifier: Box<dyn Classifier>,
}

impl Predictor {
    pub fn new(vectorizer: impl Vectorizer + 'static, classifier: impl Classifier + 'static) -> Self {
        Self::from_boxed(Box::new(vectorizer), Box::new(classifier))
    }

    pub fn from_boxed(vectorizer: Box<dyn Vectorizer>, classifier: Box<dyn Classifier>) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            vectorizer,
            classifier,
        }
    }

    /// Load both artifacts and check that their feature widths agree.
    pub fn load(vectorizer_path: impl AsRef<Path>, classifier_path: impl AsRef<Path>) -> Result<Self> {
        let vectorizer = model::load_vectorizer(vectorizer_path.as_ref())?;
        let classifier = model::load_classifier(classifier_path.as_ref())?;
        let predictor = Self::from_boxed(Box::new(vectorizer), classifier);
        predictor.check_feature_width(predictor.vectorizer.num_features())?;
        Ok(predictor)
    }

    fn check_feature_width(&self, actual: usize) -> Result<()> {
        match self.classifier.num_features() {
            Some(expected) if expected != actual => {
                Err(InferenceError::FeatureMismatch { expected, actual })
            }
            _ => Ok(()),
        }
    }

    fn features(&self, cleaned: &[String]) -> Result<CsMat<f64>> {
        let documents = cleaned.iter().map(String::as_str).collect::<Vec<_>>();
        let features = self.vectorizer.transform(&documents)?;
        self.check_feature_width(features.cols())?;
        Ok(features)
    }

    fn labels(&self, cleaned: &[String]) -> Result<Vec<i64>> {
        let features = self.features(cleaned)?;
        let labels = self.classifier.predict(&features)?;
        if labels.len() != cleaned.len() {
            return Err(InferenceError::MissingOutput {
                expected: cleaned.len(),
                actual: labels.len(),
            });
        }
        Ok(labels)
    }

    /// Clean `text` the way the vectorizer expects.
    #[must_use]
    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    /// Predict the sentiment of a single text.
    ///
    /// Text that cleans down to nothing is still classified (as the zero vector).
    pub fn predict(&self, text: &str) -> Result<SentimentPrediction> {
        let cleaned = self.normalizer.normalize(text);
        debug!(cleaned = %cleaned, "Predicting sentiment");
        let label = self.labels(std::slice::from_ref(&cleaned))?[0];
        Ok(SentimentPrediction {
            input: text.to_owned(),
            prediction: Sentiment::from_label(label),
        })
    }

    /// Predict several texts with one vectorizer and classifier call.
    pub fn predict_batch<T: AsRef<str>>(&self, texts: &[T]) -> Result<Vec<SentimentPrediction>> {
        let cleaned = self.normalizer.normalize_batch(texts);
        let labels = self.labels(&cleaned)?;
        Ok(texts
            .iter()
            .zip(labels)
            .map(|(text, label)| SentimentPrediction {
                input: text.as_ref().to_owned(),
                prediction: Sentiment::from_label(label),
            })
            .collect())
    }

    /// Sentiment only, without echoing the input.
    pub fn classify(&self, text: &str) -> Result<Sentiment> {
        self.predict(text).map(|prediction| prediction.prediction)
    }
}

impl fmt::Debug for Predictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predictor")
            .field("num_features", &self.vectorizer.num_features())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use ahash::HashMap;
    use tweet_pre_processing::{TfidfVectorizer, VectorizerParams};

    use super::*;
    use crate::LinearClassifier;

    fn vectorizer() -> TfidfVectorizer {
        let vocabulary: HashMap<String, usize> = [("love", 0), ("great", 1), ("hate", 2), ("awful", 3)]
            .into_iter()
            .map(|(t, i)| (t.to_owned(), i))
            .collect();
        TfidfVectorizer::from_parts(VectorizerParams::default(), vocabulary, vec![1.0; 4]).unwrap()
    }

    fn predictor() -> Predictor {
        Predictor::new(
            vectorizer(),
            LinearClassifier::new(vec![1.0, 1.0, -1.0, -1.0], -0.1),
        )
    }

    /// Returns whatever labels it was built with, regardless of input.
    struct FixedLabels(Vec<i64>);

    impl Classifier for FixedLabels {
        fn predict(&self, _features: &CsMat<f64>) -> Result<Vec<i64>> {
            Ok(self.0.clone())
        }

        fn num_features(&self) -> Option<usize> {
            None
        }
    }

    #[test]
    fn test_positive_and_negative() {
        let predictor = predictor();
        assert_eq!(
            predictor.predict("I LOVE this, great day!").unwrap().prediction,
            Sentiment::Positive
        );
        assert_eq!(
            predictor.predict("awful. I hate it @support").unwrap().prediction,
            Sentiment::Negative
        );
    }

    #[test]
    fn test_input_echoed_verbatim() {
        let text = "  I love this! http://t.co/x  ";
        let prediction = predictor().predict(text).unwrap();
        assert_eq!(prediction.input, text);
    }

    #[test]
    fn test_empty_text_still_classified() {
        // zero vector, so the negative intercept decides
        let prediction = predictor().predict("").unwrap();
        assert_eq!(prediction.prediction, Sentiment::Negative);
        assert_eq!(predictor().predict("@a #b http://c").unwrap().prediction, Sentiment::Negative);
    }

    #[test]
    fn test_non_binary_label_is_negative() {
        let predictor = Predictor::new(vectorizer(), FixedLabels(vec![7]));
        assert_eq!(predictor.classify("love").unwrap(), Sentiment::Negative);
        let predictor = Predictor::new(vectorizer(), FixedLabels(vec![1]));
        assert_eq!(predictor.classify("hate").unwrap(), Sentiment::Positive);
    }

    #[test]
    fn test_missing_label_is_an_error() {
        let predictor = Predictor::new(vectorizer(), FixedLabels(vec![]));
        let err = predictor.predict("love").unwrap_err();
        assert!(matches!(err, InferenceError::MissingOutput { expected: 1, actual: 0 }));
    }

    #[test]
    fn test_feature_mismatch_is_an_error() {
        let predictor = Predictor::new(vectorizer(), LinearClassifier::new(vec![1.0; 3], 0.0));
        let err = predictor.predict("love").unwrap_err();
        assert!(matches!(err, InferenceError::FeatureMismatch { expected: 3, actual: 4 }));
    }

    #[test]
    fn test_batch_matches_single() {
        let predictor = predictor();
        let texts = ["love it", "so awful", "", "great great hate"];
        let batch = predictor.predict_batch(&texts).unwrap();
        assert_eq!(batch.len(), texts.len());
        for (text, prediction) in texts.iter().zip(&batch) {
            assert_eq!(&predictor.predict(text).unwrap(), prediction);
        }
    }

    #[test]
    fn test_sentiment_serializes_as_word() {
        let prediction = SentimentPrediction {
            input: "hi".to_owned(),
            prediction: Sentiment::Positive,
        };
        let json = serde_json::to_value(&prediction).unwrap();
        assert_eq!(json, serde_json::json!({"input": "hi", "prediction": "Positive"}));
        assert_eq!(Sentiment::Negative.to_string(), "Negative");
        assert_eq!(i64::from(Sentiment::Positive), 1);
        assert_eq!(Sentiment::from(0), Sentiment::Negative);
    }
}
