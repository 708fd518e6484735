use ahash::HashMap;
use sprs::CsMat;
use tracing::debug;

use super::{VectorizerError, count_vectorizer::CountVectorizer, params::VectorizerParams};

/// A fitted TF-IDF transform, loaded from an exported artifact.
///
/// Rows are `tf * idf`, L2 normalized. Documents with no known terms come out
/// as empty rows (the zero vector), never as an error.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, bincode::Encode, bincode::Decode)]
pub struct TfidfVectorizer {
    count_vectorizer: CountVectorizer,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Assemble a vectorizer from the parts a fitted model exports: the
    /// vocabulary, one idf weight per column, and the tokenizer settings.
    pub fn from_parts(
        params: VectorizerParams,
        vocabulary: HashMap<String, usize>,
        idf: Vec<f64>,
    ) -> Result<Self, VectorizerError> {
        if vocabulary.len() > idf.len() {
            return Err(VectorizerError::IdfLength {
                vocab_size: vocabulary.len(),
                idf_len: idf.len(),
            });
        }
        let count_vectorizer = CountVectorizer::from_vocabulary(vocabulary, idf.len(), params)?;
        Ok(Self {
            count_vectorizer,
            idf,
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, VectorizerError> {
        let (vectorizer, read): (Self, usize) =
            bincode::decode_from_slice(bytes, bincode::config::standard())?;
        vectorizer.count_vectorizer.validate()?;
        if vectorizer.count_vectorizer.num_features() != vectorizer.idf.len() {
            return Err(VectorizerError::IdfLength {
                vocab_size: vectorizer.count_vectorizer.num_features(),
                idf_len: vectorizer.idf.len(),
            });
        }
        debug!(
            bytes_read = read,
            num_features = vectorizer.num_features(),
            "Decoded TfidfVectorizer"
        );
        Ok(vectorizer)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, VectorizerError> {
        Ok(bincode::encode_to_vec(self, bincode::config::standard())?)
    }

    pub fn transform<T: AsRef<str> + Sync>(&self, texts: &[T]) -> CsMat<f64> {
        debug!(
            num_texts = texts.len(),
            "Transforming texts using TfidfVectorizer"
        );
        let mut tf_matrix = self.count_vectorizer.transform(texts);
        let sublinear_tf = self.count_vectorizer.params().sublinear_tf();

        // Apply TF-IDF transformation
        for mut row_vec in tf_matrix.outer_iterator_mut() {
            for (col_idx, val) in row_vec.iter_mut() {
                if sublinear_tf {
                    *val = 1.0 + val.ln();
                }
                *val *= self.idf[col_idx];
            }
            // Normalize row vector (L2 norm)
            let norm = row_vec.iter().map(|(_, &v)| v * v).sum::<f64>().sqrt();
            if norm > 0.0 {
                for (_, val) in row_vec.iter_mut() {
                    *val /= norm;
                }
            }
        }
        tf_matrix
    }

    pub fn num_features(&self) -> usize {
        self.count_vectorizer.num_features()
    }

    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        self.count_vectorizer.vocabulary()
    }

    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    pub fn params(&self) -> &VectorizerParams {
        self.count_vectorizer.params()
    }
}
