use ahash::{HashMap, HashSet};
use sprs::CsMat;
use tracing::debug;

use super::{VectorizerError, ngrams, params::VectorizerParams, tokenizer};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, bincode::Encode, bincode::Decode)]
pub struct CountVectorizer {
    params: VectorizerParams,
    /// Vocabulary mapping n-gram (tokens joined by a space) to feature index
    vocab: HashMap<String, usize>,
    /// Width of every output row. Can exceed `vocab.len()` when the exported
    /// vocabulary was pruned after fitting.
    num_features: usize,
}

impl CountVectorizer {
    /// Build from an exported vocabulary.
    pub fn from_vocabulary(
        vocab: HashMap<String, usize>,
        num_features: usize,
        params: VectorizerParams,
    ) -> Result<Self, VectorizerError> {
        let vectorizer = Self {
            params,
            vocab,
            num_features,
        };
        vectorizer.validate()?;
        debug!(
            vocab_size = vectorizer.vocab.len(),
            num_features, "CountVectorizer built from vocabulary"
        );
        Ok(vectorizer)
    }

    /// Every column index must be in range and used by a single n-gram,
    /// otherwise the rows built in `transform` would not be valid CSR.
    pub(crate) fn validate(&self) -> Result<(), VectorizerError> {
        self.params.validate()?;
        let mut seen = HashSet::default();
        for (term, &index) in &self.vocab {
            if index >= self.num_features {
                return Err(VectorizerError::IndexOutOfRange {
                    term: term.clone(),
                    index,
                    num_features: self.num_features,
                });
            }
            if !seen.insert(index) {
                return Err(VectorizerError::DuplicateIndex { index });
            }
        }
        Ok(())
    }

    pub fn transform<T: AsRef<str> + Sync>(&self, texts: &[T]) -> CsMat<f64> {
        debug!(
            num_texts = texts.len(),
            "Transforming texts using CountVectorizer"
        );
        let tokenized_texts = tokenizer::tokenize(texts, self.params.lowercase());
        self.transform_from_tokenized(&tokenized_texts)
    }

    fn transform_from_tokenized(&self, tokenized_texts: &[Vec<String>]) -> CsMat<f64> {
        // Build CSR format directly
        let mut indptr = Vec::with_capacity(tokenized_texts.len() + 1);
        let mut indices = Vec::new();
        let mut data = Vec::new();

        indptr.push(0);

        for tokens in tokenized_texts {
            let ngrams = ngrams::count_ngrams(tokens, self.params.ngram_range());
            let mut row_entries = ngrams
                .iter()
                .filter_map(|(ngram_key, &count)| {
                    self.vocab
                        .get(ngram_key)
                        .map(|&col_idx| (col_idx, count as f64))
                })
                .collect::<Vec<_>>();

            row_entries.sort_by_key(|(col_idx, _)| *col_idx);
            for (col_idx, count) in row_entries {
                indices.push(col_idx);
                data.push(count);
            }
            indptr.push(indices.len());
        }

        debug!(
            non_zero_entries = data.len(),
            "Text transformation complete"
        );
        CsMat::new(
            (tokenized_texts.len(), self.num_features),
            indptr,
            indices,
            data,
        )
    }

    pub fn num_features(&self) -> usize {
        self.num_features
    }

    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocab
    }

    pub fn params(&self) -> &VectorizerParams {
        &self.params
    }
}
