use thiserror::Error;

#[derive(Error, Debug)]
pub enum VectorizerError {
    #[error("Invalid n-gram range ({min_n}, {max_n})")]
    InvalidNgramRange { min_n: usize, max_n: usize },

    #[error("Term {term:?} maps to column {index}, but the vectorizer has {num_features} features")]
    IndexOutOfRange {
        term: String,
        index: usize,
        num_features: usize,
    },

    #[error("Column {index} is assigned to more than one term")]
    DuplicateIndex { index: usize },

    #[error("Vocabulary has {vocab_size} terms but only {idf_len} idf weights")]
    IdfLength { vocab_size: usize, idf_len: usize },

    #[error(transparent)]
    Encode(#[from] bincode::error::EncodeError),

    #[error(transparent)]
    Decode(#[from] bincode::error::DecodeError),
}
