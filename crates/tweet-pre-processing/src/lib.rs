//! Text pre-processing for the tweet sentiment service.
//!
//! Two halves, used in this order at inference time:
//!
//! - [`TextNormalizer`] cleans a raw tweet into lemmatized feature tokens.
//! - [`TfidfVectorizer`] turns cleaned text into a sparse TF-IDF row, using a
//!   vocabulary and idf weights exported from an already fitted model.
//!
//! ```rust
//! use tweet_pre_processing::normalize;
//!
//! assert_eq!(normalize("the cat sat 123 on it"), "cat sat");
//! assert_eq!(normalize("@a #b http://c"), "");
//! ```

pub mod pre_processor;

pub use pre_processor::{TextNormalizer, TfidfVectorizer, VectorizerError, VectorizerParams, normalize};
