mod normalizer;
mod vectorizer;

pub use normalizer::{
    ENGLISH_STOPWORDS, NounLemmatizer, TextNormalizer, is_feature_token, is_stopword, normalize,
    strip_hashtags, strip_mentions, strip_punctuation, strip_urls,
};
pub use vectorizer::{TfidfVectorizer, VectorizerError, VectorizerParams};
