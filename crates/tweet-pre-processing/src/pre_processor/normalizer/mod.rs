//! Tweet normalization.
//!
//! Turns raw tweet text into the space separated token string the vectorizer
//! was fitted on. The cleaning runs as a fixed sequence of pure steps:
//!
//! 1. drop URLs (`http` up to the next whitespace)
//! 2. drop `@mentions`
//! 3. drop `#hashtags`
//! 4. drop every character that is neither a word character nor whitespace
//! 5. lowercase
//! 6. split on whitespace
//! 7. keep alphabetic tokens that are not stopwords
//! 8. lemmatize
//! 9. join with single spaces
//!
//! Step 4 must run after steps 1-3, otherwise the `@`, `#` and `://` markers
//! are gone before the entity patterns can see them.

mod lemmatizer;
mod stopwords;

use std::{borrow::Cow, sync::LazyLock};

pub use lemmatizer::NounLemmatizer;
use regex::Regex;
pub use stopwords::{ENGLISH_STOPWORDS, is_stopword};
use tracing::trace;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+").expect("URL pattern is valid"));
static MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\w+").expect("mention pattern is valid"));
static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("hashtag pattern is valid"));
static PUNCTUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("punctuation pattern is valid"));

/// Remove URL-like substrings. Case-sensitive: `HTTP://` survives.
pub fn strip_urls(text: &str) -> Cow<'_, str> {
    URL_RE.replace_all(text, "")
}

pub fn strip_mentions(text: &str) -> Cow<'_, str> {
    MENTION_RE.replace_all(text, "")
}

pub fn strip_hashtags(text: &str) -> Cow<'_, str> {
    HASHTAG_RE.replace_all(text, "")
}

/// Remove everything except word characters (letters, digits, `_`) and whitespace.
pub fn strip_punctuation(text: &str) -> Cow<'_, str> {
    PUNCTUATION_RE.replace_all(text, "")
}

/// A token survives filtering when it is purely alphabetic and not a stopword.
#[inline]
pub fn is_feature_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic) && !is_stopword(token)
}

/// Cleans raw text into lemmatized feature tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer {
    lemmatizer: NounLemmatizer,
}

impl TextNormalizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the full cleaning pipeline. Never fails; degenerate input gives `""`.
    #[must_use]
    pub fn normalize(&self, text: &str) -> String {
        let stripped = strip_urls(text);
        let stripped = strip_mentions(&stripped);
        let stripped = strip_hashtags(&stripped);
        let stripped = strip_punctuation(&stripped);
        let lowered = stripped.to_lowercase();

        let cleaned = lowered
            .split_whitespace()
            .filter(|token| is_feature_token(token))
            .map(|token| self.lemmatizer.lemmatize(token))
            .collect::<Vec<_>>()
            .join(" ");

        trace!(raw_len = text.len(), cleaned = %cleaned, "Normalized text");
        cleaned
    }

    /// Normalize several texts, preserving order.
    pub fn normalize_batch<T: AsRef<str>>(&self, texts: &[T]) -> Vec<String> {
        texts.iter().map(|text| self.normalize(text.as_ref())).collect()
    }
}

/// Normalize with the default lemmatizer.
#[must_use]
pub fn normalize(text: &str) -> String {
    TextNormalizer::new().normalize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_urls() {
        assert_eq!(strip_urls("check http://x.co now"), "check  now");
        assert_eq!(strip_urls("see https://t.co/abc?x=1"), "see ");
        assert_eq!(strip_urls("HTTP://loud.example"), "HTTP://loud.example");
    }

    #[test]
    fn test_strip_mentions_and_hashtags() {
        assert_eq!(strip_mentions("hi @joe_1 and @ann"), "hi  and ");
        assert_eq!(strip_hashtags("great #day #2024"), "great  ");
        // a bare marker is not an entity
        assert_eq!(strip_hashtags("# alone"), "# alone");
    }

    #[test]
    fn test_strip_punctuation() {
        assert_eq!(strip_punctuation("wow!!! it's... great :)"), "wow its great ");
        assert_eq!(strip_punctuation("snake_case"), "snake_case");
    }

    #[test]
    fn test_is_feature_token() {
        assert!(is_feature_token("cat"));
        assert!(is_feature_token("café"));
        assert!(!is_feature_token("the"));
        assert!(!is_feature_token("123"));
        assert!(!is_feature_token("abc123"));
        assert!(!is_feature_token("snake_case"));
        assert!(!is_feature_token(""));
    }

    #[test]
    fn test_stopwords_and_digits_dropped() {
        assert_eq!(normalize("the cat sat 123 on it"), "cat sat");
    }

    #[test]
    fn test_urls_removed() {
        let cleaned = normalize("check http://x.co now");
        assert!(!cleaned.contains("http"));
        assert_eq!(cleaned, "check");
    }

    #[test]
    fn test_entities_removed_as_units() {
        let cleaned = normalize("great #day @joe");
        assert_eq!(cleaned, "great");
        assert!(!cleaned.split(' ').any(|t| t.starts_with('#') || t.starts_with('@')));

        // the same words without markers are kept
        assert_eq!(normalize("great day joe"), "great day joe");
    }

    #[test]
    fn test_degenerate_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n"), "");
        assert_eq!(normalize("@a #b http://c"), "");
        assert_eq!(normalize("?!... :-)"), "");
        assert_eq!(normalize("the and of it"), "");
    }

    #[test]
    fn test_lowercasing_and_lemmatizing() {
        assert_eq!(normalize("Loving these PUPPIES!!!"), "loving puppy");
        assert_eq!(normalize("Two cats, three DOGS."), "two cat three dog");
    }

    #[test]
    fn test_contractions_collapse() {
        // "don't" loses its apostrophe and no longer matches the stopword list
        assert_eq!(normalize("I don't like it"), "dont like");
        assert_eq!(normalize("it isn't fun"), "isnt fun");
    }

    #[test]
    fn test_deterministic() {
        let text = "RT @user: Best. Day. Ever!!! #blessed http://t.co/xyz";
        assert_eq!(normalize(text), normalize(text));
        assert_eq!(normalize(text), "rt best day ever");
    }

    #[test]
    fn test_idempotent_on_clean_text() {
        let clean = "sunny morning coffee";
        assert_eq!(normalize(clean), clean);
        assert_eq!(normalize(&normalize(clean)), normalize(clean));
    }

    #[test]
    fn test_normalize_batch_preserves_order() {
        let normalizer = TextNormalizer::new();
        let cleaned = normalizer.normalize_batch(&["the cats", "", "happy dogs"]);
        assert_eq!(cleaned, vec!["cat", "", "happy dog"]);
    }
}
