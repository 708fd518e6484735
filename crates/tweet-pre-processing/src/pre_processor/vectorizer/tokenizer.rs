use std::sync::LazyLock;

use rayon::prelude::*;
use regex::Regex;
use tracing::debug;

/// Minimum number of texts to consider parallelization
const MIN_TEXTS_FOR_PARALLEL: usize = 100;

/// Minimum total character count to consider parallelization
const MIN_CHARS_FOR_PARALLEL: usize = 10_000;

/// Words of two or more word characters, matching the token pattern the
/// vectorizer vocabulary was built with.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

fn tokenize_text(text: &str, lowercase: bool) -> Vec<String> {
    if lowercase {
        let lowered = text.to_lowercase();
        TOKEN_RE
            .find_iter(&lowered)
            .map(|m| m.as_str().to_owned())
            .collect()
    } else {
        TOKEN_RE
            .find_iter(text)
            .map(|m| m.as_str().to_owned())
            .collect()
    }
}

fn tokenize_texts_par<T: AsRef<str> + Sync>(texts: &[T], lowercase: bool) -> Vec<Vec<String>> {
    debug!(num_texts = texts.len(), "Using parallel tokenization");
    texts
        .par_iter()
        .map(|text| tokenize_text(text.as_ref(), lowercase))
        .collect()
}

fn tokenize_texts<T: AsRef<str>>(texts: &[T], lowercase: bool) -> Vec<Vec<String>> {
    texts
        .iter()
        .map(|text| tokenize_text(text.as_ref(), lowercase))
        .collect()
}

/// Determine if parallel processing should be used based on workload characteristics.
///
/// Parallelization is beneficial when:
/// - There are many texts (>= 100), OR
/// - The total character count is large (>= 10,000 chars)
///
/// A single tweet from the HTTP path always stays on the calling thread.
#[inline]
fn should_use_parallel<T: AsRef<str>>(texts: &[T]) -> bool {
    let num_texts = texts.len();

    if num_texts >= MIN_TEXTS_FOR_PARALLEL {
        return true;
    }

    // Estimate from the first 20 texts when there are more
    let total_chars: usize = if num_texts > 20 {
        let sample_chars: usize = texts.iter().take(20).map(|s| s.as_ref().len()).sum();
        (sample_chars * num_texts) / 20
    } else {
        texts.iter().map(|s| s.as_ref().len()).sum()
    };

    total_chars >= MIN_CHARS_FOR_PARALLEL
}

pub fn tokenize<T: AsRef<str> + Sync>(texts: &[T], lowercase: bool) -> Vec<Vec<String>> {
    if should_use_parallel(texts) {
        tokenize_texts_par(texts, lowercase)
    } else {
        tokenize_texts(texts, lowercase)
    }
}
