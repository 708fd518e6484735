use ahash::HashMap;

/// Count every word n-gram with `min_n <= n <= max_n`.
///
/// N-grams are keyed by their tokens joined with a single space, the same
/// spelling the vocabulary artifact uses.
pub fn count_ngrams<S: AsRef<str>>(
    tokens: &[S],
    ngram_range: (usize, usize),
) -> HashMap<String, usize> {
    let (min_n, max_n) = ngram_range;
    let mut ngram_counter = HashMap::default();

    for n in min_n.max(1)..=max_n {
        for window in tokens.windows(n) {
            let key = window
                .iter()
                .map(|token| token.as_ref())
                .collect::<Vec<&str>>()
                .join(" ");
            *ngram_counter.entry(key).or_insert(0) += 1;
        }
    }
    ngram_counter
}
