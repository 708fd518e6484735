use std::ops::RangeInclusive;

use super::VectorizerError;

#[derive(
    Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct VectorizerParams {
    /// Inclusive `(min_n, max_n)` word n-gram sizes.
    ngram_range: (usize, usize),
    /// Lowercase documents before tokenizing. Normalized text is already
    /// lowercase, so this only matters for raw input.
    lowercase: bool,
    /// Apply sublinear tf scaling: replace term frequency `tf` with `1 + ln(tf)`.
    /// This reduces the impact of terms that occur many times in a document.
    sublinear_tf: bool,
}

impl VectorizerParams {
    /// # Panics
    ///
    /// Panics if the range is empty or starts at zero. See [`Self::try_new`].
    pub fn new(
        ngram_range: impl Into<RangeInclusive<usize>>,
        lowercase: bool,
        sublinear_tf: bool,
    ) -> Self {
        match Self::try_new(ngram_range, lowercase, sublinear_tf) {
            Ok(params) => params,
            Err(e) => panic!("ngram_range must be non-empty and start at 1 or above: {e}"),
        }
    }

    /// Like [`Self::new`], but reports an invalid range as an error.
    pub fn try_new(
        ngram_range: impl Into<RangeInclusive<usize>>,
        lowercase: bool,
        sublinear_tf: bool,
    ) -> Result<Self, VectorizerError> {
        let range = ngram_range.into();
        let params = Self {
            ngram_range: (*range.start(), *range.end()),
            lowercase,
            sublinear_tf,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks invariants that deserialized params cannot promise.
    pub(crate) fn validate(&self) -> Result<(), VectorizerError> {
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(VectorizerError::InvalidNgramRange { min_n, max_n });
        }
        Ok(())
    }

    #[must_use]
    pub fn ngram_range(&self) -> (usize, usize) {
        self.ngram_range
    }

    #[must_use]
    pub fn lowercase(&self) -> bool {
        self.lowercase
    }

    #[must_use]
    pub fn sublinear_tf(&self) -> bool {
        self.sublinear_tf
    }
}

/// Unigrams, lowercased, raw term counts.
impl Default for VectorizerParams {
    fn default() -> Self {
        Self {
            ngram_range: (1, 1),
            lowercase: true,
            sublinear_tf: false,
        }
    }
}

impl From<((usize, usize), bool, bool)> for VectorizerParams {
    fn from(value: ((usize, usize), bool, bool)) -> Self {
        Self::new(value.0.0..=value.0.1, value.1, value.2)
    }
}
