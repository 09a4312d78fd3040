use crate::vectorizer::{license::License, token::TokenFrequency, Vectorizer};

/// Character n-gram shingling.
///
/// Slides a window of `n` characters over the normalized text with stride 1.
/// Text shorter than `n` yields an empty vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NGram {
    n: usize,
}

impl NGram {
    /// `n` must be positive; the algorithm factory rejects zero before this is called.
    pub fn new(n: usize) -> Self {
        NGram { n: n.max(1) }
    }

    pub fn n(&self) -> usize {
        self.n
    }
}

impl Vectorizer for NGram {
    fn name(&self) -> String {
        format!("{}gram", self.n)
    }

    fn vectorize(&self, normalized: &str, license_name: &str) -> License {
        // byte offset of every char boundary, end included
        let bounds: Vec<usize> = normalized
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(normalized.len()))
            .collect();
        let char_len = bounds.len() - 1;

        let mut freq = TokenFrequency::new();
        if char_len >= self.n {
            for start in 0..=(char_len - self.n) {
                freq.add_token(&normalized[bounds[start]..bounds[start + self.n]]);
            }
        }
        License::new(license_name, freq)
    }
}
