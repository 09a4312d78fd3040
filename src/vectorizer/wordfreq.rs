use crate::vectorizer::{license::License, token::TokenFrequency, Vectorizer};

/// Characters removed before splitting into words.
const PUNCTUATION: &[char] = &['.', ',', ';', '!', '?', '`', '<', '>', '(', ')', '\'', '"'];

/// Lowercased word counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordFrequency;

impl WordFrequency {
    pub fn new() -> Self {
        WordFrequency
    }
}

/// Strip punctuation, lowercase, split on single spaces.
///
/// Empty words (from stripped punctuation or empty input) are skipped.
pub(crate) fn word_frequency(normalized: &str) -> TokenFrequency {
    let stripped: String = normalized
        .chars()
        .filter(|c| !PUNCTUATION.contains(c))
        .collect();
    let lowered = stripped.to_lowercase();

    let mut freq = TokenFrequency::new();
    for word in lowered.split(' ').filter(|w| !w.is_empty()) {
        freq.add_token(word);
    }
    freq
}

impl Vectorizer for WordFrequency {
    fn name(&self) -> String {
        "wordfreq".to_string()
    }

    fn vectorize(&self, normalized: &str, license_name: &str) -> License {
        License::new(license_name, word_frequency(normalized))
    }
}
