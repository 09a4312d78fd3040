use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::utils::math;

/// TokenFrequency
/// Occurrence count of every token in one text, plus the running total.
///
/// Serialized as a plain `{token: count}` map; the total is recomputed on load.
///
/// # Examples
/// ```
/// use license_vectorizer::TokenFrequency;
/// let mut freq = TokenFrequency::new();
/// freq.add_tokens(&["fine", "today", "fine"]);
/// assert_eq!(freq.token_count("fine"), 2);
/// assert_eq!(freq.token_sum(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(from = "IndexMap<String, u32>", into = "IndexMap<String, u32>")]
pub struct TokenFrequency {
    token_count: IndexMap<String, u32>,
    total_token_count: u64,
}

impl From<IndexMap<String, u32>> for TokenFrequency {
    fn from(token_count: IndexMap<String, u32>) -> Self {
        let total_token_count = token_count.values().map(|&c| c as u64).sum();
        TokenFrequency {
            token_count,
            total_token_count,
        }
    }
}

impl From<TokenFrequency> for IndexMap<String, u32> {
    fn from(freq: TokenFrequency) -> Self {
        freq.token_count
    }
}

impl<S: AsRef<str>> FromIterator<(S, u32)> for TokenFrequency {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut freq = TokenFrequency::new();
        for (token, count) in iter {
            freq.set_token_count(token.as_ref(), count);
        }
        freq
    }
}

/// Adding tokens
impl TokenFrequency {
    pub fn new() -> Self {
        TokenFrequency {
            token_count: IndexMap::new(),
            total_token_count: 0,
        }
    }

    /// Count one occurrence of `token`.
    #[inline]
    pub fn add_token(&mut self, token: &str) -> &mut Self {
        match self.token_count.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.token_count.insert(token.to_string(), 1);
            }
        }
        self.total_token_count += 1;
        self
    }

    /// Count one occurrence of every token in `tokens`.
    #[inline]
    pub fn add_tokens<T>(&mut self, tokens: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for token in tokens {
            self.add_token(token.as_ref());
        }
        self
    }

    /// Overwrite the count of `token`, keeping the total consistent.
    pub fn set_token_count(&mut self, token: &str, count: u32) -> &mut Self {
        if let Some(existing) = self.token_count.get_mut(token) {
            self.total_token_count = self.total_token_count - *existing as u64 + count as u64;
            *existing = count;
        } else {
            self.token_count.insert(token.to_string(), count);
            self.total_token_count += count as u64;
        }
        self
    }
}

/// Statistics
impl TokenFrequency {
    /// Count of `token`, zero when absent.
    #[inline]
    pub fn token_count(&self, token: &str) -> u32 {
        self.token_count.get(token).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    #[inline]
    pub fn token_sum(&self) -> u64 {
        self.total_token_count
    }

    /// Number of distinct tokens.
    #[inline]
    pub fn token_num(&self) -> usize {
        self.token_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.token_count.is_empty()
    }

    #[inline]
    pub fn contains_token(&self, token: &str) -> bool {
        self.token_count.contains_key(token)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.token_count.iter().map(|(token, &count)| (token.as_str(), count))
    }

    /// Distinct tokens, in first-seen order.
    #[inline]
    pub fn token_set_ref_str(&self) -> Vec<&str> {
        self.token_count.keys().map(|s| s.as_str()).collect()
    }

    /// Σ count², wide enough for any number of `u32::MAX` counts.
    fn norm_squared(&self) -> u128 {
        math::norm_squared(self.token_count.values().map(|&c| c as u128))
    }

    /// sqrt(Σ count²)
    pub fn magnitude(&self) -> f64 {
        (self.norm_squared() as f64).sqrt()
    }

    /// Cosine similarity over raw counts.
    ///
    /// The dot product and squared norms are summed as integers, so the score
    /// is exactly symmetric and a vector scores exactly 1.0 against itself.
    /// Empty vectors score 0.0.
    pub fn cosine_similarity(&self, other: &TokenFrequency) -> f64 {
        let dot = math::dot(&self.token_count, &other.token_count, |&c| c as u128);
        let norm_a = self.norm_squared() as f64;
        let norm_b = other.norm_squared() as f64;
        math::cosine(dot as f64, (norm_a * norm_b).sqrt(), 1.0)
    }

    /// Tokens sorted by count descending, then lexically.
    pub fn sorted_frequency_vector(&self) -> Vec<(String, u32)> {
        let mut token_list: Vec<(String, u32)> = self
            .token_count
            .iter()
            .map(|(token, &count)| (token.clone(), count))
            .collect();
        token_list.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        token_list
    }
}
