use serde::{Deserialize, Serialize};

use crate::vectorizer::token::TokenFrequency;

/// A named frequency vector for one license text.
///
/// Created by an algorithm's `parse` and never mutated afterwards; weighting
/// schemes such as TF-IDF build their own views instead of touching it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct License {
    #[serde(alias = "license-name")]
    pub name: String,
    pub frequencies: TokenFrequency,
}

impl License {
    pub fn new(name: impl Into<String>, frequencies: TokenFrequency) -> Self {
        License {
            name: name.into(),
            frequencies,
        }
    }

    /// Sum of all counts.
    #[inline]
    pub fn total(&self) -> u64 {
        self.frequencies.token_sum()
    }

    /// sqrt(Σ count²), zero for an empty vector.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.frequencies.magnitude()
    }

    /// Cosine similarity over raw counts.
    #[inline]
    pub fn similarity(&self, other: &License) -> f64 {
        self.frequencies.cosine_similarity(&other.frequencies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn license(name: &str, pairs: &[(&str, u32)]) -> License {
        License::new(name, pairs.iter().copied().collect())
    }

    #[test]
    fn total_and_magnitude() {
        let l = license("MIT", &[("a", 1), ("b", 2), ("c", 2)]);
        assert_eq!(l.total(), 5);
        assert!((l.magnitude() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_license_is_valid() {
        let empty = license("empty", &[]);
        let other = license("other", &[("a", 1)]);
        assert_eq!(empty.total(), 0);
        assert_eq!(empty.magnitude(), 0.0);
        assert_eq!(empty.similarity(&other), 0.0);
        assert_eq!(empty.similarity(&empty), 0.0);
    }

    #[test]
    fn similarity_is_symmetric() {
        let a = license("a", &[("x", 3), ("y", 1)]);
        let b = license("b", &[("x", 1), ("z", 4)]);
        assert_eq!(a.similarity(&b), b.similarity(&a));
        assert!((a.similarity(&b) - 3.0 / (10f64.sqrt() * 17f64.sqrt())).abs() < 1e-12);
    }

    #[test]
    fn accepts_legacy_name_key() {
        let json = r#"{"license-name": "WTFPL", "frequencies": {"do": 2}}"#;
        let l: License = serde_json::from_str(json).unwrap();
        assert_eq!(l.name, "WTFPL");
        assert_eq!(l.frequencies.token_count("do"), 2);
    }

    #[test]
    fn rejects_negative_counts() {
        let json = r#"{"name": "bad", "frequencies": {"do": -1}}"#;
        assert!(serde_json::from_str::<License>(json).is_err());
    }
}
