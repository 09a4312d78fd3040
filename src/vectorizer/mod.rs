pub mod corpus;
pub mod license;
pub mod ngram;
pub mod tfidf;
pub mod token;
pub mod wordfreq;

use std::{fmt, io::Read, str::FromStr};

use crate::{
    database::Database,
    error::{Error, Result},
    utils::normalizer,
    vectorizer::{license::License, ngram::NGram, tfidf::Tfidf, wordfreq::WordFrequency},
};

/// Turns license text into a frequency vector and scores two vectors.
///
/// `prepare` runs once, before any `compare`, with the reference database the
/// vectors will be compared against.
pub trait Vectorizer {
    /// Canonical identifier, also the database partition key.
    fn name(&self) -> String;

    /// Build the vector of already normalized text.
    fn vectorize(&self, normalized: &str, license_name: &str) -> License;

    /// Cosine similarity over raw counts unless the algorithm weights them.
    fn compare(&self, a: &License, b: &License) -> f64 {
        a.similarity(b)
    }

    fn prepare(&mut self, _db: &Database) -> Result<()> {
        Ok(())
    }

    /// Read `reader` to the end, normalize and vectorize.
    fn parse(&self, reader: &mut dyn Read, license_name: &str) -> std::io::Result<License> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(self.vectorize(&normalizer::normalize(&data), license_name))
    }

    fn parse_str(&self, text: &str, license_name: &str) -> License {
        self.vectorize(&normalizer::normalize_str(text), license_name)
    }
}

/// The closed set of identification algorithms.
///
/// Built from a configuration string: `"<n>gram"`, `"wordfreq"` or `"tfidf"`.
///
/// # Examples
/// ```
/// use license_vectorizer::Algorithm;
/// let algorithm: Algorithm = "5gram".parse().unwrap();
/// assert_eq!(algorithm.to_string(), "5gram");
/// assert!("kgram".parse::<Algorithm>().is_err());
/// ```
#[derive(Debug, Clone)]
pub enum Algorithm {
    NGram(NGram),
    WordFrequency(WordFrequency),
    Tfidf(Tfidf),
}

impl Algorithm {
    /// Every algorithm a reference database is built for by default.
    pub const AVAILABLE: [&'static str; 11] = [
        "1gram", "2gram", "3gram", "4gram", "5gram", "6gram", "7gram", "8gram", "9gram", "wordfreq", "tfidf",
    ];

    fn as_vectorizer(&self) -> &dyn Vectorizer {
        match self {
            Algorithm::NGram(v) => v,
            Algorithm::WordFrequency(v) => v,
            Algorithm::Tfidf(v) => v,
        }
    }

    fn ngram(name: &str, size: &str) -> Result<Self> {
        let n: usize = size.parse().map_err(|e: std::num::ParseIntError| Error::InvalidAlgorithmName {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        if n == 0 {
            return Err(Error::InvalidAlgorithmName {
                name: name.to_string(),
                reason: "n-gram size must be positive".to_string(),
            });
        }
        Ok(Algorithm::NGram(NGram::new(n)))
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        let lower = name.to_lowercase();
        if let Some(size) = lower.strip_suffix("gram") {
            return Self::ngram(name, size);
        }
        match lower.as_str() {
            "wordfreq" => Ok(Algorithm::WordFrequency(WordFrequency::new())),
            tfidf::TFIDF => Ok(Algorithm::Tfidf(Tfidf::new())),
            _ => Err(Error::UnknownAlgorithm(lower)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl Vectorizer for Algorithm {
    fn name(&self) -> String {
        self.as_vectorizer().name()
    }

    fn vectorize(&self, normalized: &str, license_name: &str) -> License {
        self.as_vectorizer().vectorize(normalized, license_name)
    }

    fn compare(&self, a: &License, b: &License) -> f64 {
        self.as_vectorizer().compare(a, b)
    }

    fn prepare(&mut self, db: &Database) -> Result<()> {
        match self {
            Algorithm::NGram(v) => v.prepare(db),
            Algorithm::WordFrequency(v) => v.prepare(db),
            Algorithm::Tfidf(v) => v.prepare(db),
        }
    }
}
