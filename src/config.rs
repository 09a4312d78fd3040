use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    vectorizer::Algorithm,
};

fn default_algorithm() -> String {
    "5gram".to_string()
}

fn default_threshold() -> f64 {
    0.75
}

/// Identification settings, read from a TOML file such as
///
/// ```toml
/// algorithm = "tfidf"
/// threshold = 0.8
/// database = "liossdb.json.gz"
/// ```
///
/// Missing keys take their defaults: `5gram`, `0.75` and no database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default)]
    pub database: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            algorithm: default_algorithm(),
            threshold: default_threshold(),
            database: None,
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Config::parse(&text).map_err(|e| match e {
            Error::Config(reason) => Error::Config(format!("{}: {}", path.display(), reason)),
            other => other,
        })
    }

    pub fn parse(text: &str) -> Result<Config> {
        toml::from_str(text).map_err(|e| Error::Config(e.message().to_string()))
    }

    /// Check the algorithm name and threshold, returning the parsed algorithm.
    pub fn validate(&self) -> Result<Algorithm> {
        check_threshold(self.threshold)?;
        self.algorithm.parse()
    }
}

/// `threshold` must lie in `[0, 1]`; NaN is rejected.
pub fn check_threshold(threshold: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(Error::InvalidThreshold(threshold))
    }
}
