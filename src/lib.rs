//! This crate identifies which known license a license text most closely
//! resembles, by comparing frequency vectors against a reference database.

pub mod config;
pub mod database;
pub mod error;
pub mod identifier;
pub mod project;
pub mod utils;
pub mod vectorizer;

/// Identification Algorithm
/// The closed set of vectorization schemes, built from a configuration string
/// (`"5gram"`, `"wordfreq"`, `"tfidf"`).
///
/// - `NGram`: character n-gram shingles
/// - `WordFrequency`: lowercase word counts with punctuation stripped
/// - `Tfidf`: word counts weighted by corpus statistics at comparison time
///
/// The name an algorithm displays as is also the database partition it reads.
pub use vectorizer::Algorithm;

/// Vectorizer Trait
/// The capability every algorithm provides: parse text into a vector, compare
/// two vectors, and prepare against a reference database.
pub use vectorizer::Vectorizer;

/// License vector
/// A named frequency vector for one license text.
pub use vectorizer::license::License;

/// Token Frequency structure
/// Counts of each token within one document and their total.
///
/// Serialized as a plain `{token: count}` map.
pub use vectorizer::token::TokenFrequency;

/// Corpus for TF-IDF
/// Document count and per-term document frequency of the `tfidf` reference
/// partition, the base data for IDF calculation.
pub use vectorizer::corpus::Corpus;

/// Reference Database
/// Reference vectors partitioned by algorithm name, persisted as JSON or CBOR,
/// optionally gzip-compressed.
pub use database::Database;

/// Identifier and its results
/// - `Identifier`: binds an algorithm, a database and a threshold
/// - `Matches`: ranked results, best first
/// - `LicenseMatch`: one reference name with its probability
pub use identifier::{Identifier, LicenseMatch, Matches};

/// Project locator
/// Finds license files in directories and zip archives.
pub use project::{open_project, LicenseFile, Project};

pub use config::Config;
pub use error::{Error, Result};
