use std::borrow::Cow;

use indexmap::IndexMap;
use log::debug;
use rayon::prelude::*;

use crate::{
    database::Database,
    error::Result,
    utils::math,
    vectorizer::{corpus::Corpus, license::License, token::TokenFrequency, wordfreq, Vectorizer},
};

/// Partition key of the reference vectors this algorithm reads.
pub const TFIDF: &str = "tfidf";

/// Weights of one term inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermWeight {
    /// count / total words in the document
    pub tf: f64,
    /// ln(N / df) + 1
    pub idf: f64,
    pub tf_idf: f64,
}

/// Corpus-weighted view of one license.
///
/// Terms unknown to the corpus are dropped. The source license is untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub terms: IndexMap<String, TermWeight>,
    /// sqrt(Σ tf_idf²)
    pub magnitude: f64,
}

impl Document {
    pub fn build(freq: &TokenFrequency, corpus: &Corpus) -> Self {
        let total = freq.token_sum() as f64;
        let mut terms = IndexMap::with_capacity(freq.token_num());
        if total > 0.0 {
            for (word, count) in freq.iter() {
                if let Some(idf) = corpus.idf(word) {
                    let tf = count as f64 / total;
                    terms.insert(word.to_string(), TermWeight { tf, idf, tf_idf: tf * idf });
                }
            }
        }
        let magnitude = math::norm_squared(terms.values().map(|w| w.tf_idf)).sqrt();
        Document { terms, magnitude }
    }

    #[inline]
    pub fn weight(&self, term: &str) -> f64 {
        self.terms.get(term).map_or(0.0, |w| w.tf_idf)
    }

    /// Cosine similarity over tf-idf weights.
    pub fn cosine_similarity(&self, other: &Document) -> f64 {
        let dot = math::dot(&self.terms, &other.terms, |w| w.tf_idf);
        math::cosine(dot, self.magnitude, other.magnitude)
    }
}

/// Corpus-aware TF-IDF.
///
/// `parse` produces plain word counts; weighting happens in `compare`, against
/// the corpus statistics gathered by `prepare`. Licenses whose name is in the
/// corpus use the cached [`Document`]; others get a transient one that is
/// never cached, so `compare` is safe to call from several threads once
/// `prepare` has returned.
#[derive(Debug, Clone, Default)]
pub struct Tfidf {
    corpus: Corpus,
    documents: IndexMap<String, Document>,
}

impl Tfidf {
    pub fn new() -> Self {
        Tfidf {
            corpus: Corpus::new(),
            documents: IndexMap::new(),
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Cached document for a corpus entry.
    pub fn document(&self, name: &str) -> Option<&Document> {
        self.documents.get(name)
    }

    /// Cached document when `license` names a corpus entry, transient otherwise.
    fn resolve<'a>(&'a self, license: &License) -> Cow<'a, Document> {
        match self.documents.get(&license.name) {
            Some(doc) => Cow::Borrowed(doc),
            None => Cow::Owned(Document::build(&license.frequencies, &self.corpus)),
        }
    }
}

impl Vectorizer for Tfidf {
    fn name(&self) -> String {
        TFIDF.to_string()
    }

    fn vectorize(&self, normalized: &str, license_name: &str) -> License {
        License::new(license_name, wordfreq::word_frequency(normalized))
    }

    fn compare(&self, a: &License, b: &License) -> f64 {
        self.resolve(a).cosine_similarity(&self.resolve(b))
    }

    /// Rebuild corpus statistics and the document arena from the `tfidf` partition.
    fn prepare(&mut self, db: &Database) -> Result<()> {
        let entries = db.entries(TFIDF);
        self.corpus.clear();
        for license in entries {
            self.corpus.add_doc(&license.frequencies);
        }
        let corpus = &self.corpus;
        let documents: Vec<(String, Document)> = entries
            .par_iter()
            .map(|license| (license.name.clone(), Document::build(&license.frequencies, corpus)))
            .collect();
        self.documents = documents.into_iter().collect();
        debug!(
            "tfidf prepared: {} documents, {} terms",
            self.corpus.get_doc_num(),
            self.corpus.vocab_size()
        );
        Ok(())
    }
}
