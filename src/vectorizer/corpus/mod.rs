use indexmap::IndexMap;

use crate::vectorizer::token::TokenFrequency;

/// Document count and per-term document frequency of a reference corpus.
///
/// Built once by `Tfidf::prepare`, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// number of documents added
    doc_num: u64,
    /// term -> number of documents containing it
    term_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_counts: IndexMap::new(),
        }
    }

    /// Add a document's distinct terms to the corpus.
    pub fn add_set<T>(&mut self, terms: &[T])
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        for term in terms {
            match self.term_counts.get_mut(term.as_ref()) {
                Some(count) => *count += 1,
                None => {
                    self.term_counts.insert(term.as_ref().into(), 1);
                }
            }
        }
    }

    /// Add a token frequency as one document.
    pub fn add_doc(&mut self, freq: &TokenFrequency) {
        self.add_set(&freq.token_set_ref_str());
    }

    pub fn clear(&mut self) {
        self.doc_num = 0;
        self.term_counts.clear();
    }

    /// Number of documents in the corpus.
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Number of documents containing `term`.
    #[inline]
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms.
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    /// idf(t) = ln(N / df(t)) + 1
    ///
    /// `None` when no document contains `term`: the term carries no weight
    /// rather than taking the logarithm of zero.
    #[inline]
    pub fn idf(&self, term: &str) -> Option<f64> {
        let df = self.get_term_count(term);
        if df == 0 || self.doc_num == 0 {
            return None;
        }
        Some((self.doc_num as f64 / df as f64).ln() + 1.0)
    }
}
