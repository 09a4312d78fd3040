pub mod serde;

use std::collections::HashSet;

use ::serde::{Deserialize, Serialize};
use indexmap::IndexMap;

use crate::vectorizer::license::License;

/// Reference vectors partitioned by algorithm name.
///
/// Within a partition names are unique: [`Database::put`] replaces the
/// frequencies of an existing name and appends otherwise.
///
/// Not synchronized. Share it read-only (e.g. behind an `Arc`) once no more
/// `put` calls happen.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Database {
    #[serde(default)]
    data: IndexMap<String, Vec<License>>,
}

impl Database {
    pub fn new() -> Self {
        Database { data: IndexMap::new() }
    }

    /// Insert or replace `license` in the `algorithm` partition.
    pub fn put(&mut self, algorithm: &str, license: License) {
        let entries = self.data.entry(algorithm.to_string()).or_default();
        match entries.iter_mut().find(|item| item.name == license.name) {
            Some(existing) => existing.frequencies = license.frequencies,
            None => entries.push(license),
        }
    }

    /// Entries of the `algorithm` partition, empty for an unknown algorithm.
    pub fn entries(&self, algorithm: &str) -> &[License] {
        self.data.get(algorithm).map(|entries| entries.as_slice()).unwrap_or(&[])
    }

    /// Entry named `name` in the `algorithm` partition.
    pub fn entry(&self, algorithm: &str, name: &str) -> Option<&License> {
        self.entries(algorithm).iter().find(|item| item.name == name)
    }

    pub fn contains(&self, algorithm: &str, name: &str) -> bool {
        self.entry(algorithm, name).is_some()
    }

    /// Partition keys, in insertion order.
    pub fn algorithms(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(|k| k.as_str())
    }

    /// Number of partitions.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// First `(algorithm, name)` that appears twice within its partition.
    pub(crate) fn find_duplicate(&self) -> Option<(&str, &str)> {
        self.data.iter().find_map(|(algorithm, entries)| {
            let mut seen = HashSet::with_capacity(entries.len());
            entries
                .iter()
                .find(|item| !seen.insert(item.name.as_str()))
                .map(|item| (algorithm.as_str(), item.name.as_str()))
        })
    }

    /// Union every partition of `other` into `self`.
    ///
    /// On a name collision the receiver's entry is kept.
    pub fn merge(&mut self, other: &Database) {
        for (algorithm, licenses) in &other.data {
            let entries = self.data.entry(algorithm.clone()).or_default();
            for license in licenses {
                if !entries.iter().any(|item| item.name == license.name) {
                    entries.push(license.clone());
                }
            }
        }
    }
}
