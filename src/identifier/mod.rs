//! Binds one algorithm, one reference database and a threshold, and ranks the
//! references a license resembles.

mod matches;

pub use matches::{LicenseMatch, Matches};

use std::sync::Arc;

use indexmap::IndexMap;
use log::{debug, warn};
use rayon::prelude::*;

use crate::{
    config::{check_threshold, Config},
    database::Database,
    error::{Error, Result},
    project::{LicenseFile, Project},
    vectorizer::{license::License, Algorithm, Vectorizer},
};

/// Identification engine.
///
/// Construction prepares the algorithm against the database once; afterwards
/// the identifier is read-only and `identify` may be called from several
/// threads.
#[derive(Debug, Clone)]
pub struct Identifier {
    threshold: f64,
    algorithm: Algorithm,
    database: Arc<Database>,
}

impl Identifier {
    /// Fails on a threshold outside `[0, 1]` or when the algorithm cannot be
    /// prepared against `database`.
    pub fn new(mut algorithm: Algorithm, threshold: f64, database: Arc<Database>) -> Result<Self> {
        let threshold = check_threshold(threshold)?;
        algorithm.prepare(&database)?;
        debug!(
            "identifier ready: {} with {} references, threshold {}",
            algorithm,
            database.entries(&algorithm.name()).len(),
            threshold
        );
        Ok(Identifier {
            threshold,
            algorithm,
            database,
        })
    }

    pub fn from_config(config: &Config, database: Arc<Database>) -> Result<Self> {
        let algorithm = config.validate()?;
        Identifier::new(algorithm, config.threshold, database)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn algorithm(&self) -> &Algorithm {
        &self.algorithm
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Read and vectorize a license file; the file is closed when this returns.
    pub fn read_license(&self, mut file: LicenseFile<'_>) -> Result<License> {
        let name = file.id.clone();
        self.algorithm
            .parse(file.reader(), &name)
            .map_err(|source| Error::Parse { name, source })
    }

    /// Every reference scoring at least the threshold, best first.
    pub fn identify(&self, license: &License) -> Matches {
        let references = self.database.entries(&self.algorithm.name());
        let list = references
            .par_iter()
            .map(|reference| LicenseMatch {
                name: reference.name.clone(),
                probability: self.algorithm.compare(license, reference),
            })
            .filter(|found| found.probability >= self.threshold)
            .collect();
        let mut matches = Matches::new(list);
        matches.sort_by_probability();
        matches
    }

    /// Identify every license file of `project`. A file that cannot be read
    /// yields its error without stopping the others.
    pub fn identify_project(&self, project: &mut dyn Project) -> IndexMap<String, Result<Matches>> {
        let ids = project.license_ids().to_vec();
        let mut results = IndexMap::with_capacity(ids.len());
        for id in ids {
            let result = project
                .license_file(&id)
                .and_then(|file| self.read_license(file))
                .map(|license| self.identify(&license));
            match &result {
                Ok(matches) => debug!("{}: {} matches", id, matches.len()),
                Err(e) => warn!("{}: skipped, {}", project.base_path().display(), e),
            }
            results.insert(id, result);
        }
        results
    }
}
