use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use log::debug;
use walkdir::WalkDir;

use crate::{
    error::{Error, Result},
    project::{is_license_file, LicenseFile, Project},
};

/// License files of a directory tree, or of a single file.
#[derive(Debug, Clone)]
pub struct DirProject {
    base: PathBuf,
    ids: Vec<String>,
}

impl DirProject {
    /// Walk `path` for license files. Ids are paths relative to the base,
    /// shortest first.
    ///
    /// A plain file is a project whose base is its parent directory and whose
    /// only id is its own name, whatever that name is.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if !metadata.is_dir() {
            let base = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };
            let ids = path
                .file_name()
                .map(|name| vec![name.to_string_lossy().into_owned()])
                .unwrap_or_default();
            return Ok(DirProject { base, ids });
        }

        let mut ids = Vec::new();
        for entry in WalkDir::new(path) {
            let entry = entry.map_err(|e| Error::Io {
                path: e.path().unwrap_or(path).to_path_buf(),
                source: e.into(),
            })?;
            if entry.file_type().is_file() && is_license_file(entry.path()) {
                let relative = entry.path().strip_prefix(path).unwrap_or(entry.path());
                ids.push(relative.to_string_lossy().into_owned());
            }
        }
        ids.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        debug!("{}: {} license files", path.display(), ids.len());
        Ok(DirProject {
            base: path.to_path_buf(),
            ids,
        })
    }
}

impl Project for DirProject {
    fn base_path(&self) -> &Path {
        &self.base
    }

    fn license_ids(&self) -> &[String] {
        &self.ids
    }

    fn license_file(&mut self, id: &str) -> Result<LicenseFile<'_>> {
        let path = self.base.join(id);
        let file = File::open(&path).map_err(|source| Error::Io { path, source })?;
        Ok(LicenseFile::new(id, BufReader::new(file)))
    }
}
