use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use log::debug;
use zip::ZipArchive;

use crate::{
    error::{Error, Result},
    project::{is_license_file, LicenseFile, Project},
};

/// License files inside a `.zip`, `.jar` or `.war` archive, addressed by
/// entry name.
pub struct ZipProject {
    path: PathBuf,
    archive: ZipArchive<BufReader<File>>,
    ids: Vec<String>,
}

impl ZipProject {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let archive = ZipArchive::new(BufReader::new(file)).map_err(|e| Error::Archive {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let mut ids: Vec<String> = archive
            .file_names()
            .filter(|name| !name.ends_with('/') && is_license_file(name))
            .map(str::to_string)
            .collect();
        ids.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        debug!("{}: {} license entries", path.display(), ids.len());
        Ok(ZipProject {
            path: path.to_path_buf(),
            archive,
            ids,
        })
    }
}

impl Project for ZipProject {
    fn base_path(&self) -> &Path {
        &self.path
    }

    fn license_ids(&self) -> &[String] {
        &self.ids
    }

    fn license_file(&mut self, id: &str) -> Result<LicenseFile<'_>> {
        if !self.ids.iter().any(|known| known == id) {
            return Err(Error::LicenseFileNotFound(id.to_string()));
        }
        let entry = self.archive.by_name(id).map_err(|e| Error::Archive {
            path: self.path.clone(),
            reason: format!("{id}: {e}"),
        })?;
        Ok(LicenseFile::new(id, entry))
    }
}
