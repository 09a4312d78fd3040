//! Discovery of license files inside a project.
//!
//! A project is either a directory tree ([`DirProject`], a single file counts
//! as a one-file directory) or a zip archive ([`ZipProject`]); [`open_project`]
//! picks the variant from the path.

mod archive;
mod dir;

pub use archive::ZipProject;
pub use dir::DirProject;

use std::{
    fmt,
    io::Read,
    path::Path,
};

use crate::error::{Error, Result};

/// Suffixes opened as zip archives.
pub const ARCHIVE_SUFFIXES: [&str; 3] = [".zip", ".jar", ".war"];

/// `LICENSE`, `license.txt` or `License.html`, but not `LicenseAnalyzer.java`
/// nor `license.md.bak`.
///
/// ```
/// use license_vectorizer::project::is_license_file;
/// assert!(is_license_file("project/LICENSE"));
/// assert!(is_license_file("License.html"));
/// assert!(!is_license_file("src/LicenseAnalyzer.java"));
/// ```
pub fn is_license_file(path: impl AsRef<Path>) -> bool {
    let name = match path.as_ref().file_name() {
        Some(name) => name.to_string_lossy().to_lowercase(),
        None => return false,
    };
    match name.strip_prefix("license") {
        Some("") => true,
        Some(rest) => rest.starts_with('.') && !rest[1..].contains('.'),
        None => false,
    }
}

/// An opened license file. Dropping it closes the underlying stream.
pub struct LicenseFile<'a> {
    pub id: String,
    reader: Box<dyn Read + 'a>,
}

impl<'a> LicenseFile<'a> {
    pub fn new(id: impl Into<String>, reader: impl Read + 'a) -> Self {
        LicenseFile {
            id: id.into(),
            reader: Box::new(reader),
        }
    }

    pub fn reader(&mut self) -> &mut dyn Read {
        &mut *self.reader
    }
}

impl fmt::Debug for LicenseFile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LicenseFile").field("id", &self.id).finish_non_exhaustive()
    }
}

/// A source of license files, addressed by id.
pub trait Project {
    fn base_path(&self) -> &Path;

    /// Ids of the license files found, in preference order.
    fn license_ids(&self) -> &[String];

    fn license_file(&mut self, id: &str) -> Result<LicenseFile<'_>>;
}

fn is_archive(path: &Path) -> bool {
    let name = path.to_string_lossy().to_lowercase();
    ARCHIVE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Open `path` as an archive when its suffix says so, as a directory (or single
/// file) otherwise.
pub fn open_project(path: impl AsRef<Path>) -> Result<Box<dyn Project>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file or directory"),
        });
    }
    if is_archive(path) {
        Ok(Box::new(ZipProject::open(path)?))
    } else {
        Ok(Box::new(DirProject::new(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn license_file_names() {
        let cases = [
            ("LICENSE", true),
            ("license.txt", true),
            ("License.html", true),
            ("dir/LICENSE.md", true),
            ("license.", true),
            ("LicenseAnalyzer.java", false),
            ("license.md.bak", false),
            ("licenses", false),
            ("COPYING", false),
            ("my-license", false),
        ];
        for (path, expected) in cases {
            assert_eq!(is_license_file(path), expected, "{path}");
        }
    }

    #[test]
    fn archive_suffixes() {
        assert!(is_archive(Path::new("a.zip")));
        assert!(is_archive(Path::new("lib/app.JAR")));
        assert!(is_archive(Path::new("app.war")));
        assert!(!is_archive(Path::new("project")));
        assert!(!is_archive(Path::new("zip")));
    }

    #[test]
    fn missing_path_is_io_error() {
        let err = open_project("no/such/project").err().unwrap();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn open_picks_variant() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("LICENSE"), "MIT License").unwrap();
        let project = open_project(dir.path()).unwrap();
        assert_eq!(project.license_ids(), ["LICENSE"]);

        let archive = dir.path().join("app.jar");
        archive::tests::write_zip(&archive, &[("META-INF/LICENSE.txt", "Apache")]);
        let project = open_project(&archive).unwrap();
        assert_eq!(project.license_ids(), ["META-INF/LICENSE.txt"]);
    }
}
