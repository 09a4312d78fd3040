use std::{
    fs::File,
    io::{self, BufReader, Read, Write},
    path::Path,
};

use flate2::{read::GzDecoder, write::GzEncoder, Compression as GzLevel};
use log::debug;

use crate::{
    database::Database,
    error::{Error, Result},
};

/// Payload encoding of a persisted database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Json,
    Cbor,
}

/// Optional transparent compression around the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    #[default]
    None,
    Gzip,
}

/// How a store is laid out on disk, chosen from its file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreFormat {
    pub encoding: Encoding,
    pub compression: Compression,
}

impl StoreFormat {
    /// `.gz` adds gzip; the remaining `.cbor` suffix selects CBOR, anything
    /// else JSON.
    ///
    /// ```
    /// use license_vectorizer::database::serde::{Compression, Encoding, StoreFormat};
    /// let format = StoreFormat::from_path("liossdb.cbor.gz");
    /// assert_eq!(format.encoding, Encoding::Cbor);
    /// assert_eq!(format.compression, Compression::Gzip);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let name = path
            .as_ref()
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let (rest, compression) = match name.strip_suffix(".gz") {
            Some(rest) => (rest, Compression::Gzip),
            None => (name.as_str(), Compression::None),
        };
        let encoding = if rest.ends_with(".cbor") {
            Encoding::Cbor
        } else {
            Encoding::Json
        };
        StoreFormat { encoding, compression }
    }
}

fn load_error(name: &str, reason: impl ToString) -> Error {
    Error::Load {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

fn write_error(name: &str, reason: impl ToString) -> Error {
    Error::Write {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

impl Database {
    /// Load a store, picking the format from the file name.
    pub fn load(path: impl AsRef<Path>) -> Result<Database> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let file = File::open(path).map_err(|e| load_error(&name, e))?;
        let db = Database::read_from(BufReader::new(file), &name, StoreFormat::from_path(path))?;
        debug!("{}: loaded {} algorithms", name, db.len());
        Ok(db)
    }

    /// Decode a store. `name` identifies the source in errors.
    ///
    /// Nothing is returned unless the whole payload decodes and every name is
    /// unique within its partition.
    pub fn read_from<R: Read>(mut reader: R, name: &str, format: StoreFormat) -> Result<Database> {
        let mut payload = Vec::new();
        let read = match format.compression {
            Compression::None => reader.read_to_end(&mut payload),
            Compression::Gzip => GzDecoder::new(reader).read_to_end(&mut payload),
        };
        read.map_err(|e| load_error(name, e))?;
        let db: Database = match format.encoding {
            Encoding::Json => serde_json::from_slice(&payload).map_err(|e| load_error(name, e))?,
            Encoding::Cbor => serde_cbor::from_slice(&payload).map_err(|e| load_error(name, e))?,
        };
        if let Some((algorithm, license)) = db.find_duplicate() {
            return Err(load_error(name, format!("{algorithm}: duplicate entry {license}")));
        }
        Ok(db)
    }

    /// Write the store, picking the format from the file name.
    /// An existing file is truncated.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let file = File::create(path).map_err(|e| write_error(&name, e))?;
        self.write_to(file, &name, StoreFormat::from_path(path))?;
        debug!("{}: saved {} algorithms", name, self.len());
        Ok(())
    }

    /// Encode the store into `writer`. `name` identifies the destination in errors.
    pub fn write_to<W: Write>(&self, writer: W, name: &str, format: StoreFormat) -> Result<()> {
        let payload = match format.encoding {
            Encoding::Json => serde_json::to_vec(self).map_err(|e| write_error(name, e))?,
            Encoding::Cbor => serde_cbor::to_vec(self).map_err(|e| write_error(name, e))?,
        };
        match format.compression {
            Compression::None => write_payload(writer, name, &payload),
            Compression::Gzip => {
                let mut encoder = GzEncoder::new(writer, GzLevel::default());
                write_payload(&mut encoder, name, &payload)?;
                encoder
                    .finish()
                    .and_then(|mut inner| inner.flush())
                    .map_err(|e| write_error(name, e))
            }
        }
    }
}

/// Write all of `payload`; a destination that stops accepting bytes is a short write.
fn write_payload<W: Write>(mut writer: W, name: &str, payload: &[u8]) -> Result<()> {
    let mut written = 0;
    while written < payload.len() {
        match writer.write(&payload[written..]) {
            Ok(0) => {
                return Err(Error::ShortWrite {
                    name: name.to_string(),
                    expected: payload.len(),
                    written,
                })
            }
            Ok(n) => written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(write_error(name, e)),
        }
    }
    writer.flush().map_err(|e| write_error(name, e))
}
