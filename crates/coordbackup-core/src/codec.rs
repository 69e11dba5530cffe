// ── JSON codec and file I/O ──
//
// Documents are written with 4-space indentation. Reading is lenient:
// unknown fields are ignored, missing fields take their zero value, and
// anything after the first JSON value in the input is not looked at.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::error::CoreError;
use crate::model::Backup;

const INDENT: &[u8] = b"    ";

fn serialize_into<W: Write>(backup: &Backup, writer: W) -> Result<(), CoreError> {
    let mut ser = serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    backup.serialize(&mut ser)?;
    Ok(())
}

impl Backup {
    /// Write the document to a stream, followed by a newline.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), CoreError> {
        serialize_into(self, &mut writer)?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    /// Create (or truncate) `path` and write the document into it.
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<(), CoreError> {
        let path = path.as_ref();
        debug!(path = %path.display(), devices = self.devices.len(), "writing backup");

        let file = File::create(path).map_err(|source| CoreError::File {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Render the document as an indented JSON string (no trailing newline).
    pub fn encode(&self) -> Result<String, CoreError> {
        let mut buf = Vec::with_capacity(1024);
        serialize_into(self, &mut buf)?;
        String::from_utf8(buf).map_err(|e| CoreError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    /// Decode a document from a stream.
    pub fn read_from<R: Read>(reader: R) -> Result<Self, CoreError> {
        let mut de = serde_json::Deserializer::from_reader(reader);
        Ok(Self::deserialize(&mut de)?)
    }

    /// Open `path` and decode the document in it.
    pub fn read_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading backup");

        let file = File::open(path).map_err(|source| CoreError::File {
            path: path.to_path_buf(),
            source,
        })?;
        let backup = Self::read_from(BufReader::new(file))?;
        debug!(
            path = %path.display(),
            devices = backup.devices.len(),
            format = backup.metadata.format(),
            "backup loaded"
        );
        Ok(backup)
    }

    /// Decode a document held in memory.
    pub fn decode(text: &str) -> Result<Self, CoreError> {
        let mut de = serde_json::Deserializer::from_str(text);
        Ok(Self::deserialize(&mut de)?)
    }
}

impl FromStr for Backup {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}
