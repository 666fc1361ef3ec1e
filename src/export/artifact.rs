//! Downloadable export output

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ExportError;

/// Bytes of one export plus the name and type it is offered under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: &'static str,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Write into `dir` under the artifact's file name
    pub fn write_to<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf, ExportError> {
        let path = dir.as_ref().join(self.filename);
        fs::write(&path, &self.bytes)?;
        debug!("wrote {} ({} bytes) to {}", self.filename, self.bytes.len(), path.display());
        Ok(path)
    }
}
