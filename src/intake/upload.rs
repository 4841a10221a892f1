//! Uploads directory with collision-free file names.

use crate::error::{InsightError, Result};
use log::info;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Build the stored name `{uuid}_{original}` for an uploaded file.
///
/// Only the final path component of `original` is kept. Returns `None`
/// when no file name remains.
pub fn upload_file_name(id: &Uuid, original: &str) -> Option<String> {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or("")
        .trim();
    if base.is_empty() || base == "." || base == ".." {
        return None;
    }
    Some(format!("{}_{}", id.hyphenated(), base))
}

/// Directory receiving uploaded files.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Root directory of the store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save uploaded bytes under a unique name and return the stored path.
    pub fn save(&self, original_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        loop {
            let name = upload_file_name(&Uuid::new_v4(), original_name)
                .ok_or(InsightError::NoFileSelected)?;
            let path = self.dir.join(name);
            let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            };
            file.write_all(bytes)?;
            file.flush()?;
            info!("Stored upload '{}' ({} bytes) at {:?}", original_name, bytes.len(), path);
            return Ok(path);
        }
    }

    /// Copy an existing file into the store, keeping its file name.
    pub fn save_from_path<P: AsRef<Path>>(&self, source: P) -> Result<PathBuf> {
        let source = source.as_ref();
        let original = source
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or(InsightError::NoFileSelected)?;
        let bytes = fs::read(source)?;
        self.save(original, &bytes)
    }
}
