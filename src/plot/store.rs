//! Directory of write-once plot artifacts.

use crate::error::Result;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Hands out fresh, never reused file names inside a plots directory.
#[derive(Debug, Clone)]
pub struct PlotStore {
    dir: PathBuf,
}

impl PlotStore {
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

    /// Reserve a new `plot_{hex}.png` file and return its name and path.
    ///
    /// The file is created empty so that no other caller can claim the
    /// same name.
    pub fn reserve(&self) -> Result<(String, PathBuf)> {
        loop {
            let name = format!("plot_{}.png", Uuid::new_v4().simple());
            let path = self.dir.join(&name);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(_) => return Ok((name, path)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Path of an artifact by file name.
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}
