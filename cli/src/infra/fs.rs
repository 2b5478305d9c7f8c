//! Filesystem infrastructure: implements `ArtifactStore` over a directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::ArtifactStore;

/// Production `ArtifactStore` rooted at the working directory.
pub struct LocalArtifactStore {
    dir: PathBuf,
}

impl LocalArtifactStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the process working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn current_dir() -> Result<Self> {
        let dir = std::env::current_dir().context("cannot determine working directory")?;
        Ok(Self::new(dir))
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl ArtifactStore for LocalArtifactStore {
    fn location(&self) -> String {
        self.dir.display().to_string()
    }

    fn list_names(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.dir)
            .with_context(|| format!("reading directory {}", self.dir.display()))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.with_context(|| format!("reading directory {}", self.dir.display()))?;
            if !is_file(&entry.path()) {
                continue;
            }
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        Ok(names)
    }

    fn read(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.path(name);
        std::fs::read(&path).with_context(|| format!("reading file {}", path.display()))
    }

    fn remove(&self, name: &str) -> Result<()> {
        let path = self.path(name);
        std::fs::remove_file(&path).with_context(|| format!("removing file {}", path.display()))
    }
}

fn is_file(path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|m| m.is_file())
}
