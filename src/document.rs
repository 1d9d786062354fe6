use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The single in-memory text buffer the migration operates on.
///
/// A `Document` is loaded from disk once, threaded through the rule
/// pipeline as a whole string, and finally persisted over the original
/// file. There is no other state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path the buffer was loaded from and will be persisted to.
    path: PathBuf,
    /// Full file contents.
    text: String,
}

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Document {
    /// Load a document from disk. UTF-8 is enforced here; a file that is
    /// not valid text fails the read.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, DocumentError> {
        let path = path.into();
        let text = fs::read_to_string(&path).map_err(|source| DocumentError::Read {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, text })
    }

    /// Build a document around existing text without touching the
    /// filesystem.
    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Swap in replacement text, returning the previous buffer.
    pub fn replace_text(&mut self, text: String) -> String {
        std::mem::replace(&mut self.text, text)
    }

    /// Persist the buffer over the original file.
    ///
    /// Full overwrite, no backup. Uses tempfile + fsync + rename so the
    /// target is never observed half-written, then touches the mtime so
    /// file watchers notice the rewrite even when rename preserves
    /// timestamps.
    pub fn persist(&self) -> Result<(), DocumentError> {
        atomic_write(&self.path, self.text.as_bytes()).map_err(|source| DocumentError::Write {
            path: self.path.clone(),
            source,
        })?;

        let now = filetime::FileTime::now();
        filetime::set_file_mtime(&self.path, now).map_err(|source| DocumentError::Write {
            path: self.path.clone(),
            source,
        })?;

        Ok(())
    }
}

/// Atomic file write: tempfile in the target directory, fsync, rename.
fn atomic_write(path: &Path, content: &[u8]) -> Result<(), std::io::Error> {
    // The tempfile must live in the same directory as the target so the
    // final rename stays on one filesystem.
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
