//! JSON file repository for the rename configuration.
//!
//! Reads and writes the encoded document at a fixed path, usually
//! `<config dir>/card_renames.json`.
//!
//! # Atomic writes (for beginners)
//!
//! Writing straight into the target file would let a crash (or a reader
//! racing the writer) observe a half-written document.  Instead the new
//! content goes to a uniquely named temporary file next to the target, which
//! is then renamed over it.  A rename within one directory replaces the file
//! in a single step, so a reader sees either the old document or the new one.
//!
//! ```text
//! write(contents)
//!   ├─ create_dir_all(parent)
//!   ├─ write  .card_renames.json.<uuid>.tmp
//!   └─ rename .card_renames.json.<uuid>.tmp  →  card_renames.json
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;
use uuid::Uuid;

use super::paths::CONFIG_FILE_NAME;
use crate::application::config_store::{ConfigRepository, StoreError};

/// [`ConfigRepository`] backed by a JSON file on the local file system.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Uses the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses [`CONFIG_FILE_NAME`] inside the host-supplied directory `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(CONFIG_FILE_NAME))
    }

    /// Full path of the rename file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the containing directory if it does not exist yet.
    fn ensure_parent_dir(&self) -> Result<(), StoreError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                fs::create_dir_all(dir).map_err(|source| StoreError::Io {
                    path: dir.to_path_buf(),
                    source,
                })
            }
            _ => Ok(()),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| CONFIG_FILE_NAME.to_string());
        self.path
            .with_file_name(format!(".{file_name}.{}.tmp", Uuid::new_v4().simple()))
    }
}

impl ConfigRepository for JsonFileRepository {
    fn read(&self) -> Result<Option<Vec<u8>>, StoreError> {
        self.ensure_parent_dir()?;
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write(&self, contents: &str) -> Result<(), StoreError> {
        self.ensure_parent_dir()?;

        let temp = self.temp_path();
        fs::write(&temp, contents).map_err(|source| StoreError::Io {
            path: temp.clone(),
            source,
        })?;

        if let Err(source) = fs::rename(&temp, &self.path) {
            // Best effort: the temporary file is garbage once the rename failed.
            fs::remove_file(&temp).ok();
            return Err(StoreError::Io {
                path: self.path.clone(),
                source,
            });
        }

        debug!("wrote {} bytes to {}", contents.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Creates a unique scratch directory under the system temp dir.
    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("card_rename_test_{}", Uuid::new_v4()))
    }

    #[test]
    fn test_read_missing_file_returns_none_and_creates_directory() {
        // Arrange
        let dir = scratch_dir().join("nested");
        let repo = JsonFileRepository::in_dir(&dir);

        // Act
        let result = repo.read().expect("read");

        // Assert
        assert!(result.is_none());
        assert!(dir.is_dir(), "parent directory must be created");

        std::fs::remove_dir_all(dir.parent().unwrap()).ok();
    }

    #[test]
    fn test_write_then_read_returns_same_bytes() {
        let dir = scratch_dir();
        let repo = JsonFileRepository::in_dir(&dir);

        repo.write("{ \"renames\": { \"Bash\": \"痛击\" } }\n").expect("write");
        let bytes = repo.read().expect("read").expect("file must exist");

        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "{ \"renames\": { \"Bash\": \"痛击\" } }\n"
        );
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_write_replaces_previous_content_and_leaves_no_temp_files() {
        // Arrange
        let dir = scratch_dir();
        let repo = JsonFileRepository::in_dir(&dir);
        repo.write("first, and much longer than the second").expect("write 1");

        // Act
        repo.write("second").expect("write 2");

        // Assert
        assert_eq!(std::fs::read_to_string(repo.path()).unwrap(), "second");
        let entries: Vec<_> = std::fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from(CONFIG_FILE_NAME)]);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_read_fails_when_parent_is_a_file() {
        // Arrange: a regular file where the directory should be
        let blocker = scratch_dir();
        std::fs::write(&blocker, "not a directory").unwrap();
        let repo = JsonFileRepository::in_dir(&blocker);

        // Act
        let result = repo.read();

        // Assert
        assert!(matches!(result, Err(StoreError::Io { .. })));
        std::fs::remove_file(&blocker).ok();
    }

    #[test]
    fn test_location_is_file_path() {
        let repo = JsonFileRepository::new("/tmp/some/card_renames.json");
        assert!(repo.location().ends_with("card_renames.json"));
    }
}
