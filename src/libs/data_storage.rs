use super::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "genz-todo";
pub const TODOS_FILE_NAME: &str = "todos.json";
pub const STREAK_FILE_NAME: &str = "streak.json";

/// Resolves where the task and streak files live.
///
/// Both files sit side by side in one directory. Unless `--data-dir` says
/// otherwise that directory is the current working directory.
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        Self { base_path: PathBuf::from(".") }
    }

    pub fn at(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of `file_name` inside the data directory, without touching the disk.
    pub fn path(&self, file_name: &str) -> PathBuf {
        self.base_path.join(file_name)
    }

    /// Same as [`DataStorage::path`] but creates the data directory first, for writers.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
