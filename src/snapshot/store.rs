use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::RankingsSnapshot;
use crate::errors::RankingsError;

/// The single JSON file holding the current snapshot; every save overwrites it whole
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the snapshot; a missing file is a storage error
    pub fn load(&self) -> Result<RankingsSnapshot, RankingsError> {
        self.load_opt()?
            .ok_or_else(|| self.storage_error("file does not exist"))
    }

    pub fn load_opt(&self) -> Result<Option<RankingsSnapshot>, RankingsError> {
        if !self.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path).map_err(|e| self.storage_error(e))?;
        let snapshot = serde_json::from_str(&json).map_err(|e| {
            self.storage_error(format!(
                "{e}. First 200 chars: {}",
                json.chars().take(200).collect::<String>()
            ))
        })?;

        info!("Loaded snapshot from {}", self.path.display());
        Ok(Some(snapshot))
    }

    pub fn save(&self, snapshot: &RankingsSnapshot) -> Result<(), RankingsError> {
        let json = serde_json::to_string_pretty(snapshot).map_err(|e| self.storage_error(e))?;
        fs::write(&self.path, json).map_err(|e| self.storage_error(e))?;

        info!("Saved snapshot to {}", self.path.display());
        Ok(())
    }

    fn storage_error(&self, message: impl ToString) -> RankingsError {
        RankingsError::Storage {
            path: self.path.display().to_string(),
            message: message.to_string(),
        }
    }
}
