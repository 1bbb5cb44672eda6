//! Best scores stored as a small JSON document, one entry per tier:
//!
//! ```json
//! { "easy": 128, "medium": 2048, "hard": null }
//! ```
//!
//! A missing file means no scores yet. Unknown keys are ignored and missing
//! keys read as absent, so older files keep loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{BestScoreStore, StoreError};
use crate::types::Difficulty;

/// On-disk layout.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreFile {
    #[serde(default)]
    pub easy: Option<u32>,
    #[serde(default)]
    pub medium: Option<u32>,
    #[serde(default)]
    pub hard: Option<u32>,
}

impl ScoreFile {
    pub fn get(&self, difficulty: Difficulty) -> Option<u32> {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    pub fn set(&mut self, difficulty: Difficulty, score: u32) {
        let slot = match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        };
        *slot = Some(score);
    }
}

/// File-backed [`BestScoreStore`].
///
/// The file is re-read on every load so several sessions can share it; saves
/// rewrite the whole document.
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole document. A missing file is an empty document.
    pub fn read(&self) -> Result<ScoreFile, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(ScoreFile::default()),
            Err(err) => return Err(unavailable(&self.path, err)),
        };
        serde_json::from_slice(&bytes)
            .map_err(|err| StoreError::Malformed(format!("{}: {}", self.path.display(), err)))
    }

    fn write(&self, file: &ScoreFile) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| unavailable(parent, err))?;
            }
        }
        let text = serde_json::to_string_pretty(file)
            .map_err(|err| StoreError::Malformed(err.to_string()))?;
        fs::write(&self.path, text).map_err(|err| unavailable(&self.path, err))
    }
}

impl BestScoreStore for JsonScoreStore {
    fn load_best_score(&mut self, difficulty: Difficulty) -> Result<Option<u32>, StoreError> {
        Ok(self.read()?.get(difficulty))
    }

    fn save_best_score(&mut self, difficulty: Difficulty, score: u32) -> Result<(), StoreError> {
        // A corrupt file is not silently overwritten.
        let mut file = self.read()?;
        file.set(difficulty, score);
        self.write(&file)
    }
}

fn unavailable(path: &Path, err: io::Error) -> StoreError {
    StoreError::Unavailable(format!("{}: {}", path.display(), err))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("falling2048-{}-{}.json", name, std::process::id()));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn missing_file_reads_as_no_scores() {
        let mut store = JsonScoreStore::new(temp_path("missing"));
        assert_eq!(store.load_best_score(Difficulty::Hard).unwrap(), None);
    }

    #[test]
    fn save_then_load_keeps_other_tiers() {
        let path = temp_path("tiers");
        let mut store = JsonScoreStore::new(&path);
        store.save_best_score(Difficulty::Easy, 64).unwrap();
        store.save_best_score(Difficulty::Hard, 512).unwrap();

        let mut reopened = JsonScoreStore::new(&path);
        assert_eq!(reopened.load_best_score(Difficulty::Easy).unwrap(), Some(64));
        assert_eq!(reopened.load_best_score(Difficulty::Medium).unwrap(), None);
        assert_eq!(reopened.load_best_score(Difficulty::Hard).unwrap(), Some(512));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn partial_document_loads() {
        let path = temp_path("partial");
        fs::write(&path, r#"{ "medium": 300, "extra": true }"#).unwrap();
        let mut store = JsonScoreStore::new(&path);
        assert_eq!(store.load_best_score(Difficulty::Medium).unwrap(), Some(300));
        assert_eq!(store.load_best_score(Difficulty::Easy).unwrap(), None);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn garbage_is_malformed_and_left_alone() {
        let path = temp_path("garbage");
        fs::write(&path, "not json").unwrap();
        let mut store = JsonScoreStore::new(&path);

        assert!(matches!(
            store.load_best_score(Difficulty::Easy),
            Err(StoreError::Malformed(_))
        ));
        assert!(store.save_best_score(Difficulty::Easy, 8).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn directory_path_is_unavailable() {
        let mut store = JsonScoreStore::new(std::env::temp_dir());
        assert!(matches!(
            store.load_best_score(Difficulty::Easy),
            Err(StoreError::Unavailable(_))
        ));
    }
}
