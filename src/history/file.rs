//! JSON-file backed history

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::{record, HistoryEntry, HistoryStore, DEFAULT_HISTORY_CAPACITY};
use crate::taxonomy::LevelId;

/// Filename used when no path is configured
const HISTORY_FILENAME: &str = "emotion_history.json";

pub struct EmotionHistory {
    path: PathBuf,
    capacity: usize,
    /// Serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl EmotionHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            capacity: DEFAULT_HISTORY_CAPACITY,
            lock: Mutex::new(()),
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn default_path() -> PathBuf {
        PathBuf::from(HISTORY_FILENAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<HistoryEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.path)
            .await
            .context("Failed to read history file")?;

        let mut entries: Vec<HistoryEntry> = match serde_json::from_str(&json) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Ignoring unreadable history file {}: {}", self.path.display(), e);
                return Ok(Vec::new());
            }
        };

        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries.truncate(self.capacity);
        Ok(entries)
    }

    async fn save(&self, entries: &[HistoryEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .context("Failed to create history directory")?;
        }

        let json = serde_json::to_string_pretty(entries).context("Failed to serialize history")?;
        fs::write(&self.path, json)
            .await
            .context("Failed to write history file")?;
        Ok(())
    }
}

impl Default for EmotionHistory {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

#[async_trait]
impl HistoryStore for EmotionHistory {
    async fn add(&self, emotion: &str, level_id: LevelId) -> Result<HistoryEntry> {
        let _guard = self.lock.lock().await;

        let mut entries = self.load().await?;
        let entry = HistoryEntry::new(emotion, level_id);
        record(&mut entries, entry.clone(), self.capacity);
        self.save(&entries).await?;

        debug!("Recorded '{}' -> {} ({} entries)", emotion, level_id, entries.len());
        Ok(entry)
    }

    async fn recent(&self) -> Result<Vec<HistoryEntry>> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    async fn clear(&self) -> Result<()> {
        let _guard = self.lock.lock().await;
        if self.path.exists() {
            fs::remove_file(&self.path)
                .await
                .context("Failed to remove history file")?;
        }
        Ok(())
    }
}
