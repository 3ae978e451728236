//! "Recently felt" history
//!
//! Keeps the last few (emotion, level) pairs a user routed to, newest first.
//! The router never reads this; callers record into it after routing.

mod file;

pub use file::EmotionHistory;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::taxonomy::LevelId;

/// Default number of entries kept
pub const DEFAULT_HISTORY_CAPACITY: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub emotion: String,
    pub level_id: LevelId,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(emotion: impl Into<String>, level_id: LevelId) -> Self {
        Self {
            emotion: emotion.into(),
            level_id,
            timestamp: Utc::now(),
        }
    }
}

/// Storage for recently felt emotions
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Record an emotion at the front, replacing an identical earlier entry
    async fn add(&self, emotion: &str, level_id: LevelId) -> Result<HistoryEntry>;

    /// Entries, newest first
    async fn recent(&self) -> Result<Vec<HistoryEntry>>;

    async fn clear(&self) -> Result<()>;
}

/// Put `entry` first, drop any older entry for the same pair and cap the length.
pub(crate) fn record(entries: &mut Vec<HistoryEntry>, entry: HistoryEntry, capacity: usize) {
    entries.retain(|e| !(e.emotion == entry.emotion && e.level_id == entry.level_id));
    entries.insert(0, entry);
    entries.truncate(capacity);
}

/// Process-local history, mostly for tests and embedding
pub struct InMemoryHistory {
    entries: RwLock<Vec<HistoryEntry>>,
    capacity: usize,
}

impl InMemoryHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            capacity,
        }
    }
}

impl Default for InMemoryHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistory {
    async fn add(&self, emotion: &str, level_id: LevelId) -> Result<HistoryEntry> {
        let entry = HistoryEntry::new(emotion, level_id);
        let mut entries = self.entries.write().await;
        record(&mut entries, entry.clone(), self.capacity);
        Ok(entry)
    }

    async fn recent(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.entries.read().await.clone())
    }

    async fn clear(&self) -> Result<()> {
        self.entries.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_newest_first_and_capped() {
        let history = InMemoryHistory::default();
        history.add("Anxious", LevelId::Fear).await.unwrap();
        history.add("Numb", LevelId::Apathy).await.unwrap();
        history.add("Smug", LevelId::Pride).await.unwrap();
        history.add("Lonely", LevelId::Grief).await.unwrap();

        let emotions: Vec<String> = history.recent().await.unwrap().into_iter().map(|e| e.emotion).collect();
        assert_eq!(emotions, vec!["Lonely", "Smug", "Numb"]);
    }

    #[tokio::test]
    async fn test_same_pair_moves_to_front() {
        let history = InMemoryHistory::new(5);
        history.add("Anxious", LevelId::Fear).await.unwrap();
        history.add("Numb", LevelId::Apathy).await.unwrap();
        history.add("Anxious", LevelId::Fear).await.unwrap();

        let recent = history.recent().await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].emotion, "Anxious");
        assert_eq!(recent[1].emotion, "Numb");

        history.clear().await.unwrap();
        assert!(history.recent().await.unwrap().is_empty());
    }
}
