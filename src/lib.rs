//! Emotion Router
//!
//! Classifies user-selected emotion words against an authored taxonomy and
//! routes them to a single primary consciousness level, with ordered
//! secondary levels and related content chapters:
//! - Taxonomy of emotion clusters, validated once and shared read-only
//! - Exact and ranked fuzzy lookup of emotion terms
//! - Data-driven disambiguation (override rules + priority table)
//! - Level explanations keyed by situation
//! - A small "recently felt" history

pub mod cli;
pub mod config;
pub mod explanations;
pub mod history;
pub mod router;
pub mod taxonomy;
pub mod utils;

// Re-exports for convenience
pub use explanations::{ExplanationCatalog, Situation};
pub use history::{EmotionHistory, HistoryStore, InMemoryHistory};
pub use router::{EmotionRoute, EmotionRouter, FuzzyMatch};
pub use taxonomy::{EmotionCluster, EmotionItem, LevelId, Taxonomy, TaxonomyError};
