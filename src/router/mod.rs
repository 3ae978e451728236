//! Router Module
//!
//! Lookup, disambiguation and route composition over an emotion taxonomy.

pub mod composer;
pub mod lookup;
pub mod resolver;

pub use composer::{ChapterAugmentation, EmotionRoute, EmotionRouter, DEFAULT_CHAPTER};
pub use lookup::{
    all_emotion_terms, emotion_by_label, find_cluster_by_emotion, fuzzy_match_emotion, universal_emotions,
    EmotionTermEntry, FuzzyMatch, MatchKind, DEFAULT_FUZZY_LIMIT,
};
pub use resolver::{OverrideRule, PriorityTable, Resolution, Resolver, FALLBACK_LEVEL, STANDARD_PRIORITY};
