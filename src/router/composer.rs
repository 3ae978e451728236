//! Route Composer
//!
//! Turns a list of selected emotion labels into an `EmotionRoute`: resolve
//! each label to its cluster, disambiguate the implicated levels, then gather
//! secondary levels and related chapters.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use super::lookup::{self, EmotionTermEntry, FuzzyMatch, DEFAULT_FUZZY_LIMIT};
use super::resolver::{Resolution, Resolver};
use crate::taxonomy::{EmotionCluster, EmotionItem, LevelId, Taxonomy};

/// Chapter always surfaced with an empty selection
pub const DEFAULT_CHAPTER: &str = "stress";

/// The engine's answer for one selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionRoute {
    pub primary_level_id: LevelId,
    /// Never contains the primary
    pub secondary_level_ids: Vec<LevelId>,
    pub related_chapter_ids: Vec<String>,
}

impl Default for EmotionRoute {
    fn default() -> Self {
        Self {
            primary_level_id: LevelId::Fear,
            secondary_level_ids: Vec::new(),
            related_chapter_ids: vec![DEFAULT_CHAPTER.to_string()],
        }
    }
}

/// "Whenever `level` is the primary, `chapter` is among the related chapters."
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterAugmentation {
    pub level: LevelId,
    pub chapter: String,
}

impl ChapterAugmentation {
    pub fn new(level: LevelId, chapter: impl Into<String>) -> Self {
        Self {
            level,
            chapter: chapter.into(),
        }
    }

    pub fn standard() -> Vec<Self> {
        vec![
            Self::new(LevelId::Fear, "stress"),
            Self::new(LevelId::Anger, "expression"),
        ]
    }
}

/// Routing engine over an injected taxonomy. Cheap to clone and safe to
/// share between threads.
#[derive(Debug, Clone)]
pub struct EmotionRouter {
    taxonomy: Arc<Taxonomy>,
    resolver: Resolver,
    augmentations: Vec<ChapterAugmentation>,
    fuzzy_limit: usize,
}

impl EmotionRouter {
    pub fn new(taxonomy: Arc<Taxonomy>) -> Self {
        Self {
            taxonomy,
            resolver: Resolver::standard(),
            augmentations: ChapterAugmentation::standard(),
            fuzzy_limit: DEFAULT_FUZZY_LIMIT,
        }
    }

    /// Router over the shipped catalog with the standard rules.
    pub fn standard() -> Self {
        Self::new(Arc::new(Taxonomy::standard()))
    }

    pub fn with_resolver(mut self, resolver: Resolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_augmentations(mut self, augmentations: Vec<ChapterAugmentation>) -> Self {
        self.augmentations = augmentations;
        self
    }

    pub fn with_fuzzy_limit(mut self, limit: usize) -> Self {
        self.fuzzy_limit = limit;
        self
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn find_cluster_by_emotion(&self, label: &str) -> Option<&EmotionCluster> {
        lookup::find_cluster_by_emotion(&self.taxonomy, label)
    }

    pub fn fuzzy_match_emotion(&self, query: &str) -> Vec<FuzzyMatch> {
        lookup::fuzzy_match_emotion(&self.taxonomy, query, self.fuzzy_limit)
    }

    pub fn all_emotion_terms(&self) -> Vec<EmotionTermEntry> {
        lookup::all_emotion_terms(&self.taxonomy)
    }

    pub fn emotion_by_label(&self, label: &str) -> Option<(&EmotionItem, &EmotionCluster)> {
        lookup::emotion_by_label(&self.taxonomy, label)
    }

    /// Route a selection of emotion labels. Unrecognized labels are skipped,
    /// so an empty or unrecognized selection lands on the resolver's fallback.
    pub fn get_primary_route<S: AsRef<str>>(&self, selected: &[S]) -> EmotionRoute {
        let mut level_ids: Vec<LevelId> = Vec::new();
        let mut chapters: Vec<String> = Vec::new();
        let mut clusters: HashMap<LevelId, &EmotionCluster> = HashMap::new();

        for label in selected {
            let label = label.as_ref();
            let Some(cluster) = self.find_cluster_by_emotion(label) else {
                debug!("Ignoring unrecognized emotion label '{}'", label);
                continue;
            };
            push_unique(&mut level_ids, cluster.primary_level_id);
            for chapter in &cluster.related_chapter_ids {
                push_unique(&mut chapters, chapter.clone());
            }
            clusters.insert(cluster.primary_level_id, cluster);
        }

        let Resolution { primary, secondaries } = self.resolver.resolve(&level_ids);

        let mut secondary_ids: Vec<LevelId> = Vec::new();
        for level in secondaries {
            push_unique(&mut secondary_ids, level);
            if let Some(cluster) = clusters.get(&level) {
                for related in &cluster.secondary_level_ids {
                    push_unique(&mut secondary_ids, *related);
                }
            }
        }

        if let Some(cluster) = clusters.get(&primary) {
            for chapter in &cluster.related_chapter_ids {
                push_unique(&mut chapters, chapter.clone());
            }
        }
        for augmentation in self.augmentations.iter().filter(|a| a.level == primary) {
            push_unique(&mut chapters, augmentation.chapter.clone());
        }

        secondary_ids.retain(|level| *level != primary);

        debug!(
            "Routed {:?} -> primary={}, secondaries={:?}, chapters={:?}",
            selected.iter().map(|s| s.as_ref()).collect::<Vec<&str>>(),
            primary,
            secondary_ids,
            chapters
        );

        EmotionRoute {
            primary_level_id: primary,
            secondary_level_ids: secondary_ids,
            related_chapter_ids: chapters,
        }
    }
}

impl Default for EmotionRouter {
    fn default() -> Self {
        Self::standard()
    }
}

fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if !items.contains(&item) {
        items.push(item);
    }
}
