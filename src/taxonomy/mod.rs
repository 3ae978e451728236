//! Taxonomy Store
//!
//! The authored table of emotion clusters. A `Taxonomy` is validated once at
//! construction and is read-only afterwards; the router holds it behind an
//! `Arc` so any number of callers can share it.

mod catalog;
mod level;

pub use level::{LevelCategory, LevelId, ParseLevelError};

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::info;

/// Colour tag a cluster is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterColor {
    Rose,
    Violet,
    Amber,
    Teal,
    Sky,
    Garnet,
    Plum,
    Indigo,
    Slate,
}

/// One canonical emotion concept and the words people use for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionItem {
    pub label: String,
    pub synonyms: Vec<String>,
    /// Short explanatory line shown next to the chip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub micro_hint: Option<String>,
}

impl EmotionItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            synonyms: Vec::new(),
            micro_hint: None,
        }
    }

    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms.extend(synonyms.into_iter().map(Into::into));
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.micro_hint = Some(hint.into());
        self
    }

    /// The label followed by every synonym, in authored order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.label.as_str()).chain(self.synonyms.iter().map(String::as_str))
    }
}

/// An authored grouping of near-synonymous emotions that all route to the
/// same primary level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionCluster {
    pub id: String,
    pub label: String,
    pub primary_level_id: LevelId,
    pub secondary_level_ids: Vec<LevelId>,
    pub related_chapter_ids: Vec<String>,
    pub emotions: Vec<EmotionItem>,
    pub color: ClusterColor,
}

impl EmotionCluster {
    pub fn new(id: impl Into<String>, label: impl Into<String>, primary: LevelId, color: ClusterColor) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            primary_level_id: primary,
            secondary_level_ids: Vec::new(),
            related_chapter_ids: Vec::new(),
            emotions: Vec::new(),
            color,
        }
    }

    pub fn with_secondaries(mut self, levels: impl IntoIterator<Item = LevelId>) -> Self {
        self.secondary_level_ids.extend(levels);
        self
    }

    pub fn with_chapters<I, S>(mut self, chapters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_chapter_ids.extend(chapters.into_iter().map(Into::into));
        self
    }

    pub fn with_emotion(mut self, item: EmotionItem) -> Self {
        self.emotions.push(item);
        self
    }
}

/// Reasons an authored table is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyError {
    #[error("cluster id '{0}' is used more than once")]
    DuplicateClusterId(String),

    #[error("cluster '{0}' has no emotions")]
    EmptyCluster(String),

    #[error("cluster '{cluster_id}' contains a blank term")]
    BlankTerm { cluster_id: String },

    #[error("term '{term}' appears in both '{first_cluster}' and '{second_cluster}'")]
    DuplicateTerm {
        term: String,
        first_cluster: String,
        second_cluster: String,
    },

    #[error("cluster '{cluster_id}' lists its own primary level '{level}' as a secondary")]
    SelfSecondary { cluster_id: String, level: LevelId },
}

/// Trim and lowercase a term for matching.
pub(crate) fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Immutable, validated table of emotion clusters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    clusters: Vec<EmotionCluster>,
}

impl Taxonomy {
    /// Validate and wrap an authored cluster list.
    pub fn new(clusters: Vec<EmotionCluster>) -> Result<Self, TaxonomyError> {
        Self::validate(&clusters)?;
        info!("Taxonomy validated: {} clusters", clusters.len());
        Ok(Self { clusters })
    }

    /// The catalog the app ships with.
    pub fn standard() -> Self {
        Self::new(catalog::standard_clusters()).expect("standard emotion catalog is well-formed")
    }

    pub fn clusters(&self) -> &[EmotionCluster] {
        &self.clusters
    }

    pub fn cluster_by_id(&self, id: &str) -> Option<&EmotionCluster> {
        self.clusters.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    fn validate(clusters: &[EmotionCluster]) -> Result<(), TaxonomyError> {
        let mut cluster_ids = HashSet::new();
        // normalized term -> id of the cluster that owns it
        let mut owners: HashMap<String, &str> = HashMap::new();

        for cluster in clusters {
            if !cluster_ids.insert(cluster.id.as_str()) {
                return Err(TaxonomyError::DuplicateClusterId(cluster.id.clone()));
            }
            if cluster.emotions.is_empty() {
                return Err(TaxonomyError::EmptyCluster(cluster.id.clone()));
            }
            if cluster.secondary_level_ids.contains(&cluster.primary_level_id) {
                return Err(TaxonomyError::SelfSecondary {
                    cluster_id: cluster.id.clone(),
                    level: cluster.primary_level_id,
                });
            }

            for term in cluster.emotions.iter().flat_map(EmotionItem::terms) {
                let normalized = normalize_term(term);
                if normalized.is_empty() {
                    return Err(TaxonomyError::BlankTerm {
                        cluster_id: cluster.id.clone(),
                    });
                }
                match owners.get(normalized.as_str()) {
                    Some(owner) if *owner != cluster.id => {
                        return Err(TaxonomyError::DuplicateTerm {
                            term: normalized,
                            first_cluster: owner.to_string(),
                            second_cluster: cluster.id.clone(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        owners.insert(normalized, cluster.id.as_str());
                    }
                }
            }
        }

        Ok(())
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::standard()
    }
}
