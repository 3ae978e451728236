//! Lookup Index
//!
//! Resolves user-typed emotion terms against a taxonomy: exact/synonym
//! lookup for routing, ranked substring matching for search-as-you-type, and
//! a flat term list for external search UIs. Nothing here fails; "no match"
//! is an empty result.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::trace;

use crate::taxonomy::{normalize_term, EmotionCluster, EmotionItem, LevelId, Taxonomy};

/// Maximum number of fuzzy results returned by default
pub const DEFAULT_FUZZY_LIMIT: usize = 20;

/// Chips offered when a search comes back empty
const UNIVERSAL_EMOTIONS: [&str; 6] = ["stressed", "anxious", "frustrated", "sad", "numb", "ashamed"];

/// How a query matched an item. Declared weakest first so `Ord` ranks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    SynonymContains,
    LabelContains,
    SynonymPrefix,
    LabelPrefix,
    SynonymExact,
    LabelExact,
}

impl MatchKind {
    pub fn score(&self) -> u8 {
        match self {
            MatchKind::LabelExact => 100,
            MatchKind::SynonymExact => 90,
            MatchKind::LabelPrefix => 80,
            MatchKind::SynonymPrefix => 70,
            MatchKind::LabelContains => 60,
            MatchKind::SynonymContains => 50,
        }
    }
}

/// A ranked search hit. `label` is always the item's canonical label, even
/// when a synonym produced the match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuzzyMatch {
    pub label: String,
    pub level_id: LevelId,
    pub cluster_id: String,
    pub score: u8,
}

/// One searchable term (label or synonym) with its owning cluster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionTermEntry {
    pub label: String,
    pub cluster_id: String,
    pub level_id: LevelId,
}

/// Exact, case-insensitive lookup of a label or synonym. Clusters are
/// searched in authored order and the first owner wins.
pub fn find_cluster_by_emotion<'t>(taxonomy: &'t Taxonomy, label: &str) -> Option<&'t EmotionCluster> {
    let normalized = normalize_term(label);
    if normalized.is_empty() {
        return None;
    }

    taxonomy.clusters().iter().find(|cluster| {
        cluster.emotions.iter().any(|item| {
            normalize_term(&item.label) == normalized
                || item.synonyms.iter().any(|s| normalize_term(s) == normalized)
        })
    })
}

/// Ranked substring search over every label and synonym.
///
/// Hits are de-duplicated by `(label, level)` keeping the best score, sorted
/// by descending score (ties keep authored order) and cut to `limit`.
pub fn fuzzy_match_emotion(taxonomy: &Taxonomy, query: &str, limit: usize) -> Vec<FuzzyMatch> {
    let query = normalize_term(query);
    if query.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<FuzzyMatch> = Vec::new();
    let mut positions: HashMap<(String, LevelId), usize> = HashMap::new();

    for cluster in taxonomy.clusters() {
        for item in &cluster.emotions {
            let Some(kind) = best_match(item, &query) else {
                continue;
            };
            let score = kind.score();
            let key = (item.label.clone(), cluster.primary_level_id);

            match positions.get(&key) {
                Some(&idx) => {
                    let existing = &mut matches[idx];
                    if score > existing.score {
                        existing.score = score;
                        existing.cluster_id = cluster.id.clone();
                    }
                }
                None => {
                    positions.insert(key, matches.len());
                    matches.push(FuzzyMatch {
                        label: item.label.clone(),
                        level_id: cluster.primary_level_id,
                        cluster_id: cluster.id.clone(),
                        score,
                    });
                }
            }
        }
    }

    // stable, so equal scores stay in authored order
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(limit);
    trace!("fuzzy '{}' -> {} matches", query, matches.len());
    matches
}

fn best_match(item: &EmotionItem, query: &str) -> Option<MatchKind> {
    let label = classify(
        &normalize_term(&item.label),
        query,
        [MatchKind::LabelExact, MatchKind::LabelPrefix, MatchKind::LabelContains],
    );
    let synonym = item
        .synonyms
        .iter()
        .filter_map(|s| {
            classify(
                &normalize_term(s),
                query,
                [MatchKind::SynonymExact, MatchKind::SynonymPrefix, MatchKind::SynonymContains],
            )
        })
        .max();

    label.max(synonym)
}

fn classify(term: &str, query: &str, [exact, prefix, contains]: [MatchKind; 3]) -> Option<MatchKind> {
    if term == query {
        Some(exact)
    } else if term.starts_with(query) {
        Some(prefix)
    } else if term.contains(query) {
        Some(contains)
    } else {
        None
    }
}

/// Every label and synonym as a flat list, in authored order.
pub fn all_emotion_terms(taxonomy: &Taxonomy) -> Vec<EmotionTermEntry> {
    taxonomy
        .clusters()
        .iter()
        .flat_map(|cluster| {
            cluster.emotions.iter().flat_map(EmotionItem::terms).map(move |term| EmotionTermEntry {
                label: term.to_string(),
                cluster_id: cluster.id.clone(),
                level_id: cluster.primary_level_id,
            })
        })
        .collect()
}

/// Exact (case-sensitive) lookup of an item by its canonical label.
pub fn emotion_by_label<'t>(taxonomy: &'t Taxonomy, label: &str) -> Option<(&'t EmotionItem, &'t EmotionCluster)> {
    taxonomy
        .clusters()
        .iter()
        .find_map(|cluster| cluster.emotions.iter().find(|e| e.label == label).map(|e| (e, cluster)))
}

pub fn universal_emotions() -> &'static [&'static str] {
    &UNIVERSAL_EMOTIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{ClusterColor, EmotionCluster};

    fn search_taxonomy() -> Taxonomy {
        Taxonomy::new(vec![
            EmotionCluster::new("irritation", "Irritation", LevelId::Anger, ClusterColor::Rose)
                .with_emotion(EmotionItem::new("Self-frustration").with_synonyms(["inner critic"]))
                .with_emotion(EmotionItem::new("Frustrated").with_synonyms(["fed up"]))
                .with_emotion(EmotionItem::new("Fru"))
                .with_emotion(EmotionItem::new("Cranky").with_synonyms(["fruitless effort"])),
            EmotionCluster::new("worry", "Worry", LevelId::Fear, ClusterColor::Sky)
                .with_emotion(EmotionItem::new("Uneasy").with_synonyms(["unfruitful"])),
        ])
        .unwrap()
    }

    #[test]
    fn test_find_cluster_by_label_and_synonym() {
        let taxonomy = Taxonomy::standard();
        assert_eq!(find_cluster_by_emotion(&taxonomy, "Anxious").unwrap().id, "anxious-stress");
        assert_eq!(find_cluster_by_emotion(&taxonomy, "  ANXIOUS ").unwrap().id, "anxious-stress");
        assert_eq!(find_cluster_by_emotion(&taxonomy, "fomo").unwrap().id, "cravings");
        assert!(find_cluster_by_emotion(&taxonomy, "anxi").is_none());
        assert!(find_cluster_by_emotion(&taxonomy, "").is_none());
    }

    #[test]
    fn test_match_kinds_are_ordered_by_score() {
        let mut kinds = vec![
            MatchKind::LabelExact,
            MatchKind::SynonymContains,
            MatchKind::LabelPrefix,
            MatchKind::SynonymExact,
            MatchKind::LabelContains,
            MatchKind::SynonymPrefix,
        ];
        kinds.sort();
        let scores: Vec<u8> = kinds.iter().map(MatchKind::score).collect();
        assert_eq!(scores, vec![50, 60, 70, 80, 90, 100]);
    }

    #[test]
    fn test_fuzzy_tiers() {
        let taxonomy = search_taxonomy();
        let results = fuzzy_match_emotion(&taxonomy, "fru", DEFAULT_FUZZY_LIMIT);

        let scored: Vec<(&str, u8)> = results.iter().map(|m| (m.label.as_str(), m.score)).collect();
        assert_eq!(
            scored,
            vec![
                ("Fru", 100),
                ("Frustrated", 80),
                ("Cranky", 70),
                ("Self-frustration", 60),
                ("Uneasy", 50),
            ]
        );
    }

    #[test]
    fn test_fuzzy_item_keeps_its_best_tier() {
        let taxonomy = search_taxonomy();
        let results = fuzzy_match_emotion(&taxonomy, "fed up", DEFAULT_FUZZY_LIMIT);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].label, "Frustrated");
        assert_eq!(results[0].score, 90);
        assert_eq!(results[0].cluster_id, "irritation");
    }

    #[test]
    fn test_fuzzy_blank_query_is_empty() {
        let taxonomy = Taxonomy::standard();
        assert!(fuzzy_match_emotion(&taxonomy, "", DEFAULT_FUZZY_LIMIT).is_empty());
        assert!(fuzzy_match_emotion(&taxonomy, "   \t", DEFAULT_FUZZY_LIMIT).is_empty());
    }

    #[test]
    fn test_fuzzy_is_truncated() {
        let cluster = (0..30).fold(
            EmotionCluster::new("many", "Many", LevelId::Grief, ClusterColor::Indigo),
            |c, i| c.with_emotion(EmotionItem::new(format!("blue {i}"))),
        );
        let taxonomy = Taxonomy::new(vec![cluster]).unwrap();

        let results = fuzzy_match_emotion(&taxonomy, "blue", DEFAULT_FUZZY_LIMIT);
        assert_eq!(results.len(), DEFAULT_FUZZY_LIMIT);
        // all prefix hits, so authored order survives the sort
        assert_eq!(results[0].label, "blue 0");
        assert_eq!(results[19].label, "blue 19");

        assert_eq!(fuzzy_match_emotion(&taxonomy, "blue", 5).len(), 5);
    }

    #[test]
    fn test_all_terms_flattens_in_order() {
        let taxonomy = search_taxonomy();
        let terms = all_emotion_terms(&taxonomy);
        let labels: Vec<&str> = terms.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Self-frustration",
                "inner critic",
                "Frustrated",
                "fed up",
                "Fru",
                "Cranky",
                "fruitless effort",
                "Uneasy",
                "unfruitful",
            ]
        );
        assert_eq!(terms.last().unwrap().level_id, LevelId::Fear);
        assert_eq!(terms.last().unwrap().cluster_id, "worry");
    }

    #[test]
    fn test_emotion_by_label_is_case_sensitive() {
        let taxonomy = Taxonomy::standard();
        let (item, cluster) = emotion_by_label(&taxonomy, "Numb").unwrap();
        assert!(item.micro_hint.is_some());
        assert_eq!(cluster.primary_level_id, LevelId::Apathy);
        assert!(emotion_by_label(&taxonomy, "numb").is_none());
    }

    #[test]
    fn test_universal_emotions_resolve() {
        let taxonomy = Taxonomy::standard();
        for term in universal_emotions() {
            assert!(find_cluster_by_emotion(&taxonomy, term).is_some(), "'{term}' does not resolve");
        }
    }
}
