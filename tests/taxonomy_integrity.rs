//! Catalog integrity checks

use std::collections::HashSet;
use std::sync::Arc;

use emotion_router::explanations::ExplanationCatalog;
use emotion_router::router::{universal_emotions, EmotionRouter};
use emotion_router::taxonomy::{EmotionCluster, EmotionItem, LevelId, Taxonomy, TaxonomyError};

#[test]
fn test_every_term_resolves_to_its_own_cluster() {
    let router = EmotionRouter::standard();
    for term in router.all_emotion_terms() {
        let cluster = router.find_cluster_by_emotion(&term.label).unwrap();
        assert_eq!(cluster.id, term.cluster_id, "term '{}'", term.label);
        assert_eq!(cluster.primary_level_id, term.level_id);
    }
}

#[test]
fn test_cluster_ids_are_unique_and_addressable() {
    let taxonomy = Taxonomy::standard();
    let ids: HashSet<&str> = taxonomy.clusters().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids.len(), taxonomy.len());
    for id in ids {
        assert_eq!(taxonomy.cluster_by_id(id).unwrap().id, id);
    }
    assert!(taxonomy.cluster_by_id("missing").is_none());
}

#[test]
fn test_primary_levels_are_explained() {
    let explanations = ExplanationCatalog::standard();
    for cluster in Taxonomy::standard().clusters() {
        assert!(
            explanations.get(cluster.primary_level_id).is_some(),
            "no explanation for {}",
            cluster.primary_level_id
        );
    }
}

#[test]
fn test_universal_emotions_are_in_catalog() {
    let router = EmotionRouter::standard();
    let levels: HashSet<LevelId> = universal_emotions()
        .iter()
        .map(|term| router.find_cluster_by_emotion(term).unwrap().primary_level_id)
        .collect();
    // stressed and anxious share fear
    assert_eq!(levels.len(), 5);
}

#[test]
fn test_alternate_taxonomy_is_injected() {
    let taxonomy = Taxonomy::new(vec![EmotionCluster::new(
        "calm",
        "Calm",
        LevelId::Peace,
        emotion_router::taxonomy::ClusterColor::Teal,
    )
    .with_chapters(["stillness"])
    .with_emotion(EmotionItem::new("Serene"))])
    .unwrap();

    let router = EmotionRouter::new(Arc::new(taxonomy));
    let route = router.get_primary_route(&["serene"]);
    assert_eq!(route.primary_level_id, LevelId::Peace);
    assert_eq!(route.related_chapter_ids, vec!["stillness"]);
    assert!(router.find_cluster_by_emotion("Anxious").is_none());
}

#[test]
fn test_validation_error_messages() {
    let a = EmotionCluster::new("a", "A", LevelId::Fear, emotion_router::taxonomy::ClusterColor::Sky)
        .with_emotion(EmotionItem::new("Worried"));
    let b = EmotionCluster::new("b", "B", LevelId::Grief, emotion_router::taxonomy::ClusterColor::Indigo)
        .with_emotion(EmotionItem::new("Sad").with_synonyms(["WORRIED"]));

    let err = Taxonomy::new(vec![a, b]).unwrap_err();
    assert!(matches!(err, TaxonomyError::DuplicateTerm { .. }));
    assert_eq!(err.to_string(), "term 'worried' appears in both 'a' and 'b'");
}
