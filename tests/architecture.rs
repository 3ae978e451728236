//! Architecture Verification Suite
//!
//! Keeps the shared pieces thread-safe and the stores usable behind trait
//! objects.

#[cfg(test)]
mod architecture_tests {
    use std::sync::Arc;

    use emotion_router::history::{EmotionHistory, HistoryStore, InMemoryHistory};
    use emotion_router::router::EmotionRouter;
    use emotion_router::taxonomy::LevelId;

    #[test]
    fn test_engine_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<emotion_router::taxonomy::Taxonomy>();
        assert_send_sync::<emotion_router::router::EmotionRouter>();
        assert_send_sync::<emotion_router::router::Resolver>();
        assert_send_sync::<emotion_router::explanations::ExplanationCatalog>();
        assert_send_sync::<emotion_router::cli::CommandRunner>();
    }

    #[test]
    fn test_history_stores_are_object_safe() {
        fn assert_store(_: Arc<dyn HistoryStore>) {}

        assert_store(Arc::new(InMemoryHistory::default()));
        assert_store(Arc::new(EmotionHistory::default()));
    }

    #[tokio::test]
    async fn test_router_shared_across_tasks() {
        let router = EmotionRouter::standard();
        let handles: Vec<_> = ["Shame", "Anxious", "Lonely", "Smug"]
            .into_iter()
            .map(|label| {
                let router = router.clone();
                tokio::spawn(async move { router.get_primary_route(&[label]).primary_level_id })
            })
            .collect();

        let mut levels = Vec::new();
        for handle in handles {
            levels.push(handle.await.unwrap());
        }
        assert_eq!(levels, vec![LevelId::Shame, LevelId::Fear, LevelId::Grief, LevelId::Pride]);
    }
}
