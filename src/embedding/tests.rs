use super::*;

#[tokio::test]
async fn test_mock_embedder_is_deterministic() {
    let embedder = MockEmbedder::new();
    let first = embedder.embed("windscreen excess").await.unwrap();
    let second = embedder.embed("windscreen excess").await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 16);
}

#[tokio::test]
async fn test_mock_embedder_distinguishes_texts() {
    let embedder = MockEmbedder::new();
    let first = embedder.embed("windscreen excess").await.unwrap();
    let second = embedder.embed("maid insurance").await.unwrap();
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_mock_embedder_respects_dim() {
    let embedder = MockEmbedder::with_dim(8);
    let vector = embedder.embed("anything").await.unwrap();
    assert_eq!(vector.len(), 8);
}

#[tokio::test]
async fn test_failing_mock_embedder_errors() {
    let embedder = MockEmbedder::failing();
    let err = embedder.embed("anything").await.unwrap_err();
    assert!(matches!(err, EmbeddingError::RequestFailed { .. }));
}

#[test]
fn test_gemini_embedder_debug_redacts_api_key() {
    let embedder = GeminiEmbedder::new("super-secret-key");
    let printed = format!("{embedder:?}");
    assert!(!printed.contains("super-secret-key"));
    assert!(printed.contains("gemini-embedding-001"));
}
