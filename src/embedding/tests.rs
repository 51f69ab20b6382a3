use super::*;

fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let na: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let nb: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if na == 0.0 || nb == 0.0 { 0.0 } else { dot / (na * nb) }
}

#[tokio::test]
async fn test_hashing_embedder_dimension() {
    let embedder = HashingEmbedder::new(128);
    let v = embedder.embed("the earth orbits the sun").await.unwrap();
    assert_eq!(v.len(), 128);
    assert_eq!(embedder.embedding_dim(), 128);
}

#[tokio::test]
async fn test_hashing_embedder_is_deterministic() {
    let embedder = HashingEmbedder::default();
    let a = embedder.embed("vaccines are safe and effective").await.unwrap();
    let b = embedder.embed("vaccines are safe and effective").await.unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_hashing_embedder_output_is_unit_length() {
    let embedder = HashingEmbedder::default();
    let v = embedder.embed("global temperatures are rising").await.unwrap();
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    assert!((norm - 1.0).abs() < 1e-5);
}

#[tokio::test]
async fn test_overlapping_text_is_more_similar_than_disjoint() {
    let embedder = HashingEmbedder::default();
    let query = embedder.embed("5G networks spread coronavirus").await.unwrap();
    let related = embedder
        .embed("5G mobile networks cannot spread coronavirus")
        .await
        .unwrap();
    let unrelated = embedder
        .embed("goldfish remember things for months")
        .await
        .unwrap();

    assert!(cosine(&query, &related) > cosine(&query, &unrelated));
}

#[tokio::test]
async fn test_case_insensitive_tokens() {
    let embedder = HashingEmbedder::default();
    let upper = embedder.embed("SHOCKING Discovery").await.unwrap();
    let lower = embedder.embed("shocking discovery").await.unwrap();
    assert_eq!(upper, lower);
}

#[tokio::test]
async fn test_token_free_input_embeds_to_zero_vector() {
    let embedder = HashingEmbedder::default();
    let v = embedder.embed("!!! ... ---").await.unwrap();
    assert!(v.iter().all(|x| *x == 0.0));
}

#[tokio::test]
async fn test_batch_matches_single_embeds() {
    let embedder = HashingEmbedder::default();
    let texts = vec![
        "the moon orbits the earth".to_string(),
        "coffee may be good for you".to_string(),
    ];

    let batch = embedder.embed_batch(&texts).await.unwrap();
    for (text, batched) in texts.iter().zip(&batch) {
        let single = embedder.embed(text).await.unwrap();
        assert_eq!(&single, batched);
    }
}

#[tokio::test]
async fn test_empty_batch() {
    let embedder = HashingEmbedder::default();
    assert!(embedder.embed_batch(&[]).await.unwrap().is_empty());
}

#[test]
fn test_l2_normalize_leaves_zero_vector() {
    let mut v = vec![0.0f32; 4];
    l2_normalize(&mut v);
    assert!(v.iter().all(|x| *x == 0.0));
}

#[test]
fn test_l2_normalize_scales_to_unit() {
    let mut v = vec![3.0, 4.0];
    l2_normalize(&mut v);
    assert!((v[0] - 0.6).abs() < 1e-6);
    assert!((v[1] - 0.8).abs() < 1e-6);
}
