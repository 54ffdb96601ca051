//! Property tests for similarity search ordering and score bounds.

use lore_core::Document;
use lore_rag::search;
use proptest::prelude::*;

/// Generate a non-zero L2-normalized embedding of the given dimension.
fn arb_normalized_embedding(dim: usize) -> impl Strategy<Value = Vec<f32>> {
    proptest::collection::vec(-1.0f32..1.0f32, dim).prop_filter_map(
        "non-zero embedding",
        |mut v| {
            let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
            if norm < 1e-8 {
                return None;
            }
            for val in &mut v {
                *val /= norm;
            }
            Some(v)
        },
    )
}

/// Generate a document with a normalized embedding. Ids are assigned by the
/// caller so insertion order stays meaningful.
fn arb_document(dim: usize) -> impl Strategy<Value = Document> {
    ("[a-z ]{3,30}", arb_normalized_embedding(dim)).prop_map(|(title, embedding)| Document {
        id: 0,
        title,
        url: None,
        author: None,
        published_date: None,
        categories: None,
        content: String::new(),
        embedding,
    })
}

const DIM: usize = 16;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any document set and query vector, results come back sorted by
    /// non-increasing score, bounded by top_k and the store size, with
    /// every score inside the cosine range [-1, 1].
    #[test]
    fn results_ordered_bounded_and_within_cosine_range(
        mut documents in proptest::collection::vec(arb_document(DIM), 0..20),
        query in arb_normalized_embedding(DIM),
        top_k in 1usize..25,
    ) {
        for (index, document) in documents.iter_mut().enumerate() {
            document.id = index as i64 + 1;
        }

        let results = search(&documents, &query, top_k);

        prop_assert!(results.len() <= top_k);
        prop_assert!(results.len() <= documents.len());

        for window in results.windows(2) {
            prop_assert!(
                window[0].score >= window[1].score,
                "results not in descending order: {} < {}",
                window[0].score,
                window[1].score,
            );
        }

        for result in &results {
            prop_assert!(
                (-1.0..=1.0).contains(&result.score),
                "score {} outside cosine bounds",
                result.score,
            );
        }
    }

    /// Searching twice over the same store with the same query returns the
    /// same documents in the same order, even with tied scores.
    #[test]
    fn search_is_deterministic(
        mut documents in proptest::collection::vec(arb_document(DIM), 0..20),
        query in arb_normalized_embedding(DIM),
        top_k in 1usize..10,
    ) {
        for (index, document) in documents.iter_mut().enumerate() {
            document.id = index as i64 + 1;
        }

        let first = search(&documents, &query, top_k);
        let second = search(&documents, &query, top_k);

        let first_ids: Vec<i64> = first.iter().map(|r| r.document.id).collect();
        let second_ids: Vec<i64> = second.iter().map(|r| r.document.id).collect();
        prop_assert_eq!(first_ids, second_ids);
    }
}
