//! Brute-force cosine similarity search.
//!
//! A full linear scan, O(N·D) per query. The store holds hundreds to low
//! thousands of articles, so no index structure is required or justified.

use tracing::warn;

use lore_core::Document;

/// A retrieved document paired with its similarity score.
#[derive(Debug, Clone)]
pub struct ScoredDocument {
    /// The retrieved document.
    pub document: Document,
    /// Cosine similarity against the query vector, in [-1, 1].
    pub score: f32,
}

/// Compute cosine similarity between two vectors.
///
/// Returns 0.0 if either vector has zero magnitude; the division is never
/// performed with a zero norm. The result is clamped to [-1, 1] so float
/// rounding cannot push a score past the cosine bounds.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

/// Scan every document and return the `top_k` most similar to `query`.
///
/// Results are ordered by descending score; exact ties keep insertion
/// order (the sort is stable), so repeated queries over the same store are
/// deterministic. Documents whose embedding length differs from the query
/// vector are skipped with a warning rather than failing the scan. An
/// empty slice yields an empty result.
pub fn search(documents: &[Document], query: &[f32], top_k: usize) -> Vec<ScoredDocument> {
    let mut scored: Vec<(usize, f32)> = Vec::with_capacity(documents.len());
    for (index, document) in documents.iter().enumerate() {
        if document.embedding.len() != query.len() {
            warn!(
                document.id = document.id,
                got = document.embedding.len(),
                expected = query.len(),
                "skipping document with mis-sized embedding"
            );
            continue;
        }
        scored.push((index, cosine_similarity(&document.embedding, query)));
    }

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(top_k);

    scored
        .into_iter()
        .map(|(index, score)| ScoredDocument { document: documents[index].clone(), score })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(id: i64, title: &str, embedding: Vec<f32>) -> Document {
        Document {
            id,
            title: title.into(),
            url: None,
            author: None,
            published_date: None,
            categories: None,
            content: String::new(),
            embedding,
        }
    }

    #[test]
    fn empty_store_yields_empty_results() {
        let results = search(&[], &[1.0, 0.0], 5);
        assert!(results.is_empty());
    }

    #[test]
    fn results_are_ordered_descending() {
        let documents = vec![
            document(1, "orthogonal", vec![0.0, 1.0]),
            document(2, "aligned", vec![1.0, 0.0]),
            document(3, "diagonal", vec![1.0, 1.0]),
        ];
        let results = search(&documents, &[1.0, 0.0], 3);
        let titles: Vec<&str> = results.iter().map(|r| r.document.title.as_str()).collect();
        assert_eq!(titles, ["aligned", "diagonal", "orthogonal"]);
        for window in results.windows(2) {
            assert!(window[0].score >= window[1].score);
        }
    }

    #[test]
    fn zero_vector_scores_zero_without_panicking() {
        let documents = vec![document(1, "zero", vec![0.0, 0.0])];
        let results = search(&documents, &[1.0, 0.0], 1);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 0.0);

        // Zero-norm query side as well.
        let results = search(&documents, &[0.0, 0.0], 1);
        assert_eq!(results[0].score, 0.0);
    }

    #[test]
    fn exact_ties_keep_insertion_order() {
        let documents = vec![
            document(10, "first", vec![1.0, 0.0]),
            document(20, "second", vec![2.0, 0.0]),
            document(30, "third", vec![0.5, 0.0]),
        ];
        // All three are colinear with the query: identical score of 1.0.
        let results = search(&documents, &[3.0, 0.0], 3);
        let ids: Vec<i64> = results.iter().map(|r| r.document.id).collect();
        assert_eq!(ids, [10, 20, 30]);
    }

    #[test]
    fn mis_sized_embeddings_are_skipped() {
        let documents = vec![
            document(1, "short", vec![1.0]),
            document(2, "fits", vec![1.0, 0.0]),
            document(3, "empty", vec![]),
        ];
        let results = search(&documents, &[1.0, 0.0], 10);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].document.id, 2);
    }

    #[test]
    fn truncates_to_top_k() {
        let documents: Vec<Document> = (0..8)
            .map(|i| document(i, &format!("doc{i}"), vec![1.0, i as f32 / 10.0]))
            .collect();
        let results = search(&documents, &[1.0, 1.0], 3);
        assert_eq!(results.len(), 3);
    }
}
