//! Cosine-similarity retrieval ranking.
//!
//! The query is embedded once and scored against every candidate vector.
//! Ties on equal scores are broken by ascending chunk id so ranking is
//! deterministic regardless of candidate input order.

use crate::embed::{cosine_similarity, embed};

/// Ranks candidates by cosine similarity to `query_text`, most similar
/// first, returning at most `top_k` `(id, score)` pairs.
pub fn rank_with_scores(
    query_text: &str,
    candidates: &[(i64, Vec<f32>)],
    top_k: usize,
) -> Vec<(i64, f64)> {
    if candidates.is_empty() || top_k == 0 {
        return Vec::new();
    }

    let query_vector = embed(query_text);
    let mut scored: Vec<(i64, f64)> = candidates
        .iter()
        .map(|(id, vector)| (*id, cosine_similarity(&query_vector, vector)))
        .collect();

    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    scored.truncate(top_k);
    scored
}

/// Ranks candidates by similarity to `query_text` and returns at most
/// `top_k` ids, most similar first.
pub fn rank_by_similarity(
    query_text: &str,
    candidates: &[(i64, Vec<f32>)],
    top_k: usize,
) -> Vec<i64> {
    rank_with_scores(query_text, candidates, top_k)
        .into_iter()
        .map(|(id, _)| id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::{embed, EMBEDDING_DIM};

    #[test]
    fn empty_candidates_return_empty() {
        assert!(rank_by_similarity("anything", &[], 5).is_empty());
    }

    #[test]
    fn top_k_zero_returns_empty() {
        let candidates = vec![(1, embed("alpha")), (2, embed("beta"))];
        assert!(rank_by_similarity("alpha", &candidates, 0).is_empty());
    }

    #[test]
    fn returns_at_most_min_of_top_k_and_candidate_count() {
        let candidates = vec![(1, embed("alpha")), (2, embed("beta"))];
        assert_eq!(rank_by_similarity("alpha", &candidates, 10).len(), 2);
        assert_eq!(rank_by_similarity("alpha", &candidates, 1).len(), 1);
    }

    #[test]
    fn most_similar_candidate_ranks_first() {
        let candidates = vec![
            (1, embed("quarterly tax deadlines for landlords")),
            (2, embed("our spring discount campaign for new users")),
        ];
        let ranked = rank_by_similarity("spring discount campaign", &candidates, 2);
        assert_eq!(ranked[0], 2);
    }

    #[test]
    fn ranking_is_invariant_to_candidate_order() {
        let a = (1, embed("tax deadlines"));
        let b = (2, embed("discount campaign"));
        let c = (3, embed("customer reviews"));
        let forward = rank_by_similarity("discount", &[a.clone(), b.clone(), c.clone()], 3);
        let reversed = rank_by_similarity("discount", &[c, b, a], 3);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn equal_scores_tie_break_by_ascending_id() {
        // Zero vectors all score 0.0 against any query.
        let zero = vec![0.0f32; EMBEDDING_DIM];
        let candidates = vec![(9, zero.clone()), (3, zero.clone()), (7, zero)];
        assert_eq!(rank_by_similarity("query", &candidates, 3), vec![3, 7, 9]);
    }
}
