//! Deterministic hashed bag-of-words embedder.
//!
//! Tokens are hashed into a fixed number of buckets (collisions are accepted
//! and intentional) and the resulting count vector is L2-normalized. The
//! bucket hash is derived from the token's MD5 digest, so the same text maps
//! to the same vector across process restarts.

use regex::Regex;
use std::sync::OnceLock;

/// Fixed embedding dimensionality.
pub const EMBEDDING_DIM: usize = 256;

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b\w+\b").expect("valid token pattern"))
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    token_pattern()
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
}

/// Stable bucket assignment for a token. The first four digest bytes are
/// read as a little-endian u32 and reduced modulo the dimensionality.
fn bucket(token: &str) -> usize {
    let digest = md5::compute(token.as_bytes());
    let hash = u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]]);
    hash as usize % EMBEDDING_DIM
}

/// Embeds `text` into a fixed-length, L2-normalized vector.
///
/// Text without any word tokens maps to the zero vector (no division by
/// zero on normalization).
pub fn embed(text: &str) -> Vec<f32> {
    let mut vec = vec![0.0f32; EMBEDDING_DIM];
    for token in tokenize(text) {
        vec[bucket(&token)] += 1.0;
    }

    let norm = vec.iter().map(|v| (*v as f64).powi(2)).sum::<f64>().sqrt();
    if norm > 0.0 {
        for v in &mut vec {
            *v = (*v as f64 / norm) as f32;
        }
    }
    vec
}

/// Cosine similarity between two vectors. Similarity against a zero-norm
/// vector is defined as 0.0, never an error.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| *x as f64 * *y as f64).sum();
    let norm_a: f64 = a.iter().map(|v| (*v as f64).powi(2)).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|v| (*v as f64).powi(2)).sum::<f64>().sqrt();
    let denom = norm_a * norm_b;
    if denom == 0.0 {
        return 0.0;
    }
    dot / denom
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_the_zero_vector() {
        let vec = embed("");
        assert_eq!(vec.len(), EMBEDDING_DIM);
        assert!(vec.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn punctuation_only_text_is_the_zero_vector() {
        assert!(embed("... !! ??").iter().all(|v| *v == 0.0));
    }

    #[test]
    fn non_empty_text_has_unit_norm() {
        let vec = embed("The quick brown fox jumps over the lazy dog");
        let norm: f64 = vec.iter().map(|v| (*v as f64).powi(2)).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6, "norm was {norm}");
    }

    #[test]
    fn embedding_is_deterministic() {
        let a = embed("Consistent branding builds trust");
        let b = embed("Consistent branding builds trust");
        assert_eq!(a, b);
    }

    #[test]
    fn tokenization_is_case_insensitive() {
        assert_eq!(embed("Brand Voice"), embed("brand voice"));
    }

    #[test]
    fn cosine_of_a_vector_with_itself_is_one() {
        let vec = embed("new spring campaign for accountants");
        let sim = cosine_similarity(&vec, &vec);
        assert!((sim - 1.0).abs() < 1e-9, "similarity was {sim}");
    }

    #[test]
    fn cosine_against_zero_vector_is_zero() {
        let vec = embed("something");
        let zero = vec![0.0f32; EMBEDDING_DIM];
        assert_eq!(cosine_similarity(&vec, &zero), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
    }
}
