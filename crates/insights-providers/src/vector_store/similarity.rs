//! Cosine similarity helpers
//!
//! Sums are accumulated in `f64` so that very large or very small `f32`
//! components neither overflow nor underflow.

/// Compute the L2 norm of a vector
pub fn compute_norm(v: &[f32]) -> f64 {
    v.iter()
        .map(|x| f64::from(*x) * f64::from(*x))
        .sum::<f64>()
        .sqrt()
}

/// Cosine similarity in `[-1, 1]`; a zero-magnitude input yields 0
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    cosine_similarity_with_norm(a, b, compute_norm(a))
}

/// Cosine similarity with precomputed norm for `a`
#[allow(clippy::cast_possible_truncation)]
pub fn cosine_similarity_with_norm(a: &[f32], b: &[f32], norm_a: f64) -> f32 {
    let dot_product: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| f64::from(*x) * f64::from(*y))
        .sum();
    let norm_b = compute_norm(b);

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        (dot_product / (norm_a * norm_b)).clamp(-1.0, 1.0) as f32
    }
}
