//! Cosine similarity between fixed-length embedding vectors.

use crate::errors::DomainError;

/// Cosine similarity in `[-1, 1]`. Unequal lengths are a programmer error
/// (embeddings from one model share a dimension) and fail loudly; a zero
/// magnitude on either side means "no meaningful comparison" and yields 0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, DomainError> {
    if a.len() != b.len() {
        return Err(DomainError::DimensionMismatch { left: a.len(), right: b.len() });
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let x = f64::from(*x);
        let y = f64::from(*y);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denominator = norm_a.sqrt() * norm_b.sqrt();
    if denominator == 0.0 {
        return Ok(0.0);
    }

    Ok((dot / denominator).clamp(-1.0, 1.0))
}
