//! Cosine similarity over embedding vectors.

use crate::domain::errors::{RetrievalError, RetrievalResult};

/// Cosine similarity between two vectors, in `[-1, 1]`.
///
/// Returns `0.0` when either vector has zero magnitude, which guards the
/// division without turning a degenerate embedding into an error. Vectors of
/// differing length indicate an embedding model mismatch and are a hard
/// [`RetrievalError::DimensionMismatch`].
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> RetrievalResult<f32> {
    if a.is_empty() || b.is_empty() {
        return Err(RetrievalError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    if a.len() != b.len() {
        return Err(RetrievalError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let mag_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let mag_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if mag_a == 0.0 || mag_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot / (mag_a * mag_b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_have_similarity_one() {
        let v = vec![0.3, -1.2, 4.5];
        let sim = cosine_similarity(&v, &v).unwrap();
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn orthogonal_vectors_have_similarity_zero() {
        let sim = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
        assert!(sim.abs() < 1e-6);
    }

    #[test]
    fn opposite_vectors_have_similarity_negative_one() {
        let sim = cosine_similarity(&[1.0, 2.0], &[-1.0, -2.0]).unwrap();
        assert!((sim + 1.0).abs() < 1e-6);
    }

    #[test]
    fn similarity_is_symmetric() {
        let a = [0.1, 0.9, -0.3];
        let b = [0.7, 0.2, 0.5];
        let ab = cosine_similarity(&a, &b).unwrap();
        let ba = cosine_similarity(&b, &a).unwrap();
        assert!((ab - ba).abs() < 1e-6);
    }

    #[test]
    fn zero_magnitude_yields_zero_not_error() {
        let sim = cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]).unwrap();
        assert!((sim - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn mismatched_dimensions_raise() {
        let err = cosine_similarity(&[1.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(
            err,
            RetrievalError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        ));
    }

    #[test]
    fn empty_vector_raises() {
        let err = cosine_similarity(&[], &[1.0]).unwrap_err();
        assert!(matches!(err, RetrievalError::DimensionMismatch { .. }));
    }
}
