//! Euclidean distance over `f32` vectors, accumulated in `f64`.

/// Squared Euclidean distance. Only the common prefix is compared when the
/// lengths differ; callers validate dimensions first.
pub fn squared_euclidean_distance(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = f64::from(*x) - f64::from(*y);
            d * d
        })
        .sum()
}

/// Euclidean (L2) distance.
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> f64 {
    squared_euclidean_distance(a, b).sqrt()
}
