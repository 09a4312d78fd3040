use std::hash::Hash;

use indexmap::IndexMap;
use num::Num;

/// Dot product over the union of keys. Keys missing on either side are zero,
/// so only the intersection contributes.
///
/// d(a, b) = Σ(a_i * b_i)
#[inline]
pub fn dot<K, V, N>(a: &IndexMap<K, V>, b: &IndexMap<K, V>, weight: impl Fn(&V) -> N) -> N
where
    K: Hash + Eq,
    N: Num + Copy,
{
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small.iter().fold(N::zero(), |acc, (key, va)| match large.get(key) {
        Some(vb) => acc + weight(va) * weight(vb),
        None => acc,
    })
}

/// Sum of squares. Take the square root for the magnitude.
#[inline]
pub fn norm_squared<N>(values: impl Iterator<Item = N>) -> N
where
    N: Num + Copy,
{
    values.fold(N::zero(), |acc, v| acc + v * v)
}

/// cos(θ) = a·b / (||a|| * ||b||)
///
/// Zero magnitude on either side yields 0.0, never NaN or infinity.
#[inline]
pub fn cosine(dot: f64, norm_a: f64, norm_b: f64) -> f64 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
