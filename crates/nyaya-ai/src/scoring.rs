//! Turning raw logits into section selections.
//!
//! Two modes share a logits vector but interpret it differently:
//!
//! - multi-label: each logit is an independent sigmoid probability and every
//!   label strictly above the threshold is kept, in label order;
//! - ranked: logits are temperature-scaled and softmaxed over the full label
//!   space, then the `k` most probable labels are kept, highest first.

use std::cmp::Ordering;

pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Softmax of `logits / temperature`, shifted by the maximum for stability.
pub fn softmax(logits: &[f32], temperature: f32) -> Vec<f32> {
    if logits.is_empty() {
        return vec![];
    }
    let scaled: Vec<f32> = logits.iter().map(|&l| l / temperature).collect();
    let max = scaled.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scaled.iter().map(|&s| (s - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Indices whose sigmoid probability is strictly greater than `threshold`.
pub fn above_threshold(logits: &[f32], threshold: f32) -> Vec<usize> {
    logits
        .iter()
        .enumerate()
        .filter(|(_, l)| sigmoid(**l) > threshold)
        .map(|(i, _)| i)
        .collect()
}

/// The `k` most probable `(index, probability)` pairs, highest first.
///
/// The sort is stable, so equal probabilities keep ascending index order.
pub fn top_k(probs: &[f32], k: usize) -> Vec<(usize, f32)> {
    let mut ranked: Vec<(usize, f32)> = probs.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.truncate(k);
    ranked
}

/// Probability as a percentage rounded to two decimals.
pub fn to_percent(p: f32) -> f64 {
    (p as f64 * 100.0 * 100.0).round() / 100.0
}
