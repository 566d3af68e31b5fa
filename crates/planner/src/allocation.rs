//! Hour allocator: split the total budget in proportion to weight.

/// `hours[i] = weights[i] / sum(weights) * total_hours`.
///
/// An empty or all-zero weight list allocates nothing.
pub fn allocate_hours(weights: &[u32], total_hours: f64) -> Vec<f64> {
    let total_weight: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    if total_weight == 0 {
        return vec![0.0; weights.len()];
    }
    weights
        .iter()
        .map(|&w| (f64::from(w) / total_weight as f64) * total_hours)
        .collect()
}
