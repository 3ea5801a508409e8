//! Inequality Measures

/// Gini coefficient of `values`
///
/// Sorted ascending with 1-based rank i:
///
/// ```text
/// G = Σ (2i − n − 1)·x_i / (n · Σ x_i)
/// ```
///
/// Returns 0 for an empty slice, an all-zero slice, or a zero sum (payoffs
/// may be negative, so the plain formula would divide by zero).
pub fn gini(values: &[f64]) -> f64 {
    let abs_total: f64 = values.iter().map(|x| x.abs()).sum();
    if values.is_empty() || abs_total == 0.0 {
        return 0.0;
    }

    let total: f64 = values.iter().sum();
    if total == 0.0 {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len() as f64;
    let weighted: f64 = sorted
        .iter()
        .enumerate()
        .map(|(i, x)| (2.0 * (i + 1) as f64 - n - 1.0) * x)
        .sum();

    weighted / (n * total)
}
