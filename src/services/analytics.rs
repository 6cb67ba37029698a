//! Aggregation engine: derived summary numbers the store does not hold.
//!
//! Everything here is a pure function over a snapshot of bins (or bare
//! percentages), so the façade and the seeder share one implementation.

use std::collections::BTreeMap;

use crate::models::{Bin, CategoryDistribution};

/// Default alert threshold for critical-bin selection.
pub const DEFAULT_CRITICAL_THRESHOLD: i32 = 75;

/// Maximum number of bins returned by [`critical_bins`].
pub const CRITICAL_BIN_LIMIT: usize = 5;

/// Fallback category label for bins without one.
pub const UNCATEGORIZED_LABEL: &str = "Other";

/// Bins at or above `threshold`, descending by utilization, truncated to the
/// top five. The sort is stable, so ties keep store iteration order.
pub fn critical_bins(bins: &[Bin], threshold: i32) -> Vec<Bin> {
    let mut critical: Vec<Bin> = bins
        .iter()
        .filter(|bin| bin.utilization_percent >= threshold)
        .cloned()
        .collect();
    critical.sort_by(|a, b| b.utilization_percent.cmp(&a.utilization_percent));
    critical.truncate(CRITICAL_BIN_LIMIT);
    critical
}

/// Share of bins per category, rounded half-up, descending by percentage.
///
/// Bins without a category are folded into `"Other"`. An empty bin set
/// returns an empty list rather than dividing by zero. Because each share is
/// rounded independently, the returned percentages need not sum to 100.
/// Equal percentages come out in alphabetical category order.
pub fn category_distribution(bins: &[Bin]) -> Vec<CategoryDistribution> {
    if bins.is_empty() {
        return Vec::new();
    }

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for bin in bins {
        let category = bin.category.as_deref().unwrap_or(UNCATEGORIZED_LABEL);
        *counts.entry(category).or_insert(0) += 1;
    }

    let total = bins.len();
    let mut distribution: Vec<CategoryDistribution> = counts
        .into_iter()
        .map(|(category, count)| CategoryDistribution {
            category: category.to_string(),
            percentage: percent_of(count, total),
        })
        .collect();
    distribution.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    distribution
}

/// Round-half-up mean of a set of percentages; `None` when empty so callers
/// must handle the degenerate case explicitly instead of inheriting a zero.
pub fn mean_utilization(percents: &[i32]) -> Option<i32> {
    if percents.is_empty() {
        return None;
    }
    let sum: i64 = percents.iter().map(|p| *p as i64).sum();
    Some((sum as f64 / percents.len() as f64).round() as i32)
}

fn percent_of(count: usize, total: usize) -> i32 {
    // f64::round is half-away-from-zero; operands are non-negative here, so
    // this matches round-half-up.
    ((count as f64 / total as f64) * 100.0).round() as i32
}
