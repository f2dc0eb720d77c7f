use crate::data::UsageCounters;
use crate::types::{DimensionName, ValueId};

/// Spread of per-value usage counts within one dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct DimensionBalance {
    /// Dimension the statistics describe.
    pub dimension: DimensionName,
    /// Number of values in the dimension.
    pub values: usize,
    /// Sum of all counts (one per accepted combination).
    pub total: usize,
    /// Smallest per-value count.
    pub min: usize,
    /// Largest per-value count.
    pub max: usize,
    /// Mean per-value count.
    pub mean: f64,
    /// Population standard deviation of the counts.
    pub std_dev: f64,
    /// `std_dev / mean` (0.0 when the mean is 0).
    pub coefficient_of_variation: f64,
    /// Most used value, ties broken by value order.
    pub most_used: Option<ValueId>,
}

/// Compute balance statistics for one dimension's counters.
pub fn dimension_balance(usage: &UsageCounters, dimension: &str) -> Option<DimensionBalance> {
    let counts = usage.dimension(dimension)?;
    if counts.is_empty() {
        return None;
    }
    let values = counts.len();
    let total: usize = counts.values().sum();
    let min = counts.values().copied().min().unwrap_or(0);
    let max = counts.values().copied().max().unwrap_or(0);
    let mean = total as f64 / values as f64;
    let variance = counts
        .values()
        .map(|&count| {
            let delta = count as f64 - mean;
            delta * delta
        })
        .sum::<f64>()
        / values as f64;
    let std_dev = variance.sqrt();
    let coefficient_of_variation = if mean == 0.0 { 0.0 } else { std_dev / mean };
    let most_used = counts
        .iter()
        .fold(None::<(&ValueId, usize)>, |best, (value, &count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((value, count)),
        })
        .map(|(value, _)| value.clone());
    Some(DimensionBalance {
        dimension: dimension.to_string(),
        values,
        total,
        min,
        max,
        mean,
        std_dev,
        coefficient_of_variation,
        most_used,
    })
}

/// Balance statistics for every dimension, least balanced first.
pub fn value_balance(usage: &UsageCounters) -> Vec<DimensionBalance> {
    let mut balances: Vec<DimensionBalance> = usage
        .iter()
        .filter_map(|(dimension, _)| dimension_balance(usage, dimension))
        .collect();
    balances.sort_by(|a, b| {
        b.coefficient_of_variation
            .total_cmp(&a.coefficient_of_variation)
            .then_with(|| a.dimension.cmp(&b.dimension))
    });
    balances
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Combination;

    fn usage_from(rows: &[(&str, &str)]) -> UsageCounters {
        let mut usage = UsageCounters::zeroed([
            ("tone", vec!["calm", "edgy"]),
            ("mode", vec!["light", "dark", "both"]),
        ]);
        for (tone, mode) in rows {
            usage.record(&Combination::from_pairs([("tone", *tone), ("mode", *mode)]));
        }
        usage
    }

    #[test]
    fn balance_reports_even_usage() {
        let usage = usage_from(&[("calm", "light"), ("edgy", "dark")]);
        let tone = dimension_balance(&usage, "tone").expect("tone");
        assert_eq!(tone.total, 2);
        assert_eq!(tone.min, 1);
        assert_eq!(tone.max, 1);
        assert!((tone.mean - 1.0).abs() < 1e-9);
        assert!(tone.std_dev.abs() < 1e-9);
        assert_eq!(tone.most_used.as_deref(), Some("calm"));
    }

    #[test]
    fn balance_reports_skew_and_orders_worst_first() {
        let usage = usage_from(&[("calm", "light"), ("calm", "light"), ("calm", "dark")]);
        let mode = dimension_balance(&usage, "mode").expect("mode");
        assert_eq!(mode.min, 0);
        assert_eq!(mode.max, 2);
        assert_eq!(mode.most_used.as_deref(), Some("light"));

        let all = value_balance(&usage);
        assert_eq!(all.len(), 2);
        assert!(all[0].coefficient_of_variation >= all[1].coefficient_of_variation);
        assert_eq!(all[0].dimension, "tone");
    }

    #[test]
    fn unknown_dimension_has_no_balance() {
        let usage = usage_from(&[]);
        assert!(dimension_balance(&usage, "missing").is_none());
        let tone = dimension_balance(&usage, "tone").expect("tone");
        assert_eq!(tone.coefficient_of_variation, 0.0);
    }
}
