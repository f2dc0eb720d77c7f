/// Number of distinct combinations for dimensions with the given value counts.
///
/// Saturates at `u128::MAX`; an empty input yields 0 (no combination can exist).
pub fn combination_capacity<I>(value_counts: I) -> u128
where
    I: IntoIterator<Item = usize>,
{
    let mut capacity: Option<u128> = None;
    for count in value_counts {
        let next = capacity.unwrap_or(1).saturating_mul(count as u128);
        capacity = Some(next);
    }
    capacity.unwrap_or(0)
}

/// Share of the combination space a request would consume (0.0 when capacity is 0).
pub fn space_utilization(requested: usize, capacity: u128) -> f64 {
    if capacity == 0 {
        return 0.0;
    }
    requested as f64 / capacity as f64
}

/// `1234567` -> `1,234,567`.
pub fn format_u128_with_commas(value: u128) -> String {
    let raw = value.to_string();
    let mut grouped_reversed = String::with_capacity(raw.len() + (raw.len() / 3));
    for (idx, ch) in raw.chars().rev().enumerate() {
        if idx > 0 && idx % 3 == 0 {
            grouped_reversed.push(',');
        }
        grouped_reversed.push(ch);
    }
    grouped_reversed.chars().rev().collect()
}

/// Compact rendering for very large capacities (`1.23e45`), comma grouping otherwise.
pub fn format_capacity(value: u128) -> String {
    if value >= 1_000_000_000_000_000 {
        format!("{:.2e}", value as f64)
    } else {
        format_u128_with_commas(value)
    }
}
