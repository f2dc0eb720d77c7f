use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::hash::Fingerprint;
use crate::types::{DimensionName, ValueId};

/// One assignment of a value to each active dimension, in registry order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Combination(IndexMap<DimensionName, ValueId>);

impl Combination {
    /// Build a combination from `(dimension, value)` pairs, keeping their order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Value chosen for `dimension`.
    pub fn get(&self, dimension: &str) -> Option<&str> {
        self.0.get(dimension).map(String::as_str)
    }

    /// `(dimension, value)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Dimension names covered by this combination.
    pub fn dimensions(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of dimensions covered.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no dimension is assigned.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Order-independent content hash used as the dedup key.
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of_pairs(self.iter())
    }

    /// Number of dimensions of `self` whose value differs in `other` (missing counts as different).
    pub fn distance(&self, other: &Combination) -> usize {
        self.0
            .iter()
            .filter(|(key, value)| other.0.get(key.as_str()) != Some(value))
            .count()
    }
}

/// Per-(dimension, value) usage counts of accepted combinations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UsageCounters(IndexMap<DimensionName, IndexMap<ValueId, usize>>);

impl UsageCounters {
    /// Zero counters for every value of every listed dimension.
    pub fn zeroed<'a, D, V>(dimensions: D) -> Self
    where
        D: IntoIterator<Item = (&'a str, V)>,
        V: IntoIterator<Item = &'a str>,
    {
        Self(
            dimensions
                .into_iter()
                .map(|(name, values)| {
                    (
                        name.to_string(),
                        values.into_iter().map(|v| (v.to_string(), 0)).collect(),
                    )
                })
                .collect(),
        )
    }

    /// Count for one value (0 when unknown).
    pub fn count(&self, dimension: &str, value: &str) -> usize {
        self.0
            .get(dimension)
            .and_then(|values| values.get(value))
            .copied()
            .unwrap_or(0)
    }

    /// Counts for one dimension in value order.
    pub fn dimension(&self, dimension: &str) -> Option<&IndexMap<ValueId, usize>> {
        self.0.get(dimension)
    }

    /// Iterate dimensions with their per-value counts.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexMap<ValueId, usize>)> {
        self.0.iter().map(|(name, counts)| (name.as_str(), counts))
    }

    /// Increment the counter of every value used by `combination`.
    pub fn record(&mut self, combination: &Combination) {
        for (dimension, value) in combination.iter() {
            *self
                .0
                .entry(dimension.to_string())
                .or_default()
                .entry(value.to_string())
                .or_insert(0) += 1;
        }
    }

    pub(crate) fn increment_at(&mut self, dimension_idx: usize, value_idx: usize) {
        if let Some((_, count)) = self
            .0
            .get_index_mut(dimension_idx)
            .and_then(|(_, values)| values.get_index_mut(value_idx))
        {
            *count += 1;
        }
    }

    pub(crate) fn count_at(&self, dimension_idx: usize, value_idx: usize) -> usize {
        self.0
            .get_index(dimension_idx)
            .and_then(|(_, values)| values.get_index(value_idx))
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}
