use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::sampler::DEFAULT_VALUE_WEIGHT;
use crate::errors::ManifestError;
use crate::heuristics::combination_capacity;
use crate::types::{DimensionName, ValueId, VersionTag};

mod builtin;

/// Which dimensions a combination must cover.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CoverageMode {
    /// Every dimension in the registry.
    #[default]
    Full,
    /// Only dimensions flagged `core`; the rest are left to the downstream generator.
    CoreOnly,
}

/// One permissible value of a dimension.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DimensionValue {
    /// Value identifier written into combinations.
    pub id: ValueId,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Relative base sampling weight (1.0 when not curated).
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    DEFAULT_VALUE_WEIGHT
}

/// A named dimension with an ordered set of values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    /// Dimension name used as the combination key.
    pub name: DimensionName,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Member of the core subset used by `CoverageMode::CoreOnly`.
    #[serde(default)]
    pub core: bool,
    /// Ordered permissible values.
    pub values: Vec<DimensionValue>,
}

impl Dimension {
    /// Create a dimension without values.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            core: false,
            values: Vec::new(),
        }
    }

    /// Create a dimension from bare value ids with uniform weights.
    pub fn from_ids<I, V>(name: impl Into<String>, ids: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        ids.into_iter()
            .fold(Self::new(name, ""), |dim, id| dim.with_value(id, ""))
    }

    /// Append a value with the default weight.
    pub fn with_value(self, id: impl Into<String>, description: impl Into<String>) -> Self {
        self.with_weighted_value(id, description, DEFAULT_VALUE_WEIGHT)
    }

    /// Append a value with an explicit base weight.
    pub fn with_weighted_value(
        mut self,
        id: impl Into<String>,
        description: impl Into<String>,
        weight: f64,
    ) -> Self {
        self.values.push(DimensionValue {
            id: id.into(),
            description: description.into(),
            weight,
        });
        self
    }

    /// Mark this dimension as part of the core subset.
    pub fn as_core(mut self) -> Self {
        self.core = true;
        self
    }

    /// Ordered values.
    pub fn values(&self) -> &[DimensionValue] {
        &self.values
    }

    /// Ordered value ids.
    pub fn value_ids(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|value| value.id.as_str())
    }

    /// Number of permissible values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the dimension has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Index of `id` within the value list.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.values.iter().position(|value| value.id == id)
    }

    /// Base sampling weight of `id`; unknown ids get the default weight.
    pub fn weight(&self, id: &str) -> f64 {
        self.position(id)
            .map(|idx| self.values[idx].weight)
            .unwrap_or(DEFAULT_VALUE_WEIGHT)
    }

    fn validate(&self) -> Result<(), ManifestError> {
        if self.name.trim().is_empty() {
            return Err(ManifestError::Configuration(
                "dimension names must not be empty".to_string(),
            ));
        }
        if self.values.is_empty() {
            return Err(ManifestError::Configuration(format!(
                "dimension '{}' has no values",
                self.name
            )));
        }
        let mut seen = HashSet::new();
        for value in &self.values {
            if !seen.insert(value.id.as_str()) {
                return Err(ManifestError::Configuration(format!(
                    "dimension '{}' lists value '{}' more than once",
                    self.name, value.id
                )));
            }
            if !value.weight.is_finite() || value.weight <= 0.0 {
                return Err(ManifestError::Configuration(format!(
                    "dimension '{}' value '{}' has invalid weight {}",
                    self.name, value.id, value.weight
                )));
            }
        }
        Ok(())
    }
}

/// Ordered registry of dimensions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Taxonomy {
    version: VersionTag,
    dimensions: Vec<Dimension>,
}

impl Taxonomy {
    /// Build and validate a registry.
    pub fn new(
        version: impl Into<String>,
        dimensions: Vec<Dimension>,
    ) -> Result<Self, ManifestError> {
        let taxonomy = Self {
            version: version.into(),
            dimensions,
        };
        taxonomy.validate()?;
        Ok(taxonomy)
    }

    /// The built-in thirty-dimension registry.
    pub fn builtin() -> Self {
        builtin::builtin_taxonomy()
    }

    /// Parse and validate a registry from JSON text.
    pub fn from_json_str(raw: &str) -> Result<Self, ManifestError> {
        let taxonomy: Taxonomy = serde_json::from_str(raw)?;
        taxonomy.validate()?;
        Ok(taxonomy)
    }

    /// Load and validate a registry from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Reject empty registries, empty dimensions, duplicates, and bad weights.
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.dimensions.is_empty() {
            return Err(ManifestError::Configuration(
                "taxonomy has no dimensions; no valid combinations can exist".to_string(),
            ));
        }
        let mut names = HashSet::new();
        for dimension in &self.dimensions {
            dimension.validate()?;
            if !names.insert(dimension.name.as_str()) {
                return Err(ManifestError::Configuration(format!(
                    "dimension '{}' is defined more than once",
                    dimension.name
                )));
            }
        }
        Ok(())
    }

    /// Registry version tag.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// All dimensions in registry order.
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// Number of dimensions.
    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    /// True when the registry holds no dimensions.
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// Look up a dimension by name.
    pub fn get(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|dim| dim.name == name)
    }

    /// Dimension names in registry order.
    pub fn names(&self) -> Vec<&str> {
        self.dimensions.iter().map(|dim| dim.name.as_str()).collect()
    }

    /// Value ids of a named dimension.
    pub fn values_of(&self, name: &str) -> Result<Vec<&str>, ManifestError> {
        self.get(name)
            .map(|dim| dim.value_ids().collect())
            .ok_or_else(|| ManifestError::Configuration(format!("unknown dimension '{name}'")))
    }

    /// Dimensions a combination must cover under `mode`, in registry order.
    pub fn active(&self, mode: CoverageMode) -> Vec<&Dimension> {
        self.dimensions
            .iter()
            .filter(|dim| match mode {
                CoverageMode::Full => true,
                CoverageMode::CoreOnly => dim.core,
            })
            .collect()
    }

    /// Number of distinct combinations representable under `mode` (saturating).
    pub fn capacity(&self, mode: CoverageMode) -> u128 {
        combination_capacity(self.active(mode).iter().map(|dim| dim.len()))
    }
}
