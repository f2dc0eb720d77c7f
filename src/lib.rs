#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Command-line runners shared by the `design_vibes` binary.
pub mod apps;
/// Sampler and manifest configuration types.
pub mod config;
/// Centralized constants used across sampler, manifest, and status reporting.
pub mod constants;
/// Combination and usage-counter types.
pub mod data;
/// Content fingerprints of combinations.
pub mod hash;
/// Capacity and utilization helpers.
pub mod heuristics;
/// Manifest building, persistence, and batch folder layout.
pub mod manifest;
/// Usage balance statistics.
pub mod metrics;
/// Rule-based design names and taglines.
pub mod naming;
/// The weighted, deduplicated, diversity-constrained sampler.
pub mod sampler;
/// Batch progress scanning.
pub mod status;
/// Dimension registry and the built-in design taxonomy.
pub mod taxonomy;
/// Shared type aliases.
pub mod types;

mod errors;

pub use config::{ManifestConfig, SamplerConfig};
pub use data::{Combination, UsageCounters};
pub use errors::ManifestError;
pub use hash::Fingerprint;
pub use manifest::{DesignEntry, GeneratedBatch, Manifest, create_output_folder, generate_batch};
pub use metrics::{DimensionBalance, value_balance};
pub use naming::{DesignName, Namer, RuleBasedNamer};
pub use sampler::{CombinationSampler, SampleReport};
pub use status::BatchStatus;
pub use taxonomy::{CoverageMode, Dimension, DimensionValue, Taxonomy};
pub use types::{DesignId, DesignSeed, DimensionName, ValueId};
