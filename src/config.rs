use std::path::PathBuf;

use crate::constants::manifest::{DEFAULT_DESIGN_COUNT, DEFAULT_OUTPUTS_DIR};
use crate::constants::sampler::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_MIN_DISTANCE, DEFAULT_SEED, DEFAULT_STALL_LIMIT,
    DISTANCE_WINDOW,
};
use crate::taxonomy::CoverageMode;

/// Top-level sampler configuration.
#[derive(Clone, Debug)]
pub struct SamplerConfig {
    /// RNG seed that controls deterministic sampling order.
    pub seed: u64,
    /// Minimum number of differing dimensions against recent combinations (0 disables).
    pub min_distance: usize,
    /// Consecutive rejections tolerated per slot before the relaxed fallback runs.
    pub max_attempts: usize,
    /// How many of the most recent accepted combinations the distance check looks at.
    pub distance_window: usize,
    /// Relaxed draws tolerated for one slot before sampling fails with `SearchStalled`.
    pub stall_limit: usize,
    /// Which dimensions each combination covers.
    pub coverage: CoverageMode,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            min_distance: DEFAULT_MIN_DISTANCE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            distance_window: DISTANCE_WINDOW,
            stall_limit: DEFAULT_STALL_LIMIT,
            coverage: CoverageMode::Full,
        }
    }
}

/// Manifest generation settings.
#[derive(Clone, Debug)]
pub struct ManifestConfig {
    /// Number of designs to sample.
    pub count: usize,
    /// Optional suffix appended to the dated batch folder.
    pub name: Option<String>,
    /// Root directory that holds batch folders.
    pub outputs_dir: PathBuf,
    /// Sampler settings.
    pub sampler: SamplerConfig,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_DESIGN_COUNT,
            name: None,
            outputs_dir: PathBuf::from(DEFAULT_OUTPUTS_DIR),
            sampler: SamplerConfig::default(),
        }
    }
}
