/// Constants used by the combination sampler.
pub mod sampler {
    /// Number of most recent accepted combinations checked by the distance constraint.
    pub const DISTANCE_WINDOW: usize = 50;
    /// Default minimum number of differing dimensions between nearby combinations.
    pub const DEFAULT_MIN_DISTANCE: usize = 3;
    /// Default consecutive rejections tolerated per slot before relaxing constraints.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;
    /// Default relaxed draws tolerated for a single slot before giving up.
    pub const DEFAULT_STALL_LIMIT: usize = 64;
    /// Default RNG seed used when a config is built without an explicit seed.
    pub const DEFAULT_SEED: u64 = 42;
    /// Base weight applied to values without a curated weight.
    pub const DEFAULT_VALUE_WEIGHT: f64 = 1.0;
}

/// Constants used by the built-in taxonomy.
pub mod taxonomy {
    /// Version tag of the built-in dimension registry.
    pub const BUILTIN_TAXONOMY_VERSION: &str = "1.0.0";
}

/// Constants used by manifest layout and persistence.
pub mod manifest {
    /// Version tag for the manifest document format.
    pub const MANIFEST_VERSION: &str = "1.0.0";
    /// Manifest filename inside a batch folder.
    pub const MANIFEST_FILENAME: &str = "manifest.json";
    /// Default root directory holding batch folders.
    pub const DEFAULT_OUTPUTS_DIR: &str = "outputs";
    /// Folder holding finished design artifacts.
    pub const DESIGNS_DIR: &str = "designs";
    /// Folder holding artifacts that are still being reviewed.
    pub const STAGING_DIR: &str = ".staging";
    /// Failure log written by the content generator.
    pub const FAILURES_FILENAME: &str = "failures.json";
    /// Filename prefix for design artifacts (`design-<id>.html`).
    pub const DESIGN_FILE_PREFIX: &str = "design-";
    /// Filename extension for design artifacts.
    pub const DESIGN_FILE_EXTENSION: &str = "html";
    /// Number of fingerprint hex characters used as the short design seed.
    pub const SEED_HEX_LEN: usize = 12;
    /// Date format used for batch folder names.
    pub const BATCH_DATE_FORMAT: &str = "%Y-%m-%d";
    /// Default number of designs per manifest.
    pub const DEFAULT_DESIGN_COUNT: usize = 20;
    /// Number of designs echoed after writing a manifest.
    pub const PREVIEW_DESIGNS: usize = 3;
}

/// Constants used by batch status reporting.
pub mod status {
    /// Width of the text progress bars.
    pub const PROGRESS_BAR_WIDTH: usize = 30;
    /// Number of pending ids listed as next to generate.
    pub const NEXT_PENDING_LIMIT: usize = 5;
    /// Number of failures listed in the report.
    pub const FAILURE_PREVIEW_LIMIT: usize = 5;
    /// Error text used when a failure entry carries no message.
    pub const UNKNOWN_FAILURE: &str = "Unknown error";
}
