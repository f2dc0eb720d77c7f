/// Name of a taxonomy dimension.
/// Examples: `ui_paradigm`, `color_temperature`, `industry`
pub type DimensionName = String;
/// Identifier of one permissible value within a dimension.
/// Examples: `glassmorphic`, `warm`, `fintech`
pub type ValueId = String;
/// Sequential 1-based design identifier assigned by the manifest writer.
/// Examples: `1`, `42`
pub type DesignId = u32;
/// Short content-derived design identifier (fingerprint prefix).
/// Example: `3f9a0c1be27d`
pub type DesignSeed = String;
/// Batch folder name under the outputs directory.
/// Examples: `2026-10-16`, `2026-10-16-spring-1`
pub type BatchName = String;
/// Version tag written into manifests.
/// Example: `1.0.0`
pub type VersionTag = String;
