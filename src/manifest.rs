use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::ManifestConfig;
use crate::constants::manifest::{
    BATCH_DATE_FORMAT, DESIGN_FILE_EXTENSION, DESIGN_FILE_PREFIX, DESIGNS_DIR, MANIFEST_FILENAME,
    MANIFEST_VERSION,
};
use crate::data::Combination;
use crate::errors::ManifestError;
use crate::hash::Fingerprint;
use crate::naming::Namer;
use crate::sampler::{CombinationSampler, SampleReport};
use crate::taxonomy::{CoverageMode, Taxonomy};
use crate::types::{BatchName, DesignId, DesignSeed, VersionTag};

/// Per-design bookkeeping written next to the dimensions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesignMeta {
    /// Full fingerprint of the design's dimensions.
    pub dimension_hash: Fingerprint,
    /// Set when the fingerprint was checked unique within the manifest.
    pub uniqueness_verified: bool,
}

/// One manifest record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesignEntry {
    /// 1-based position in the manifest.
    pub id: DesignId,
    /// Fingerprint prefix handed to the content generator.
    pub seed: DesignSeed,
    /// Display name.
    pub name: String,
    /// One-line pitch.
    pub tagline: String,
    /// Sampled dimension values in registry order.
    pub dimensions: Combination,
    /// Fingerprint bookkeeping.
    pub meta: DesignMeta,
}

/// Manifest document persisted as `manifest.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Manifest format version.
    pub version: VersionTag,
    /// Local time the manifest was built.
    pub generated_at: DateTime<Local>,
    /// Number of entries in `designs`.
    pub total_designs: usize,
    /// Version of the taxonomy the designs were sampled from.
    pub dimensions_version: VersionTag,
    /// Set when only the core dimensions were sampled.
    #[serde(default)]
    pub core_only: bool,
    /// Design records ordered by id.
    pub designs: Vec<DesignEntry>,
}

impl Manifest {
    /// Wrap sampled combinations into numbered, named manifest records.
    ///
    /// Ids are 1-based in the given order. Fails if two combinations share a fingerprint.
    pub fn build(
        combinations: Vec<Combination>,
        namer: &dyn Namer,
        dimensions_version: impl Into<String>,
        core_only: bool,
        generated_at: DateTime<Local>,
    ) -> Result<Self, ManifestError> {
        let names = namer.name_all(&combinations);
        let mut seen = std::collections::HashSet::with_capacity(combinations.len());
        let mut designs = Vec::with_capacity(combinations.len());
        for (idx, (dimensions, named)) in combinations.into_iter().zip(names).enumerate() {
            let fingerprint = dimensions.fingerprint();
            if !seen.insert(fingerprint) {
                return Err(ManifestError::Configuration(format!(
                    "design {} duplicates an earlier combination ({})",
                    idx + 1,
                    fingerprint.short()
                )));
            }
            let id = DesignId::try_from(idx + 1).map_err(|_| {
                ManifestError::Configuration(format!("design id {} does not fit in u32", idx + 1))
            })?;
            designs.push(DesignEntry {
                id,
                seed: fingerprint.short(),
                name: named.name,
                tagline: named.tagline,
                dimensions,
                meta: DesignMeta {
                    dimension_hash: fingerprint,
                    uniqueness_verified: true,
                },
            });
        }
        Ok(Self {
            version: MANIFEST_VERSION.to_string(),
            generated_at,
            total_designs: designs.len(),
            dimensions_version: dimensions_version.into(),
            core_only,
            designs,
        })
    }

    /// Path of the manifest inside `batch_dir`.
    pub fn path_in(batch_dir: impl AsRef<Path>) -> PathBuf {
        batch_dir.as_ref().join(MANIFEST_FILENAME)
    }

    /// Write pretty-printed JSON to `batch_dir/manifest.json` and return its path.
    pub fn write(&self, batch_dir: impl AsRef<Path>) -> Result<PathBuf, ManifestError> {
        let path = Self::path_in(batch_dir);
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        info!(
            "[design_vibes:manifest] wrote {} designs to {}",
            self.designs.len(),
            path.display()
        );
        Ok(path)
    }

    /// Load a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Look up a design by id.
    pub fn design(&self, id: DesignId) -> Option<&DesignEntry> {
        self.designs.iter().find(|design| design.id == id)
    }
}

/// Artifact filename for a design id (`design-<id>.html`).
pub fn design_file_name(id: DesignId) -> String {
    format!("{DESIGN_FILE_PREFIX}{id}.{DESIGN_FILE_EXTENSION}")
}

/// Parse a design id back out of an artifact filename.
pub fn parse_design_file_name(file_name: &str) -> Option<DesignId> {
    let stem = file_name.strip_suffix(&format!(".{DESIGN_FILE_EXTENSION}"))?;
    stem.strip_prefix(DESIGN_FILE_PREFIX)?.parse().ok()
}

/// Base folder name for a batch: `<date>` or `<date>-<name>`.
pub fn batch_folder_name(name: Option<&str>, date: NaiveDate) -> BatchName {
    let date_str = date.format(BATCH_DATE_FORMAT).to_string();
    match name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => format!("{date_str}-{name}"),
        None => date_str,
    }
}

/// Create `<outputs_dir>/<date>[-name]` (suffixed `-1`, `-2`, ... when taken) with a `designs/` folder.
pub fn create_output_folder(
    outputs_dir: impl AsRef<Path>,
    name: Option<&str>,
    date: NaiveDate,
) -> Result<PathBuf, ManifestError> {
    let outputs_dir = outputs_dir.as_ref();
    fs::create_dir_all(outputs_dir)?;

    let folder_name = batch_folder_name(name, date);
    let mut candidate = outputs_dir.join(&folder_name);
    let mut counter = 1usize;
    while candidate.exists() {
        candidate = outputs_dir.join(format!("{folder_name}-{counter}"));
        counter += 1;
    }

    fs::create_dir_all(candidate.join(DESIGNS_DIR))?;
    debug!("[design_vibes:manifest] created batch folder {}", candidate.display());
    Ok(candidate)
}

/// Result of [`generate_batch`].
#[derive(Clone, Debug)]
pub struct GeneratedBatch {
    /// Freshly created batch folder.
    pub folder: PathBuf,
    /// Path of the written `manifest.json`.
    pub manifest_path: PathBuf,
    /// Manifest as written.
    pub manifest: Manifest,
    /// Sampling statistics (relaxed slots, usage counters, attempts).
    pub report: SampleReport,
}

/// Sample `config.count` combinations, name them, and write a manifest into a new batch folder.
///
/// Sampling runs before the folder is created so a failed run leaves nothing behind.
pub fn generate_batch(
    config: &ManifestConfig,
    taxonomy: &Taxonomy,
    namer: &dyn Namer,
    now: DateTime<Local>,
) -> Result<GeneratedBatch, ManifestError> {
    let sampler = CombinationSampler::new(taxonomy, config.sampler.clone())?;
    let report = sampler.run(config.count)?;
    let manifest = Manifest::build(
        report.combinations.clone(),
        namer,
        taxonomy.version(),
        config.sampler.coverage == CoverageMode::CoreOnly,
        now,
    )?;
    let folder = create_output_folder(&config.outputs_dir, config.name.as_deref(), now.date_naive())?;
    let manifest_path = manifest.write(&folder)?;
    Ok(GeneratedBatch {
        folder,
        manifest_path,
        manifest,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::{DesignName, RuleBasedNamer};
    use tempfile::tempdir;

    struct FixedNamer;

    impl Namer for FixedNamer {
        fn name(&self, combination: &Combination) -> DesignName {
            DesignName {
                name: format!("Fixed {}", combination.len()),
                tagline: "tagline".to_string(),
            }
        }
    }

    fn combos() -> Vec<Combination> {
        vec![
            Combination::from_pairs([("tone", "calm"), ("mode", "dark")]),
            Combination::from_pairs([("tone", "edgy"), ("mode", "light")]),
            Combination::from_pairs([("tone", "calm"), ("mode", "light")]),
        ]
    }

    #[test]
    fn build_numbers_designs_and_derives_seeds() {
        let manifest =
            Manifest::build(combos(), &FixedNamer, "1.0.0", false, Local::now()).unwrap();
        assert_eq!(manifest.total_designs, 3);
        assert_eq!(manifest.version, MANIFEST_VERSION);
        let ids: Vec<DesignId> = manifest.designs.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        for design in &manifest.designs {
            assert_eq!(design.meta.dimension_hash, design.dimensions.fingerprint());
            assert_eq!(design.seed, design.meta.dimension_hash.short());
            assert!(design.meta.uniqueness_verified);
            assert_eq!(design.name, "Fixed 2");
        }
        assert_eq!(manifest.design(2).map(|d| d.dimensions.get("tone")), Some(Some("edgy")));
        assert!(manifest.design(9).is_none());
    }

    #[test]
    fn build_rejects_duplicate_combinations() {
        let mut list = combos();
        list.push(Combination::from_pairs([("mode", "dark"), ("tone", "calm")]));
        let err = Manifest::build(list, &RuleBasedNamer, "1.0.0", false, Local::now()).unwrap_err();
        assert!(matches!(err, ManifestError::Configuration(_)));
    }

    #[test]
    fn written_manifest_has_expected_shape_and_loads_back() {
        let dir = tempdir().unwrap();
        let manifest =
            Manifest::build(combos(), &RuleBasedNamer, "1.0.0", true, Local::now()).unwrap();
        let path = manifest.write(dir.path()).unwrap();
        assert_eq!(path, dir.path().join(MANIFEST_FILENAME));

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["total_designs"], 3);
        assert_eq!(raw["dimensions_version"], "1.0.0");
        assert_eq!(raw["core_only"], true);
        assert_eq!(raw["designs"][0]["id"], 1);
        assert_eq!(raw["designs"][0]["dimensions"]["tone"], "calm");
        assert_eq!(
            raw["designs"][0]["meta"]["dimension_hash"]
                .as_str()
                .map(str::len),
            Some(64)
        );
        let keys: Vec<&String> = raw["designs"][0]["dimensions"]
            .as_object()
            .unwrap()
            .keys()
            .collect();
        assert_eq!(keys.len(), 2);

        let loaded = Manifest::load(&path).unwrap();
        assert_eq!(loaded.designs, manifest.designs);
    }

    #[test]
    fn output_folders_get_numeric_suffixes_on_collision() {
        let dir = tempdir().unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let first = create_output_folder(dir.path(), Some("spring"), date).unwrap();
        let second = create_output_folder(dir.path(), Some("spring"), date).unwrap();
        let third = create_output_folder(dir.path(), Some("spring"), date).unwrap();
        let bare = create_output_folder(dir.path(), None, date).unwrap();
        assert_eq!(first.file_name().unwrap(), "2026-10-16-spring");
        assert_eq!(second.file_name().unwrap(), "2026-10-16-spring-1");
        assert_eq!(third.file_name().unwrap(), "2026-10-16-spring-2");
        assert_eq!(bare.file_name().unwrap(), "2026-10-16");
        assert_eq!(batch_folder_name(Some("  "), date), "2026-10-16");
        assert!(first.join(DESIGNS_DIR).is_dir());
    }

    #[test]
    fn design_file_names_round_trip() {
        assert_eq!(design_file_name(7), "design-7.html");
        assert_eq!(parse_design_file_name("design-7.html"), Some(7));
        assert_eq!(parse_design_file_name("design-x.html"), None);
        assert_eq!(parse_design_file_name("design-7.css"), None);
        assert_eq!(parse_design_file_name("index.html"), None);
    }
}
