use std::collections::HashSet;
use std::fs;

use chrono::{Local, TimeZone};
use tempfile::tempdir;

use design_vibes::config::{ManifestConfig, SamplerConfig};
use design_vibes::constants::manifest::{DESIGNS_DIR, MANIFEST_FILENAME};
use design_vibes::manifest::{Manifest, generate_batch};
use design_vibes::naming::{Namer, RuleBasedNamer};
use design_vibes::taxonomy::{CoverageMode, Dimension, Taxonomy};
use design_vibes::ManifestError;

fn fixed_now() -> chrono::DateTime<Local> {
    Local.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap()
}

fn config(outputs: &std::path::Path, count: usize, name: Option<&str>) -> ManifestConfig {
    ManifestConfig {
        count,
        name: name.map(str::to_string),
        outputs_dir: outputs.to_path_buf(),
        sampler: SamplerConfig {
            seed: 17,
            ..SamplerConfig::default()
        },
    }
}

#[test]
fn generated_batch_writes_a_numbered_unique_manifest() {
    let dir = tempdir().unwrap();
    let taxonomy = Taxonomy::builtin();
    let batch = generate_batch(
        &config(dir.path(), 12, Some("trial")),
        &taxonomy,
        &RuleBasedNamer,
        fixed_now(),
    )
    .unwrap();

    assert_eq!(batch.folder, dir.path().join("2026-10-16-trial"));
    assert_eq!(batch.manifest_path, batch.folder.join(MANIFEST_FILENAME));
    assert!(batch.folder.join(DESIGNS_DIR).is_dir());

    let manifest = Manifest::load(&batch.manifest_path).unwrap();
    assert_eq!(manifest, batch.manifest);
    assert_eq!(manifest.total_designs, 12);
    assert_eq!(manifest.dimensions_version, taxonomy.version());
    assert!(!manifest.core_only);

    let mut hashes = HashSet::new();
    for (idx, design) in manifest.designs.iter().enumerate() {
        assert_eq!(design.id as usize, idx + 1);
        assert_eq!(design.seed.len(), 12);
        assert!(design.meta.dimension_hash.to_hex().starts_with(&design.seed));
        assert!(hashes.insert(design.meta.dimension_hash));
        assert_eq!(design.dimensions.len(), taxonomy.len());
        let named = RuleBasedNamer.name(&design.dimensions);
        assert_eq!(design.name, named.name);
        assert_eq!(design.tagline, named.tagline);
        assert!(!design.name.is_empty());
    }
    assert_eq!(batch.report.combinations.len(), 12);
}

#[test]
fn repeated_batches_on_one_day_get_suffixed_folders() {
    let dir = tempdir().unwrap();
    let taxonomy = Taxonomy::builtin();
    let first = generate_batch(&config(dir.path(), 3, None), &taxonomy, &RuleBasedNamer, fixed_now())
        .unwrap();
    let second =
        generate_batch(&config(dir.path(), 3, None), &taxonomy, &RuleBasedNamer, fixed_now())
            .unwrap();
    assert_eq!(first.folder.file_name().unwrap(), "2026-10-16");
    assert_eq!(second.folder.file_name().unwrap(), "2026-10-16-1");
    assert_eq!(first.manifest.designs, second.manifest.designs);
}

#[test]
fn core_only_batches_are_flagged() {
    let dir = tempdir().unwrap();
    let mut cfg = config(dir.path(), 5, Some("core"));
    cfg.sampler.coverage = CoverageMode::CoreOnly;
    let batch = generate_batch(&cfg, &Taxonomy::builtin(), &RuleBasedNamer, fixed_now()).unwrap();
    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&batch.manifest_path).unwrap()).unwrap();
    assert_eq!(raw["core_only"], true);
    assert_eq!(raw["version"], "1.0.0");
    assert!(raw["generated_at"].as_str().unwrap().starts_with("2026-10-16T09:30:00"));
}

#[test]
fn failed_sampling_leaves_no_batch_folder() {
    let dir = tempdir().unwrap();
    let outputs = dir.path().join("outputs");
    let taxonomy = Taxonomy::new(
        "tiny",
        vec![
            Dimension::from_ids("a", ["x", "y", "z"]),
            Dimension::from_ids("b", ["p", "q"]),
        ],
    )
    .unwrap();
    let err = generate_batch(&config(&outputs, 7, None), &taxonomy, &RuleBasedNamer, fixed_now())
        .unwrap_err();
    assert!(matches!(
        err,
        ManifestError::CombinationSpaceExhausted { capacity: 6, .. }
    ));
    assert!(!outputs.exists());
}
