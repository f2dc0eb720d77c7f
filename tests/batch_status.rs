use std::fs;
use std::path::Path;

use chrono::Local;
use tempfile::tempdir;

use design_vibes::config::{ManifestConfig, SamplerConfig};
use design_vibes::constants::manifest::{DESIGNS_DIR, FAILURES_FILENAME, STAGING_DIR};
use design_vibes::manifest::{design_file_name, generate_batch};
use design_vibes::naming::RuleBasedNamer;
use design_vibes::status::BatchStatus;
use design_vibes::taxonomy::Taxonomy;

fn new_batch(outputs: &Path, count: usize) -> std::path::PathBuf {
    let config = ManifestConfig {
        count,
        name: Some("status".to_string()),
        outputs_dir: outputs.to_path_buf(),
        sampler: SamplerConfig {
            seed: 4,
            ..SamplerConfig::default()
        },
    };
    generate_batch(&config, &Taxonomy::builtin(), &RuleBasedNamer, Local::now())
        .unwrap()
        .folder
}

#[test]
fn fresh_batch_is_entirely_pending() {
    let dir = tempdir().unwrap();
    let batch = new_batch(dir.path(), 6);
    let status = BatchStatus::scan(&batch).unwrap();
    assert_eq!(status.total, 6);
    assert!(status.completed.is_empty());
    assert_eq!(status.pending(), 6);
    assert_eq!(status.next_pending(5), vec![1, 2, 3, 4, 5]);
    assert!(!status.is_complete());
}

#[test]
fn status_counts_completed_staging_and_failed_designs() {
    let dir = tempdir().unwrap();
    let batch = new_batch(dir.path(), 10);
    for id in [1, 2] {
        fs::write(batch.join(DESIGNS_DIR).join(design_file_name(id)), "<html/>").unwrap();
    }
    fs::create_dir_all(batch.join(STAGING_DIR)).unwrap();
    fs::write(batch.join(STAGING_DIR).join(design_file_name(3)), "<html/>").unwrap();
    fs::write(
        batch.join(FAILURES_FILENAME),
        r#"[{"id": 4, "error": "timeout"}, {"id": 5}]"#,
    )
    .unwrap();

    let status = BatchStatus::scan(&batch).unwrap();
    assert_eq!(status.completed.len(), 2);
    assert_eq!(status.staging.len(), 1);
    assert_eq!(status.failed(), 2);
    assert_eq!(status.pending(), 5);
    assert_eq!(status.next_pending(5), vec![6, 7, 8, 9, 10]);
    assert_eq!(status.failures[0].error.as_deref(), Some("timeout"));
    assert_eq!(status.failures[1].error, None);
}

#[test]
fn unreadable_failure_log_is_ignored() {
    let dir = tempdir().unwrap();
    let batch = new_batch(dir.path(), 3);
    fs::write(batch.join(FAILURES_FILENAME), "not json").unwrap();
    let status = BatchStatus::scan(&batch).unwrap();
    assert_eq!(status.failed(), 0);
    assert_eq!(status.pending(), 3);
}
