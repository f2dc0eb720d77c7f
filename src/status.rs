use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::constants::manifest::{DESIGNS_DIR, FAILURES_FILENAME, STAGING_DIR};
use crate::errors::ManifestError;
use crate::manifest::{Manifest, parse_design_file_name};
use crate::types::DesignId;

/// Entry of a batch's `failures.json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureRecord {
    /// Design that failed.
    pub id: DesignId,
    /// Failure message, when the generator recorded one.
    #[serde(default)]
    pub error: Option<String>,
}

/// Progress snapshot of one batch folder.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchStatus {
    /// Batch folder that was scanned.
    pub batch: PathBuf,
    /// Designs listed in the manifest.
    pub total: usize,
    /// Ids with an artifact under `designs/`.
    pub completed: BTreeSet<DesignId>,
    /// Ids with an artifact under `.staging/`.
    pub staging: BTreeSet<DesignId>,
    /// Recorded generation failures, in file order.
    pub failures: Vec<FailureRecord>,
}

impl BatchStatus {
    /// Scan a batch folder produced by the manifest command.
    pub fn scan(batch: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let batch = batch.as_ref();
        if !batch.is_dir() {
            return Err(ManifestError::BatchNotFound(batch.to_path_buf()));
        }
        let manifest_path = Manifest::path_in(batch);
        if !manifest_path.is_file() {
            return Err(ManifestError::ManifestMissing(batch.to_path_buf()));
        }
        let manifest = Manifest::load(&manifest_path)?;

        let completed = scan_design_ids(batch.join(DESIGNS_DIR));
        let staging = scan_design_ids(batch.join(STAGING_DIR));
        let failures = load_failures(batch.join(FAILURES_FILENAME))?;
        debug!(
            "[design_vibes:status] {}: {} completed, {} staging, {} failed",
            batch.display(),
            completed.len(),
            staging.len(),
            failures.len()
        );

        Ok(Self {
            batch: batch.to_path_buf(),
            total: manifest.total_designs,
            completed,
            staging,
            failures,
        })
    }

    /// Number of recorded failures.
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Designs not yet completed, staged or failed (never below zero).
    pub fn pending(&self) -> usize {
        self.total
            .saturating_sub(self.completed.len())
            .saturating_sub(self.staging.len())
            .saturating_sub(self.failed())
    }

    /// First `limit` ids in `1..=total` that have no artifact and no failure record.
    pub fn next_pending(&self, limit: usize) -> Vec<DesignId> {
        let failed: BTreeSet<DesignId> = self.failures.iter().map(|f| f.id).collect();
        (1..=self.total)
            .filter_map(|id| DesignId::try_from(id).ok())
            .filter(|id| {
                !self.completed.contains(id) && !self.staging.contains(id) && !failed.contains(id)
            })
            .take(limit)
            .collect()
    }

    /// True when every id in `1..=total` has a completed artifact.
    pub fn is_complete(&self) -> bool {
        self.total > 0
            && (1..=self.total).all(|id| {
                DesignId::try_from(id).is_ok_and(|id| self.completed.contains(&id))
            })
    }
}

/// Design ids of `design-<id>.html` files directly inside `dir` (empty when `dir` is missing).
pub fn scan_design_ids(dir: impl AsRef<Path>) -> BTreeSet<DesignId> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return BTreeSet::new();
    }
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.file_name().to_str().and_then(parse_design_file_name))
        .collect()
}

fn load_failures(path: PathBuf) -> Result<Vec<FailureRecord>, ManifestError> {
    if !path.is_file() {
        return Ok(Vec::new());
    }
    let raw = fs::read_to_string(&path)?;
    match serde_json::from_str(&raw) {
        Ok(failures) => Ok(failures),
        Err(err) => {
            warn!(
                "[design_vibes:status] ignoring unreadable {}: {}",
                path.display(),
                err
            );
            Ok(Vec::new())
        }
    }
}

/// Fixed-width text bar, e.g. `[#####.....]`.
pub fn progress_bar(count: usize, total: usize, width: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        (count.min(total) * width) / total
    };
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}
