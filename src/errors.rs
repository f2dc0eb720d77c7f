use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for taxonomy configuration, sampling, and manifest persistence failures.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Invalid taxonomy, sampler settings, or request.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// More combinations were requested than the active dimensions can form.
    #[error(
        "requested {requested} combinations but the active dimensions only allow {capacity} distinct combinations"
    )]
    CombinationSpaceExhausted {
        /// Requested count.
        requested: usize,
        /// Distinct combinations available.
        capacity: u128,
    },
    /// Relaxed draws kept hitting already accepted combinations.
    #[error(
        "sampling stalled after {accepted} of {requested} combinations ({stalls} relaxed draws found no unseen combination)"
    )]
    SearchStalled {
        /// Combinations accepted before stalling.
        accepted: usize,
        /// Requested count.
        requested: usize,
        /// Relaxed draws spent on the stalled slot.
        stalls: usize,
    },
    /// Status target does not exist.
    #[error("batch folder not found: {}", .0.display())]
    BatchNotFound(PathBuf),
    /// Batch folder has no `manifest.json`.
    #[error("no manifest found in {}", .0.display())]
    ManifestMissing(PathBuf),
    /// Filesystem failure.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// Malformed JSON in a taxonomy, manifest, or failure log.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
