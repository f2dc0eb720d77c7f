use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tracing::{debug, info, warn};

use crate::config::SamplerConfig;
use crate::data::{Combination, UsageCounters};
use crate::errors::ManifestError;
use crate::hash::Fingerprint;
use crate::heuristics::{combination_capacity, format_capacity, space_utilization};
use crate::taxonomy::{Dimension, Taxonomy};

/// Share of the combination space above which a request is logged as crowded.
const CROWDED_UTILIZATION: f64 = 0.5;

/// Outcome of one sampling run.
#[derive(Clone, Debug)]
pub struct SampleReport {
    /// Accepted combinations in acceptance order.
    pub combinations: Vec<Combination>,
    /// Indices (into `combinations`) of slots filled by the relaxed fallback.
    pub relaxed_slots: Vec<usize>,
    /// Final per-value usage counts.
    pub usage: UsageCounters,
    /// Candidate draws made under the distance constraint.
    pub attempts: usize,
    /// Unconstrained draws made by the relaxed fallback.
    pub fallback_draws: usize,
}

impl SampleReport {
    /// True when slot `idx` was accepted through the relaxed fallback.
    pub fn was_relaxed(&self, idx: usize) -> bool {
        self.relaxed_slots.binary_search(&idx).is_ok()
    }
}

/// Weighted, deduplicated, diversity-constrained combination sampler.
///
/// Each value is drawn with weight `base_weight(value) / (usage_count(value) + 1)`,
/// candidates whose fingerprint was already accepted are rejected, and (when
/// `min_distance > 0`) candidates differing in fewer than `min_distance`
/// dimensions from any of the last `distance_window` accepted combinations are
/// rejected. After `max_attempts` consecutive rejections a slot is filled by an
/// unconstrained draw that only has to be unseen.
///
/// The sampler holds no run state; every call owns its counters, seen set, and
/// RNG (seeded from `SamplerConfig::seed`), so runs are reproducible and
/// independent.
#[derive(Clone, Debug)]
pub struct CombinationSampler {
    dimensions: Vec<Dimension>,
    config: SamplerConfig,
}

impl CombinationSampler {
    /// Build a sampler over the dimensions `config.coverage` selects from `taxonomy`.
    pub fn new(taxonomy: &Taxonomy, config: SamplerConfig) -> Result<Self, ManifestError> {
        taxonomy.validate()?;
        let dimensions: Vec<Dimension> = taxonomy
            .active(config.coverage)
            .into_iter()
            .cloned()
            .collect();
        if dimensions.is_empty() {
            return Err(ManifestError::Configuration(format!(
                "no dimensions are active for {:?} coverage",
                config.coverage
            )));
        }
        if config.stall_limit == 0 {
            return Err(ManifestError::Configuration(
                "stall_limit must be greater than zero".to_string(),
            ));
        }
        Ok(Self { dimensions, config })
    }

    /// Active dimensions in registry order.
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// Settings this sampler was built with.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Number of distinct combinations the active dimensions can represent.
    pub fn capacity(&self) -> u128 {
        combination_capacity(self.dimensions.iter().map(Dimension::len))
    }

    /// Sample `count` combinations using the configured distance and attempt limits.
    pub fn run(&self, count: usize) -> Result<SampleReport, ManifestError> {
        self.sample_with_report(count, self.config.min_distance, self.config.max_attempts)
    }

    /// Sample exactly `count` unique combinations.
    pub fn sample(
        &self,
        count: usize,
        min_distance: usize,
        max_attempts: usize,
    ) -> Result<Vec<Combination>, ManifestError> {
        Ok(self
            .sample_with_report(count, min_distance, max_attempts)?
            .combinations)
    }

    /// Sample exactly `count` unique combinations and report how they were found.
    pub fn sample_with_report(
        &self,
        count: usize,
        min_distance: usize,
        max_attempts: usize,
    ) -> Result<SampleReport, ManifestError> {
        if count == 0 {
            return Err(ManifestError::Configuration(
                "count must be greater than zero".to_string(),
            ));
        }
        if max_attempts == 0 {
            return Err(ManifestError::Configuration(
                "max_attempts must be greater than zero".to_string(),
            ));
        }
        let capacity = self.capacity();
        if count as u128 > capacity {
            return Err(ManifestError::CombinationSpaceExhausted {
                requested: count,
                capacity,
            });
        }
        let utilization = space_utilization(count, capacity);
        if utilization > CROWDED_UTILIZATION {
            warn!(
                "[design_vibes:sampler] requesting {} of {} possible combinations ({:.0}%); expect relaxed slots",
                count,
                format_capacity(capacity),
                utilization * 100.0
            );
        }
        info!(
            "[design_vibes:sampler] sampling {} combinations over {} dimensions (seed={}, min_distance={}, max_attempts={})",
            count,
            self.dimensions.len(),
            self.config.seed,
            min_distance,
            max_attempts
        );

        let mut run = SamplingRun::new(&self.dimensions, StdRng::seed_from_u64(self.config.seed));
        let limits = SlotLimits {
            min_distance,
            max_attempts,
            window: self.config.distance_window,
            stall_limit: self.config.stall_limit,
            requested: count,
        };
        while run.accepted.len() < count {
            run.fill_slot(&limits)?;
        }
        let report = run.finish();
        debug!(
            "[design_vibes:sampler] accepted {} combinations ({} relaxed, {} attempts, {} fallback draws)",
            report.combinations.len(),
            report.relaxed_slots.len(),
            report.attempts,
            report.fallback_draws
        );
        Ok(report)
    }
}

struct SlotLimits {
    min_distance: usize,
    max_attempts: usize,
    window: usize,
    stall_limit: usize,
    requested: usize,
}

/// Mutable state of a single sampling call.
struct SamplingRun<'a, R> {
    dimensions: &'a [Dimension],
    rng: R,
    usage: UsageCounters,
    seen: HashSet<Fingerprint>,
    /// Accepted candidates as value indices, aligned with `dimensions`.
    accepted: Vec<Vec<usize>>,
    combinations: Vec<Combination>,
    relaxed_slots: Vec<usize>,
    attempts: usize,
    fallback_draws: usize,
}

impl<'a, R: Rng> SamplingRun<'a, R> {
    fn new(dimensions: &'a [Dimension], rng: R) -> Self {
        let usage = UsageCounters::zeroed(
            dimensions
                .iter()
                .map(|dim| (dim.name.as_str(), dim.value_ids())),
        );
        Self {
            dimensions,
            rng,
            usage,
            seen: HashSet::new(),
            accepted: Vec::new(),
            combinations: Vec::new(),
            relaxed_slots: Vec::new(),
            attempts: 0,
            fallback_draws: 0,
        }
    }

    fn fill_slot(&mut self, limits: &SlotLimits) -> Result<(), ManifestError> {
        let mut stalls = 0usize;
        loop {
            for _ in 0..limits.max_attempts {
                self.attempts += 1;
                let candidate = self.draw();
                let fingerprint = self.fingerprint(&candidate);
                if self.seen.contains(&fingerprint) {
                    continue;
                }
                if limits.min_distance > 0
                    && self.too_close(&candidate, limits.min_distance, limits.window)
                {
                    continue;
                }
                self.accept(candidate, fingerprint, false);
                return Ok(());
            }

            stalls += 1;
            warn!(
                "[design_vibes:sampler] relaxing constraints for slot {} after {} attempts",
                self.accepted.len() + 1,
                limits.max_attempts
            );
            self.fallback_draws += 1;
            let candidate = self.draw();
            let fingerprint = self.fingerprint(&candidate);
            if !self.seen.contains(&fingerprint) {
                self.accept(candidate, fingerprint, true);
                return Ok(());
            }
            if stalls >= limits.stall_limit {
                return Err(ManifestError::SearchStalled {
                    accepted: self.accepted.len(),
                    requested: limits.requested,
                    stalls,
                });
            }
        }
    }

    /// One balance-weighted value per dimension.
    fn draw(&mut self) -> Vec<usize> {
        let dimensions = self.dimensions;
        let mut candidate = Vec::with_capacity(dimensions.len());
        let mut weights = Vec::new();
        for (dim_idx, dimension) in dimensions.iter().enumerate() {
            weights.clear();
            weights.extend(dimension.values().iter().enumerate().map(|(value_idx, value)| {
                value.weight / (self.usage.count_at(dim_idx, value_idx) as f64 + 1.0)
            }));
            candidate.push(weighted_index(&mut self.rng, &weights));
        }
        candidate
    }

    fn too_close(&self, candidate: &[usize], min_distance: usize, window: usize) -> bool {
        self.accepted
            .iter()
            .rev()
            .take(window)
            .any(|existing| index_distance(candidate, existing) < min_distance)
    }

    fn fingerprint(&self, candidate: &[usize]) -> Fingerprint {
        Fingerprint::of_pairs(self.pairs(candidate))
    }

    fn pairs<'b>(
        &'b self,
        candidate: &'b [usize],
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'b {
        let dimensions: &'a [Dimension] = self.dimensions;
        dimensions
            .iter()
            .zip(candidate)
            .map(|(dim, &value_idx)| (dim.name.as_str(), dim.values[value_idx].id.as_str()))
    }

    fn accept(&mut self, candidate: Vec<usize>, fingerprint: Fingerprint, relaxed: bool) {
        self.seen.insert(fingerprint);
        for (dim_idx, &value_idx) in candidate.iter().enumerate() {
            self.usage.increment_at(dim_idx, value_idx);
        }
        if relaxed {
            self.relaxed_slots.push(self.accepted.len());
        }
        let combination = Combination::from_pairs(self.pairs(&candidate));
        self.combinations.push(combination);
        self.accepted.push(candidate);
    }

    fn finish(self) -> SampleReport {
        SampleReport {
            combinations: self.combinations,
            relaxed_slots: self.relaxed_slots,
            usage: self.usage,
            attempts: self.attempts,
            fallback_draws: self.fallback_draws,
        }
    }
}

fn index_distance(left: &[usize], right: &[usize]) -> usize {
    left.iter().zip(right).filter(|(a, b)| a != b).count()
}

/// Cumulative weighted pick; equal weights are uniform. `weights` must be non-empty.
pub(crate) fn weighted_index<R: Rng + ?Sized>(rng: &mut R, weights: &[f64]) -> usize {
    let total: f64 = weights.iter().sum();
    let mut pick = rng.random::<f64>() * total;
    for (idx, weight) in weights.iter().enumerate() {
        if pick < *weight {
            return idx;
        }
        pick -= weight;
    }
    weights.len().saturating_sub(1)
}
