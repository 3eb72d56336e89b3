//! Diagnostics describing one overlap-group computation.
//!
//! `MergeTrace` is returned next to the groups by
//! `OverlapMergeEngine::get_overlap_groups_with_trace`. It records the
//! parameters in effect, how many items each stage produced and how long it
//! took, which is what the `merge_segments` tool writes to its JSON report.

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Pipeline stage of a merge query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStage {
    DirectionBuckets,
    BandClusters,
    LongitudinalGroups,
    FatLines,
}

/// Time spent in one stage and the number of items it produced.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub stage: MergeStage,
    pub elapsed_ms: f64,
    pub produced: usize,
}

/// Summary of a single `get_overlap_groups` computation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeTrace {
    pub angle_tol: f64,
    pub long_tol: f64,
    pub thickness_tolerance: f64,
    pub input_records: usize,
    pub direction_buckets: usize,
    pub band_clusters: usize,
    pub groups: usize,
    pub singleton_groups: usize,
    pub fat_lines: usize,
    /// Groups whose members collapsed to a point and produced no fat line.
    pub empty_groups: usize,
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl MergeTrace {
    pub fn record(&mut self, stage: MergeStage, started: Instant, produced: usize) {
        self.stages.push(StageTiming {
            stage,
            elapsed_ms: elapsed_ms(started),
            produced,
        });
    }

    pub fn stage(&self, stage: MergeStage) -> Option<&StageTiming> {
        self.stages.iter().find(|s| s.stage == stage)
    }
}

#[inline]
pub(crate) fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
