//! Overlap merge engine: accumulates thick segments and computes overlap
//! groups with their fat-line envelopes on demand.
//!
//! Pipeline
//! - `add_item` canonicalizes each segment and appends the record to an
//!   append-only arena; payloads are kept alongside.
//! - `get_overlap_groups` buckets records by direction, chains overlapping
//!   perpendicular bands inside each bucket, splits every band cluster into
//!   contiguous runs along the axis, and builds the fat lines of each run.
//!
//! Notes
//! - Queries never mutate the arena, so repeated calls (with the same or a
//!   different thickness tolerance) are independent of each other.
//! - Group order follows bucket key, then band position, then axis position.
//!   Items inside a group are ordered by their start along the shared axis.
//! - With the `parallel` feature each stage maps over its inputs with rayon;
//!   the output is identical to the serial path.

use crate::cluster::{bucket_by_direction, cluster_bands, group_longitudinal};
use crate::diagnostics::{elapsed_ms, MergeStage, MergeTrace};
use crate::error::InvalidInputError;
use crate::fatline::{build_fat_lines, FatLine};
use crate::params::MergeParams;
use crate::segments::{canonicalize, CanonicalRecord, ItemId, Line2};
use log::{debug, warn};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// One connected component of overlapping, contiguous, parallel segments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverlapMergeGroup<T> {
    /// Member payloads in axis order.
    pub items: Vec<T>,
    /// Engine ids of the members, parallel to `items`.
    pub item_ids: Vec<ItemId>,
    /// Ordered envelope slices; empty when the members collapse to a point.
    pub fat_lines: Vec<FatLine>,
}

impl<T> OverlapMergeGroup<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_singleton(&self) -> bool {
        self.items.len() == 1
    }
}

/// Group expressed as record indices, before payloads are attached.
struct IndexGroup {
    members: Vec<usize>,
    fat_lines: Vec<FatLine>,
}

/// Accumulates thick segments and computes their overlap groups.
#[derive(Clone, Debug)]
pub struct OverlapMergeEngine<T> {
    params: MergeParams,
    items: Vec<T>,
    records: Vec<CanonicalRecord>,
}

impl<T> Default for OverlapMergeEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OverlapMergeEngine<T> {
    pub fn new() -> Self {
        Self::with_params(MergeParams::default())
    }

    /// Creates an engine with the given tolerances; invalid values fall back
    /// to defaults (see `MergeParams::sanitized`).
    pub fn with_params(params: MergeParams) -> Self {
        Self {
            params: params.sanitized(),
            items: Vec::new(),
            records: Vec::new(),
        }
    }

    pub fn params(&self) -> &MergeParams {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn item(&self, id: ItemId) -> Option<&T> {
        self.items.get(id.index())
    }

    pub fn records(&self) -> &[CanonicalRecord] {
        &self.records
    }

    /// Canonicalizes and stores one thick segment.
    ///
    /// Fails when the line is shorter than `MIN_LINE_LENGTH`, has non-finite
    /// coordinates, or `thickness` is negative or non-finite, and once the
    /// `u32` id space is exhausted. A failed call leaves the engine unchanged.
    pub fn add_item(
        &mut self,
        payload: T,
        line: Line2,
        thickness: f64,
    ) -> Result<ItemId, InvalidInputError> {
        if !thickness.is_finite() || thickness < 0.0 {
            return Err(InvalidInputError::InvalidThickness(thickness));
        }
        let id = ItemId::from_index(self.records.len()).ok_or(
            InvalidInputError::CapacityExceeded {
                limit: u64::from(u32::MAX) + 1,
            },
        )?;
        let record = canonicalize(id, &line, 0.5 * thickness)?;
        self.records.push(record);
        self.items.push(payload);
        Ok(id)
    }

    /// Computes all overlap groups. `thickness_tolerance` widens every band on
    /// both sides before the perpendicular overlap test; negative values are
    /// treated as zero.
    pub fn get_overlap_groups(&self, thickness_tolerance: f64) -> Vec<OverlapMergeGroup<T>>
    where
        T: Clone,
    {
        self.get_overlap_groups_with_trace(thickness_tolerance).0
    }

    /// Same as `get_overlap_groups`, also returning per-stage diagnostics.
    pub fn get_overlap_groups_with_trace(
        &self,
        thickness_tolerance: f64,
    ) -> (Vec<OverlapMergeGroup<T>>, MergeTrace)
    where
        T: Clone,
    {
        let t0 = Instant::now();
        let thickness_tolerance = if thickness_tolerance.is_finite() && thickness_tolerance >= 0.0
        {
            thickness_tolerance
        } else {
            warn!("merge: thickness tolerance {thickness_tolerance} is invalid, using 0");
            0.0
        };

        let mut trace = MergeTrace {
            angle_tol: self.params.angle_tol,
            long_tol: self.params.long_tol,
            thickness_tolerance,
            input_records: self.records.len(),
            ..Default::default()
        };
        let index_groups = self.index_groups(thickness_tolerance, &mut trace);

        let groups: Vec<OverlapMergeGroup<T>> = index_groups
            .into_iter()
            .map(|g| {
                let item_ids: Vec<ItemId> = g.members.iter().map(|&i| self.records[i].item).collect();
                OverlapMergeGroup {
                    items: item_ids
                        .iter()
                        .map(|id| self.items[id.index()].clone())
                        .collect(),
                    item_ids,
                    fat_lines: g.fat_lines,
                }
            })
            .collect();

        trace.groups = groups.len();
        trace.singleton_groups = groups.iter().filter(|g| g.is_singleton()).count();
        trace.empty_groups = groups.iter().filter(|g| g.fat_lines.is_empty()).count();
        trace.fat_lines = groups.iter().map(|g| g.fat_lines.len()).sum();
        trace.total_ms = elapsed_ms(t0);
        debug!(
            "merge: records={} buckets={} bands={} groups={} singletons={} fat_lines={} elapsed_ms={:.3}",
            trace.input_records,
            trace.direction_buckets,
            trace.band_clusters,
            trace.groups,
            trace.singleton_groups,
            trace.fat_lines,
            trace.total_ms
        );
        (groups, trace)
    }

    fn index_groups(&self, thickness_tolerance: f64, trace: &mut MergeTrace) -> Vec<IndexGroup> {
        let records = &self.records;
        let params = &self.params;

        let t = Instant::now();
        let buckets = bucket_by_direction(records, params.angle_tol);
        trace.direction_buckets = buckets.len();
        trace.record(MergeStage::DirectionBuckets, t, buckets.len());

        let t = Instant::now();
        let bands: Vec<Vec<usize>> = map_stage(&buckets, |b| {
            cluster_bands(records, &b.members, thickness_tolerance)
        })
        .into_iter()
        .flatten()
        .collect();
        trace.band_clusters = bands.len();
        trace.record(MergeStage::BandClusters, t, bands.len());

        let t = Instant::now();
        let runs: Vec<Vec<usize>> = map_stage(&bands, |cluster| {
            group_longitudinal(records, cluster, params.long_tol)
        })
        .into_iter()
        .flatten()
        .collect();
        trace.record(MergeStage::LongitudinalGroups, t, runs.len());

        let t = Instant::now();
        let fat_lines = map_stage(&runs, |members| {
            build_fat_lines(records, members, params.slice_eps)
        });
        trace.record(
            MergeStage::FatLines,
            t,
            fat_lines.iter().map(Vec::len).sum(),
        );

        runs.into_iter()
            .zip(fat_lines)
            .map(|(members, fat_lines)| IndexGroup { members, fat_lines })
            .collect()
    }
}

/// Maps one pipeline stage over its inputs, in parallel when enabled.
fn map_stage<I, O, F>(inputs: &[I], f: F) -> Vec<O>
where
    I: Sync,
    O: Send,
    F: Fn(&I) -> O + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        inputs.par_iter().map(f).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        inputs.iter().map(f).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> Line2 {
        Line2::from_coords(x0, y0, x1, y1)
    }

    #[test]
    fn collinear_diagonal_overlap_forms_one_group() {
        let mut engine = OverlapMergeEngine::new();
        engine.add_item("a", line(0.0, 0.0, 1.0, 1.0), 0.10).unwrap();
        engine.add_item("b", line(0.5, 0.5, 2.0, 2.0), 0.10).unwrap();
        let groups = engine.get_overlap_groups(0.0);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].items, vec!["a", "b"]);
        assert_eq!(groups[0].fat_lines.len(), 1);
        assert!(approx_eq(groups[0].fat_lines[0].thickness, 0.10));
    }

    #[test]
    fn antiparallel_touching_segments_fold_together() {
        let mut engine = OverlapMergeEngine::new();
        engine.add_item(1, line(0.0, 0.0, 1.0, 0.0), 0.05).unwrap();
        engine.add_item(2, line(2.0, 0.0, 1.0, 0.0), 0.05).unwrap();
        let groups = engine.get_overlap_groups(0.0);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 2);
        let fat = &groups[0].fat_lines;
        assert_eq!(fat.len(), 1);
        assert!(approx_eq(fat[0].centerline.p0.x, 0.0));
        assert!(approx_eq(fat[0].centerline.p1.x, 2.0));
    }

    #[test]
    fn thickness_bridges_offset_gap() {
        let mut engine = OverlapMergeEngine::new();
        engine.add_item("thin", line(0.0, 0.0, 1.0, 0.0), 0.20).unwrap();
        engine.add_item("thick", line(0.0, 0.25, 1.0, 0.25), 0.60).unwrap();
        let groups = engine.get_overlap_groups(0.0);
        assert_eq!(groups.len(), 1);
        let fat = &groups[0].fat_lines;
        assert_eq!(fat.len(), 1);
        // Envelope [-0.1, 0.55].
        assert!(approx_eq(fat[0].thickness, 0.65));
        assert!(approx_eq(fat[0].centerline.p0.y, 0.225));
    }

    #[test]
    fn disjoint_intervals_give_two_singletons() {
        let mut engine = OverlapMergeEngine::new();
        engine.add_item('a', line(0.0, 0.0, 1.0, 0.0), 0.1).unwrap();
        engine.add_item('b', line(5.0, 0.0, 6.0, 0.0), 0.1).unwrap();
        let groups = engine.get_overlap_groups(0.0);
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.is_singleton()));
        assert_eq!(groups[0].items, vec!['a']);
        assert_eq!(groups[1].items, vec!['b']);
    }

    #[test]
    fn perpendicular_segments_never_group() {
        let mut engine = OverlapMergeEngine::new();
        engine.add_item(0, line(0.0, 0.0, 2.0, 0.0), 0.2).unwrap();
        engine.add_item(1, line(1.0, -1.0, 1.0, 1.0), 0.2).unwrap();
        let groups = engine.get_overlap_groups(0.0);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn thickness_tolerance_changes_only_the_query() {
        let mut engine = OverlapMergeEngine::new();
        engine.add_item(0, line(0.0, 0.0, 1.0, 0.0), 0.1).unwrap();
        engine.add_item(1, line(0.0, 0.2, 1.0, 0.2), 0.1).unwrap();
        assert_eq!(engine.get_overlap_groups(0.0).len(), 2);
        assert_eq!(engine.get_overlap_groups(0.06).len(), 1);
        assert_eq!(engine.get_overlap_groups(0.0).len(), 2);
        assert_eq!(engine.len(), 2);
    }

    #[test]
    fn rejected_items_leave_state_untouched() {
        let mut engine = OverlapMergeEngine::new();
        engine.add_item("ok", line(0.0, 0.0, 1.0, 0.0), 0.1).unwrap();
        let err = engine
            .add_item("point", line(1.0, 1.0, 1.0, 1.0), 0.1)
            .unwrap_err();
        assert!(matches!(err, InvalidInputError::DegenerateLine { .. }));
        let err = engine
            .add_item("negative", line(0.0, 0.0, 1.0, 0.0), -0.1)
            .unwrap_err();
        assert_eq!(err, InvalidInputError::InvalidThickness(-0.1));
        assert_eq!(engine.len(), 1);
        let id = engine.add_item("next", line(0.0, 1.0, 1.0, 1.0), 0.1).unwrap();
        assert_eq!(id, ItemId(1));
        assert_eq!(engine.item(id), Some(&"next"));
    }

    #[test]
    fn adding_after_a_query_affects_only_later_queries() {
        let mut engine = OverlapMergeEngine::new();
        engine.add_item(0, line(0.0, 0.0, 1.0, 0.0), 0.1).unwrap();
        let before = engine.get_overlap_groups(0.0);
        engine.add_item(1, line(0.5, 0.0, 2.0, 0.0), 0.1).unwrap();
        let after = engine.get_overlap_groups(0.0);
        assert_eq!(before.len(), 1);
        assert_eq!(before[0].len(), 1);
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].len(), 2);
    }

    #[test]
    fn trace_counts_stages() {
        let mut engine = OverlapMergeEngine::new();
        engine.add_item(0, line(0.0, 0.0, 1.0, 0.0), 0.1).unwrap();
        engine.add_item(1, line(0.5, 0.0, 2.0, 0.0), 0.1).unwrap();
        engine.add_item(2, line(0.0, 5.0, 0.0, 6.0), 0.1).unwrap();
        let (groups, trace) = engine.get_overlap_groups_with_trace(0.0);
        assert_eq!(groups.len(), 2);
        assert_eq!(trace.input_records, 3);
        assert_eq!(trace.direction_buckets, 2);
        assert_eq!(trace.band_clusters, 2);
        assert_eq!(trace.groups, 2);
        assert_eq!(trace.singleton_groups, 1);
        assert_eq!(trace.fat_lines, 2);
        assert_eq!(trace.stages.len(), 4);
    }

    #[test]
    fn point_like_group_has_no_fat_lines() {
        let mut engine = OverlapMergeEngine::new();
        engine.add_item("dot", line(1.0, 1.0, 1.0 + 5e-10, 1.0), 0.2).unwrap();
        engine.add_item("wall", line(0.0, 5.0, 2.0, 5.0), 0.2).unwrap();
        let (groups, trace) = engine.get_overlap_groups_with_trace(0.0);
        assert_eq!(groups.len(), 2);
        let dot = groups.iter().find(|g| g.items == vec!["dot"]).unwrap();
        assert!(dot.fat_lines.is_empty());
        assert_eq!(trace.empty_groups, 1);
        assert_eq!(trace.fat_lines, 1);
    }

    #[test]
    fn vertical_walls_split_across_the_fold_seam() {
        // x drift of 1e-10 flips the folded direction from +y to -y, so the
        // two collinear walls land at opposite ends of the angle range.
        let mut engine = OverlapMergeEngine::new();
        engine.add_item(0, line(5.0, 0.0, 5.0, 3.0), 0.2).unwrap();
        engine.add_item(1, line(5.0, 1.0, 5.0 - 1e-10, 4.0), 0.2).unwrap();
        let angles: Vec<f64> = engine.records().iter().map(|r| r.angle).collect();
        assert!(approx_eq(angles[0], std::f64::consts::FRAC_PI_2));
        assert!(approx_eq(angles[1], -std::f64::consts::FRAC_PI_2));
        assert_eq!(engine.get_overlap_groups(0.0).len(), 2);

        // Exactly vertical input folds consistently.
        let mut engine = OverlapMergeEngine::new();
        engine.add_item(0, line(5.0, 0.0, 5.0, 3.0), 0.2).unwrap();
        engine.add_item(1, line(5.0, 4.0, 5.0, 1.0), 0.2).unwrap();
        assert_eq!(engine.get_overlap_groups(0.0).len(), 1);
    }

    #[test]
    fn empty_engine_has_no_groups() {
        let engine: OverlapMergeEngine<u32> = OverlapMergeEngine::new();
        assert!(engine.is_empty());
        assert!(engine.get_overlap_groups(0.0).is_empty());
    }
}
