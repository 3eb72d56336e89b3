use super::sweep::sweep_components;
use crate::segments::CanonicalRecord;

/// Perpendicular interval covered by a record's fat strip, widened by
/// `thickness_tolerance` on both sides.
#[inline]
pub fn band_interval(rec: &CanonicalRecord, thickness_tolerance: f64) -> (f64, f64) {
    (
        rec.offset - rec.perp_tol - thickness_tolerance,
        rec.offset + rec.perp_tol + thickness_tolerance,
    )
}

/// Splits one direction bucket into maximal chains of overlapping bands.
///
/// Bands that merely touch (`low == current_high`) belong to the same cluster.
pub fn cluster_bands(
    records: &[CanonicalRecord],
    members: &[usize],
    thickness_tolerance: f64,
) -> Vec<Vec<usize>> {
    sweep_components(
        members,
        |i| band_interval(&records[i], thickness_tolerance),
        0.0,
    )
}
