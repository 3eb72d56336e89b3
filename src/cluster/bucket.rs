use crate::segments::CanonicalRecord;
use std::collections::BTreeMap;

/// Records sharing one quantized direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectionBucket {
    pub key: i64,
    /// Indices into the record slice, in insertion order.
    pub members: Vec<usize>,
}

/// Quantizes an angle to its bucket key, `round(angle / angle_tol)`.
///
/// Two angles closer than `angle_tol` can still straddle a rounding boundary
/// and land in different buckets.
#[inline]
pub fn bucket_key(angle: f64, angle_tol: f64) -> i64 {
    (angle / angle_tol).round() as i64
}

/// Partitions records by direction bucket. Buckets are returned in ascending
/// key order so downstream output is deterministic.
pub fn bucket_by_direction(records: &[CanonicalRecord], angle_tol: f64) -> Vec<DirectionBucket> {
    let mut map: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
    for (i, rec) in records.iter().enumerate() {
        map.entry(bucket_key(rec.angle, angle_tol))
            .or_default()
            .push(i);
    }
    map.into_iter()
        .map(|(key, members)| DirectionBucket { key, members })
        .collect()
}
