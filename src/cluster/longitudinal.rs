use super::sweep::sweep_components;
use crate::segments::CanonicalRecord;

/// Splits one band cluster into groups that are contiguous along the shared
/// direction axis. A member joins the open group while
/// `min_s <= current_max + long_tol`.
pub fn group_longitudinal(
    records: &[CanonicalRecord],
    cluster: &[usize],
    long_tol: f64,
) -> Vec<Vec<usize>> {
    sweep_components(
        cluster,
        |i| (records[i].min_s, records[i].max_s),
        long_tol,
    )
}
