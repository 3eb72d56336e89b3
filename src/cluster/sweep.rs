use std::cmp::Ordering;

/// Connected components of overlapping 1-D intervals via sort + single sweep.
///
/// `bounds(i)` yields the `(low, high)` interval of member `i`. Members are
/// sorted by `low` (stable, so ties keep input order) and a component stays
/// open while the next `low <= current_high + join_tol`. Each returned
/// component lists its members in sweep order.
pub fn sweep_components<F>(members: &[usize], bounds: F, join_tol: f64) -> Vec<Vec<usize>>
where
    F: Fn(usize) -> (f64, f64),
{
    if members.is_empty() {
        return Vec::new();
    }
    let mut items: Vec<(usize, f64, f64)> = members
        .iter()
        .map(|&i| {
            let (low, high) = bounds(i);
            (i, low, high)
        })
        .collect();
    items.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    let mut components: Vec<Vec<usize>> = Vec::new();
    let mut cur: Vec<usize> = Vec::new();
    let mut current_high = f64::NEG_INFINITY;
    for (i, low, high) in items {
        if !cur.is_empty() && low > current_high + join_tol {
            components.push(std::mem::take(&mut cur));
            current_high = f64::NEG_INFINITY;
        }
        cur.push(i);
        current_high = current_high.max(high);
    }
    if !cur.is_empty() {
        components.push(cur);
    }
    components
}
