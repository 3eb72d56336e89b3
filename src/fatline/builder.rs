use super::fat_line::FatLine;
use crate::segments::{CanonicalRecord, Line2};
use log::trace;
use std::cmp::Ordering;

/// Envelope of the members active over one slot `[s0, s1]`.
#[derive(Clone, Copy, Debug)]
struct Slice {
    s0: f64,
    s1: f64,
    center: f64,
    thickness: f64,
}

impl Slice {
    fn continues(&self, next: &Slice, eps: f64) -> bool {
        (next.s0 - self.s1).abs() < eps
            && (next.thickness - self.thickness).abs() < eps
            && (next.center - self.center).abs() < eps
    }
}

/// Builds the ordered fat-line sequence enveloping one overlap group.
///
/// `members` index into `records`; the first member supplies the shared
/// direction and normal. Slots shorter than `eps`, slots no member spans and
/// zero-length centerlines are skipped rather than reported. A short slot
/// directly after a slice extends it, so a group whose members collapse to a
/// point yields no fat line at all.
pub fn build_fat_lines(records: &[CanonicalRecord], members: &[usize], eps: f64) -> Vec<FatLine> {
    let Some(&reference) = members.first() else {
        return Vec::new();
    };
    let reference = &records[reference];

    let mut cuts: Vec<f64> = members
        .iter()
        .flat_map(|&i| [records[i].min_s, records[i].max_s])
        .collect();
    cuts.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    cuts.dedup();

    let mut out: Vec<FatLine> = Vec::new();
    let mut pending: Option<Slice> = None;

    for w in cuts.windows(2) {
        let (s0, s1) = (w[0], w[1]);
        if s1 - s0 < eps {
            trace!("fatline: skipping degenerate slot [{s0}, {s1}]");
            // A tiny slot right after a slice extends it.
            if let Some(prev) = pending.as_mut().filter(|p| (s0 - p.s1).abs() < eps) {
                prev.s1 = s1;
            }
            continue;
        }
        let Some(slice) = envelope(records, members, s0, s1, eps) else {
            trace!("fatline: no active member over [{s0}, {s1}]");
            continue;
        };

        match pending.as_mut() {
            Some(prev) if prev.continues(&slice, eps) => prev.s1 = slice.s1,
            _ => {
                if let Some(prev) = pending.replace(slice) {
                    push_slice(&mut out, reference, &prev, eps);
                }
            }
        }
    }
    if let Some(prev) = pending {
        push_slice(&mut out, reference, &prev, eps);
    }
    out
}

fn envelope(
    records: &[CanonicalRecord],
    members: &[usize],
    s0: f64,
    s1: f64,
    eps: f64,
) -> Option<Slice> {
    let mut low = f64::INFINITY;
    let mut high = f64::NEG_INFINITY;
    for rec in members.iter().map(|&i| &records[i]) {
        if rec.min_s <= s0 + eps && rec.max_s >= s1 - eps {
            low = low.min(rec.band_low());
            high = high.max(rec.band_high());
        }
    }
    if low > high {
        return None;
    }
    Some(Slice {
        s0,
        s1,
        center: 0.5 * (low + high),
        thickness: high - low,
    })
}

fn push_slice(out: &mut Vec<FatLine>, reference: &CanonicalRecord, slice: &Slice, eps: f64) {
    let start = reference.point_at(slice.s0, slice.center);
    let end = reference.point_at(slice.s1, slice.center);
    if (end - start).norm() < eps {
        trace!("fatline: dropping zero-length slice at s={}", slice.s0);
        return;
    }
    out.push(FatLine::new(Line2::new(start, end), slice.thickness));
}
