use super::segment::{ItemId, Line2};
use crate::angle::{direction_angle, fold_direction};
use crate::error::InvalidInputError;
use nalgebra::{Point2, Vector2};

/// Lines shorter than this are rejected as degenerate.
pub const MIN_LINE_LENGTH: f64 = 1e-12;

/// Direction-normalized representation of a thick segment.
///
/// `offset` is measured along `normal`, `min_s`/`max_s` along `dir`. Records
/// are immutable once built; the engine only ever reads them.
#[derive(Clone, Debug, PartialEq)]
pub struct CanonicalRecord {
    pub item: ItemId,
    pub angle: f64,
    pub offset: f64,
    pub min_s: f64,
    pub max_s: f64,
    pub perp_tol: f64,
    pub dir: Vector2<f64>,
    pub normal: Vector2<f64>,
}

impl CanonicalRecord {
    /// Lower edge of the fat strip, `offset - perp_tol`.
    #[inline]
    pub fn band_low(&self) -> f64 {
        self.offset - self.perp_tol
    }

    /// Upper edge of the fat strip, `offset + perp_tol`.
    #[inline]
    pub fn band_high(&self) -> f64 {
        self.offset + self.perp_tol
    }

    /// Maps a position along the axis and a perpendicular offset back to the plane.
    #[inline]
    pub fn point_at(&self, s: f64, offset: f64) -> Point2<f64> {
        Point2::from(self.dir * s + self.normal * offset)
    }
}

/// Converts a line and a half-thickness into a canonical record.
///
/// Anti-parallel inputs along the same infinite line produce the same angle,
/// offset and `[min_s, max_s]` interval.
pub fn canonicalize(
    item: ItemId,
    line: &Line2,
    half_thickness: f64,
) -> Result<CanonicalRecord, InvalidInputError> {
    if !line.is_finite() {
        return Err(InvalidInputError::NonFiniteLine);
    }
    if !half_thickness.is_finite() || half_thickness < 0.0 {
        return Err(InvalidInputError::InvalidThickness(2.0 * half_thickness));
    }
    let length = line.length();
    if length < MIN_LINE_LENGTH {
        return Err(InvalidInputError::DegenerateLine {
            length,
            min_length: MIN_LINE_LENGTH,
        });
    }

    let dir = fold_direction(line.delta() / length);
    let normal = Vector2::new(-dir.y, dir.x);
    let offset = normal.dot(&line.p0.coords);
    let s0 = dir.dot(&line.p0.coords);
    let s1 = dir.dot(&line.p1.coords);

    Ok(CanonicalRecord {
        item,
        angle: direction_angle(&dir),
        offset,
        min_s: s0.min(s1),
        max_s: s0.max(s1),
        perp_tol: half_thickness,
        dir,
        normal,
    })
}
