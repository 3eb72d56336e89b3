use crate::segments::Line2;
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Merged centerline with the perpendicular envelope width of one slice.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FatLine {
    pub centerline: Line2,
    pub thickness: f64,
}

impl FatLine {
    pub fn new(centerline: Line2, thickness: f64) -> Self {
        Self {
            centerline,
            thickness,
        }
    }

    pub fn length(&self) -> f64 {
        self.centerline.length()
    }

    pub fn half_thickness(&self) -> f64 {
        0.5 * self.thickness
    }

    /// Corners of the strip rectangle, counter-clockwise starting at the
    /// right-hand side of `p0`. Returns `None` for a zero-length centerline.
    pub fn corners(&self) -> Option<[Point2<f64>; 4]> {
        let dir = self.centerline.direction()?;
        let side: Vector2<f64> = Vector2::new(-dir.y, dir.x) * self.half_thickness();
        let Line2 { p0, p1 } = self.centerline;
        Some([p0 - side, p1 - side, p1 + side, p0 + side])
    }
}
