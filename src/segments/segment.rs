use nalgebra::{Point2, Point3, Vector2};
use serde::{Deserialize, Serialize};

/// Identifier of an item stored in a merge engine (its arena index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl ItemId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Id for the arena slot `index`, or `None` once ids no longer fit in `u32`.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(ItemId)
    }
}

/// Finite 2D line segment between `p0` and `p1`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line2 {
    pub p0: Point2<f64>,
    pub p1: Point2<f64>,
}

impl Line2 {
    pub fn new(p0: Point2<f64>, p1: Point2<f64>) -> Self {
        Self { p0, p1 }
    }

    pub fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    /// Projects a 3D segment onto the XY plane; z is dropped.
    pub fn from_3d(p0: Point3<f64>, p1: Point3<f64>) -> Self {
        Self::new(p0.xy(), p1.xy())
    }

    pub fn delta(&self) -> Vector2<f64> {
        self.p1 - self.p0
    }

    pub fn length(&self) -> f64 {
        self.delta().norm()
    }

    pub fn midpoint(&self) -> Point2<f64> {
        nalgebra::center(&self.p0, &self.p1)
    }

    /// Unit direction from `p0` to `p1`, or `None` for a zero-length line.
    pub fn direction(&self) -> Option<Vector2<f64>> {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            Some(self.delta() / len)
        } else {
            None
        }
    }

    pub fn is_finite(&self) -> bool {
        self.p0.iter().chain(self.p1.iter()).all(|v| v.is_finite())
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.p1, self.p0)
    }
}
