//! Parameters configuring the merge engine.
//!
//! `angle_tol` controls which segments count as parallel, `long_tol` how far
//! apart two collinear runs may be and still be joined along their axis, and
//! `slice_eps` the numerical slack used while slicing an overlap group into
//! fat lines. All lengths share the units of the input coordinates.

use log::warn;
use serde::{Deserialize, Serialize};

/// Default direction quantum in radians (about 0.057°).
pub const DEFAULT_ANGLE_TOL: f64 = 1e-3;
/// Default longitudinal join tolerance.
pub const DEFAULT_LONG_TOL: f64 = 1e-6;
/// Default epsilon for slot, slice and thickness comparisons.
pub const DEFAULT_SLICE_EPS: f64 = 1e-9;

/// Construction-time parameters of an `OverlapMergeEngine`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeParams {
    /// Direction bucket width in radians.
    pub angle_tol: f64,
    /// Maximum along-axis gap between members of one group.
    pub long_tol: f64,
    /// Epsilon for the fat-line builder.
    pub slice_eps: f64,
}

impl Default for MergeParams {
    fn default() -> Self {
        Self {
            angle_tol: DEFAULT_ANGLE_TOL,
            long_tol: DEFAULT_LONG_TOL,
            slice_eps: DEFAULT_SLICE_EPS,
        }
    }
}

impl MergeParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_angle_tol(mut self, angle_tol: f64) -> Self {
        self.angle_tol = angle_tol;
        self
    }

    pub fn with_long_tol(mut self, long_tol: f64) -> Self {
        self.long_tol = long_tol;
        self
    }

    pub fn with_slice_eps(mut self, slice_eps: f64) -> Self {
        self.slice_eps = slice_eps;
        self
    }

    /// Replaces unusable values with defaults: `angle_tol` must be positive,
    /// `long_tol` and `slice_eps` non-negative, all finite.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let angle_tol = if self.angle_tol.is_finite() && self.angle_tol > 0.0 {
            self.angle_tol
        } else {
            warn!(
                "merge: angle_tol {} is not positive, using {}",
                self.angle_tol, defaults.angle_tol
            );
            defaults.angle_tol
        };
        let long_tol = if self.long_tol.is_finite() && self.long_tol >= 0.0 {
            self.long_tol
        } else {
            warn!(
                "merge: long_tol {} is invalid, using {}",
                self.long_tol, defaults.long_tol
            );
            defaults.long_tol
        };
        let slice_eps = if self.slice_eps.is_finite() && self.slice_eps >= 0.0 {
            self.slice_eps
        } else {
            warn!(
                "merge: slice_eps {} is invalid, using {}",
                self.slice_eps, defaults.slice_eps
            );
            defaults.slice_eps
        };
        Self {
            angle_tol,
            long_tol,
            slice_eps,
        }
    }
}
