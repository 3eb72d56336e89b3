#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod io;
pub mod params;

// Pipeline stages: public for tools and tests, but considered internals.
pub mod angle;
pub mod cluster;
pub mod fatline;
pub mod segments;

// --- High-level re-exports -------------------------------------------------

pub use crate::engine::{OverlapMergeEngine, OverlapMergeGroup};
pub use crate::error::{Error, InvalidInputError, Result};
pub use crate::fatline::FatLine;
pub use crate::params::MergeParams;
pub use crate::segments::{ItemId, Line2};

pub use crate::diagnostics::{MergeStage, MergeTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use fatline_merge::prelude::*;
///
/// let mut engine = OverlapMergeEngine::new();
/// engine.add_item("a", Line2::from_coords(0.0, 0.0, 2.0, 0.0), 0.2).unwrap();
/// engine.add_item("b", Line2::from_coords(3.0, 0.0, 1.0, 0.0), 0.2).unwrap();
///
/// let groups = engine.get_overlap_groups(0.0);
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].fat_lines.len(), 1);
/// ```
pub mod prelude {
    pub use crate::{FatLine, Line2, MergeParams, OverlapMergeEngine, OverlapMergeGroup};
}
