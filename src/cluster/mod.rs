//! Two-stage overlap clustering of canonical records.
//!
//! Records are first partitioned by quantized direction (`bucket`). Inside a
//! bucket, fat strips whose perpendicular bands overlap are chained together
//! (`band`), and each band cluster is then split along the shared axis into
//! contiguous runs (`longitudinal`). Both sweeps compute connected components
//! of overlapping 1-D intervals and share one implementation in `sweep`: a
//! sort followed by a single linear pass.
//!
//! Complexity
//! - O(n log n) per bucket, dominated by the two sorts.

pub mod band;
pub mod bucket;
pub mod longitudinal;
pub mod sweep;

pub use band::{band_interval, cluster_bands};
pub use bucket::{bucket_by_direction, bucket_key, DirectionBucket};
pub use longitudinal::group_longitudinal;
pub use sweep::sweep_components;
