//! Input segments and their canonical form.
//!
//! Every thick segment handed to the engine is reduced to a
//! [`CanonicalRecord`]: a folded direction angle, the signed offset of the
//! infinite carrier line from the origin, the `[min_s, max_s]` interval of the
//! endpoints projected on the direction, and the half-thickness. Clustering
//! and fat-line building work exclusively on these records.
//!
//! Notes
//! - Directions are folded so that anti-parallel segments on the same line
//!   share one angle (see `angle::fold_direction`).
//! - Lines shorter than [`MIN_LINE_LENGTH`] are rejected rather than guessed.

mod canonical;
mod segment;

pub use canonical::{canonicalize, CanonicalRecord, MIN_LINE_LENGTH};
pub use segment::{ItemId, Line2};
