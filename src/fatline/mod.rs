//! Fat-line construction for a single overlap group.
//!
//! The group's `[min_s, max_s]` endpoints are cut into elementary slots. For
//! every slot the perpendicular envelope of the members spanning it gives a
//! thickness and a centerline offset; consecutive slots with the same
//! envelope are fused, so the result is the shortest ordered sequence of
//! `FatLine`s covering the union of the member intervals.

mod builder;
mod fat_line;

pub use builder::build_fat_lines;
pub use fat_line::FatLine;
