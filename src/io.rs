//! JSON I/O helpers for the command-line tool.
//!
//! - `read_segments_file`: load thick input segments from a JSON document.
//! - `write_json_file`: pretty-print a serializable value to disk.

use crate::error::{Error, Result};
use crate::segments::Line2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One thick segment as stored in an input document.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SegmentInput {
    pub id: String,
    pub start: [f64; 2],
    pub end: [f64; 2],
    pub thickness: f64,
}

impl SegmentInput {
    pub fn line(&self) -> Line2 {
        Line2::from_coords(self.start[0], self.start[1], self.end[0], self.end[1])
    }
}

/// Input document: `{ "segments": [ ... ] }`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SegmentsFile {
    pub segments: Vec<SegmentInput>,
}

pub fn read_segments_file(path: &Path) -> Result<SegmentsFile> {
    let data = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&data).map_err(|e| Error::json(path, e))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| Error::json(path, e))?;
    fs::write(path, json).map_err(|e| Error::io(path, e))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }
    Ok(())
}
