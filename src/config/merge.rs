use crate::error::{Error, Result};
use crate::params::{MergeParams, DEFAULT_ANGLE_TOL, DEFAULT_LONG_TOL, DEFAULT_SLICE_EPS};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct MergeToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub merge: MergeConfig,
    pub output: MergeOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Direction bucket width in degrees.
    pub angle_tolerance_deg: f64,
    /// Maximum along-axis gap joining two collinear runs.
    pub longitudinal_tolerance: f64,
    /// Extra half-width added to every band before the overlap test.
    pub thickness_tolerance: f64,
    /// Epsilon used while slicing groups into fat lines.
    pub slice_epsilon: f64,
    /// Keep single-member groups in the report.
    pub include_singletons: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            angle_tolerance_deg: DEFAULT_ANGLE_TOL.to_degrees(),
            longitudinal_tolerance: DEFAULT_LONG_TOL,
            thickness_tolerance: 0.0,
            slice_epsilon: DEFAULT_SLICE_EPS,
            include_singletons: true,
        }
    }
}

impl MergeConfig {
    pub fn to_merge_params(&self) -> MergeParams {
        MergeParams::new()
            .with_angle_tol(self.angle_tolerance_deg.to_radians())
            .with_long_tol(self.longitudinal_tolerance)
            .with_slice_eps(self.slice_epsilon)
    }
}

#[derive(Debug, Deserialize)]
pub struct MergeOutputConfig {
    #[serde(rename = "groups_json")]
    pub groups_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<MergeToolConfig> {
    let data = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let config: MergeToolConfig =
        serde_json::from_str(&data).map_err(|e| Error::json(path, e))?;
    if config.merge.thickness_tolerance < 0.0 {
        return Err(Error::Config(format!(
            "thickness_tolerance must be non-negative in {}",
            path.display()
        )));
    }
    Ok(config)
}
