//! Dashboard configuration.

use crate::error::{InsightError, Result};
use crate::plot::PlotOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory layout and rendering options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory receiving uploaded files.
    pub uploads_dir: PathBuf,
    /// Directory receiving plot images.
    pub plots_dir: PathBuf,
    /// Histogram rendering options.
    pub plot: PlotOptions,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            uploads_dir: PathBuf::from("uploads"),
            plots_dir: PathBuf::from("static/plots"),
            plot: PlotOptions::default(),
        }
    }
}

impl DashboardConfig {
    /// Load from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(InsightError::from)
    }

    /// Save to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(InsightError::from)
    }

    /// Load from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    /// Root both directories under `base`.
    pub fn with_base_dir<P: AsRef<Path>>(mut self, base: P) -> Self {
        let base = base.as_ref();
        self.uploads_dir = base.join(&self.uploads_dir);
        self.plots_dir = base.join(&self.plots_dir);
        self
    }
}
