//! Request-level glue: load, summarize and optionally plot.

use super::config::DashboardConfig;
use crate::data::Table;
use crate::error::{InsightError, Result};
use crate::intake::UploadStore;
use crate::plot::{plot, PlotArtifact, PlotStore};
use crate::profile::{summarize, SummaryReport};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Everything the presentation layer needs to render one dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    /// Summary of the current dataset.
    pub report: SummaryReport,
    /// Histogram, when a column was requested.
    pub plot: Option<PlotArtifact>,
}

/// Entry point for request handlers.
///
/// Holds only configuration and directory handles; the current file is
/// passed in on every call.
#[derive(Debug, Clone)]
pub struct Dashboard {
    config: DashboardConfig,
    uploads: UploadStore,
    plots: PlotStore,
}

impl Dashboard {
    /// Create a dashboard, ensuring the uploads and plots directories exist.
    pub fn new(config: DashboardConfig) -> Result<Self> {
        let uploads = UploadStore::new(&config.uploads_dir)?;
        let plots = PlotStore::new(&config.plots_dir)?;
        Ok(Self {
            config,
            uploads,
            plots,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Upload store.
    pub fn uploads(&self) -> &UploadStore {
        &self.uploads
    }

    /// Plot store.
    pub fn plots(&self) -> &PlotStore {
        &self.plots
    }

    /// Store an uploaded file and return the path to use as current file.
    pub fn upload(&self, original_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        self.uploads.save(original_name, bytes)
    }

    /// Load the current file and summarize it.
    pub fn summarize_file(&self, path: &Path) -> Result<SummaryReport> {
        let table = self.load(path)?;
        Ok(summarize(&table))
    }

    /// Load the current file, plot one column and summarize it.
    pub fn plot_file(&self, path: &Path, column: &str) -> Result<DashboardView> {
        let table = self.load(path)?;
        let artifact = plot(&table, column, &self.plots, &self.config.plot)?;
        Ok(DashboardView {
            report: summarize(&table),
            plot: Some(artifact),
        })
    }

    /// Build the dashboard for the current file.
    ///
    /// With no current file this fails with `FileNotFound` so the caller
    /// can send the user back to the upload form. A column of `None` or an
    /// empty name skips plotting.
    pub fn view(&self, current_file: Option<&Path>, column: Option<&str>) -> Result<DashboardView> {
        let path = current_file.ok_or_else(|| {
            warn!("Dashboard requested without a current file");
            InsightError::FileNotFound("no current file selected".to_string())
        })?;

        match column.map(str::trim).filter(|c| !c.is_empty()) {
            Some(column) => self.plot_file(path, column),
            None => Ok(DashboardView {
                report: self.summarize_file(path)?,
                plot: None,
            }),
        }
    }

    fn load(&self, path: &Path) -> Result<Table> {
        if !path.is_file() {
            return Err(InsightError::FileNotFound(path.display().to_string()));
        }
        info!("Loading dataset {:?}", path);
        Table::from_csv(path)
    }
}
