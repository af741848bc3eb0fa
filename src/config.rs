// src/config.rs
//! Analysis options with file-backed defaults

use crate::error::{Result, TrackError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_TOLERANCE: f64 = 0.1;
pub const DEFAULT_RADIUS_VARIANCE_THRESHOLD: f64 = 0.2;

/// Options recognised by [`crate::analysis::analyze_track`].
///
/// `tolerance` does double duty: it is the maximum start/end gap in
/// kilometers for a track to count as closed, and the fractional offset of
/// the inner and outer boundary rings from the fitted radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_radius_variance_threshold")]
    pub radius_variance_threshold: f64,
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_radius_variance_threshold() -> f64 {
    DEFAULT_RADIUS_VARIANCE_THRESHOLD
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            radius_variance_threshold: DEFAULT_RADIUS_VARIANCE_THRESHOLD,
        }
    }
}

impl AnalysisConfig {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_radius_variance_threshold(mut self, threshold: f64) -> Self {
        self.radius_variance_threshold = threshold;
        self
    }

    /// Reject values the analysis cannot give a meaningful answer for
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(TrackError::Config(format!(
                "tolerance must be a non-negative number, got {}",
                self.tolerance
            )));
        }

        if !self.radius_variance_threshold.is_finite() || self.radius_variance_threshold < 0.0 {
            return Err(TrackError::Config(format!(
                "radius_variance_threshold must be a non-negative number, got {}",
                self.radius_variance_threshold
            )));
        }

        Ok(())
    }

    /// Load configuration from the user's config file, falling back to defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            tracing::debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| TrackError::Config(format!("Failed to read config file {}: {}", path.display(), e)))?;

        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| TrackError::Config(format!("Failed to parse config file {}: {}", path.display(), e)))?;

        config.validate()?;
        tracing::debug!(?config, "Loaded config from {}", path.display());

        Ok(config)
    }

    /// Save configuration to the user's config file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    /// Save configuration to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| TrackError::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(path, contents)
            .map_err(|e| TrackError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Config file location: `$HOME/.config/track-circle/config.json`
    pub fn get_config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .map_err(|_| TrackError::Config("HOME environment variable not set".to_string()))?;

        Ok(PathBuf::from(home).join(".config").join("track-circle").join("config.json"))
    }
}
