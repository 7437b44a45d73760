// Copyright (c) 2026 TEAM BHOOMI
// Licensed under the MIT License. See LICENSE file in the project root.

//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::error::MonitorError;
use crate::sensors::SourceKind;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Application name
    pub app_name: String,

    /// Log level
    pub log_level: String,

    /// Reading source configuration
    pub source: SourceConfig,

    /// Rolling window configuration
    pub window: WindowConfig,

    /// Refresh timer configuration
    pub refresh: RefreshConfig,

    /// Zone layout
    pub zones: ZoneConfig,

    /// Analysis configuration
    pub analysis: AnalysisConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "BHOOMI Rockfall AI".to_string(),
            log_level: "info".to_string(),
            source: SourceConfig::default(),
            window: WindowConfig::default(),
            refresh: RefreshConfig::default(),
            zones: ZoneConfig::default(),
            analysis: AnalysisConfig::default(),
        }
    }
}

impl Config {
    /// Load and validate configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&content).with_context(|| format!("parsing {:?}", path))?;
        config
            .validate()
            .with_context(|| format!("invalid configuration in {:?}", path))?;
        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Load or create default configuration
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            let config = Self::default();

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            config.save(path)?;
            Ok(config)
        }
    }

    /// Get configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("bhoomi"))
            .unwrap_or_else(|| PathBuf::from("./config"))
    }

    /// Get default configuration path
    pub fn default_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Reject settings the core cannot start with
    pub fn validate(&self) -> std::result::Result<(), MonitorError> {
        if self.window.capacity == 0 {
            return Err(MonitorError::Config("window capacity must be at least 1".into()));
        }
        if self.refresh.interval_secs == 0 {
            return Err(MonitorError::Config("refresh interval must be at least 1 second".into()));
        }
        let (low, high) = (self.analysis.low_quantile, self.analysis.high_quantile);
        if !(0.0..=1.0).contains(&low) || !(0.0..=1.0).contains(&high) || low > high {
            return Err(MonitorError::Config(format!(
                "band quantiles must satisfy 0 <= low <= high <= 1, got {} / {}",
                low, high
            )));
        }
        if self.analysis.forecast_min >= self.analysis.forecast_max {
            return Err(MonitorError::Config("forecast_min must be below forecast_max".into()));
        }
        if self.zones.site_zones.is_empty() && self.zones.workers > 0 {
            return Err(MonitorError::Config("workers need at least one site zone".into()));
        }
        Ok(())
    }
}

/// Reading source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Source selected at session start
    pub kind: SourceKind,

    /// Dataset shipped with the deployment
    pub static_dataset: PathBuf,

    /// Dataset supplied by the operator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_dataset: Option<PathBuf>,

    /// Seed for the synthetic generator and stand-ins; random when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::Synthetic,
            static_dataset: PathBuf::from("mine_sensor_data.csv"),
            external_dataset: None,
            seed: None,
        }
    }
}

/// Rolling window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Most recent readings retained
    pub capacity: usize,

    /// Rows shown in the alerts log
    pub alerts_log_len: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            capacity: 50,
            alerts_log_len: 5,
        }
    }
}

/// Refresh timer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    pub interval_secs: u64,
}

impl RefreshConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self { interval_secs: 60 }
    }
}

/// Zone layout of the site
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneConfig {
    /// Every zone a worker can be assigned to
    pub site_zones: Vec<String>,

    /// Off-limits zones
    pub restricted: Vec<String>,

    /// Workers tracked per tick
    pub workers: usize,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            site_zones: ["Zone A", "Zone B", "Zone C", "Zone D", "Zone E"]
                .iter()
                .map(|z| z.to_string())
                .collect(),
            restricted: ["Zone A", "Zone C", "Zone E"]
                .iter()
                .map(|z| z.to_string())
                .collect(),
            workers: 5,
        }
    }
}

/// Analysis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Quantile marking the top of the "low" region
    pub low_quantile: f64,

    /// Quantile marking the bottom of the "high" region
    pub high_quantile: f64,

    /// Forecast horizon in hours
    pub forecast_hours: usize,

    /// Inclusive lower bound of forecast values
    pub forecast_min: i64,

    /// Exclusive upper bound of forecast values
    pub forecast_max: i64,

    /// Thermal heat map side length in cells
    pub thermal_grid: usize,

    /// Spread of thermal values around the current risk
    pub thermal_spread: f64,

    /// Sensor hotspots marked on the heat map
    pub hotspots: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            low_quantile: 0.3,
            high_quantile: 0.7,
            forecast_hours: 6,
            forecast_min: 20,
            forecast_max: 95,
            thermal_grid: 100,
            thermal_spread: 15.0,
            hotspots: 6,
        }
    }
}
