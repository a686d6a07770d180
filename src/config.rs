use crate::error::{PvReportError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default begin marker: the column header of a TestU01 summary table.
pub const DEFAULT_BEGIN_MARKER: &str = "Test                          p-value";

/// Default end marker: the closing line of a TestU01 summary table.
pub const DEFAULT_END_MARKER: &str = "All other tests were passed";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub markers: MarkerConfig,
    pub trim: TrimConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MarkerConfig {
    pub begin: String,
    pub end: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrimConfig {
    pub leading: usize,
    pub trailing: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            markers: MarkerConfig::default(),
            trim: TrimConfig::default(),
        }
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            begin: DEFAULT_BEGIN_MARKER.to_string(),
            end: DEFAULT_END_MARKER.to_string(),
        }
    }
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            leading: 2,
            trailing: 2,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PvReportError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| PvReportError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| PvReportError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["pvreport.toml", ".pvreport.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref begin) = cli_args.marker_begin {
            self.markers.begin = begin.clone();
        }

        if let Some(ref end) = cli_args.marker_end {
            self.markers.end = end.clone();
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| PvReportError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| PvReportError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.markers.begin.is_empty() {
            return Err(PvReportError::Config {
                message: "Begin marker must not be empty".to_string(),
            });
        }

        if self.markers.end.is_empty() {
            return Err(PvReportError::Config {
                message: "End marker must not be empty".to_string(),
            });
        }

        Ok(())
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub marker_begin: Option<String>,
    pub marker_end: Option<String>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_marker_begin(mut self, begin: Option<String>) -> Self {
        self.marker_begin = begin;
        self
    }

    pub fn with_marker_end(mut self, end: Option<String>) -> Self {
        self.marker_end = end;
        self
    }
}
