//! Configuration management for cmaps.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CmapsError, Result};

/// Environment variable that overrides the colormap directory
pub const FILE_DIR_ENV: &str = "CMAPS_FILE_DIR";

/// Command-line arguments for cmaps
#[derive(Parser, Debug)]
#[command(name = "cmaps")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Directory containing .rgb and .json colormap files
    #[arg(short, long, env = FILE_DIR_ENV, global = true)]
    pub dir: Option<PathBuf>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "CMAPS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "CMAPS_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,
}

/// Subcommands of the cmaps binary
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List available colormap names
    List,

    /// Print the entries of a colormap
    Show {
        /// Colormap name; a `_r` suffix reverses it
        name: String,

        /// Interpolate to this many entries
        #[arg(short, long)]
        lutsize: Option<usize>,

        /// Reverse the colormap
        #[arg(short, long)]
        reverse: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the anchor points of a colormap as JSON
    Segment {
        /// Colormap name; a `_r` suffix reverses it
        name: String,

        /// Number of anchors (defaults to the table length)
        #[arg(short, long)]
        anchors: Option<usize>,
    },

    /// Render a colorbar to a PNG file
    Plot {
        /// Colormap name; a `_r` suffix reverses it
        name: String,

        /// Output PNG path
        #[arg(short, long)]
        output: PathBuf,

        /// Image width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Image height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Interpolate to this many entries before rendering
        #[arg(short, long)]
        lutsize: Option<usize>,

        /// Reverse the colormap
        #[arg(short, long)]
        reverse: bool,
    },
}

/// Output format for `show`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Colormap data configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory scanned for colormap files
    #[serde(default = "default_file_dir")]
    pub file_dir: PathBuf,

    /// Default interpolation method for resampling
    #[serde(default = "default_interpolation")]
    pub interpolation_method: String,

    /// LUT size applied when a lookup does not ask for one
    #[serde(default)]
    pub default_lutsize: Option<usize>,
}

/// Colorbar rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Colorbar width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Colorbar height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Data configuration
    #[serde(default)]
    pub data: DataConfig,

    /// Render configuration
    #[serde(default)]
    pub render: RenderConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<(Self, Command)> {
        let args = Args::parse();
        let config = Self::from_args(&args)?;
        Ok((config, args.command))
    }

    /// Build the configuration for already-parsed arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments and environment
        if let Some(dir) = &args.dir {
            config.data.file_dir = dir.clone();
        }
        if let Some(level) = &args.log_level {
            config.log_level = level.clone();
        }

        Ok(config)
    }

    /// Defaults, with the colormap directory taken from `CMAPS_FILE_DIR`
    /// when it is set. Used by the process-wide registry.
    pub fn from_env() -> Self {
        let mut config = Config::default();
        if let Some(dir) = std::env::var_os(FILE_DIR_ENV) {
            config.data.file_dir = PathBuf::from(dir);
        }
        config
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.data.file_dir = other.data.file_dir;
        self.data.interpolation_method = other.data.interpolation_method;
        if other.data.default_lutsize.is_some() {
            self.data.default_lutsize = other.data.default_lutsize;
        }
        self.render = other.render;
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.data.file_dir.as_os_str().is_empty() {
            return Err(CmapsError::Config {
                message: "Colormap directory cannot be empty".to_string(),
            });
        }

        // Validate log level
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(CmapsError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        // Validate interpolation method
        match self.data.interpolation_method.as_str() {
            "linear" | "nearest" => {}
            _ => {
                return Err(CmapsError::Config {
                    message: format!(
                        "Invalid interpolation method: {}. Must be one of: linear, nearest",
                        self.data.interpolation_method
                    ),
                });
            }
        }

        if let Some(lutsize) = self.data.default_lutsize {
            if lutsize < 2 {
                return Err(CmapsError::Config {
                    message: format!("Default lutsize must be at least 2, got {}", lutsize),
                });
            }
        }

        if self.render.width < 2 || self.render.height < 2 {
            return Err(CmapsError::Config {
                message: "Colorbar dimensions must be at least 2x2".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            render: RenderConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            file_dir: default_file_dir(),
            interpolation_method: default_interpolation(),
            default_lutsize: None,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

// Default value functions for serde

/// The bundled `colormaps/` directory of the source tree, fixed at build
/// time. An installed binary must be pointed elsewhere with `CMAPS_FILE_DIR`,
/// `--dir` or `data.file_dir`.
fn default_file_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("colormaps")
}

fn default_interpolation() -> String {
    "linear".to_string()
}

fn default_width() -> u32 {
    1000
}

fn default_height() -> u32 {
    100
}

fn default_log_level() -> String {
    "info".to_string()
}
