//! Configuration management for colormap-tool.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)
//!
//! Command-line arguments and environment variables are both read by clap, so
//! they arrive together in [`Args`].

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ColormapError, Result};
use crate::lut::DEFAULT_LENGTH;

/// Command-line arguments for colormap-tool
#[derive(Parser, Debug)]
#[command(name = "colormap-tool")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to JSON configuration file
    #[arg(short, long, global = true, env = "COLORMAP_TOOL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "COLORMAP_TOOL_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory holding mpl_colormaps.json and cv_colormaps.json; the
    /// built-in catalogs are used when absent
    #[arg(short, long, global = true, env = "COLORMAP_TOOL_RESOURCES")]
    pub resources: Option<PathBuf>,

    /// Table length used when a command is not given one
    #[arg(long, global = true, env = "COLORMAP_TOOL_LENGTH")]
    pub default_length: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

/// What the binary should do
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print a colormap table as JSON
    Show {
        /// Colormap identifier, dotted ("mpl.viridis") or bare
        name: String,

        /// Namespace for a bare identifier
        #[arg(short, long)]
        namespace: Option<String>,

        /// Number of entries
        #[arg(short, long)]
        length: Option<usize>,

        /// Print entries in BGR order, as OpenCV consumes them
        #[arg(long)]
        bgr: bool,
    },

    /// List the colormaps of one or all namespaces
    List {
        /// Namespace to list
        namespace: Option<String>,
    },

    /// Render a colormap as a horizontal color bar
    Render {
        /// Colormap identifier
        name: String,

        #[arg(short, long)]
        namespace: Option<String>,

        /// Output PNG path
        #[arg(short, long)]
        output: PathBuf,

        #[arg(long)]
        width: Option<u32>,

        #[arg(long)]
        height: Option<u32>,
    },

    /// Colorize a grayscale image
    Apply {
        /// Input image; converted to 8-bit grayscale first
        input: PathBuf,

        /// Colormap identifier
        name: String,

        #[arg(short, long)]
        namespace: Option<String>,

        /// Output PNG path
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Lookup table configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LutConfig {
    /// Number of entries when no length is requested
    #[serde(default = "default_length")]
    pub default_length: usize,
}

/// Where colormap tables come from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Directory with JSON resources (None = built-in catalogs)
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

/// Color bar rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub lut: LutConfig,

    #[serde(default)]
    pub resources: ResourceConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<(Self, Command)> {
        Self::from_args(Args::parse())
    }

    /// Build the configuration from already parsed arguments
    pub fn from_args(args: Args) -> Result<(Self, Command)> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments and environment
        if let Some(log_level) = args.log_level {
            config.log_level = log_level;
        }
        if args.resources.is_some() {
            config.resources.directory = args.resources;
        }
        if let Some(length) = args.default_length {
            config.lut.default_length = length;
        }

        Ok((config, args.command))
    }

    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ColormapError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.log_level = other.log_level;
        self.lut = other.lut;
        if other.resources.directory.is_some() {
            self.resources.directory = other.resources.directory;
        }
        self.render = other.render;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ColormapError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        if self.lut.default_length == 0 {
            return Err(ColormapError::Config {
                message: "Default table length cannot be 0".to_string(),
            });
        }

        if self.render.width == 0 || self.render.height == 0 {
            return Err(ColormapError::Config {
                message: format!(
                    "Render size must be positive, got {}x{}",
                    self.render.width, self.render.height
                ),
            });
        }

        if let Some(dir) = &self.resources.directory {
            if !dir.is_dir() {
                return Err(ColormapError::Config {
                    message: format!("Resource directory not found: {}", dir.display()),
                });
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            lut: LutConfig::default(),
            resources: ResourceConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl Default for LutConfig {
    fn default() -> Self {
        Self {
            default_length: default_length(),
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
fn default_log_level() -> String {
    "info".to_string()
}

fn default_length() -> usize {
    DEFAULT_LENGTH
}

fn default_width() -> u32 {
    512
}

fn default_height() -> u32 {
    64
}
