//! Configuration and settings management for KukaKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats.
//!
//! Configuration is organized into logical sections:
//! - Circle settings (geometry of the repeated circle)
//! - Random circle settings (sampling ranges, count, seed)
//! - Output settings (directory, file prefixes, chunk size, folds)
//! - Progress settings (ticker interval)

use crate::error::{ConfigError, SettingsError, SettingsResult};
use kukakit_core::Vector3;
use kukakit_pathgen::{
    CircleParameters, RandomCircleParameters, RepeatCircleParameters, SampleRange,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Geometry of the circle used by the repeat command
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleSettings {
    /// Radius in mm
    pub radius: f64,
    /// Center (X fixed, Y/Z center of the circle)
    pub center: Vector3,
    /// A/B/C orientation in degrees
    pub orientation: Vector3,
    /// Default number of traversals
    pub count: usize,
}

impl Default for CircleSettings {
    fn default() -> Self {
        let circle = CircleParameters::default();
        Self {
            radius: circle.radius,
            center: circle.center,
            orientation: circle.orientation,
            count: 30,
        }
    }
}

impl CircleSettings {
    /// Generator parameters, optionally overriding the traversal count
    pub fn to_parameters(&self, count: Option<usize>) -> RepeatCircleParameters {
        RepeatCircleParameters {
            count: count.unwrap_or(self.count),
            circle: CircleParameters {
                radius: self.radius,
                center: self.center,
                orientation: self.orientation,
            },
        }
    }
}

/// Sampling ranges for the random circle command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomSettings {
    /// Default number of circles
    pub count: usize,
    pub x: SampleRange,
    pub z: SampleRange,
    pub a: SampleRange,
    pub radius: SampleRange,
    pub b: f64,
    pub c: f64,
    /// Fixed seed; unset draws a fresh seed per run
    pub seed: Option<u64>,
}

impl Default for RandomSettings {
    fn default() -> Self {
        let p = RandomCircleParameters::default();
        Self {
            count: p.count,
            x: p.x,
            z: p.z,
            a: p.a,
            radius: p.radius,
            b: p.b,
            c: p.c,
            seed: p.seed,
        }
    }
}

impl RandomSettings {
    /// Generator parameters, with optional command line overrides
    pub fn to_parameters(&self, count: Option<usize>, seed: Option<u64>) -> RandomCircleParameters {
        RandomCircleParameters {
            count: count.unwrap_or(self.count),
            x: self.x,
            z: self.z,
            a: self.a,
            radius: self.radius,
            b: self.b,
            c: self.c,
            seed: seed.or(self.seed),
        }
    }
}

/// Output layout settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory the KRL files are written to
    pub directory: PathBuf,
    /// File prefix for imported tables
    pub table_prefix: String,
    /// File prefix for random circles
    pub random_prefix: String,
    /// File prefix for the repeated circle
    pub repeat_prefix: String,
    /// Maximum points per spline block; 0 writes one block
    pub max_points: usize,
    /// Fold the data list every N declarations; 0 disables folds
    pub fold_every: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            table_prefix: "fileSpline".to_string(),
            random_prefix: "randomCircleSpline".to_string(),
            repeat_prefix: "repeatCircleSpline".to_string(),
            max_points: 0,
            fold_every: 50,
        }
    }
}

/// Progress ticker settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressSettings {
    /// Print a tick while generating
    pub enabled: bool,
    /// Tick interval in milliseconds
    pub interval_ms: u64,
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: 500,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub circle: CircleSettings,
    pub random: RandomSettings,
    pub output: OutputSettings,
    pub progress: ProgressSettings,
}

enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string()).into()),
        }
    }
}

impl Config {
    /// Default config location: `<config dir>/kukakit/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("kukakit").join("config.toml"))
    }

    /// Load `path` if given, otherwise the default location if it exists,
    /// otherwise the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Some(default) if default.exists() => Self::load_from_file(&default),
            _ => Ok(Self::default()),
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::LoadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| SettingsError::SaveError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn out_of_range(key: &str, value: impl ToString) -> ConfigError {
            ConfigError::ValueOutOfRange {
                key: key.to_string(),
                value: value.to_string(),
            }
        }

        if !(self.circle.radius > 0.0 && self.circle.radius.is_finite()) {
            return Err(out_of_range("circle.radius", self.circle.radius));
        }
        for (key, v) in [
            ("circle.center", self.circle.center),
            ("circle.orientation", self.circle.orientation),
        ] {
            if !v.is_finite() {
                return Err(out_of_range(key, format!("({}, {}, {})", v.p1, v.p2, v.p3)));
            }
        }
        if !(self.random.b.is_finite() && self.random.c.is_finite()) {
            return Err(out_of_range(
                "random.orientation",
                format!("b={}, c={}", self.random.b, self.random.c),
            ));
        }

        for (key, range) in [
            ("random.x", self.random.x),
            ("random.z", self.random.z),
            ("random.a", self.random.a),
            ("random.radius", self.random.radius),
        ] {
            if range.min >= range.max {
                return Err(out_of_range(key, format!("{}..{}", range.min, range.max)));
            }
        }
        if self.random.radius.min <= 0 {
            return Err(out_of_range("random.radius", self.random.radius.min));
        }

        if self.output.table_prefix.is_empty()
            || self.output.random_prefix.is_empty()
            || self.output.repeat_prefix.is_empty()
        {
            return Err(out_of_range("output.prefix", "\"\""));
        }

        if self.progress.interval_ms == 0 {
            return Err(out_of_range("progress.interval_ms", 0));
        }

        Ok(())
    }
}
