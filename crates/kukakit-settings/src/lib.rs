//! KukaKit Settings Crate
//!
//! Handles generator defaults, output layout and progress reporting
//! configuration, with TOML/JSON persistence.

pub mod config;
pub mod error;

pub use config::{CircleSettings, Config, OutputSettings, ProgressSettings, RandomSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
