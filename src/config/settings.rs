//! Settings struct with TOML-based sections.
//!
//! Each section maps to one TOML table and can be persisted independently.
//! The `[load]` and `[save]` sections hold the user's sticky defaults and
//! seed fresh option bundles for a job; per-job fields such as the input
//! file list are never persisted here.

use serde::{Deserialize, Serialize};

use crate::logging::{LogConfig, LogLevel};
use crate::options::{LoadOptions, SaveOptions};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Output and log directories.
    #[serde(default)]
    pub paths: PathSettings,

    /// Sticky defaults for loading exposure sequences.
    #[serde(default)]
    pub load: LoadDefaults,

    /// Sticky defaults for writing merged results.
    #[serde(default)]
    pub save: SaveDefaults,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Path configuration for output and logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Default folder for merged output files.
    #[serde(default = "default_output_folder")]
    pub output_folder: String,

    /// Folder for per-job log files.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,

    /// Last folder the user picked exposures from.
    #[serde(default)]
    pub last_open_folder: String,
}

fn default_output_folder() -> String {
    "merged".to_string()
}

fn default_logs_folder() -> String {
    ".logs".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            output_folder: default_output_folder(),
            logs_folder: default_logs_folder(),
            last_open_folder: String::new(),
        }
    }
}

/// Persisted defaults for `LoadOptions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadDefaults {
    /// Align exposures before merging.
    #[serde(default = "default_true")]
    pub align: bool,

    /// Crop the result to the common overlapping region.
    #[serde(default = "default_true")]
    pub crop: bool,

    /// Start in batch mode.
    #[serde(default)]
    pub batch: bool,

    /// Batch grouping gap.
    #[serde(default = "default_batch_gap")]
    pub batch_gap: f64,
}

fn default_true() -> bool {
    true
}

fn default_batch_gap() -> f64 {
    2.0
}

impl Default for LoadDefaults {
    fn default() -> Self {
        Self {
            align: true,
            crop: true,
            batch: false,
            batch_gap: default_batch_gap(),
        }
    }
}

impl LoadDefaults {
    /// Seed a fresh load bundle from these defaults.
    ///
    /// The file list starts empty; the front end fills it in per job.
    pub fn to_options(&self) -> LoadOptions {
        LoadOptions {
            file_names: Vec::new(),
            align: self.align,
            crop: self.crop,
            batch: self.batch,
            batch_gap: self.batch_gap,
        }
    }
}

/// Persisted defaults for `SaveOptions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveDefaults {
    /// Output bit depth per sample.
    #[serde(default = "default_bps")]
    pub bps: i32,

    /// Embedded preview size; 0 disables the preview.
    #[serde(default)]
    pub preview_size: i32,

    /// Also write the contribution mask.
    #[serde(default)]
    pub save_mask: bool,

    /// Feathering radius at mask boundaries.
    #[serde(default = "default_feather_radius")]
    pub feather_radius: i32,
}

fn default_bps() -> i32 {
    16
}

fn default_feather_radius() -> i32 {
    3
}

impl Default for SaveDefaults {
    fn default() -> Self {
        Self {
            bps: default_bps(),
            preview_size: 0,
            save_mask: false,
            feather_radius: default_feather_radius(),
        }
    }
}

impl SaveDefaults {
    /// Seed a fresh save bundle from these defaults.
    ///
    /// The destination paths start empty; the front end fills them in per
    /// job.
    pub fn to_options(&self) -> SaveOptions {
        SaveOptions {
            bps: self.bps,
            preview_size: self.preview_size,
            file_name: Default::default(),
            save_mask: self.save_mask,
            mask_file_name: Default::default(),
            feather_radius: self.feather_radius,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Minimum level for job log files.
    #[serde(default)]
    pub level: LogLevel,

    /// Only log progress at `progress_step` percent intervals.
    #[serde(default = "default_true")]
    pub compact: bool,

    /// Progress update step percentage.
    #[serde(default = "default_progress_step")]
    pub progress_step: u32,
}

fn default_progress_step() -> u32 {
    20
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            compact: true,
            progress_step: default_progress_step(),
        }
    }
}

impl LoggingSettings {
    /// Build the job-logger configuration from these settings.
    pub fn to_log_config(&self) -> LogConfig {
        LogConfig {
            level: self.level,
            compact: self.compact,
            progress_step: self.progress_step,
            ..LogConfig::default()
        }
    }
}

/// Names of config sections for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigSection {
    Paths,
    Load,
    Save,
    Logging,
}

impl ConfigSection {
    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "paths",
            ConfigSection::Load => "load",
            ConfigSection::Save => "save",
            ConfigSection::Logging => "logging",
        }
    }

    /// All sections, in file order.
    pub fn all() -> &'static [ConfigSection] {
        &[
            ConfigSection::Paths,
            ConfigSection::Load,
            ConfigSection::Save,
            ConfigSection::Logging,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_serializes() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        assert!(toml.contains("[paths]"));
        assert!(toml.contains("[load]"));
        assert!(toml.contains("[save]"));
        assert!(toml.contains("batch_gap"));
    }

    #[test]
    fn settings_round_trip() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.load.batch_gap, settings.load.batch_gap);
        assert_eq!(parsed.save.bps, settings.save.bps);
        assert_eq!(parsed.paths.output_folder, settings.paths.output_folder);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let minimal = "[save]\nbps = 8";
        let parsed: Settings = toml::from_str(minimal).unwrap();
        assert_eq!(parsed.save.bps, 8);
        assert_eq!(parsed.save.feather_radius, 3);
        assert!(parsed.load.align);
        assert_eq!(parsed.load.batch_gap, 2.0);
    }

    #[test]
    fn default_load_defaults_seed_default_options() {
        assert_eq!(LoadDefaults::default().to_options(), LoadOptions::default());
    }

    #[test]
    fn default_save_defaults_seed_default_options() {
        assert_eq!(SaveDefaults::default().to_options(), SaveOptions::default());
    }

    #[test]
    fn seeded_options_pick_up_custom_defaults() {
        let mut defaults = SaveDefaults::default();
        defaults.bps = 8;
        defaults.save_mask = true;
        let opts = defaults.to_options();
        assert_eq!(opts.bps, 8);
        assert!(opts.save_mask);
        assert!(opts.mask_file_name.as_os_str().is_empty());
    }
}
