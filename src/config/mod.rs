//! Persisted user preferences.
//!
//! Sticky defaults for load/save options live in a TOML file with logical
//! sections, written atomically (temp file, then rename). Sections can be
//! updated independently so a preferences dialog saving `[save]` cannot
//! clobber concurrent edits to `[paths]`.
//!
//! # Example
//!
//! ```no_run
//! use hdrmerge_core::config::{ConfigManager, ConfigSection};
//!
//! let mut config = ConfigManager::new(".config/hdrmerge.toml");
//! config.load_or_create().unwrap();
//!
//! // Seed per-job options from the persisted defaults
//! let load_opts = config.settings().load.to_options();
//!
//! // Change a sticky default and persist just that section
//! config.settings_mut().save.feather_radius = 5;
//! config.update_section(ConfigSection::Save).unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{
    ConfigSection, LoadDefaults, LoggingSettings, PathSettings, SaveDefaults, Settings,
};
