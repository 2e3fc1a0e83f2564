//! Config manager for loading, saving, and atomic updates.
//!
//! Writes go to a temp file first and are renamed into place. Section-level
//! updates re-read the file and replace only the target table, preserving
//! comments and formatting elsewhere via `toml_edit`. Loading applies
//! defaults for missing keys and drops unknown sections.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use toml_edit::{DocumentMut, Item};

use super::settings::{ConfigSection, Settings};

/// Errors that can occur during config operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Failed to parse config for editing: {0}")]
    EditParseError(#[from] toml_edit::TomlError),

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Manages the preferences file.
pub struct ConfigManager {
    /// Path to the config file.
    config_path: PathBuf,
    /// Current settings loaded in memory.
    settings: Settings,
}

impl ConfigManager {
    /// Create a new config manager with the given config file path.
    ///
    /// Does not touch the filesystem - call `load()` or `load_or_create()`
    /// after.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            settings: Settings::default(),
        }
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Get a reference to the current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get a mutable reference to the current settings.
    ///
    /// Changes are in memory only until `save()` or `update_section()`.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Load config from file.
    ///
    /// Returns `NotFound` if the file doesn't exist.
    pub fn load(&mut self) -> ConfigResult<()> {
        if !self.config_path.exists() {
            return Err(ConfigError::NotFound(self.config_path.clone()));
        }

        let content = fs::read_to_string(&self.config_path)?;
        self.settings = toml::from_str(&content)?;
        Ok(())
    }

    /// Load config from file, creating it with defaults if missing.
    ///
    /// If the existing file carries unknown sections or is missing known
    /// ones, it is rewritten in cleaned-up form.
    pub fn load_or_create(&mut self) -> ConfigResult<()> {
        if self.config_path.exists() {
            let content = fs::read_to_string(&self.config_path)?;
            let doc: DocumentMut = content.parse()?;
            self.settings = toml::from_str(&content)?;

            if needs_cleanup(&doc) {
                tracing::debug!("Cleaning up config file {}", self.config_path.display());
                self.save()?;
            }
        } else {
            self.settings = Settings::default();
            self.save()?;
        }
        Ok(())
    }

    /// Ensure the configured output and logs directories exist.
    ///
    /// Should be called after `load_or_create()`.
    pub fn ensure_dirs_exist(&self) -> ConfigResult<()> {
        for dir in [
            &self.settings.paths.output_folder,
            &self.settings.paths.logs_folder,
        ] {
            let path = PathBuf::from(dir);
            if !path.exists() {
                fs::create_dir_all(&path)?;
            }
        }
        Ok(())
    }

    /// Get the logs folder path.
    pub fn logs_folder(&self) -> PathBuf {
        PathBuf::from(&self.settings.paths.logs_folder)
    }

    /// Save the entire config atomically.
    pub fn save(&self) -> ConfigResult<()> {
        let content = self.generate_config()?;
        self.atomic_write(&content)?;
        Ok(())
    }

    /// Update a specific section atomically.
    ///
    /// Re-reads the file from disk, replaces only the target table, and
    /// writes back. Other sections keep whatever the file currently holds,
    /// comments included.
    pub fn update_section(&mut self, section: ConfigSection) -> ConfigResult<()> {
        let current_content = if self.config_path.exists() {
            fs::read_to_string(&self.config_path)?
        } else {
            String::new()
        };

        let mut doc: DocumentMut = if current_content.is_empty() {
            DocumentMut::new()
        } else {
            current_content.parse()?
        };

        let section_doc: DocumentMut = self.section_toml(section)?.parse()?;
        doc[section.table_name()] = Item::Table(section_doc.as_table().clone());

        self.atomic_write(&doc.to_string())?;
        Ok(())
    }

    /// Serialize one section to a bare TOML table body.
    fn section_toml(&self, section: ConfigSection) -> ConfigResult<String> {
        let body = match section {
            ConfigSection::Paths => toml::to_string_pretty(&self.settings.paths)?,
            ConfigSection::Load => toml::to_string_pretty(&self.settings.load)?,
            ConfigSection::Save => toml::to_string_pretty(&self.settings.save)?,
            ConfigSection::Logging => toml::to_string_pretty(&self.settings.logging)?,
        };
        Ok(body)
    }

    /// Generate the full config content with section comments.
    fn generate_config(&self) -> ConfigResult<String> {
        let mut output = String::new();
        output.push_str("# HDRMerge configuration\n");
        output.push_str("# Auto-generated; comments may be preserved on section updates.\n\n");

        for section in ConfigSection::all() {
            output.push_str(section_comment(*section));
            output.push('\n');
            output.push_str(&format!("[{}]\n", section.table_name()));
            output.push_str(&self.section_toml(*section)?);
            output.push('\n');
        }

        Ok(output)
    }

    /// Write content to the config file atomically.
    fn atomic_write(&self, content: &str) -> io::Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Temp file in the same directory, so the rename stays atomic
        let temp_path = self.config_path.with_extension("toml.tmp");

        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
        }

        fs::rename(&temp_path, &self.config_path)?;
        Ok(())
    }
}

/// Comment line written above each section.
fn section_comment(section: ConfigSection) -> &'static str {
    match section {
        ConfigSection::Paths => "# Output and log directories",
        ConfigSection::Load => "# Defaults for loading exposure sequences",
        ConfigSection::Save => "# Defaults for writing merged results",
        ConfigSection::Logging => "# Logging configuration",
    }
}

/// Whether a loaded document carries unknown sections or misses known ones.
fn needs_cleanup(doc: &DocumentMut) -> bool {
    let known: Vec<&str> = ConfigSection::all().iter().map(|s| s.table_name()).collect();
    let has_unknown = doc.iter().any(|(key, _)| !known.contains(&key));
    let missing_known = known.iter().any(|name| doc.get(name).is_none());
    has_unknown || missing_known
}
