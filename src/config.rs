use crate::domain::version::DEFAULT_TEMPLATE;
use crate::domain::{ReleaseTrack, Version};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "commitkit.toml";

/// Represents the complete configuration for commit-kit.
///
/// Contains changelog rendering options and version display settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub changelog: ChangelogConfig,

    #[serde(default)]
    pub version: VersionConfig,
}

fn default_true() -> bool {
    true
}

fn default_fallback() -> String {
    "No notable changes.".to_string()
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

/// Configuration for changelog rendering.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChangelogConfig {
    #[serde(default = "default_true")]
    pub markdown: bool,

    #[serde(default)]
    pub header: String,

    #[serde(default)]
    pub footer: String,

    /// Text used when no commit belongs in the changelog
    #[serde(default = "default_fallback")]
    pub fallback: String,

    /// Link template for commits, with `{{commit}}` standing for the hash
    #[serde(default)]
    pub commit_url: Option<String>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            markdown: true,
            header: String::new(),
            footer: String::new(),
            fallback: default_fallback(),
            commit_url: None,
        }
    }
}

/// Configuration for version display.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersionConfig {
    #[serde(default = "default_template")]
    pub template: String,

    #[serde(default = "default_true")]
    pub include_track: bool,

    #[serde(default)]
    pub include_release: bool,

    /// Prefix prepended to versions when they are used as tag names
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,
}

impl Default for VersionConfig {
    fn default() -> Self {
        VersionConfig {
            template: default_template(),
            include_track: true,
            include_release: false,
            tag_prefix: default_tag_prefix(),
        }
    }
}

impl VersionConfig {
    /// Apply the display settings to a version
    pub fn apply(&self, mut version: Version) -> Version {
        version.template = self.template.clone();
        version.include_track = self.include_track;
        version.include_release = self.include_release;
        version
    }

    /// Build a configured version
    pub fn version(&self, major: u32, minor: u32, patch: u32, track: ReleaseTrack) -> Version {
        self.apply(Version::new(major, minor, patch).with_track(track))
    }

    /// Tag name for a version, e.g. `v1.2.0-beta`
    pub fn tag_name(&self, version: &Version) -> String {
        format!("{}{}", self.tag_prefix, version.display_string())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `commitkit.toml` in current directory
/// 3. `commitkit.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            debug!("no configuration file found, using defaults");
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
