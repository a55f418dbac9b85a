/*
 * Loads the field framework's tunables: radius constants, overlay border
 * compensation, time-picker step, first day of the week, and the theme colors
 * (as 8-digit hex strings). Configuration is read-only; a missing file simply
 * yields the defaults.
 *
 * It uses a trait-based approach (`ConfigManagerOperations`) so the presenter
 * can be tested with mock configurations. The concrete `CoreConfigManager`
 * reads `field_config.json` from the directory `path_utils` resolves.
 */
use crate::core::color::{self, ColorError};
use crate::core::date_grid::WeekStart;
use crate::core::geometry::{self, GeometryConfig};
use crate::core::path_utils;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

pub const FIELD_CONFIG_FILENAME: &str = "field_config.json";

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Serde(serde_json::Error),
    NoConfigDirectory,
    InvalidThemeColor { key: &'static str, source: ColorError },
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Serde(err)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Configuration I/O error: {e}"),
            ConfigError::Serde(e) => write!(f, "Configuration parse error: {e}"),
            ConfigError::NoConfigDirectory => {
                write!(f, "Could not determine the configuration directory")
            }
            ConfigError::InvalidThemeColor { key, source } => {
                write!(f, "Theme color '{key}' is invalid: {source}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Serde(e) => Some(e),
            ConfigError::InvalidThemeColor { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub border: String,
    pub border_focused: String,
    pub border_error: String,
    pub border_disabled: String,
    pub surface: String,
    pub overlay_surface: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            border: "#d0d5ddff".to_string(),
            border_focused: "#3e72fbff".to_string(),
            border_error: "#d92d20ff".to_string(),
            border_disabled: "#eaecf0ff".to_string(),
            surface: "#ffffffff".to_string(),
            overlay_surface: "#ffffffff".to_string(),
        }
    }
}

impl ThemeConfig {
    // Every entry must parse as a hex color.
    pub fn validate(&self) -> Result<()> {
        let entries: [(&'static str, &str); 6] = [
            ("border", &self.border),
            ("border_focused", &self.border_focused),
            ("border_error", &self.border_error),
            ("border_disabled", &self.border_disabled),
            ("surface", &self.surface),
            ("overlay_surface", &self.overlay_surface),
        ];
        for (key, value) in entries {
            color::hex_to_rgb(value)
                .map_err(|source| ConfigError::InvalidThemeColor { key, source })?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub light_radius: f64,
    pub unmeasured_radius: f64,
    pub assumed_border_width: f64,
    pub minute_step: u8,
    pub week_start: WeekStart,
    pub theme: ThemeConfig,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            light_radius: geometry::LIGHT_RADIUS,
            unmeasured_radius: geometry::UNMEASURED_RADIUS,
            assumed_border_width: geometry::ASSUMED_BORDER_WIDTH,
            minute_step: 5,
            week_start: WeekStart::Monday,
            theme: ThemeConfig::default(),
        }
    }
}

impl FieldConfig {
    pub fn geometry(&self) -> GeometryConfig {
        GeometryConfig {
            light_radius: self.light_radius,
            unmeasured_radius: self.unmeasured_radius,
            assumed_border_width: self.assumed_border_width,
        }
    }

    // Minute step clamped into 1..=30 so the minute column is never empty.
    pub fn effective_minute_step(&self) -> u8 {
        self.minute_step.clamp(1, 30)
    }

    /*
     * Reads a configuration file. Missing keys take their defaults; unknown
     * keys are ignored. Theme colors are validated before returning.
     */
    pub fn load_from_path(path: &Path) -> Result<FieldConfig> {
        log::trace!("FieldConfig: Loading configuration from {path:?}");
        let file = File::open(path)?;
        let config: FieldConfig = serde_json::from_reader(BufReader::new(file))?;
        config.theme.validate()?;
        log::debug!("FieldConfig: Loaded configuration from {path:?}.");
        Ok(config)
    }
}

pub trait ConfigManagerOperations: Send + Sync {
    fn load_field_config(&self, app_name: &str) -> Result<FieldConfig>;
}

pub struct CoreConfigManager {}

impl CoreConfigManager {
    pub fn new() -> Self {
        CoreConfigManager {}
    }
}

impl Default for CoreConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManagerOperations for CoreConfigManager {
    /*
     * Loads `field_config.json` from the application's local configuration
     * directory. A missing file is not an error: the defaults are returned.
     */
    fn load_field_config(&self, app_name: &str) -> Result<FieldConfig> {
        let config_dir =
            path_utils::get_app_config_local_dir(app_name).ok_or(ConfigError::NoConfigDirectory)?;
        let file_path = config_dir.join(FIELD_CONFIG_FILENAME);

        if !file_path.exists() {
            log::debug!("CoreConfigManager: {file_path:?} does not exist; using defaults.");
            return Ok(FieldConfig::default());
        }
        FieldConfig::load_from_path(&file_path)
    }
}
