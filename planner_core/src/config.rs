//! Configuration file support for fitplan.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/fitplan/config.toml` and
//! supplies the form defaults used when an input is not given.

use crate::export::EXPORT_FILE_NAME;
use crate::{
    Budget, Diet, Error, Gender, Goal, GoalDuration, Level, Preferences, Result, UserProfile,
    AGE_RANGE, HEIGHT_RANGE, WEIGHT_RANGE,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub preferences: PreferencesConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

/// Default profile values, matching the form's initial slider positions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub name: String,

    #[serde(default = "default_age")]
    pub age: u32,

    #[serde(default)]
    pub gender: Gender,

    #[serde(default = "default_height_cm")]
    pub height_cm: u32,

    #[serde(default = "default_weight_kg")]
    pub weight_kg: u32,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: default_age(),
            gender: Gender::default(),
            height_cm: default_height_cm(),
            weight_kg: default_weight_kg(),
        }
    }
}

/// Default preference selections
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct PreferencesConfig {
    #[serde(default)]
    pub goal: Goal,

    #[serde(default)]
    pub level: Level,

    #[serde(default)]
    pub duration: GoalDuration,

    #[serde(default)]
    pub diet: Diet,

    #[serde(default)]
    pub budget: Budget,
}

/// Where the report file is written
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_export_file_name")]
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
            file_name: default_export_file_name(),
        }
    }
}

// Default value functions
fn default_age() -> u32 {
    21
}

fn default_height_cm() -> u32 {
    170
}

fn default_weight_kg() -> u32 {
    65
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_export_file_name() -> String {
    EXPORT_FILE_NAME.to_string()
}

impl ProfileConfig {
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            name: self.name.clone(),
            age: self.age,
            gender: self.gender,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
        }
    }
}

impl PreferencesConfig {
    pub fn to_preferences(&self) -> Preferences {
        Preferences {
            goal: self.goal,
            level: self.level,
            duration: self.duration,
            diet: self.diet,
            budget: self.budget,
        }
    }
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .map(|home| home.join(".config"))
                .unwrap_or_else(|| PathBuf::from(".config"))
        });
        base.join("fitplan").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Check profile defaults against the form ranges
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("age", self.profile.age, &AGE_RANGE),
            ("height_cm", self.profile.height_cm, &HEIGHT_RANGE),
            ("weight_kg", self.profile.weight_kg, &WEIGHT_RANGE),
        ];

        for (field, value, range) in checks {
            if !range.contains(&value) {
                return Err(Error::Config(format!(
                    "profile.{} = {} is outside {}..={}",
                    field,
                    value,
                    range.start(),
                    range.end()
                )));
            }
        }

        if self.export.file_name.trim().is_empty() {
            return Err(Error::Config("export.file_name must not be empty".into()));
        }

        Ok(())
    }
}
