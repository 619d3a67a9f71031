//! plan2ics configuration.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};
use crate::tokenizer::TokenizeMode;

static DEFAULT_CALENDAR_NAME: &str = "Bible in a Year";
static DEFAULT_TRANSLATION: &str = "ESV";
static DEFAULT_LINK_BASE: &str = "https://www.biblegateway.com/passage/";
static DEFAULT_PRODID: &str = "-//plan2ics//Reading Plan//EN";

fn default_calendar_name() -> String {
    DEFAULT_CALENDAR_NAME.to_string()
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 1, 1).unwrap_or_default()
}

fn default_translation() -> String {
    DEFAULT_TRANSLATION.to_string()
}

fn default_link_base() -> String {
    DEFAULT_LINK_BASE.to_string()
}

fn default_prodid() -> String {
    DEFAULT_PRODID.to_string()
}

/// How event UIDs are assigned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UidStrategy {
    /// Derived from the calendar name and day number; identical across runs.
    #[default]
    Stable,
    /// A fresh v4 UUID per event.
    Random,
}

/// Configuration at ~/.config/plan2ics/config.toml
///
/// Every field is optional; command-line flags override what is loaded here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanConfig {
    #[serde(default = "default_calendar_name")]
    pub calendar_name: String,

    /// Date of day 1. Only month and day matter once the events recur yearly.
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,

    /// Translation code passed to the lookup link (e.g. "ESV", "NIV")
    #[serde(default = "default_translation")]
    pub translation: String,

    #[serde(default = "default_link_base")]
    pub link_base: String,

    #[serde(default = "default_prodid")]
    pub prodid: String,

    /// Reject day lines with tokens before the first book
    #[serde(default)]
    pub strict: bool,

    #[serde(default)]
    pub uid_strategy: UidStrategy,

    /// Mark events as free time (TRANSP:TRANSPARENT)
    #[serde(default)]
    pub transparent: bool,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            calendar_name: default_calendar_name(),
            start_date: default_start_date(),
            translation: default_translation(),
            link_base: default_link_base(),
            prodid: default_prodid(),
            strict: false,
            uid_strategy: UidStrategy::default(),
            transparent: false,
        }
    }
}

impl PlanConfig {
    pub fn config_path() -> PlanResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PlanError::Config("Could not determine config directory".into()))?
            .join("plan2ics");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from `path` if given, otherwise from the default location.
    ///
    /// A missing default file yields the defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> PlanResult<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::config_path()?;
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> PlanResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PlanError::Config(format!("Could not read config file {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> PlanResult<Self> {
        toml::from_str(content).map_err(|e| PlanError::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> PlanResult<String> {
        toml::to_string_pretty(self).map_err(|e| PlanError::Config(e.to_string()))
    }

    pub fn tokenize_mode(&self) -> TokenizeMode {
        if self.strict {
            TokenizeMode::Strict
        } else {
            TokenizeMode::Permissive
        }
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> PlanResult<()> {
        let contents = format!(
            "\
# plan2ics configuration

# Calendar name shown by calendar apps:
# calendar_name = \"{DEFAULT_CALENDAR_NAME}\"

# Date of day 1 of the plan:
# start_date = \"2021-01-01\"

# Translation used for the lookup link:
# translation = \"{DEFAULT_TRANSLATION}\"
# link_base = \"{DEFAULT_LINK_BASE}\"

# Reject day lines that have tokens before the first book name:
# strict = false

# \"stable\" keeps event UIDs identical across runs, \"random\" makes new ones:
# uid_strategy = \"stable\"

# Show reading days as free time:
# transparent = false
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PlanError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| PlanError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
