//! Configuration management for lupin.
//!
//! Settings are stored as pretty-printed JSON in the platform data directory
//! (see [`DataStorage`]). Every settings group is an optional module, so a
//! missing group, or a missing file, simply means "use the defaults".
//!
//! ```json
//! {
//!   "assistant": {
//!     "user_id": 1,
//!     "session_timeout": 30,
//!     "date_format": "%d-%m-%Y"
//!   }
//! }
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lupin::libs::config::Config;
//!
//! let config = Config::read()?;
//! let assistant = config.assistant();
//! println!("sessions expire after {} minutes", assistant.session_timeout);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::schedule::{is_valid_format, DEFAULT_CUSTOM_DATE_FORMAT};
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_print};
use anyhow::{Context, Result};
use chrono::Duration;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Upper bound for `session_timeout`: one year, in minutes.
pub const MAX_SESSION_TIMEOUT: u64 = 525_600;

/// Settings of the conversational assistant.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AssistantConfig {
    /// User id that terminal conversations run as.
    pub user_id: i64,

    /// Minutes of inactivity after which a session is torn down.
    pub session_timeout: u64,

    /// chrono format used to read custom dates typed in a conversation.
    pub date_format: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        AssistantConfig {
            user_id: 1,
            session_timeout: 30,
            date_format: DEFAULT_CUSTOM_DATE_FORMAT.to_string(),
        }
    }
}

impl AssistantConfig {
    pub fn idle_timeout(&self) -> Result<Duration> {
        i64::try_from(self.session_timeout)
            .ok()
            .filter(|_| is_valid_timeout(self.session_timeout))
            .and_then(Duration::try_minutes)
            .ok_or_else(|| msg_error_anyhow!(Message::InvalidSessionTimeout(self.session_timeout)))
    }

    fn validate(&self) -> Result<()> {
        if !is_valid_format(&self.date_format) {
            msg_bail_anyhow!(Message::InvalidDateFormat(self.date_format.clone()));
        }
        if !is_valid_timeout(self.session_timeout) {
            msg_bail_anyhow!(Message::InvalidSessionTimeout(self.session_timeout));
        }
        Ok(())
    }

    /// Interactive setup pre-filled with `current` (or the defaults).
    pub fn init(current: &Option<AssistantConfig>) -> Result<Self> {
        let default = current.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleAssistant);

        let user_id = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptUserId.to_string())
            .default(default.user_id)
            .interact_text()?;

        let session_timeout = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSessionTimeout.to_string())
            .default(default.session_timeout)
            .validate_with(|input: &u64| -> Result<(), String> {
                if is_valid_timeout(*input) {
                    Ok(())
                } else {
                    Err(Message::InvalidSessionTimeout(*input).to_string())
                }
            })
            .interact_text()?;

        let date_format: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDateFormat.to_string())
            .default(default.date_format)
            .validate_with(|input: &String| -> Result<(), String> {
                if is_valid_format(input) {
                    Ok(())
                } else {
                    Err(Message::InvalidDateFormat(input.clone()).to_string())
                }
            })
            .interact_text()?;

        Ok(AssistantConfig {
            user_id,
            session_timeout,
            date_format,
        })
    }
}

fn is_valid_timeout(minutes: u64) -> bool {
    (1..=MAX_SESSION_TIMEOUT).contains(&minutes)
}

/// Root configuration. Modules left unconfigured are omitted from the file.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistant: Option<AssistantConfig>,
}

impl Config {
    /// Reads the configuration from the data directory, falling back to
    /// defaults when no file exists yet.
    pub fn read() -> Result<Config> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::load(&path)
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.store(&path)
    }

    /// Reads a configuration file at an explicit path.
    pub fn load(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let config: Config =
            serde_json::from_str(&config_str).map_err(|e| msg_error_anyhow!(format!("{}: {}", Message::ConfigParseError, e)))?;
        if let Some(assistant) = &config.assistant {
            assistant.validate()?;
        }
        Ok(config)
    }

    pub fn store(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path).with_context(|| format!("writing {}", path.display()))?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// The assistant settings, or their defaults when not configured.
    pub fn assistant(&self) -> AssistantConfig {
        self.assistant.clone().unwrap_or_default()
    }

    /// Runs the setup wizard starting from the current configuration.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        config.assistant = Some(AssistantConfig::init(&config.assistant)?);
        Ok(config)
    }
}
