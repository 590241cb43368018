//! Configuration for the logbook generator.
//!
//! The configuration says where templates live, where entries are written
//! and how the creation stamps are formatted. It is stored as pretty-printed
//! JSON in the per-user data directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\logbook\config.json`
//! - **macOS**: `~/Library/Application Support/logbook/config.json`
//! - **Linux**: `~/.local/share/logbook/config.json`
//!
//! A missing file is not an error; every field has a default, so a fresh
//! install works from the current directory with `template.md` and
//! `HumanTemplate.md` next to the user.
//!
//! ```rust,no_run
//! use logbook::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Entries go to {}", config.output_dir().display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Sub-directory of the template directory used when no output directory is
/// configured.
pub const DEFAULT_OUTPUT_DIR: &str = "BetriebsheftEinträge";
pub const DEFAULT_TEMPLATE_FILE: &str = "template.md";
pub const DEFAULT_HUMAN_TEMPLATE_FILE: &str = "HumanTemplate.md";
pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y";
pub const DEFAULT_TIME_FORMAT: &str = "%H-%M";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directory holding both templates.
    pub template_dir: PathBuf,

    /// Directory for generated entries. `None` means
    /// `{template_dir}/BetriebsheftEinträge`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Template filled from the interactive interview.
    pub template_file: String,

    /// Template that already contains the final prose.
    pub human_template_file: String,

    /// `chrono` format of the date stamp.
    pub date_format: String,

    /// `chrono` format of the time stamp.
    pub time_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            template_dir: PathBuf::from("."),
            output_dir: None,
            template_file: DEFAULT_TEMPLATE_FILE.to_string(),
            human_template_file: DEFAULT_HUMAN_TEMPLATE_FILE.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(&config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        tracing::debug!(path = %config_file_path.display(), "configuration saved");
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    pub fn template_path(&self) -> PathBuf {
        self.template_dir.join(&self.template_file)
    }

    pub fn human_template_path(&self) -> PathBuf {
        self.template_dir.join(&self.human_template_file)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| self.template_dir.join(DEFAULT_OUTPUT_DIR))
    }

    /// Interactive setup wizard, starting from the saved configuration.
    ///
    /// The user picks which groups of settings to change; every prompt is
    /// pre-filled with the current value.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        let modules = [Message::ConfigModuleDirectories.to_string(), Message::ConfigModuleFormats.to_string()];
        let selected = MultiSelect::with_theme(&theme).items(&modules).defaults(&[true, false]).interact()?;

        for &selection in &selected {
            match selection {
                0 => {
                    msg_print!(Message::ConfigModuleDirectories);
                    let template_dir: String = Input::with_theme(&theme)
                        .with_prompt(Message::PromptTemplateDir.to_string())
                        .default(config.template_dir.display().to_string())
                        .interact_text()?;
                    config.template_dir = PathBuf::from(template_dir);

                    let output_dir: String = Input::with_theme(&theme)
                        .with_prompt(Message::PromptOutputDir.to_string())
                        .default(config.output_dir.as_ref().map(|p| p.display().to_string()).unwrap_or_default())
                        .allow_empty(true)
                        .interact_text()?;
                    let output_dir = output_dir.trim();
                    config.output_dir = (!output_dir.is_empty()).then(|| PathBuf::from(output_dir));

                    config.template_file = Input::with_theme(&theme)
                        .with_prompt(Message::PromptTemplateFile.to_string())
                        .default(config.template_file.clone())
                        .interact_text()?;
                    config.human_template_file = Input::with_theme(&theme)
                        .with_prompt(Message::PromptHumanTemplateFile.to_string())
                        .default(config.human_template_file.clone())
                        .interact_text()?;
                }
                1 => {
                    msg_print!(Message::ConfigModuleFormats);
                    config.date_format = Input::with_theme(&theme)
                        .with_prompt(Message::PromptDateFormat.to_string())
                        .default(config.date_format.clone())
                        .interact_text()?;
                    config.time_format = Input::with_theme(&theme)
                        .with_prompt(Message::PromptTimeFormat.to_string())
                        .default(config.time_format.clone())
                        .interact_text()?;
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
