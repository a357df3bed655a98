//! Application configuration: backend selection and attendance rules.
//!
//! Configuration is a JSON file in the per-user data directory. Every
//! module is optional; a missing file or module falls back to defaults, so
//! the client works out of the box against the build's default backend.
//!
//! ## File layout
//!
//! ```json
//! {
//!   "api": { "mode": "production", "timeout_secs": 30 },
//!   "attendance": { "late_threshold": "09:15", "timezone": "+06:30" }
//! }
//! ```
//!
//! ## Base URL precedence
//!
//! 1. `HRDESK_API_URL` environment variable
//! 2. `api.base_url`
//! 3. The URL of `api.mode`, or of the mode baked in at build time

use super::attendance::{ReportRules, DEFAULT_LATE_THRESHOLD};
use super::data_storage::DataStorage;
use super::time::{parse_hhmm, DisplayZone};
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs::{self, File};
use std::str::FromStr;
use std::time::Duration;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const API_URL_ENV: &str = "HRDESK_API_URL";

#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Backend environment.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApiMode {
    Development,
    Uat,
    Production,
}

impl ApiMode {
    pub const ALL: [ApiMode; 3] = [ApiMode::Development, ApiMode::Uat, ApiMode::Production];

    pub fn base_url(&self) -> &'static str {
        match self {
            ApiMode::Development => "http://127.0.0.1:8000/api",
            ApiMode::Uat => "https://hruatapi.aryoneoo.biz/api",
            ApiMode::Production => "https://hrapi.aryoneoo.biz/api",
        }
    }

    /// Mode selected with `HRDESK_API_MODE` when the binary was built.
    pub fn build_default() -> Self {
        APP_METADATA_API_MODE.parse().unwrap_or(ApiMode::Uat)
    }
}

impl Default for ApiMode {
    fn default() -> Self {
        Self::build_default()
    }
}

impl fmt::Display for ApiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApiMode::Development => "development",
            ApiMode::Uat => "uat",
            ApiMode::Production => "production",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ApiMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(ApiMode::Development),
            "uat" => Ok(ApiMode::Uat),
            "production" | "prod" => Ok(ApiMode::Production),
            other => msg_bail_anyhow!(Message::InvalidApiMode(other.to_string())),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ApiConfig {
    #[serde(default)]
    pub mode: ApiMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ApiConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "api".to_string(),
            name: "API".to_string(),
        }
    }

    pub fn init(config: &Option<ApiConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleApi);

        let modes: Vec<String> = ApiMode::ALL.iter().map(|m| m.to_string()).collect();
        let current = ApiMode::ALL.iter().position(|m| *m == config.mode).unwrap_or(1);
        let mode = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptApiMode.to_string())
            .items(&modes)
            .default(current)
            .interact()?;

        let base_url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptApiBaseUrl.to_string())
            .default(config.base_url.clone().unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        let timeout_secs: u64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptApiTimeout.to_string())
            .default(config.timeout_secs.unwrap_or(0))
            .interact_text()?;

        Ok(Self {
            mode: ApiMode::ALL[mode],
            base_url: Some(base_url.trim().to_string()).filter(|url| !url.is_empty()),
            timeout_secs: Some(timeout_secs).filter(|secs| *secs > 0),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AttendanceConfig {
    /// Start of the working day, `HH:mm`.
    pub late_threshold: String,
    #[serde(default)]
    pub timezone: DisplayZone,
}

impl Default for AttendanceConfig {
    fn default() -> Self {
        Self {
            late_threshold: DEFAULT_LATE_THRESHOLD.to_string(),
            timezone: DisplayZone::Local,
        }
    }
}

impl AttendanceConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "attendance".to_string(),
            name: "Attendance".to_string(),
        }
    }

    pub fn init(config: &Option<AttendanceConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleAttendance);

        let late_threshold: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptLateThreshold.to_string())
            .default(config.late_threshold)
            .validate_with(|input: &String| match parse_hhmm(input) {
                Some(_) => Ok(()),
                None => Err(Message::InvalidLateThreshold(input.clone()).to_string()),
            })
            .interact_text()?;

        let timezone: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTimezone.to_string())
            .default(config.timezone.to_string())
            .validate_with(|input: &String| input.parse::<DisplayZone>().map(|_| ()).map_err(|e| e.to_string()))
            .interact_text()?;

        Ok(Self {
            late_threshold: late_threshold.trim().to_string(),
            timezone: timezone.parse()?,
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance: Option<AttendanceConfig>,
}

impl Config {
    /// Reads the configuration file, or returns defaults when there is none.
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
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn delete() -> Result<()> {
        DataStorage::new().remove(CONFIG_FILE_NAME)
    }

    /// Interactive setup wizard, seeded with the current configuration.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [ApiConfig::module(), AttendanceConfig::module()];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "api" => config.api = Some(ApiConfig::init(&config.api)?),
                "attendance" => config.attendance = Some(AttendanceConfig::init(&config.attendance)?),
                _ => {}
            }
        }

        Ok(config)
    }

    pub fn base_url(&self) -> String {
        self.resolve_base_url(env::var(API_URL_ENV).ok().as_deref())
    }

    /// Base URL with an explicit override in place of the environment.
    pub fn resolve_base_url(&self, env_override: Option<&str>) -> String {
        if let Some(url) = env_override.map(str::trim).filter(|url| !url.is_empty()) {
            return url.to_string();
        }

        let api = self.api.clone().unwrap_or_default();
        api.base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| api.mode.base_url().to_string())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.api
            .as_ref()
            .and_then(|api| api.timeout_secs)
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Lateness threshold and display zone for reports.
    pub fn report_rules(&self) -> Result<ReportRules> {
        let attendance = self.attendance.clone().unwrap_or_default();
        if parse_hhmm(&attendance.late_threshold).is_none() {
            msg_bail_anyhow!(Message::InvalidLateThreshold(attendance.late_threshold));
        }
        Ok(ReportRules {
            late_threshold: attendance.late_threshold,
            zone: attendance.timezone,
        })
    }
}
