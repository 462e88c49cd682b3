use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use kinolist_api::Endpoint;
use serde::Deserialize;
use url::Url;

use crate::error::KinolistError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
///
/// Sections or keys missing from the user file fall back to the built-in
/// defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "defaults::api")]
    pub api: ApiConfig,
    #[serde(default = "defaults::session")]
    pub session: SessionConfig,
    #[serde(default = "defaults::logging")]
    pub logging: LoggingConfig,
}

/// Which server the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deployment {
    /// Development server at `local_url`.
    Local,
    /// Deployed server at `origin`.
    Origin,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "defaults::deployment")]
    pub deployment: Deployment,
    #[serde(default = "defaults::local_url")]
    pub local_url: String,
    #[serde(default = "defaults::origin")]
    pub origin: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "defaults::user")]
    pub user: String,
    #[serde(default = "defaults::cookie")]
    pub cookie: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "defaults::filter")]
    pub filter: String,
    #[serde(default = "defaults::file")]
    pub file: bool,
}

impl ApiConfig {
    /// Resolve the base URL for this deployment. `override_url` wins when set.
    pub fn base_url(&self, override_url: Option<&str>) -> Result<Url, KinolistError> {
        let raw = match override_url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(url) => url,
            None => match self.deployment {
                Deployment::Local => self.local_url.trim(),
                Deployment::Origin => self.origin.trim(),
            },
        };
        if raw.is_empty() {
            return Err(KinolistError::Config(format!(
                "no API URL configured for {:?} deployment",
                self.deployment
            )));
        }
        let url = Url::parse(raw).map_err(|e| KinolistError::Config(format!("{raw}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(KinolistError::Config(format!("{raw} cannot be a base URL")));
        }
        Ok(url)
    }
}

impl AppConfig {
    /// Load config: user file (if exists) merged over built-in defaults.
    pub fn load() -> Result<Self, KinolistError> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, KinolistError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let user_str = std::fs::read_to_string(path)?;
        toml::from_str(&user_str).map_err(|e| KinolistError::Config(e.to_string()))
    }

    /// Write the built-in defaults to `path` unless a file is already there.
    /// Returns whether a file was written.
    pub fn init_at(path: &Path) -> Result<bool, KinolistError> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, DEFAULT_CONFIG)?;
        Ok(true)
    }

    /// The single endpoint value handed to the API client at startup.
    pub fn endpoint(
        &self,
        base_url_override: Option<&str>,
        cookie_override: Option<String>,
    ) -> Result<Endpoint, KinolistError> {
        let base_url = self.api.base_url(base_url_override)?;
        let cookie = cookie_override.or_else(|| Some(self.session.cookie.clone()));
        Ok(Endpoint::new(base_url).with_session_cookie(cookie))
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Directory for rolling log files.
    pub fn log_dir() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.data_dir().join("logs"))
            .unwrap_or_else(|| PathBuf::from("logs"))
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "kinolist")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let builtin = defaults::builtin();
        Self {
            api: builtin.api,
            session: builtin.session,
            logging: builtin.logging,
        }
    }
}

mod defaults {
    use super::{ApiConfig, Deployment, LoggingConfig, SessionConfig, DEFAULT_CONFIG};

    /// Same shape as `AppConfig`, but every section is required. The
    /// built-in file sets every key, so no field default is consulted
    /// while parsing it.
    #[derive(serde::Deserialize)]
    pub(super) struct Builtin {
        pub api: ApiConfig,
        pub session: SessionConfig,
        pub logging: LoggingConfig,
    }

    pub(super) fn builtin() -> Builtin {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }

    pub(super) fn api() -> ApiConfig {
        builtin().api
    }

    pub(super) fn session() -> SessionConfig {
        builtin().session
    }

    pub(super) fn logging() -> LoggingConfig {
        builtin().logging
    }

    pub(super) fn deployment() -> Deployment {
        api().deployment
    }

    pub(super) fn local_url() -> String {
        api().local_url
    }

    pub(super) fn origin() -> String {
        api().origin
    }

    pub(super) fn user() -> String {
        session().user
    }

    pub(super) fn cookie() -> String {
        session().cookie
    }

    pub(super) fn filter() -> String {
        logging().filter
    }

    pub(super) fn file() -> bool {
        logging().file
    }
}
