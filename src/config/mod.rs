// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file. A handful of
//! settings can be overridden from the environment, which takes precedence
//! over the file.

use std::env;

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "mediashelf";

pub(crate) const API_BASE_URL_VAR: &str = "MEDIASHELF_API_BASE_URL";
pub(crate) const USER_ID_VAR: &str = "MEDIASHELF_USER_ID";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub api_base_url: Option<String>,
    pub user_id: Option<String>,
    pub offline: bool,
    pub database_file: String,
    pub log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_base_url: None,
            user_id: None,
            offline: false,
            database_file: "mediashelf.db".to_string(),
            log_file: "mediashelf.log".to_string(),
        }
    }
}

impl AppConfig {
    /// The media service base URL, without a trailing slash.
    pub fn api_base_url(&self) -> String {
        let url = non_empty(env::var(API_BASE_URL_VAR).ok())
            .or_else(|| non_empty(self.api_base_url.clone()))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        url.trim_end_matches('/').to_string()
    }

    /// The configured user id, the environment taking precedence.
    pub fn user_id(&self) -> Option<String> {
        non_empty(env::var(USER_ID_VAR).ok()).or_else(|| non_empty(self.user_id.clone()))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Loads the configuration file, creating it with defaults on first run.
pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load configuration, using defaults");
        AppConfig::default()
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use serial_test::serial;

    use super::*;

    /// Runs `f` with the given variables set (or removed), restoring the
    /// previous values afterwards. Callers must be `#[serial]`.
    pub(crate) fn with_env(vars: &[(&str, Option<&str>)], f: impl FnOnce()) {
        let saved: Vec<(String, Option<String>)> = vars
            .iter()
            .map(|(name, _)| (name.to_string(), env::var(name).ok()))
            .collect();

        for (name, value) in vars {
            set_var(name, *value);
        }
        f();
        for (name, value) in &saved {
            set_var(name, value.as_deref());
        }
    }

    fn set_var(name: &str, value: Option<&str>) {
        // SAFETY: every test that touches the environment runs under #[serial]
        unsafe {
            match value {
                Some(value) => env::set_var(name, value),
                None => env::remove_var(name),
            }
        }
    }

    fn file_config(api_base_url: Option<&str>, user_id: Option<&str>) -> AppConfig {
        AppConfig {
            api_base_url: api_base_url.map(str::to_string),
            user_id: user_id.map(str::to_string),
            ..AppConfig::default()
        }
    }

    #[test]
    #[serial]
    fn base_url_prefers_environment_then_file_then_default() {
        let cfg = file_config(Some("http://file.example:9000/"), None);

        with_env(&[(API_BASE_URL_VAR, Some("http://env.example/api//"))], || {
            assert_eq!(cfg.api_base_url(), "http://env.example/api");
        });

        with_env(&[(API_BASE_URL_VAR, None)], || {
            assert_eq!(cfg.api_base_url(), "http://file.example:9000");
            assert_eq!(AppConfig::default().api_base_url(), "http://localhost:8080");
        });

        with_env(&[(API_BASE_URL_VAR, Some("   "))], || {
            assert_eq!(cfg.api_base_url(), "http://file.example:9000");
        });
    }

    #[test]
    #[serial]
    fn user_id_prefers_environment_then_file() {
        let cfg = file_config(None, Some("file-user"));

        with_env(&[(USER_ID_VAR, Some("env-user"))], || {
            assert_eq!(cfg.user_id().as_deref(), Some("env-user"));
        });

        with_env(&[(USER_ID_VAR, None)], || {
            assert_eq!(cfg.user_id().as_deref(), Some("file-user"));
            assert_eq!(AppConfig::default().user_id(), None);
        });

        with_env(&[(USER_ID_VAR, Some(""))], || {
            assert_eq!(cfg.user_id().as_deref(), Some("file-user"));
        });
    }

    #[test]
    fn blank_values_are_ignored() {
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(non_empty(Some(" abc ".to_string())), Some("abc".to_string()));
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn partial_config_files_fill_in_defaults() {
        let cfg: AppConfig = serde_json::from_str(r#"{"offline": true}"#).unwrap();
        assert!(cfg.offline);
        assert_eq!(cfg.database_file, "mediashelf.db");
        assert_eq!(cfg.api_base_url, None);
    }
}
