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

//! The signed-in user.
//!
//! The user id is resolved once at startup and handed to the views that need
//! it. Nothing reads the environment or configuration for it afterwards.

use crate::config::AppConfig;

/// Identity used when nothing is configured in a development build.
const DEV_FALLBACK_USER_ID: &str = "9fa78e4f-c4d7-4f5e-88b0-cf96dfcce170";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SessionContext {
    user_id: Option<String>,
}

impl SessionContext {
    pub(crate) fn new(user_id: Option<String>) -> Self {
        Self {
            user_id: user_id.filter(|id| !id.trim().is_empty()),
        }
    }

    pub(crate) fn resolve(config: &AppConfig) -> Self {
        let user_id = config.user_id().or_else(|| {
            cfg!(debug_assertions).then(|| DEV_FALLBACK_USER_ID.to_string())
        });

        match &user_id {
            Some(id) => tracing::info!(user_id = %id, "session resolved"),
            None => tracing::warn!("no user id configured, collection changes will not be saved"),
        }

        Self::new(user_id)
    }

    pub(crate) fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::config::{USER_ID_VAR, tests::with_env};

    #[test]
    fn blank_user_id_is_treated_as_missing() {
        assert_eq!(SessionContext::new(Some("   ".to_string())).user_id(), None);
        assert_eq!(SessionContext::new(None).user_id(), None);
        assert_eq!(
            SessionContext::new(Some("u-1".to_string())).user_id(),
            Some("u-1")
        );
    }

    #[test]
    #[serial]
    fn resolve_uses_environment_then_file() {
        let cfg = AppConfig {
            user_id: Some("file-user".to_string()),
            ..AppConfig::default()
        };

        with_env(&[(USER_ID_VAR, Some("env-user"))], || {
            assert_eq!(SessionContext::resolve(&cfg).user_id(), Some("env-user"));
        });
        with_env(&[(USER_ID_VAR, None)], || {
            assert_eq!(SessionContext::resolve(&cfg).user_id(), Some("file-user"));
        });
    }

    #[test]
    #[serial]
    fn fallback_identity_only_in_debug_builds() {
        with_env(&[(USER_ID_VAR, None)], || {
            let session = SessionContext::resolve(&AppConfig::default());
            if cfg!(debug_assertions) {
                assert_eq!(session.user_id(), Some(DEV_FALLBACK_USER_ID));
            } else {
                assert_eq!(session.user_id(), None);
            }
        });
    }
}
