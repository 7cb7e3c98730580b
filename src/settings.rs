//! Environment-driven settings for the two binaries.
//!
//! Both read the process environment after `dotenvy` has loaded any `.env`
//! file. Lookups go through a closure so tests don't touch the real
//! environment.

use std::path::PathBuf;

use qa_chat_core::config::{is_relative, resolve_api_base};

use crate::errors::AppError;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_UPSTREAM_URL: &str = "http://localhost:8000";
pub const DEFAULT_STATIC_DIR: &str = "frontend/dist";
pub const DEFAULT_ORIGIN: &str = "http://localhost:8080";

/// Build-time base address, baked in by `BACKEND_API_URL=... cargo build`.
const BUILD_TIME_API_URL: Option<&str> = option_env!("BACKEND_API_URL");

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Settings of `qa-chat-server`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub port: u16,
    pub upstream_url: String,
    pub static_dir: PathBuf,
}

impl ServerSettings {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let port = match non_blank(lookup("PORT")) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| AppError::invalid_setting("PORT", raw.clone(), format!("{e}")))?,
            None => DEFAULT_PORT,
        };

        let upstream_url = non_blank(lookup("QA_CHAT_UPSTREAM_URL"))
            .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string());
        if is_relative(&upstream_url) {
            return Err(AppError::invalid_setting(
                "QA_CHAT_UPSTREAM_URL",
                upstream_url,
                "must be an absolute http(s) URL",
            ));
        }

        let static_dir = non_blank(lookup("QA_CHAT_STATIC_DIR"))
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
            .into();

        Ok(Self {
            port,
            upstream_url: upstream_url.trim_end_matches('/').to_string(),
            static_dir,
        })
    }
}

/// Settings of the `qa-chat` terminal client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Absolute base address of the Q&A backend.
    pub api_base: String,
}

impl ClientSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::resolve(lookup, BUILD_TIME_API_URL)
    }

    /// `BACKEND_API_URL` at runtime beats the build-time value, which beats
    /// `/api`. A relative result is joined onto `QA_CHAT_ORIGIN`.
    fn resolve(lookup: impl Fn(&str) -> Option<String>, build_time: Option<&str>) -> Self {
        let runtime = lookup("BACKEND_API_URL");
        let base = resolve_api_base(runtime.as_deref(), build_time);
        if !is_relative(&base) {
            return Self { api_base: base };
        }

        let origin = non_blank(lookup("QA_CHAT_ORIGIN")).unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
        let origin = origin.trim_end_matches('/');
        let path = base.trim_start_matches('/');
        let api_base = if path.is_empty() {
            origin.to_string()
        } else {
            format!("{origin}/{path}")
        };
        Self { api_base }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn server_defaults() {
        let settings = ServerSettings::from_lookup(env(&[])).unwrap();
        assert_eq!(
            settings,
            ServerSettings {
                port: DEFAULT_PORT,
                upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
                static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            }
        );
    }

    #[test]
    fn server_reads_overrides() {
        let settings = ServerSettings::from_lookup(env(&[
            ("PORT", "9090"),
            ("QA_CHAT_UPSTREAM_URL", "https://qa.internal:8443/"),
            ("QA_CHAT_STATIC_DIR", "/srv/chat"),
        ]))
        .unwrap();
        assert_eq!(settings.port, 9090);
        assert_eq!(settings.upstream_url, "https://qa.internal:8443");
        assert_eq!(settings.static_dir, PathBuf::from("/srv/chat"));
    }

    #[test]
    fn server_rejects_bad_port() {
        let err = ServerSettings::from_lookup(env(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, AppError::InvalidSetting { name: "PORT", .. }));
    }

    #[test]
    fn server_rejects_relative_upstream() {
        let err = ServerSettings::from_lookup(env(&[("QA_CHAT_UPSTREAM_URL", "/api")])).unwrap_err();
        assert!(matches!(err, AppError::InvalidSetting { name: "QA_CHAT_UPSTREAM_URL", .. }));
    }

    #[test]
    fn client_prefers_runtime_value() {
        let settings = ClientSettings::resolve(
            env(&[("BACKEND_API_URL", "http://runtime:8000/")]),
            Some("http://build:8000"),
        );
        assert_eq!(settings.api_base, "http://runtime:8000");
    }

    #[test]
    fn client_falls_back_to_build_time_value() {
        let settings = ClientSettings::resolve(env(&[]), Some("http://build:8000"));
        assert_eq!(settings.api_base, "http://build:8000");
    }

    #[test]
    fn client_joins_default_path_onto_origin() {
        let settings = ClientSettings::resolve(env(&[]), None);
        assert_eq!(settings.api_base, "http://localhost:8080/api");

        let settings = ClientSettings::resolve(
            env(&[("QA_CHAT_ORIGIN", "http://chat.local:3000/"), ("BACKEND_API_URL", "/backend/")]),
            None,
        );
        assert_eq!(settings.api_base, "http://chat.local:3000/backend");
    }
}
