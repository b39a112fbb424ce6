//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default backend address
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
/// Default path of the public registration endpoint
pub const DEFAULT_REGISTRATION_PATH: &str = "/api/v1/volunteers/register";
pub const DEFAULT_TENANT_ID: i64 = 1;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the backend address
pub const API_URL_ENV: &str = "VVHS_API_URL";
/// Environment variable overriding the tenant
pub const TENANT_ID_ENV: &str = "VVHS_TENANT_ID";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClientConfig {
    /// Backend base URL
    pub api_base_url: Option<String>,
    /// Registration endpoint path, relative to the base URL
    pub registration_path: Option<String>,
    /// Tenant new volunteers register with
    pub tenant_id: Option<i64>,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: Option<u64>,
    /// Write logs here instead of stderr
    pub log_file: Option<PathBuf>,
}

impl ClientConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "vvhs", "vvhs-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                Ok(serde_json::from_str(&content)?)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Apply overrides from the process environment.
    ///
    /// Call after logging is initialised; ignored values are reported as warnings.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up by environment variable name
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(API_URL_ENV) {
            if url.trim().is_empty() {
                tracing::warn!("ignoring blank {API_URL_ENV}");
            } else {
                self.api_base_url = Some(url);
            }
        }
        if let Some(raw) = lookup(TENANT_ID_ENV) {
            match raw.trim().parse() {
                Ok(id) => self.tenant_id = Some(id),
                Err(_) => tracing::warn!("ignoring invalid {TENANT_ID_ENV}={raw:?}"),
            }
        }
        self
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    pub fn registration_path(&self) -> &str {
        self.registration_path
            .as_deref()
            .unwrap_or(DEFAULT_REGISTRATION_PATH)
    }

    pub fn tenant_id(&self) -> i64 {
        self.tenant_id.unwrap_or(DEFAULT_TENANT_ID)
    }

    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.api_base_url.is_none());
        assert!(config.registration_path.is_none());
        assert!(config.tenant_id.is_none());
        assert!(config.request_timeout_secs.is_none());
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_defaults_through_accessors() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url(), "http://localhost:8000");
        assert_eq!(config.registration_path(), "/api/v1/volunteers/register");
        assert_eq!(config.tenant_id(), 1);
        assert_eq!(config.request_timeout_secs(), 30);
    }

    #[test]
    fn test_serialization() {
        let config = ClientConfig {
            api_base_url: Some("https://api.vvhs.example".to_string()),
            registration_path: Some("/api/v1/public/register".to_string()),
            tenant_id: Some(4),
            request_timeout_secs: Some(10),
            log_file: Some(PathBuf::from("/tmp/vvhs.log")),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: ClientConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.api_base_url(), "https://api.vvhs.example");
        assert_eq!(parsed.registration_path(), "/api/v1/public/register");
        assert_eq!(parsed.tenant_id(), 4);
        assert_eq!(parsed.request_timeout_secs(), 10);
        assert_eq!(parsed.log_file, Some(PathBuf::from("/tmp/vvhs.log")));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: ClientConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.api_base_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        let json = r#"{"tenant_id": 3, "unknown_field": "value"}"#;
        let parsed: ClientConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.tenant_id, Some(3));
    }

    #[test]
    fn test_env_overrides_apply() {
        let config = ClientConfig::default().with_overrides(|key| match key {
            API_URL_ENV => Some("http://10.0.0.5:8000".to_string()),
            TENANT_ID_ENV => Some(" 12 ".to_string()),
            _ => None,
        });
        assert_eq!(config.api_base_url(), "http://10.0.0.5:8000");
        assert_eq!(config.tenant_id(), 12);
    }

    #[test]
    fn test_invalid_tenant_override_is_ignored() {
        let config = ClientConfig {
            tenant_id: Some(2),
            ..Default::default()
        }
        .with_overrides(|key| (key == TENANT_ID_ENV).then(|| "abc".to_string()));
        assert_eq!(config.tenant_id(), 2);
    }

    #[test]
    fn test_blank_url_override_is_ignored() {
        let config =
            ClientConfig::default().with_overrides(|key| (key == API_URL_ENV).then(String::new));
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
    }

    /// Run `f` with a subscriber that records formatted events
    fn capture_logs(f: impl FnOnce()) -> String {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let writer = Arc::clone(&buffer);
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || CapturedWriter(Arc::clone(&writer)))
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buffer.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    struct CapturedWriter(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_ignored_overrides_are_logged() {
        let logs = capture_logs(|| {
            let config = ClientConfig::default().with_overrides(|key| match key {
                API_URL_ENV => Some("  ".to_string()),
                TENANT_ID_ENV => Some("abc".to_string()),
                _ => None,
            });
            assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
            assert_eq!(config.tenant_id(), DEFAULT_TENANT_ID);
        });
        assert!(logs.contains("WARN"));
        assert!(logs.contains("ignoring blank VVHS_API_URL"));
        assert!(logs.contains("ignoring invalid VVHS_TENANT_ID"));
    }

    #[test]
    fn test_valid_overrides_log_nothing() {
        let logs = capture_logs(|| {
            ClientConfig::default().with_overrides(|key| match key {
                API_URL_ENV => Some("http://10.0.0.5:8000".to_string()),
                TENANT_ID_ENV => Some("3".to_string()),
                _ => None,
            });
        });
        assert!(logs.is_empty());
    }

    #[test]
    fn test_config_path_returns_option() {
        let _path = ClientConfig::config_path();
    }
}
