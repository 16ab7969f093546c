//! Service settings loaded by the CLI

use std::fmt;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use envconf::{Envconf, TextError, TextValue};
use log::LevelFilter;

/// Log verbosity of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub LevelFilter);

impl Default for LogLevel {
    fn default() -> Self {
        Self(LevelFilter::Info)
    }
}

impl TextValue for LogLevel {
    fn parse_text(raw: &str) -> Result<Self, TextError> {
        LevelFilter::from_str(raw)
            .map(Self)
            .map_err(|_| TextError::new(format!("unknown log level {:?}", raw)))
    }

    fn render_text(&self) -> Option<String> {
        Some(self.0.to_string().to_lowercase())
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Envconf)]
pub struct ServiceSettings {
    #[envconf("SERVICE_NAME,required")]
    pub name: String,
    #[envconf("LISTEN_ADDR")]
    pub listen: SocketAddr,
    pub workers: usize,
    pub request_timeout_ms: u64,
    pub allowed_origins: Vec<String>,
    pub log_level: LogLevel,
    pub data_dir: PathBuf,
    #[envconf(",required")]
    pub api_token: String,
    pub debug: bool,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            listen: SocketAddr::from((Ipv4Addr::LOCALHOST, 8080)),
            workers: 4,
            request_timeout_ms: 30_000,
            allowed_origins: Vec::new(),
            log_level: LogLevel::default(),
            data_dir: PathBuf::from("./data"),
            api_token: String::new(),
            debug: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        assert_eq!(
            ServiceSettings::keys(),
            vec![
                "SERVICE_NAME",
                "LISTEN_ADDR",
                "WORKERS",
                "REQUEST_TIMEOUT_MS",
                "ALLOWED_ORIGINS",
                "LOG_LEVEL",
                "DATA_DIR",
                "API_TOKEN",
                "DEBUG",
            ]
        );
    }

    #[test]
    fn test_load_overrides_defaults() {
        let source = [
            ("SERVICE_NAME", "billing"),
            ("API_TOKEN", ""),
            ("WORKERS", "16"),
            ("LOG_LEVEL", "debug"),
            ("ALLOWED_ORIGINS", "https://a.test, https://b.test"),
        ];
        let settings = ServiceSettings::from_source(&source).unwrap();
        assert_eq!(settings.name, "billing");
        assert_eq!(settings.workers, 16);
        assert_eq!(settings.log_level, LogLevel(LevelFilter::Debug));
        assert_eq!(settings.allowed_origins.len(), 2);
        assert_eq!(settings.listen.port(), 8080);
        assert_eq!(settings.request_timeout_ms, 30_000);
    }

    #[test]
    fn test_missing_and_invalid_are_reported_together() {
        let source = [("LOG_LEVEL", "loud"), ("LISTEN_ADDR", "nowhere")];
        let errors = ServiceSettings::from_source(&source).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "listen", "log_level", "api_token"]);
    }

    #[test]
    fn test_description_shows_defaults() {
        let description = ServiceSettings::default().describe().to_string();
        assert!(description.contains("SERVICE_NAME"));
        assert!(description.contains("\"127.0.0.1:8080\""));
        assert!(description.contains("\"info\""));
        assert!(description.contains("(required)"));
    }
}
