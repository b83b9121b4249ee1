//! Конфигурация приложения
//!
//! Порядок приоритета: значения по умолчанию, файл (`.toml` или `.json`),
//! переменные окружения `SENTIMENT_*`, флаги командной строки.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Конфигурация приложения
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
}

/// Настройки HTTP-сервера
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Адрес или имя хоста для прослушивания
    pub host: String,
    pub port: u16,
    /// Максимальный размер тела запроса в байтах
    pub max_body_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_body_bytes: 2 * 1024 * 1024,
        }
    }
}

/// Настройки логирования
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Уровень (trace, debug, info, warn, error)
    pub level: String,
    /// Цветной вывод
    pub ansi: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
        }
    }
}

impl AppConfig {
    /// Переопределить значения из переменных окружения
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SENTIMENT_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SENTIMENT_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue(format!("SENTIMENT_PORT={port}")))?;
        }
        if let Some(level) = lookup("SENTIMENT_LOG") {
            self.logging.level = level;
        }
        Ok(())
    }
}

/// Загрузить конфигурацию из файла
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| ConfigError::FileError(e.to_string()))?;

    let ext = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    match ext {
        "json" => serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string())),
        "toml" => toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string())),
        _ => Err(ConfigError::UnsupportedFormat(ext.to_string())),
    }
}

/// Ошибка конфигурации
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("File error: {0}")]
    FileError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.max_body_bytes, 2 * 1024 * 1024);
    }

    #[test]
    fn test_load_partial_toml() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nport = 9000").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging, LoggingSettings::default());
    }

    #[test]
    fn test_load_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"logging": {{"level": "debug", "ansi": false}}}}"#).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.ansi);
    }

    #[test]
    fn test_unsupported_format() {
        let file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        assert!(matches!(load_config(file.path()), Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config
            .apply_overrides(|key| match key {
                "SENTIMENT_HOST" => Some("localhost".to_string()),
                "SENTIMENT_PORT" => Some("3000".to_string()),
                "SENTIMENT_LOG" => Some("warn".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.server.host, "localhost");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.level, "warn");

        let bad = config.apply_overrides(|key| (key == "SENTIMENT_PORT").then(|| "abc".to_string()));
        assert!(matches!(bad, Err(ConfigError::InvalidValue(_))));
    }
}
