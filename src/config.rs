//! Process configuration from environment variables (optionally seeded from `.env`).

use crate::error::AppError;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_DATABASE_PATH: &str = "data/apptest.db";
pub const DEFAULT_LOG_FILTER: &str = "book_catalog=info,tower_http=info";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
}

impl AppConfig {
    /// Read `HOST`, `PORT` and `DATABASE_PATH`, falling back to defaults when unset.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let port = match lookup("PORT").filter(|s| !s.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::Config(format!("invalid PORT: {}", raw)))?,
            None => DEFAULT_PORT,
        };
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.into());
        let database_path = lookup("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH));
        Ok(AppConfig {
            host,
            port,
            database_path,
        })
    }

    /// `host:port` for the listener; host names are resolved at bind time.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.database_path, PathBuf::from("data/apptest.db"));
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn port_from_env() {
        let config = config_from(&[("PORT", "8080"), ("HOST", "127.0.0.1")]).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn empty_port_falls_back_to_default() {
        assert_eq!(config_from(&[("PORT", "")]).unwrap().port, DEFAULT_PORT);
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert!(matches!(
            config_from(&[("PORT", "eighty")]),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn database_path_from_env() {
        let config = config_from(&[("DATABASE_PATH", "/tmp/books.db")]).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/tmp/books.db"));
    }
}
