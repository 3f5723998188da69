//! Runtime configuration loaded from the environment.

use crate::error::AppError;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Where the contacts database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbLocation {
    File(PathBuf),
    Memory,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db: DbLocation,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

fn app_data_dir() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("contact-api")
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is honoured when present.
    ///
    /// Variables:
    /// - `DB_CONNECTION_STRING`: path, `sqlite://` URI or `:memory:`
    /// - `HOST`: bind address (default `0.0.0.0`)
    /// - `PORT`: bind port (default `3000`)
    /// - `LOG_LEVEL`: logger spec (default `info`)
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db = match lookup("DB_CONNECTION_STRING").filter(|s| !s.trim().is_empty()) {
            Some(raw) => parse_db_location(&raw)?,
            None => DbLocation::File(app_data_dir().join("app.db")),
        };

        let host = lookup("HOST")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(val) => val.trim().parse::<u16>().map_err(|_| {
                AppError::Config(format!("PORT must be a number between 0 and 65535, got: {val}"))
            })?,
            None => DEFAULT_PORT,
        };

        let log_level = lookup("LOG_LEVEL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(AppConfig {
            db,
            host,
            port,
            log_level,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid bind address {}:{}: {e}", self.host, self.port)))
    }
}

/// Accepts a plain path, `sqlite://<path>`, `sqlite:///<abs path>` or `:memory:`.
pub fn parse_db_location(raw: &str) -> Result<DbLocation, AppError> {
    let raw = raw.trim();
    let path = match raw.strip_prefix("sqlite://") {
        Some(rest) => rest,
        None if raw.contains("://") => {
            return Err(AppError::Config(format!(
                "unsupported database scheme in DB_CONNECTION_STRING: {raw}"
            )))
        }
        None => raw,
    };
    // sqlite:////abs/path keeps one leading slash, sqlite:///rel stays relative
    let path = match path.strip_prefix('/') {
        Some(rest) if rest.starts_with('/') => rest,
        Some(rest) if raw.starts_with("sqlite://") => rest,
        _ => path,
    };
    if path.is_empty() || path == ":memory:" {
        return Ok(DbLocation::Memory);
    }
    Ok(DbLocation::File(PathBuf::from(path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, AppError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = load(&[]).unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.log_level, "info");
        match cfg.db {
            DbLocation::File(p) => assert!(p.ends_with("contact-api/app.db")),
            DbLocation::Memory => panic!("expected file db"),
        }
    }

    #[test]
    fn port_must_be_numeric() {
        let err = load(&[("PORT", "abc")]).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
        assert_eq!(load(&[("PORT", "8080")]).unwrap().port, 8080);
    }

    #[test]
    fn db_location_forms() {
        assert_eq!(parse_db_location(":memory:").unwrap(), DbLocation::Memory);
        assert_eq!(parse_db_location("sqlite://").unwrap(), DbLocation::Memory);
        assert_eq!(
            parse_db_location("data/app.db").unwrap(),
            DbLocation::File(PathBuf::from("data/app.db"))
        );
        assert_eq!(
            parse_db_location("sqlite:///data/app.db").unwrap(),
            DbLocation::File(PathBuf::from("data/app.db"))
        );
        assert_eq!(
            parse_db_location("sqlite:////var/lib/app.db").unwrap(),
            DbLocation::File(PathBuf::from("/var/lib/app.db"))
        );
        assert!(parse_db_location("postgres://localhost/db").is_err());
    }

    #[test]
    fn bind_addr_combines_host_and_port() {
        let cfg = load(&[("HOST", "127.0.0.1"), ("PORT", "0")]).unwrap();
        assert_eq!(cfg.bind_addr().unwrap().to_string(), "127.0.0.1:0");
    }
}
