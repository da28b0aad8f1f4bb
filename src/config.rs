//! Database connection settings from `DB_*` environment keys (optionally via `.env`).

use crate::error::ConfigError;
use sqlx::postgres::PgConnectOptions;

pub const DEFAULT_PG_PORT: u16 = 5432;

/// Fixed listener address for the HTTP service.
pub const LISTEN_ADDR: &str = "0.0.0.0:8090";

/// Maintenance database used to check for and create the target database.
pub const ADMIN_DATABASE: &str = "postgres";

#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
}

impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .finish()
    }
}

impl DbConfig {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. `DB_PASSWORD` may be absent; the other keys are required.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingVar(key))
        };
        let username = required("DB_USERNAME")?;
        let hostname = required("DB_HOSTNAME")?;
        let database = required("DB_NAME")?;
        let password = lookup("DB_PASSWORD").unwrap_or_default();
        let (host, port) = split_host_port(&hostname)?;
        Ok(DbConfig {
            username,
            password,
            host,
            port,
            database,
        })
    }

    /// Options for the target database.
    pub fn connect_options(&self) -> PgConnectOptions {
        self.server_options().database(&self.database)
    }

    /// Options for the maintenance database on the same server.
    pub fn admin_connect_options(&self) -> PgConnectOptions {
        self.server_options().database(ADMIN_DATABASE)
    }

    fn server_options(&self) -> PgConnectOptions {
        let opts = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username);
        if self.password.is_empty() {
            opts
        } else {
            opts.password(&self.password)
        }
    }
}

fn split_host_port(hostname: &str) -> Result<(String, u16), ConfigError> {
    match hostname.rsplit_once(':') {
        Some((host, port)) if !host.is_empty() => {
            let port = port.parse::<u16>().map_err(|e| ConfigError::InvalidVar {
                key: "DB_HOSTNAME",
                reason: format!("bad port '{}': {}", port, e),
            })?;
            Ok((host.to_string(), port))
        }
        _ => Ok((hostname.to_string(), DEFAULT_PG_PORT)),
    }
}
