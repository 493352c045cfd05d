// src/shared/config.rs

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Application configuration.
///
/// Sources, lowest priority first: built-in defaults, `config/default.toml`,
/// then `APP_`-prefixed environment variables with `__` as the section
/// separator (e.g. `APP_DATABASE__URL`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: "postgres://localhost:5432/cafe".to_string(),
                max_connections: 5,
            },
            auth: AuthConfig {
                jwt_secret: String::new(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, figment::Error> {
        Self::from_figment(
            Figment::from(Serialized::defaults(AppConfig::default()))
                .merge(Toml::file("config/default.toml"))
                .merge(Env::prefixed("APP_").split("__")),
        )
    }

    pub fn from_figment(figment: Figment) -> Result<Self, figment::Error> {
        let config: AppConfig = figment.extract()?;
        if config.auth.jwt_secret.trim().is_empty() {
            return Err(figment::Error::from(
                "auth.jwt_secret must be set (APP_AUTH__JWT_SECRET)".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }
}
