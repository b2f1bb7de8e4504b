use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub default_reset_password: String,
    pub reset_token_length: usize,
    pub seed_demo_data: bool,
    pub log_level: String,
    pub log_format: LogFormat,
    pub super_admin_email: String,
    pub super_admin_password: String,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Default for Config {
    fn default() -> Self {
        Self {
            default_reset_password: "password123".to_string(),
            reset_token_length: 32,
            seed_demo_data: true,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            super_admin_email: "super@admin.com".to_string(),
            super_admin_password: "superadmin".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        let defaults = Config::default();

        let config = Self {
            default_reset_password: get_env_or("DEFAULT_RESET_PASSWORD", defaults.default_reset_password),
            reset_token_length: get_env_parse_or("RESET_TOKEN_LENGTH", defaults.reset_token_length)?,
            seed_demo_data: get_env_parse_or("SEED_DEMO_DATA", defaults.seed_demo_data)?,
            log_level: get_env_or("LOG_LEVEL", defaults.log_level),
            log_format: get_env_parse_or("LOG_FORMAT", defaults.log_format)?,
            super_admin_email: get_env_or("SUPER_ADMIN_EMAIL", defaults.super_admin_email),
            super_admin_password: get_env_or("SUPER_ADMIN_PASSWORD", defaults.super_admin_password),
        };

        if config.default_reset_password.is_empty() {
            return Err(Error::Config(
                "DEFAULT_RESET_PASSWORD must not be empty".to_string(),
            ));
        }
        if config.reset_token_length == 0 {
            return Err(Error::Config(
                "RESET_TOKEN_LENGTH must be greater than zero".to_string(),
            ));
        }

        Ok(config)
    }
}

fn get_env_or(name: &str, default: String) -> String {
    env::var(name).unwrap_or(default)
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| Error::Config("Configuration has not been initialized".to_string()))
}
