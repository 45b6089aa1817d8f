use std::env;
use std::net::SocketAddr;

use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub session_ttl_hours: i64,
    pub session_sweep_interval_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://stepline.db?mode=rwc".to_string());

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Validation(format!("BIND_ADDR is invalid: {}", e)))?;

        let session_ttl_hours = env::var("SESSION_TTL_HOURS")
            .unwrap_or_else(|_| "720".to_string())
            .parse::<i64>()
            .map_err(|e| AppError::Validation(format!("SESSION_TTL_HOURS is invalid: {}", e)))?;

        let session_sweep_interval_secs = env::var("SESSION_SWEEP_INTERVAL_SECS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse::<u64>()
            .map_err(|e| {
                AppError::Validation(format!("SESSION_SWEEP_INTERVAL_SECS is invalid: {}", e))
            })?;

        Ok(Self {
            database_url,
            bind_addr,
            session_ttl_hours,
            session_sweep_interval_secs,
        })
    }
}
