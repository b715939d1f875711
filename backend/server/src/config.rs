use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

use crate::error::StartupError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Redis,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "redis" => Ok(Self::Redis),
            other => Err(format!("unknown store backend {other:?}, expected memory or redis")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub store_backend: StoreBackend,
    pub redis_url: String,
    pub seed_data: bool,
}

impl Config {
    pub fn load() -> Result<Self, StartupError> {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Same as [`Config::load`] with `lookup` standing in for the environment.
    pub fn from_source<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            port: try_load(&lookup, "RUST_PORT", "8080")?,
            store_backend: try_load(&lookup, "STORE_BACKEND", "memory")?,
            redis_url: try_load(&lookup, "REDIS_URL", "redis://127.0.0.1:6379")?,
            seed_data: try_load(&lookup, "SEED_DATA", "true")?,
        })
    }
}

fn try_load<T, F>(lookup: &F, key: &'static str, default: &str) -> Result<T, StartupError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse::<T>().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        StartupError::Config {
            key,
            value: value.clone(),
            reason: e.to_string(),
        }
    })
}
