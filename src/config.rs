use std::{env, fmt::Display, str::FromStr};

use anyhow::Context;

// ============================================================================
// Configuration
// ============================================================================
//
// Read from environment variables; anything unset falls back to a default and
// is logged. Unparsable values are a startup error.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub metrics_port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub seed_menu: bool,
    pub argon2_memory_kib: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: try_load(&lookup, "FOOD_HOST", "0.0.0.0")?,
            port: try_load(&lookup, "FOOD_PORT", "5000")?,
            metrics_port: try_load(&lookup, "FOOD_METRICS_PORT", "9090")?,
            database_url: try_load(&lookup, "DATABASE_URL", "sqlite://food_orders.db")?,
            db_max_connections: try_load(&lookup, "FOOD_DB_MAX_CONNECTIONS", "5")?,
            seed_menu: try_load(&lookup, "FOOD_SEED_MENU", "true")?,
            argon2_memory_kib: try_load(&lookup, "FOOD_ARGON2_MEMORY_KIB", "19456")?,
        })
    }
}

fn try_load<T, F>(lookup: &F, key: &str, default: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).unwrap_or_else(|| {
        tracing::info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("Invalid {key} value: {raw:?}"))
}
