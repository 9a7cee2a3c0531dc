//! Server configuration from environment variables
//!
//! | Variable         | Default   |
//! |------------------|-----------|
//! | `BIND_ADDR`      | `0.0.0.0` |
//! | `PORT`           | `3000`    |
//! | `CACHE_TTL_SECS` | `300`     |
//! | `CACHE_CAPACITY` | `64`      |
//!
//! `CACHE_TTL_SECS` is capped at [`MAX_CACHE_TTL_SECS`].

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// One year
pub const MAX_CACHE_TTL_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub cache_ttl: Duration,
    pub cache_capacity: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            cache_ttl: Duration::from_secs(300),
            cache_capacity: 64,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup. Unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            bind_addr: parse_var(&lookup, "BIND_ADDR")?.unwrap_or(defaults.bind_addr),
            port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
            cache_ttl: parse_cache_ttl(&lookup)?.unwrap_or(defaults.cache_ttl),
            cache_capacity: parse_var(&lookup, "CACHE_CAPACITY")?.unwrap_or(defaults.cache_capacity),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_cache_ttl<F>(lookup: &F) -> Result<Option<Duration>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    const VAR: &str = "CACHE_TTL_SECS";
    match parse_var::<F, u64>(lookup, VAR)? {
        Some(secs) if secs > MAX_CACHE_TTL_SECS => Err(ConfigError::Invalid {
            var: VAR,
            value: secs.to_string(),
        }),
        secs => Ok(secs.map(Duration::from_secs)),
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
