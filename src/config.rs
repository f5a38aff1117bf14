use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::services::pokeapi_service::POKEAPI_API_BASE;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub pokeapi_base_url: String,
    pub upstream_timeout: Duration,
    pub catalog_limit: u32,
}

impl Config {
    /// Lê a configuração das variáveis de ambiente (após `dotenv`)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&lookup, "PORT", 2020)?;
        let pokeapi_base_url =
            lookup("POKEAPI_BASE_URL").unwrap_or_else(|| POKEAPI_API_BASE.to_string());
        let timeout_secs = parse_or(&lookup, "POKEAPI_TIMEOUT_SECS", 10)?;
        let catalog_limit = parse_or(&lookup, "POKEAPI_CATALOG_LIMIT", 2000)?;

        Ok(Self {
            host,
            port,
            pokeapi_base_url,
            upstream_timeout: Duration::from_secs(timeout_secs),
            catalog_limit,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number, got {:?}", key, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:2020");
        assert_eq!(config.pokeapi_base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.upstream_timeout, Duration::from_secs(10));
        assert_eq!(config.catalog_limit, 2000);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("POKEAPI_BASE_URL", "http://localhost:9000/api/v2"),
            ("POKEAPI_TIMEOUT_SECS", " 3 "),
            ("POKEAPI_CATALOG_LIMIT", "151"),
        ])
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.pokeapi_base_url, "http://localhost:9000/api/v2");
        assert_eq!(config.upstream_timeout, Duration::from_secs(3));
        assert_eq!(config.catalog_limit, 151);
    }

    #[test]
    fn test_invalid_number_is_error() {
        let err = config_from(&[("PORT", "twenty")]).unwrap_err();

        assert!(err.to_string().contains("PORT"));
    }
}
