use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use std::time::Duration;

use crate::config::Config;
use crate::models::{NamedApiResourceList, Pokemon};

pub const POKEAPI_API_BASE: &str = "https://pokeapi.co/api/v2";

/// Upstream source of pokemon data.
///
/// `fetch_pokemon` is called from many request handlers at once, so
/// implementations must be safe to share across tasks.
#[async_trait]
pub trait PokemonSource: Send + Sync {
    /// Every pokemon name upstream knows about, in upstream order
    async fn list_known_names(&self) -> Result<Vec<String>>;

    /// Full record for one pokemon
    async fn fetch_pokemon(&self, name: &str) -> Result<Pokemon>;
}

/// PokeAPI client over a single pooled `reqwest::Client`
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
    catalog_limit: u32,
}

impl PokeApiClient {
    pub fn new(base_url: &str, timeout: Duration, catalog_limit: u32) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build PokeAPI HTTP client")?;

        log::info!(
            "🔌 PokeAPI client: {} (timeout {}s)",
            base_url,
            timeout.as_secs()
        );

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            catalog_limit,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.pokeapi_base_url,
            config.upstream_timeout,
            config.catalog_limit,
        )
    }

    fn catalog_url(&self) -> String {
        format!("{}/pokemon?limit={}", self.base_url, self.catalog_limit)
    }

    fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, urlencoding::encode(name))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            return Err(anyhow!("PokeAPI error: {} for {}", response.status(), url));
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse PokeAPI response from {}", url))
    }
}

#[async_trait]
impl PokemonSource for PokeApiClient {
    /// Busca a lista completa de nomes de pokemon
    async fn list_known_names(&self) -> Result<Vec<String>> {
        let url = self.catalog_url();
        log::debug!("📚 Fetching pokemon catalog: {}", url);

        let list: NamedApiResourceList = self.get_json(&url).await?;
        if (list.results.len() as u32) < list.count {
            log::warn!(
                "⚠️  Catalog truncated: {} of {} pokemon listed (raise POKEAPI_CATALOG_LIMIT)",
                list.results.len(),
                list.count
            );
        }

        Ok(list.names())
    }

    /// Busca o registro completo de um pokemon
    async fn fetch_pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = self.pokemon_url(name);
        log::debug!("🌐 Fetching pokemon from PokeAPI: {}", url);

        self.get_json(&url).await
    }
}
