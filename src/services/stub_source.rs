//! In-memory `PokemonSource` for tests

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use super::pokeapi_service::PokemonSource;
use crate::models::Pokemon;

#[derive(Default)]
pub struct StubSource {
    names: Vec<String>,
    delay: Option<Duration>,
    failing: Mutex<HashSet<String>>,
    catalog_down: bool,
    fetches: Mutex<HashMap<String, usize>>,
    total_fetches: AtomicUsize,
}

impl StubSource {
    pub fn new(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn failing(self, name: &str) -> Self {
        self.failing.lock().unwrap().insert(name.to_string());
        self
    }

    pub fn catalog_down(mut self) -> Self {
        self.catalog_down = true;
        self
    }

    pub fn recover(&self, name: &str) {
        self.failing.lock().unwrap().remove(name);
    }

    pub fn fetches(&self, name: &str) -> usize {
        self.fetches.lock().unwrap().get(name).copied().unwrap_or(0)
    }

    pub fn total_fetches(&self) -> usize {
        self.total_fetches.load(Ordering::SeqCst)
    }

    pub fn record(name: &str) -> Pokemon {
        Pokemon {
            id: name.len() as u32,
            name: name.to_string(),
            height: 4,
            weight: 60,
            is_default: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl PokemonSource for StubSource {
    async fn list_known_names(&self) -> Result<Vec<String>> {
        if self.catalog_down {
            return Err(anyhow!("PokeAPI error: 503 Service Unavailable"));
        }
        Ok(self.names.clone())
    }

    async fn fetch_pokemon(&self, name: &str) -> Result<Pokemon> {
        self.total_fetches.fetch_add(1, Ordering::SeqCst);
        *self.fetches.lock().unwrap().entry(name.to_string()).or_insert(0) += 1;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.lock().unwrap().contains(name) {
            return Err(anyhow!("PokeAPI error: 500 Internal Server Error"));
        }
        Ok(Self::record(name))
    }
}
