// Cache de pokemon em memória, compartilhado entre todos os handlers
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::Pokemon;
use crate::services::pokeapi_service::PokemonSource;
use crate::utils::error::AppError;

/// Lifecycle of one name: `Unknown -> Unfetched -> Fetched`, never backwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    Unknown,
    Unfetched,
    Fetched,
}

/// Result of a successful `get`
#[derive(Debug, Clone)]
pub struct Lookup {
    pub pokemon: Arc<Pokemon>,
    pub from_cache: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub known: usize,
    pub fetched: usize,
    pub hits: u64,
    pub misses: u64,
    pub upstream_failures: u64,
}

/// Read-through cache keyed by pokemon name.
///
/// Every catalog name is seeded with `None`; a name missing from the map is
/// unknown. The map is only touched under `entries`' read or write lock and
/// neither lock is held while upstream is being called.
pub struct PokemonCache {
    entries: RwLock<HashMap<String, Option<Arc<Pokemon>>>>,
    source: Arc<dyn PokemonSource>,
    hits: AtomicU64,
    misses: AtomicU64,
    upstream_failures: AtomicU64,
}

impl PokemonCache {
    /// Builds the cache with one empty placeholder per catalog name
    pub fn seed<I>(names: I, source: Arc<dyn PokemonSource>) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let entries = names.into_iter().map(|name| (name, None)).collect();

        Self {
            entries: RwLock::new(entries),
            source,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            upstream_failures: AtomicU64::new(0),
        }
    }

    // Writers only ever replace a single value, so a poisoned map is still consistent
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Option<Arc<Pokemon>>>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Option<Arc<Pokemon>>>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Resolves `name` to a record: served from cache when already fetched,
    /// otherwise fetched from upstream, stored and returned.
    pub async fn get(&self, name: &str) -> Result<Lookup, AppError> {
        if name.is_empty() {
            return Err(AppError::missing_name());
        }

        let cached = match self.read().get(name) {
            None => return Err(AppError::UnknownEntity(name.to_string())),
            Some(entry) => entry.clone(),
        };

        if let Some(pokemon) = cached {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(Lookup {
                pokemon,
                from_cache: true,
            });
        }

        self.misses.fetch_add(1, Ordering::Relaxed);

        let fetched = self
            .source
            .fetch_pokemon(name)
            .await
            .and_then(|pokemon| {
                if pokemon.is_empty() {
                    Err(anyhow::anyhow!("PokeAPI returned an empty record"))
                } else {
                    Ok(pokemon)
                }
            });

        let pokemon = match fetched {
            Ok(pokemon) => Arc::new(pokemon),
            Err(e) => {
                self.upstream_failures.fetch_add(1, Ordering::Relaxed);
                return Err(AppError::UpstreamError {
                    name: name.to_string(),
                    cause: format!("{:#}", e),
                });
            }
        };

        // Concurrent misses for the same name may both land here; last writer wins
        self.write().insert(name.to_string(), Some(Arc::clone(&pokemon)));

        Ok(Lookup {
            pokemon,
            from_cache: false,
        })
    }

    pub fn state(&self, name: &str) -> EntryState {
        match self.read().get(name) {
            None => EntryState::Unknown,
            Some(None) => EntryState::Unfetched,
            Some(Some(_)) => EntryState::Fetched,
        }
    }

    pub fn stats(&self) -> CacheStats {
        let (known, fetched) = {
            let entries = self.read();
            (entries.len(), entries.values().filter(|e| e.is_some()).count())
        };

        CacheStats {
            known,
            fetched,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            upstream_failures: self.upstream_failures.load(Ordering::Relaxed),
        }
    }
}
