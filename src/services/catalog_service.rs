use std::sync::Arc;

use crate::services::pokeapi_service::PokemonSource;
use crate::utils::cache::PokemonCache;
use crate::utils::error::AppError;

/// Names known at startup plus the cache seeded from them
pub struct Catalog {
    pub names: Vec<String>,
    pub cache: PokemonCache,
}

/// Carrega o catálogo de pokemon uma única vez, antes do servidor subir.
/// Qualquer falha aqui é fatal: o processo não deve aceitar requisições.
pub async fn load_catalog(source: Arc<dyn PokemonSource>) -> Result<Catalog, AppError> {
    let names = source
        .list_known_names()
        .await
        .map_err(|e| AppError::StartupError(format!("Failed to load pokemon catalog: {:#}", e)))?;

    log::info!(
        "📚 Retrieved pokemon names [count={}]: {}",
        names.len(),
        names.join(", ")
    );

    let cache = PokemonCache::seed(names.iter().cloned(), source);

    Ok(Catalog { names, cache })
}
