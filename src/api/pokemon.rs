use actix_web::{web, HttpResponse};

use crate::utils::{cache::PokemonCache, error::AppError};

/// GET /pokemon/{name}
/// Retorna o registro do pokemon, do cache quando possível
#[utoipa::path(
    get,
    path = "/pokemon/{name}",
    tag = "Pokemon",
    params(
        ("name" = String, Path, description = "Pokemon name as listed by PokeAPI, e.g. pikachu")
    ),
    responses(
        (status = 200, description = "Pokemon record as returned by PokeAPI (JSON)"),
        (status = 400, description = "Missing name or not a known pokemon", body = String, content_type = "text/plain"),
        (status = 500, description = "Upstream fetch or rendering failed", body = String, content_type = "text/plain")
    )
)]
pub async fn get_pokemon(
    path: web::Path<String>,
    cache: web::Data<PokemonCache>,
) -> Result<HttpResponse, AppError> {
    let name = path.into_inner();
    log::debug!("🔎 Pokemon lookup [pokemon={}, state={:?}]", name, cache.state(&name));

    let lookup = cache.get(&name).await.map_err(|e| {
        match e.cause() {
            Some(cause) => {
                log::error!("❌ Error fetching pokemon record [pokemon={}]: {}", name, cause)
            }
            None => log::warn!("⚠️  Rejected pokemon request [pokemon={}]: {}", name, e),
        }
        e
    })?;

    let body = serde_json::to_vec(lookup.pokemon.as_ref()).map_err(|e| {
        log::error!("❌ JSON render error [pokemon={}]: {}", name, e);
        AppError::EncodingError {
            name: name.clone(),
            cause: e.to_string(),
        }
    })?;

    if lookup.from_cache {
        log::info!("📦 Served from cache [pokemon={}]", name);
    } else {
        log::info!("💾 Added to cache [pokemon={}]", name);
    }

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}

/// GET /pokemon/ sem nome
pub async fn missing_pokemon_name() -> Result<HttpResponse, AppError> {
    log::warn!("⚠️  Rejected pokemon request without a name");
    Err(AppError::missing_name())
}
