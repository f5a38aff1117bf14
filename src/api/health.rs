use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::utils::cache::PokemonCache;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: i64,
    pub known_pokemon: usize,
    pub cached_pokemon: usize,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(cache: web::Data<PokemonCache>) -> impl Responder {
    let stats = cache.stats();

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().timestamp(),
        known_pokemon: stats.known,
        cached_pokemon: stats.fetched,
    })
}
