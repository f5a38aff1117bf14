pub mod health;
pub mod metrics;
pub mod pokemon;
pub mod swagger;

use actix_web::web;

/// Rotas do serviço (compartilhado entre `main` e os testes)
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Health check
        .route("/health", web::get().to(health::health_check))
        // Metrics
        .route("/metrics", web::get().to(metrics::get_metrics))
        // Pokemon: cache em memória na frente da PokeAPI
        .route("/pokemon", web::get().to(pokemon::missing_pokemon_name))
        .route("/pokemon/", web::get().to(pokemon::missing_pokemon_name))
        .route("/pokemon/{name}", web::get().to(pokemon::get_pokemon));
}
