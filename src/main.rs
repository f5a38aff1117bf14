mod api;
mod config;
mod middleware;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::services::{catalog_service, PokeApiClient, PokemonSource};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    log::info!("🚀 Starting Pokemon Proxy...");

    let result = run().await;
    if let Err(e) = &result {
        log::error!("❌ Critical error: {}", e);
    }

    log::info!("👋 Exiting");
    result
}

async fn run() -> std::io::Result<()> {
    let config = Config::from_env().map_err(to_io_error)?;

    let source: Arc<dyn PokemonSource> =
        Arc::new(PokeApiClient::from_config(&config).map_err(to_io_error)?);

    // 📚 Catálogo precisa estar carregado antes de aceitar qualquer requisição
    let catalog = catalog_service::load_catalog(source)
        .await
        .map_err(to_io_error)?;

    let cache = web::Data::new(catalog.cache);

    log::info!("✅ Cache seeded with {} pokemon", catalog.names.len());
    log::info!("🌐 Server starting on {}", config.bind_address());
    log::info!("📚 Swagger UI available at: http://{}/swagger-ui/", config.bind_address());
    log::info!("📄 OpenAPI spec at: http://{}/api-docs/openapi.json", config.bind_address());

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(cache.clone())
            .wrap(cors)
            .wrap(middleware::RequestMetrics)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi),
            )
            .configure(api::configure)
    })
    .bind(config.bind_address())?
    .run()
    .await
}

fn to_io_error<E: std::fmt::Display>(e: E) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, format!("{:#}", e))
}
