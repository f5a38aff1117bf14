use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pokemon Proxy API",
        version = "1.0.0",
        description = "Caching proxy in front of PokeAPI. \n\n**Caching:** every pokemon listed by PokeAPI at startup can be requested; the first request fetches the record upstream, later requests are served from memory.\n\n**Features:**\n- Pokemon records by name\n- Health monitoring and metrics"
    ),
    paths(
        // Pokemon
        crate::api::pokemon::get_pokemon,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Pokemon", description = "Pokemon records, served from the in-memory cache or fetched from PokeAPI."),
        (name = "Health", description = "Health check and system metrics endpoints for monitoring service status."),
    )
)]
pub struct ApiDoc;
