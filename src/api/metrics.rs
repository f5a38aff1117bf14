use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::utils::cache::PokemonCache;

static REQUEST_COUNT: AtomicU64 = AtomicU64::new(0);
static ERROR_COUNT: AtomicU64 = AtomicU64::new(0);

pub fn increment_request_count() {
    REQUEST_COUNT.fetch_add(1, Ordering::Relaxed);
}

pub fn increment_error_count() {
    ERROR_COUNT.fetch_add(1, Ordering::Relaxed);
}

/// (requests, errors) so far
pub fn counts() -> (u64, u64) {
    (
        REQUEST_COUNT.load(Ordering::Relaxed),
        ERROR_COUNT.load(Ordering::Relaxed),
    )
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MetricsResponse {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub pokemon_cache_hits_total: u64,
    pub pokemon_cache_misses_total: u64,
    pub pokemon_upstream_failures_total: u64,
    pub pokemon_known: usize,
    pub pokemon_cached: usize,
}

impl MetricsResponse {
    fn collect(cache: &PokemonCache) -> Self {
        let stats = cache.stats();

        let (requests, errors) = counts();

        Self {
            http_requests_total: requests,
            http_errors_total: errors,
            pokemon_cache_hits_total: stats.hits,
            pokemon_cache_misses_total: stats.misses,
            pokemon_upstream_failures_total: stats.upstream_failures,
            pokemon_known: stats.known,
            pokemon_cached: stats.fetched,
        }
    }

    fn render(&self) -> String {
        format!(
            "# HELP http_requests_total Total number of HTTP requests\n\
             # TYPE http_requests_total counter\n\
             http_requests_total {}\n\
             \n\
             # HELP http_errors_total Total number of HTTP errors\n\
             # TYPE http_errors_total counter\n\
             http_errors_total {}\n\
             \n\
             # HELP pokemon_cache_hits_total Requests served from the cache\n\
             # TYPE pokemon_cache_hits_total counter\n\
             pokemon_cache_hits_total {}\n\
             \n\
             # HELP pokemon_cache_misses_total Requests that went to PokeAPI\n\
             # TYPE pokemon_cache_misses_total counter\n\
             pokemon_cache_misses_total {}\n\
             \n\
             # HELP pokemon_upstream_failures_total Failed PokeAPI fetches\n\
             # TYPE pokemon_upstream_failures_total counter\n\
             pokemon_upstream_failures_total {}\n\
             \n\
             # HELP pokemon_known Pokemon names in the catalog\n\
             # TYPE pokemon_known gauge\n\
             pokemon_known {}\n\
             \n\
             # HELP pokemon_cached Pokemon records held in the cache\n\
             # TYPE pokemon_cached gauge\n\
             pokemon_cached {}\n",
            self.http_requests_total,
            self.http_errors_total,
            self.pokemon_cache_hits_total,
            self.pokemon_cache_misses_total,
            self.pokemon_upstream_failures_total,
            self.pokemon_known,
            self.pokemon_cached,
        )
    }
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses(
        (status = 200, description = "System metrics in Prometheus text format", body = String, content_type = "text/plain")
    )
)]
pub async fn get_metrics(cache: web::Data<PokemonCache>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(MetricsResponse::collect(&cache).render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::stub_source::StubSource;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_cache_counters_are_rendered() {
        let stub = Arc::new(StubSource::new(&[]));
        let cache = PokemonCache::seed(
            vec!["pikachu".to_string(), "bulbasaur".to_string()],
            stub,
        );
        cache.get("pikachu").await.unwrap();
        cache.get("pikachu").await.unwrap();

        let text = MetricsResponse::collect(&cache).render();

        assert!(text.contains("pokemon_cache_hits_total 1\n"));
        assert!(text.contains("pokemon_cache_misses_total 1\n"));
        assert!(text.contains("pokemon_upstream_failures_total 0\n"));
        assert!(text.contains("pokemon_known 2\n"));
        assert!(text.contains("pokemon_cached 1\n"));
    }
}
