use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    extract::{DefaultBodyLimit, State},
    http::{header, Method, StatusCode},
    response::Json,
    routing::get,
    serve, Router,
};
use forgebom_database::{initialize_database, BomStore, PgBomStore};
use forgebom_rules::BomGenerator;
use forgebom_utils::{init_logging, AppConfig};
use serde_json::json;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

mod handlers;
mod metrics;
mod middleware;
mod routes;

use metrics::Metrics;
use middleware::request_id_middleware;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().unwrap_or_else(|_| {
        eprintln!("Failed to load configuration, using defaults");
        AppConfig::default()
    });

    init_logging(&config.logging)?;
    info!("Starting Forgebom BOM service");

    let db_config = forgebom_database::DatabaseConfig {
        postgres_url: config.database.postgres_url.clone(),
        max_connections: config.database.max_connections,
        connection_timeout: Duration::from_secs(config.database.connection_timeout_seconds),
    };
    let pool = initialize_database(&db_config).await?;
    info!("Database connection established");

    let store: Arc<dyn BomStore> = Arc::new(PgBomStore::new(pool));
    let generator = BomGenerator::from_config(store, &config.rules)?;
    let metrics = Metrics::register()?;

    let app = create_app(generator, metrics, &config);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = TcpListener::bind(&addr).await?;
    info!("BOM service listening on {}", addr);

    serve(listener, app).await?;

    Ok(())
}

fn create_app(generator: BomGenerator, metrics: Metrics, config: &AppConfig) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
        .route("/metrics", get(metrics_handler))
        .nest("/api/v1", routes::create_api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET, Method::POST])
                        .allow_headers([header::CONTENT_TYPE]),
                )
                .layer(DefaultBodyLimit::max(config.server.max_request_size))
                .layer(axum::middleware::from_fn(request_id_middleware)),
        )
        .with_state(AppState { generator, metrics })
}

#[derive(Clone)]
pub struct AppState {
    pub generator: BomGenerator,
    pub metrics: Metrics,
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "forgebom-service",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    match state.generator.store().ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ready", "database": "up" }))),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable", "database": "down" })),
            )
        }
    }
}

async fn metrics_handler() -> String {
    use prometheus::TextEncoder;

    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    encoder
        .encode_to_string(&metric_families)
        .unwrap_or_else(|_| "Error encoding metrics".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use forgebom_database::InMemoryBomStore;
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_app(store: Arc<InMemoryBomStore>) -> Router {
        let generator = BomGenerator::new(store);
        create_app(generator, Metrics::unregistered(), &AppConfig::default())
    }

    async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn adapter_body() -> Value {
        json!({
            "product_family": "High Tensile Adapter",
            "attributes": {
                "Type": "Female to Male",
                "From": "150mm Square Drive",
                "To": "130mm Square Drive"
            }
        })
    }

    #[tokio::test]
    async fn test_health_carries_request_id() {
        let app = test_app(Arc::new(InMemoryBomStore::new()));
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_readiness_with_in_memory_store() {
        let app = test_app(Arc::new(InMemoryBomStore::new()));
        let request = Request::builder().uri("/health/ready").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_preview_returns_lines_and_operations() {
        let app = test_app(Arc::new(InMemoryBomStore::new()));
        let (status, body) = post(app, "/api/v1/bom/preview", adapter_body()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["family"], "High Tensile Adapter");
        assert_eq!(body["lines"][0]["name"], "Drive Head - 150mm Square");
        assert_eq!(body["lines"][0]["uom"], "unit");
        assert_eq!(body["operations"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_generate_persists_bom() {
        let store = Arc::new(InMemoryBomStore::new());
        let app = test_app(store.clone());
        let mut body = adapter_body();
        body["product_id"] = json!(uuid::Uuid::new_v4());
        body["reference"] = json!("HTA 150 to 130");

        let (status, body) = post(app, "/api/v1/bom/generate", body).await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(body["bom_id"].is_string());
        assert_eq!(body["lines"].as_array().unwrap().len(), 4);
        assert_eq!(store.bom_count().await, 1);
    }

    #[tokio::test]
    async fn test_rule_failure_is_bad_request() {
        let app = test_app(Arc::new(InMemoryBomStore::new()));
        let body = json!({
            "product_family": "Pile Casing Stock",
            "attributes": {
                "Casing Type": "Standard",
                "Inside Diameter": "1200mm",
                "Wall Thickness": "16mm",
                "Casing Length": "6m"
            }
        });
        let (status, body) = post(app, "/api/v1/bom/preview", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("Oops! The 'Permanent Casing - OD1232 WT16' is not available."));
    }

    #[tokio::test]
    async fn test_unknown_family_is_unprocessable() {
        let app = test_app(Arc::new(InMemoryBomStore::new()));
        let body = json!({ "product_family": "Garden Gnome", "attributes": {} });
        let (status, body) = post(app, "/api/v1/bom/preview", body).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "UNSUPPORTED_TYPE");
    }
}
