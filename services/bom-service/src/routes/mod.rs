use axum::{routing::post, Router};

use crate::{handlers::*, AppState};

pub fn create_api_routes() -> Router<AppState> {
    Router::new()
        .route("/bom/preview", post(preview_bom))
        .route("/bom/generate", post(generate_bom))
}
