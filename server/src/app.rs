use axum::{
    Router,
    extract::Request,
    http::{HeaderValue, header},
    middleware::{self, Next},
    response::Response,
};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;

use crate::routes;
use crate::state::AppState;

pub(crate) fn build_app(state: AppState) -> Router {
    let data_files: Router = Router::new()
        .fallback_service(ServeDir::new(state.data_dir()))
        .layer(middleware::from_fn(set_data_cache_control));

    Router::new()
        .route("/api/health", axum::routing::get(routes::api::health))
        .nest_service("/data", data_files)
        .fallback_service(ServeDir::new(state.site_dir()))
        .layer(CompressionLayer::new())
        .with_state(state)
}

/// The standings file is rewritten in place, so browsers must revalidate it.
async fn set_data_cache_control(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    if response.status().is_success() {
        response
            .headers_mut()
            .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    }
    response
}
