//! HTTP boundary: routes, request decoding, JSON error rendering.

mod contact;
mod sitemap;

use crate::error::AppError;
use crate::infra::ContactStore;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub use sitemap::ENDPOINTS;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContactStore>,
}

pub fn router(store: Arc<dyn ContactStore>) -> Router {
    Router::new()
        .route("/", get(sitemap::sitemap))
        .route("/contact", post(contact::create_contact))
        .route("/contact/", post(contact::create_contact))
        // legacy path, same intake flow
        .route("/v2/contact", post(contact::create_contact))
        .route("/v2/contact/", post(contact::create_contact))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CorsLayer::permissive())
        .with_state(AppState { store })
}

async fn not_found() -> AppError {
    AppError::NotFound("Not found".into())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
