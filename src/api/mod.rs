//! HTTP handlers and routing

pub mod books;
pub mod health;

use axum::{
    extract::{FromRequest, FromRequestParts},
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{error::AppError, AppState};

/// `axum::Form` whose rejections render through `AppError`
#[derive(FromRequest)]
#[from_request(via(axum::Form), rejection(AppError))]
pub struct FormData<T>(pub T);

/// `axum::extract::Query` whose rejections render through `AppError`
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Catalog
        .route("/", get(books::home))
        .route("/books", get(books::list_books))
        .route("/books/search", get(books::search_books))
        .route("/books/new", get(books::new_book_form).post(books::create_book))
        .route(
            "/books/:key",
            get(books::show_book_or_page).post(books::update_book),
        )
        .route("/books/:key/delete", post(books::delete_book))
        .nest_service("/static", static_files)
        .fallback(books::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
