//! Page and book routes. GET renders, POST mutates and redirects to /books.

use crate::handlers::{about, create, create_form, data, delete, delete_form, edit, edit_form, index, list};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn page_routes() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/about", get(about))
        .route("/data", get(data))
}

pub fn book_routes(state: AppState) -> Router {
    Router::new()
        .route("/books", get(list))
        .route("/create", get(create_form).post(create))
        .route("/edit/:id", get(edit_form).post(edit))
        .route("/delete/:id", get(delete_form).post(delete))
        .with_state(state)
}
