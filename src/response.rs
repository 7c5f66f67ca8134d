//! Response helpers shared by the handlers.

use axum::response::{Html, Redirect};

/// Where every mutation lands after it runs.
pub const BOOKS_PATH: &str = "/books";

pub fn page(html: String) -> Html<String> {
    Html(html)
}

/// 303 so the browser follows up with a GET.
pub fn redirect_to_books() -> Redirect {
    Redirect::to(BOOKS_PATH)
}
