//! HTTP handlers for the static pages and the book CRUD views.

pub mod books;
pub mod pages;
pub use books::*;
pub use pages::*;
