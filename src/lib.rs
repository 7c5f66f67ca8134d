//! Book catalog: server-rendered CRUD views over a single SQLite table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;
pub mod views;

pub use config::AppConfig;
pub use error::AppError;
pub use model::{Book, BookForm, DemoModel};
pub use routes::{app, book_routes, health_routes, page_routes};
pub use state::AppState;
pub use store::BookStore;
