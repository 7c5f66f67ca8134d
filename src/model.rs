//! Book entity and the view models handed to the renderer.

use serde::Deserialize;

/// A persisted row of the `Books` table.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub comments: Option<String>,
}

/// Form body posted by the create and edit views.
/// Fields stay optional so a missing value reaches the database as NULL.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BookForm {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Author")]
    pub author: Option<String>,
    #[serde(rename = "Comments")]
    pub comments: Option<String>,
}

/// Hardcoded fixture rendered by `/data`.
#[derive(Clone, Debug)]
pub struct DemoModel {
    pub title: &'static str,
    pub items: Vec<&'static str>,
}

impl Default for DemoModel {
    fn default() -> Self {
        DemoModel {
            title: "Test",
            items: vec!["one", "two", "three"],
        }
    }
}
