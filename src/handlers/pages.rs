//! Pages that render without touching the store.

use crate::model::DemoModel;
use crate::response::page;
use crate::views;
use axum::response::Html;

pub async fn index() -> Html<String> {
    page(views::index())
}

pub async fn about() -> Html<String> {
    page(views::about())
}

pub async fn data() -> Html<String> {
    page(views::data(&DemoModel::default()))
}
