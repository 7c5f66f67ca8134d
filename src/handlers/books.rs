//! Book handlers: each one issues at most one statement, then renders a view or redirects.

use crate::error::AppError;
use crate::model::BookForm;
use crate::response::{page, redirect_to_books};
use crate::state::AppState;
use crate::views;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};

pub async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let books = state.store.list_all().await?;
    Ok(page(views::books(&books)))
}

pub async fn create_form() -> Html<String> {
    page(views::create())
}

pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<BookForm>,
) -> Result<Redirect, AppError> {
    let id = state
        .store
        .insert(
            form.title.as_deref(),
            form.author.as_deref(),
            form.comments.as_deref(),
        )
        .await?;
    tracing::info!(id, "created book");
    Ok(redirect_to_books())
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let book = state.store.get_by_id(id).await?;
    Ok(page(views::edit(id, book.as_ref())))
}

pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<BookForm>,
) -> Result<Redirect, AppError> {
    state
        .store
        .update(
            id,
            form.title.as_deref(),
            form.author.as_deref(),
            form.comments.as_deref(),
        )
        .await?;
    Ok(redirect_to_books())
}

pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let book = state.store.get_by_id(id).await?;
    Ok(page(views::delete(id, book.as_ref())))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    state.store.delete_by_id(id).await?;
    Ok(redirect_to_books())
}
