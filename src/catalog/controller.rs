use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::Value;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::comment_book_cmd::{CommentBookCommand, CommentBookCommandRequest, CommentBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_all_books_cmd::{RemoveAllBooksCommand, RemoveAllBooksCommandRequest, RemoveAllBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(state.catalog.clone()).execute(ListBooksCommandRequest::default()).await?;
    Ok(Json(res))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Option<Json<Value>>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    // an absent or non-json body behaves like an empty document, the command
    // reports the missing field
    let req: AddBookCommandRequest = match json {
        Some(json) => serde_json::from_value(json.0).map_err(json_to_server_error)?,
        None => AddBookCommandRequest::default(),
    };
    let res = AddBookCommand::new(state.catalog.clone()).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { book_id };
    let res = GetBookCommand::new(state.catalog.clone()).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn comment_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    json: Option<Json<Value>>) -> Result<Json<CommentBookCommandResponse>, ServerError> {
    let mut req: CommentBookCommandRequest = match json {
        Some(json) => serde_json::from_value(json.0).map_err(json_to_server_error)?,
        None => CommentBookCommandRequest::default(),
    };
    req.book_id = book_id;
    let res = CommentBookCommand::new(state.catalog.clone()).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest { book_id };
    let res = RemoveBookCommand::new(state.catalog.clone()).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_all_books(
    State(state): State<AppState>) -> Result<Json<RemoveAllBooksCommandResponse>, ServerError> {
    let res = RemoveAllBooksCommand::new(state.catalog.clone()).execute(RemoveAllBooksCommandRequest::default()).await?;
    Ok(Json(res))
}
