use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::command::{MISSING_COMMENT_FIELD, NO_BOOK_EXISTS};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryError;

pub(crate) struct CommentBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl CommentBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CommentBookCommandRequest {
    #[serde(default)]
    pub(crate) book_id: String,
    pub(crate) comment: Option<String>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub(crate) enum CommentBookCommandResponse {
    Book(BookDto),
    MissingComment(&'static str),
    NoBook(&'static str),
}

#[async_trait]
impl Command<CommentBookCommandRequest, CommentBookCommandResponse> for CommentBookCommand {
    async fn execute(&self, req: CommentBookCommandRequest) -> Result<CommentBookCommandResponse, CommandError> {
        let comment = req.comment.as_deref().map(str::trim).unwrap_or("");
        // the field check deliberately precedes the existence check, a missing
        // comment on an unknown id still reports the missing field
        if comment.is_empty() {
            return Ok(CommentBookCommandResponse::MissingComment(MISSING_COMMENT_FIELD));
        }
        match self.catalog_service.comment_book(req.book_id.as_str(), comment).await {
            Ok(book) => Ok(CommentBookCommandResponse::Book(book)),
            Err(LibraryError::NotFound { .. }) => Ok(CommentBookCommandResponse::NoBook(NO_BOOK_EXISTS)),
            Err(err) => Err(CommandError::from(err)),
        }
    }
}
