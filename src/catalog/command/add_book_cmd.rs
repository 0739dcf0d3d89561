use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookCreatedDto;
use crate::catalog::command::MISSING_TITLE_FIELD;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) title: Option<String>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub(crate) enum AddBookCommandResponse {
    Book(BookCreatedDto),
    MissingTitle(&'static str),
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let title = req.title.as_deref().map(str::trim).unwrap_or("");
        if title.is_empty() {
            return Ok(AddBookCommandResponse::MissingTitle(MISSING_TITLE_FIELD));
        }
        let book = self.catalog_service.add_book(title).await.map_err(CommandError::from)?;
        Ok(AddBookCommandResponse::Book(BookCreatedDto::from(&book)))
    }
}
