use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookSummaryDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ListBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListBooksCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListBooksCommandRequest {}

// serializes as a bare array of summary projections
#[derive(Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub(crate) struct ListBooksCommandResponse {
    pub books: Vec<BookSummaryDto>,
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let books = self.catalog_service.list_books().await.map_err(CommandError::from)?;
        Ok(ListBooksCommandResponse {
            books: books.iter().map(BookSummaryDto::from).collect(),
        })
    }
}
