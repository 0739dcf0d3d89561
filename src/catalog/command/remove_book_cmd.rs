use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::command::{DELETE_SUCCESSFUL, NO_BOOK_EXISTS};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryError;

pub(crate) struct RemoveBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) book_id: String,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub(crate) enum RemoveBookCommandResponse {
    Deleted(&'static str),
    NoBook(&'static str),
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        match self.catalog_service.remove_book(req.book_id.as_str()).await {
            Ok(()) => Ok(RemoveBookCommandResponse::Deleted(DELETE_SUCCESSFUL)),
            Err(LibraryError::NotFound { .. }) => Ok(RemoveBookCommandResponse::NoBook(NO_BOOK_EXISTS)),
            Err(err) => Err(CommandError::from(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    async fn sut_svc() -> Arc<dyn CatalogService> {
        factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::InMemory).await
    }

    #[tokio::test]
    async fn test_should_remove_book() {
        let svc = sut_svc().await;
        let book = svc.add_book("test book").await.expect("should add book");

        let cmd = RemoveBookCommand::new(svc.clone());
        let res = cmd.execute(RemoveBookCommandRequest { book_id: book.book_id.to_string() })
            .await.expect("should remove book");
        assert_eq!(RemoveBookCommandResponse::Deleted("delete successful"), res);
        assert_eq!("\"delete successful\"",
                   serde_json::to_string(&res).expect("should serialize").as_str());

        // removing again reports the missing book
        let res = cmd.execute(RemoveBookCommandRequest { book_id: book.book_id.to_string() })
            .await.expect("should respond");
        assert_eq!(RemoveBookCommandResponse::NoBook("no book exists"), res);
    }

    #[tokio::test]
    async fn test_should_report_unknown_book() {
        let cmd = RemoveBookCommand::new(sut_svc().await);
        let res = cmd.execute(RemoveBookCommandRequest { book_id: "never-issued".to_string() })
            .await.expect("should respond");
        assert_eq!(RemoveBookCommandResponse::NoBook("no book exists"), res);
    }
}
