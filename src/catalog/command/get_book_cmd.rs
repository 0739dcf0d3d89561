use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::command::NO_BOOK_EXISTS;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryError;

pub(crate) struct GetBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetBookCommandRequest {
    pub(crate) book_id: String,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub(crate) enum GetBookCommandResponse {
    Book(BookDto),
    NoBook(&'static str),
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        match self.catalog_service.find_book_by_id(req.book_id.as_str()).await {
            Ok(book) => Ok(GetBookCommandResponse::Book(book)),
            Err(LibraryError::NotFound { .. }) => Ok(GetBookCommandResponse::NoBook(NO_BOOK_EXISTS)),
            Err(err) => Err(CommandError::from(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use serde_json::json;
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    async fn sut_svc() -> Arc<dyn CatalogService> {
        factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::InMemory).await
    }

    #[tokio::test]
    async fn test_should_get_fresh_book_with_empty_comments() {
        let svc = sut_svc().await;
        let book = svc.add_book("test book").await.expect("should add book");

        let cmd = GetBookCommand::new(svc);
        let res = cmd.execute(GetBookCommandRequest { book_id: book.book_id.to_string() })
            .await.expect("should return book");
        let val = serde_json::to_value(&res).expect("should serialize");
        assert_eq!(json!({
            "id": book.book_id,
            "title": "test book",
            "comments": [],
            "commentcount": 0,
        }), val);
    }

    #[tokio::test]
    async fn test_should_report_unknown_book() {
        let cmd = GetBookCommand::new(sut_svc().await);
        let res = cmd.execute(GetBookCommandRequest { book_id: "never-issued".to_string() })
            .await.expect("should respond");
        assert_eq!(GetBookCommandResponse::NoBook("no book exists"), res);
        assert_eq!("\"no book exists\"",
                   serde_json::to_string(&res).expect("should serialize").as_str());
    }
}
