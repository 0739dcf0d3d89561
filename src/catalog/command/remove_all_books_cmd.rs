use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::command::COMPLETE_DELETE_SUCCESSFUL;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct RemoveAllBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveAllBooksCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RemoveAllBooksCommandRequest {}

#[derive(Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub(crate) struct RemoveAllBooksCommandResponse {
    pub message: &'static str,
}

#[async_trait]
impl Command<RemoveAllBooksCommandRequest, RemoveAllBooksCommandResponse> for RemoveAllBooksCommand {
    async fn execute(&self, _req: RemoveAllBooksCommandRequest) -> Result<RemoveAllBooksCommandResponse, CommandError> {
        let _ = self.catalog_service.remove_all_books().await.map_err(CommandError::from)?;
        Ok(RemoveAllBooksCommandResponse { message: COMPLETE_DELETE_SUCCESSFUL })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::catalog::command::remove_all_books_cmd::{RemoveAllBooksCommand, RemoveAllBooksCommandRequest, RemoveAllBooksCommandResponse};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    async fn sut_svc() -> Arc<dyn CatalogService> {
        factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::InMemory).await
    }

    #[tokio::test]
    async fn test_should_remove_all_books() {
        let svc = sut_svc().await;
        for i in 0..3 {
            let _ = svc.add_book(format!("title_{}", i).as_str()).await.expect("should add book");
        }

        let cmd = RemoveAllBooksCommand::new(svc.clone());
        let res = cmd.execute(RemoveAllBooksCommandRequest::default()).await.expect("should remove all books");
        assert_eq!(RemoveAllBooksCommandResponse { message: "complete delete successful" }, res);
        assert_eq!("\"complete delete successful\"",
                   serde_json::to_string(&res).expect("should serialize").as_str());
        assert!(svc.list_books().await.expect("should list books").is_empty());

        // an empty store still reports the same outcome
        let res = cmd.execute(RemoveAllBooksCommandRequest::default()).await.expect("should remove all books");
        assert_eq!(RemoveAllBooksCommandResponse { message: "complete delete successful" }, res);
    }
}
