use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // persist a new entity, failing on an existing id
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // load an entity, NotFound when the id does not resolve
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // remove an entity, NotFound when it did not exist
    async fn delete(&self, id: &str) -> LibraryResult<usize>;

    // load every entity in store order
    async fn find_all(&self) -> LibraryResult<Vec<Entity>>;

    // remove every entity, returning how many were removed
    async fn delete_all(&self) -> LibraryResult<usize>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub(crate) enum RepositoryStore {
    DynamoDB,
    LocalDynamoDB,
    InMemory,
}
