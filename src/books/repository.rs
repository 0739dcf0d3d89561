pub mod ddb_book_repository;
pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

#[async_trait]
pub(crate) trait BookRepository: Repository<BookEntity> {
    // atomically appends one comment to the end of the record's comment list
    // and returns the updated record, NotFound when the id does not resolve
    async fn append_comment(&self, id: &str, comment: &str) -> LibraryResult<BookEntity>;
}
