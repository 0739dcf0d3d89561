pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn add_book(&self, title: &str) -> LibraryResult<BookDto>;
    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto>;
    async fn comment_book(&self, id: &str, comment: &str) -> LibraryResult<BookDto>;
    async fn remove_book(&self, id: &str) -> LibraryResult<()>;
    async fn remove_all_books(&self) -> LibraryResult<usize>;
}
