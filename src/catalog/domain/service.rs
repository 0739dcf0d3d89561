use async_trait::async_trait;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let records = self.book_repository.find_all().await?;
        Ok(records.iter().map(BookDto::from).collect())
    }

    async fn add_book(&self, title: &str) -> LibraryResult<BookDto> {
        let entity = BookEntity::new(title);
        let _ = self.book_repository.create(&entity).await?;
        tracing::info!("added book {}", entity.book_id);
        Ok(BookDto::from(&entity))
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }

    async fn comment_book(&self, id: &str, comment: &str) -> LibraryResult<BookDto> {
        let entity = self.book_repository.append_comment(id, comment).await?;
        tracing::info!("commented on book {}", id);
        Ok(BookDto::from(&entity))
    }

    async fn remove_book(&self, id: &str) -> LibraryResult<()> {
        let _ = self.book_repository.delete(id).await?;
        tracing::info!("removed book {}", id);
        Ok(())
    }

    async fn remove_all_books(&self) -> LibraryResult<usize> {
        let removed = self.book_repository.delete_all().await?;
        tracing::info!("removed {} books", removed);
        Ok(removed)
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            title: other.title.to_string(),
            comments: other.comments.clone(),
            commentcount: other.comment_count(),
        }
    }
}
