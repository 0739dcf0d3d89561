use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps records in insertion order behind a single
// RwLock, so comment appends are serialized per record the same way the
// document store serializes conditional updates.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RwLock<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            books: RwLock::new(vec![]),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        if entity.title.trim().is_empty() {
            return Err(LibraryError::validation("book title must not be empty", None));
        }
        let mut books = self.books.write().await;
        if books.iter().any(|b| b.id() == entity.id()) {
            return Err(LibraryError::duplicate_key(format!("book already exists for {}", entity.book_id).as_str()));
        }
        books.push(entity.clone());
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let books = self.books.read().await;
        books.iter().find(|b| b.id() == id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        let before = books.len();
        books.retain(|b| b.id() != id);
        if books.len() == before {
            return Err(LibraryError::not_found(format!("book not found for {}", id).as_str()));
        }
        Ok(before - books.len())
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        let books = self.books.read().await;
        Ok(books.clone())
    }

    async fn delete_all(&self) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        let removed = books.len();
        books.clear();
        Ok(removed)
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn append_comment(&self, id: &str, comment: &str) -> LibraryResult<BookEntity> {
        let mut books = self.books.write().await;
        if let Some(book) = books.iter_mut().find(|b| b.book_id == id) {
            book.comments.push(comment.to_string());
            book.version += 1;
            book.updated_at = Utc::now().naive_utc();
            Ok(book.clone())
        } else {
            Err(LibraryError::not_found(format!("book not found for {}", id).as_str()))
        }
    }
}
