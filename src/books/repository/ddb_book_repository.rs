use std::cmp;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use chrono::Utc;
use std::collections::HashMap;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::utils::ddb::{parse_date_attribute, parse_item, parse_number_attribute, parse_string_attribute, parse_string_list_attribute, string_date};

#[derive(Debug)]
pub struct DDBBookRepository {
    client: Client,
    table_name: String,
    scan_page_size: usize,
}

impl DDBBookRepository {
    pub(crate) fn new(client: Client, table_name: &str, scan_page_size: usize) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
            scan_page_size,
        }
    }

    fn page_limit(&self) -> i32 {
        cmp::min(self.scan_page_size, 500) as i32
    }
}

#[async_trait]
impl Repository<BookEntity> for DDBBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        // the API layer validates first, this guards direct store callers
        if entity.title.trim().is_empty() {
            return Err(LibraryError::validation("book title must not be empty", None));
        }
        let table_name: &str = self.table_name.as_ref();
        let val = serde_json::to_value(entity)?;
        self.client
            .put_item()
            .table_name(table_name)
            .condition_expression("attribute_not_exists(book_id)")
            .set_item(Some(parse_item(val)?))
            .send()
            .await.map(|_| 1).map_err(|err| match err {
            SdkError::ServiceError(ref ctx) if ctx.err().is_conditional_check_failed_exception() => {
                LibraryError::duplicate_key(format!("book already exists for {}", entity.book_id).as_str())
            }
            other => LibraryError::from(other),
        })
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let table_name: &str = self.table_name.as_ref();
        self.client
            .get_item()
            .table_name(table_name)
            .key("book_id", AttributeValue::S(id.to_string()))
            .consistent_read(true)
            .send()
            .await.map_err(LibraryError::from).and_then(|out| {
            if let Some(map) = out.item() {
                Ok(map_to_book(map))
            } else {
                Err(LibraryError::not_found(format!("book not found for {}", id).as_str()))
            }
        })
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        self.client.delete_item()
            .table_name(table_name)
            .key("book_id", AttributeValue::S(id.to_string()))
            .return_values(ReturnValue::AllOld)
            .send()
            .await.map_err(LibraryError::from).and_then(|out| {
            if out.attributes().is_some() {
                Ok(1)
            } else {
                Err(LibraryError::not_found(format!("book not found for {}", id).as_str()))
            }
        })
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let mut records = vec![];
        let mut exclusive_start_key = None;
        loop {
            let out = self.client
                .scan()
                .table_name(table_name)
                .consistent_read(false)
                .set_exclusive_start_key(exclusive_start_key)
                .limit(self.page_limit())
                .send()
                .await.map_err(LibraryError::from)?;
            let def_items = vec![];
            let items = out.items.as_ref().unwrap_or(&def_items);
            records.extend(items.iter().map(map_to_book));
            exclusive_start_key = out.last_evaluated_key().cloned();
            if exclusive_start_key.is_none() {
                return Ok(records);
            }
        }
    }

    async fn delete_all(&self) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        let mut deleted = 0;
        // each pass deletes what it scanned, so rescanning from the start
        // terminates once the table is empty
        loop {
            let out = self.client
                .scan()
                .table_name(table_name)
                .consistent_read(true)
                .projection_expression("book_id")
                .limit(self.page_limit())
                .send()
                .await.map_err(LibraryError::from)?;
            let def_items = vec![];
            let items = out.items.as_ref().unwrap_or(&def_items);
            if items.is_empty() {
                return Ok(deleted);
            }
            for map in items {
                if let Some(id) = parse_string_attribute("book_id", map) {
                    self.client.delete_item()
                        .table_name(table_name)
                        .key("book_id", AttributeValue::S(id))
                        .send()
                        .await.map(|_| ()).map_err(LibraryError::from)?;
                    deleted += 1;
                }
            }
        }
    }
}

#[async_trait]
impl BookRepository for DDBBookRepository {
    async fn append_comment(&self, id: &str, comment: &str) -> LibraryResult<BookEntity> {
        let now = Utc::now().naive_utc();
        let table_name: &str = self.table_name.as_ref();
        self.client
            .update_item()
            .table_name(table_name)
            .key("book_id", AttributeValue::S(id.to_string()))
            .update_expression("SET comments = list_append(comments, :comment), version = version + :one, updated_at = :updated_at")
            .condition_expression("attribute_exists(book_id)")
            .expression_attribute_values(":comment", AttributeValue::L(vec![AttributeValue::S(comment.to_string())]))
            .expression_attribute_values(":one", AttributeValue::N("1".to_string()))
            .expression_attribute_values(":updated_at", string_date(now))
            .return_values(ReturnValue::AllNew)
            .send()
            .await.map_err(|err| match err {
            SdkError::ServiceError(ref ctx) if ctx.err().is_conditional_check_failed_exception() => {
                LibraryError::not_found(format!("book not found for {}", id).as_str())
            }
            other => LibraryError::from(other),
        }).and_then(|out| {
            if let Some(map) = out.attributes() {
                Ok(map_to_book(map))
            } else {
                Err(LibraryError::runtime(format!("no record returned for {}", id).as_str(), None))
            }
        })
    }
}

fn map_to_book(map: &HashMap<String, AttributeValue>) -> BookEntity {
    BookEntity {
        book_id: parse_string_attribute("book_id", map).unwrap_or(String::from("")),
        version: parse_number_attribute("version", map),
        title: parse_string_attribute("title", map).unwrap_or(String::from("")),
        comments: parse_string_list_attribute("comments", map),
        created_at: parse_date_attribute("created_at", map).unwrap_or(Utc::now().naive_utc()),
        updated_at: parse_date_attribute("updated_at", map).unwrap_or(Utc::now().naive_utc()),
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use aws_sdk_dynamodb::Client;
    use lazy_static::lazy_static;
    use uuid::Uuid;

    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::ddb_book_repository::DDBBookRepository;
    use crate::core::library::LibraryError;
    use crate::core::repository::{Repository, RepositoryStore};
    use crate::utils::ddb::{build_db_client, create_table, delete_table};

    lazy_static! {
        static ref CLIENT: AsyncOnce<Client> = AsyncOnce::new(async {
                let client = build_db_client(RepositoryStore::LocalDynamoDB).await;
                let _ = delete_table(&client, "books").await;
                let _ = create_table(&client, "books", "book_id").await;
                client
            });
    }

    #[tokio::test]
    async fn test_should_reject_create_without_title() {
        let client = build_db_client(RepositoryStore::LocalDynamoDB).await;
        let books_repo = DDBBookRepository::new(client, "books", 100);
        let book = BookEntity::new("  ");
        let res = books_repo.create(&book).await;
        assert!(matches!(res, Err(LibraryError::Validation { message: _, reason_code: _ })));
    }

    #[tokio::test]
    #[ignore = "needs dynamodb-local"]
    async fn test_should_create_get_books() {
        let books_repo = DDBBookRepository::new(CLIENT.get().await.clone(), "books", 100);
        let book = BookEntity::new("test book");
        let size = books_repo.create(&book).await.expect("should create book");
        assert_eq!(1, size);

        let loaded = books_repo.get(book.book_id.as_str()).await.expect("should return book");
        assert_eq!(book.book_id, loaded.book_id);
        assert_eq!(book.title, loaded.title);
        assert!(loaded.comments.is_empty());
    }

    #[tokio::test]
    #[ignore = "needs dynamodb-local"]
    async fn test_should_not_get_unknown_book() {
        let books_repo = DDBBookRepository::new(CLIENT.get().await.clone(), "books", 100);
        let res = books_repo.get(Uuid::new_v4().to_string().as_str()).await;
        assert!(matches!(res, Err(LibraryError::NotFound { message: _ })));
    }

    #[tokio::test]
    #[ignore = "needs dynamodb-local"]
    async fn test_should_append_comments_in_order() {
        let books_repo = DDBBookRepository::new(CLIENT.get().await.clone(), "books", 100);
        let book = BookEntity::new("test book");
        let _ = books_repo.create(&book).await.expect("should create book");

        let _ = books_repo.append_comment(book.book_id.as_str(), "first").await.expect("should append comment");
        let updated = books_repo.append_comment(book.book_id.as_str(), "second").await.expect("should append comment");
        assert_eq!(vec!["first".to_string(), "second".to_string()], updated.comments);
        assert_eq!(2, updated.version);
    }

    #[tokio::test]
    #[ignore = "needs dynamodb-local"]
    async fn test_should_not_append_comment_to_unknown_book() {
        let books_repo = DDBBookRepository::new(CLIENT.get().await.clone(), "books", 100);
        let res = books_repo.append_comment(Uuid::new_v4().to_string().as_str(), "lost").await;
        assert!(matches!(res, Err(LibraryError::NotFound { message: _ })));
    }

    #[tokio::test]
    #[ignore = "needs dynamodb-local"]
    async fn test_should_create_delete_books() {
        let books_repo = DDBBookRepository::new(CLIENT.get().await.clone(), "books", 100);
        let book = BookEntity::new("test book");
        let size = books_repo.create(&book).await.expect("should create book");
        assert_eq!(1, size);

        let deleted = books_repo.delete(book.book_id.as_str()).await.expect("should delete book");
        assert_eq!(1, deleted);

        let loaded = books_repo.get(book.book_id.as_str()).await;
        assert!(loaded.is_err());

        let res = books_repo.delete(book.book_id.as_str()).await;
        assert!(matches!(res, Err(LibraryError::NotFound { message: _ })));
    }

    #[tokio::test]
    #[ignore = "needs dynamodb-local"]
    async fn test_should_find_all_books() {
        let books_repo = DDBBookRepository::new(CLIENT.get().await.clone(), "books", 10);
        for i in 0..25 {
            let book = BookEntity::new(format!("title_{}", i).as_str());
            let _ = books_repo.create(&book).await.expect("should create book");
        }
        let res = books_repo.find_all().await.expect("should return books");
        assert!(res.len() >= 25);
    }

    #[tokio::test]
    #[ignore = "needs dynamodb-local"]
    async fn test_should_delete_all_books() {
        let client = CLIENT.get().await.clone();
        let _ = delete_table(&client, "books_wipe").await;
        let _ = create_table(&client, "books_wipe", "book_id").await;
        let books_repo = DDBBookRepository::new(client, "books_wipe", 10);
        for i in 0..15 {
            let book = BookEntity::new(format!("title_{}", i).as_str());
            let _ = books_repo.create(&book).await.expect("should create book");
        }
        let removed = books_repo.delete_all().await.expect("should delete all books");
        assert_eq!(15, removed);
        let res = books_repo.find_all().await.expect("should return books");
        assert!(res.is_empty());

        let removed = books_repo.delete_all().await.expect("should delete all books");
        assert_eq!(0, removed);
    }
}
