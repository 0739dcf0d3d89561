use serde::{Deserialize, Serialize};

// BookDto is the detail projection returned by get-by-id and comment-on-book.
// commentcount is derived at response time and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    #[serde(rename = "id")]
    pub book_id: String,
    pub title: String,
    pub comments: Vec<String>,
    pub commentcount: usize,
}

// BookSummaryDto is the list projection, deliberately omitting the comments
// themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookSummaryDto {
    #[serde(rename = "id")]
    pub book_id: String,
    pub title: String,
    pub commentcount: usize,
}

// BookCreatedDto is the creation response, just the assigned id and the title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookCreatedDto {
    #[serde(rename = "id")]
    pub book_id: String,
    pub title: String,
}

impl From<&BookDto> for BookSummaryDto {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            title: other.title.to_string(),
            commentcount: other.commentcount,
        }
    }
}

impl From<&BookDto> for BookCreatedDto {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            title: other.title.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use crate::books::dto::{BookCreatedDto, BookDto, BookSummaryDto};

    fn book_dto() -> BookDto {
        BookDto {
            book_id: "abc-123".to_string(),
            title: "test book".to_string(),
            comments: vec!["nice".to_string()],
            commentcount: 1,
        }
    }

    #[tokio::test]
    async fn test_should_serialize_detail_projection() {
        let val = serde_json::to_value(book_dto()).expect("should serialize book");
        assert_eq!(json!({
            "id": "abc-123",
            "title": "test book",
            "comments": ["nice"],
            "commentcount": 1,
        }), val);
    }

    #[tokio::test]
    async fn test_should_omit_comments_from_summary_projection() {
        let summary = BookSummaryDto::from(&book_dto());
        let val = serde_json::to_value(summary).expect("should serialize summary");
        assert_eq!(Value::Null, val["comments"]);
        assert_eq!(json!(1), val["commentcount"]);
        assert_eq!(json!("abc-123"), val["id"]);
    }

    #[tokio::test]
    async fn test_should_reduce_created_projection_to_id_and_title() {
        let created = BookCreatedDto::from(&book_dto());
        let val = serde_json::to_value(created).expect("should serialize created book");
        assert_eq!(json!({"id": "abc-123", "title": "test book"}), val);
    }
}
