pub mod add_book_cmd;
pub mod comment_book_cmd;
pub mod get_book_cmd;
pub mod list_books_cmd;
pub mod remove_all_books_cmd;
pub mod remove_book_cmd;

// Fixed literal responses standing in for status codes, part of the wire
// contract clients of this service match on verbatim.
pub(crate) const MISSING_TITLE_FIELD: &str = "missing required field title";
pub(crate) const MISSING_COMMENT_FIELD: &str = "missing required field comment";
pub(crate) const NO_BOOK_EXISTS: &str = "no book exists";
pub(crate) const DELETE_SUCCESSFUL: &str = "delete successful";
pub(crate) const COMPLETE_DELETE_SUCCESSFUL: &str = "complete delete successful";
