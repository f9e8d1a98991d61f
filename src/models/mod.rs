//! Data models for the Book Case

pub mod book;
pub mod page;

// Re-export commonly used types
pub use book::{Book, BookForm, BookInput};
pub use page::{BookPage, PageRequest, SearchQuery, PER_PAGE};
