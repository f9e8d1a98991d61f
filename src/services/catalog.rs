//! Catalog management service

use crate::{
    error::AppResult,
    models::{Book, BookForm, BookPage, PageRequest, PER_PAGE},
    repository::{books::SEARCH_COLUMNS, filter::ContainsAny, Repository},
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Every book, ordered by id
    pub async fn list_all(&self) -> AppResult<Vec<Book>> {
        self.repository.books_list_all().await
    }

    /// One page of the unfiltered catalog
    pub async fn browse(&self, page: PageRequest) -> AppResult<BookPage> {
        let (books, total) = self.repository.books_page(None, page).await?;
        Ok(BookPage {
            books,
            total,
            page: page.page(),
            per_page: PER_PAGE,
            search: None,
        })
    }

    /// One page of books whose title, author, genre or year contains `term`
    pub async fn search(&self, term: &str, page: PageRequest) -> AppResult<BookPage> {
        let filter = ContainsAny::new(&SEARCH_COLUMNS, term);
        let (books, total) = self.repository.books_page(Some(&filter), page).await?;
        tracing::debug!(term, total, page = page.page(), "catalog search");
        Ok(BookPage {
            books,
            total,
            page: page.page(),
            per_page: PER_PAGE,
            search: Some(term.to_string()),
        })
    }

    /// Get book by ID
    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.repository.books_get_by_id(id).await
    }

    /// Validate a submission and insert it
    pub async fn create_book(&self, form: BookForm) -> AppResult<Book> {
        let input = form.into_input()?;
        let created = self.repository.books_create(&input).await?;
        tracing::info!(book_id = created.id, title = %created.title, "book created");
        Ok(created)
    }

    /// Validate a submission and overwrite the book's editable fields
    pub async fn update_book(&self, id: i64, form: BookForm) -> AppResult<Book> {
        let input = form.into_input()?;
        let updated = self.repository.books_update(id, &input).await?;
        tracing::info!(book_id = id, "book updated");
        Ok(updated)
    }

    /// Delete a book; a missing id is reported as not found
    pub async fn delete_book(&self, id: i64) -> AppResult<()> {
        self.repository.books_delete(id).await?;
        tracing::info!(book_id = id, "book deleted");
        Ok(())
    }
}
