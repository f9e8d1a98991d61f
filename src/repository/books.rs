//! Book domain methods on Repository

use chrono::Utc;
use sqlx::Row;

use super::{filter::ContainsAny, Repository};
use crate::{
    error::{AppError, AppResult},
    models::{Book, BookInput, PageRequest},
};

const BOOK_COLUMNS: &str = "id, title, author, genre, year, created_at, updated_at";

/// Columns a search term is matched against
pub const SEARCH_COLUMNS: [&str; 4] = ["title", "author", "genre", "CAST(year AS TEXT)"];

impl Repository {
    // =========================================================================
    // READ
    // =========================================================================

    /// Every book, ordered by id
    pub async fn books_list_all(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM books ORDER BY id ASC",
            BOOK_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get book by ID
    pub async fn books_get_by_id(&self, id: i64) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(&format!("SELECT {} FROM books WHERE id = ?", BOOK_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// One page of books, optionally filtered, plus the size of the whole set
    pub async fn books_page(
        &self,
        filter: Option<&ContainsAny>,
        page: PageRequest,
    ) -> AppResult<(Vec<Book>, i64)> {
        let (where_clause, params) = match filter {
            Some(f) => {
                let (sql, params) = f.to_sql();
                (format!(" WHERE {}", sql), params)
            }
            None => (String::new(), Vec::new()),
        };

        let count_sql = format!("SELECT COUNT(*) FROM books{}", where_clause);
        let mut count_query = sqlx::query(&count_sql);
        for p in &params {
            count_query = count_query.bind(p);
        }
        let total: i64 = count_query.fetch_one(&self.pool).await?.try_get(0)?;

        let select_sql = format!(
            "SELECT {} FROM books{} ORDER BY id ASC LIMIT ? OFFSET ?",
            BOOK_COLUMNS, where_clause
        );
        let mut select_query = sqlx::query_as::<_, Book>(&select_sql);
        for p in &params {
            select_query = select_query.bind(p);
        }
        let books = select_query
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok((books, total))
    }

    // =========================================================================
    // WRITE
    // =========================================================================

    /// Insert a book; the store assigns the id
    pub async fn books_create(&self, input: &BookInput) -> AppResult<Book> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, Book>(&format!(
            r#"
            INSERT INTO books (title, author, genre, year, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING {}
            "#,
            BOOK_COLUMNS
        ))
        .bind(&input.title)
        .bind(&input.author)
        .bind(&input.genre)
        .bind(input.year)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Overwrite the four editable fields of a book
    pub async fn books_update(&self, id: i64, input: &BookInput) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(&format!(
            r#"
            UPDATE books
            SET title = ?, author = ?, genre = ?, year = ?, updated_at = ?
            WHERE id = ?
            RETURNING {}
            "#,
            BOOK_COLUMNS
        ))
        .bind(&input.title)
        .bind(&input.author)
        .bind(&input.genre)
        .bind(input.year)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Delete a book
    pub async fn books_delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(())
    }
}
