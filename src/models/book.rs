//! Book model, form payload and validation rules

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use crate::error::{AppError, AppResult};

/// Catalog entry as persisted in the `books` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub year: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated values for the four editable fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub year: i64,
}

/// Raw form submission for creating or editing a book.
///
/// Every field is kept as submitted text so the form can be re-rendered
/// with the user's values after a validation failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct BookForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please enter a value for 'title'"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Please enter a value for 'author'"))]
    pub author: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    #[validate(custom(function = "validate_year"))]
    pub year: String,
}

fn validate_year(year: &str) -> Result<(), ValidationError> {
    if year.is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some(Cow::from("Please enter a value for 'year'"));
        return Err(err);
    }
    if year.parse::<i64>().is_err() {
        let mut err = ValidationError::new("numeric");
        err.message = Some(Cow::from("Please use numeric entry for 'year'"));
        return Err(err);
    }
    Ok(())
}

impl BookForm {
    /// Copy of the form with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            genre: self.genre.trim().to_string(),
            year: self.year.trim().to_string(),
        }
    }

    /// Trim and validate the submission.
    ///
    /// Returns `AppError::Validation` with one entry per offending field.
    pub fn into_input(self) -> AppResult<BookInput> {
        let form = self.trimmed();
        form.validate().map_err(|e| AppError::Validation(e.into()))?;

        let year = form
            .year
            .parse::<i64>()
            .map_err(|e| AppError::Internal(format!("year passed validation but failed to parse: {}", e)))?;

        Ok(BookInput {
            title: form.title,
            author: form.author,
            genre: Some(form.genre).filter(|g| !g.is_empty()),
            year,
        })
    }
}

impl From<&Book> for BookForm {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone().unwrap_or_default(),
            year: book.year.to_string(),
        }
    }
}
