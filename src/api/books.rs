//! Book catalog pages and form submissions

use std::str::FromStr;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use maud::Markup;

use super::{FormData, QueryParams};
use crate::{
    error::{AppError, AppResult, FormErrors},
    models::{BookForm, PageRequest, SearchQuery},
    views, AppState,
};

/// Path segment under `/books/` that is either `page=<n>` or a book id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookPath {
    Page(PageRequest),
    Id(i64),
}

impl FromStr for BookPath {
    type Err = AppError;

    fn from_str(segment: &str) -> Result<Self, Self::Err> {
        match segment.strip_prefix("page=") {
            Some(raw) => parse_page(raw).map(BookPath::Page),
            None => parse_id(segment).map(BookPath::Id),
        }
    }
}

fn parse_page(raw: &str) -> AppResult<PageRequest> {
    raw.parse::<PageRequest>()
        .map_err(|_| AppError::BadRequest(format!("Invalid page number '{}'", raw)))
}

fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| AppError::NotFound(format!("Book {} not found", raw)))
}

/// 302 Found to `location`
fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// `GET /`
pub async fn home() -> Response {
    found("/books")
}

/// `GET /books`
pub async fn list_books(State(state): State<AppState>) -> AppResult<Markup> {
    let list = state.services.catalog.browse(PageRequest::first()).await?;
    Ok(views::books::index(&list))
}

/// `GET /books/search?search=<text>&page=<n>`
pub async fn search_books(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<SearchQuery>,
) -> AppResult<Markup> {
    let page = match query.page.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => parse_page(raw)?,
        _ => PageRequest::first(),
    };
    let list = state.services.catalog.search(&query.search, page).await?;
    Ok(views::books::index(&list))
}

/// `GET /books/page=<n>` or `GET /books/<id>`
pub async fn show_book_or_page(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> AppResult<Markup> {
    match segment.parse::<BookPath>()? {
        BookPath::Page(page) => {
            let list = state.services.catalog.browse(page).await?;
            Ok(views::books::index(&list))
        }
        BookPath::Id(id) => {
            let book = state.services.catalog.get_book(id).await?;
            Ok(views::books::update_book(
                book.id,
                &BookForm::from(&book),
                &FormErrors::new(),
            ))
        }
    }
}

/// `GET /books/new`
pub async fn new_book_form() -> Markup {
    views::books::new_book(&BookForm::default(), &FormErrors::new())
}

/// `POST /books/new`
pub async fn create_book(
    State(state): State<AppState>,
    FormData(form): FormData<BookForm>,
) -> AppResult<Response> {
    match state.services.catalog.create_book(form.clone()).await {
        Ok(_) => Ok(found("/books")),
        Err(AppError::Validation(errors)) => {
            Ok(views::books::new_book(&form, &errors).into_response())
        }
        Err(e) => Err(e),
    }
}

/// `POST /books/<id>`
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    FormData(form): FormData<BookForm>,
) -> AppResult<Response> {
    let id = parse_id(&id)?;
    match state.services.catalog.update_book(id, form.clone()).await {
        Ok(_) => Ok(found("/books")),
        Err(AppError::Validation(errors)) => {
            Ok(views::books::update_book(id, &form, &errors).into_response())
        }
        Err(e) => Err(e),
    }
}

/// `POST /books/<id>/delete`
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_id(&id)?;
    state.services.catalog.delete_book(id).await?;
    Ok(found("/books"))
}

/// Fallback for unmatched routes
pub async fn not_found() -> AppError {
    AppError::NotFound("Page not found!".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_segment() {
        assert_eq!(
            "page=2".parse::<BookPath>().unwrap(),
            BookPath::Page(PageRequest::new(2))
        );
        assert_eq!(
            "page=0".parse::<BookPath>().unwrap(),
            BookPath::Page(PageRequest::first())
        );
    }

    #[test]
    fn test_parse_id_segment() {
        assert_eq!("42".parse::<BookPath>().unwrap(), BookPath::Id(42));
    }

    #[test]
    fn test_bad_page_is_bad_request() {
        let err = "page=two".parse::<BookPath>().unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_bad_id_is_not_found() {
        let err = "moby-dick".parse::<BookPath>().unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
