//! Pagination window and list-page data

use serde::Deserialize;

use super::book::Book;

/// Fixed number of rows shown per page
pub const PER_PAGE: i64 = 8;

/// A 1-based page number over an ordered result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
}

impl PageRequest {
    /// Non-positive page numbers are clamped to the first page
    pub fn new(page: i64) -> Self {
        Self { page: page.max(1) }
    }

    pub fn first() -> Self {
        Self::new(1)
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        PER_PAGE
    }

    /// Rows skipped before this page: `page * perPage - perPage`
    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(PER_PAGE).saturating_sub(PER_PAGE)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

impl std::str::FromStr for PageRequest {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self::new)
    }
}

/// Query string of `GET /books/search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: String,
    /// Kept as text so a malformed value is reported like `/books/page=<n>`
    pub page: Option<String>,
}

/// One page of books plus the metadata the list view needs
#[derive(Debug, Clone)]
pub struct BookPage {
    pub books: Vec<Book>,
    /// Size of the whole set being paged (filtered set for searches)
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    /// Search term, present only on search pages
    pub search: Option<String>,
}

impl BookPage {
    pub fn search_page(&self) -> bool {
        self.search.is_some()
    }

    /// Number of pages, never less than one
    pub fn page_count(&self) -> i64 {
        if self.total <= 0 {
            return 1;
        }
        (self.total + self.per_page - 1) / self.per_page
    }

    /// Target of the link to page `n` of this listing
    pub fn page_href(&self, n: i64) -> String {
        match &self.search {
            Some(term) => format!(
                "/books/search?search={}&page={}",
                urlencoding::encode(term),
                n
            ),
            None => format!("/books/page={}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with(total: i64, search: Option<&str>) -> BookPage {
        BookPage {
            books: vec![],
            total,
            page: 1,
            per_page: PER_PAGE,
            search: search.map(String::from),
        }
    }

    #[test]
    fn test_offsets() {
        assert_eq!(PageRequest::new(1).offset(), 0);
        assert_eq!(PageRequest::new(2).offset(), 8);
        assert_eq!(PageRequest::new(5).offset(), 32);
    }

    #[test]
    fn test_non_positive_pages_clamp_to_first() {
        assert_eq!(PageRequest::new(0).page(), 1);
        assert_eq!(PageRequest::new(-3).offset(), 0);
        assert_eq!(PageRequest::default().page(), 1);
    }

    #[test]
    fn test_parse() {
        assert_eq!("3".parse::<PageRequest>().unwrap().page(), 3);
        assert_eq!(" -2 ".parse::<PageRequest>().unwrap().page(), 1);
        assert!("two".parse::<PageRequest>().is_err());
        assert!("".parse::<PageRequest>().is_err());
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        assert!(PageRequest::new(i64::MAX).offset() > 0);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_with(0, None).page_count(), 1);
        assert_eq!(page_with(8, None).page_count(), 1);
        assert_eq!(page_with(9, None).page_count(), 2);
        assert_eq!(page_with(10, None).page_count(), 2);
        assert_eq!(page_with(17, None).page_count(), 3);
    }

    #[test]
    fn test_page_href() {
        assert_eq!(page_with(10, None).page_href(2), "/books/page=2");
        assert_eq!(
            page_with(10, Some("sci fi&co")).page_href(3),
            "/books/search?search=sci%20fi%26co&page=3"
        );
    }
}
