//! Book list and book form pages

use maud::{html, Markup};

use super::layout::{layout, SITE_TITLE};
use crate::{
    error::FormErrors,
    models::{BookForm, BookPage},
};

pub fn index(list: &BookPage) -> Markup {
    layout(
        SITE_TITLE,
        html! {
            h1 { "Books" }
            p { a.button href="/books/new" { "Create New Book" } }
            form #search action="/books/search" method="get" {
                input type="search" name="search" placeholder="Search the catalog"
                    value=(list.search.as_deref().unwrap_or(""));
                button type="submit" { "Search" }
            }
            @if list.search_page() && list.total == 0 {
                p.no-results { "No books match your search" }
            } @else {
                table {
                    thead {
                        tr {
                            th { "Title" }
                            th { "Author" }
                            th { "Genre" }
                            th { "Year" }
                        }
                    }
                    tbody {
                        @for book in &list.books {
                            tr {
                                td { a href={ "/books/" (book.id) } { (book.title) } }
                                td { (book.author) }
                                td { (book.genre.as_deref().unwrap_or("")) }
                                td { (book.year) }
                            }
                        }
                    }
                }
                (pagination(list))
            }
            @if list.search_page() {
                p { a href="/books" { "Back to all books" } }
            }
        },
    )
}

fn pagination(list: &BookPage) -> Markup {
    html! {
        @if list.page_count() > 1 {
            nav.pagination {
                @for n in 1..=list.page_count() {
                    @if n == list.page {
                        a.active href=(list.page_href(n)) { (n) }
                    } @else {
                        a href=(list.page_href(n)) { (n) }
                    }
                }
            }
        }
    }
}

pub fn new_book(form: &BookForm, errors: &FormErrors) -> Markup {
    layout(
        "New Book",
        html! {
            h1 { "New Book" }
            (error_list(errors))
            form action="/books/new" method="post" {
                (form_fields(form, errors))
                p { input type="submit" value="Create New Book"; }
            }
            p { a.button href="/books" { "Cancel" } }
        },
    )
}

pub fn update_book(id: i64, form: &BookForm, errors: &FormErrors) -> Markup {
    layout(
        "Update Book",
        html! {
            h1 { "Update Book" }
            (error_list(errors))
            form action={ "/books/" (id) } method="post" {
                (form_fields(form, errors))
                p { input type="submit" value="Update Book"; }
            }
            form.inline action={ "/books/" (id) "/delete" } method="post" {
                p { input type="submit" value="Delete Book"; }
            }
            p { a.button href="/books" { "Cancel" } }
        },
    )
}

fn error_list(errors: &FormErrors) -> Markup {
    html! {
        @if !errors.is_empty() {
            h2.validation-errors-label { "Oooops!" }
            div.validation-errors {
                ul {
                    @for message in errors.messages() {
                        li.error { (message) }
                    }
                }
            }
        }
    }
}

fn form_fields(form: &BookForm, errors: &FormErrors) -> Markup {
    html! {
        (text_field("title", "Title", &form.title, errors))
        (text_field("author", "Author", &form.author, errors))
        (text_field("genre", "Genre", &form.genre, errors))
        (text_field("year", "Year", &form.year, errors))
    }
}

/// Labelled input; fields with errors are flagged so the stylesheet can mark them
fn text_field(name: &str, label: &str, value: &str, errors: &FormErrors) -> Markup {
    let invalid = !errors.field(name).is_empty();
    html! {
        p.invalid[invalid] {
            label for=(name) { (label) }
            input id=(name) name=(name) type="text" value=(value)
                aria-invalid=[invalid.then_some("true")];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Book, PER_PAGE};
    use chrono::Utc;

    fn book(id: i64, title: &str) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: "Author".to_string(),
            genre: None,
            year: 2000,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn listing(books: Vec<Book>, total: i64, search: Option<&str>) -> BookPage {
        BookPage {
            books,
            total,
            page: 1,
            per_page: PER_PAGE,
            search: search.map(String::from),
        }
    }

    #[test]
    fn test_index_links_titles_to_edit_form() {
        let html = index(&listing(vec![book(4, "Emma")], 1, None)).into_string();
        assert!(html.contains(r#"<a href="/books/4">Emma</a>"#));
        assert!(!html.contains("pagination"));
    }

    #[test]
    fn test_index_renders_page_links() {
        let html = index(&listing(vec![book(1, "Emma")], 17, None)).into_string();
        assert!(html.contains(r#"href="/books/page=3""#));
        assert!(!html.contains(r#"href="/books/page=4""#));
    }

    #[test]
    fn test_empty_search_page() {
        let html = index(&listing(vec![], 0, Some("zzz"))).into_string();
        assert!(html.contains("No books match your search"));
        assert!(html.contains(r#"value="zzz""#));
    }

    #[test]
    fn test_search_page_past_the_end_keeps_pagination() {
        let mut list = listing(vec![], 10, Some("Emma"));
        list.page = 3;
        let html = index(&list).into_string();
        assert!(!html.contains("No books match your search"));
        assert!(html.contains(r#"href="/books/search?search=Emma&amp;page=2""#));
    }

    #[test]
    fn test_form_keeps_submitted_values_and_errors() {
        let form = BookForm {
            title: String::new(),
            author: "Jane \"J\" Austen".to_string(),
            genre: String::new(),
            year: "soon".to_string(),
        };
        let mut errors = FormErrors::new();
        errors.add("title", "Please enter a value for 'title'");

        let html = new_book(&form, &errors).into_string();
        assert!(html.contains("Please enter a value for 'title'"));
        assert!(html.contains("Jane &quot;J&quot; Austen"));
        assert!(html.contains(r#"value="soon""#));
        assert!(html.contains(r#"<p class="invalid"><label for="title">"#));
        assert!(html.contains(r#"aria-invalid="true""#));
        assert!(!html.contains(r#"<p class="invalid"><label for="author">"#));
    }

    #[test]
    fn test_update_form_posts_to_book() {
        let html = update_book(7, &BookForm::default(), &FormErrors::new()).into_string();
        assert!(html.contains(r#"action="/books/7""#));
        assert!(html.contains(r#"action="/books/7/delete""#));
        assert!(!html.contains("Oooops"));
        assert!(!html.contains("aria-invalid"));
    }
}
