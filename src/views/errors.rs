//! Not-found and generic error pages

use axum::http::StatusCode;
use maud::{html, Markup};

use super::layout;

pub fn page_not_found(message: &str) -> Markup {
    layout(
        "Page Not Found",
        html! {
            h2 { "Page Not Found" }
            p { (message) }
            p { a href="/books" { "Back to the book list" } }
        },
    )
}

pub fn error(status: StatusCode, message: &str) -> Markup {
    layout(
        "Server Error",
        html! {
            h2 { "Error" }
            h3 { (status.as_u16()) }
            p { (message) }
            p { a href="/books" { "Back to the book list" } }
        },
    )
}
