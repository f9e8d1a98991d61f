//! Document shell shared by every page

use maud::{html, Markup, DOCTYPE};

pub const SITE_TITLE: &str = "The Book Case";

pub fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href="/static/stylesheets/style.css";
            }
            body {
                div #wrapper {
                    (body)
                }
            }
        }
    }
}
