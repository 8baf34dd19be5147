use crate::templates::components::{icon, Icon};
use maud::{html, Markup, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
                script src=(HTMX_SRC) defer {}
                script src="/static/carousel.js" defer {}
            }
            body class="bg-gray-50" {
                header class="flex items-center justify-between px-6 py-3 shadow bg-white" {
                    div class="flex items-center gap-2" {
                        (icon(Icon::MapMarker, "text-red-600"))
                        h3 { "Listings" }
                    }
                }
                (content)
            }
        }
    }
}
