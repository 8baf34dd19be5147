use maud::{html, Markup, DOCTYPE};

/// Build a basic HTML error page
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                style {
                    "body { font-family: system-ui, sans-serif; max-width: 720px; margin: 4rem auto; padding: 1rem; }"
                    "h1 { font-size: 2rem; margin-bottom: 1rem; }"
                    "p { font-size: 1.1rem; color: #444; }"
                }
            }
            body {
                h1 { "Error " (status) }
                p { (message) }
            }
        }
    }
}

/// Inline panel for a view that resolved to nothing to show.
pub fn error_panel(title: &str, message: &str) -> Markup {
    html! {
        section class="m-4 max-w-6xl lg:mx-auto p-4 rounded-lg shadow-lg bg-white" role="alert" {
            h2 class="text-2xl font-bold mb-3" { (title) }
            p class="text-gray-600" { (message) }
        }
    }
}
