use maud::{html, Markup};

pub mod carousel;
pub mod error;
pub mod icons;

pub use carousel::{carousel, CarouselConfig};
pub use error::{error_page, error_panel};
pub use icons::{icon, Icon};

/// Loading placeholder shown while a read is outstanding.
pub fn spinner() -> Markup {
    html! {
        div class="flex items-center justify-center h-[400px]" role="status" aria-live="polite" {
            div class="spinner h-16 w-16 rounded-full border-4 border-gray-200 border-t-blue-400 animate-spin" {}
            span class="sr-only" { "Loading..." }
        }
    }
}

pub fn badge(label: &str, color: &str) -> Markup {
    html! {
        p class={ "w-full max-w-[200px] rounded-md p-1 text-white text-center font-semibold shadow-md " (color) } {
            (label)
        }
    }
}
