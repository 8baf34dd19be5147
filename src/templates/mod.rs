pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{carousel, error_page, icon, spinner, CarouselConfig, Icon};
pub use layouts::desktop::desktop_layout;
