pub mod listing;

pub use listing::{listing_fragment, listing_page, listing_state};
