pub mod listing_view;

pub use listing_view::{ListingView, ViewState};
