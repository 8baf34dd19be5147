pub mod format;
pub mod listing;
