pub mod assets;
pub mod errors;
pub mod html;

pub use crate::errors::ResultResp;
pub use assets::static_asset;
pub use errors::error_to_response;

// Normal HTML response
pub use html::html_response;
