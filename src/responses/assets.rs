// responses/assets.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

const CAROUSEL_JS: &str = include_str!("../../static/carousel.js");
const MAIN_CSS: &str = include_str!("../../static/main.css");

/// Serve a file bundled under `static/`.
pub fn static_asset(name: &str) -> ResultResp {
    let (content_type, body) = match name {
        "carousel.js" => (mime::APPLICATION_JAVASCRIPT_UTF_8, CAROUSEL_JS),
        "main.css" => (mime::TEXT_CSS_UTF_8, MAIN_CSS),
        _ => return Err(ServerError::NotFound),
    };

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type.as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(body.to_owned()))
        .map_err(|_| ServerError::InternalError)
}
