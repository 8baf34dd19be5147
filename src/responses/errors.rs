use crate::errors::ServerError;
use crate::responses::html::html_with_status;
use crate::templates::error_page;
use astra::{Body, Response};

/// Convert a ServerError into a proper HTML response
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status();
    let message = match &err {
        ServerError::NotFound => "Not Found".to_string(),
        ServerError::BadRequest(msg) => msg.clone(),
        ServerError::Store(_) => "The listing store is unavailable.".to_string(),
        ServerError::InternalError => "Internal Server Error".to_string(),
    };

    if status >= 500 {
        tracing::error!(error = %err, status, "request failed");
    } else {
        tracing::debug!(error = %err, status, "request rejected");
    }

    html_with_status(status, error_page(status, &message))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
