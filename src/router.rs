use crate::errors::{ResultResp, ServerError};
use crate::responses::{html_response, static_asset};
use crate::store::{DocumentKey, DocumentStore, StoreError};
use crate::templates::pages::{listing_fragment, listing_page};
use crate::view::ListingView;
use astra::Request;

/// Everything a request handler needs, shared by all workers.
pub struct AppState {
    pub store: Box<dyn DocumentStore>,
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method, segments.as_slice()) {
        ("GET", ["listing", id]) => show_listing(id),
        ("GET", ["listing", id, "details"]) => listing_details(state, id),
        ("GET", ["static", name]) => static_asset(name),
        _ => Err(ServerError::NotFound),
    }
}

/// Route segments arrive percent-encoded.
fn listing_key(segment: &str) -> Result<DocumentKey, ServerError> {
    DocumentKey::from_path_segment(segment).map_err(|e| match e {
        StoreError::InvalidKey(msg) => ServerError::BadRequest(msg),
        other => ServerError::Store(other),
    })
}

// The read is issued by the details request once the page is up.
fn show_listing(raw_id: &str) -> ResultResp {
    let key = listing_key(raw_id)?;
    html_response(listing_page(&key))
}

fn listing_details(state: &AppState, raw_id: &str) -> ResultResp {
    let key = listing_key(raw_id)?;
    let mut view = ListingView::new(&*state.store);
    view.load(key);

    // Every view state is swapped in, so the fragment is always a 200.
    html_response(listing_fragment(&view))
}
