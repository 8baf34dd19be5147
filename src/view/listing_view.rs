use crate::domain::listing::Listing;
use crate::store::{get_listing, DocumentKey, DocumentStore, StoreError};
use crate::templates::pages::listing_state;
use maud::Markup;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Loaded(Listing),
    NotFound,
    Failed(String),
}

/// Issued by [`ListingView::begin_load`]; hands the read's outcome back to
/// the view that asked for it.
#[derive(Debug)]
pub struct LoadTicket {
    key: DocumentKey,
    generation: u64,
}

impl LoadTicket {
    pub fn key(&self) -> &DocumentKey {
        &self.key
    }
}

/// Detail view for one listing, bound to an injected document store.
pub struct ListingView<'s, S: DocumentStore + ?Sized> {
    store: &'s S,
    key: Option<DocumentKey>,
    generation: u64,
    state: ViewState,
}

impl<'s, S: DocumentStore + ?Sized> ListingView<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self {
            store,
            key: None,
            generation: 0,
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Switch the view to `key`. Returns `None` when the key is unchanged
    /// and there is nothing to fetch.
    pub fn begin_load(&mut self, key: DocumentKey) -> Option<LoadTicket> {
        if self.key.as_ref() == Some(&key) {
            return None;
        }

        self.generation += 1;
        self.key = Some(key.clone());
        self.state = ViewState::Loading;

        Some(LoadTicket {
            key,
            generation: self.generation,
        })
    }

    /// Apply a read's outcome. A ticket issued before the key last changed
    /// is stale; it is dropped and `false` is returned.
    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<Option<Listing>, StoreError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(key = %ticket.key, "discarding stale listing read");
            return false;
        }

        self.state = match outcome {
            Ok(Some(listing)) => {
                tracing::info!(key = %ticket.key, "listing loaded");
                ViewState::Loaded(listing)
            }
            Ok(None) => {
                tracing::warn!(key = %ticket.key, "listing not found");
                ViewState::NotFound
            }
            Err(e) => {
                tracing::error!(key = %ticket.key, error = %e, "listing read failed");
                ViewState::Failed(e.to_string())
            }
        };
        true
    }

    /// Fetch and apply in one step, on the calling thread.
    pub fn load(&mut self, key: DocumentKey) -> &ViewState {
        if let Some(ticket) = self.begin_load(key) {
            let outcome = get_listing(self.store, ticket.key());
            self.complete(ticket, outcome);
        }
        &self.state
    }

    pub fn render(&self) -> Markup {
        listing_state(&self.state)
    }
}
