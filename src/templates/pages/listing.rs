use crate::domain::listing::{Listing, ListingType};
use crate::store::{DocumentKey, DocumentStore};
use crate::templates::components::{badge, error_panel};
use crate::templates::{carousel, desktop_layout, icon, spinner, CarouselConfig, Icon};
use crate::view::{ListingView, ViewState};
use maud::{html, Markup, PreEscaped};
use std::time::Duration;

/// How long "Link Copied" stays up after the latest click.
pub const SHARE_CONFIRMATION: Duration = Duration::from_millis(2000);

// Copies the address the browser is on and shows the confirmation. A new
// click clears the pending hide before scheduling its own. A hide never
// touches a toast that has left the page.
const SHARE_SCRIPT: &str = r#"
(function () {
  var hideTimer = null;
  document.addEventListener("htmx:beforeSwap", function () {
    clearTimeout(hideTimer);
  });
  document.addEventListener("click", function (event) {
    var button = event.target.closest("[data-share]");
    if (!button) return;
    navigator.clipboard.writeText(window.location.href);
    var toast = document.getElementById("share-toast");
    if (!toast) return;
    toast.hidden = false;
    clearTimeout(hideTimer);
    hideTimer = setTimeout(function () {
      if (toast.isConnected) toast.hidden = true;
    }, Number(button.dataset.confirmMs));
  });
})();
"#;

/// Full page in the `Loading` state. htmx swaps in the resolved details
/// fragment once the page is up.
pub fn listing_page(key: &DocumentKey) -> Markup {
    desktop_layout(
        "Listing",
        html! {
            main {
                div id="listing" hx-get=(details_path(key)) hx-trigger="load" hx-swap="outerHTML" {
                    (listing_state(&ViewState::Loading))
                }
            }
            script { (PreEscaped(SHARE_SCRIPT)) }
        },
    )
}

/// Fragment for the details endpoint.
pub fn listing_fragment<S: DocumentStore + ?Sized>(view: &ListingView<S>) -> Markup {
    html! {
        div id="listing" {
            (view.render())
        }
    }
}

pub fn listing_state(state: &ViewState) -> Markup {
    match state {
        ViewState::Loading => spinner(),
        ViewState::Loaded(listing) => listing_details(listing),
        ViewState::NotFound => error_panel(
            "Listing not found",
            "This listing does not exist or has been removed.",
        ),
        ViewState::Failed(_) => error_panel(
            "Could not load listing",
            "Something went wrong while loading this listing. Please try again later.",
        ),
    }
}

fn listing_details(listing: &Listing) -> Markup {
    html! {
        (carousel(&listing.img_urls, &CarouselConfig::listing()))

        button
            type="button"
            class="fixed top-[13%] right-[3%] z-10 bg-white cursor-pointer border-2 border-gray-400 rounded-full w-12 h-12 flex justify-center items-center"
            aria-label="Copy link"
            data-share
            data-confirm-ms=(SHARE_CONFIRMATION.as_millis() as u64)
        {
            (icon(Icon::Share, "text-lg text-slate-500"))
        }
        p id="share-toast" hidden
            class="fixed top-[23%] right-[5%] font-semibold border-2 border-gray-400 rounded-md bg-white z-10 p-2"
        {
            "Link Copied"
        }

        div class="m-4 flex flex-col md:flex-row max-w-6xl lg:mx-auto p-4 rounded-lg shadow-lg bg-white lg:space-x-5" {
            div class="w-full" {
                p class="listing-title text-2xl font-bold mb-3 text-blue-400" { (listing.title_line()) }
                p class="flex items-center mt-6 mb-3 font-semibold" {
                    (icon(Icon::MapMarker, "text-green-700 mr-1"))
                    (listing.address)
                }
                div class="flex justify-start items-center space-x-4 w-[75%]" {
                    (badge(listing.kind.label(), type_color(listing.kind)))
                    @if let Some(discount) = listing.discount_label() {
                        (badge(&format!("${discount}"), "bg-red-800"))
                    }
                }
                p class="mt-3 mb-3" {
                    span class="font-semibold" { "Description - " }
                    (listing.description)
                }
                ul class="flex items-center space-x-2 lg:space-x-10 text-sm font-semibold" {
                    (feature(Icon::Bed, &listing.bedrooms_label()))
                    (feature(Icon::Bath, &listing.bathrooms_label()))
                    (feature(Icon::Parking, listing.parking_label()))
                    (feature(Icon::Chair, listing.furnished_label()))
                }
            }
        }
    }
}

fn feature(glyph: Icon, label: &str) -> Markup {
    html! {
        li class="flex items-center whitespace-nowrap" {
            (icon(glyph, "text-lg mr-1"))
            (label)
        }
    }
}

fn type_color(kind: ListingType) -> &'static str {
    match kind {
        ListingType::Rent => "bg-green-800",
        ListingType::Sale => "bg-blue-800",
    }
}

/// Root-relative, so the fragment comes from whichever host served the page.
fn details_path(key: &DocumentKey) -> String {
    format!("/listing/{}/details", key.path_segment())
}
