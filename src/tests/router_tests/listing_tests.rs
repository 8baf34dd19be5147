// src/tests/router_tests/listing_tests.rs

use crate::domain::listing::tests::sample_listing;
use crate::domain::listing::{Listing, ListingType};
use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{app_state, body_string, request, MemoryStore};
use http::Method;

#[test]
fn listing_page_renders_loading_shell() {
    let state = app_state(MemoryStore::new().with_listing("lake", &sample_listing()));

    let mut resp = handle(request(Method::GET, "/listing/lake"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains(r#"hx-get="/listing/lake/details""#));
    assert!(body.contains(r#"hx-trigger="load""#));
    assert!(body.contains("spinner"));
    // Nothing from the record until the details arrive.
    assert!(!body.contains("Lake house"));
    assert!(!body.contains("data-carousel"));
}

#[test]
fn details_fragment_renders_the_listing() {
    let state = app_state(MemoryStore::new().with_listing("lake", &sample_listing()));

    let mut resp = handle(request(Method::GET, "/listing/lake/details"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Lake house - $ 250,000"));
    assert!(body.contains("9 Shore Rd"));
    assert!(body.contains("Quiet street, big garden"));
    assert_eq!(body.matches("carousel-slide ").count(), 3);
    assert!(body.contains("data-share"));
    assert!(!body.contains("spinner"));
}

#[test]
fn details_fragment_for_a_rental_on_offer() {
    let listing = Listing {
        kind: ListingType::Rent,
        regular_price: 2500,
        discounted_price: Some(2100),
        offer: true,
        bedrooms: 1,
        bathrooms: 2,
        ..sample_listing()
    };
    let state = app_state(MemoryStore::new().with_listing("flat", &listing));

    let mut resp = handle(request(Method::GET, "/listing/flat/details"), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Lake house - $ 2,100/months"));
    assert!(body.contains("$400 discount"));
    assert!(body.contains(">Bedroom<"));
    assert!(body.contains("2 Bathrooms"));
}

#[test]
fn missing_listing_gets_an_explicit_panel() {
    let state = app_state(MemoryStore::new());

    let mut resp = handle(request(Method::GET, "/listing/ghost/details"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Listing not found"));
    assert!(!body.contains("spinner"));
}

#[test]
fn store_failure_gets_an_error_panel() {
    let state = app_state(MemoryStore::failing("timeout"));

    let mut resp = handle(request(Method::GET, "/listing/lake/details"), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Could not load listing"));
    assert!(!body.contains("timeout"));
}

#[test]
fn reserved_ids_are_bad_requests() {
    let state = app_state(MemoryStore::new());

    let err = handle(request(Method::GET, "/listing/__meta__"), &state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_eq!(err.status(), 400);

    let mut resp = error_to_response(err);
    assert_eq!(resp.status(), 400);
    assert!(body_string(&mut resp).contains("reserved"));
}

#[test]
fn encoded_ids_are_decoded_before_the_read() {
    let listing = Listing {
        name: "Lake house two".into(),
        ..sample_listing()
    };
    let state = app_state(MemoryStore::new().with_listing("lake house", &listing));

    let mut shell = handle(request(Method::GET, "/listing/lake%20house"), &state).unwrap();
    assert!(body_string(&mut shell).contains(r#"hx-get="/listing/lake%20house/details""#));

    let mut resp = handle(request(Method::GET, "/listing/lake%20house/details"), &state).unwrap();
    assert!(body_string(&mut resp).contains("Lake house two - $ 250,000"));
}

#[test]
fn undecodable_ids_are_bad_requests() {
    let state = app_state(MemoryStore::new());

    for path in ["/listing/%FF/details", "/listing/a%2Fb"] {
        let result = handle(request(Method::GET, path), &state);
        assert!(
            matches!(result, Err(ServerError::BadRequest(_))),
            "{path} should be 400"
        );
    }
}

#[test]
fn carousel_script_is_served() {
    let state = app_state(MemoryStore::new());

    let mut resp = handle(request(Method::GET, "/static/carousel.js"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["Content-Type"],
        "application/javascript; charset=utf-8"
    );
    let body = body_string(&mut resp);
    assert!(body.contains("[data-carousel]"));
    assert!(body.contains("htmx:load"));
}

#[test]
fn every_static_asset_the_page_links_resolves() {
    let state = app_state(MemoryStore::new());
    let mut shell = handle(request(Method::GET, "/listing/lake"), &state).unwrap();
    let body = body_string(&mut shell);

    let links: Vec<&str> = body
        .match_indices("\"/static/")
        .map(|(at, _)| {
            let rest = &body[at + 1..];
            &rest[..rest.find('"').unwrap()]
        })
        .collect();
    assert_eq!(links.len(), 2, "links: {links:?}");

    for link in links {
        let resp = handle(request(Method::GET, link), &state).unwrap();
        assert_eq!(resp.status(), 200, "{link}");
    }

    let missing = handle(request(Method::GET, "/static/nope.js"), &state);
    assert!(matches!(missing, Err(ServerError::NotFound)));
}

#[test]
fn unknown_routes_are_not_found() {
    let state = app_state(MemoryStore::new());

    for path in ["/", "/listing", "/listing/lake/photos", "/listings/lake"] {
        let result = handle(request(Method::GET, path), &state);
        assert!(
            matches!(result, Err(ServerError::NotFound)),
            "{path} should be 404"
        );
    }

    let post = handle(request(Method::POST, "/listing/lake"), &state);
    assert!(matches!(post, Err(ServerError::NotFound)));
}

#[test]
fn not_found_renders_an_error_page() {
    let mut resp = error_to_response(ServerError::NotFound);
    assert_eq!(resp.status(), 404);
    assert!(body_string(&mut resp).contains("Error 404"));
}
