//! Integration tests for the cart drawer.

use ressurreccion_integration_tests::{BackendScript, FakeBackend, Gate, TestContext, location};
use serde_json::json;

const TEE: &str = "Monochrome Crest Tee";
const HOODIE: &str = "Urban Halo Hoodie";
const CARGO: &str = "Shadowline Cargo";
const CAP: &str = "Minimal Cap";

/// The cart drawer markup, empty when the drawer is closed.
fn drawer(body: &str) -> &str {
    body.split("<aside class=\"drawer\"").nth(1).unwrap_or_default()
}

#[tokio::test]
async fn test_add_two_products_totals() {
    let ctx = TestContext::start(None).await;

    let response = ctx.post_form("/cart/add", &[("title", TEE)]).await;
    assert_eq!(location(&response), "/#shop");
    ctx.post_form("/cart/add", &[("title", HOODIE)]).await;

    let body = ctx.page("/").await;
    assert!(body.contains("<aside class=\"drawer\""));
    assert!(body.contains("id=\"cart-total\">$134.00<"));
    assert_eq!(
        ctx.page("/cart/count").await.trim(),
        "<span class=\"badge\" id=\"cart-count\">2</span>"
    );
}

#[tokio::test]
async fn test_empty_cart_has_no_badge() {
    let ctx = TestContext::start(None).await;
    assert_eq!(ctx.page("/cart/count").await.trim(), "");

    ctx.post_form("/cart/open", &[]).await;
    let body = ctx.page("/").await;
    assert!(body.contains("Your cart is empty."));
    assert!(body.contains("id=\"cart-total\">$0.00<"));
}

#[tokio::test]
async fn test_remove_keeps_order_and_ignores_out_of_range() {
    let ctx = TestContext::start(None).await;
    for title in [TEE, HOODIE, CARGO] {
        ctx.post_form("/cart/add", &[("title", title)]).await;
    }

    ctx.post_form("/cart/remove", &[("index", "1")]).await;
    ctx.post_form("/cart/remove", &[("index", "9")]).await;

    let body = ctx.page("/").await;
    let drawer = drawer(&body);
    let tee = drawer.find(TEE);
    let cargo = drawer.find(CARGO);
    assert!(tee.is_some() && cargo.is_some());
    assert!(tee < cargo);
    assert!(!drawer.contains(HOODIE));
    assert!(drawer.contains("$143.00"));
}

#[tokio::test]
async fn test_add_unknown_product_is_noop() {
    let ctx = TestContext::start(None).await;
    ctx.post_form("/cart/add", &[("title", "Phantom Jacket")]).await;
    assert_eq!(ctx.page("/cart/count").await.trim(), "");
}

#[tokio::test]
async fn test_add_keeps_clicked_product_when_catalog_changes() {
    let gate = Gate::closed();
    let backend = FakeBackend::start(BackendScript {
        products: json!([{"title": "Live Socks", "price": 12, "category": "Accessories"}]),
        products_gate: Some(gate.clone()),
        ..BackendScript::default()
    })
    .await;
    let ctx = TestContext::start_loading(Some(&backend.url)).await;

    // Rendered while loading: the fallback card is what the visitor clicks.
    let page = ctx.page("/").await;
    assert!(page.contains("name=\"title\" value=\"Monochrome Crest Tee\""));

    gate.open();
    ctx.state.catalog().settled().await;
    assert!(ctx.page("/").await.contains("Live Socks"));

    ctx.post_form("/cart/add", &[("title", TEE)]).await;

    let body = ctx.page("/").await;
    let drawer = drawer(&body);
    assert!(drawer.contains(TEE));
    assert!(!drawer.contains("Live Socks"));
    assert!(drawer.contains("$45.00"));
}

#[tokio::test]
async fn test_close_keeps_lines() {
    let ctx = TestContext::start(None).await;
    let response = ctx
        .post_form("/cart/add", &[("title", CAP), ("category", "Accessories")])
        .await;
    assert_eq!(location(&response), "/?category=Accessories#shop");

    ctx.post_form("/cart/close", &[]).await;
    let body = ctx.page("/").await;
    assert!(!body.contains("<aside class=\"drawer\""));
    assert!(ctx.page("/cart/count").await.contains(">1<"));
}

#[tokio::test]
async fn test_carts_are_per_visitor() {
    let ctx = TestContext::start(None).await;
    ctx.post_form("/cart/add", &[("title", TEE)]).await;

    let stranger = reqwest::get(ctx.url("/cart/count"))
        .await
        .expect("anonymous request");
    assert_eq!(stranger.text().await.expect("body").trim(), "");
}
