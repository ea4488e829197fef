//! Integration tests for the contact form.

use axum::http::StatusCode;
use ressurreccion_core::contact::{FAILURE_MESSAGE, INVALID_MESSAGE, SUCCESS_MESSAGE};
use ressurreccion_integration_tests::{BackendScript, FakeBackend, TestContext, location};
use serde_json::json;

const FORM: [(&str, &str); 3] = [
    ("name", "Alya"),
    ("email", "alya@example.com"),
    ("message", "Kapan restock hoodie?"),
];

#[tokio::test]
async fn test_no_backend_fails_and_keeps_fields() {
    let ctx = TestContext::start(None).await;

    let response = ctx.post_form("/contact", &FORM).await;
    assert_eq!(location(&response), "/#contact");

    let body = ctx.page("/").await;
    assert!(body.contains(FAILURE_MESSAGE));
    assert!(body.contains("value=\"Alya\""));
    assert!(body.contains("Kapan restock hoodie?</textarea>"));
}

#[tokio::test]
async fn test_created_succeeds_and_clears_fields() {
    let backend = FakeBackend::start(BackendScript::default()).await;
    let ctx = TestContext::start(Some(&backend.url)).await;

    ctx.post_form("/contact", &FORM).await;

    let body = ctx.page("/").await;
    assert!(body.contains(SUCCESS_MESSAGE));
    assert!(!body.contains("value=\"Alya\""));
    assert_eq!(
        backend.contact_bodies(),
        vec![json!({
            "name": "Alya",
            "email": "alya@example.com",
            "message": "Kapan restock hoodie?"
        })]
    );
}

#[tokio::test]
async fn test_backend_error_is_failure() {
    let backend = FakeBackend::start(BackendScript {
        contact_status: StatusCode::BAD_GATEWAY,
        ..BackendScript::default()
    })
    .await;
    let ctx = TestContext::start(Some(&backend.url)).await;

    ctx.post_form("/contact", &FORM).await;
    assert!(ctx.page("/").await.contains(FAILURE_MESSAGE));
    assert_eq!(backend.contact_bodies().len(), 1);
}

#[tokio::test]
async fn test_status_is_shown_once() {
    let ctx = TestContext::start(None).await;
    ctx.post_form("/contact", &FORM).await;

    assert!(ctx.page("/").await.contains(FAILURE_MESSAGE));
    assert!(!ctx.page("/").await.contains(FAILURE_MESSAGE));
}

#[tokio::test]
async fn test_blank_message_never_reaches_backend() {
    let backend = FakeBackend::start(BackendScript::default()).await;
    let ctx = TestContext::start(Some(&backend.url)).await;

    ctx.post_form(
        "/contact",
        &[("name", "Alya"), ("email", "alya@example.com"), ("message", " ")],
    )
    .await;

    assert!(ctx.page("/").await.contains(INVALID_MESSAGE));
    assert!(backend.contact_bodies().is_empty());
}
