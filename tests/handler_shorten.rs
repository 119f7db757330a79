//! Validation-path tests for the create endpoint.
//!
//! Both failure modes here are decided before any database access, so the
//! tests run against the full router with no live store behind it.

mod common;

use serde_json::json;

#[tokio::test]
async fn test_shorten_rejects_malformed_url() {
    let server = common::test_server();

    let response = server
        .post("/api/shorturl/new")
        .json(&json!({ "url": "notaurl" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Invalid URL");
}

#[tokio::test]
async fn test_shorten_rejects_malformed_url_form_body() {
    let server = common::test_server();

    let response = server
        .post("/api/shorturl/new")
        .form(&[("url", "notaurl")])
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Invalid URL");
}

#[tokio::test]
async fn test_shorten_rejects_unsupported_scheme() {
    let server = common::test_server();

    let response = server
        .post("/api/shorturl/new")
        .json(&json!({ "url": "ftp://example.com/file" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Invalid URL");
}

#[tokio::test]
async fn test_shorten_rejects_unresolvable_hostname() {
    let server = common::test_server();

    // The .invalid TLD is reserved and never resolves.
    let response = server
        .post("/api/shorturl/new")
        .json(&json!({ "url": "http://this-domain-should-not-exist-xyz123.invalid" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Hostname Error");
}
