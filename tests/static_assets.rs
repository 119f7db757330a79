mod common;

#[tokio::test]
async fn test_root_serves_front_end_document() {
    let server = common::test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("<form"));
    assert!(body.contains("/api/shorturl/new"));
}

#[tokio::test]
async fn test_public_serves_existing_asset() {
    let server = common::test_server();

    let response = server.get("/public/style.css").await;

    response.assert_status_ok();
    assert!(response.text().contains("body"));
}

#[tokio::test]
async fn test_public_missing_asset_is_not_found() {
    let server = common::test_server();

    let response = server.get("/public/does-not-exist.css").await;

    response.assert_status_not_found();
}
