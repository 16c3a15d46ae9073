use e2e::test_server::TestServer;

#[tokio::test]
async fn test_homepage_loads() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage");

    assert_eq!(response.status(), 200, "Homepage should return 200 OK");
    assert_eq!(
        response
            .headers()
            .get("content-language")
            .and_then(|v| v.to_str().ok()),
        Some("fr")
    );

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Clinique Audin"), "Should render the French name");
}

#[tokio::test]
async fn test_arabic_selector_renders_rtl() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.url_for("/contact?lang=ar"))
        .await
        .expect("Failed to fetch contact page");

    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("content-language")
            .and_then(|v| v.to_str().ok()),
        Some("ar")
    );

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains(r#"dir="rtl""#), "Arabic pages are right-to-left");
    assert!(body.contains("عيادة أودان"), "Should render the Arabic name");
}

#[tokio::test]
async fn test_unknown_selector_falls_back_to_french() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.url_for("/?lang=AR"))
        .await
        .expect("Failed to fetch homepage");

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains(r#"dir="ltr""#));
}
