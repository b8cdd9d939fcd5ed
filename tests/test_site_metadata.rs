use recipe_ingest::{ImportConfig, ImportError, SiteMetadataExtractor};

fn extractor() -> SiteMetadataExtractor {
    SiteMetadataExtractor::new(&ImportConfig::default()).unwrap()
}

#[tokio::test]
async fn test_site_name_from_og_tag() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(
            r#"<html><head><meta property="og:site_name" content="Tasty Co"></head><body></body></html>"#,
        )
        .create_async()
        .await;

    let metadata = extractor().extract(&format!("{}/", server.url())).await.unwrap();

    assert_eq!(metadata.name, "Tasty Co");
    assert_eq!(metadata.description, "");
}

#[tokio::test]
async fn test_full_metadata() {
    let mut server = mockito::Server::new_async().await;
    let html = r#"
        <!DOCTYPE html>
        <html>
        <head>
            <title>Weeknight Dinners - Example Kitchen</title>
            <meta property="og:site_name" content="Example Kitchen">
            <meta property="og:description" content="Simple food for busy people">
            <meta property="og:image" content="/images/hero.jpg">
            <link rel="icon" href="/favicon.ico">
        </head>
        <body><h1>Weeknight Dinners</h1></body>
        </html>
    "#;
    let _m = server
        .mock("GET", "/dinners")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(html)
        .create_async()
        .await;

    let metadata = extractor()
        .extract(&format!("{}/dinners", server.url()))
        .await
        .unwrap();

    assert_eq!(metadata.name, "Example Kitchen");
    assert_eq!(metadata.description, "Simple food for busy people");
    assert_eq!(metadata.image_url, format!("{}/images/hero.jpg", server.url()));
    assert_eq!(metadata.logo_url, format!("{}/favicon.ico", server.url()));
}

#[tokio::test]
async fn test_hostname_fallback() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/")
        .with_status(200)
        .with_body("<html><head></head><body></body></html>")
        .create_async()
        .await;

    let metadata = extractor().extract(&format!("{}/", server.url())).await.unwrap();

    // mockito listens on 127.0.0.1
    assert_eq!(metadata.name, "127.0.0.1");
}

#[tokio::test]
async fn test_error_status_is_fetch_failure() {
    let mut server = mockito::Server::new_async().await;
    for status in [403, 404, 500, 503] {
        let path = format!("/status-{status}");
        let _m = server
            .mock("GET", path.as_str())
            .with_status(status)
            .with_body(r#"<html><head><meta property="og:site_name" content="Error Page"></head></html>"#)
            .create_async()
            .await;

        let result = extractor().extract(&format!("{}{}", server.url(), path)).await;
        assert!(
            matches!(result, Err(ImportError::FetchFailed(_))),
            "expected FetchFailed for status {status}"
        );
    }
}

#[tokio::test]
async fn test_malformed_url_makes_no_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    for url in ["", "example.com", "/relative/path", "http//missing-colon", "ht!tp://bad"] {
        let result = extractor().extract(url).await;
        assert!(
            matches!(result, Err(ImportError::InvalidUrl(_))),
            "expected InvalidUrl for {url:?}"
        );
    }

    mock.assert_async().await;
}
