mod fixtures;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use folio_kernel::server::AppState;
use tower::ServiceExt;

fn app(site: &fixtures::Site) -> Router {
    let state = AppState::builder().config(site.config.clone()).build().expect("state");
    folio_server::router::init(state)
}

/// Auto-escaping may encode `/` in attribute values; accept both spellings.
fn contains_attr(body: &str, value: &str) -> bool {
    body.contains(value) || body.contains(&value.replace('/', "&#x2f;"))
}

fn starts_shell(body: &str, link: &str) -> bool {
    contains_attr(body, &format!(r#"hx-get="{link}" hx-trigger="load""#))
}

async fn get(app: Router, uri: &str, htmx: bool) -> (StatusCode, String) {
    let mut request = Request::builder().uri(uri);
    if htmx {
        request = request.header("HX-Request", "true");
    }
    let response =
        app.oneshot(request.body(Body::empty()).expect("request")).await.expect("response");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn full_navigation_gets_the_shell() {
    let site = fixtures::site();

    let (status, body) = get(app(&site), "/posts", false).await;
    assert_eq!(status, StatusCode::OK);
    assert!(starts_shell(&body, "/posts"));
    assert!(!body.contains("Hello Folio"));

    let (_, body) = get(app(&site), "/", false).await;
    assert!(starts_shell(&body, "/posts"));

    let (_, body) = get(app(&site), "/post/hello", false).await;
    assert!(starts_shell(&body, "/post/hello"));
}

#[tokio::test]
async fn htmx_request_gets_the_posts_fragment() {
    let site = fixtures::site();

    let (status, body) = get(app(&site), "/posts", true).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("<!doctype html>"));
    assert!(body.contains("Hello Folio"));
    assert!(body.contains("Second Post"));
    assert!(contains_attr(&body, "/assets/second.png"));
}

#[tokio::test]
async fn single_post_renders_markdown_and_keeps_raw_html() {
    let site = fixtures::site();

    let (status, body) = get(app(&site), "/post/hello", true).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Hello</h1>"));
    assert!(body.contains("<video"));
}

#[tokio::test]
async fn unknown_post_is_not_found() {
    let site = fixtures::site();

    let (status, _) = get(app(&site), "/post/nope", true).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(app(&site), "/project/nope", true).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn tag_filters_posts() {
    let site = fixtures::site();

    let (status, body) = get(app(&site), "/tag/web", true).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Second Post"));
    assert!(!body.contains("Hello Folio"));

    let (_, body) = get(app(&site), "/tag/web", false).await;
    assert!(starts_shell(&body, "/tag/web"));
}

#[tokio::test]
async fn project_markdown_escapes_raw_html() {
    let site = fixtures::site();

    let (status, body) = get(app(&site), "/project/folio", true).await;
    assert_eq!(status, StatusCode::OK);
    assert!(contains_attr(&body, "https://github.com/folio-site/folio"));
    assert!(!body.contains("<script>"));

    let (_, body) = get(app(&site), "/projects", true).await;
    assert!(body.contains("Folio Project"));
}

#[tokio::test]
async fn about_fragment_and_shell() {
    let site = fixtures::site();

    let (status, body) = get(app(&site), "/about", true).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>About</h1>"));

    let (_, body) = get(app(&site), "/about", false).await;
    assert!(starts_shell(&body, "/about"));
}

#[tokio::test]
async fn health_reports_up_without_caching() {
    let site = fixtures::site();
    let request = Request::builder().uri("/health").body(Body::empty()).expect("request");
    let response = app(&site).oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).and_then(|v| v.to_str().ok()),
        Some("no-store, no-cache, must-revalidate")
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let json: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(json["status"], "up");
}

#[tokio::test]
async fn assets_are_served_from_the_assets_dir() {
    let site = fixtures::site();

    let (status, body) = get(app(&site), "/assets/site.css", false).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "body { margin: 0; }");
}

#[tokio::test]
async fn malformed_index_is_a_server_error() {
    let site = fixtures::site();
    fixtures::write(site.dir.path(), "posts/index.json", "{ not json");

    let (status, body) = get(app(&site), "/posts", true).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Internal Server Error");
}
