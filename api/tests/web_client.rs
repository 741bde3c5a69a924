mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use tempfile::TempDir;
use test_context::{AsyncTestContext, test_context};

use common::test_server;

struct WebClientContext {
    server: TestServer,
    _dir: TempDir,
}

impl AsyncTestContext for WebClientContext {
    async fn setup() -> Self {
        let dir = tempfile::tempdir().unwrap();

        let web_root = dir.path().join("web");
        std::fs::create_dir_all(&web_root).unwrap();
        std::fs::write(web_root.join("index.html"), "<h1>PantryCam</h1>").unwrap();
        std::fs::write(web_root.join("main.html"), "<form id=\"upload\"></form>").unwrap();
        std::fs::write(web_root.join("script.js"), "console.log('ready');").unwrap();

        let web_root = web_root.display().to_string();
        let server = test_server(
            dir.path(),
            &["--disable-metrics", "--server-web-root", &web_root],
        )
        .await;

        WebClientContext { server, _dir: dir }
    }
}

#[test_context(WebClientContext)]
#[tokio::test]
async fn test_root_serves_index(ctx: &mut WebClientContext) {
    let response = ctx.server.get("/").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "<h1>PantryCam</h1>");
}

#[test_context(WebClientContext)]
#[tokio::test]
async fn test_upload_page_serves_main(ctx: &mut WebClientContext) {
    let response = ctx.server.get("/upload_page").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "<form id=\"upload\"></form>");
}

#[test_context(WebClientContext)]
#[tokio::test]
async fn test_static_assets_are_served(ctx: &mut WebClientContext) {
    let response = ctx.server.get("/script.js").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "console.log('ready');");
}

#[test_context(WebClientContext)]
#[tokio::test]
async fn test_api_routes_take_precedence(ctx: &mut WebClientContext) {
    ctx.server.get("/health/live").await.assert_status_ok();
    ctx.server
        .get("/missing.html")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
