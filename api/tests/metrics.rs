mod common;

use common::test_server;

// The Prometheus recorder is process-global, so this binary builds a
// single server with metrics enabled.
#[tokio::test]
async fn test_metrics_are_exposed() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(dir.path(), &[]).await;

    server.get("/health/live").await.assert_status_ok();

    let response = server.get("/metrics").await;

    response.assert_status_ok();
    assert!(response.text().contains("axum_http_requests"));
}
