//! Integration tests for the dev/status server.

use std::net::SocketAddr;
use std::sync::Arc;

use campus_connect::adapters::{MockQuizGenerator, MockViewLoader};
use campus_connect::app::{App, ThemeSelection, View};
use campus_connect::devserver::{start_dev_server_on, ShellSnapshot};

fn any_port() -> SocketAddr {
    "127.0.0.1:0".parse().unwrap()
}

#[tokio::test]
async fn test_status_page_returns_html() {
    let server = start_dev_server_on(any_port(), ShellSnapshot::default())
        .await
        .expect("Failed to start dev server");

    let response = reqwest::get(server.url()).await.expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("<span>Campus</span>Connect"));
    assert!(body.contains("/state"));

    server.shutdown();
}

#[tokio::test]
async fn test_state_endpoint_follows_published_snapshot() {
    let mut app = App::new(
        Arc::new(MockQuizGenerator::new()),
        Arc::new(MockViewLoader::new()),
    );
    app.mount();

    let server = start_dev_server_on(any_port(), app.snapshot())
        .await
        .expect("Failed to start dev server");
    let state_url = format!("{}/state", server.url());

    let first: ShellSnapshot = reqwest::get(&state_url).await.unwrap().json().await.unwrap();
    assert_eq!(first.view, View::Dashboard);
    assert_eq!(first.attributes.get("data-theme").map(String::as_str), Some("midnight"));

    app.set_view(View::MockExam);
    app.set_theme(ThemeSelection::Emerald);
    app.toggle_mode();
    server.publish(app.snapshot()).await;

    let second: serde_json::Value = reqwest::get(&state_url).await.unwrap().json().await.unwrap();
    assert_eq!(second["view"], "mock_exam");
    assert_eq!(second["theme"], "emerald");
    assert_eq!(second["attributes"]["data-mode"], "light");

    server.shutdown();
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let server = start_dev_server_on(any_port(), ShellSnapshot::default())
        .await
        .expect("Failed to start dev server");

    let response = reqwest::Client::new()
        .get(format!("{}/state", server.url()))
        .header("Origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    server.shutdown();
}
