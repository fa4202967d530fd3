//! Integration tests for the hello backend.
//!
//! Each test binds a real listener on an ephemeral port and talks to it
//! over TCP.

use std::net::SocketAddr;

use pretty_assertions::assert_eq;
use reqwest::{header, StatusCode};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use hello_backend::api::AppState;
use hello_backend::server::serve;
use hello_backend::{DeploymentMode, Result};

/// Running server plus the handle that stops it.
struct TestServer {
    addr: SocketAddr,
    stop: oneshot::Sender<()>,
    task: JoinHandle<Result<()>>,
}

impl TestServer {
    async fn start(mode: DeploymentMode) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop, stopped) = oneshot::channel::<()>();

        let task = tokio::spawn(serve(listener, AppState::new(mode), async move {
            stopped.await.ok();
        }));

        Self { addr, stop, task }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn shutdown(self) {
        self.stop.send(()).ok();
        self.task.await.unwrap().unwrap();
    }
}

#[tokio::test]
async fn serves_hello_over_tcp() {
    let server = TestServer::start(DeploymentMode::Development).await;
    let client = reqwest::Client::new();

    let response = client
        .get(server.url("/api/hello"))
        .header(header::ORIGIN, "http://localhost:3000")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "message": "Hello World from Python Backend!", "status": "success" })
    );

    server.shutdown().await;
}

#[tokio::test]
async fn serves_health_over_tcp() {
    let server = TestServer::start(DeploymentMode::Production).await;

    let response = reqwest::get(server.url("/api/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "status": "healthy", "service": "Python Flask Backend" })
    );

    server.shutdown().await;
}

#[tokio::test]
async fn error_statuses_over_tcp() {
    let server = TestServer::start(DeploymentMode::Production).await;
    let client = reqwest::Client::new();

    let response = client
        .post(server.url("/api/hello"))
        .header(header::ORIGIN, "http://localhost:3000")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );

    let response = client
        .get(server.url("/api/unknown"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "not found" }));

    server.shutdown().await;
}
