#![allow(dead_code)]

use axum::{http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use chat_client::{ClientConfig, RelayClient};
use std::time::Duration;
use tokio::net::TcpListener;

/// Serve `router` on a random loopback port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake relay");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    format!("http://{}", addr)
}

/// A fake relay whose chat endpoint always answers with `status` and `body`.
pub async fn fake_relay(status: StatusCode, body: serde_json::Value) -> String {
    let router = Router::new().route(
        "/api/chat",
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)).into_response() }
        }),
    );
    serve(router).await
}

pub fn client_for(base_url: &str) -> RelayClient {
    client_with_timeout(base_url, Duration::from_secs(5))
}

pub fn client_with_timeout(base_url: &str, timeout: Duration) -> RelayClient {
    let config = ClientConfig::new(base_url)
        .expect("valid test URL")
        .with_timeout(timeout);
    RelayClient::new(&config).expect("Failed to build relay client")
}

/// An address with nothing listening on it.
pub async fn closed_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
