#![allow(dead_code)]

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chat_relay_service::config::{GeminiSettings, RelayConfig};
use chat_relay_service::services::providers::mock::MockTextProvider;
use chat_relay_service::services::TextProvider;
use chat_relay_service::startup::Application;
use service_core::config::Config;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

pub const TEST_API_KEY: &str = "test-api-key";

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the relay backed by a mock provider.
    pub async fn spawn_with_mock(enabled: bool) -> (Self, Arc<MockTextProvider>) {
        let provider = Arc::new(MockTextProvider::new(enabled));
        let app = Self::spawn_with_provider(provider.clone()).await;
        (app, provider)
    }

    /// Spawn the relay with the real Gemini provider pointed at `api_base`.
    pub async fn spawn_with_gemini(api_base: &str) -> Self {
        let app = Application::build(test_config(api_base))
            .await
            .expect("Failed to build test application");
        Self::run(app).await
    }

    pub async fn spawn_with_provider(provider: Arc<dyn TextProvider>) -> Self {
        let app = Application::build_with_provider(test_config("http://127.0.0.1:9"), provider)
            .await
            .expect("Failed to build test application");
        Self::run(app).await
    }

    async fn run(app: Application) -> Self {
        let port = app.http_port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        Self {
            address,
            port,
            client,
        }
    }

    pub async fn post_chat(&self, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/chat", self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to send request")
    }
}

pub fn test_config(api_base: &str) -> RelayConfig {
    RelayConfig {
        common: Config { port: 0 },
        gemini: GeminiSettings {
            api_base: api_base.to_string(),
            ..GeminiSettings::new(TEST_API_KEY)
        },
    }
}

/// What the fake upstream saw on its last call.
#[derive(Debug, Clone, Default)]
pub struct RecordedCall {
    pub model_call: String,
    pub query: HashMap<String, String>,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct FakeGeminiState {
    status: StatusCode,
    reply: serde_json::Value,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

/// A stand-in for the Gemini REST API that returns a canned reply.
pub struct FakeGemini {
    pub api_base: String,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl FakeGemini {
    pub async fn spawn(status: StatusCode, reply: serde_json::Value) -> Self {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let state = FakeGeminiState {
            status,
            reply,
            calls: calls.clone(),
        };

        let router = Router::new()
            .route("/v1beta/models/:call", post(generate_content))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake upstream");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        Self {
            api_base: format!("http://{}/v1beta", addr),
            calls,
        }
    }

    /// Fake upstream that answers with a single text candidate.
    pub async fn replying(text: &str) -> Self {
        Self::spawn(StatusCode::OK, text_reply(text)).await
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

pub fn text_reply(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 3, "candidatesTokenCount": 5, "totalTokenCount": 8 }
    })
}

async fn generate_content(
    State(state): State<FakeGeminiState>,
    Path(call): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.calls.lock().unwrap().push(RecordedCall {
        model_call: call,
        query,
        body,
    });
    (state.status, Json(state.reply.clone()))
}

/// An address with nothing listening on it.
pub async fn closed_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
