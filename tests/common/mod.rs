use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use reqwest::Client;
use serde_json::Value;

use guild_apply::config::{Config, Variant};

pub const ALLOWED_ORIGIN: &str = "https://apply.example.org";

/// Port nothing listens on; requests to it fail at connect time.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9/";

/// What a mock upstream answers with.
#[derive(Clone)]
pub enum MockReply {
    Json(Value),
    Text(&'static str),
    NoContent,
}

/// One request captured by a mock upstream.
#[derive(Debug, Clone)]
pub struct Received {
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    reply: MockReply,
    received: Arc<Mutex<Vec<Received>>>,
}

/// An in-process HTTP server standing in for the storage API or the webhook.
pub struct MockUpstream {
    pub addr: SocketAddr,
    received: Arc<Mutex<Vec<Received>>>,
}

impl MockUpstream {
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub fn received(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }
}

async fn record(State(state): State<MockState>, headers: HeaderMap, body: Bytes) -> Response {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state
        .received
        .lock()
        .unwrap()
        .push(Received { content_type, body });

    match state.reply {
        MockReply::Json(value) => axum::Json(value).into_response(),
        MockReply::Text(text) => text.into_response(),
        MockReply::NoContent => StatusCode::NO_CONTENT.into_response(),
    }
}

pub async fn spawn_mock(reply: MockReply) -> MockUpstream {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        reply,
        received: received.clone(),
    };
    let app = Router::new()
        .route("/", axum::routing::post(record))
        .layer(DefaultBodyLimit::disable())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock upstream");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock upstream failed");
    });

    MockUpstream { addr, received }
}

/// A running service instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit form-urlencoded data, return (status, content-type, raw body).
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> (StatusCode, Option<String>, String) {
        let resp = self
            .client
            .post(self.url("/"))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        read(resp).await
    }

    /// Submit a JSON body, return (status, content-type, raw body).
    pub async fn submit_json(&self, data: &Value) -> (StatusCode, Option<String>, String) {
        let resp = self
            .client
            .post(self.url("/"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        read(resp).await
    }
}

async fn read(resp: reqwest::Response) -> (StatusCode, Option<String>, String) {
    let status = StatusCode::from_u16(resp.status().as_u16()).unwrap();
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    let body = resp.text().await.unwrap_or_default();
    (status, content_type, body)
}

pub fn test_config(variant: Variant, storage_url: Option<String>, webhook_url: String) -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        variant,
        storage_url,
        webhook_url,
        allowed_origin: Some(ALLOWED_ORIGIN.to_string()),
        max_body_size: 1_048_576,
        log_level: "warn".to_string(),
    }
}

pub async fn spawn_app(config: Config) -> TestApp {
    let app = guild_apply::build_app(config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
    }
}

/// Form answers for a complete `Sheet` application.
pub fn sheet_form(track: &'static str) -> Vec<(&'static str, &'static str)> {
    vec![
        ("account", "Foo.1234"),
        ("discord", "foo"),
        ("guild", "Some Guild [SG]"),
        ("api_key", "ABCD-EFGH"),
        ("killproof", "https://killproof.me/proof/Foo.1234"),
        ("requirements", "yes"),
        ("power_builds", "Quickness Firebrand,Alacrity Mechanist"),
        ("condi_builds", "Condi Virtuoso"),
        ("track", track),
        ("static_logs", "static logs"),
        ("altar_strategy", "left side"),
        ("solo_logs", "solo logs"),
        ("playtimes", "evenings"),
        ("teammates", "Bar.5678,Baz.9012"),
        ("experience", "cleared everything"),
        ("motivation", "friends"),
    ]
}
