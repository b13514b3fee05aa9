//! Router tests driven through `tower::ServiceExt::oneshot`

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::application::services::chat_service::tests::MockLLM;
use crate::application::services::wallet_service::tests::{directory, MockWallets};
use crate::application::services::{ChatService, PaymentService, WalletService};
use crate::domain::entities::TenantProfile;
use crate::domain::traits::{SessionStore, WalletProvider};
use crate::infrastructure::storage::MemorySessionStore;
use crate::infrastructure::wallet::DemoWallets;

use super::{router, AppState};

struct Harness {
    app: Router,
    store: Arc<MemorySessionStore>,
}

fn harness(llm: MockLLM, provider: Arc<dyn WalletProvider>, live_directory: bool) -> Harness {
    harness_at(llm, provider, live_directory, Path::new(env!("CARGO_MANIFEST_DIR")))
}

fn harness_at(llm: MockLLM, provider: Arc<dyn WalletProvider>, live_directory: bool, static_dir: &Path) -> Harness {
    let store = Arc::new(MemorySessionStore::new(40));
    let directory = if live_directory { Some(directory()) } else { None };
    let live = provider.is_live();

    let state = AppState {
        chat: Arc::new(ChatService::new(Arc::new(llm), store.clone(), TenantProfile::default())),
        payments: Arc::new(PaymentService::new(directory.clone(), live, Duration::ZERO)),
        wallets: Arc::new(WalletService::new(provider, directory)),
        default_session_id: Arc::from("default"),
    };

    Harness {
        app: router(state, static_dir),
        store,
    }
}

fn demo_harness(llm: MockLLM) -> Harness {
    harness(llm, Arc::new(DemoWallets), false)
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("request");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_health() {
    let h = demo_harness(MockLLM::replying("unused"));
    let (status, body) = send(h.app, get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "RentBot AI is running!" }));
}

#[tokio::test]
async fn test_chat_returns_reply_and_intent() {
    let h = demo_harness(MockLLM::replying("Perfect! I can help you pay your $1,900 rent."));
    let (status, body) = send(
        h.app,
        json_request(Method::POST, "/api/chat", json!({ "message": "I want to pay my rent" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "Perfect! I can help you pay your $1,900 rent.");
    assert_eq!(
        body["paymentIntent"],
        json!({ "detected": true, "amount": 1900, "message": "Payment of $1900 detected" })
    );
    assert_eq!(body["sessionId"], "default");
    assert_eq!(h.store.history("default").await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_chat_without_intent() {
    let h = demo_harness(MockLLM::replying("Doing well!"));
    let (_, body) = send(
        h.app,
        json_request(Method::POST, "/api/chat", json!({ "message": "Hello, how are you?", "sessionId": "abc" })),
    )
    .await;

    assert_eq!(body["paymentIntent"], json!({ "detected": false }));
    assert_eq!(body["sessionId"], "abc");
    assert_eq!(h.store.history("abc").await.unwrap().len(), 2);
    assert!(h.store.history("default").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_chat_failure_is_500() {
    let h = demo_harness(MockLLM::failing());
    let (status, body) = send(
        h.app,
        json_request(Method::POST, "/api/chat", json!({ "message": "hi" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Failed to process message: "), "{}", error);
    assert!(error.contains("upstream down"));
    assert_eq!(h.store.history("default").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_chat_missing_message_is_500() {
    let h = demo_harness(MockLLM::replying("unused"));
    let (status, body) = send(h.app, json_request(Method::POST, "/api/chat", json!({}))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().starts_with("Failed to process message"));
}

#[tokio::test]
async fn test_payment_demo_mode() {
    let h = demo_harness(MockLLM::replying("unused"));
    let (status, body) = send(
        h.app,
        json_request(Method::POST, "/api/payment", json!({ "amount": 1900, "tenantName": "Demo Tenant" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["fromAddress"], "0xf651bd6d7346195c556e20c9b4e419d5ba06496d");
    assert_eq!(body["toAddress"], "0x9636796c5a674c8307efd7a4bada03b949c23398");
    assert_eq!(body["blockchain"], "ETH-SEPOLIA");
    assert_eq!(body["network"], "testnet");
    assert_eq!(body["circleIntegrated"], false);
    assert_eq!(body["message"], "Payment of $1900 USDC processed successfully!");
}

#[tokio::test]
async fn test_payment_malformed_amount_is_500() {
    let h = demo_harness(MockLLM::replying("unused"));
    let (status, body) = send(
        h.app,
        json_request(Method::POST, "/api/payment", json!({ "amount": "lots", "tenantName": "x" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Payment failed" }));
}

#[tokio::test]
async fn test_payment_uses_live_directory() {
    let h = harness(MockLLM::replying("unused"), Arc::new(MockWallets { fail: false }), true);
    let (_, body) = send(
        h.app,
        json_request(Method::POST, "/api/payment", json!({ "amount": 50.25, "tenantName": "x" })),
    )
    .await;

    assert_eq!(body["fromAddress"], "0xtenant");
    assert_eq!(body["toAddress"], "0xlandlord");
    assert_eq!(body["circleIntegrated"], true);
    assert_eq!(body["amount"], json!(50.25));
}

#[tokio::test]
async fn test_wallet_info_demo() {
    let h = demo_harness(MockLLM::replying("unused"));
    let (status, body) = send(h.app, get("/api/wallet-info")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mode"], "demo");
    assert_eq!(body["message"], "Running in demo mode");
}

#[tokio::test]
async fn test_wallet_info_live() {
    let h = harness(MockLLM::replying("unused"), Arc::new(MockWallets { fail: false }), true);
    let (_, body) = send(h.app, get("/api/wallet-info")).await;

    assert_eq!(body["mode"], "live");
    assert_eq!(body["tenant"]["usdcBalance"], "42.5");
}

#[tokio::test]
async fn test_wallet_info_failure_has_details() {
    let h = harness(MockLLM::replying("unused"), Arc::new(MockWallets { fail: true }), true);
    let (status, body) = send(h.app, get("/api/wallet-info")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch wallet info");
    assert!(body["details"].as_str().unwrap().contains("401"));
}

#[tokio::test]
async fn test_session_lifecycle() {
    let h = demo_harness(MockLLM::replying("ok"));

    let (status, body) = send(h.app.clone(), json_request(Method::POST, "/api/session", json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    let id = body["sessionId"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 36);

    send(
        h.app.clone(),
        json_request(Method::POST, "/api/chat", json!({ "message": "hi", "sessionId": id.clone() })),
    )
    .await;
    assert_eq!(h.store.history(&id).await.unwrap().len(), 2);

    let request = Request::builder()
        .method(Method::DELETE)
        .uri(format!("/api/session/{}", id))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(h.app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cleared"], true);
    assert!(h.store.history(&id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_static_files_are_served() {
    let h = demo_harness(MockLLM::replying("unused"));
    let response = h.app.oneshot(get("/Cargo.toml")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_dotfiles_are_never_served() {
    let root = tempfile::tempdir().unwrap();
    std::fs::write(root.path().join(".env"), "CIRCLE_API_KEY=secret-key\n").unwrap();
    std::fs::create_dir(root.path().join(".git")).unwrap();
    std::fs::write(root.path().join(".git").join("config"), "[core]\n").unwrap();
    std::fs::create_dir(root.path().join("assets")).unwrap();
    std::fs::write(root.path().join("assets").join(".env"), "AIML_API_KEY=other\n").unwrap();
    std::fs::write(root.path().join("index.html"), "<h1>RentBot</h1>").unwrap();

    let h = harness_at(MockLLM::replying("unused"), Arc::new(DemoWallets), false, root.path());

    for uri in ["/.env", "/%2eenv", "/%2Eenv", "/.git/config", "/assets/.env"] {
        let response = h.app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(!String::from_utf8_lossy(&body).contains("API_KEY"), "{}", uri);
    }

    let response = h.app.oneshot(get("/index.html")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_blank_session_id_uses_default() {
    let h = demo_harness(MockLLM::replying("ok"));
    let (status, body) = send(
        h.app,
        json_request(Method::POST, "/api/chat", json!({ "message": "hi", "sessionId": "   " })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sessionId"], "default");
    assert_eq!(h.store.history("default").await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_clearing_blank_session_is_400() {
    let h = demo_harness(MockLLM::replying("unused"));
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/session/%20")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(h.app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Failed to clear session"));
}

#[tokio::test]
async fn test_payment_timestamp_is_utc_millis() {
    let h = demo_harness(MockLLM::replying("unused"));
    let (_, body) = send(
        h.app,
        json_request(Method::POST, "/api/payment", json!({ "amount": 1900, "tenantName": "Demo Tenant" })),
    )
    .await;

    let timestamp = body["timestamp"].as_str().unwrap();
    let parsed = chrono::DateTime::parse_from_rfc3339(timestamp).unwrap();
    assert_eq!(parsed.offset().local_minus_utc(), 0);
    // 2026-01-01T00:00:00.000Z
    assert_eq!(timestamp.len(), 24, "{}", timestamp);
    assert!(timestamp.ends_with('Z'));
    assert_eq!(timestamp.as_bytes()[19], b'.');
}
