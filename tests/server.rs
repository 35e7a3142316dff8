//! End-to-end scenarios through the HTTP facade.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use campus_qa::bot::{Responder, FALLBACK_MESSAGE};
use campus_qa::intents::IntentTable;
use campus_qa::server::{router, AppState};

fn app(intents_json: &str, knowledge: &[&str]) -> axum::Router {
    let intents: IntentTable = serde_json::from_str(intents_json).unwrap();
    let knowledge = knowledge.iter().map(|s| s.to_string()).collect();
    router(AppState {
        responder: Arc::new(Responder::new(intents, knowledge, false)),
    })
}

async fn ask(app: axum::Router, msg: &str) -> String {
    let body = format!("msg={}", urlencode(msg));
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/get")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    json["response"].as_str().unwrap().to_string()
}

fn urlencode(s: &str) -> String {
    s.replace(' ', "+")
}

#[tokio::test]
async fn test_intent_hit_end_to_end() {
    let app = app(
        r#"{"intents": [{"text": ["hello"], "responses": ["Hi there!"]}]}"#,
        &["DeKUT offers a four year engineering programme with hands on labs"],
    );
    assert_eq!(ask(app, "hello there").await, "Hi there!");
}

#[tokio::test]
async fn test_scraped_hit_end_to_end() {
    let fragment = "DeKUT offers a four year engineering programme with hands on labs";
    let app = app(r#"{"intents": []}"#, &[fragment]);
    let response = ask(app, "engineering programme").await;
    assert!(response.contains(fragment), "got: {response}");
}

#[tokio::test]
async fn test_fallback_end_to_end() {
    let app = app(r#"{"intents": []}"#, &[]);
    assert_eq!(ask(app, "anything at all").await, FALLBACK_MESSAGE);
}

#[tokio::test]
async fn test_missing_msg_field_is_a_client_error() {
    let app = app(r#"{"intents": []}"#, &[]);
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/get")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("wrong=field"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn test_chat_page_is_served() {
    let app = app(r#"{"intents": []}"#, &[]);
    let resp = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&bytes).contains("chatbox"));
}
